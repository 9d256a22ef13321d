//! Organization search client

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{ApiError, Result};

pub mod bo_nalog;
#[cfg(test)]
pub mod fixtures;
pub mod models;

#[cfg(test)]
pub use mock::MockBoNalogClient;
pub use bo_nalog::BoNalogClient;
pub use models::{Bfo, Organization, Pageable, SearchInput, SearchOutput, Sort, StatusCode};

/// Organization search operations.
///
/// Implementors perform exactly one request per call. Neither method runs
/// the [`schema`](crate::schema) validators; that is left to the caller.
/// Retry or caching policies belong in a wrapper implementing this trait.
#[async_trait]
pub trait OrganizationSearchApi: Send + Sync {
    /// Run a search and return the decoded JSON body as is
    async fn search_organizations_raw(&self, input: &SearchInput) -> Result<Value>;

    /// Run a search and deserialize the body into [`SearchOutput`].
    ///
    /// A body that is JSON but not shaped like a result page fails with
    /// [`ApiError::Decode`].
    async fn search_organizations(&self, input: &SearchInput) -> Result<SearchOutput> {
        let body = self.search_organizations_raw(input).await?;
        serde_json::from_value(body).map_err(|e| {
            ApiError::Decode(format!("Response is not a search result page: {}", e)).into()
        })
    }
}

/// Search the registry once with a default [`BoNalogClient`] and return the
/// decoded JSON body without checking it.
///
/// Run [`schema::validate_output`](crate::schema::validate_output) on the
/// result to find out whether the server kept to the contract.
pub async fn search_organizations_raw(input: &SearchInput) -> Result<Value> {
    BoNalogClient::new()?.search_organizations_raw(input).await
}

/// Search the registry once with a default [`BoNalogClient`] and deserialize
/// the body into [`SearchOutput`].
///
/// The typed model cannot hold every body the output schema describes. An
/// unknown `statusCode`, for example, fails here with [`ApiError::Decode`]
/// while [`search_organizations_raw`] returns it and leaves the verdict to
/// the schema layer.
///
/// # Example
/// ```no_run
/// # async fn run() -> bo_nalog::Result<()> {
/// use bo_nalog::{SearchInput, search_organizations};
///
/// let page = search_organizations(&SearchInput::new().name("Сбер")).await?;
/// println!("{} organizations", page.total_elements);
/// # Ok(())
/// # }
/// ```
pub async fn search_organizations(input: &SearchInput) -> Result<SearchOutput> {
    BoNalogClient::new()?.search_organizations(input).await
}
