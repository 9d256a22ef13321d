//! bo-nalog - typed client for the FNS accounting statements registry
//!
//! The crate has two halves:
//!
//! - [`client`]: builds the query for `GET /advanced-search/organizations`
//!   on `bo.nalog.gov.ru`, performs the request and decodes the body.
//! - [`schema`]: runtime validation of search input and output values
//!   against embedded JSON Schema definitions.
//!
//! The client never validates what it returns. [`search_organizations_raw`]
//! hands back the decoded body as is; callers that do not trust the remote
//! server run it through [`schema::validate_output`]. The typed
//! [`search_organizations`] additionally deserializes into [`SearchOutput`],
//! so a body the model cannot represent fails there with
//! [`ApiError::Decode`].
//!
//! ```no_run
//! # async fn run() -> bo_nalog::Result<()> {
//! use bo_nalog::{BoNalogClient, OrganizationSearchApi, SearchInput, schema};
//!
//! let client = BoNalogClient::new()?;
//! let body = client
//!     .search_organizations_raw(&SearchInput::new().inn("7707083893"))
//!     .await?;
//!
//! if let schema::ValidationResult::Invalid(violations) = schema::validate_output(&body) {
//!     eprintln!("unexpected response:\n{violations}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod schema;

pub use client::{
    Bfo, BoNalogClient, Organization, OrganizationSearchApi, Pageable, SearchInput, SearchOutput,
    Sort, StatusCode, search_organizations, search_organizations_raw,
};
pub use config::ClientConfig;
pub use error::{ApiError, ConfigError, Error, Result};
