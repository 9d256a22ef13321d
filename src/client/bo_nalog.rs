//! bo.nalog.gov.ru client implementation

use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Client as HttpClient, Url};
use serde_json::Value;

use super::OrganizationSearchApi;
use super::models::SearchInput;
use crate::config::ClientConfig;
use crate::error::{ApiError, ConfigError, Result};

/// Registry host
const API_BASE_URL: &str = "https://bo.nalog.gov.ru";

/// Organization search endpoint
const SEARCH_PATH: &str = "/advanced-search/organizations";

/// Longest response body excerpt kept in logs
const LOG_BODY_LIMIT: usize = 200;

/// Client for the FNS accounting statements registry.
///
/// Holds a pooled `reqwest` client and no other state, so one instance can
/// serve any number of concurrent searches (wrap it in `Arc` to share).
#[derive(Debug, Clone)]
pub struct BoNalogClient {
    http: HttpClient,
    base_url: String,
}

impl BoNalogClient {
    /// Create a client with the default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client with custom HTTP settings
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::build(API_BASE_URL.to_string(), &config)
    }

    /// Create a client that talks to another host, e.g. a local mock server.
    ///
    /// The endpoint path stays `/advanced-search/organizations`.
    pub fn with_base_url(base_url: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let base_url = base_url.into();
        Url::parse(&base_url)
            .map_err(|e| ConfigError::Invalid(format!("base URL {:?}: {}", base_url, e)))?;
        Self::build(base_url.trim_end_matches('/').to_string(), &config)
    }

    fn build(base_url: String, config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = HttpClient::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    /// Full URL of the search endpoint, without query parameters
    pub fn search_url(&self) -> String {
        format!("{}{}", self.base_url, SEARCH_PATH)
    }
}

fn excerpt(body: &str) -> String {
    body.chars().take(LOG_BODY_LIMIT).collect()
}

#[async_trait]
impl OrganizationSearchApi for BoNalogClient {
    async fn search_organizations_raw(&self, input: &SearchInput) -> Result<Value> {
        let url = self.search_url();
        let params = input.to_query_params();
        log::debug!("GET {} {:?}", url, params);

        let response = self
            .http
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        log::debug!("{} responded with {}", SEARCH_PATH, status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::warn!(
                "Organization search failed with status {}: {}",
                status.as_u16(),
                excerpt(&body)
            );
            return Err(ApiError::Http {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let body = response.bytes().await.map_err(ApiError::from)?;
        serde_json::from_slice(&body).map_err(|e| {
            log::warn!(
                "Organization search returned a non-JSON body: {}",
                excerpt(&String::from_utf8_lossy(&body))
            );
            ApiError::Decode(format!("Failed to parse response: {}", e)).into()
        })
    }
}
