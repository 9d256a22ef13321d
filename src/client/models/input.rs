//! Search input and its query string encoding

use serde::{Deserialize, Serialize};

/// Page size used when the input does not set one
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Page index used when the input does not set one
pub const DEFAULT_PAGE: u32 = 0;

/// Parameters of an organization search.
///
/// Every field is optional. Use the builder methods to set the ones you need.
///
/// # Example
/// ```
/// use bo_nalog::SearchInput;
///
/// let input = SearchInput::new().name("Сбер").page(1).size(5);
/// assert_eq!(input.page, Some(1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchInput {
    /// Organization address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Require every given filter to match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_fields_match: Option<bool>,

    /// Taxpayer identification number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inn: Option<String>,

    /// Organization name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// State registration number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ogrn: Option<String>,

    /// Economic activity code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub okved: Option<String>,

    /// Reporting period (year)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,

    /// Page index (default 0)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Page size (default 20)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

impl SearchInput {
    /// Create an empty search input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by address.
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Require all filters to match.
    pub fn all_fields_match(mut self, all: bool) -> Self {
        self.all_fields_match = Some(all);
        self
    }

    /// Filter by INN.
    pub fn inn(mut self, inn: impl Into<String>) -> Self {
        self.inn = Some(inn.into());
        self
    }

    /// Filter by name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Filter by OGRN.
    pub fn ogrn(mut self, ogrn: impl Into<String>) -> Self {
        self.ogrn = Some(ogrn.into());
        self
    }

    /// Filter by OKVED code.
    pub fn okved(mut self, okved: impl Into<String>) -> Self {
        self.okved = Some(okved.into());
        self
    }

    /// Filter by reporting period.
    pub fn period(mut self, period: impl Into<String>) -> Self {
        self.period = Some(period.into());
        self
    }

    /// Set the page index.
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the page size.
    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Convert to query string parameters.
    ///
    /// `allFieldsMatch`, `page` and `size` are always emitted, falling back to
    /// `false`, [`DEFAULT_PAGE`] and [`DEFAULT_PAGE_SIZE`]. The string filters
    /// are emitted only when set to a non-empty value, so an empty string
    /// cannot be used as a filter.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            (
                "allFieldsMatch",
                self.all_fields_match.unwrap_or(false).to_string(),
            ),
            ("page", self.page.unwrap_or(DEFAULT_PAGE).to_string()),
            ("size", self.size.unwrap_or(DEFAULT_PAGE_SIZE).to_string()),
        ];

        let filters = [
            ("address", &self.address),
            ("inn", &self.inn),
            ("name", &self.name),
            ("ogrn", &self.ogrn),
            ("okved", &self.okved),
            ("period", &self.period),
        ];

        for (key, value) in filters {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                params.push((key, value.to_string()));
            }
        }

        params
    }
}
