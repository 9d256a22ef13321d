//! Paginated search response envelope

use serde::{Deserialize, Serialize};

use super::organization::Organization;
use crate::schema::{self, Violation};

/// Sort state of a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    pub sorted: bool,
    pub unsorted: bool,
    pub empty: bool,
}

/// Pagination descriptor echoed back by the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pageable {
    /// Page index
    pub page_number: u64,

    /// Page size
    pub page_size: u64,

    pub sort: Sort,

    /// Offset of the first element of the page
    pub offset: u64,

    pub paged: bool,
    pub unpaged: bool,
}

/// One page of organization search results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOutput {
    /// Organizations on this page, in registry order
    pub content: Vec<Organization>,

    pub pageable: Pageable,

    pub total_pages: u64,
    pub total_elements: u64,

    /// This is the final page
    pub last: bool,

    /// This is page 0
    pub first: bool,

    /// Number of organizations in `content`
    pub number_of_elements: u64,

    /// Requested page size
    pub size: u64,

    /// Current page index
    pub number: u64,

    pub sort: Sort,

    /// `content` is empty
    pub empty: bool,
}

impl SearchOutput {
    /// Envelope invariants this page breaks; empty for a consistent page
    pub fn envelope_violations(&self) -> Vec<Violation> {
        schema::envelope_violations(self)
    }
}
