//! Test fixtures and builders for registry model types
//!
//! Provides builder patterns for creating test data with sensible defaults.
//! Import via `use crate::client::fixtures::*` in test modules.

#![allow(dead_code)]

use super::models::{Bfo, Organization, Pageable, SearchOutput, Sort, StatusCode};

// ============================================================================
// BfoBuilder
// ============================================================================

/// Builder for creating test Bfo instances.
#[derive(Debug, Clone)]
pub struct BfoBuilder {
    bfo: Bfo,
}

impl BfoBuilder {
    pub fn new() -> Self {
        Self {
            bfo: Bfo {
                period: "2023".to_string(),
                actual_bfo_date: Some("2024-03-28".to_string()),
                gain_sum: Some(1_250_000.0),
                knd: "0710099".to_string(),
                has_az: true,
                has_ks: false,
                actual_correction_number: 0,
                actual_correction_date: "2024-03-28".to_string(),
                is_cb: false,
                bfo_period_types: vec![12],
            },
        }
    }

    pub fn period(mut self, period: impl Into<String>) -> Self {
        self.bfo.period = period.into();
        self
    }

    pub fn actual_bfo_date(mut self, date: Option<&str>) -> Self {
        self.bfo.actual_bfo_date = date.map(str::to_string);
        self
    }

    pub fn gain_sum(mut self, sum: Option<f64>) -> Self {
        self.bfo.gain_sum = sum;
        self
    }

    pub fn build(self) -> Bfo {
        self.bfo
    }
}

impl Default for BfoBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// OrganizationBuilder
// ============================================================================

/// Builder for creating test Organization instances.
///
/// # Example
/// ```ignore
/// let org = OrganizationBuilder::new(42)
///     .short_name("ПАО СБЕРБАНК")
///     .status(StatusCode::Inactive)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct OrganizationBuilder {
    org: Organization,
}

impl OrganizationBuilder {
    /// Create a new builder with the given registry ID.
    pub fn new(id: i64) -> Self {
        Self {
            org: Organization {
                id,
                inn: format!("77{:08}", id),
                short_name: format!("ООО \"ОРГАНИЗАЦИЯ {}\"", id),
                ogrn: format!("10277{:08}", id),
                index: "117312".to_string(),
                region: "Москва".to_string(),
                district: None,
                city: None,
                settlement: None,
                street: "ул. Вавилова".to_string(),
                house: "д. 19".to_string(),
                building: None,
                office: None,
                okved2: "64.19".to_string(),
                okopf: 12247,
                okato: Some("45293554000".to_string()),
                okpo: Some("00032537".to_string()),
                okfs: Some("16".to_string()),
                status_code: StatusCode::Active,
                status_date: "2002-08-16".to_string(),
                bfo: BfoBuilder::new().build(),
            },
        }
    }

    pub fn short_name(mut self, name: impl Into<String>) -> Self {
        self.org.short_name = name.into();
        self
    }

    pub fn inn(mut self, inn: impl Into<String>) -> Self {
        self.org.inn = inn.into();
        self
    }

    pub fn status(mut self, status: StatusCode) -> Self {
        self.org.status_code = status;
        self
    }

    pub fn status_date(mut self, date: impl Into<String>) -> Self {
        self.org.status_date = date.into();
        self
    }

    pub fn office(mut self, office: Option<&str>) -> Self {
        self.org.office = office.map(str::to_string);
        self
    }

    pub fn bfo(mut self, bfo: Bfo) -> Self {
        self.org.bfo = bfo;
        self
    }

    pub fn build(self) -> Organization {
        self.org
    }
}

// ============================================================================
// SearchOutputBuilder
// ============================================================================

/// Builder for consistent result pages.
///
/// Derived fields (`totalPages`, `first`, `last`, `empty`, counts, offset)
/// are computed in `build()` from page, size, total and content.
#[derive(Debug, Clone)]
pub struct SearchOutputBuilder {
    number: u64,
    size: u64,
    total_elements: u64,
    content: Vec<Organization>,
}

impl SearchOutputBuilder {
    pub fn new() -> Self {
        Self {
            number: 0,
            size: 20,
            total_elements: 0,
            content: Vec::new(),
        }
    }

    /// Set page index and page size.
    pub fn page(mut self, number: u64, size: u64) -> Self {
        self.number = number;
        self.size = size;
        self
    }

    pub fn total_elements(mut self, total: u64) -> Self {
        self.total_elements = total;
        self
    }

    pub fn content(mut self, content: Vec<Organization>) -> Self {
        self.content = content;
        self
    }

    pub fn build(self) -> SearchOutput {
        let total_pages = if self.size == 0 {
            0
        } else {
            self.total_elements.div_ceil(self.size)
        };
        let sort = Sort {
            sorted: false,
            unsorted: true,
            empty: true,
        };
        let count = self.content.len() as u64;

        SearchOutput {
            pageable: Pageable {
                page_number: self.number,
                page_size: self.size,
                sort,
                offset: self.number * self.size,
                paged: true,
                unpaged: false,
            },
            total_pages,
            total_elements: self.total_elements,
            last: self.number + 1 >= total_pages,
            first: self.number == 0,
            number_of_elements: count,
            size: self.size,
            number: self.number,
            sort,
            empty: count == 0,
            content: self.content,
        }
    }
}

impl Default for SearchOutputBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_organization_builder_defaults() {
        let org = OrganizationBuilder::new(5).build();
        assert_eq!(org.id, 5);
        assert_eq!(org.inn, "7700000005");
        assert_eq!(org.status_code, StatusCode::Active);
    }

    #[test]
    fn test_bfo_builder() {
        let bfo = BfoBuilder::new().period("2022").gain_sum(None).build();
        assert_eq!(bfo.period, "2022");
        assert!(bfo.gain_sum.is_none());
    }
}
