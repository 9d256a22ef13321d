//! Organization and accounting statement models

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used by the registry for calendar dates
const DATE_FORMAT: &str = "%Y-%m-%d";

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Registry status of an organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusCode {
    Active,
    Inactive,
}

impl StatusCode {
    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusCode::Active => "ACTIVE",
            StatusCode::Inactive => "INACTIVE",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary of the latest accounting statement (BFO) filed by an organization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bfo {
    /// Reporting period
    pub period: String,

    /// Date the statement was actually filed
    pub actual_bfo_date: Option<String>,

    /// Revenue; `None` when the registry reports `null`
    pub gain_sum: Option<f64>,

    /// Tax form code (KND)
    pub knd: String,

    /// An audit report is attached
    pub has_az: bool,

    /// A consolidated statement is attached
    pub has_ks: bool,

    /// Number of the current correction
    pub actual_correction_number: i64,

    /// Date of the current correction
    pub actual_correction_date: String,

    /// The filer is the Central Bank
    pub is_cb: bool,

    /// BFO period type codes
    pub bfo_period_types: Vec<i64>,
}

impl Bfo {
    /// Correction date as a calendar date, if it is in `YYYY-MM-DD` form
    pub fn actual_correction_date_parsed(&self) -> Option<NaiveDate> {
        parse_date(&self.actual_correction_date)
    }

    /// Filing date as a calendar date
    pub fn actual_bfo_date_parsed(&self) -> Option<NaiveDate> {
        self.actual_bfo_date.as_deref().and_then(parse_date)
    }
}

/// Organization record from the search results.
///
/// Nullable fields are `Option`s but must be present on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// Registry identifier
    pub id: i64,

    /// Taxpayer identification number
    pub inn: String,

    /// Short name
    pub short_name: String,

    /// State registration number
    pub ogrn: String,

    /// Postal code
    pub index: String,

    pub region: String,
    pub district: Option<String>,
    pub city: Option<String>,
    pub settlement: Option<String>,
    pub street: String,
    pub house: String,
    pub building: Option<String>,
    pub office: Option<String>,

    /// Economic activity code (OKVED2)
    pub okved2: String,

    /// Organizational-legal form code
    pub okopf: i64,

    pub okato: Option<String>,
    pub okpo: Option<String>,
    pub okfs: Option<String>,

    pub status_code: StatusCode,

    /// Date the status was assigned
    pub status_date: String,

    /// Latest accounting statement
    pub bfo: Bfo,
}

impl Organization {
    pub fn is_active(&self) -> bool {
        self.status_code == StatusCode::Active
    }

    /// Status date as a calendar date, if it is in `YYYY-MM-DD` form
    pub fn status_date_parsed(&self) -> Option<NaiveDate> {
        parse_date(&self.status_date)
    }

    /// Postal address assembled from the non-empty address parts
    pub fn address_line(&self) -> String {
        let parts = [
            Some(self.index.as_str()),
            Some(self.region.as_str()),
            self.district.as_deref(),
            self.city.as_deref(),
            self.settlement.as_deref(),
            Some(self.street.as_str()),
            Some(self.house.as_str()),
            self.building.as_deref(),
            self.office.as_deref(),
        ];

        parts
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
