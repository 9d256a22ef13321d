//! Consistency rules of the paginated envelope

use serde_json::Value;

use super::Violation;
use crate::client::models::SearchOutput;

/// Paging fields the rules look at.
///
/// Counts are kept as `f64` so that integral floats such as `1.0`, which the
/// schema's `integer` type accepts, compare like their integer form.
struct Envelope {
    content_len: f64,
    number_of_elements: f64,
    size: f64,
    number: f64,
    total_pages: f64,
    empty: bool,
    first: bool,
    last: bool,
}

impl Envelope {
    fn from_output(output: &SearchOutput) -> Self {
        Self {
            content_len: output.content.len() as f64,
            number_of_elements: output.number_of_elements as f64,
            size: output.size as f64,
            number: output.number as f64,
            total_pages: output.total_pages as f64,
            empty: output.empty,
            first: output.first,
            last: output.last,
        }
    }

    /// `None` if a paging field is absent or has the wrong JSON type
    fn from_value(value: &Value) -> Option<Self> {
        Some(Self {
            content_len: value.get("content")?.as_array()?.len() as f64,
            number_of_elements: value.get("numberOfElements")?.as_f64()?,
            size: value.get("size")?.as_f64()?,
            number: value.get("number")?.as_f64()?,
            total_pages: value.get("totalPages")?.as_f64()?,
            empty: value.get("empty")?.as_bool()?,
            first: value.get("first")?.as_bool()?,
            last: value.get("last")?.as_bool()?,
        })
    }

    fn violations(&self) -> Vec<Violation> {
        let mut violations = Vec::new();

        if self.number_of_elements > self.size {
            violations.push(Violation::envelope(
                "/numberOfElements",
                format!(
                    "numberOfElements {} exceeds page size {}",
                    self.number_of_elements, self.size
                ),
            ));
        }

        if self.number_of_elements != self.content_len {
            violations.push(Violation::envelope(
                "/numberOfElements",
                format!(
                    "numberOfElements {} does not match {} content entries",
                    self.number_of_elements, self.content_len
                ),
            ));
        }

        if self.empty != (self.content_len == 0.0) {
            violations.push(Violation::envelope(
                "/empty",
                format!(
                    "empty is {} but content has {} entries",
                    self.empty, self.content_len
                ),
            ));
        }

        if self.first != (self.number == 0.0) {
            violations.push(Violation::envelope(
                "/first",
                format!("first is {} on page {}", self.first, self.number),
            ));
        }

        if self.last != (self.number + 1.0 >= self.total_pages) {
            violations.push(Violation::envelope(
                "/last",
                format!(
                    "last is {} on page {} of {}",
                    self.last, self.number, self.total_pages
                ),
            ));
        }

        violations
    }
}

/// Check the paging fields of a page against each other and its content.
///
/// Rules:
/// - `numberOfElements <= size`
/// - `numberOfElements == content.len()`
/// - `empty == content.is_empty()`
/// - `first == (number == 0)`
/// - `last == (number + 1 >= totalPages)`
pub fn envelope_violations(output: &SearchOutput) -> Vec<Violation> {
    Envelope::from_output(output).violations()
}

/// Same rules as [`envelope_violations`], read straight from a response body.
///
/// Bodies missing a paging field yield nothing here; the structural check
/// reports those.
pub fn envelope_violations_in(value: &Value) -> Vec<Violation> {
    Envelope::from_value(value)
        .map(|envelope| envelope.violations())
        .unwrap_or_default()
}
