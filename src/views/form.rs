//! Form field parsing shared by the create forms
//!
//! Forms hold raw input strings; these helpers turn them into payload
//! values. Anything that fails to parse leaves the form unsubmittable.

use chrono::NaiveDate;

use crate::models::Id;

/// Trimmed text, or `None` when blank
pub fn required_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// `None` when blank, otherwise the input exactly as typed
pub fn optional_text(raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

/// Positive, finite hours
pub fn parse_hours(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|h| h.is_finite() && *h > 0.0)
}

/// `YYYY-MM-DD`, as produced by a date input
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Value of a `<select>`: an empty string means nothing is selected
pub fn parse_id(raw: &str) -> Option<Id> {
    raw.trim().parse().ok()
}
