//! Display and form-input helpers

use chrono::{DateTime, NaiveDate};

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Due date for cards, "No Deadline" when unset
pub fn due_date_label(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => "No Deadline".to_string(),
    }
}

/// Comment timestamp in local-agnostic `YYYY-MM-DD HH:MM`; unparseable
/// values are shown as sent
pub fn timestamp_label(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Value of an `<input type="date">`; empty means no date
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_INPUT_FORMAT).ok()
}

pub fn date_input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_INPUT_FORMAT).to_string()).unwrap_or_default()
}

/// Trimmed text, `None` when blank
pub fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
