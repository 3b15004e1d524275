//! Reusable formatting utilities for report values

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

/// Placeholder for values the API did not provide
pub const NOT_AVAILABLE: &str = "N/A";

/// Format a UTC timestamp for display.
///
/// # Example output
/// `2024-03-15 08:30:00 UTC`
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Format an optional timestamp, "N/A" when absent
pub fn format_optional_datetime(dt: Option<&DateTime<Utc>>) -> String {
    dt.map(format_datetime)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Text value, "N/A" when empty
pub fn or_not_available(value: &str) -> String {
    if value.trim().is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        value.to_string()
    }
}

/// Comma-separated language list, "N/A" when empty
pub fn join_languages(languages: &BTreeSet<String>) -> String {
    if languages.is_empty() {
        return NOT_AVAILABLE.to_string();
    }
    languages
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
