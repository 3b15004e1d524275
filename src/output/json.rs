//! JSON output formatting

use chrono::Utc;
use serde::Serialize;

/// Snapshot wrapped with report metadata
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    /// The report payload
    pub data: T,

    /// When and by which version the report was produced
    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Serialize)]
pub struct Metadata {
    /// Generation time (RFC 3339)
    pub timestamp: String,

    /// reposnap version
    pub version: String,
}

impl<T> JsonOutput<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: Metadata {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}

/// Format data as pretty-printed JSON with metadata
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(data))
}
