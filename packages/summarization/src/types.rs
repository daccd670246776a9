//! Data model: the inbound document reference and the persisted records.
//!
//! Records are independent and immutable once written; reprocessing the same
//! input overwrites them wholesale. Nothing relates a summary record to a
//! comparison record beyond the shared key-derivation convention.

use serde::{Deserialize, Serialize};

/// Identifies the source object a triggering event points at.
///
/// Created from the inbound event, read-only, discarded after extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRef {
    /// Source bucket name
    pub bucket: String,
    /// Object key, percent-decoded
    pub key: String,
}

impl DocumentRef {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }
}

/// Persisted summary record, `{"summary": "..."}`.
///
/// The field defaults to empty on read so a record written without it still
/// round-trips instead of failing the comparison workflow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRecord {
    #[serde(default)]
    pub summary: String,
}

impl SummaryRecord {
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
        }
    }
}

/// Persisted comparison record, `{"comparison": "..."}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRecord {
    #[serde(default)]
    pub comparison: String,
}

impl ComparisonRecord {
    pub fn new(comparison: impl Into<String>) -> Self {
        Self {
            comparison: comparison.into(),
        }
    }
}
