//! Sibling-key derivation for output records.
//!
//! Output objects live next to the input key: `reports/q1.pdf` yields
//! `reports/q1_summary.json`, `reports/q1_previous_summary.json`, and
//! `reports/q1_comparison.json`. Only the trailing suffix is replaced, and a
//! key without the suffix is rejected outright rather than allowed to
//! collide with its own derived names.

use crate::error::KeyError;

/// Document suffix the triggering events are filtered on.
pub const DOCUMENT_SUFFIX: &str = ".pdf";

const SUMMARY_SUFFIX: &str = "_summary.json";
const PREVIOUS_SUMMARY_SUFFIX: &str = "_previous_summary.json";
const COMPARISON_SUFFIX: &str = "_comparison.json";

/// The three output keys derived from one input key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedKeys {
    /// Where the summary record is written
    pub summary: String,
    /// Where the comparison workflow looks for the prior summary
    pub previous_summary: String,
    /// Where the comparison record is written
    pub comparison: String,
}

impl DerivedKeys {
    /// Derive the sibling keys for a document key ending in [`DOCUMENT_SUFFIX`].
    pub fn for_document(key: &str) -> Result<Self, KeyError> {
        let stem = key.strip_suffix(DOCUMENT_SUFFIX).ok_or_else(|| KeyError {
            key: key.to_string(),
            expected: DOCUMENT_SUFFIX,
        })?;
        Ok(Self {
            summary: format!("{stem}{SUMMARY_SUFFIX}"),
            previous_summary: format!("{stem}{PREVIOUS_SUMMARY_SUFFIX}"),
            comparison: format!("{stem}{COMPARISON_SUFFIX}"),
        })
    }
}
