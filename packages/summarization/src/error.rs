//! Typed errors for the summarization pipeline.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so callers can match
//! on the variants that matter, in particular the missing-object case that
//! the comparison workflow treats as expected state.

use thiserror::Error;

/// Errors raised while turning document bytes into text.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// Document bytes were malformed or unreadable
    #[error("failed to extract document text: {0}")]
    Parse(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Errors raised by object storage backends.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No object exists at the key
    #[error("object not found: {bucket}/{key}")]
    NotFound { bucket: String, key: String },

    /// The caller may not read or write the key
    #[error("access denied: {bucket}/{key}")]
    AccessDenied { bucket: String, key: String },

    /// Any other storage failure (transport, throttling, ...)
    #[error("storage error: {0}")]
    Other(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Errors raised while invoking the text-generation service.
///
/// A well-formed response that merely lacks generated text is not an error;
/// that case degrades to an empty string at the call site.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The inference call itself failed
    #[error("inference call failed: {0}")]
    Invoke(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The response body was not valid JSON
    #[error("inference response was not valid JSON: {0}")]
    Envelope(#[from] serde_json::Error),
}

/// The input object key does not carry the expected document suffix.
#[derive(Debug, Error)]
#[error("object key does not end in {expected:?}: {key}")]
pub struct KeyError {
    pub key: String,
    pub expected: &'static str,
}

/// Top-level pipeline error, one variant per collaborator.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("generation failed: {0}")]
    Generation(#[from] GenerationError),

    #[error("storage failed: {0}")]
    Store(#[from] StoreError),

    #[error(transparent)]
    Key(#[from] KeyError),

    /// A persisted record could not be encoded or decoded
    #[error("record JSON error: {0}")]
    Record(#[from] serde_json::Error),
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;
