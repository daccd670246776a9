//! Collaborator seams: object storage, text extraction, text generation.
//!
//! The workflows in [`crate::pipeline`] are generic over these traits so
//! they can run against the AWS backends in production and the mocks in
//! [`crate::testing`] everywhere else.

use async_trait::async_trait;

use crate::error::{ExtractionError, GenerationError, StoreError};

/// Bucket/key-addressed blob storage.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Fetch the full object body.
    async fn get(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StoreError>;

    /// Write an object wholesale, overwriting any existing body.
    async fn put(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StoreError>;
}

/// Turns raw document bytes into plain text.
pub trait TextExtractor: Send + Sync {
    /// Concatenated per-page text in page order, trimmed of leading and
    /// trailing whitespace.
    ///
    /// Empty output is valid (a document with no extractable text);
    /// malformed input fails outright, with no partial extraction.
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError>;
}

/// Submits one prompt to a hosted text-generation endpoint.
///
/// One prompt, one call: no batching, streaming, or retries. Transport and
/// service faults surface as [`GenerationError`] unmodified.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}
