//! Mock collaborators for exercising the workflows without AWS or real PDFs.
//!
//! These are useful for testing applications built on this library as well
//! as for the library's own integration tests.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::error::{ExtractionError, GenerationError, StoreError};
use crate::stores::MemoryStore;
use crate::traits::{ObjectStore, TextExtractor, TextGenerator};

/// Scripted text generator.
///
/// Replies with the response registered for the first matching prompt
/// fragment, falling back to a default. Records every prompt it sees for
/// assertions.
#[derive(Default)]
pub struct MockGenerator {
    responses: Vec<(String, String)>,
    default_response: String,
    fail: bool,
    prompts: RwLock<Vec<String>>,
}

impl MockGenerator {
    /// Create a mock that answers everything with a fixed placeholder.
    pub fn new() -> Self {
        Self {
            default_response: "generated text".to_string(),
            ..Default::default()
        }
    }

    /// Respond with `response` to prompts containing `fragment`.
    pub fn with_response(
        mut self,
        fragment: impl Into<String>,
        response: impl Into<String>,
    ) -> Self {
        self.responses.push((fragment.into(), response.into()));
        self
    }

    /// Replace the fallback response.
    pub fn with_default_response(mut self, response: impl Into<String>) -> Self {
        self.default_response = response.into();
        self
    }

    /// Make every call fail with a service error.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Prompts seen so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.read().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts.write().unwrap().push(prompt.to_string());

        if self.fail {
            return Err(GenerationError::Invoke("mock generator failure".into()));
        }

        for (fragment, response) in &self.responses {
            if prompt.contains(fragment) {
                return Ok(response.clone());
            }
        }
        Ok(self.default_response.clone())
    }
}

/// Extractor that returns scripted text without parsing anything.
#[derive(Debug, Default)]
pub struct MockExtractor {
    text: String,
    fail: bool,
}

impl MockExtractor {
    /// Return `text` for every document.
    pub fn returning(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fail: false,
        }
    }

    /// Fail every call as if the bytes were malformed.
    pub fn failing() -> Self {
        Self {
            text: String::new(),
            fail: true,
        }
    }
}

impl TextExtractor for MockExtractor {
    fn extract(&self, _bytes: &[u8]) -> Result<String, ExtractionError> {
        if self.fail {
            return Err(ExtractionError::Parse("mock extraction failure".into()));
        }
        Ok(self.text.clone())
    }
}

/// Store whose reads fail with a non-NotFound error for chosen keys.
///
/// Wraps a [`MemoryStore`] so everything else behaves normally. Used to
/// check that transient storage faults are not mistaken for absent objects.
pub struct FaultyStore {
    inner: MemoryStore,
    failing_keys: Vec<String>,
}

impl FaultyStore {
    pub fn new(inner: MemoryStore) -> Self {
        Self {
            inner,
            failing_keys: Vec::new(),
        }
    }

    /// Fail `get` for this key with a transient-style error.
    pub fn with_failing_key(mut self, key: impl Into<String>) -> Self {
        self.failing_keys.push(key.into());
        self
    }

    /// The wrapped store, for seeding and assertions.
    pub fn inner(&self) -> &MemoryStore {
        &self.inner
    }
}

#[async_trait]
impl ObjectStore for FaultyStore {
    async fn get(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StoreError> {
        if self.failing_keys.iter().any(|failing| failing == key) {
            return Err(StoreError::Other("simulated transport fault".into()));
        }
        self.inner.get(bucket, key).await
    }

    async fn put(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StoreError> {
        self.inner.put(bucket, key, body, content_type).await
    }
}
