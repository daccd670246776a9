//! Bedrock-backed text generation.
//!
//! One `InvokeModel` call per prompt. The response envelope is loosely
//! specified upstream, so only the `output` field is read, with an explicit
//! empty-string fallback when it is absent.

use async_trait::async_trait;
use aws_sdk_bedrockruntime::primitives::Blob;
use aws_sdk_bedrockruntime::Client;
use serde::{Deserialize, Serialize};

use crate::error::GenerationError;
use crate::traits::TextGenerator;

/// Model invoked when no `MODEL_ID` is configured.
pub const DEFAULT_MODEL_ID: &str = "amazon.nova-pro-v1:0";

/// Text generator backed by the Bedrock runtime `InvokeModel` API.
#[derive(Clone, Debug)]
pub struct BedrockGenerator {
    client: Client,
    model_id: String,
}

impl BedrockGenerator {
    /// Create a generator against [`DEFAULT_MODEL_ID`].
    pub fn new(client: Client) -> Self {
        Self {
            client,
            model_id: DEFAULT_MODEL_ID.to_string(),
        }
    }

    /// Override the model id.
    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    /// The model this generator invokes.
    pub fn model_id(&self) -> &str {
        &self.model_id
    }
}

#[derive(Serialize)]
struct InvokeRequest<'a> {
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: Vec<ContentBlock<'a>>,
}

#[derive(Serialize)]
struct ContentBlock<'a> {
    text: &'a str,
}

impl<'a> InvokeRequest<'a> {
    fn user(prompt: &'a str) -> Self {
        Self {
            messages: vec![Message {
                role: "user",
                content: vec![ContentBlock { text: prompt }],
            }],
        }
    }
}

/// Response envelope; only the `output` field is read.
#[derive(Debug, Deserialize)]
struct ResponseEnvelope {
    #[serde(default)]
    output: Option<serde_json::Value>,
}

impl ResponseEnvelope {
    /// The generated text, trimmed; empty when the field is absent.
    ///
    /// A non-string value is rendered as its JSON text rather than failing,
    /// so a shape drift in the service response still yields a persistable
    /// record.
    fn output_text(self) -> String {
        let text = match self.output {
            None => String::new(),
            Some(serde_json::Value::String(text)) => text,
            Some(other) => other.to_string(),
        };
        text.trim().to_string()
    }
}

#[async_trait]
impl TextGenerator for BedrockGenerator {
    #[tracing::instrument(skip(self, prompt), fields(model_id = %self.model_id))]
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let body = serde_json::to_vec(&InvokeRequest::user(prompt))?;

        let response = self
            .client
            .invoke_model()
            .model_id(&self.model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(body))
            .send()
            .await
            .map_err(|err| GenerationError::Invoke(Box::new(err.into_service_error())))?;

        let envelope: ResponseEnvelope = serde_json::from_slice(response.body().as_ref())?;
        Ok(envelope.output_text())
    }
}
