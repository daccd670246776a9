//! PDF summarize-and-compare pipeline.
//!
//! Reacts to "a new document object exists at location L" events: pulls the
//! object, extracts its text, asks a hosted model for a structured summary,
//! and optionally diffs it against the previously stored summary for the
//! same document series. Results are written back as JSON records under
//! keys derived from the input key.
//!
//! External collaborators (object storage, text extraction, generation) sit
//! behind narrow traits so the workflows can run against mocks; the AWS
//! backends live behind the `aws` feature.
//!
//! # Usage
//!
//! ```rust,ignore
//! use summarization::{summarize_document, DocumentRef, MemoryStore, PdfExtractor};
//! use summarization::testing::MockGenerator;
//!
//! let store = MemoryStore::new();
//! let doc = DocumentRef::new("uploads", "reports/q1.pdf");
//! let outcome = summarize_document(
//!     &doc, "summaries", &store, &PdfExtractor::new(), &MockGenerator::new(),
//! ).await?;
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Collaborator seams (ObjectStore, TextExtractor, TextGenerator)
//! - [`pipeline`] - The two workflows (summarize, summarize-then-compare)
//! - [`keys`] - Sibling-key derivation for output records
//! - [`prompts`] - Prompt construction and the truncation cap
//! - [`stores`] - Storage implementations (MemoryStore, S3Store)
//! - [`testing`] - Mock implementations for testing

pub mod error;
pub mod keys;
pub mod pdf;
pub mod pipeline;
pub mod prompts;
pub mod stores;
pub mod testing;
pub mod traits;
pub mod types;

#[cfg(feature = "aws")]
pub mod bedrock;

// Re-export core types at crate root
pub use error::{
    ExtractionError, GenerationError, KeyError, PipelineError, Result, StoreError,
};
pub use keys::{DerivedKeys, DOCUMENT_SUFFIX};
pub use pdf::PdfExtractor;
pub use pipeline::{compare_document, summarize_document, CompareOutcome, SummarizeOutcome};
pub use prompts::{
    compare_prompt, summarize_prompt, MAX_DOCUMENT_CHARS, NO_PREVIOUS_SUMMARY,
};
pub use stores::MemoryStore;
pub use traits::{ObjectStore, TextExtractor, TextGenerator};
pub use types::{ComparisonRecord, DocumentRef, SummaryRecord};

#[cfg(feature = "aws")]
pub use bedrock::{BedrockGenerator, DEFAULT_MODEL_ID};
#[cfg(feature = "aws")]
pub use stores::S3Store;
