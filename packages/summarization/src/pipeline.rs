//! The two workflows: summarize a document, and summarize-then-compare.
//!
//! Both are linear get → extract → generate → put sequences over injected
//! collaborators. Each invocation is independent: no shared state, no
//! intra-invocation concurrency, no retries. Records are overwritten
//! wholesale; if the compare workflow fails between its two writes, the
//! summary stays written (partial completion is accepted, not rolled back).

use tracing::{debug, info};

use crate::error::{Result, StoreError};
use crate::keys::DerivedKeys;
use crate::prompts::{compare_prompt, summarize_prompt, NO_PREVIOUS_SUMMARY};
use crate::traits::{ObjectStore, TextExtractor, TextGenerator};
use crate::types::{ComparisonRecord, DocumentRef, SummaryRecord};

/// Content type every persisted record is written with.
const RECORD_CONTENT_TYPE: &str = "application/json";

/// Outcome of the summarize workflow.
#[derive(Debug, Clone)]
pub struct SummarizeOutcome {
    /// Key the summary record was written under
    pub summary_key: String,
    /// The generated summary text (may be empty)
    pub summary: String,
}

/// Outcome of the compare workflow.
#[derive(Debug, Clone)]
pub struct CompareOutcome {
    /// Key the new summary record was written under
    pub summary_key: String,
    /// Key the comparison record was written under
    pub comparison_key: String,
    /// The generated summary text
    pub summary: String,
    /// The generated comparison text
    pub comparison: String,
}

/// Summarize one document: fetch, extract, generate, persist.
#[tracing::instrument(skip_all, fields(bucket = %doc.bucket, key = %doc.key))]
pub async fn summarize_document<S, X, G>(
    doc: &DocumentRef,
    output_bucket: &str,
    store: &S,
    extractor: &X,
    generator: &G,
) -> Result<SummarizeOutcome>
where
    S: ObjectStore,
    X: TextExtractor,
    G: TextGenerator,
{
    let keys = DerivedKeys::for_document(&doc.key)?;
    let summary = generate_summary(doc, store, extractor, generator).await?;

    let record = SummaryRecord::new(summary.clone());
    put_record(store, output_bucket, &keys.summary, &record).await?;
    info!(key = %keys.summary, bucket = %output_bucket, "summary persisted");

    Ok(SummarizeOutcome {
        summary_key: keys.summary,
        summary,
    })
}

/// Summarize one document and compare the result against the previously
/// stored summary for the series.
///
/// A missing previous-summary record is the expected first-run state and is
/// replaced by [`NO_PREVIOUS_SUMMARY`]; any other fetch failure keeps
/// failing loudly so an outage is never mistaken for "no history".
#[tracing::instrument(skip_all, fields(bucket = %doc.bucket, key = %doc.key))]
pub async fn compare_document<S, X, G>(
    doc: &DocumentRef,
    output_bucket: &str,
    store: &S,
    extractor: &X,
    generator: &G,
) -> Result<CompareOutcome>
where
    S: ObjectStore,
    X: TextExtractor,
    G: TextGenerator,
{
    let keys = DerivedKeys::for_document(&doc.key)?;
    let new_summary = generate_summary(doc, store, extractor, generator).await?;

    let previous_summary = match store.get(output_bucket, &keys.previous_summary).await {
        Ok(body) => serde_json::from_slice::<SummaryRecord>(&body)?.summary,
        Err(StoreError::NotFound { .. }) => {
            debug!(key = %keys.previous_summary, "no previous summary record");
            NO_PREVIOUS_SUMMARY.to_string()
        }
        Err(err) => return Err(err.into()),
    };

    let comparison = generator
        .generate(&compare_prompt(&previous_summary, &new_summary))
        .await?;

    put_record(
        store,
        output_bucket,
        &keys.summary,
        &SummaryRecord::new(new_summary.clone()),
    )
    .await?;
    put_record(
        store,
        output_bucket,
        &keys.comparison,
        &ComparisonRecord::new(comparison.clone()),
    )
    .await?;
    info!(
        summary_key = %keys.summary,
        comparison_key = %keys.comparison,
        bucket = %output_bucket,
        "summary and comparison persisted"
    );

    Ok(CompareOutcome {
        summary_key: keys.summary,
        comparison_key: keys.comparison,
        summary: new_summary,
        comparison,
    })
}

/// Shared first half of both workflows: fetch bytes, extract text, generate
/// the summary.
async fn generate_summary<S, X, G>(
    doc: &DocumentRef,
    store: &S,
    extractor: &X,
    generator: &G,
) -> Result<String>
where
    S: ObjectStore,
    X: TextExtractor,
    G: TextGenerator,
{
    debug!("fetching document bytes");
    let bytes = store.get(&doc.bucket, &doc.key).await?;

    let text = extractor.extract(&bytes)?;
    debug!(chars = text.chars().count(), "document text extracted");

    let summary = generator.generate(&summarize_prompt(&text)).await?;
    Ok(summary)
}

async fn put_record<S, R>(store: &S, bucket: &str, key: &str, record: &R) -> Result<()>
where
    S: ObjectStore,
    R: serde::Serialize,
{
    let body = serde_json::to_vec_pretty(record)?;
    store.put(bucket, key, body, RECORD_CONTENT_TYPE).await?;
    Ok(())
}
