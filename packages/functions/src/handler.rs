//! Handler glue shared by the two function binaries.
//!
//! Each handler runs the matching workflow and maps its outcome onto an
//! [`InvocationResult`]. `Err` is reserved for the runtime itself; domain
//! failures always come back as a 500-result with the stringified cause.

use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{Error, LambdaEvent};
use std::sync::Arc;
use summarization::{
    compare_document, summarize_document, ObjectStore, TextExtractor, TextGenerator,
};
use tracing::{error, info};

use crate::event::document_from_event;
use crate::response::InvocationResult;

/// Handle one summarize invocation end to end.
pub async fn summarize_handler<S, X, G>(
    store: Arc<S>,
    extractor: Arc<X>,
    generator: Arc<G>,
    output_bucket: &str,
    event: LambdaEvent<S3Event>,
) -> Result<InvocationResult, Error>
where
    S: ObjectStore,
    X: TextExtractor,
    G: TextGenerator,
{
    let result = run_summarize(&*store, &*extractor, &*generator, output_bucket, &event).await;
    Ok(into_invocation_result(result))
}

/// Handle one compare invocation end to end.
pub async fn compare_handler<S, X, G>(
    store: Arc<S>,
    extractor: Arc<X>,
    generator: Arc<G>,
    output_bucket: &str,
    event: LambdaEvent<S3Event>,
) -> Result<InvocationResult, Error>
where
    S: ObjectStore,
    X: TextExtractor,
    G: TextGenerator,
{
    let result = run_compare(&*store, &*extractor, &*generator, output_bucket, &event).await;
    Ok(into_invocation_result(result))
}

async fn run_summarize<S, X, G>(
    store: &S,
    extractor: &X,
    generator: &G,
    output_bucket: &str,
    event: &LambdaEvent<S3Event>,
) -> anyhow::Result<String>
where
    S: ObjectStore,
    X: TextExtractor,
    G: TextGenerator,
{
    let doc = document_from_event(&event.payload)?;
    info!(bucket = %doc.bucket, key = %doc.key, "processing uploaded document");

    let outcome = summarize_document(&doc, output_bucket, store, extractor, generator).await?;
    Ok(format!(
        "Summary generated and saved as {} in {}",
        outcome.summary_key, output_bucket
    ))
}

async fn run_compare<S, X, G>(
    store: &S,
    extractor: &X,
    generator: &G,
    output_bucket: &str,
    event: &LambdaEvent<S3Event>,
) -> anyhow::Result<String>
where
    S: ObjectStore,
    X: TextExtractor,
    G: TextGenerator,
{
    let doc = document_from_event(&event.payload)?;
    info!(bucket = %doc.bucket, key = %doc.key, "processing uploaded document");

    let outcome = compare_document(&doc, output_bucket, store, extractor, generator).await?;
    Ok(format!(
        "New summary saved as {} and comparison saved as {} in {}",
        outcome.summary_key, outcome.comparison_key, output_bucket
    ))
}

fn into_invocation_result(result: anyhow::Result<String>) -> InvocationResult {
    match result {
        Ok(message) => {
            info!("{message}");
            InvocationResult::ok(message)
        }
        Err(err) => {
            error!(error = %format!("{err:#}"), "invocation failed");
            InvocationResult::failure(format!("{err:#}"))
        }
    }
}
