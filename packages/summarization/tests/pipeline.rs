//! End-to-end workflow tests over the in-memory store and mock collaborators.

use summarization::testing::{FaultyStore, MockExtractor, MockGenerator};
use summarization::{
    compare_document, summarize_document, ComparisonRecord, DocumentRef, MemoryStore,
    PipelineError, StoreError, SummaryRecord, NO_PREVIOUS_SUMMARY,
};

const OUTPUT_BUCKET: &str = "summaries";

fn seed_document(store: &MemoryStore) -> DocumentRef {
    let doc = DocumentRef::new("uploads", "reports/q1.pdf");
    store.insert(
        &doc.bucket,
        &doc.key,
        b"%PDF-1.4 placeholder".to_vec(),
        "application/pdf",
    );
    doc
}

#[tokio::test]
async fn summarize_writes_a_summary_record() {
    let store = MemoryStore::new();
    let doc = seed_document(&store);
    let extractor = MockExtractor::returning("Revenue grew 10%.");
    let generator = MockGenerator::new().with_response("Revenue grew", "Summary: revenue grew.");

    let outcome = summarize_document(&doc, OUTPUT_BUCKET, &store, &extractor, &generator)
        .await
        .unwrap();

    assert_eq!(outcome.summary_key, "reports/q1_summary.json");
    assert_eq!(outcome.summary, "Summary: revenue grew.");

    let body = store.object(OUTPUT_BUCKET, "reports/q1_summary.json").unwrap();
    let record: SummaryRecord = serde_json::from_slice(&body).unwrap();
    assert!(!record.summary.is_empty());
    assert_eq!(
        store
            .content_type(OUTPUT_BUCKET, "reports/q1_summary.json")
            .as_deref(),
        Some("application/json")
    );
}

#[tokio::test]
async fn summarize_sends_the_extracted_text_to_the_generator() {
    let store = MemoryStore::new();
    let doc = seed_document(&store);
    let extractor = MockExtractor::returning("Revenue grew 10%.");
    let generator = MockGenerator::new();

    summarize_document(&doc, OUTPUT_BUCKET, &store, &extractor, &generator)
        .await
        .unwrap();

    let prompts = generator.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("Document Content:\nRevenue grew 10%."));
}

#[tokio::test]
async fn compare_first_run_uses_the_sentinel() {
    let store = MemoryStore::new();
    let doc = seed_document(&store);
    let extractor = MockExtractor::returning("Revenue grew 10%.");
    let generator = MockGenerator::new()
        .with_response("Summarize the following", "Revenue grew.")
        .with_response("Compare the following", "First report in the series.");

    let outcome = compare_document(&doc, OUTPUT_BUCKET, &store, &extractor, &generator)
        .await
        .unwrap();

    let prompts = generator.prompts();
    assert_eq!(prompts.len(), 2);
    assert!(prompts[1].contains(NO_PREVIOUS_SUMMARY));
    assert!(prompts[1].contains("Previous Summary:\nNo previous summary found."));

    assert!(store.object(OUTPUT_BUCKET, "reports/q1_summary.json").is_some());
    assert!(store
        .object(OUTPUT_BUCKET, "reports/q1_comparison.json")
        .is_some());
    assert_eq!(outcome.comparison, "First report in the series.");
}

#[tokio::test]
async fn compare_subsequent_run_reads_the_previous_record() {
    let store = MemoryStore::new();
    let doc = seed_document(&store);
    store.insert(
        OUTPUT_BUCKET,
        "reports/q1_previous_summary.json",
        serde_json::to_vec_pretty(&SummaryRecord::new("Revenue flat.")).unwrap(),
        "application/json",
    );
    let extractor = MockExtractor::returning("Revenue grew 10%.");
    let generator = MockGenerator::new()
        .with_response("Summarize the following", "Revenue grew.")
        .with_response("Compare the following", "Growth replaced stagnation.");

    let outcome = compare_document(&doc, OUTPUT_BUCKET, &store, &extractor, &generator)
        .await
        .unwrap();

    let prompts = generator.prompts();
    assert!(prompts[1].contains("Previous Summary:\nRevenue flat."));
    assert!(prompts[1].contains("New Summary:\nRevenue grew."));
    assert!(!outcome.comparison.is_empty());

    let summary: SummaryRecord = serde_json::from_slice(
        &store.object(OUTPUT_BUCKET, "reports/q1_summary.json").unwrap(),
    )
    .unwrap();
    assert_eq!(summary.summary, "Revenue grew.");

    let comparison: ComparisonRecord = serde_json::from_slice(
        &store
            .object(OUTPUT_BUCKET, "reports/q1_comparison.json")
            .unwrap(),
    )
    .unwrap();
    assert_eq!(comparison.comparison, "Growth replaced stagnation.");
}

#[tokio::test]
async fn extraction_failure_writes_nothing() {
    let store = MemoryStore::new();
    let doc = seed_document(&store);
    let extractor = MockExtractor::failing();
    let generator = MockGenerator::new();

    let err = summarize_document(&doc, OUTPUT_BUCKET, &store, &extractor, &generator)
        .await
        .unwrap_err();

    assert!(matches!(err, PipelineError::Extraction(_)));
    // only the seeded input object remains
    assert_eq!(store.object_count(), 1);
    assert!(generator.prompts().is_empty());
}

#[tokio::test]
async fn generation_failure_writes_nothing() {
    let store = MemoryStore::new();
    let doc = seed_document(&store);
    let extractor = MockExtractor::returning("Revenue grew 10%.");
    let generator = MockGenerator::new().failing();

    let err = summarize_document(&doc, OUTPUT_BUCKET, &store, &extractor, &generator)
        .await
        .unwrap_err();

    assert!(matches!(err, PipelineError::Generation(_)));
    assert_eq!(store.object_count(), 1);
}

#[tokio::test]
async fn transient_previous_summary_failure_is_not_masked_as_absent() {
    let inner = MemoryStore::new();
    let doc = DocumentRef::new("uploads", "reports/q1.pdf");
    inner.insert(
        &doc.bucket,
        &doc.key,
        b"%PDF-1.4 placeholder".to_vec(),
        "application/pdf",
    );
    let store = FaultyStore::new(inner).with_failing_key("reports/q1_previous_summary.json");
    let extractor = MockExtractor::returning("Revenue grew 10%.");
    let generator = MockGenerator::new();

    let err = compare_document(&doc, OUTPUT_BUCKET, &store, &extractor, &generator)
        .await
        .unwrap_err();

    assert!(matches!(err, PipelineError::Store(StoreError::Other(_))));
    // the failure happened before either write
    assert!(store
        .inner()
        .object(OUTPUT_BUCKET, "reports/q1_summary.json")
        .is_none());
    assert!(store
        .inner()
        .object(OUTPUT_BUCKET, "reports/q1_comparison.json")
        .is_none());
}

#[tokio::test]
async fn missing_input_document_is_a_store_failure() {
    let store = MemoryStore::new();
    let doc = DocumentRef::new("uploads", "reports/q1.pdf");
    let extractor = MockExtractor::returning("unused");
    let generator = MockGenerator::new();

    let err = summarize_document(&doc, OUTPUT_BUCKET, &store, &extractor, &generator)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        PipelineError::Store(StoreError::NotFound { .. })
    ));
}

#[tokio::test]
async fn non_pdf_key_is_rejected_before_any_work() {
    let store = MemoryStore::new();
    let doc = DocumentRef::new("uploads", "reports/q1.txt");
    let extractor = MockExtractor::returning("unused");
    let generator = MockGenerator::new();

    let err = summarize_document(&doc, OUTPUT_BUCKET, &store, &extractor, &generator)
        .await
        .unwrap_err();

    assert!(matches!(err, PipelineError::Key(_)));
    assert!(generator.prompts().is_empty());
}

#[tokio::test]
async fn empty_model_output_still_persists_a_record() {
    let store = MemoryStore::new();
    let doc = seed_document(&store);
    let extractor = MockExtractor::returning("Revenue grew 10%.");
    let generator = MockGenerator::new().with_default_response("");

    let outcome = summarize_document(&doc, OUTPUT_BUCKET, &store, &extractor, &generator)
        .await
        .unwrap();

    assert_eq!(outcome.summary, "");
    let record: SummaryRecord = serde_json::from_slice(
        &store.object(OUTPUT_BUCKET, "reports/q1_summary.json").unwrap(),
    )
    .unwrap();
    assert_eq!(record.summary, "");
}

#[tokio::test]
async fn empty_extracted_text_is_tolerated() {
    let store = MemoryStore::new();
    let doc = seed_document(&store);
    let extractor = MockExtractor::returning("");
    let generator = MockGenerator::new();

    let outcome = summarize_document(&doc, OUTPUT_BUCKET, &store, &extractor, &generator)
        .await
        .unwrap();

    assert!(!outcome.summary.is_empty());
    let prompts = generator.prompts();
    assert!(prompts[0].ends_with("Document Content:\n"));
}
