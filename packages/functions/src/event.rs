//! Decoding of the inbound S3 trigger event.

use aws_lambda_events::event::s3::S3Event;
use summarization::DocumentRef;
use thiserror::Error;

/// The event did not carry a usable document reference.
#[derive(Debug, Error)]
pub enum EventError {
    #[error("event contains no records")]
    NoRecords,

    #[error("event record is missing the bucket name")]
    MissingBucket,

    #[error("event record is missing the object key")]
    MissingKey,
}

/// Pull the document reference out of the first event record.
///
/// One event maps to one document; the bucket notifications feeding this
/// pipeline deliver a single record per event.
pub fn document_from_event(event: &S3Event) -> Result<DocumentRef, EventError> {
    let record = event.records.first().ok_or(EventError::NoRecords)?;
    let bucket = record
        .s3
        .bucket
        .name
        .as_deref()
        .filter(|name| !name.is_empty())
        .ok_or(EventError::MissingBucket)?;
    let key = record
        .s3
        .object
        .key
        .as_deref()
        .filter(|key| !key.is_empty())
        .ok_or(EventError::MissingKey)?;

    Ok(DocumentRef::new(bucket, decode_object_key(key)))
}

/// Undo S3's form-style key encoding: `+` means space, then percent-decode.
pub fn decode_object_key(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        // non-UTF-8 percent sequences: keep the key as delivered
        Err(_) => spaced,
    }
}
