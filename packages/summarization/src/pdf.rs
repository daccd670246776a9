//! PDF text extraction adapter.

use crate::error::ExtractionError;
use crate::traits::TextExtractor;

/// Extracts plain text from in-memory PDF bytes via `pdf-extract`.
///
/// Per-page text is concatenated in page order. Layout, tables, and image
/// text are out of scope; a malformed or zero-page document fails with
/// [`ExtractionError::Parse`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        let text = pdf_extract::extract_text_from_mem(bytes)
            .map_err(|err| ExtractionError::Parse(Box::new(err)))?;
        Ok(text.trim().to_string())
    }
}
