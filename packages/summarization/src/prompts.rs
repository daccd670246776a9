//! Prompt construction for the two generation calls.
//!
//! Pure string building. The only discipline here is the character cap and
//! the placement of the section labels; downstream generation quality
//! depends on both staying exactly where they are.

/// Hard cap on how much extracted text is sent for summarization.
///
/// A raw character cut, not a token count. It may land mid-word or
/// mid-sentence; that is accepted behavior.
pub const MAX_DOCUMENT_CHARS: usize = 5000;

/// Substituted for the previous summary when no record exists yet.
pub const NO_PREVIOUS_SUMMARY: &str = "No previous summary found.";

const SUMMARIZE_INSTRUCTION: &str = "Summarize the following PDF content into clear sections \
     with headings: Summary, Key Points, and Conclusion.";

const COMPARE_INSTRUCTION: &str = "Compare the following two document summaries. Highlight \
     similarities, differences, and changes in meaning.";

/// Build the summarization prompt from extracted document text.
pub fn summarize_prompt(document_text: &str) -> String {
    format!(
        "{SUMMARIZE_INSTRUCTION}\n\nDocument Content:\n{}",
        truncate_chars(document_text, MAX_DOCUMENT_CHARS)
    )
}

/// Build the comparison prompt from the previous and new summaries.
pub fn compare_prompt(previous_summary: &str, new_summary: &str) -> String {
    format!(
        "{COMPARE_INSTRUCTION}\n\nPrevious Summary:\n{previous_summary}\n\nNew Summary:\n{new_summary}"
    )
}

/// Cut `text` to its first `max_chars` characters.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
