//! Tolerant extraction of the evaluation JSON from free-form model output.
//!
//! Models wrap JSON in code fences or surround it with prose despite the
//! raw-JSON-only instruction. The parser strips fences, takes the
//! first-`{`-to-last-`}` span, and parses that. It never panics: callers
//! pattern-match on the result and fall back on error.

use thiserror::Error;

use crate::models::feedback::FeedbackResult;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("response contained no JSON object")]
    NoJsonObject,

    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Parses a model response into a `FeedbackResult`. Missing fields
/// deserialize to their defaults; a missing or malformed object span is an
/// error, never a panic.
pub fn parse_feedback(text: &str) -> Result<FeedbackResult, ParseError> {
    let cleaned = strip_code_fences(text);
    let span = brace_span(&cleaned).ok_or(ParseError::NoJsonObject)?;
    Ok(serde_json::from_str(span)?)
}

/// Removes ```json and ``` fence markers anywhere in the text.
fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

/// The first-`{`-to-last-`}` span, if any.
fn brace_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end >= start).then(|| &text[start..=end])
}
