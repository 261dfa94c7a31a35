//! Response Parser: structured fields from the model's free-text reply.
//!
//! The model is instructed to emit `Name:` / `Description:` /
//! `Care Instructions:` markers (see [`crate::prompt`]); the labeled parser
//! is the canonical strategy and degrades per-field when markers are missing.
//! The positional variant survives for replies from informally-prompted
//! models and is fragile by construction; the endpoint does not use it.

use leafscan_core::IdentificationResult;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Fallback when the `Name:` marker is missing.
pub const FALLBACK_NAME: &str = "Unknown Plant";
/// Fallback when the `Description:` marker is missing.
pub const FALLBACK_DESCRIPTION: &str = "No description available.";
/// Fallback when the `Care Instructions:` marker is missing.
pub const FALLBACK_CARE: &str = "No care instructions available.";

const MARKERS: [&str; 3] = ["Name:", "Description:", "Care Instructions:"];

/// Blank-line boundary used by the positional strategy.
static BLANK_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r?\n[ \t]*\r?\n").unwrap());

/// Extract the three fields by scanning for labeled markers.
///
/// Each field is the text after its marker up to the next marker (or end of
/// input), trimmed. A missing marker yields that field's fixed fallback;
/// the remaining fields are unaffected.
pub fn parse_labeled(text: &str) -> IdentificationResult {
    IdentificationResult {
        name: section(text, 0).unwrap_or_else(|| FALLBACK_NAME.to_string()),
        description: section(text, 1).unwrap_or_else(|| FALLBACK_DESCRIPTION.to_string()),
        care_instructions: section(text, 2).unwrap_or_else(|| FALLBACK_CARE.to_string()),
    }
}

/// Text after marker `idx` up to the nearest following marker.
fn section(text: &str, idx: usize) -> Option<String> {
    let start = text.find(MARKERS[idx])? + MARKERS[idx].len();
    let rest = &text[start..];
    let end = MARKERS
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != idx)
        .filter_map(|(_, marker)| rest.find(marker))
        .min()
        .unwrap_or(rest.len());
    Some(rest[..end].trim().to_string())
}

/// Error from the positional strategy.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PositionalParseError {
    #[error("expected three blank-line separated segments, got {0}")]
    TooFewSegments(usize),
}

/// Assign the first three blank-line separated segments positionally.
///
/// Strictly more fragile than [`parse_labeled`]: fewer than three segments is
/// an error, and segments past the third are silently dropped.
pub fn parse_positional(text: &str) -> Result<IdentificationResult, PositionalParseError> {
    let segments: Vec<&str> = BLANK_LINE
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    if segments.len() < 3 {
        return Err(PositionalParseError::TooFewSegments(segments.len()));
    }
    Ok(IdentificationResult {
        name: segments[0].to_string(),
        description: segments[1].to_string(),
        care_instructions: segments[2].to_string(),
    })
}
