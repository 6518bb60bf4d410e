//! Chunk formatting and whitespace normalization.
//!
//! The last stage of the pipeline: turns an ordered chunk sequence into one
//! plain-text string. A pure function with no failure modes.

use crate::patterns::MULTIPLE_NEWLINES;
use crate::walker::ContentChunk;

/// Render chunks as plain text.
///
/// Chunks whose text trims to empty are dropped (the walker already
/// guarantees non-empty text; this re-validates). Headings get a literal
/// `"## "` marker regardless of numeric level; level information lives in
/// `metadata.headings`, not here. Chunks are joined with exactly one blank
/// line, runs of three or more newlines collapse to two, and the result is
/// trimmed. Empty input yields an empty string.
#[must_use]
pub fn format_chunks(chunks: &[ContentChunk]) -> String {
    let formatted: Vec<String> = chunks
        .iter()
        .filter(|chunk| !chunk.text.trim().is_empty())
        .map(|chunk| {
            if chunk.is_heading {
                format!("## {}", chunk.text)
            } else {
                chunk.text.clone()
            }
        })
        .collect();

    let joined = formatted.join("\n\n");
    MULTIPLE_NEWLINES.replace_all(&joined, "\n\n").trim().to_string()
}
