//! Result types for extraction output.
//!
//! This module defines the structured output from content extraction: the
//! plain-text content and the metadata collected alongside it.

use serde::{Deserialize, Serialize};

/// A document heading.
///
/// Headings are collected over the whole document in document order, even
/// when the extracted content is restricted to a priority region that
/// excludes some of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading level, 1 through 6.
    pub level: u8,

    /// Trimmed aggregate heading text; never empty.
    pub text: String,
}

/// Metadata extracted alongside the content.
///
/// All scalar fields are optional as they may not be present or derivable
/// for every document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Page title from `<title>`.
    pub title: Option<String>,

    /// Source URL, as supplied by the caller via [`crate::Options::url`].
    pub url: Option<String>,

    /// Hostname derived from the source URL.
    pub hostname: Option<String>,

    /// All document headings in document order; empty when none were found.
    pub headings: Vec<Heading>,
}

/// Result of one extraction pass.
///
/// `content` is plain UTF-8 text, free of markup syntax beyond the literal
/// `"## "` heading marker, with paragraphs separated by exactly one blank
/// line. Created once per extraction call; the core holds no further state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Extracted content as plain text.
    pub content: String,

    /// Metadata about the document.
    pub metadata: Metadata,
}
