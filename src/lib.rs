//! # domtext
//!
//! Structure-preserving plain-text extraction from HTML documents.
//!
//! This library converts a markup tree into clean plain text suitable for
//! natural-language consumption: boilerplate subtrees (scripts, forms,
//! widgets) are pruned, likely main-content regions are favored over the
//! rest of the page, and heading structure is preserved both inline and as
//! metadata.
//!
//! ## Quick Start
//!
//! ```rust
//! let html = r#"<html><head><title>My Page</title></head>
//! <body><h1>Title</h1><p>Hello world.</p><script>ignored()</script></body></html>"#;
//!
//! let result = domtext::extract(html);
//! assert_eq!(result.content, "## Title\n\nHello world.");
//! assert_eq!(result.metadata.title.as_deref(), Some("My Page"));
//! ```
//!
//! ## How it works
//!
//! - **Tag policy**: an immutable [`TagPolicy`] partitions tags into
//!   excluded, content-bearing, and priority-region roles.
//! - **Headings** are collected over the whole document in document order,
//!   independent of where content ends up coming from.
//! - **Priority regions** (`article`, `main`, `div.content`, ...) are kept
//!   when they hold enough text; otherwise the whole `<body>` is walked.
//! - **The walk** is a pre-order traversal on an explicit stack: excluded
//!   tags prune their subtree, content-bearing tags with direct text emit
//!   chunks, everything else passes through.
//! - **Formatting** joins chunks with blank lines, marks headings with a
//!   literal `"## "`, and normalizes whitespace.
//!
//! Extraction never fails: empty documents, missing roots, and unknown tags
//! all degrade to an emptier result. The core reads trees through the
//! engine-independent [`node::PageNode`]/[`node::PageDocument`] traits; the
//! bundled backend is [`dom`], built on `dom_query`.

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// DOM backend for the node abstraction, built on `dom_query`.
pub mod dom;

/// Character encoding detection for byte input.
pub mod encoding;

/// Chunk formatting and whitespace normalization.
pub mod format;

/// Document-order heading collection.
pub mod headings;

/// Engine-independent node and document abstractions.
pub mod node;

/// Priority content region location.
pub mod regions;

/// Priority selectors and document-order queries.
pub mod selector;

/// Tag classification policy (excluded / content-bearing / priority sets).
pub mod tags;

/// Pre-order content walk producing text chunks.
pub mod walker;

// Public API - re-exports
pub use error::{Error, Result};
pub use extract::extract_document;
pub use options::Options;
pub use result::{ExtractionResult, Heading, Metadata};
pub use selector::Selector;
pub use tags::TagPolicy;
pub use walker::ContentChunk;

/// Extracts content from an HTML document using default options.
///
/// # Arguments
///
/// * `html` - The HTML document as a string slice
///
/// # Returns
///
/// The extraction result. This never fails: an empty or boilerplate-only
/// document yields an empty `content` string and whatever metadata could be
/// found.
///
/// # Example
///
/// ```rust
/// let html = "<html><body><p>Content</p></body></html>";
/// let result = domtext::extract(html);
/// assert_eq!(result.content, "Content");
/// ```
#[must_use]
pub fn extract(html: &str) -> ExtractionResult {
    extract_with_options(html, &Options::default())
}

/// Extracts content from an HTML document with custom options.
///
/// # Arguments
///
/// * `html` - The HTML document as a string slice
/// * `options` - Configuration options for extraction behavior
///
/// # Example
///
/// ```rust
/// use domtext::Options;
///
/// let html = r#"<html><body><article><p>Short article.</p></article></body></html>"#;
/// let options = Options {
///     url: Some("https://example.com/post".to_string()),
///     min_region_text_len: 5,
///     ..Options::default()
/// };
/// let result = domtext::extract_with_options(html, &options);
/// assert_eq!(result.content, "Short article.");
/// assert_eq!(result.metadata.hostname.as_deref(), Some("example.com"));
/// ```
#[must_use]
pub fn extract_with_options(html: &str, options: &Options) -> ExtractionResult {
    extract::extract_html(html, options)
}

/// Extracts content from HTML bytes with automatic encoding detection.
///
/// Sniffs the charset from meta tags (`<meta charset="...">` or the legacy
/// `http-equiv="Content-Type"` form), decodes to UTF-8, and extracts.
/// Invalid byte sequences become the Unicode replacement character rather
/// than causing errors.
///
/// # Example
///
/// ```rust
/// // ISO-8859-1 encoded HTML with charset declaration
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><p>Caf\xE9</p></body></html>";
/// let result = domtext::extract_bytes(html);
/// assert_eq!(result.content, "Caf\u{e9}");
/// ```
#[must_use]
pub fn extract_bytes(html: &[u8]) -> ExtractionResult {
    extract_bytes_with_options(html, &Options::default())
}

/// Extracts content from HTML bytes with custom options and automatic
/// encoding detection.
#[must_use]
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> ExtractionResult {
    let html_str = encoding::decode_html(html);
    extract_with_options(&html_str, options)
}
