//! Configuration options for content extraction.
//!
//! The `Options` struct controls extraction behavior. The tag policy is part
//! of the options value rather than module-level state, so independent
//! extractions can run with different configurations without coordination.

use crate::tags::TagPolicy;

/// Configuration options for content extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use domtext::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     url: Some("https://example.com/article".to_string()),
///     dedupe_regions: true,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Source URL of the document.
    ///
    /// A parsed document carries no location of its own, so the caller
    /// supplies one. It is copied into `metadata.url`, and
    /// `metadata.hostname` is derived from it.
    ///
    /// Default: `None`
    pub url: Option<String>,

    /// Tag classification policy.
    ///
    /// Controls which subtrees are pruned, which tags may contribute text
    /// chunks, and which selectors identify priority content regions.
    ///
    /// Default: [`TagPolicy::default()`]
    pub tags: TagPolicy,

    /// Minimum aggregate text length, in characters, for a priority-selector
    /// match to count as a content region. The comparison is strict: a match
    /// of exactly this length is rejected. Filters out decorative containers
    /// that share a tag or class with real content.
    ///
    /// Default: `500`
    pub min_region_text_len: usize,

    /// Drop priority-region matches referring to a node already matched by
    /// an earlier selector.
    ///
    /// Off by default: overlapping selectors (an element matching both
    /// `article` and `.content`, say) then repeat the region's text in the
    /// output, matching the historical behavior of the extractor.
    ///
    /// Default: `false`
    pub dedupe_regions: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            url: None,
            tags: TagPolicy::default(),
            min_region_text_len: 500,
            dedupe_regions: false,
        }
    }
}
