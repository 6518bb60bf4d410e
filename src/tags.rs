//! Tag classification policy.
//!
//! Partitions element tags into three roles: excluded (whole subtree
//! omitted), content-bearing (eligible to contribute a text chunk), and
//! priority-region (likely main-content containers). The policy is a plain
//! immutable value passed into the orchestrator and walker, so independent
//! extractions can run with different classifications.
//!
//! Membership tests have no failure mode: absence from every set is a
//! valid, expected outcome (the tag passes through without collecting).

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::error::Result;
use crate::patterns::HEADING_TAG;
use crate::selector::Selector;

// === Default catalogs ===

/// Tags whose entire subtree is omitted from extraction: script/style
/// machinery, embedded graphics, and form controls.
pub static EXCLUDED_TAGS: [&str; 12] = [
    "script", "style", "noscript", "svg", "canvas", "template", "iframe",
    "button", "input", "select", "textarea", "form",
];

/// Tags eligible to contribute a text chunk when they hold direct text.
pub static CONTENT_TAGS: [&str; 18] = [
    "p", "h1", "h2", "h3", "h4", "h5", "h6", "li", "td", "th", "article",
    "section", "main", "span", "div", "blockquote", "pre", "code",
];

/// `EXCLUDED_TAGS` as a `HashSet`.
pub static EXCLUDED_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| EXCLUDED_TAGS.into_iter().collect());

/// `CONTENT_TAGS` as a `HashSet`.
pub static CONTENT_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| CONTENT_TAGS.into_iter().collect());

/// Default priority-region selectors, in application order.
fn default_priority_selectors() -> Vec<Selector> {
    vec![
        Selector::tag("article"),
        Selector::tag("main"),
        Selector::tag("section"),
        Selector::tag_class("div", "content"),
        Selector::tag_class("div", "main"),
        Selector::tag_class("div", "article"),
        Selector::class("content"),
        Selector::class("main"),
        Selector::class("article"),
        Selector::class("post"),
        Selector::class("blog-post"),
    ]
}

/// Immutable tag classification passed into extraction.
///
/// Three disjoint-by-intent selector sets. Headings are content-bearing in
/// the default policy, but heading detection ([`is_heading_tag`]) is checked
/// independently of membership here: a custom policy may declassify `h1`
/// without changing what counts as a heading.
#[derive(Debug, Clone)]
pub struct TagPolicy {
    excluded: HashSet<String>,
    content_bearing: HashSet<String>,
    priority: Vec<Selector>,
}

impl TagPolicy {
    /// Build a policy from raw selector strings.
    ///
    /// `excluded` and `content_bearing` take plain tag names; `priority`
    /// entries may also carry a class qualifier (`div.content`, `.post`).
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidSelector`] when a priority entry is
    /// not a tag name, class token, or tag+class pair.
    ///
    /// # Example
    ///
    /// ```rust
    /// use domtext::TagPolicy;
    ///
    /// let policy = TagPolicy::new(
    ///     &["script", "nav"],
    ///     &["p", "h1", "li"],
    ///     &["article", ".post-body"],
    /// )?;
    /// assert!(policy.is_excluded("nav"));
    /// assert!(!policy.is_content_bearing("div"));
    /// # Ok::<(), domtext::Error>(())
    /// ```
    pub fn new(excluded: &[&str], content_bearing: &[&str], priority: &[&str]) -> Result<Self> {
        let priority = priority
            .iter()
            .map(|raw| Selector::parse(raw))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            excluded: excluded.iter().map(|t| t.to_lowercase()).collect(),
            content_bearing: content_bearing.iter().map(|t| t.to_lowercase()).collect(),
            priority,
        })
    }

    /// Whether a tag's entire subtree is omitted from extraction.
    #[must_use]
    pub fn is_excluded(&self, tag: &str) -> bool {
        self.excluded.contains(tag)
    }

    /// Whether a tag may contribute a text chunk.
    #[must_use]
    pub fn is_content_bearing(&self, tag: &str) -> bool {
        self.content_bearing.contains(tag)
    }

    /// Priority-region selectors in application order.
    #[must_use]
    pub fn priority_selectors(&self) -> &[Selector] {
        &self.priority
    }
}

impl Default for TagPolicy {
    fn default() -> Self {
        Self {
            excluded: EXCLUDED_TAGS.iter().map(|t| (*t).to_string()).collect(),
            content_bearing: CONTENT_TAGS.iter().map(|t| (*t).to_string()).collect(),
            priority: default_priority_selectors(),
        }
    }
}

// === Heading helpers ===

/// Whether a tag name is a heading (`h1`..`h6`).
///
/// Independent of any policy: exclusion and content-bearing status are
/// orthogonal to heading-ness.
#[must_use]
pub fn is_heading_tag(tag: &str) -> bool {
    HEADING_TAG.is_match(tag)
}

/// Heading level (1–6) for `h1`..`h6` tag names, `None` otherwise.
#[must_use]
pub fn heading_level(tag: &str) -> Option<u8> {
    HEADING_TAG
        .captures(tag)
        .and_then(|caps| caps.get(1))
        .and_then(|level| level.as_str().parse().ok())
}
