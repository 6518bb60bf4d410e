//! Priority selectors and document-order queries.
//!
//! Priority selectors are a deliberately small language: a plain tag name
//! (`article`), a class token (`.content`), or a tag with one class
//! qualifier (`div.content`). Matching runs against the node abstraction,
//! so queries work on any backend; document order comes from
//! [`PageDocument::all_elements`].

use std::fmt;

use crate::error::{Error, Result};
use crate::node::{PageDocument, PageNode};

/// A parsed priority selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    tag: Option<String>,
    class: Option<String>,
}

impl Selector {
    /// Match by tag name only.
    #[must_use]
    pub fn tag(tag: &str) -> Self {
        Self {
            tag: Some(tag.to_lowercase()),
            class: None,
        }
    }

    /// Match by class token only.
    #[must_use]
    pub fn class(class: &str) -> Self {
        Self {
            tag: None,
            class: Some(class.to_string()),
        }
    }

    /// Match by tag name and class token.
    #[must_use]
    pub fn tag_class(tag: &str, class: &str) -> Self {
        Self {
            tag: Some(tag.to_lowercase()),
            class: Some(class.to_string()),
        }
    }

    /// Parse a selector string: `article`, `.content`, or `div.content`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSelector`] for anything outside that
    /// language (combinators, ids, multiple classes, empty input).
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let invalid = || Error::InvalidSelector(raw.to_string());

        match trimmed.split_once('.') {
            None => {
                if is_name(trimmed) {
                    Ok(Self::tag(trimmed))
                } else {
                    Err(invalid())
                }
            }
            Some(("", class)) if is_name(class) => Ok(Self::class(class)),
            Some((tag, class)) if is_name(tag) && is_name(class) => {
                Ok(Self::tag_class(tag, class))
            }
            Some(_) => Err(invalid()),
        }
    }

    /// Whether a node matches this selector.
    #[must_use]
    pub fn matches<N: PageNode>(&self, node: &N) -> bool {
        if let Some(tag) = &self.tag {
            if node.tag_name().as_deref() != Some(tag.as_str()) {
                return false;
            }
        }
        if let Some(class) = &self.class {
            let attr = node.attr("class").unwrap_or_default();
            if !attr.split_whitespace().any(|token| token == class) {
                return false;
            }
        }
        true
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(tag) = &self.tag {
            write!(f, "{tag}")?;
        }
        if let Some(class) = &self.class {
            write!(f, ".{class}")?;
        }
        Ok(())
    }
}

/// Valid tag-name or class-token characters.
fn is_name(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Collect every element matching the selector, in document order.
#[must_use]
pub fn query_all<'a, D: PageDocument>(doc: &'a D, selector: &Selector) -> Vec<D::Node<'a>> {
    doc.all_elements()
        .into_iter()
        .filter(|node| selector.matches(node))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;
    use crate::node::PageDocument;

    #[test]
    fn parse_plain_tag() {
        let sel = Selector::parse("article").unwrap();
        assert_eq!(sel, Selector::tag("article"));
    }

    #[test]
    fn parse_class_token() {
        let sel = Selector::parse(".blog-post").unwrap();
        assert_eq!(sel, Selector::class("blog-post"));
    }

    #[test]
    fn parse_tag_with_class() {
        let sel = Selector::parse("div.content").unwrap();
        assert_eq!(sel, Selector::tag_class("div", "content"));
    }

    #[test]
    fn parse_lowercases_tags() {
        assert_eq!(Selector::parse("ARTICLE").unwrap(), Selector::tag("article"));
    }

    #[test]
    fn parse_rejects_bad_input() {
        for raw in ["", ".", "div.", "div..x", "#main", "div p", "a[href]", "div>.x"] {
            assert!(Selector::parse(raw).is_err(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn display_round_trips() {
        for raw in ["article", ".content", "div.main"] {
            assert_eq!(Selector::parse(raw).unwrap().to_string(), raw);
        }
    }

    #[test]
    fn class_matching_uses_whitespace_tokens() {
        let doc = dom::parse(
            r#"<html><body>
                <div class="wrap content extra">A</div>
                <div class="content-outer">B</div>
            </body></html>"#,
        );
        let matches = query_all(&doc, &Selector::class("content"));
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn tag_class_requires_both() {
        let doc = dom::parse(
            r#"<html><body>
                <div class="content">yes</div>
                <section class="content">wrong tag</section>
                <div class="other">wrong class</div>
            </body></html>"#,
        );
        let matches = query_all(&doc, &Selector::tag_class("div", "content"));
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn query_all_preserves_document_order() {
        let doc = dom::parse(
            r#"<html><body>
                <section><p class="m">first</p></section>
                <p class="m">second</p>
                <div><p class="m">third</p></div>
            </body></html>"#,
        );
        let matched = query_all(&doc, &Selector::tag_class("p", "m"));
        let texts: Vec<String> = matched
            .iter()
            .map(|n| crate::node::PageNode::text_content(n))
            .collect();
        assert_eq!(texts, ["first", "second", "third"]);
        // Document enumeration backs the query
        assert!(doc.all_elements().len() >= 3);
    }
}
