//! DOM backend built on `dom_query`.
//!
//! Implements the engine-independent [`PageNode`]/[`PageDocument`] traits
//! for `dom_query::Document`, plus a few adapter helpers used across the
//! crate and its tests.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

// Re-export StrTendril for callers working with adapter return values
pub use tendril::StrTendril;

use crate::node::{NodePart, PageDocument, PageNode};

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Get the lowercase tag name of a selection's first node.
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_lowercase())
}

/// Get all text content of a selection's subtree.
///
/// Returns `StrTendril` for zero-copy passing; convert with `.to_string()`
/// only when owned storage is needed.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

impl<'a> PageNode for NodeRef<'a> {
    fn tag_name(&self) -> Option<String> {
        self.node_name().map(|t| t.to_lowercase())
    }

    fn attr(&self, name: &str) -> Option<String> {
        Selection::from(*self).attr(name).map(|v| v.to_string())
    }

    fn parts(&self) -> Vec<NodePart<Self>> {
        let mut parts = Vec::new();
        for child in self.children() {
            if child.is_element() {
                parts.push(NodePart::Element(child));
            } else if child.is_text() {
                parts.push(NodePart::Text(child.text().to_string()));
            }
        }
        parts
    }

    fn text_content(&self) -> String {
        text_content(&Selection::from(*self)).to_string()
    }

    fn same_node(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl PageDocument for Document {
    type Node<'a>
        = NodeRef<'a>
    where
        Self: 'a;

    fn title(&self) -> Option<String> {
        let title = self.select("head title");
        if title.is_empty() {
            return None;
        }
        let text = title.text();
        let text = text.trim();
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }

    fn all_elements(&self) -> Vec<NodeRef<'_>> {
        self.select("*").nodes().to_vec()
    }

    fn content_root(&self) -> Option<NodeRef<'_>> {
        self.select("body").nodes().first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_read_title() {
        let doc = parse("<html><head><title> My Page </title></head><body></body></html>");
        assert_eq!(doc.title().as_deref(), Some("My Page"));
    }

    #[test]
    fn missing_or_empty_title_is_none() {
        let doc = parse("<html><head></head><body><p>x</p></body></html>");
        assert_eq!(doc.title(), None);

        let doc = parse("<html><head><title>   </title></head><body></body></html>");
        assert_eq!(doc.title(), None);
    }

    #[test]
    fn content_root_is_body() {
        let doc = parse("<html><body><p>x</p></body></html>");
        let root = doc.content_root();
        assert_eq!(root.and_then(|r| PageNode::tag_name(&r)).as_deref(), Some("body"));
    }

    #[test]
    fn parts_preserve_mixed_child_order() {
        let doc = parse("<html><body><p>before <span>inner</span> after</p></body></html>");
        let p = doc.select("p");
        let Some(node) = p.nodes().first() else {
            panic!("p not found");
        };

        let mut shape = String::new();
        for part in node.parts() {
            match part {
                NodePart::Text(t) => shape.push_str(&format!("T({t})")),
                NodePart::Element(el) => {
                    shape.push_str(&format!("E({})", PageNode::tag_name(&el).unwrap_or_default()));
                }
            }
        }
        assert_eq!(shape, "T(before )E(span)T( after)");
    }

    #[test]
    fn direct_text_excludes_descendants() {
        let doc = parse("<html><body><div>own <p>child</p></div></body></html>");
        let div = doc.select("body div");
        let Some(node) = div.nodes().first() else {
            panic!("div not found");
        };
        assert_eq!(node.direct_text().trim(), "own");
        assert_eq!(PageNode::text_content(node).trim(), "own child");
    }

    #[test]
    fn all_elements_in_document_order() {
        let doc = parse("<html><body><section><h2>A</h2></section><p>B</p></body></html>");
        let tags: Vec<_> = doc
            .all_elements()
            .iter()
            .filter_map(PageNode::tag_name)
            .collect();
        let section = tags.iter().position(|t| t == "section");
        let h2 = tags.iter().position(|t| t == "h2");
        let p = tags.iter().position(|t| t == "p");
        assert!(section < h2 && h2 < p, "expected pre-order: {tags:?}");
    }

    #[test]
    fn same_node_tracks_identity() {
        let doc = parse("<html><body><p>a</p><p>a</p></body></html>");
        let sel = doc.select("p");
        let nodes = sel.nodes();
        assert!(nodes[0].same_node(&nodes[0]));
        assert!(!nodes[0].same_node(&nodes[1]));
    }
}
