//! Engine-independent node and document abstractions.
//!
//! The extraction core reads markup trees only through these traits, so it
//! is not tied to any concrete markup engine: the bundled backend
//! (`crate::dom`, built on `dom_query`) is one implementation, and tests
//! exercise the same code against a synthetic in-memory tree.
//!
//! Nodes are not owned by this crate. They are cheap handles into a live
//! tree owned by the host document, which may be mutated between reads;
//! child lists are therefore re-read at each visit instead of being
//! snapshotted up front.

/// One entry in a node's ordered child list: either a run of character data
/// or a child element.
#[derive(Debug, Clone)]
pub enum NodePart<N> {
    /// Character data belonging directly to the parent node.
    Text(String),
    /// A child element.
    Element(N),
}

/// Abstract handle over one element of a markup tree.
pub trait PageNode: Clone {
    /// Lowercase tag name, or `None` for nodes without one.
    fn tag_name(&self) -> Option<String>;

    /// Attribute value by name.
    fn attr(&self, name: &str) -> Option<String>;

    /// Ordered mixed children: text runs and child elements in document
    /// order. Comments and other non-text, non-element nodes are omitted.
    fn parts(&self) -> Vec<NodePart<Self>>;

    /// Aggregate text of the whole subtree.
    fn text_content(&self) -> String;

    /// Whether two handles refer to the same physical node.
    fn same_node(&self, other: &Self) -> bool;

    /// Direct child elements in document order.
    fn element_children(&self) -> Vec<Self> {
        self.parts()
            .into_iter()
            .filter_map(|part| match part {
                NodePart::Element(el) => Some(el),
                NodePart::Text(_) => None,
            })
            .collect()
    }

    /// Text belonging immediately to this node, excluding text inside child
    /// elements. Returned untrimmed; callers trim.
    fn direct_text(&self) -> String {
        let mut text = String::new();
        for part in self.parts() {
            if let NodePart::Text(t) = part {
                text.push_str(&t);
            }
        }
        text
    }
}

/// Document-wide view backing heading collection and priority queries.
pub trait PageDocument {
    /// Node handle type produced by this document.
    type Node<'a>: PageNode
    where
        Self: 'a;

    /// Document title, if present and non-empty after trimming.
    fn title(&self) -> Option<String>;

    /// Every element in the document, in pre-order document order.
    fn all_elements(&self) -> Vec<Self::Node<'_>>;

    /// The primary content container used as the fallback walk root
    /// (`<body>` in the HTML backend). `None` degrades to an empty walk.
    fn content_root(&self) -> Option<Self::Node<'_>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::TagPolicy;
    use crate::walker;
    use std::rc::Rc;

    // Minimal synthetic tree proving the core runs without a markup engine.

    #[derive(Clone)]
    struct FakeNode(Rc<FakeElement>);

    struct FakeElement {
        tag: String,
        class: Option<String>,
        parts: Vec<FakePart>,
    }

    enum FakePart {
        Text(String),
        Element(FakeNode),
    }

    fn el(tag: &str, parts: Vec<FakePart>) -> FakeNode {
        FakeNode(Rc::new(FakeElement {
            tag: tag.to_string(),
            class: None,
            parts,
        }))
    }

    fn text(t: &str) -> FakePart {
        FakePart::Text(t.to_string())
    }

    fn child(node: FakeNode) -> FakePart {
        FakePart::Element(node)
    }

    impl PageNode for FakeNode {
        fn tag_name(&self) -> Option<String> {
            Some(self.0.tag.clone())
        }

        fn attr(&self, name: &str) -> Option<String> {
            (name == "class").then(|| self.0.class.clone()).flatten()
        }

        fn parts(&self) -> Vec<NodePart<Self>> {
            self.0
                .parts
                .iter()
                .map(|part| match part {
                    FakePart::Text(t) => NodePart::Text(t.clone()),
                    FakePart::Element(n) => NodePart::Element(n.clone()),
                })
                .collect()
        }

        fn text_content(&self) -> String {
            let mut out = String::new();
            for part in &self.0.parts {
                match part {
                    FakePart::Text(t) => out.push_str(t),
                    FakePart::Element(n) => out.push_str(&n.text_content()),
                }
            }
            out
        }

        fn same_node(&self, other: &Self) -> bool {
            Rc::ptr_eq(&self.0, &other.0)
        }
    }

    #[test]
    fn direct_text_excludes_child_element_text() {
        let node = el(
            "p",
            vec![text("before "), child(el("span", vec![text("inner")])), text(" after")],
        );
        assert_eq!(node.direct_text(), "before  after");
        assert_eq!(node.text_content(), "before inner after");
    }

    #[test]
    fn element_children_skips_text_parts() {
        let node = el(
            "div",
            vec![text("x"), child(el("p", vec![])), text("y"), child(el("span", vec![]))],
        );
        let tags: Vec<_> = node
            .element_children()
            .iter()
            .map(|c| c.tag_name().unwrap_or_default())
            .collect();
        assert_eq!(tags, ["p", "span"]);
    }

    #[test]
    fn same_node_is_identity_not_equality() {
        let a = el("p", vec![text("same text")]);
        let b = el("p", vec![text("same text")]);
        assert!(a.same_node(&a.clone()));
        assert!(!a.same_node(&b));
    }

    #[test]
    fn walker_runs_on_synthetic_tree() {
        let tree = el(
            "div",
            vec![
                child(el("h1", vec![text("Title")])),
                child(el("p", vec![text("Body text.")])),
                child(el("button", vec![text("click")])),
            ],
        );

        let chunks = walker::walk(&tree, &TagPolicy::default());
        let texts: Vec<_> = chunks.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, ["Title", "Body text."]);
        assert!(chunks[0].is_heading);
        assert_eq!(chunks[0].depth, 1);
    }
}
