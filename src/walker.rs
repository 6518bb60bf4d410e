//! Pre-order content walk.
//!
//! Traverses a subtree depth-first and collects text chunks from
//! content-bearing nodes. Excluded tags prune their entire subtree;
//! exclusion always wins over content-bearing status. The traversal runs on
//! an explicit work stack rather than native recursion, so nesting depth is
//! bounded by heap rather than the call stack on pathological documents,
//! with the same emission order.

use crate::node::PageNode;
use crate::tags::{is_heading_tag, TagPolicy};

/// One unit of extracted text, produced transiently during a walk and
/// consumed once by the formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentChunk {
    /// Trimmed, non-empty direct text of the source node.
    pub text: String,

    /// Lowercase tag name of the source node.
    pub tag: String,

    /// Number of element ancestors between the source node and the walk
    /// root (root = 0).
    pub depth: usize,

    /// Whether the tag is `h1`..`h6`, independent of content-bearing
    /// membership.
    pub is_heading: bool,
}

/// Walk a subtree in pre-order and collect content chunks.
///
/// A node contributes a chunk only when its direct text (text-type children
/// only, trimmed) is non-empty AND its tag is content-bearing; the chunk
/// always precedes its descendants' chunks. Unclassified tags contribute
/// nothing themselves but their children are still visited. Child lists are
/// read when a node is visited, not snapshotted up front, tolerating
/// concurrent mutation of the underlying tree.
#[must_use]
pub fn walk<N: PageNode>(root: &N, tags: &TagPolicy) -> Vec<ContentChunk> {
    let mut chunks = Vec::new();
    // Children are pushed in reverse so the leftmost child is visited first.
    let mut stack: Vec<(N, usize)> = vec![(root.clone(), 0)];

    while let Some((node, depth)) = stack.pop() {
        let tag = node.tag_name().unwrap_or_default();
        if tags.is_excluded(&tag) {
            continue;
        }

        let direct = node.direct_text();
        let text = direct.trim();
        if !text.is_empty() && tags.is_content_bearing(&tag) {
            let is_heading = is_heading_tag(&tag);
            chunks.push(ContentChunk {
                text: text.to_string(),
                tag,
                depth,
                is_heading,
            });
        }

        for child in node.element_children().into_iter().rev() {
            stack.push((child, depth + 1));
        }
    }

    chunks
}
