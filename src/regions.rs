//! Priority content region location.
//!
//! Applies the policy's priority selectors against the document and keeps
//! matches with enough aggregate text to plausibly be a main-content
//! container rather than a decorative one sharing the same tag or class.

use crate::node::{PageDocument, PageNode};
use crate::options::Options;
use crate::selector;

/// Find likely main-content regions.
///
/// Selectors apply in declared order, each query in document order. A match
/// is kept only when its aggregate text length strictly exceeds
/// `options.min_region_text_len` characters. An element matched by several
/// overlapping selectors appears once per match unless
/// `options.dedupe_regions` is set. An empty result means no region was
/// identified; the orchestrator then falls back to a whole-tree walk.
#[must_use]
pub fn find_priority_regions<'a, D: PageDocument>(
    doc: &'a D,
    options: &Options,
) -> Vec<D::Node<'a>> {
    let mut regions: Vec<D::Node<'a>> = Vec::new();

    for sel in options.tags.priority_selectors() {
        for node in selector::query_all(doc, sel) {
            if node.text_content().chars().count() <= options.min_region_text_len {
                continue;
            }
            if options.dedupe_regions && regions.iter().any(|seen| seen.same_node(&node)) {
                continue;
            }
            regions.push(node);
        }
    }

    regions
}
