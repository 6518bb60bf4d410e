//! Document-order heading collection.
//!
//! Headings are collected over the whole document, independent of the
//! exclusion and priority-region logic: even when content is restricted to
//! one region, `metadata.headings` reflects every heading on the page, in
//! the order a pre-order scan visits them.

use crate::node::{PageDocument, PageNode};
use crate::result::Heading;
use crate::tags::heading_level;

/// Collect all `h1`..`h6` headings with non-empty aggregate text.
///
/// Returns an ordered, possibly empty sequence; no failure modes.
#[must_use]
pub fn collect_headings<D: PageDocument>(doc: &D) -> Vec<Heading> {
    let mut headings = Vec::new();

    for node in doc.all_elements() {
        let Some(level) = node.tag_name().as_deref().and_then(heading_level) else {
            continue;
        };
        let text = node.text_content();
        let text = text.trim();
        if text.is_empty() {
            continue;
        }
        headings.push(Heading {
            level,
            text: text.to_string(),
        });
    }

    headings
}
