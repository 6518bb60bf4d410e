//! Extraction orchestrator.
//!
//! Single-pass, stateless pipeline: metadata and headings first, then
//! priority-region location, then one content walk per region (or one walk
//! of the document's primary container when no region qualifies), then
//! formatting. Holds no cross-call state; concurrent extractions on
//! independent documents need no coordination. Every degraded state (no
//! body, no headings, no regions, empty tree) resolves to an emptier
//! result, never an error.

use url::Url;

use crate::dom;
use crate::format;
use crate::headings;
use crate::node::PageDocument;
use crate::options::Options;
use crate::regions;
use crate::result::{ExtractionResult, Metadata};
use crate::walker::{self, ContentChunk};

/// Parse an HTML string and extract from the resulting document.
pub(crate) fn extract_html(html: &str, options: &Options) -> ExtractionResult {
    let document = dom::parse(html);
    extract_document(&document, options)
}

/// Extract content and metadata from a parsed document.
///
/// Works over any [`PageDocument`] backend; [`crate::dom`] provides the
/// `dom_query`-based one used by the string entry points. The result is a
/// best-effort snapshot of the tree at call time: when the host document
/// is mutated mid-walk, child lists are re-read as visited and no
/// atomicity across the whole extraction is implied.
#[must_use]
pub fn extract_document<D: PageDocument>(doc: &D, options: &Options) -> ExtractionResult {
    let metadata = Metadata {
        title: doc.title(),
        url: options.url.clone(),
        hostname: options.url.as_deref().and_then(hostname_of),
        headings: headings::collect_headings(doc),
    };

    let found = regions::find_priority_regions(doc, options);
    let chunks: Vec<ContentChunk> = if found.is_empty() {
        // No priority region identified: walk the whole primary container.
        match doc.content_root() {
            Some(root) => walker::walk(&root, &options.tags),
            None => Vec::new(),
        }
    } else {
        // Walk each region independently, depth restarting at 0 per region.
        found
            .iter()
            .flat_map(|region| walker::walk(region, &options.tags))
            .collect()
    };

    ExtractionResult {
        content: format::format_chunks(&chunks),
        metadata,
    }
}

fn hostname_of(raw: &str) -> Option<String> {
    Url::parse(raw)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
}
