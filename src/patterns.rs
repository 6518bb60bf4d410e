//! Compiled regex patterns for classification and formatting.
//!
//! All patterns are compiled once at first use via `LazyLock` and shared for
//! the program lifetime.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Matches heading tag names `h1`..`h6`, capturing the level digit.
pub static HEADING_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^h([1-6])$").expect("HEADING_TAG regex"));

/// Matches runs of three or more consecutive newlines.
pub static MULTIPLE_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("MULTIPLE_NEWLINES regex"));

/// Matches a charset declaration in the document head, covering both
/// `<meta charset="...">` and the legacy
/// `<meta http-equiv="Content-Type" content="...; charset=...">` form.
pub static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([a-zA-Z0-9._:-]+)"#).expect("META_CHARSET regex")
});
