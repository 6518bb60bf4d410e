//! Error types for domtext.
//!
//! Extraction itself degrades gracefully and never fails; errors arise only
//! when building a [`crate::TagPolicy`] from user-supplied selector strings.

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A priority selector string could not be parsed.
    ///
    /// Priority selectors are a plain tag name (`article`), a class token
    /// (`.content`), or a tag with a class qualifier (`div.content`).
    #[error("invalid priority selector: {0:?}")]
    InvalidSelector(String),
}

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, Error>;
