//! Character encoding detection for byte input.
//!
//! Web pages declare their charset in meta tags; the byte entry points
//! sniff the declaration near the top of the document and decode to UTF-8
//! before parsing. Decoding is lossy: malformed sequences become the
//! Unicode replacement character, never an error.

use encoding_rs::{Encoding, UTF_8};

use crate::patterns::META_CHARSET;

/// How many leading bytes are examined for a charset declaration.
const SNIFF_WINDOW: usize = 1024;

/// Detect the document encoding from a meta charset declaration.
///
/// Handles both `<meta charset="...">` and the legacy
/// `http-equiv="Content-Type"` form; unknown or missing labels default to
/// UTF-8.
#[must_use]
pub fn sniff_encoding(html: &[u8]) -> &'static Encoding {
    let head = &html[..html.len().min(SNIFF_WINDOW)];
    let head = String::from_utf8_lossy(head);

    META_CHARSET
        .captures(&head)
        .and_then(|caps| caps.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode HTML bytes to a UTF-8 string using the sniffed encoding.
#[must_use]
pub fn decode_html(html: &[u8]) -> String {
    let encoding = sniff_encoding(html);
    if encoding == UTF_8 {
        // Fast path: lossy conversion without a transcoding pass
        return String::from_utf8_lossy(html).into_owned();
    }

    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}
