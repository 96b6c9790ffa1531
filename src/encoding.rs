//! Character encoding detection and transcoding.
//!
//! Fetch collaborators hand over raw response bytes; this module sniffs the
//! declared charset from meta tags and decodes to UTF-8 before the string
//! pipeline runs. Decoding is lossy: invalid sequences become U+FFFD rather
//! than errors.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// Number of leading bytes examined for a charset declaration.
const SNIFF_WINDOW: usize = 1024;

/// Matches `charset=...` in both `<meta charset="...">` and
/// `<meta http-equiv="Content-Type" content="...; charset=...">`.
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]*charset\s*=\s*["']?([^"'\s;>]+)"#).expect("META_CHARSET regex")
});

/// Decode raw HTML bytes to a UTF-8 string.
///
/// Detects the declared charset within the first kilobyte, defaulting to
/// UTF-8 when no declaration is found or the label is unknown.
#[must_use]
pub fn decode_html(bytes: &[u8]) -> String {
    let encoding = sniff_encoding(bytes);
    let (decoded, _, _) = encoding.decode(bytes);
    decoded.into_owned()
}

fn sniff_encoding(bytes: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(SNIFF_WINDOW)]);
    META_CHARSET
        .captures(&head)
        .and_then(|caps| caps.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}
