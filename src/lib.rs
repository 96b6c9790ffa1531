//! # clipmark
//!
//! Converts a web page's raw HTML into clean, readable Markdown that can be
//! pasted into an arbitrary input field.
//!
//! The pipeline strips chrome, navigation, and session noise with a
//! configurable rule set, renders the remaining tree to Markdown, and runs a
//! deterministic sequence of cleaning passes over the result. Host-runtime
//! concerns (clipboard access, network fetch, paste targets) stay outside
//! this crate; it is a pure string-to-string transform plus a URL validator.
//!
//! ## Quick Start
//!
//! ```rust
//! use clipmark::convert;
//!
//! let html = r#"<html><head><title>My Post</title></head>
//! <body><nav>site menu</nav><h1>Hello</h1><p>Body text here.</p></body></html>"#;
//!
//! let result = convert(html);
//! assert_eq!(result.title.as_deref(), Some("My Post"));
//! assert!(result.content.starts_with("# My Post"));
//! assert!(result.content.contains("Body text here."));
//! assert!(!result.content.contains("site menu"));
//! ```
//!
//! ## Guarantees
//!
//! - **Never empty-handed**: if rendering fails or yields no usable text
//!   while the document had some, the result degrades to the original raw
//!   HTML instead of erroring.
//! - **Pure and synchronous**: no shared state, no suspension points; safe
//!   to run on any thread and trivially parallel across documents.

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over dom_query.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Selector rules for noise detection.
pub mod selector;

/// Noise filtering pass (subtree removal).
pub mod filtering;

/// Markdown rendering.
pub mod render;

/// Markdown cleaning passes.
pub mod clean;

/// URL validation and canonicalization.
pub mod url_norm;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::Options;
pub use result::ExtractionResult;

/// Convert an HTML document to cleaned Markdown using default options.
///
/// # Arguments
///
/// * `html` - The HTML document as a string slice
///
/// # Returns
///
/// An [`ExtractionResult`] with the cleaned title (if any) and the Markdown
/// content. This function does not fail: internal rendering errors degrade
/// to `{ title: None, content: <original html> }`.
///
/// # Example
///
/// ```rust
/// use clipmark::convert;
///
/// let result = convert("<html><body><p>Some text.</p></body></html>");
/// assert_eq!(result.content, "Some text.");
/// ```
#[must_use]
pub fn convert(html: &str) -> ExtractionResult {
    convert_with_options(html, &Options::default())
}

/// Convert an HTML document to cleaned Markdown with custom options.
///
/// # Example
///
/// ```rust
/// use clipmark::{convert_with_options, Options};
///
/// let options = Options {
///     include_title: false,
///     ..Options::default()
/// };
/// let html = "<html><head><title>T</title></head><body><p>Body.</p></body></html>";
/// let result = convert_with_options(html, &options);
/// assert_eq!(result.content, "Body.");
/// ```
#[must_use]
pub fn convert_with_options(html: &str, options: &Options) -> ExtractionResult {
    extract::extract_document(html, options)
}

/// Convert HTML bytes with automatic charset detection.
///
/// Detects the declared encoding from meta tags (defaulting to UTF-8),
/// decodes lossily, then runs the string pipeline. Useful when the fetch
/// collaborator hands over a raw response body.
///
/// # Example
///
/// ```rust
/// use clipmark::convert_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><p>Caf\xE9</p></body></html>";
/// let result = convert_bytes(html);
/// assert!(result.content.contains("Caf\u{e9}"));
/// ```
#[must_use]
pub fn convert_bytes(html: &[u8]) -> ExtractionResult {
    convert_bytes_with_options(html, &Options::default())
}

/// Convert HTML bytes with custom options and automatic charset detection.
#[must_use]
pub fn convert_bytes_with_options(html: &[u8], options: &Options) -> ExtractionResult {
    let html = encoding::decode_html(html);
    convert_with_options(&html, options)
}
