//! Result type for conversion output.

use serde::{Deserialize, Serialize};

/// Result of converting an HTML document to Markdown.
///
/// `content` is never empty when the input document held any non-whitespace
/// text: when rendering fails or yields nothing usable, it carries the
/// original raw HTML so downstream consumers (clipboard writers, paste
/// targets) always receive some text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Cleaned document title, if the document declared one.
    ///
    /// `None` on the raw-HTML fallback path even when a title was present.
    pub title: Option<String>,

    /// Final Markdown content, or the raw HTML on the fallback path.
    pub content: String,
}
