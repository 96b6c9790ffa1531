//! DOM Operations Adapter
//!
//! Thin wrapper over the `dom_query` crate exposing the named operations the
//! conversion pipeline relies on. Keeping them behind one module pins down the
//! parser contract: tag names, attributes, and text content must survive
//! parsing losslessly for the tags the renderer handles.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

// === Parsing ===

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Clone a document.
///
/// The clone shares nothing with the original; mutating it leaves the
/// original tree untouched.
#[must_use]
pub fn clone_document(doc: &Document) -> Document {
    Document::from(doc.html().to_string())
}

// === Attribute Operations ===

/// Get element ID attribute.
#[inline]
#[must_use]
pub fn id(sel: &Selection) -> Option<String> {
    sel.attr("id").map(|s| s.to_string())
}

/// Get element class attribute.
#[inline]
#[must_use]
pub fn class_name(sel: &Selection) -> Option<String> {
    sel.attr("class").map(|s| s.to_string())
}

/// Get any attribute value.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Check if an attribute exists.
#[inline]
#[must_use]
pub fn has_attribute(sel: &Selection, name: &str) -> bool {
    sel.has_attr(name)
}

// === Tag/Node Information ===

/// Get tag name (lowercase).
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

// === Text Content ===

/// Get all text content of node and descendants.
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

// === Tree Manipulation ===

/// Remove elements (and their subtrees) from the tree.
#[inline]
pub fn remove(sel: &Selection) {
    sel.remove();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_select() {
        let doc = parse(r#"<div id="main" class="container">content</div>"#);
        let div = doc.select("div");

        assert_eq!(id(&div), Some("main".to_string()));
        assert_eq!(class_name(&div), Some("container".to_string()));
        assert_eq!(tag_name(&div), Some("div".to_string()));
    }

    #[test]
    fn test_tag_name_is_lowercase() {
        let doc = parse("<ARTICLE>content</ARTICLE>");
        let article = doc.select("article");
        assert_eq!(tag_name(&article), Some("article".to_string()));
    }

    #[test]
    fn test_text_content_flattens_descendants() {
        let doc = parse("<div>before <b>bold</b> after</div>");
        let div = doc.select("div");
        assert_eq!(text_content(&div), "before bold after".into());
    }

    #[test]
    fn test_attribute_access() {
        let doc = parse(r#"<a href="/post" onclick="go()">text</a>"#);
        let link = doc.select("a");

        assert_eq!(get_attribute(&link, "href"), Some("/post".to_string()));
        assert!(has_attribute(&link, "onclick"));
        assert!(!has_attribute(&link, "role"));
    }

    #[test]
    fn test_remove_detaches_subtree() {
        let doc = parse(r#"<div><span class="ad">ad <b>x</b></span><p>content</p></div>"#);

        remove(&doc.select(".ad"));

        assert!(doc.select(".ad").is_empty());
        assert!(doc.select("b").is_empty());
        assert!(doc.select("p").exists());
    }

    #[test]
    fn test_clone_document_is_independent() {
        let doc = parse("<div><p>original</p></div>");
        let cloned = clone_document(&doc);

        remove(&cloned.select("p"));

        assert!(doc.select("p").exists());
        assert!(cloned.select("p").is_empty());
    }
}
