//! Conversion orchestration.
//!
//! Composes the pipeline: parse, read the title, clone the document, drop
//! noise on the clone, render the body, clean the Markdown, and prepend the
//! title heading. Any internal failure degrades to the raw-HTML fallback
//! instead of propagating - downstream consumers must always receive some
//! text.

use crate::clean;
use crate::dom::{self, Document};
use crate::filtering;
use crate::options::Options;
use crate::result::ExtractionResult;
use crate::render;

/// Run the full conversion pipeline on an HTML document string.
pub(crate) fn extract_document(html: &str, options: &Options) -> ExtractionResult {
    let document = dom::parse(html);

    let title = read_title(&document, options);

    // The caller's tree is never mutated; filtering runs on a private clone.
    let working = dom::clone_document(&document);
    filtering::drop_noise(&working, &options.rules);

    let body = working.select("body");
    let markdown = match render::render(&body, options.max_tree_depth) {
        Ok(markdown) => markdown,
        Err(err) => {
            if cfg!(debug_assertions) {
                eprintln!("DEBUG: rendering failed, falling back to raw HTML: {err}");
            }
            return raw_fallback(html);
        }
    };

    let content = clean::clean_with_phrases(&markdown, &options.boilerplate_phrases);

    // The result must carry text whenever the document had any; if filtering
    // and cleaning ate everything, hand back the original markup.
    if content.is_empty() && body_has_text(&document) {
        return raw_fallback(html);
    }

    let content = match &title {
        Some(title) if options.include_title => format!("# {title}\n\n{content}"),
        _ => content,
    };

    ExtractionResult { title, content }
}

fn read_title(document: &Document, options: &Options) -> Option<String> {
    let sel = document.select("title");
    if !sel.exists() {
        return None;
    }
    clean::clean_title(&dom::text_content(&sel), &options.boilerplate_phrases)
}

fn body_has_text(document: &Document) -> bool {
    !dom::text_content(&document.select("body")).trim().is_empty()
}

fn raw_fallback(html: &str) -> ExtractionResult {
    ExtractionResult {
        title: None,
        content: html.to_string(),
    }
}
