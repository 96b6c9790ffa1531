//! Markdown rendering.
//!
//! Recursive walk over a filtered document subtree, emitting Markdown per
//! element type. Leaf-like tags (headings, paragraphs, list items, links,
//! inline styles, quotes) flatten any nested markup to plain text - a
//! robustness trade-off against malformed nesting that callers must not
//! "fix" by recursing into them. Unmatched tags recurse through their
//! children.

use std::fmt::Write;

use dom_query::Selection;

use crate::dom;
use crate::error::{Error, Result};
use crate::url_norm;

/// Render an element subtree to Markdown.
///
/// Pure and side-effect free; the output depends only on the subtree.
/// Recursion is bounded by `max_depth`.
///
/// # Errors
///
/// Returns [`Error::ConversionFailure`] when the tree nests deeper than
/// `max_depth`. The orchestrator recovers from this by falling back to the
/// raw HTML input.
pub fn render(root: &Selection, max_depth: usize) -> Result<String> {
    if !root.exists() {
        return Ok(String::new());
    }
    let mut out = String::new();
    render_element(root, 0, max_depth, &mut out)?;
    Ok(out)
}

fn render_element(el: &Selection, depth: usize, max_depth: usize, out: &mut String) -> Result<()> {
    if depth > max_depth {
        return Err(Error::ConversionFailure(format!(
            "element tree nests deeper than {max_depth}"
        )));
    }

    let tag = dom::tag_name(el).unwrap_or_default();
    match tag.as_str() {
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
            let level = heading_level(&tag);
            out.push('\n');
            for _ in 0..level {
                out.push('#');
            }
            out.push(' ');
            out.push_str(flat_text(el).as_str());
            out.push('\n');
        }
        "p" => {
            out.push('\n');
            out.push_str(flat_text(el).as_str());
            out.push('\n');
        }
        "ul" => {
            out.push('\n');
            for item in el.select("li").iter() {
                out.push_str("* ");
                out.push_str(flat_text(&item).as_str());
                out.push('\n');
            }
        }
        "ol" => {
            out.push('\n');
            for (index, item) in el.select("li").iter().enumerate() {
                let _ = writeln!(out, "{}. {}", index + 1, flat_text(&item));
            }
        }
        "a" => {
            let text = flat_text(el);
            let href = dom::get_attribute(el, "href")
                .and_then(|href| url_norm::resolve_href(&href));
            match href {
                Some(href) => {
                    let _ = write!(out, "[{text}]({href})");
                }
                None => out.push_str(text.as_str()),
            }
        }
        "strong" | "b" => {
            let _ = write!(out, "**{}**", flat_text(el));
        }
        "em" | "i" => {
            let _ = write!(out, "*{}*", flat_text(el));
        }
        "code" => {
            let _ = write!(out, "`{}`", flat_text(el));
        }
        "pre" => {
            out.push_str("\n```\n");
            out.push_str(flat_text(el).as_str());
            out.push_str("\n```\n");
        }
        "blockquote" => {
            out.push_str("\n> ");
            out.push_str(&flat_text(el).replace('\n', "\n> "));
            out.push('\n');
        }
        "hr" => out.push_str("\n---\n"),
        "br" => out.push('\n'),
        _ => render_children(el, depth, max_depth, out)?,
    }

    Ok(())
}

/// Default branch: walk child nodes in order. Text nodes contribute their
/// trimmed content followed by one space; element nodes recurse. Childless
/// elements fall back to their flattened text content.
fn render_children(el: &Selection, depth: usize, max_depth: usize, out: &mut String) -> Result<()> {
    let Some(node) = el.nodes().first() else {
        return Ok(());
    };

    let mut has_children = false;
    for child in node.children() {
        has_children = true;
        if child.is_text() {
            push_text(child.text().trim(), out);
        } else if child.is_element() {
            let sel = Selection::from(child);
            render_element(&sel, depth + 1, max_depth, out)?;
        }
    }

    if !has_children {
        push_text(flat_text(el).as_str(), out);
    }

    Ok(())
}

fn push_text(text: &str, out: &mut String) {
    if !text.is_empty() {
        out.push_str(text);
        out.push(' ');
    }
}

/// Flattened text content of an element, trimmed at both ends.
fn flat_text(el: &Selection) -> String {
    dom::text_content(el).trim().to_string()
}

fn heading_level(tag: &str) -> usize {
    usize::from(tag.as_bytes()[1] - b'0')
}
