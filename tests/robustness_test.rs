//! Conversion must never panic or return nothing, whatever the input.

use clipmark::{convert, convert_with_options, Options};

#[test]
fn convert_does_not_panic_on_malformed_html_unclosed_tags() {
    let result = convert("<p>text<div>more");
    assert!(result.content.contains("text"));
    assert!(result.content.contains("more"));
}

#[test]
fn convert_does_not_panic_on_malformed_html_invalid_nesting() {
    let result = convert("<p><div></p></div>");
    assert!(result.title.is_none());
}

#[test]
fn convert_does_not_panic_on_broken_attributes() {
    let _ = convert("<div class=\"test id=broken>");
}

#[test]
fn convert_does_not_panic_on_incomplete_entities() {
    let result = convert("&amp text &lt;");
    assert!(result.content.contains("text"));
}

#[test]
fn convert_does_not_panic_on_null_bytes() {
    let result = convert("text\x00more");
    assert!(!result.content.is_empty());
}

#[test]
fn convert_handles_empty_input() {
    let result = convert("");
    assert_eq!(result.title, None);
    assert!(result.content.is_empty());
}

#[test]
fn convert_handles_whitespace_only_input() {
    let result = convert("   \n\t  ");
    assert_eq!(result.title, None);
    assert!(result.content.is_empty());
}

#[test]
fn convert_handles_minimal_html() {
    let result = convert("<html></html>");
    assert!(result.content.is_empty());
}

#[test]
fn deeply_nested_document_falls_back_to_raw_html() {
    let mut html = String::from("<html><body>");
    for _ in 0..50 {
        html.push_str("<div>");
    }
    html.push_str("buried text");
    for _ in 0..50 {
        html.push_str("</div>");
    }
    html.push_str("</body></html>");

    let options = Options {
        max_tree_depth: 10,
        ..Options::default()
    };
    let result = convert_with_options(&html, &options);

    // The raw input is the fallback: never lose the text entirely.
    assert_eq!(result.title, None);
    assert_eq!(result.content, html);
}

#[test]
fn all_noise_document_falls_back_to_raw_html() {
    let html = "<html><body><nav>home about contact</nav><footer>legal</footer></body></html>";
    let result = convert(html);

    assert_eq!(result.title, None);
    assert_eq!(result.content, html);
}

#[test]
fn convert_handles_large_documents() {
    let mut html = String::from("<html><body>");
    for i in 0..2000 {
        html.push_str(&format!("<p>Paragraph number {i} with some filler text.</p>"));
    }
    html.push_str("</body></html>");

    let result = convert(&html);

    assert!(result.content.contains("Paragraph number 0"));
    assert!(result.content.contains("Paragraph number 1999"));
}

#[test]
fn convert_never_errors_only_degrades() {
    // Everything that can go wrong internally must surface as content,
    // not as an error or a panic.
    let inputs = [
        "",
        "<",
        "<!DOCTYPE html>",
        "<html><head></head></html>",
        "plain text without any markup",
        "<script>alert('x')</script>",
    ];
    for input in inputs {
        let _ = convert(input);
    }
}
