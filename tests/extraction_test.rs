//! End-to-end conversion tests.

use clipmark::{convert, convert_with_options, ExtractionResult, Options};

#[test]
fn converts_simple_page_with_title_and_nav() {
    let html = "<html><head><title>Hi</title></head><body><nav>skip</nav><h1>Hello</h1><p>World</p></body></html>";
    let result = convert(html);

    assert_eq!(result.title.as_deref(), Some("Hi"));
    assert!(result.content.starts_with("# Hi\n\n# Hello"));
    assert!(result.content.contains("World"));
    assert!(!result.content.contains("skip"));
}

#[test]
fn strips_session_chrome_from_authenticated_page() {
    let html = r##"<html><head><title>widget-factory/README</title></head><body>
        <a class="js-skip-to-content" href="#start">Skip to content</a>
        <header><div role="navigation">Product Pricing Docs</div></header>
        <div class="js-notification-shelf">
            You signed in with another tab or window.
            <a href="https://example.com/session">Reload</a> to refresh your session.
        </div>
        <h1>widget-factory</h1>
        <p>A factory for widgets.</p>
        <div class="share-buttons"><button>Tweet</button></div>
        <footer>Terms Privacy</footer>
    </body></html>"##;

    let result = convert(html);

    assert_eq!(result.title.as_deref(), Some("widget-factory/README"));
    assert!(result.content.contains("# widget-factory"));
    assert!(result.content.contains("A factory for widgets."));
    assert!(!result.content.contains("Skip to content"));
    assert!(!result.content.contains("signed in"));
    assert!(!result.content.contains("Pricing"));
    assert!(!result.content.contains("Tweet"));
    assert!(!result.content.contains("Terms"));
}

#[test]
fn renders_structured_content() {
    let html = r#"<html><body>
        <h2>Features</h2>
        <ul><li>fast</li><li>small</li></ul>
        <ol><li>install</li><li>run</li></ol>
        <p>Uses <code>serde</code> and <strong>tokio</strong>.</p>
        <pre>cargo add clipmark</pre>
        <blockquote>quoted wisdom</blockquote>
        <hr>
        <a href="https://docs.rs">Docs</a>
    </body></html>"#;

    let result = convert(html);

    assert!(result.content.contains("## Features"));
    assert!(result.content.contains("* fast\n* small"));
    assert!(result.content.contains("1. install\n2. run"));
    assert!(result.content.contains("Uses serde and tokio."));
    assert!(result.content.contains("```\ncargo add clipmark\n```"));
    assert!(result.content.contains("> quoted wisdom"));
    assert!(result.content.contains("---"));
    assert!(result.content.contains("[Docs](https://docs.rs/)"));
}

#[test]
fn empty_rule_set_keeps_navigation() {
    let html = "<html><body><nav>menu items</nav><p>Body</p></body></html>";
    let options = Options {
        rules: Vec::new(),
        ..Options::default()
    };

    let result = convert_with_options(html, &options);

    assert!(result.content.contains("menu items"));
    assert!(result.content.contains("Body"));
}

#[test]
fn custom_phrase_list_is_applied() {
    let html = "<html><body><p>Subscribe to our newsletter today</p><p>Real content</p></body></html>";
    let options = Options {
        boilerplate_phrases: vec!["Subscribe to our newsletter today".to_string()],
        ..Options::default()
    };

    let result = convert_with_options(html, &options);

    assert!(!result.content.contains("newsletter"));
    assert!(result.content.contains("Real content"));
}

#[test]
fn result_round_trips_through_json() {
    let html = "<html><head><title>Hi</title></head><body><p>World</p></body></html>";
    let result = convert(html);

    let json = serde_json::to_string(&result).unwrap();
    let back: ExtractionResult = serde_json::from_str(&json).unwrap();

    assert_eq!(back, result);
}

#[test]
fn convert_bytes_honors_declared_charset() {
    let html =
        b"<html><head><meta charset=\"ISO-8859-1\"><title>Caf\xE9</title></head><body><p>Na\xEFve text</p></body></html>";
    let result = clipmark::convert_bytes(html);

    assert_eq!(result.title.as_deref(), Some("Caf\u{e9}"));
    assert!(result.content.contains("Na\u{ef}ve text"));
}
