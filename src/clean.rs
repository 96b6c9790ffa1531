//! Markdown cleaning passes.
//!
//! A deterministic sequence of text transformations applied to the rendered
//! Markdown. Order matters: later passes assume earlier passes already
//! collapsed whitespace and punctuation. The sequence is re-applied until a
//! fixpoint so that `clean(clean(x)) == clean(x)` holds even when a phrase
//! removal re-opens a newline run; every pass is non-growing, so the loop
//! terminates.

use crate::patterns::{
    COMMA_VARIANTS, DISMISS_GLYPHS, EXCESS_NEWLINES, EXCESS_SPACING, JAVASCRIPT_LINK,
    RELOAD_LINK, REPEATED_PUNCTUATION, SESSION_RELOAD_NOTICE, SESSION_TAB_NOTICE,
    WHITESPACE_NORMALIZE, default_boilerplate_phrases,
};

/// Clean rendered Markdown using the default boilerplate phrase list.
#[must_use]
pub fn clean(markdown: &str) -> String {
    clean_with_phrases(markdown, &default_boilerplate_phrases())
}

/// Clean rendered Markdown with a caller-supplied boilerplate phrase list.
///
/// Passes, strictly in order per iteration:
/// 1. collapse 3+ newlines to exactly 2;
/// 2. collapse 2+ spaces/tabs to one space;
/// 3. remove Markdown links targeting `javascript:`;
/// 4. strip close/dismiss glyphs;
/// 5. normalize comma variants and collapse repeated CJK punctuation;
/// 6. remove session notices and the configured literal phrases;
/// 7. trim the whole string.
#[must_use]
pub fn clean_with_phrases(markdown: &str, phrases: &[String]) -> String {
    let mut current = run_passes(markdown, phrases);
    loop {
        let next = run_passes(&current, phrases);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Lighter text-only cleanup for document titles.
///
/// Collapses all whitespace to single spaces, removes the boilerplate
/// phrases, and trims. Returns `None` when nothing usable remains.
#[must_use]
pub fn clean_title(title: &str, phrases: &[String]) -> Option<String> {
    let collapsed = WHITESPACE_NORMALIZE.replace_all(title, " ");
    let stripped = strip_phrases(&collapsed, phrases);
    let collapsed = WHITESPACE_NORMALIZE.replace_all(&stripped, " ");
    let trimmed = collapsed.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn run_passes(text: &str, phrases: &[String]) -> String {
    let text = EXCESS_NEWLINES.replace_all(text, "\n\n");
    let text = EXCESS_SPACING.replace_all(&text, " ");
    let text = JAVASCRIPT_LINK.replace_all(&text, "");
    let text = DISMISS_GLYPHS.replace_all(&text, "");
    let text = COMMA_VARIANTS.replace_all(&text, "，");
    let text = REPEATED_PUNCTUATION.replace_all(&text, "$1");
    let text = SESSION_TAB_NOTICE.replace_all(&text, "");
    let text = SESSION_RELOAD_NOTICE.replace_all(&text, "");
    let text = RELOAD_LINK.replace_all(&text, "");
    let text = strip_phrases(&text, phrases);
    text.trim().to_string()
}

fn strip_phrases(text: &str, phrases: &[String]) -> String {
    let mut result = text.to_string();
    for phrase in phrases {
        if !phrase.is_empty() {
            result = result.replace(phrase.as_str(), "");
        }
    }
    result
}
