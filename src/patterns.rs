//! Compiled regex patterns for Markdown cleaning.
//!
//! All patterns are compiled once at startup using `LazyLock` for efficiency.
//! Patterns are listed in the order the cleaning passes apply them.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Whitespace Normalization Patterns
// =============================================================================

/// Matches runs of three or more newlines, collapsed to a blank line.
pub static EXCESS_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("EXCESS_NEWLINES regex"));

/// Matches runs of two or more spaces/tabs, collapsed to a single space.
pub static EXCESS_SPACING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]{2,}").expect("EXCESS_SPACING regex"));

/// Matches any whitespace run; used by the lighter title cleanup.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex"));

// =============================================================================
// Markup Sanitization Patterns
// =============================================================================

/// Matches Markdown links whose target uses the `javascript:` pseudo-protocol.
pub static JAVASCRIPT_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]*\]\(javascript:[^)]*\)").expect("JAVASCRIPT_LINK regex"));

/// Matches close/dismiss button glyphs left behind by removed UI chrome.
pub static DISMISS_GLYPHS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[×✕✖]").expect("DISMISS_GLYPHS regex"));

// =============================================================================
// Punctuation Normalization Patterns
// =============================================================================

/// Matches comma variants with surrounding whitespace; normalized to `，`.
pub static COMMA_VARIANTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*[,，]\s*").expect("COMMA_VARIANTS regex"));

/// Matches runs of an identical punctuation mark from the fixed CJK set.
pub static REPEATED_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([，。！？；：])\1+").expect("REPEATED_PUNCTUATION regex"));

// =============================================================================
// Boilerplate Phrase Patterns
// =============================================================================

/// Matches session-expiry tab notices injected by authenticated site shells.
pub static SESSION_TAB_NOTICE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"You signed (?:in|out) (?:with|in) another tab or window\.")
        .expect("SESSION_TAB_NOTICE regex")
});

/// Matches session-refresh prompts.
pub static SESSION_RELOAD_NOTICE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Reload to refresh your session\.").expect("SESSION_RELOAD_NOTICE regex"));

/// Matches rendered `[Reload](...)` links from session banners.
pub static RELOAD_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[Reload\]\([^)]+\)").expect("RELOAD_LINK regex"));

/// Literal boilerplate phrases removed during cleaning, in application order.
///
/// "Dismiss alert" precedes "Dismiss" so the longer phrase wins.
pub const DEFAULT_BOILERPLATE_PHRASES: &[&str] = &[
    "Skip to content",
    "Skip to main content",
    "Dismiss alert",
    "Dismiss",
    "Close",
];

/// Default boilerplate phrase list as owned strings for `Options`.
#[must_use]
pub fn default_boilerplate_phrases() -> Vec<String> {
    DEFAULT_BOILERPLATE_PHRASES
        .iter()
        .map(ToString::to_string)
        .collect()
}
