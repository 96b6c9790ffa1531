//! Default noise rule set.
//!
//! Identifies page chrome that should never reach the Markdown output:
//! scripts, navigation, auth banners, dialogs, share widgets, and session
//! notices. The set is plain configuration - callers can extend, replace,
//! or empty it per conversion via `Options`.

use super::NoiseRule;

/// Tags dropped outright.
const NOISE_TAGS: &[&str] = &[
    "script", "style", "iframe", "nav", "header", "footer", "noscript", "button",
];

/// ARIA roles marking non-content UI.
const NOISE_ROLES: &[&str] = &["banner", "navigation", "dialog", "alert", "status", "button"];

/// Class/id substring markers for site chrome.
const NOISE_MARKERS: &[&str] = &[
    "session",
    "auth",
    "dialog",
    "popup",
    "modal",
    "notification",
    "alert",
    "share",
    "social",
    "flash-notice",
    "skip-to-content",
];

/// The default rule set applied before rendering.
#[must_use]
pub fn default_rules() -> Vec<NoiseRule> {
    let mut rules =
        Vec::with_capacity(NOISE_TAGS.len() + NOISE_ROLES.len() + NOISE_MARKERS.len() + 2);

    for tag in NOISE_TAGS {
        rules.push(NoiseRule::tag(*tag));
    }
    for role in NOISE_ROLES {
        rules.push(NoiseRule::attr_value("role", *role));
    }
    rules.push(NoiseRule::attr_present("onclick"));
    rules.push(NoiseRule::attr_prefix("href", "javascript:"));
    for marker in NOISE_MARKERS {
        rules.push(NoiseRule::marker(*marker));
    }

    rules
}
