//! Noise filtering pass.
//!
//! Removes every element matching any configured [`NoiseRule`], along with
//! its entire subtree, before rendering. Matching elements are collected
//! first and then detached, so removing an ancestor implicitly removes its
//! descendants without re-matching them.

use dom_query::Selection;

use crate::dom::{self, Document};
use crate::selector::NoiseRule;

/// Return a new tree with all rule-matching subtrees removed.
///
/// The input document is never mutated. An empty rule set yields an
/// equivalent tree; text nodes always pass through untouched.
#[must_use]
pub fn filter(doc: &Document, rules: &[NoiseRule]) -> Document {
    let filtered = dom::clone_document(doc);
    drop_noise(&filtered, rules);
    filtered
}

/// In-place variant of [`filter`] for trees the caller already owns
/// (the orchestrator runs it on its private clone).
pub fn drop_noise(doc: &Document, rules: &[NoiseRule]) {
    if rules.is_empty() {
        return;
    }

    let all = doc.select("*");
    let matched: Vec<Selection> = all
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .filter(|sel| rules.iter().any(|rule| rule.matches(sel)))
        .collect();

    for sel in matched {
        dom::remove(&sel);
    }
}
