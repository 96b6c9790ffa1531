//! Configuration options for conversion.
//!
//! The noise rule set and boilerplate phrase list are explicit per-call
//! configuration rather than module-level state, so callers can customize
//! or disable them without touching globals.

use crate::patterns;
use crate::selector::{self, NoiseRule};

/// Configuration options for HTML to Markdown conversion.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use clipmark::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     include_title: false,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Noise rules applied before rendering. An empty list disables
    /// filtering entirely.
    ///
    /// Default: [`selector::default_rules`]
    pub rules: Vec<NoiseRule>,

    /// Literal boilerplate phrases removed during cleaning, in order.
    ///
    /// Session-notice patterns are fixed built-ins of the cleaner; this list
    /// covers the literal site-chrome phrases.
    ///
    /// Default: "Skip to content", "Skip to main content", "Dismiss alert",
    /// "Dismiss", "Close"
    pub boilerplate_phrases: Vec<String>,

    /// Prepend the cleaned document title as an H1 heading.
    ///
    /// Default: `true`
    pub include_title: bool,

    /// Maximum tree depth for rendering.
    ///
    /// Documents nesting deeper than this fall back to raw HTML output.
    ///
    /// Default: `100`
    pub max_tree_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            rules: selector::default_rules(),
            boilerplate_phrases: patterns::default_boilerplate_phrases(),
            include_title: true,
            max_tree_depth: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = Options::default();

        assert!(!opts.rules.is_empty());
        assert!(opts.rules.contains(&NoiseRule::tag("nav")));
        assert!(opts
            .boilerplate_phrases
            .contains(&"Skip to content".to_string()));
        assert!(opts.include_title);
        assert_eq!(opts.max_tree_depth, 100);
    }

    #[test]
    fn test_options_can_disable_filtering() {
        let opts = Options {
            rules: Vec::new(),
            ..Options::default()
        };
        assert!(opts.rules.is_empty());
    }
}
