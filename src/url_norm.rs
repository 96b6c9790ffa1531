//! URL validation and canonicalization.
//!
//! The normalizer turns a user-supplied string (typically read from the
//! clipboard) into an absolute, schemed URL before any fetch is attempted.
//! It is the only component that surfaces errors to the caller.

use url::Url;

use crate::error::{Error, Result};

/// Validate and canonicalize a user-supplied URL string.
///
/// Trims the input, prepends `https://` when no `http://`/`https://` prefix
/// is present, parses it as an absolute URL, and requires a non-empty host.
/// The returned string is the canonical form produced by the URL standard
/// (lower-cased scheme/host, default ports removed, normalized path), so the
/// operation is idempotent: normalizing an already-normalized URL returns the
/// same string.
///
/// # Errors
///
/// Returns [`Error::InvalidUrl`] when the input is empty after trimming,
/// cannot be parsed after prefix repair, or resolves to an empty host.
pub fn normalize(input: &str) -> Result<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidUrl("URL cannot be empty".to_string()));
    }

    let candidate = if has_http_prefix(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let url = Url::parse(&candidate)
        .map_err(|err| Error::InvalidUrl(format!("{candidate}: {err}")))?;

    if url.host_str().is_none_or(str::is_empty) {
        return Err(Error::InvalidUrl(format!("{candidate}: missing host")));
    }

    Ok(url.to_string())
}

/// Scheme prefixes are matched case-insensitively; `Url::parse` lower-cases
/// them during canonicalization.
fn has_http_prefix(s: &str) -> bool {
    ["http://", "https://"]
        .into_iter()
        .any(|prefix| s.get(..prefix.len()).is_some_and(|head| head.eq_ignore_ascii_case(prefix)))
}

/// Canonicalize an `href` attribute value for link rendering.
///
/// Accepts any parseable absolute URL, whatever the scheme - `javascript:`
/// pseudo-links are emitted here and stripped later by the text cleaner.
/// Relative hrefs return `None`: the pipeline holds no base URL to resolve
/// them against, so they flatten to plain text.
#[must_use]
pub fn resolve_href(href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }
    Url::parse(href).ok().map(|url| url.to_string())
}
