//! URL sanitization: strips tracking parameters from a traced final-hop URL.
//!
//! The input URL is untrusted (it is whatever the redirect chain ended on), so
//! parsing goes through the `url` crate rather than manual slash/equals
//! splitting, which silently mishandles encoded separators. The sanitized
//! output reports exactly which parameters were dropped so the page can show
//! its removed-parameters audit line.

mod rules;

pub use rules::TrackingRuleSet;

use std::collections::BTreeSet;

use thiserror::Error;
use url::{Position, Url};

use crate::config::MAX_URL_LENGTH;

/// Error types for URL sanitization.
#[derive(Error, Debug)]
pub enum SanitizeError {
    /// The input could not be parsed as an absolute URL.
    #[error("malformed URL: {0}")]
    MalformedUrl(#[from] url::ParseError),

    /// The input exceeds the maximum accepted URL length.
    #[error("URL exceeds maximum length ({length} > {MAX_URL_LENGTH})")]
    TooLong {
        /// Actual length of the rejected input.
        length: usize,
    },
}

/// Decomposed view of a raw URL.
///
/// `base` runs from the scheme through the end of the path. Query pairs keep
/// their input order, duplicates included. Valueless query segments are not
/// parameters; they are carried separately so they survive reconstruction
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    /// Scheme, authority, and path, up to and including the final path segment.
    pub base: String,
    /// Ordered `(key, value)` query pairs, duplicates allowed.
    pub params: Vec<(String, String)>,
    /// Query segments with no usable key/value split, preserved verbatim.
    pub trailing: Vec<String>,
    /// Fragment value (without the leading `#`), if present.
    pub fragment: Option<String>,
}

impl ParsedUrl {
    /// Parses a raw URL string into its display-relevant parts.
    ///
    /// # Errors
    ///
    /// Returns [`SanitizeError::MalformedUrl`] if the input is not an absolute
    /// URL, or [`SanitizeError::TooLong`] if it exceeds [`MAX_URL_LENGTH`].
    pub fn parse(raw_url: &str) -> Result<Self, SanitizeError> {
        if raw_url.len() > MAX_URL_LENGTH {
            return Err(SanitizeError::TooLong {
                length: raw_url.len(),
            });
        }

        let url = Url::parse(raw_url)?;
        let base = url[..Position::AfterPath].to_string();

        let mut params = Vec::new();
        let mut trailing = Vec::new();
        if let Some(query) = url.query() {
            for segment in query.split('&') {
                if segment.is_empty() {
                    continue;
                }
                match segment.split_once('=') {
                    Some((key, value)) if !key.is_empty() && !value.is_empty() => {
                        params.push((key.to_string(), value.to_string()));
                    }
                    // No usable key=value split: non-parameter trailing text.
                    _ => trailing.push(segment.to_string()),
                }
            }
        }

        Ok(Self {
            base,
            params,
            trailing,
            fragment: url.fragment().map(str::to_string),
        })
    }
}

/// Outcome of sanitizing one URL. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedResult {
    /// The reconstructed URL with tracking parameters removed.
    pub cleaned_url: String,
    /// Removed parameter names, sorted ascending, duplicates collapsed.
    pub removed_params: Vec<String>,
    /// The original input, kept for the audit display.
    pub raw_url: String,
}

impl SanitizedResult {
    /// Joined display text for the removed-parameters line, or `None` when
    /// nothing was removed (the line stays empty).
    pub fn removed_params_text(&self) -> Option<String> {
        if self.removed_params.is_empty() {
            None
        } else {
            Some(self.removed_params.join(", "))
        }
    }
}

/// Sanitizes a raw URL by stripping tracking parameters.
///
/// Query parameters matching the rule set are removed and reported; all other
/// parameters keep their relative order. Trailing non-parameter query text and
/// the fragment are preserved. When every parameter was tracking noise, the
/// cleaned URL carries no `?` at all.
///
/// # Errors
///
/// Fails with [`SanitizeError`] if the input cannot be parsed as an absolute
/// URL; the caller is expected to leave the original value untouched in that
/// case.
///
/// # Examples
///
/// ```
/// use trace_clean::{sanitize, TrackingRuleSet};
///
/// let result = sanitize(
///     "https://example.com/page?utm_source=x&id=5",
///     &TrackingRuleSet::builtin(),
/// )
/// .unwrap();
/// assert_eq!(result.cleaned_url, "https://example.com/page?id=5");
/// assert_eq!(result.removed_params, vec!["utm_source"]);
/// ```
pub fn sanitize(raw_url: &str, rules: &TrackingRuleSet) -> Result<SanitizedResult, SanitizeError> {
    let parsed = ParsedUrl::parse(raw_url)?;

    let mut removed = BTreeSet::new();
    let mut kept: Vec<(&str, &str)> = Vec::new();
    for (key, value) in &parsed.params {
        if rules.is_tracking(key) {
            removed.insert(key.clone());
        } else {
            kept.push((key, value));
        }
    }

    let mut cleaned = parsed.base.clone();
    for segment in &parsed.trailing {
        cleaned.push_str(&fix_double_encoding(segment));
    }
    if !kept.is_empty() {
        cleaned.push('?');
        let joined = kept
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&");
        cleaned.push_str(&joined);
    }
    if let Some(fragment) = &parsed.fragment {
        cleaned.push('#');
        cleaned.push_str(fragment);
    }

    Ok(SanitizedResult {
        cleaned_url: cleaned,
        removed_params: removed.into_iter().collect(),
        raw_url: raw_url.to_string(),
    })
}

/// Undoes the double-encoded delimiters that upstream renderers leave in
/// trailing query text when they rebuild the final hop.
fn fix_double_encoding(text: &str) -> String {
    text.replace("%3F", "?").replace("%23", "#")
}
