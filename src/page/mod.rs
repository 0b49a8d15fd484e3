//! Thin adapter over the rendered trace page.
//!
//! The page's event wiring is reframed here as explicit inputs and outputs:
//! hop data comes in, a displayable view comes out, and the tiny bits of UI
//! state (form validation, the meta-row toggle) are plain values. Every
//! operation that used to look up a DOM node quietly no-ops when its input is
//! absent, since the same scripts run across pages with differing layouts.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::render::UntrustedText;
use crate::sanitizer::{sanitize, SanitizedResult, TrackingRuleSet};
use crate::status::status_code_class;

/// One redirect step in a traced chain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hop {
    /// 1-based position of this hop in the chain.
    #[serde(rename = "Hop")]
    pub number: usize,
    /// HTTP status code returned at this hop.
    #[serde(rename = "Status")]
    pub status: u16,
    /// The URL requested at this hop.
    #[serde(rename = "URL")]
    pub url: String,
}

impl Hop {
    /// Row-styling class for this hop's status (`2xx` through `5xx`).
    pub fn status_class(&self) -> &'static str {
        status_code_class(self.status)
    }
}

static FORM_URL_RE: OnceLock<Regex> = OnceLock::new();

/// Client-side form check: the value must begin with `http://` or `https://`
/// (case-insensitive).
///
/// This is about expectations, not security. The sanitizer makes its own
/// decisions about what it will parse.
pub fn validate_form_input(input: &str) -> bool {
    let re = FORM_URL_RE.get_or_init(|| {
        Regex::new(r"(?i)^https?://").expect("form URL pattern is a valid regex")
    });
    re.is_match(input)
}

/// Two-state visibility toggle for the result-info rows.
///
/// Rows start hidden; each activation flips the state. No persistence across
/// page views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetaRowToggle {
    visible: bool,
}

impl MetaRowToggle {
    /// A new toggle with the rows hidden.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the visibility of the rows.
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Whether the rows are currently shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Displayable model of a traced chain, with the final hop sanitized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceView {
    /// The hops of the chain, in trace order.
    pub hops: Vec<Hop>,
    /// Sanitization outcome for the final hop, when it could be parsed.
    pub sanitized: Option<SanitizedResult>,
}

impl TraceView {
    /// Builds the view from a hop chain.
    ///
    /// An empty chain yields a view with nothing to sanitize. A final hop
    /// whose URL cannot be parsed is left inert: the warning is logged and
    /// `sanitized` stays `None`, so the original link is rendered unmodified.
    pub fn build(hops: Vec<Hop>, rules: &TrackingRuleSet) -> Self {
        let sanitized = match hops.last() {
            Some(final_hop) => match sanitize(&final_hop.url, rules) {
                Ok(result) => Some(result),
                Err(e) => {
                    log::warn!(
                        "Leaving final hop unmodified ({}): {}",
                        e,
                        UntrustedText::new(final_hop.url.clone()).for_log()
                    );
                    None
                }
            },
            None => None,
        };
        Self { hops, sanitized }
    }

    /// The last hop of the chain, the one sanitized for display.
    pub fn final_hop(&self) -> Option<&Hop> {
        self.hops.last()
    }

    /// Display text for the removed-parameters line, or `None` when the line
    /// stays empty.
    pub fn removed_params_text(&self) -> Option<String> {
        self.sanitized
            .as_ref()
            .and_then(SanitizedResult::removed_params_text)
    }

    /// HTML-escaped raw final URL for the audit line.
    ///
    /// Both URLs cross into a markup context, so they only leave this type
    /// through the escaping step.
    pub fn raw_final_url_html(&self) -> Option<String> {
        self.sanitized
            .as_ref()
            .map(|s| UntrustedText::new(s.raw_url.clone()).as_html())
    }

    /// HTML-escaped cleaned URL for the rebuilt final-hop link text.
    pub fn cleaned_url_html(&self) -> Option<String> {
        self.sanitized
            .as_ref()
            .map(|s| UntrustedText::new(s.cleaned_url.clone()).as_html())
    }
}
