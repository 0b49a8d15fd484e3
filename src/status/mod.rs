//! HTTP status-code lookup and tooltip state.
//!
//! The status-code table is loaded once per run from a static JSON resource
//! (a local file or an http(s) URL). Loading is the one asynchronous
//! operation in the crate; it is issued once, never retried, and any failure
//! degrades to an empty table so no tooltip ever renders.

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

use crate::config::TOOLTIP_MESSAGE_PREFIX;

/// Error types for status-code table loading.
///
/// These never escape [`StatusCodeTable::load`]; they exist so the degraded
/// path can log a precise cause.
#[derive(Error, Debug)]
pub enum StatusTableError {
    /// Error reading the table from a local file.
    #[error("failed to read status-code table: {0}")]
    Io(#[from] std::io::Error),

    /// Error fetching the table over HTTP.
    #[error("failed to fetch status-code table: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Error parsing the table JSON.
    #[error("failed to parse status-code table: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One entry of the status-code table.
///
/// The resource guarantees at least a `message` field; anything else it
/// carries is ignored.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct StatusCodeEntry {
    /// Human-readable description of the status code.
    pub message: String,
}

/// Read-only mapping from status code (as string key) to its entry.
#[derive(Debug, Clone, Default)]
pub struct StatusCodeTable {
    entries: HashMap<String, StatusCodeEntry>,
}

impl StatusCodeTable {
    /// An empty table: every lookup is absent, no tooltip ever shows.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses a table from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns [`StatusTableError::Parse`] if the JSON does not match the
    /// expected `{"code": {"message": ...}}` shape.
    pub fn from_json(json: &str) -> Result<Self, StatusTableError> {
        let entries = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    /// Loads the table from a local path or an `http(s)://` URL.
    ///
    /// Any failure (missing file, network error, bad JSON) is logged and
    /// degrades to an empty table; it is never surfaced to the caller.
    pub async fn load(source: &str) -> Self {
        match Self::try_load(source).await {
            Ok(table) => {
                log::info!(
                    "Loaded {} status-code entries from {}",
                    table.len(),
                    source
                );
                table
            }
            Err(e) => {
                log::warn!(
                    "Failed to load status-code table from {}: {}. Tooltips disabled.",
                    source,
                    e
                );
                Self::empty()
            }
        }
    }

    async fn try_load(source: &str) -> Result<Self, StatusTableError> {
        let json = if source.starts_with("http://") || source.starts_with("https://") {
            log::debug!("Fetching status-code table from {}", source);
            let response = reqwest::get(source).await?.error_for_status()?;
            response.text().await?
        } else {
            tokio::fs::read_to_string(source).await?
        };
        Self::from_json(&json)
    }

    /// Resolves a status code to its configured message. Exact match only;
    /// an unknown code is absent.
    pub fn resolve(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(|entry| entry.message.as_str())
    }

    /// The tooltip text shown for a code, or `None` when no tooltip renders.
    pub fn tooltip_text(&self, code: &str) -> Option<String> {
        self.resolve(code)
            .map(|message| format!("{TOOLTIP_MESSAGE_PREFIX}{message}"))
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Classifies a status code into its row-styling class.
///
/// Codes outside 200..=599 have no class and yield an empty string.
pub fn status_code_class(status: u16) -> &'static str {
    match status {
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        500..=599 => "5xx",
        _ => "",
    }
}

/// Visibility state of one tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipState {
    /// The tooltip is not rendered.
    Hidden,
    /// The tooltip is rendered with its resolved text.
    Shown,
}

/// Per-status-cell tooltip: a two-state machine driven by hover events.
///
/// Hover-enter shows the tooltip only when the table resolves a message for
/// the cell's code; hover-leave hides it. Nothing persists across page views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tooltip {
    state: TooltipState,
    text: Option<String>,
}

impl Tooltip {
    /// A new, hidden tooltip with no text.
    pub fn new() -> Self {
        Self {
            state: TooltipState::Hidden,
            text: None,
        }
    }

    /// Hover-enter: resolve the code and show the tooltip if a message exists.
    pub fn hover_enter(&mut self, code: &str, table: &StatusCodeTable) {
        if let Some(text) = table.tooltip_text(code) {
            self.text = Some(text);
            self.state = TooltipState::Shown;
        }
    }

    /// Hover-leave: hide the tooltip.
    pub fn hover_leave(&mut self) {
        self.state = TooltipState::Hidden;
    }

    /// Whether the tooltip is currently shown.
    pub fn is_visible(&self) -> bool {
        self.state == TooltipState::Shown
    }

    /// The text shown while the tooltip is visible.
    pub fn visible_text(&self) -> Option<&str> {
        if self.is_visible() {
            self.text.as_deref()
        } else {
            None
        }
    }
}

impl Default for Tooltip {
    fn default() -> Self {
        Self::new()
    }
}
