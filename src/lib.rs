//! trace_clean library: post-processing for URL redirect traces.
//!
//! This library takes the hop chain produced by a redirect trace and prepares
//! it for display and export: it strips tracking parameters from the final
//! hop's URL, resolves HTTP status codes to tooltip messages from a static
//! lookup table, and assembles the `gotrace_data.json` artifact.
//!
//! # Example
//!
//! ```
//! use trace_clean::{sanitize, TrackingRuleSet};
//!
//! let result = sanitize(
//!     "https://example.com/page?utm_source=x&id=5",
//!     &TrackingRuleSet::builtin(),
//! )?;
//! assert_eq!(result.cleaned_url, "https://example.com/page?id=5");
//! assert_eq!(result.removed_params, vec!["utm_source"]);
//! # Ok::<(), trace_clean::SanitizeError>(())
//! ```

#![warn(missing_docs)]

pub mod config;
mod error_handling;
pub mod export;
mod initialization;
mod page;
mod render;
mod sanitizer;
mod status;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::InitializationError;
pub use export::{write_export, ExportMeta, HopRow, TraceExport};
pub use initialization::init_logger_with;
pub use page::{validate_form_input, Hop, MetaRowToggle, TraceView};
pub use render::{escape_html, UntrustedText};
pub use run::{run_clean, CleanReport};
pub use sanitizer::{sanitize, ParsedUrl, SanitizeError, SanitizedResult, TrackingRuleSet};
pub use status::{status_code_class, StatusCodeTable, StatusTableError, Tooltip, TooltipState};

// Internal run module (ties the pieces together for the CLI)
mod run {
    use std::io::Read;
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use log::info;

    use crate::config::{Config, EXPORT_FILE_NAME};
    use crate::export::{write_export, TraceExport};
    use crate::page::{Hop, TraceView};
    use crate::sanitizer::TrackingRuleSet;
    use crate::status::StatusCodeTable;

    /// Results of a trace-clean run.
    #[derive(Debug, Clone)]
    pub struct CleanReport {
        /// Number of hops in the input chain.
        pub total_hops: usize,
        /// The sanitized final URL, if the final hop could be parsed.
        pub cleaned_url: Option<String>,
        /// Parameters removed from the final URL, sorted ascending.
        pub removed_params: Vec<String>,
        /// Number of hops whose status code resolved to a tooltip message.
        pub resolved_statuses: usize,
        /// Where the export artifact was written.
        pub export_path: PathBuf,
    }

    /// Runs the full post-processing pass over one traced hop chain.
    ///
    /// Reads the chain from the configured input (file or stdin), sanitizes
    /// the final hop, loads the status-code table if a source was given, and
    /// writes the export artifact.
    ///
    /// # Errors
    ///
    /// Fails if the input cannot be read or parsed, or if the export cannot
    /// be written. A malformed final-hop URL or an unloadable status table is
    /// not an error; both degrade per the page's behavior.
    pub async fn run_clean(config: Config) -> Result<CleanReport> {
        let raw = if config.file.as_os_str() == "-" {
            info!("Reading hop chain from stdin");
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read hop chain from stdin")?;
            buffer
        } else {
            std::fs::read_to_string(&config.file)
                .with_context(|| format!("Failed to open input file {}", config.file.display()))?
        };

        let hops: Vec<Hop> =
            serde_json::from_str(&raw).context("Failed to parse hop chain JSON")?;
        info!("Loaded {} hop(s)", hops.len());

        let rules = TrackingRuleSet::builtin();
        let view = TraceView::build(hops, &rules);

        let table = match config.status_codes.as_deref() {
            Some(source) => StatusCodeTable::load(source).await,
            None => StatusCodeTable::empty(),
        };
        let resolved_statuses = view
            .hops
            .iter()
            .filter(|hop| table.resolve(&hop.status.to_string()).is_some())
            .count();

        let export = TraceExport::from_view(&view);
        let export_path = config
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME));
        write_export(&export, &export_path)?;

        Ok(CleanReport {
            total_hops: view.hops.len(),
            cleaned_url: view.sanitized.as_ref().map(|s| s.cleaned_url.clone()),
            removed_params: view
                .sanitized
                .as_ref()
                .map(|s| s.removed_params.clone())
                .unwrap_or_default(),
            resolved_statuses,
            export_path,
        })
    }
}
