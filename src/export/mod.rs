//! Export of visible trace data as the downloadable JSON artifact.
//!
//! Mirrors the page's download button: the hop rows go into `Results`, the
//! sanitization audit data into `Meta`, pretty-printed to
//! `gotrace_data.json` (see [`crate::config::EXPORT_FILE_NAME`]).

mod types;

pub use types::{ExportMeta, HopRow, TraceExport};

use std::path::Path;

use anyhow::{Context, Result};

use crate::page::TraceView;

/// Strips everything but ASCII digits from a status cell.
///
/// Rendered status cells carry whitespace and icon decoration around the
/// code; the export carries digits only.
pub fn normalize_status(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

impl TraceExport {
    /// Assembles the artifact from a trace view.
    pub fn from_view(view: &TraceView) -> Self {
        let results = view
            .hops
            .iter()
            .map(|hop| HopRow {
                hop: hop.number.to_string(),
                status: normalize_status(&hop.status.to_string()),
                url: hop.url.clone(),
            })
            .collect();

        let meta = ExportMeta {
            raw_final_url: view.sanitized.as_ref().map(|s| s.raw_url.clone()),
            removed_params: view.sanitized.as_ref().and_then(|s| {
                if s.removed_params.is_empty() {
                    None
                } else {
                    Some(s.removed_params.clone())
                }
            }),
        };

        Self { results, meta }
    }
}

/// Writes the artifact as pretty-printed JSON to `path`.
///
/// # Errors
///
/// Fails if serialization or the file write fails; the caller decides whether
/// that aborts the run.
pub fn write_export(export: &TraceExport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(export).context("Failed to serialize trace export")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write export to {}", path.display()))?;
    log::info!("Export written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Hop;
    use crate::sanitizer::TrackingRuleSet;

    fn sample_view() -> TraceView {
        TraceView::build(
            vec![
                Hop {
                    number: 1,
                    status: 301,
                    url: "https://short.example/x".to_string(),
                },
                Hop {
                    number: 2,
                    status: 200,
                    url: "https://example.com/page?utm_source=x&id=5".to_string(),
                },
            ],
            &TrackingRuleSet::builtin(),
        )
    }

    #[test]
    fn test_normalize_status_strips_non_digits() {
        assert_eq!(normalize_status(" 200 "), "200");
        assert_eq!(normalize_status("301 \u{24D8}"), "301");
        assert_eq!(normalize_status("no code"), "");
    }

    #[test]
    fn test_from_view_rows() {
        let export = TraceExport::from_view(&sample_view());
        assert_eq!(export.results.len(), 2);
        assert_eq!(export.results[0].hop, "1");
        assert_eq!(export.results[0].status, "301");
        assert_eq!(export.results[0].url, "https://short.example/x");
    }

    #[test]
    fn test_from_view_meta() {
        let export = TraceExport::from_view(&sample_view());
        assert_eq!(
            export.meta.raw_final_url.as_deref(),
            Some("https://example.com/page?utm_source=x&id=5")
        );
        assert_eq!(
            export.meta.removed_params,
            Some(vec!["utm_source".to_string()])
        );
    }

    #[test]
    fn test_meta_nulls_when_nothing_removed() {
        let view = TraceView::build(
            vec![Hop {
                number: 1,
                status: 200,
                url: "https://example.com/page?id=5".to_string(),
            }],
            &TrackingRuleSet::builtin(),
        );
        let export = TraceExport::from_view(&view);
        assert_eq!(export.meta.removed_params, None);

        let json = serde_json::to_value(&export).unwrap();
        assert!(json["Meta"]["removedParams"].is_null());
    }

    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_value(TraceExport::from_view(&sample_view())).unwrap();
        assert!(json.get("Results").is_some());
        assert!(json.get("Meta").is_some());
        assert!(json["Results"][0].get("Hop").is_some());
        assert!(json["Results"][0].get("Status").is_some());
        assert!(json["Results"][0].get("URL").is_some());
        assert!(json["Meta"].get("rawFinalURL").is_some());
    }
}
