//! Export data shapes.
//!
//! Field names here are the wire contract of the `gotrace_data.json`
//! artifact; serde renames pin them regardless of Rust naming.

use serde::{Deserialize, Serialize};

/// One visible table row of the trace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HopRow {
    /// Hop position, as rendered in the first table cell.
    #[serde(rename = "Hop")]
    pub hop: String,
    /// Status code, digits only.
    #[serde(rename = "Status")]
    pub status: String,
    /// The traced URL.
    #[serde(rename = "URL")]
    pub url: String,
}

/// The meta block of the artifact: sanitization audit data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportMeta {
    /// The pre-sanitization final URL, or `null` when none was rendered.
    #[serde(rename = "rawFinalURL")]
    pub raw_final_url: Option<String>,
    /// Parameters removed from the final URL, or `null` when none were.
    #[serde(rename = "removedParams")]
    pub removed_params: Option<Vec<String>>,
}

/// The complete `gotrace_data.json` artifact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TraceExport {
    /// The visible hop rows.
    #[serde(rename = "Results")]
    pub results: Vec<HopRow>,
    /// The sanitization audit block.
    #[serde(rename = "Meta")]
    pub meta: ExportMeta,
}
