//! Structured-data export: the canonical result, verbatim.
//!
//! Field names and nesting are the interchange contract; the output
//! re-parses into an identical `AnalysisResult` and re-exports
//! byte-identically.

use crate::core::AnalysisResult;
use anyhow::Result;

pub fn render(result: &AnalysisResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}
