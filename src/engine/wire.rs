//! The engine's wire contract and its normalization into the
//! canonical result.
//!
//! The raw shape is deliberately loose: `overall`, `functions`, and
//! `warnings` may all be absent and are treated as defaults, not
//! errors. Anything looser than that (a function entry missing its
//! name, complexity, confidence, or line range) fails deserialization
//! and is reported as malformed output by the adapter.

use crate::core::{AnalysisResult, FunctionComplexity};
use crate::taxonomy::Complexity;
use chrono::Utc;
use serde::Deserialize;

/// Top-level engine response.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAnalysis {
    #[serde(default)]
    pub overall: Option<String>,
    #[serde(default)]
    pub functions: Option<Vec<RawFunction>>,
    #[serde(default)]
    pub warnings: Option<Vec<String>>,
}

/// One function entry as the engine reports it.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFunction {
    pub name: String,
    pub complexity: String,
    pub confidence: f64,
    #[serde(default)]
    pub details: Vec<String>,
    pub line_start: usize,
    pub line_end: usize,
}

/// Normalize a raw engine response into the canonical result.
///
/// Missing `overall` defaults to `Linear`; missing lists default to
/// empty; unknown labels map to `Linear` through the taxonomy;
/// confidence is clamped to [0, 1]; line ranges are repaired to the
/// canonical invariants (`line_start >= 1`, `line_end >= line_start`).
pub fn normalize(
    raw: RawAnalysis,
    language: &str,
    source_name: Option<&str>,
) -> AnalysisResult {
    let functions = raw
        .functions
        .unwrap_or_default()
        .into_iter()
        .map(normalize_function)
        .collect();

    AnalysisResult {
        overall: Complexity::from_label(raw.overall.as_deref()),
        functions,
        language: language.to_string(),
        warnings: raw.warnings.unwrap_or_default(),
        produced_at: Utc::now(),
        source_name: source_name.map(str::to_string),
    }
}

fn normalize_function(raw: RawFunction) -> FunctionComplexity {
    let line_start = raw.line_start.max(1);
    FunctionComplexity {
        name: raw.name,
        label: Complexity::from_label(Some(&raw.complexity)),
        confidence: raw.confidence.clamp(0.0, 1.0),
        evidence: raw.details,
        line_start,
        line_end: raw.line_end.max(line_start),
    }
}
