//! Canonical result types shared by every consumer.
//!
//! `AnalysisResult` is the only shape renderers and exporters ever
//! see. Its serde field names (`overall`, `functions`, `language`,
//! `warnings`, `producedAt`, `sourceName`) are the interchange
//! contract for the structured export; do not rename them.

use crate::taxonomy::Complexity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One analyzed function with its assigned complexity class.
///
/// Invariants, upheld by the engine adapter's normalization:
/// `line_start >= 1`, `line_end >= line_start`, `confidence` in [0, 1].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionComplexity {
    pub name: String,
    pub label: Complexity,
    pub confidence: f64,
    pub evidence: Vec<String>,
    pub line_start: usize,
    pub line_end: usize,
}

/// The canonical analysis result. Immutable once produced; a new
/// analysis supersedes it rather than mutating it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub overall: Complexity,
    /// Engine order preserved; insertion order is display order.
    pub functions: Vec<FunctionComplexity>,
    pub language: String,
    /// Always present, possibly empty.
    #[serde(default)]
    pub warnings: Vec<String>,
    pub produced_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
}

impl AnalysisResult {
    /// A structurally normal result standing in for an analysis that
    /// could not be obtained: no functions, conservative `Linear`
    /// overall, and the explanation in `warnings`. Renderers treat it
    /// exactly like any other result.
    pub fn degraded(
        language: &str,
        source_name: Option<String>,
        warnings: Vec<String>,
    ) -> Self {
        Self {
            overall: Complexity::Linear,
            functions: Vec::new(),
            language: language.to_string(),
            warnings,
            produced_at: Utc::now(),
            source_name,
        }
    }
}

/// Map a file extension to the engine's language tag.
pub fn language_for_extension(ext: &str) -> Option<&'static str> {
    static EXTENSION_MAP: &[(&[&str], &str)] = &[
        (&["rs"], "rust"),
        (&["py", "pyi"], "python"),
        (&["js", "jsx", "mjs", "cjs"], "javascript"),
        (&["ts", "tsx", "mts", "cts"], "typescript"),
        (&["java"], "java"),
        (&["c", "h"], "c"),
        (&["cpp", "cc", "cxx", "hpp", "hh"], "cpp"),
    ];

    EXTENSION_MAP
        .iter()
        .find(|(exts, _)| exts.contains(&ext))
        .map(|(_, tag)| *tag)
}

/// Language tag for a path, from its extension.
pub fn language_for_path(path: &std::path::Path) -> Option<&'static str> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(language_for_extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn degraded_results_have_the_conservative_default_shape() {
        let result = AnalysisResult::degraded("python", None, vec!["engine offline".into()]);
        assert_eq!(result.overall, Complexity::Linear);
        assert!(result.functions.is_empty());
        assert_eq!(result.warnings, vec!["engine offline".to_string()]);
    }

    #[test]
    fn serialization_uses_the_interchange_field_names() {
        let result = AnalysisResult::degraded("rust", Some("lib.rs".into()), vec![]);
        let json = serde_json::to_string(&result).unwrap();
        for field in [
            "\"overall\"",
            "\"functions\"",
            "\"language\"",
            "\"warnings\"",
            "\"producedAt\"",
            "\"sourceName\"",
        ] {
            assert!(json.contains(field), "missing {field} in {json}");
        }
    }

    #[test]
    fn absent_source_name_is_omitted() {
        let result = AnalysisResult::degraded("rust", None, vec![]);
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("sourceName"));
    }

    #[test]
    fn language_detection_covers_the_supported_set() {
        assert_eq!(language_for_path(Path::new("a/b/main.rs")), Some("rust"));
        assert_eq!(language_for_path(Path::new("app.tsx")), Some("typescript"));
        assert_eq!(language_for_path(Path::new("mod.cc")), Some("cpp"));
        assert_eq!(language_for_path(Path::new("README.md")), None);
        assert_eq!(language_for_path(Path::new("Makefile")), None);
    }
}
