//! The structured report document, derived purely from a canonical
//! result plus the taxonomy.
//!
//! Both the interactive panel and the styled-document export render
//! from this one model, so their sections cannot drift.

use crate::core::{AnalysisResult, FunctionComplexity};
use crate::taxonomy::{Complexity, ALL_LABELS};

/// Arithmetic mean of the functions' confidence values; 0 when there
/// are none. The report summary and every export format go through
/// this one function.
pub fn mean_confidence(functions: &[FunctionComplexity]) -> f64 {
    if functions.is_empty() {
        return 0.0;
    }
    let total: f64 = functions.iter().map(|f| f.confidence).sum();
    total / functions.len() as f64
}

/// Three-tier banding for confidence displays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfidenceBand {
    Favorable,
    Cautionary,
    Unfavorable,
}

impl ConfidenceBand {
    pub fn for_confidence(confidence: f64) -> Self {
        if confidence > 0.8 {
            Self::Favorable
        } else if confidence > 0.6 {
            Self::Cautionary
        } else {
            Self::Unfavorable
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Favorable => "#4caf50",
            Self::Cautionary => "#ffc107",
            Self::Unfavorable => "#f44336",
        }
    }
}

#[derive(Clone, Debug)]
pub struct ReportSummary {
    pub overall: Complexity,
    pub function_count: usize,
    pub mean_confidence: f64,
}

/// One bin of the category chart. All nine labels appear, in severity
/// order, so consumers get a stable axis; absent labels carry a zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistributionEntry {
    pub label: Complexity,
    pub count: usize,
}

/// One bar of the magnitude chart: a function's label mapped to its
/// severity order, paired with the label's color.
#[derive(Clone, Debug)]
pub struct ComparisonEntry {
    pub name: String,
    pub order: u8,
    pub color: &'static str,
}

#[derive(Clone, Debug)]
pub struct FunctionDetail {
    pub name: String,
    pub label: Complexity,
    pub confidence: f64,
    pub band: ConfidenceBand,
    pub line_start: usize,
    pub line_end: usize,
    pub evidence: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct ReportModel {
    pub summary: ReportSummary,
    pub warnings: Vec<String>,
    pub distribution: Vec<DistributionEntry>,
    pub comparison: Vec<ComparisonEntry>,
    pub details: Vec<FunctionDetail>,
    pub language: String,
    pub source_name: Option<String>,
}

impl ReportModel {
    pub fn from_result(result: &AnalysisResult) -> Self {
        let distribution = ALL_LABELS
            .iter()
            .map(|&label| DistributionEntry {
                label,
                count: result.functions.iter().filter(|f| f.label == label).count(),
            })
            .collect();

        let comparison = result
            .functions
            .iter()
            .map(|f| ComparisonEntry {
                name: f.name.clone(),
                order: f.label.order(),
                color: f.label.color(),
            })
            .collect();

        let details = result
            .functions
            .iter()
            .map(|f| FunctionDetail {
                name: f.name.clone(),
                label: f.label,
                confidence: f.confidence,
                band: ConfidenceBand::for_confidence(f.confidence),
                line_start: f.line_start,
                line_end: f.line_end,
                evidence: f.evidence.clone(),
            })
            .collect();

        Self {
            summary: ReportSummary {
                overall: result.overall,
                function_count: result.functions.len(),
                mean_confidence: mean_confidence(&result.functions),
            },
            warnings: result.warnings.clone(),
            distribution,
            comparison,
            details,
            language: result.language.clone(),
            source_name: result.source_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn function(name: &str, label: Complexity, confidence: f64) -> FunctionComplexity {
        FunctionComplexity {
            name: name.into(),
            label,
            confidence,
            evidence: vec![],
            line_start: 1,
            line_end: 5,
        }
    }

    fn result_with(functions: Vec<FunctionComplexity>) -> AnalysisResult {
        AnalysisResult {
            overall: Complexity::Quadratic,
            functions,
            language: "rust".into(),
            warnings: vec![],
            produced_at: Utc::now(),
            source_name: None,
        }
    }

    #[test]
    fn mean_confidence_of_empty_is_zero() {
        assert_eq!(mean_confidence(&[]), 0.0);
    }

    #[test]
    fn mean_confidence_is_the_arithmetic_mean() {
        let functions = vec![
            function("a", Complexity::Linear, 0.9),
            function("b", Complexity::Linear, 0.7),
            function("c", Complexity::Linear, 0.5),
        ];
        let mean = mean_confidence(&functions);
        assert!((mean - 0.7).abs() < 1e-12, "mean was {mean}");
    }

    #[test]
    fn banding_tiers_split_at_the_documented_boundaries() {
        assert_eq!(ConfidenceBand::for_confidence(0.81), ConfidenceBand::Favorable);
        assert_eq!(ConfidenceBand::for_confidence(0.8), ConfidenceBand::Cautionary);
        assert_eq!(ConfidenceBand::for_confidence(0.61), ConfidenceBand::Cautionary);
        assert_eq!(ConfidenceBand::for_confidence(0.6), ConfidenceBand::Unfavorable);
        assert_eq!(ConfidenceBand::for_confidence(0.0), ConfidenceBand::Unfavorable);
    }

    #[test]
    fn distribution_keys_all_nine_labels_in_order() {
        let model = ReportModel::from_result(&result_with(vec![
            function("a", Complexity::Linear, 0.9),
            function("b", Complexity::Linear, 0.9),
            function("c", Complexity::Factorial, 0.4),
        ]));

        assert_eq!(model.distribution.len(), 9);
        let labels: Vec<Complexity> = model.distribution.iter().map(|e| e.label).collect();
        assert_eq!(labels, ALL_LABELS.to_vec());

        let linear = model.distribution.iter().find(|e| e.label == Complexity::Linear).unwrap();
        assert_eq!(linear.count, 2);
        let constant = model.distribution.iter().find(|e| e.label == Complexity::Constant).unwrap();
        assert_eq!(constant.count, 0);
    }

    #[test]
    fn comparison_maps_labels_to_order_and_color() {
        let model = ReportModel::from_result(&result_with(vec![
            function("slow", Complexity::Exponential, 0.9),
        ]));
        let entry = &model.comparison[0];
        assert_eq!(entry.name, "slow");
        assert_eq!(entry.order, Complexity::Exponential.order());
        assert_eq!(entry.color, Complexity::Exponential.color());
    }

    #[test]
    fn summary_aggregates_count_and_mean() {
        let model = ReportModel::from_result(&result_with(vec![
            function("a", Complexity::Linear, 1.0),
            function("b", Complexity::Quadratic, 0.5),
        ]));
        assert_eq!(model.summary.function_count, 2);
        assert!((model.summary.mean_confidence - 0.75).abs() < 1e-12);
        assert_eq!(model.summary.overall, Complexity::Quadratic);
    }
}
