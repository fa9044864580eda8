//! Tabular-text export: a markdown report.

use crate::core::AnalysisResult;
use crate::report::model::ReportModel;
use std::fmt::Write;

pub fn render(result: &AnalysisResult) -> String {
    let model = ReportModel::from_result(result);
    let mut out = String::new();

    write_header(&mut out, &model);
    write_warnings(&mut out, &model);
    write_distribution_table(&mut out, &model);
    write_functions(&mut out, &model);

    out
}

fn write_header(out: &mut String, model: &ReportModel) {
    let _ = writeln!(out, "# Complexity Report");
    let _ = writeln!(out);
    if let Some(source) = &model.source_name {
        let _ = writeln!(out, "Source: `{source}`  ");
    }
    let _ = writeln!(out, "Language: {}", model.language);
    let _ = writeln!(out);
    let overall = model.summary.overall;
    let _ = writeln!(
        out,
        "**Overall: {}** — {}",
        overall.notation(),
        overall.description()
    );
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{} function(s) analyzed, mean confidence {:.0}%.",
        model.summary.function_count,
        model.summary.mean_confidence * 100.0
    );
    let _ = writeln!(out);
}

fn write_warnings(out: &mut String, model: &ReportModel) {
    if model.warnings.is_empty() {
        return;
    }
    let _ = writeln!(out, "## Warnings");
    let _ = writeln!(out);
    for warning in &model.warnings {
        let _ = writeln!(out, "- ⚠ {warning}");
    }
    let _ = writeln!(out);
}

fn write_distribution_table(out: &mut String, model: &ReportModel) {
    let total = model.summary.function_count;
    let _ = writeln!(out, "## Distribution");
    let _ = writeln!(out);
    let _ = writeln!(out, "| Complexity | Count | Percentage |");
    let _ = writeln!(out, "|------------|-------|------------|");
    for entry in &model.distribution {
        let percentage = if total == 0 {
            0.0
        } else {
            entry.count as f64 / total as f64 * 100.0
        };
        let _ = writeln!(
            out,
            "| {} | {} | {:.1}% |",
            entry.label.notation(),
            entry.count,
            percentage
        );
    }
    let _ = writeln!(out);
}

fn write_functions(out: &mut String, model: &ReportModel) {
    if model.details.is_empty() {
        return;
    }
    let _ = writeln!(out, "## Functions");
    let _ = writeln!(out);
    for detail in &model.details {
        let _ = writeln!(out, "### `{}`", detail.name);
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "- Complexity: {} ({})",
            detail.label.notation(),
            detail.label.name()
        );
        let _ = writeln!(out, "- Confidence: {:.0}%", detail.confidence * 100.0);
        let _ = writeln!(out, "- Lines: {}–{}", detail.line_start, detail.line_end);
        let _ = writeln!(out, "- {}", detail.label.description());
        if !detail.evidence.is_empty() {
            let _ = writeln!(out);
            for item in &detail.evidence {
                let _ = writeln!(out, "  - {item}");
            }
        }
        let _ = writeln!(out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FunctionComplexity;
    use crate::taxonomy::Complexity;

    #[test]
    fn empty_results_still_render_the_table() {
        let rendered = render(&AnalysisResult::degraded("rust", None, vec!["offline".into()]));
        assert!(rendered.contains("# Complexity Report"));
        assert!(rendered.contains("| Complexity | Count | Percentage |"));
        assert!(rendered.contains("| O(1) | 0 | 0.0% |"));
        assert!(rendered.contains("- ⚠ offline"));
        assert!(!rendered.contains("## Functions"));
    }

    #[test]
    fn functions_get_their_own_subsections() {
        let mut result = AnalysisResult::degraded("python", Some("walk.py".into()), vec![]);
        result.warnings.clear();
        result.functions.push(FunctionComplexity {
            name: "walk".into(),
            label: Complexity::Quadratic,
            confidence: 0.85,
            evidence: vec!["Nested loops detected (depth: 2)".into()],
            line_start: 3,
            line_end: 20,
        });

        let rendered = render(&result);
        assert!(rendered.contains("### `walk`"));
        assert!(rendered.contains("- Complexity: O(n²) (quadratic)"));
        assert!(rendered.contains("- Confidence: 85%"));
        assert!(rendered.contains("- Lines: 3–20"));
        assert!(rendered.contains("  - Nested loops detected (depth: 2)"));
        assert!(rendered.contains("| O(n²) | 1 | 100.0% |"));
        assert!(!rendered.contains("## Warnings"));
    }
}
