//! Styled-document export: a standalone HTML report.
//!
//! Every data value is duplicated inline (visible sections plus an
//! embedded JSON copy of the canonical result), so the document needs
//! no external fetch at render time. The display theme switches the
//! palette and nothing else.

use crate::config::DisplayTheme;
use crate::core::AnalysisResult;
use crate::report::model::ReportModel;
use anyhow::Result;
use html_escape::encode_text;
use std::fmt::Write;

const TEMPLATE: &str = include_str!("templates/report.html");

struct Palette {
    bg: &'static str,
    fg: &'static str,
    card: &'static str,
    muted: &'static str,
    border: &'static str,
}

fn palette(theme: DisplayTheme) -> Palette {
    match theme {
        DisplayTheme::Light => Palette {
            bg: "#fafafa",
            fg: "#212121",
            card: "#ffffff",
            muted: "#757575",
            border: "#e0e0e0",
        },
        DisplayTheme::Dark => Palette {
            bg: "#1e1e1e",
            fg: "#eceff1",
            card: "#262626",
            muted: "#9e9e9e",
            border: "#3a3a3a",
        },
    }
}

pub fn render(result: &AnalysisResult, theme: DisplayTheme) -> Result<String> {
    let model = ReportModel::from_result(result);
    let palette = palette(theme);
    let json_data = serde_json::to_string(result)?;
    let source_name = model.source_name.as_deref().unwrap_or("(unsaved source)");
    let overall = model.summary.overall;

    let html = TEMPLATE
        .replace("{{{THEME_BG}}}", palette.bg)
        .replace("{{{THEME_FG}}}", palette.fg)
        .replace("{{{THEME_CARD}}}", palette.card)
        .replace("{{{THEME_MUTED}}}", palette.muted)
        .replace("{{{THEME_BORDER}}}", palette.border)
        .replace("{{{SOURCE_NAME}}}", &encode_text(source_name))
        .replace("{{{LANGUAGE}}}", &encode_text(&model.language))
        .replace(
            "{{{PRODUCED_AT}}}",
            &result.produced_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        )
        .replace("{{{OVERALL_NOTATION}}}", &encode_text(overall.notation()))
        .replace("{{{OVERALL_DESCRIPTION}}}", &encode_text(overall.description()))
        .replace("{{{OVERALL_COLOR}}}", overall.color())
        .replace("{{{FUNCTION_COUNT}}}", &model.summary.function_count.to_string())
        .replace(
            "{{{MEAN_CONFIDENCE}}}",
            &format!("{:.0}", model.summary.mean_confidence * 100.0),
        )
        .replace("{{{WARNINGS_SECTION}}}", &warnings_section(&model))
        .replace("{{{DISTRIBUTION_ROWS}}}", &distribution_rows(&model))
        .replace("{{{COMPARISON_SECTION}}}", &comparison_section(&model))
        .replace("{{{DETAIL_SECTIONS}}}", &detail_sections(&model))
        .replace("{{{JSON_DATA}}}", &encode_text(&json_data));

    Ok(html)
}

fn warnings_section(model: &ReportModel) -> String {
    if model.warnings.is_empty() {
        return String::new();
    }
    let mut out = String::from("<div class=\"card warnings\">\n  <h2 style=\"margin-top:0\">Warnings</h2>\n  <ul>\n");
    for warning in &model.warnings {
        let _ = writeln!(out, "    <li>{}</li>", encode_text(warning));
    }
    out.push_str("  </ul>\n</div>\n");
    out
}

fn distribution_rows(model: &ReportModel) -> String {
    let max_count = model.distribution.iter().map(|e| e.count).max().unwrap_or(0);
    let mut out = String::new();
    for entry in &model.distribution {
        let bar = if entry.count == 0 || max_count == 0 {
            String::new()
        } else {
            format!(
                "<div class=\"bar\" style=\"width: {:.1}%; background: {}\"></div>",
                entry.count as f64 / max_count as f64 * 100.0,
                entry.label.color()
            )
        };
        let _ = writeln!(
            out,
            "  <div class=\"chart-row\"><span class=\"tick\">{}</span><div class=\"bar-track\">{}</div><span class=\"value\">{}</span></div>",
            encode_text(entry.label.notation()),
            bar,
            entry.count
        );
    }
    out
}

fn comparison_section(model: &ReportModel) -> String {
    if model.comparison.is_empty() {
        return String::new();
    }
    let mut out = String::from("<div class=\"card\">\n  <h2 style=\"margin-top:0\">Comparison</h2>\n");
    for entry in &model.comparison {
        let _ = writeln!(
            out,
            "  <div class=\"chart-row\"><span class=\"tick\">{}</span><div class=\"bar-track\"><div class=\"bar\" style=\"width: {:.1}%; background: {}\"></div></div><span class=\"value\">{}</span></div>",
            encode_text(&entry.name),
            (entry.order as f64 + 1.0) / 9.0 * 100.0,
            entry.color,
            entry.order
        );
    }
    out.push_str("</div>\n");
    out
}

fn detail_sections(model: &ReportModel) -> String {
    if model.details.is_empty() {
        return String::from("<p class=\"lines\">No functions were analyzed.</p>\n");
    }
    let mut out = String::new();
    for detail in &model.details {
        let _ = writeln!(out, "  <div class=\"function\">");
        let _ = writeln!(
            out,
            "    <span class=\"name\">{}</span> <span class=\"label-badge\" style=\"background: {}\">{}</span> <span class=\"lines\">lines {}–{}</span>",
            encode_text(&detail.name),
            detail.label.color(),
            encode_text(detail.label.notation()),
            detail.line_start,
            detail.line_end
        );
        let _ = writeln!(
            out,
            "    <div class=\"confidence-track\"><div class=\"confidence-bar\" style=\"width: {:.1}%; background: {}\"></div></div>",
            detail.confidence * 100.0,
            detail.band.color()
        );
        let _ = writeln!(
            out,
            "    <div class=\"lines\">Confidence {:.0}% · {}</div>",
            detail.confidence * 100.0,
            encode_text(detail.label.description())
        );
        if !detail.evidence.is_empty() {
            let _ = writeln!(out, "    <ul class=\"evidence\">");
            for item in &detail.evidence {
                let _ = writeln!(out, "      <li>{}</li>", encode_text(item));
            }
            let _ = writeln!(out, "    </ul>");
        }
        let _ = writeln!(out, "  </div>");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FunctionComplexity;
    use crate::taxonomy::Complexity;

    fn sample_result() -> AnalysisResult {
        let mut result =
            AnalysisResult::degraded("javascript", Some("app.js".into()), vec!["partial parse".into()]);
        result.functions.push(FunctionComplexity {
            name: "fib".into(),
            label: Complexity::Exponential,
            confidence: 0.9,
            evidence: vec!["Exponential recursion (fibonacci-like) detected".into()],
            line_start: 1,
            line_end: 8,
        });
        result
    }

    #[test]
    fn document_is_self_contained() {
        let html = render(&sample_result(), DisplayTheme::Light).unwrap();
        assert!(!html.contains("http://"));
        assert!(!html.contains("https://"));
        assert!(html.contains("analysis-data"));
        assert!(html.contains("fib"));
        assert!(html.contains("partial parse"));
        assert!(html.contains(Complexity::Exponential.color()));
    }

    #[test]
    fn theme_switches_palette_not_content() {
        let light = render(&sample_result(), DisplayTheme::Light).unwrap();
        let dark = render(&sample_result(), DisplayTheme::Dark).unwrap();
        assert!(light.contains("#fafafa"));
        assert!(dark.contains("#1e1e1e"));
        // Both carry identical data sections.
        assert!(light.contains("fib") && dark.contains("fib"));
        assert!(light.contains("lines 1–8") && dark.contains("lines 1–8"));
    }

    #[test]
    fn user_text_is_escaped() {
        let mut result = sample_result();
        result.functions[0].name = "<script>alert(1)</script>".into();
        let html = render(&result, DisplayTheme::Light).unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn empty_results_render_the_placeholder_detail() {
        let result = AnalysisResult::degraded("rust", None, vec![]);
        let html = render(&result, DisplayTheme::Light).unwrap();
        assert!(html.contains("No functions were analyzed."));
    }
}
