//! Export contracts: round-trippable structured data, byte-exact
//! delimited rows, and the one surfaced error category (write
//! failures).

use bigolens::config::DisplayTheme;
use bigolens::core::{AnalysisResult, FunctionComplexity};
use bigolens::io::{render_export, write_export, ExportFormat};
use bigolens::taxonomy::Complexity;
use chrono::Utc;
use pretty_assertions::assert_eq;

fn sample_result() -> AnalysisResult {
    AnalysisResult {
        overall: Complexity::Exponential,
        functions: vec![
            FunctionComplexity {
                name: "fib".into(),
                label: Complexity::Exponential,
                confidence: 0.9,
                evidence: vec![
                    "Exponential recursion (fibonacci-like) detected — O(2ⁿ) growth".into(),
                    "再帰呼び出しを検出".into(),
                ],
                line_start: 1,
                line_end: 9,
            },
            FunctionComplexity {
                name: "scan".into(),
                label: Complexity::Linear,
                confidence: 0.7,
                evidence: vec!["Single loop detected".into()],
                line_start: 11,
                line_end: 20,
            },
        ],
        language: "python".into(),
        warnings: vec!["heuristic confidence only".into()],
        produced_at: Utc::now(),
        source_name: Some("fib.py".into()),
    }
}

#[test]
fn structured_data_round_trips_byte_identically() {
    let result = sample_result();

    let first = render_export(&result, ExportFormat::Json, DisplayTheme::Light).unwrap();
    let reparsed: AnalysisResult = serde_json::from_str(&first).unwrap();
    let second = render_export(&reparsed, ExportFormat::Json, DisplayTheme::Light).unwrap();

    assert_eq!(first, second);
    assert_eq!(result, reparsed);
}

#[test]
fn structured_data_keeps_the_interchange_field_names() {
    let json = render_export(&sample_result(), ExportFormat::Json, DisplayTheme::Light).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let object = value.as_object().unwrap();
    for field in ["overall", "functions", "language", "warnings", "producedAt", "sourceName"] {
        assert!(object.contains_key(field), "missing {field}");
    }
    let function = value["functions"][0].as_object().unwrap();
    for field in ["name", "label", "confidence", "evidence", "lineStart", "lineEnd"] {
        assert!(function.contains_key(field), "missing function field {field}");
    }
}

#[test]
fn delimited_rows_header_is_byte_exact() {
    let csv = render_export(&sample_result(), ExportFormat::Csv, DisplayTheme::Light).unwrap();
    let header = csv.lines().next().unwrap();
    assert_eq!(header, "Function,Complexity,Confidence,LineStart,LineEnd,Description");
    assert_eq!(csv.lines().count(), 3);
}

#[test]
fn delimited_rows_descriptions_come_from_the_taxonomy() {
    let csv = render_export(&sample_result(), ExportFormat::Csv, DisplayTheme::Light).unwrap();
    let row = csv.lines().nth(1).unwrap();
    assert!(row.contains(Complexity::Exponential.description()));
}

#[test]
fn every_format_renders_a_degraded_result() {
    let degraded = AnalysisResult::degraded(
        "rust",
        None,
        vec!["engine unavailable: bigo-engine not found on PATH".into()],
    );

    for format in [ExportFormat::Json, ExportFormat::Html, ExportFormat::Markdown, ExportFormat::Csv] {
        let rendered = render_export(&degraded, format, DisplayTheme::Dark).unwrap();
        assert!(
            rendered.contains("engine unavailable") || format == ExportFormat::Csv,
            "{format} should carry the warning"
        );
        assert!(!rendered.is_empty());
    }
}

#[tokio::test]
async fn write_export_creates_the_destination_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.md");

    write_export(&sample_result(), ExportFormat::Markdown, DisplayTheme::Light, &path)
        .await
        .unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("# Complexity Report"));
}

#[tokio::test]
async fn write_failures_surface_to_the_caller() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("deeply").join("report.json");

    let err = write_export(&sample_result(), ExportFormat::Json, DisplayTheme::Light, &path)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("failed to write json export"));
}
