//! Export dispatch and the terminal summary.
//!
//! Rendering is pure: canonical result in, text out, one tagged
//! format enum dispatched exhaustively. Writing the rendered text to
//! a file is the single side-effecting step, and the only error
//! category this crate surfaces to its caller.

use crate::config::DisplayTheme;
use crate::core::AnalysisResult;
use crate::io::writers;
use anyhow::{Context, Result};
use clap::ValueEnum;
use colored::*;
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Html,
    Markdown,
    Csv,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Html => "html",
            ExportFormat::Markdown => "md",
            ExportFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Json => "json",
            ExportFormat::Html => "html",
            ExportFormat::Markdown => "markdown",
            ExportFormat::Csv => "csv",
        };
        write!(f, "{name}")
    }
}

/// Render a result in the requested format. Pure: derivable from the
/// canonical result plus the taxonomy, nothing else.
pub fn render_export(
    result: &AnalysisResult,
    format: ExportFormat,
    theme: DisplayTheme,
) -> Result<String> {
    match format {
        ExportFormat::Json => writers::json::render(result),
        ExportFormat::Html => writers::html::render(result, theme),
        ExportFormat::Markdown => Ok(writers::markdown::render(result)),
        ExportFormat::Csv => Ok(writers::csv::render(result)),
    }
}

/// Render and write to a file. Write failures surface to the caller;
/// export is user-initiated and has no safe silent default. The
/// destination handle is scope-bound and released on every exit path.
pub async fn write_export(
    result: &AnalysisResult,
    format: ExportFormat,
    theme: DisplayTheme,
    path: &Path,
) -> Result<()> {
    let rendered = render_export(result, format, theme)?;
    tokio::fs::write(path, rendered)
        .await
        .with_context(|| format!("failed to write {format} export to {}", path.display()))
}

/// Human summary for the CLI, colored by severity.
pub fn print_summary(result: &AnalysisResult) {
    println!("{}", "Complexity Analysis".bold().blue());
    println!("{}", "===================".blue());
    println!();

    let overall = result.overall;
    println!(
        "Overall: {} — {}",
        severity_colored(overall.notation(), overall.order()).bold(),
        overall.description()
    );
    println!(
        "Language: {}   Functions: {}",
        result.language,
        result.functions.len()
    );
    println!();

    for function in &result.functions {
        println!(
            "  {} {} (lines {}–{}, confidence {:.0}%)",
            severity_colored(function.label.notation(), function.label.order()),
            function.name,
            function.line_start,
            function.line_end,
            function.confidence * 100.0
        );
        for item in &function.evidence {
            println!("      - {}", item.dimmed());
        }
    }

    if !result.warnings.is_empty() {
        println!();
        println!("{}", "Warnings:".yellow().bold());
        for warning in &result.warnings {
            println!("  ⚠ {}", warning.yellow());
        }
    }
}

fn severity_colored(text: &str, order: u8) -> ColoredString {
    match order {
        0..=2 => text.green(),
        3..=5 => text.yellow(),
        _ => text.red(),
    }
}
