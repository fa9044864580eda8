//! Delimited-rows export.
//!
//! The header is byte-exact:
//! `Function,Complexity,Confidence,LineStart,LineEnd,Description`.
//! `Function` and `Description` may contain the delimiter and are
//! always quoted; `Description` comes from the taxonomy, not from
//! per-function state.

use crate::core::AnalysisResult;

pub const HEADER: &str = "Function,Complexity,Confidence,LineStart,LineEnd,Description";

pub fn render(result: &AnalysisResult) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');

    for function in &result.functions {
        out.push_str(&format!(
            "{},{},{:.2},{},{},{}\n",
            quoted(&function.name),
            function.label.notation(),
            function.confidence,
            function.line_start,
            function.line_end,
            quoted(function.label.description()),
        ));
    }

    out
}

fn quoted(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
