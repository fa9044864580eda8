//! Inline source annotations.
//!
//! The host editor implements `AnnotationSurface`; this module decides
//! what to draw. Rendering is an idempotent refresh: previously
//! applied markers are cleared before the new result's batches go on,
//! so a stale result never leaks markers into the next one.

use crate::core::{AnalysisResult, FunctionComplexity};
use crate::taxonomy::Complexity;
use std::collections::BTreeMap;
use std::fmt::Write;

/// One visual marker over an inclusive 1-based line range, with a
/// rich hover payload.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub range: (usize, usize),
    pub hover: String,
}

/// A batch of markers sharing one complexity label. The renderer
/// emits one batch per distinct label, plus a single-marker batch for
/// the overall label anchored at the top of the document.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerBatch {
    pub label: Complexity,
    pub markers: Vec<Marker>,
}

/// The host rendering surface. Implemented by the editor side;
/// implemented by a recording fake in tests.
pub trait AnnotationSurface {
    /// Current document length in lines.
    fn line_count(&self) -> usize;

    /// Remove every marker previously applied through this surface.
    fn clear_markers(&mut self);

    fn apply_batch(&mut self, batch: MarkerBatch);
}

/// Apply a result's annotations to a surface.
///
/// Functions are grouped by label to minimize batches. Line ranges
/// are clamped to the document: an out-of-range end is truncated, and
/// a function starting beyond the document is skipped entirely. A
/// document with no lines gets nothing, not even the overall marker.
pub fn render_annotations(result: &AnalysisResult, surface: &mut dyn AnnotationSurface) {
    surface.clear_markers();

    let doc_lines = surface.line_count();
    if doc_lines == 0 {
        return;
    }

    let mut groups: BTreeMap<Complexity, Vec<Marker>> = BTreeMap::new();
    for function in &result.functions {
        if function.line_start > doc_lines {
            log::debug!(
                "skipping annotation for {}: starts at line {} beyond document end {}",
                function.name,
                function.line_start,
                doc_lines
            );
            continue;
        }
        let end = function.line_end.min(doc_lines);
        groups.entry(function.label).or_default().push(Marker {
            range: (function.line_start, end),
            hover: function_hover(function),
        });
    }

    for (label, markers) in groups {
        surface.apply_batch(MarkerBatch { label, markers });
    }

    surface.apply_batch(MarkerBatch {
        label: result.overall,
        markers: vec![Marker { range: (1, 1), hover: overall_hover(result) }],
    });
}

fn function_hover(function: &FunctionComplexity) -> String {
    let mut hover = String::new();
    let _ = writeln!(
        hover,
        "### `{}` — {}",
        function.name,
        function.label.notation()
    );
    let _ = writeln!(hover, "{}", function.label.description());
    let _ = writeln!(
        hover,
        "\nConfidence: {:.0}% · Lines {}–{}",
        function.confidence * 100.0,
        function.line_start,
        function.line_end
    );
    if !function.evidence.is_empty() {
        hover.push('\n');
        for item in &function.evidence {
            let _ = writeln!(hover, "- {item}");
        }
    }
    hover
}

fn overall_hover(result: &AnalysisResult) -> String {
    let mut hover = String::new();
    let _ = writeln!(hover, "### Overall complexity: {}", result.overall.notation());
    let _ = writeln!(hover, "{}", result.overall.description());
    let _ = writeln!(hover, "\nFunctions analyzed: {}", result.functions.len());
    if !result.warnings.is_empty() {
        hover.push('\n');
        for warning in &result.warnings {
            let _ = writeln!(hover, "- ⚠ {warning}");
        }
    }
    hover
}
