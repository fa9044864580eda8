//! The interactive report panel.
//!
//! A `ReportPanel` is held by the consumer and refreshed in place:
//! `update` swaps the underlying model without reconstructing the
//! panel, so references held by the event loop survive across
//! results. Before any result exists it renders a neutral placeholder
//! instead of erroring.

use crate::core::AnalysisResult;
use crate::report::model::{ConfidenceBand, ReportModel};
use crate::report::theme::{hex_color, Theme};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

const MAX_BAR_WIDTH: usize = 32;

pub struct ReportPanel {
    model: Option<ReportModel>,
    scroll: u16,
    theme: Theme,
}

impl Default for ReportPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportPanel {
    pub fn new() -> Self {
        Self { model: None, scroll: 0, theme: Theme::default_theme() }
    }

    /// Replace the displayed result. The panel itself persists; only
    /// its model changes.
    pub fn update(&mut self, result: &AnalysisResult) {
        self.model = Some(ReportModel::from_result(result));
        self.scroll = 0;
    }

    /// Explicit refresh request: re-derive the document from whatever
    /// result is current, or fall back to the empty state.
    pub fn refresh(&mut self, current: Option<&AnalysisResult>) {
        match current {
            Some(result) => self.update(result),
            None => self.model = None,
        }
    }

    pub fn has_result(&self) -> bool {
        self.model.is_some()
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Min(0),    // Body
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        self.render_title(frame, chunks[0]);
        self.render_body(frame, chunks[1]);
        self.render_footer(frame, chunks[2]);
    }

    fn render_title(&self, frame: &mut Frame, area: Rect) {
        let source = self
            .model
            .as_ref()
            .and_then(|m| m.source_name.clone())
            .unwrap_or_else(|| "(unsaved source)".to_string());
        let title = Paragraph::new(Line::from(vec![
            Span::styled("Complexity Report", self.theme.heading_style()),
            Span::raw("  "),
            Span::styled(source, self.theme.metric_style()),
        ]));
        frame.render_widget(title, area);
    }

    fn render_body(&self, frame: &mut Frame, area: Rect) {
        let body = match &self.model {
            Some(model) => Paragraph::new(self.document_lines(model))
                .wrap(Wrap { trim: false })
                .scroll((self.scroll, 0)),
            None => Paragraph::new(vec![
                Line::raw(""),
                Line::styled(
                    "No analysis yet. Run an analysis to see complexity findings here.",
                    self.theme.metric_style(),
                ),
            ]),
        };
        frame.render_widget(body.block(Block::default().borders(Borders::TOP)), area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let footer = Paragraph::new(Line::from(vec![
            Span::styled("q", self.theme.metric_style()),
            Span::raw(": quit  "),
            Span::styled("r", self.theme.metric_style()),
            Span::raw(": refresh  "),
            Span::styled("↑/↓", self.theme.metric_style()),
            Span::raw(": scroll"),
        ]));
        frame.render_widget(footer, area);
    }

    /// The structured document: summary, warnings, distribution,
    /// comparison, per-function detail.
    fn document_lines(&self, model: &ReportModel) -> Vec<Line<'_>> {
        let mut lines = Vec::new();
        let theme = &self.theme;
        let overall = model.summary.overall;

        lines.push(Line::styled("SUMMARY", theme.heading_style()));
        lines.push(Line::from(vec![
            Span::raw("Overall: "),
            Span::styled(
                format!("{} ({})", overall.notation(), overall.name()),
                Style::default().fg(theme.label_color(overall)),
            ),
        ]));
        lines.push(Line::styled(overall.description(), theme.metric_style()));
        lines.push(Line::raw(format!(
            "Functions: {}   Mean confidence: {:.0}%",
            model.summary.function_count,
            model.summary.mean_confidence * 100.0
        )));
        lines.push(Line::raw(""));

        if !model.warnings.is_empty() {
            lines.push(Line::styled("WARNINGS", theme.heading_style()));
            for warning in &model.warnings {
                lines.push(Line::styled(format!("⚠ {warning}"), theme.warning_style()));
            }
            lines.push(Line::raw(""));
        }

        lines.push(Line::styled("DISTRIBUTION", theme.heading_style()));
        let max_count = model.distribution.iter().map(|e| e.count).max().unwrap_or(0);
        for entry in &model.distribution {
            let width = scaled_width(entry.count, max_count);
            lines.push(Line::from(vec![
                Span::raw(format!("{:<11}", entry.label.notation())),
                Span::styled(
                    "█".repeat(width),
                    Style::default().fg(theme.label_color(entry.label)),
                ),
                Span::styled(format!(" {}", entry.count), theme.metric_style()),
            ]));
        }
        lines.push(Line::raw(""));

        if !model.comparison.is_empty() {
            lines.push(Line::styled("COMPARISON", theme.heading_style()));
            for entry in &model.comparison {
                let width = scaled_width(entry.order as usize + 1, 9);
                lines.push(Line::from(vec![
                    Span::raw(format!("{:<24}", truncated(&entry.name, 23))),
                    Span::styled("▇".repeat(width), Style::default().fg(hex_color(entry.color))),
                ]));
            }
            lines.push(Line::raw(""));
        }

        if !model.details.is_empty() {
            lines.push(Line::styled("FUNCTIONS", theme.heading_style()));
            for detail in &model.details {
                lines.push(Line::from(vec![
                    Span::styled(
                        detail.label.notation(),
                        Style::default().fg(theme.label_color(detail.label)),
                    ),
                    Span::raw(format!(
                        "  {} (lines {}–{})",
                        detail.name, detail.line_start, detail.line_end
                    )),
                ]));
                let bar = scaled_width((detail.confidence * 100.0).round() as usize, 100);
                lines.push(Line::from(vec![
                    Span::raw("  confidence "),
                    Span::styled(
                        "─".repeat(bar),
                        Style::default().fg(band_color(detail.band)),
                    ),
                    Span::styled(
                        format!(" {:.0}%", detail.confidence * 100.0),
                        theme.metric_style(),
                    ),
                ]));
                for item in &detail.evidence {
                    lines.push(Line::styled(format!("  · {item}"), theme.metric_style()));
                }
            }
        }

        lines
    }
}

fn band_color(band: ConfidenceBand) -> ratatui::style::Color {
    hex_color(band.color())
}

fn scaled_width(value: usize, max: usize) -> usize {
    if max == 0 || value == 0 {
        return 0;
    }
    (value * MAX_BAR_WIDTH).div_ceil(max).min(MAX_BAR_WIDTH)
}

fn truncated(name: &str, limit: usize) -> String {
    if name.chars().count() <= limit {
        name.to_string()
    } else {
        let kept: String = name.chars().take(limit.saturating_sub(1)).collect();
        format!("{kept}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AnalysisResult;
    use crate::taxonomy::Complexity;

    #[test]
    fn starts_in_the_empty_state_and_refreshes_in_place() {
        let mut panel = ReportPanel::new();
        assert!(!panel.has_result());

        let result = AnalysisResult::degraded("rust", None, vec![]);
        panel.update(&result);
        assert!(panel.has_result());

        panel.refresh(None);
        assert!(!panel.has_result());
    }

    #[test]
    fn update_resets_scroll() {
        let mut panel = ReportPanel::new();
        panel.scroll_down();
        panel.scroll_down();
        panel.update(&AnalysisResult::degraded("rust", None, vec![]));
        assert_eq!(panel.scroll, 0);
    }

    #[test]
    fn document_lines_cover_every_section() {
        let mut panel = ReportPanel::new();
        let mut result = AnalysisResult::degraded("rust", None, vec!["slow engine".into()]);
        result.functions.push(crate::core::FunctionComplexity {
            name: "walk".into(),
            label: Complexity::Quadratic,
            confidence: 0.85,
            evidence: vec!["Nested loops detected".into()],
            line_start: 2,
            line_end: 14,
        });
        panel.update(&result);

        let model = panel.model.as_ref().unwrap();
        let text: Vec<String> = panel
            .document_lines(model)
            .iter()
            .map(|line| line.spans.iter().map(|span| span.content.as_ref()).collect())
            .collect();
        let joined = text.join("\n");
        for section in ["SUMMARY", "WARNINGS", "DISTRIBUTION", "COMPARISON", "FUNCTIONS"] {
            assert!(joined.contains(section), "missing section {section}");
        }
        assert!(joined.contains("slow engine"));
        assert!(joined.contains("walk"));
    }

    #[test]
    fn bar_widths_scale_and_clamp() {
        assert_eq!(scaled_width(0, 10), 0);
        assert_eq!(scaled_width(10, 10), MAX_BAR_WIDTH);
        assert_eq!(scaled_width(5, 0), 0);
        assert!(scaled_width(1, 10) >= 1);
    }
}
