//! Styling for the interactive report panel.

use crate::taxonomy::Complexity;
use ratatui::style::{Color, Modifier, Style};

/// Minimal color scheme for the report panel.
pub struct Theme {
    /// Accent color for section headers and the active hints.
    pub accent: Color,
    /// Muted color for secondary text.
    pub muted: Color,
    /// Normal text color.
    pub text: Color,
    /// Warning color.
    pub warning: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            accent: Color::Cyan,
            muted: Color::DarkGray,
            text: Color::White,
            warning: Color::Yellow,
        }
    }

    /// Style for section headings.
    pub fn heading_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Style for secondary/metric text.
    pub fn metric_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for warning lines.
    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Terminal color for a complexity label, derived from the
    /// taxonomy's hex encoding so the two can never disagree.
    pub fn label_color(&self, label: Complexity) -> Color {
        hex_color(label.color())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

/// Parse a `#rrggbb` hex encoding into a terminal color; anything
/// unparseable renders gray.
pub fn hex_color(hex: &str) -> Color {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 {
        return Color::Gray;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Some(r), Some(g), Some(b)) => Color::Rgb(r, g, b),
        _ => Color::Gray,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::ALL_LABELS;

    #[test]
    fn hex_parsing_matches_the_taxonomy_encoding() {
        assert_eq!(hex_color("#4caf50"), Color::Rgb(0x4c, 0xaf, 0x50));
        assert_eq!(hex_color("not-a-color"), Color::Gray);
    }

    #[test]
    fn every_label_maps_to_a_concrete_rgb_color() {
        let theme = Theme::default_theme();
        for label in ALL_LABELS {
            assert!(matches!(theme.label_color(label), Color::Rgb(..)));
        }
    }
}
