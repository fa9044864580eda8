//! The complexity taxonomy shared by every renderer and exporter.
//!
//! Nine labels, totally ordered by severity. Order, color, and
//! description live here and nowhere else; consumers that need any of
//! the three go through this module so the tables cannot drift apart.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Color used when a label is absent or not part of the closed set.
pub const NEUTRAL_COLOR: &str = "#9e9e9e";

/// A complexity class. Declaration order is severity order; `Ord`
/// compares by it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Complexity {
    Constant,
    Logarithmic,
    Linear,
    Linearithmic,
    Quadratic,
    Cubic,
    Polynomial,
    Exponential,
    Factorial,
}

/// All labels in severity order.
pub const ALL_LABELS: [Complexity; 9] = [
    Complexity::Constant,
    Complexity::Logarithmic,
    Complexity::Linear,
    Complexity::Linearithmic,
    Complexity::Quadratic,
    Complexity::Cubic,
    Complexity::Polynomial,
    Complexity::Exponential,
    Complexity::Factorial,
];

static LABEL_TABLE: &[(Complexity, &str, &str, u8)] = &[
    (Complexity::Constant, "O(1)", "constant", 0),
    (Complexity::Logarithmic, "O(log n)", "logarithmic", 1),
    (Complexity::Linear, "O(n)", "linear", 2),
    (Complexity::Linearithmic, "O(n log n)", "linearithmic", 3),
    (Complexity::Quadratic, "O(n²)", "quadratic", 4),
    (Complexity::Cubic, "O(n³)", "cubic", 5),
    (Complexity::Polynomial, "O(n^k)", "polynomial", 6),
    (Complexity::Exponential, "O(2ⁿ)", "exponential", 7),
    (Complexity::Factorial, "O(n!)", "factorial", 8),
];

impl Complexity {
    /// Big-O notation string, the wire spelling used by the engine.
    pub fn notation(self) -> &'static str {
        LABEL_TABLE
            .iter()
            .find(|(c, _, _, _)| *c == self)
            .map(|(_, notation, _, _)| *notation)
            .unwrap_or("O(n)")
    }

    /// Plain-word name of the class.
    pub fn name(self) -> &'static str {
        LABEL_TABLE
            .iter()
            .find(|(c, _, _, _)| *c == self)
            .map(|(_, _, name, _)| *name)
            .unwrap_or("linear")
    }

    /// Canonical severity index, 0..=8, strictly increasing.
    pub fn order(self) -> u8 {
        LABEL_TABLE
            .iter()
            .find(|(c, _, _, _)| *c == self)
            .map(|(_, _, _, order)| *order)
            .unwrap_or(2)
    }

    /// Stable visual encoding, a green-to-red hex ramp.
    pub fn color(self) -> &'static str {
        match self {
            Complexity::Constant => "#4caf50",
            Complexity::Logarithmic => "#8bc34a",
            Complexity::Linear => "#cddc39",
            Complexity::Linearithmic => "#ffeb3b",
            Complexity::Quadratic => "#ffc107",
            Complexity::Cubic => "#ff9800",
            Complexity::Polynomial => "#ff5722",
            Complexity::Exponential => "#f44336",
            Complexity::Factorial => "#b71c1c",
        }
    }

    /// Human-readable performance characterization.
    pub fn description(self) -> &'static str {
        match self {
            Complexity::Constant => "Runs in the same time regardless of input size",
            Complexity::Logarithmic => "Time grows logarithmically as the input grows",
            Complexity::Linear => "Time grows proportionally with the input size",
            Complexity::Linearithmic => "Time grows at n log n, typical of efficient sorts",
            Complexity::Quadratic => "Time grows with the square of the input size",
            Complexity::Cubic => "Time grows with the cube of the input size",
            Complexity::Polynomial => "Time grows with a higher-degree polynomial of the input",
            Complexity::Exponential => "Time doubles with each additional input element",
            Complexity::Factorial => "Time grows factorially; impractical beyond tiny inputs",
        }
    }

    /// Parse a label string. Accepts both the Big-O notation spelling
    /// and the plain-word name, case-insensitively for the latter.
    pub fn parse(label: &str) -> Option<Complexity> {
        let trimmed = label.trim();
        LABEL_TABLE
            .iter()
            .find(|(_, notation, name, _)| {
                *notation == trimmed || trimmed.eq_ignore_ascii_case(name)
            })
            .map(|(c, _, _, _)| *c)
    }

    /// Total parse: any unrecognized or absent label is `Linear`.
    pub fn from_label(label: Option<&str>) -> Complexity {
        label.and_then(Complexity::parse).unwrap_or(Complexity::Linear)
    }
}

/// Severity index for a raw label; unknown or absent falls back to
/// `Linear`'s index.
pub fn order_of(label: Option<&str>) -> u8 {
    Complexity::from_label(label).order()
}

/// Color for a raw label; unknown or absent yields the neutral color,
/// not `Linear`'s.
pub fn color_of(label: Option<&str>) -> &'static str {
    match label.and_then(Complexity::parse) {
        Some(complexity) => complexity.color(),
        None => NEUTRAL_COLOR,
    }
}

/// Description for a raw label; unknown or absent falls back to
/// `Linear`'s description.
pub fn description_of(label: Option<&str>) -> &'static str {
    Complexity::from_label(label).description()
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.notation())
    }
}

impl Serialize for Complexity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.notation())
    }
}

impl<'de> Deserialize<'de> for Complexity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Complexity::from_label(Some(&label)))
    }
}
