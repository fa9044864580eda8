//! The interactive report: a structured document derived from the
//! canonical result, rendered in place.

pub mod app;
pub mod model;
pub mod panel;
pub mod theme;

pub use model::{mean_confidence, ConfidenceBand, ReportModel};
pub use panel::ReportPanel;
