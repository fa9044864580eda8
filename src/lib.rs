// Export modules for library usage
pub mod cli;
pub mod config;
pub mod core;
pub mod engine;
pub mod io;
pub mod pipeline;
pub mod render;
pub mod report;
pub mod session;
pub mod taxonomy;

// Re-export commonly used types
pub use crate::core::{language_for_path, AnalysisResult, FunctionComplexity};

pub use crate::taxonomy::{color_of, description_of, order_of, Complexity, ALL_LABELS};

pub use crate::engine::{
    BindingStrategy, EngineAdapter, EngineCapability, EngineError, SUPPORTED_LANGUAGES,
};

pub use crate::io::{print_summary, render_export, write_export, ExportFormat};

pub use crate::render::{render_annotations, AnnotationSurface, Marker, MarkerBatch};

pub use crate::report::{mean_confidence, ConfidenceBand, ReportModel, ReportPanel};

pub use crate::pipeline::AnalysisPipeline;

pub use crate::session::AnalysisSession;
