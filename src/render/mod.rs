pub mod annotations;

pub use annotations::{render_annotations, AnnotationSurface, Marker, MarkerBatch};
