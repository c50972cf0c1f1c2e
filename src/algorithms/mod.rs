//! Geometric analysis of green perimeters

pub mod projection;
pub mod metrics;
pub mod hull;
pub mod width;
pub mod egd;
pub mod shape;
pub mod anomalous;

pub use projection::LocalProjection;
pub use metrics::{distance, path_length, perimeter_length, polygon_area};
pub use hull::convex_hull;
pub use width::{width_at, WidthSpan};
pub use egd::{analyze, analyze_with, EgdMethod, EgdResult, Inconsistency, WidthSegment};
pub use shape::{classify, classify_with, Classification, Portions, ShapeAnalysis, ShapeMethod};
pub use anomalous::{analyze_anomalous, analyze_anomalous_with, AnomalousResult, SampleMark, WidthSample};
