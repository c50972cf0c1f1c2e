//! Golf Green Measurement
//!
//! Geometric analysis of walked green perimeters: area and length
//! measurement on a local plane, concavity detection, two-portion splitting
//! and spine construction, producing an Effective Green Diameter (EGD) per
//! course-rating convention.

pub mod core;
pub mod algorithms;
pub mod validation;
pub mod utils;
pub mod api;

// Re-export commonly used types
pub use crate::core::{GeographicPoint, PlanarPoint, PointRole, EARTH_RADIUS_M, YARDS_PER_METER};
pub use algorithms::{
    analyze, analyze_anomalous, classify, classify_with, convex_hull, distance, path_length,
    perimeter_length, polygon_area, width_at, AnomalousResult, Classification, EgdMethod, EgdResult,
    LocalProjection, ShapeAnalysis, ShapeMethod,
};
pub use validation::{GreenError, GreenResult, PerimeterValidator, ValidationError};
pub use utils::{AnalysisConfig, ConfigError};
pub use api::{
    summarize, GreenRecord, GreenSummary, GreenSurvey, JsonFileStore, MemoryStore, PerimeterStore,
    PositionSource, ReplaySource,
};
