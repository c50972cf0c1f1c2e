//! Survey records and summaries handed to the display layer

use serde::{Deserialize, Serialize};

use crate::algorithms::metrics::{perimeter_length, polygon_area};
use crate::algorithms::shape::{classify_with, Classification};
use crate::core::{meters_to_yards, square_meters_to_square_yards, GeographicPoint};
use crate::utils::config::AnalysisConfig;

/// Numbers shown while walking and after closing a perimeter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GreenSummary {
    pub point_count: usize,
    /// Enclosed area (m^2)
    pub area_m2: f64,
    /// Closed loop length (m)
    pub perimeter_m: f64,
    /// Absent until the perimeter can be analyzed
    pub analysis: Option<Classification>,
}

impl GreenSummary {
    pub fn area_yd2(&self) -> f64 {
        square_meters_to_square_yards(self.area_m2)
    }

    pub fn perimeter_yd(&self) -> f64 {
        meters_to_yards(self.perimeter_m)
    }

    /// Whole-green EGD in yards, if analyzed
    pub fn egd(&self) -> Option<f64> {
        self.analysis.as_ref().map(|c| c.shape.whole().egd)
    }
}

/// Measure and classify a perimeter in one pass
pub fn summarize(perimeter: &[GeographicPoint], config: &AnalysisConfig) -> GreenSummary {
    GreenSummary {
        point_count: perimeter.len(),
        area_m2: polygon_area(perimeter),
        perimeter_m: perimeter_length(perimeter),
        analysis: classify_with(perimeter, config),
    }
}

/// A finalized green survey as stored by a `PerimeterStore`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GreenRecord {
    pub name: String,
    pub perimeter: Vec<GeographicPoint>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bunker_edges: Vec<GeographicPoint>,
    pub summary: GreenSummary,
    /// Time the survey was closed (ms since the unix epoch)
    pub finalized_ms: u64,
}
