//! Spine (medial axis) analysis for greens too irregular for a two-portion split

use serde::{Deserialize, Serialize};

use crate::algorithms::egd::{DiameterAxis, WidthSegment};
use crate::algorithms::metrics::{distance, path_length};
use crate::core::{meters_to_yards, GeographicPoint, MIN_PERIMETER_POINTS};
use crate::utils::config::AnalysisConfig;

/// Method label reported for anomalous greens
pub const ANOMALOUS_METHOD_LABEL: &str = "Anomalous Green Detected";

/// Position of a width sample along the main axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SampleMark {
    Quarter,
    Half,
    ThreeQuarters,
}

impl SampleMark {
    pub const ALL: [SampleMark; 3] = [SampleMark::Quarter, SampleMark::Half, SampleMark::ThreeQuarters];

    pub fn fraction(&self) -> f64 {
        match self {
            SampleMark::Quarter => 0.25,
            SampleMark::Half => 0.5,
            SampleMark::ThreeQuarters => 0.75,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SampleMark::Quarter => "1/4",
            SampleMark::Half => "1/2",
            SampleMark::ThreeQuarters => "3/4",
        }
    }

    /// Overlay color for map rendering
    pub fn color(&self) -> &'static str {
        match self {
            SampleMark::Quarter => "#f59e0b",
            SampleMark::Half => "#10b981",
            SampleMark::ThreeQuarters => "#8b5cf6",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidthSample {
    pub mark: SampleMark,
    pub segment: WidthSegment,
}

/// Spine and width samples for manual rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalousResult {
    /// Approximate medial axis, ordered from `p_a` to `p_b`
    pub spine: Vec<GeographicPoint>,
    /// Length along the spine (yards)
    pub curved_length: f64,
    /// Straight diameter length (yards)
    pub straight_length: f64,
    /// Widths at the quarter marks that could be resolved
    pub samples: Vec<WidthSample>,
    /// Curvature too pronounced for an automatic EGD
    pub is_manual_required: bool,
}

pub fn analyze_anomalous(
    perimeter: &[GeographicPoint],
    p_a: &GeographicPoint,
    p_b: &GeographicPoint,
) -> Option<AnomalousResult> {
    analyze_anomalous_with(perimeter, p_a, p_b, &AnalysisConfig::default())
}

/// Build the spine of `perimeter` along the axis `p_a` -> `p_b`.
///
/// Spine points are midpoints of the perpendicular boundary crossings at
/// evenly spaced axis positions; positions with no crossings are skipped.
pub fn analyze_anomalous_with(
    perimeter: &[GeographicPoint],
    p_a: &GeographicPoint,
    p_b: &GeographicPoint,
    config: &AnalysisConfig,
) -> Option<AnomalousResult> {
    if perimeter.len() < MIN_PERIMETER_POINTS {
        return None;
    }
    let axis = DiameterAxis::new(p_a, p_b)?;
    let edges = axis.edges(perimeter);

    let steps = config.spine_steps.max(1);
    let spine: Vec<GeographicPoint> = (0..=steps)
        .filter_map(|i| {
            let fraction = i as f64 / steps as f64;
            axis.span_at(fraction, &edges)
                .map(|(origin, span)| axis.along_normal(&origin, span.mid_t()))
        })
        .collect();

    let curved_length = meters_to_yards(path_length(&spine));
    let straight_length = meters_to_yards(distance(p_a, p_b));

    let samples = SampleMark::ALL
        .iter()
        .filter_map(|mark| {
            axis.width_segment(mark.fraction(), &edges)
                .map(|segment| WidthSample { mark: *mark, segment })
        })
        .collect();

    let is_manual_required = curved_length > straight_length * config.manual_rating_factor;
    log::debug!(
        "spine of {} points: curved {:.1} yd, straight {:.1} yd, manual rating {}",
        spine.len(),
        curved_length,
        straight_length,
        is_manual_required
    );

    Some(AnomalousResult {
        spine,
        curved_length,
        straight_length,
        samples,
        is_manual_required,
    })
}
