//! Effective Green Diameter analysis
//!
//! The diameter is found by checking every pair of recorded points. This is
//! O(n^2) and only acceptable because walked perimeters stay at tens to low
//! hundreds of points; it is re-run on every new sample during a walk.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::algorithms::metrics::distance;
use crate::algorithms::projection::LocalProjection;
use crate::algorithms::width::{polygon_edges, width_at, Edge, WidthSpan};
use crate::core::{meters_to_yards, GeographicPoint, PlanarPoint, MIN_PERIMETER_POINTS};
use crate::utils::config::AnalysisConfig;

/// Rating formula applied to length and width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EgdMethod {
    /// (L + W) / 2
    Average,
    /// (2W + L) / 3
    TwiceOther,
    /// (3W + L) / 4
    ThreeTimesOther,
    /// (L + mean of quarter widths) / 2
    InconsistentDimension,
}

impl EgdMethod {
    pub fn label(&self) -> &'static str {
        match self {
            EgdMethod::Average => "average (L+W)/2",
            EgdMethod::TwiceOther => "one dimension twice the other",
            EgdMethod::ThreeTimesOther => "one dimension three times the other",
            EgdMethod::InconsistentDimension => "one dimension not consistent",
        }
    }
}

impl fmt::Display for EgdMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A measured width line with its two boundary crossings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidthSegment {
    pub start: GeographicPoint,
    pub end: GeographicPoint,
    /// Width in yards
    pub width: f64,
}

/// Quarter widths that disagreed by more than the tolerance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inconsistency {
    /// Width at 25% of the axis
    pub first_quarter: WidthSegment,
    /// Width at 75% of the axis
    pub third_quarter: WidthSegment,
}

/// EGD measurement of one perimeter (or one portion of it)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EgdResult {
    /// Diameter endpoints
    pub p_a: GeographicPoint,
    pub p_b: GeographicPoint,
    /// Width endpoints at the axis midpoint
    pub p_c: GeographicPoint,
    pub p_d: GeographicPoint,
    /// Diameter length (yards)
    pub length: f64,
    /// Width at the axis midpoint (yards)
    pub width: f64,
    /// length / width, 0 when the width is zero
    pub ratio: f64,
    /// Effective green diameter (yards, one decimal)
    pub egd: f64,
    pub method: EgdMethod,
    pub inconsistency: Option<Inconsistency>,
}

impl EgdResult {
    pub fn is_inconsistent(&self) -> bool {
        self.inconsistency.is_some()
    }
}

/// Indices and length (m) of the most distant pair of points
pub fn diameter(points: &[GeographicPoint]) -> Option<(usize, usize, f64)> {
    let mut best: Option<(usize, usize, f64)> = None;
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            let d = distance(&points[i], &points[j]);
            if best.map_or(true, |(_, _, max)| d > max) {
                best = Some((i, j, d));
            }
        }
    }
    best
}

/// Main axis from `p_a` to `p_b` on a plane anchored at `p_a`
#[derive(Debug, Clone)]
pub struct DiameterAxis {
    projection: LocalProjection,
    vector: Vector2<f64>,
    unit: Vector2<f64>,
    normal: Vector2<f64>,
}

impl DiameterAxis {
    /// `None` for a zero-length axis
    pub fn new(p_a: &GeographicPoint, p_b: &GeographicPoint) -> Option<Self> {
        let projection = LocalProjection::new(p_a);
        let vector = projection.to_local(p_b) - projection.to_local(p_a);
        let length = vector.norm();
        if length <= f64::EPSILON {
            return None;
        }
        let unit = vector / length;
        Some(Self {
            projection,
            vector,
            unit,
            normal: Vector2::new(-unit.y, unit.x),
        })
    }

    pub fn projection(&self) -> &LocalProjection {
        &self.projection
    }

    /// Point at `fraction` of the way from `p_a` to `p_b`
    pub fn point_at(&self, fraction: f64) -> PlanarPoint {
        self.vector * fraction
    }

    /// Distance (m) of a local point from the infinite axis line
    pub fn offset_from_axis(&self, local: &PlanarPoint) -> f64 {
        self.unit.perp(local).abs()
    }

    /// Edges of `perimeter` on this axis' plane
    pub fn edges(&self, perimeter: &[GeographicPoint]) -> Vec<Edge> {
        polygon_edges(&self.projection.project_all(perimeter))
    }

    /// Perpendicular span at `fraction` along the axis
    pub fn span_at(&self, fraction: f64, edges: &[Edge]) -> Option<(PlanarPoint, WidthSpan)> {
        let origin = self.point_at(fraction);
        width_at(&origin, &self.normal, edges).map(|span| (origin, span))
    }

    /// Geographic point `t` meters along the normal from `origin`
    pub fn along_normal(&self, origin: &PlanarPoint, t: f64) -> GeographicPoint {
        self.projection.from_local(&(origin + self.normal * t))
    }

    /// Width line at `fraction`, converted to yards
    pub fn width_segment(&self, fraction: f64, edges: &[Edge]) -> Option<WidthSegment> {
        let (origin, span) = self.span_at(fraction, edges)?;
        Some(WidthSegment {
            start: self.along_normal(&origin, span.min_t),
            end: self.along_normal(&origin, span.max_t),
            width: meters_to_yards(span.width()),
        })
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// EGD analysis with default thresholds
pub fn analyze(perimeter: &[GeographicPoint], force_simple_average: bool) -> Option<EgdResult> {
    analyze_with(perimeter, force_simple_average, &AnalysisConfig::default())
}

/// EGD analysis of a closed perimeter.
///
/// `force_simple_average` is set when analyzing an already split portion;
/// it always applies (L + W) / 2.
pub fn analyze_with(
    perimeter: &[GeographicPoint],
    force_simple_average: bool,
    config: &AnalysisConfig,
) -> Option<EgdResult> {
    if perimeter.len() < MIN_PERIMETER_POINTS {
        return None;
    }

    let (ia, ib, diameter_m) = diameter(perimeter)?;
    let p_a = &perimeter[ia];
    let p_b = &perimeter[ib];
    let axis = DiameterAxis::new(p_a, p_b)?;
    let edges = axis.edges(perimeter);

    let mid = axis.width_segment(0.5, &edges)?;
    let length = meters_to_yards(diameter_m);
    let width = mid.width;
    let ratio = if width > 0.0 { length / width } else { 0.0 };

    let (egd, method, inconsistency) = if force_simple_average {
        ((length + width) / 2.0, EgdMethod::Average, None)
    } else {
        let quarters = axis
            .width_segment(0.25, &edges)
            .zip(axis.width_segment(0.75, &edges))
            .filter(|(w1, w3)| {
                let larger = w1.width.max(w3.width);
                larger > 0.0 && (w1.width - w3.width).abs() / larger > config.inconsistency_tolerance
            });

        match quarters {
            Some((first_quarter, third_quarter)) => {
                let mean = (first_quarter.width + third_quarter.width) / 2.0;
                (
                    (length + mean) / 2.0,
                    EgdMethod::InconsistentDimension,
                    Some(Inconsistency { first_quarter, third_quarter }),
                )
            }
            None if ratio >= 3.0 => ((3.0 * width + length) / 4.0, EgdMethod::ThreeTimesOther, None),
            None if ratio >= 2.0 => ((2.0 * width + length) / 3.0, EgdMethod::TwiceOther, None),
            None => ((length + width) / 2.0, EgdMethod::Average, None),
        }
    };

    Some(EgdResult {
        p_a: p_a.clone(),
        p_b: p_b.clone(),
        p_c: mid.start,
        p_d: mid.end,
        length,
        width,
        ratio,
        egd: round_tenth(egd),
        method,
        inconsistency,
    })
}
