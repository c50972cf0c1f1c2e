//! Green shape classification: single shape, two portions, or anomalous
//!
//! A green is split into two portions when the midpoint of its diameter
//! falls outside the outline, when its outline is too concave, or when it
//! is too elongated. The split happens at the elbow, the perimeter point
//! farthest from the diameter axis. If a portion's own diameter midpoint
//! is still outside the outline, the whole green gets a spine analysis.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::algorithms::anomalous::{analyze_anomalous_with, AnomalousResult, ANOMALOUS_METHOD_LABEL};
use crate::algorithms::egd::{analyze_with, DiameterAxis, EgdMethod, EgdResult};
use crate::algorithms::hull::convex_hull;
use crate::algorithms::metrics::polygon_area_in;
use crate::algorithms::projection::LocalProjection;
use crate::core::{GeographicPoint, PlanarPoint, MIN_PERIMETER_POINTS};
use crate::utils::config::AnalysisConfig;

pub const TWO_PORTIONS_METHOD_LABEL: &str = "Two portions";

/// The two halves of a green split at the elbow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portions {
    /// Index of the perimeter point shared by both halves
    pub elbow_index: usize,
    /// Analysis of `perimeter[..=elbow_index]`, absent below three points
    pub first: Option<EgdResult>,
    /// Analysis of `perimeter[elbow_index..]`, absent below three points
    pub second: Option<EgdResult>,
}

impl Portions {
    pub fn iter(&self) -> impl Iterator<Item = &EgdResult> {
        self.first.iter().chain(self.second.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeAnalysis {
    Simple {
        whole: EgdResult,
    },
    TwoPortion {
        whole: EgdResult,
        portions: Portions,
    },
    Anomalous {
        whole: EgdResult,
        portions: Portions,
        anomalous: AnomalousResult,
    },
}

/// Method reported for a classified green
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeMethod {
    Single(EgdMethod),
    TwoPortions,
    Anomalous,
}

impl ShapeMethod {
    pub fn label(&self) -> &'static str {
        match self {
            ShapeMethod::Single(method) => method.label(),
            ShapeMethod::TwoPortions => TWO_PORTIONS_METHOD_LABEL,
            ShapeMethod::Anomalous => ANOMALOUS_METHOD_LABEL,
        }
    }
}

impl fmt::Display for ShapeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl ShapeAnalysis {
    /// Result for the whole perimeter
    pub fn whole(&self) -> &EgdResult {
        match self {
            ShapeAnalysis::Simple { whole }
            | ShapeAnalysis::TwoPortion { whole, .. }
            | ShapeAnalysis::Anomalous { whole, .. } => whole,
        }
    }

    pub fn is_l_shape(&self) -> bool {
        !matches!(self, ShapeAnalysis::Simple { .. })
    }

    pub fn has_anomaly(&self) -> bool {
        matches!(self, ShapeAnalysis::Anomalous { .. })
    }

    pub fn portions(&self) -> Option<&Portions> {
        match self {
            ShapeAnalysis::Simple { .. } => None,
            ShapeAnalysis::TwoPortion { portions, .. } | ShapeAnalysis::Anomalous { portions, .. } => {
                Some(portions)
            }
        }
    }

    pub fn anomalous(&self) -> Option<&AnomalousResult> {
        match self {
            ShapeAnalysis::Anomalous { anomalous, .. } => Some(anomalous),
            _ => None,
        }
    }

    pub fn method(&self) -> ShapeMethod {
        match self {
            ShapeAnalysis::Simple { whole } => ShapeMethod::Single(whole.method),
            ShapeAnalysis::TwoPortion { .. } => ShapeMethod::TwoPortions,
            ShapeAnalysis::Anomalous { .. } => ShapeMethod::Anomalous,
        }
    }
}

/// Classification together with the diagnostics that drove it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub shape: ShapeAnalysis,
    /// Polygon area / convex hull area, 1.0 for convex outlines
    pub concavity: f64,
    /// Whether the diameter midpoint lies inside the outline
    pub midpoint_inside: bool,
}

/// Even-odd ray casting
pub fn point_in_polygon(point: &PlanarPoint, ring: &[PlanarPoint]) -> bool {
    if ring.len() < MIN_PERIMETER_POINTS {
        return false;
    }
    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let (a, b) = (&ring[i], &ring[j]);
        if (a.y > point.y) != (b.y > point.y) {
            let x_cross = (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Area over convex hull area, both on a plane anchored at `perimeter[0]`.
///
/// Zero when the hull has no area.
pub fn concavity(perimeter: &[GeographicPoint]) -> f64 {
    let Some(first) = perimeter.first() else {
        return 0.0;
    };
    let projection = LocalProjection::new(first);
    let hull_area = polygon_area_in(&projection, &convex_hull(perimeter));
    if hull_area <= 0.0 {
        return 0.0;
    }
    polygon_area_in(&projection, perimeter) / hull_area
}

/// Classify with default thresholds and the given concavity threshold
pub fn classify(perimeter: &[GeographicPoint], concavity_threshold: f64) -> Option<ShapeAnalysis> {
    classify_with(perimeter, &AnalysisConfig::with_concavity_threshold(concavity_threshold))
        .map(|classification| classification.shape)
}

pub fn classify_with(perimeter: &[GeographicPoint], config: &AnalysisConfig) -> Option<Classification> {
    if perimeter.len() < MIN_PERIMETER_POINTS {
        return None;
    }

    let whole = analyze_with(perimeter, false, config)?;
    let axis = DiameterAxis::new(&whole.p_a, &whole.p_b)?;
    let ring = axis.projection().project_all(perimeter);

    let concavity = concavity(perimeter);
    let midpoint_inside = point_in_polygon(&axis.point_at(0.5), &ring);

    let too_concave = concavity > 0.0 && concavity < config.concavity_threshold;
    let too_elongated = whole.ratio > config.max_simple_ratio;
    let is_l_shape = !midpoint_inside || too_concave || too_elongated;

    log::debug!(
        "classify: {} points, concavity {:.3}, ratio {:.2}, midpoint inside {}, l-shape {}",
        perimeter.len(),
        concavity,
        whole.ratio,
        midpoint_inside,
        is_l_shape
    );

    if !is_l_shape {
        return Some(Classification {
            shape: ShapeAnalysis::Simple { whole },
            concavity,
            midpoint_inside,
        });
    }

    let elbow_index = ring
        .iter()
        .enumerate()
        .fold((0, f64::MIN), |best, (i, local)| {
            let offset = axis.offset_from_axis(local);
            if offset > best.1 {
                (i, offset)
            } else {
                best
            }
        })
        .0;

    let portions = Portions {
        elbow_index,
        first: analyze_with(&perimeter[..=elbow_index], true, config),
        second: analyze_with(&perimeter[elbow_index..], true, config),
    };

    let projection = axis.projection();
    let has_anomaly = portions.iter().any(|portion| {
        let mid = (projection.to_local(&portion.p_a) + projection.to_local(&portion.p_b)) / 2.0;
        !point_in_polygon(&mid, &ring)
    });

    let anomalous = if has_anomaly {
        log::debug!("classify: portion diameter leaves the outline, building spine");
        analyze_anomalous_with(perimeter, &whole.p_a, &whole.p_b, config)
    } else {
        None
    };

    let shape = match anomalous {
        Some(anomalous) => ShapeAnalysis::Anomalous {
            whole,
            portions,
            anomalous,
        },
        None => ShapeAnalysis::TwoPortion { whole, portions },
    };

    Some(Classification {
        shape,
        concavity,
        midpoint_inside,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DEFAULT_CONCAVITY_THRESHOLD;

    fn to_geo(xy: &[(f64, f64)]) -> Vec<GeographicPoint> {
        let projection = LocalProjection::new(&GeographicPoint::new(36.568, -121.950));
        xy.iter()
            .map(|&(x, y)| projection.from_local(&PlanarPoint::new(x, y)))
            .collect()
    }

    #[test]
    fn test_point_in_polygon() {
        let square = vec![
            PlanarPoint::new(0.0, 0.0),
            PlanarPoint::new(10.0, 0.0),
            PlanarPoint::new(10.0, 10.0),
            PlanarPoint::new(0.0, 10.0),
        ];

        assert!(point_in_polygon(&PlanarPoint::new(5.0, 5.0), &square));
        assert!(!point_in_polygon(&PlanarPoint::new(15.0, 5.0), &square));
        assert!(!point_in_polygon(&PlanarPoint::new(5.0, -1.0), &square));
        assert!(!point_in_polygon(&PlanarPoint::new(5.0, 5.0), &square[..2]));
    }

    #[test]
    fn test_convex_concavity_is_one() {
        let hexagon = to_geo(&[(0.0, 0.0), (20.0, -5.0), (35.0, 5.0), (30.0, 25.0), (10.0, 30.0), (-5.0, 15.0)]);
        assert!((concavity(&hexagon) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_notched_concavity_below_one() {
        let notched = to_geo(&[(0.0, 0.0), (30.0, 0.0), (30.0, 30.0), (15.0, 5.0), (0.0, 30.0)]);
        let value = concavity(&notched);
        assert!(value > 0.0 && value < 0.82);
    }

    #[test]
    fn test_rounded_green_is_simple() {
        let oval: Vec<(f64, f64)> = (0..24)
            .map(|k| {
                let angle = (k as f64 * 15.0).to_radians();
                (18.0 * angle.cos(), 12.0 * angle.sin())
            })
            .collect();

        let analysis = classify(&to_geo(&oval), DEFAULT_CONCAVITY_THRESHOLD).unwrap();

        assert!(!analysis.is_l_shape());
        assert!(!analysis.has_anomaly());
        assert!(analysis.portions().is_none());
        assert_eq!(analysis.method(), ShapeMethod::Single(analysis.whole().method));
    }

    #[test]
    fn test_l_shape_splits_into_arms() {
        // 6 m wide arms, 60 m long, walked from the inner corner
        let l_shape = to_geo(&[(6.0, 6.0), (6.0, 60.0), (0.0, 60.0), (0.0, 0.0), (60.0, 0.0), (60.0, 6.0)]);

        let classification = classify_with(&l_shape, &AnalysisConfig::default()).unwrap();
        let analysis = &classification.shape;

        assert!(!classification.midpoint_inside);
        assert!(analysis.is_l_shape());
        assert!(!analysis.has_anomaly());
        assert_eq!(analysis.method().label(), "Two portions");

        let portions = analysis.portions().unwrap();
        assert_eq!(portions.elbow_index, 3);
        let first = portions.first.as_ref().unwrap();
        let second = portions.second.as_ref().unwrap();
        assert_eq!(first.method, EgdMethod::Average);
        assert_eq!(second.method, EgdMethod::Average);

        let arm_yards = crate::core::meters_to_yards(60.0);
        assert!((first.length - arm_yards).abs() < arm_yards * 0.01);
        assert!((second.length - arm_yards).abs() < arm_yards * 0.01);
    }

    #[test]
    fn test_elongated_green_splits() {
        let strip = to_geo(&[(0.0, 0.0), (80.0, 0.0), (80.0, 15.0), (0.0, 15.0)]);

        let classification = classify_with(&strip, &AnalysisConfig::default()).unwrap();

        assert!(classification.midpoint_inside);
        assert!((classification.concavity - 1.0).abs() < 1e-9);
        assert!(classification.shape.whole().ratio > 3.6);
        assert!(classification.shape.is_l_shape());
    }

    #[test]
    fn test_too_few_points() {
        let points = to_geo(&[(0.0, 0.0), (10.0, 0.0)]);
        assert!(classify(&points, DEFAULT_CONCAVITY_THRESHOLD).is_none());
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let square = to_geo(&[(0.0, 0.0), (20.0, 0.0), (20.0, 20.0), (0.0, 20.0)]);
        let analysis = classify(&square, DEFAULT_CONCAVITY_THRESHOLD).unwrap();

        let json = serde_json::to_value(&analysis).unwrap();

        assert_eq!(json["kind"], "simple");
        assert!(json["whole"]["egd"].is_number());
    }
}
