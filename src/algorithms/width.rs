//! Perpendicular width sampling across a closed polygon

use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};

use crate::core::{PlanarPoint, EDGE_PARAM_EPSILON, PARALLEL_EPSILON};

/// One polygon edge on the local plane
pub type Edge = (PlanarPoint, PlanarPoint);

/// Extreme signed offsets along the sampling direction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WidthSpan {
    pub min_t: f64,
    pub max_t: f64,
}

impl WidthSpan {
    pub fn width(&self) -> f64 {
        self.max_t - self.min_t
    }

    pub fn mid_t(&self) -> f64 {
        (self.min_t + self.max_t) / 2.0
    }
}

/// Consecutive edges of a closed ring, including the wrap-around edge
pub fn polygon_edges(ring: &[PlanarPoint]) -> Vec<Edge> {
    if ring.len() < 2 {
        return Vec::new();
    }
    ring.iter()
        .zip(ring.iter().cycle().skip(1))
        .map(|(a, b)| (*a, *b))
        .collect()
}

/// Signed parameter `t` where the line `origin + t * direction` meets `edge`.
///
/// Returns `None` for near-parallel edges or when the crossing falls
/// outside the segment.
fn line_edge_crossing(origin: &PlanarPoint, direction: &Vector2<f64>, edge: &Edge) -> Option<f64> {
    let (a, b) = edge;
    let segment = b - a;
    // [direction | -segment] * (t, u) = a - origin
    let system = Matrix2::new(direction.x, -segment.x, direction.y, -segment.y);
    let det = system.determinant();
    if det.abs() < PARALLEL_EPSILON {
        return None;
    }

    let rhs = a - origin;
    let t = (rhs.x * -segment.y + segment.x * rhs.y) / det;
    let u = (direction.x * rhs.y - direction.y * rhs.x) / det;

    if (-EDGE_PARAM_EPSILON..=1.0 + EDGE_PARAM_EPSILON).contains(&u) {
        Some(t)
    } else {
        None
    }
}

/// Boundary crossings of the line through `origin` along `direction`.
///
/// `direction` is normally the unit normal to a diameter axis, so the
/// returned offsets are in meters. Fewer than two crossings means no width
/// can be bounded at this point.
pub fn width_at(origin: &PlanarPoint, direction: &Vector2<f64>, edges: &[Edge]) -> Option<WidthSpan> {
    let mut crossings = edges
        .iter()
        .filter_map(|edge| line_edge_crossing(origin, direction, edge));

    let first = crossings.next()?;
    let mut span = WidthSpan { min_t: first, max_t: first };
    let mut count = 1usize;
    for t in crossings {
        span.min_t = span.min_t.min(t);
        span.max_t = span.max_t.max(t);
        count += 1;
    }

    if count < 2 {
        return None;
    }
    Some(span)
}
