//! Monotone-chain convex hull

use std::cmp::Ordering;

use crate::core::GeographicPoint;

/// Z component of (a - o) x (b - o), with longitude as x and latitude as y
fn cross(o: &GeographicPoint, a: &GeographicPoint, b: &GeographicPoint) -> f64 {
    (a.lon - o.lon) * (b.lat - o.lat) - (a.lat - o.lat) * (b.lon - o.lon)
}

fn push_strict_left(chain: &mut Vec<GeographicPoint>, point: &GeographicPoint) {
    // collinear points are dropped as well
    while chain.len() >= 2 && cross(&chain[chain.len() - 2], &chain[chain.len() - 1], point) <= 0.0 {
        chain.pop();
    }
    chain.push(point.clone());
}

/// Counter-clockwise hull of `points`, collinear boundary points excluded.
///
/// Fewer than three points are returned unchanged.
pub fn convex_hull(points: &[GeographicPoint]) -> Vec<GeographicPoint> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| {
        a.lon
            .partial_cmp(&b.lon)
            .unwrap_or(Ordering::Equal)
            .then(a.lat.partial_cmp(&b.lat).unwrap_or(Ordering::Equal))
    });

    let mut lower = Vec::with_capacity(sorted.len());
    for point in &sorted {
        push_strict_left(&mut lower, point);
    }

    let mut upper = Vec::with_capacity(sorted.len());
    for point in sorted.iter().rev() {
        push_strict_left(&mut upper, point);
    }

    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}
