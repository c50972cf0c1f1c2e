//! Distance, length and area measurements
//!
//! Lengths use haversine so absolute distances stay faithful to the
//! captured samples; areas use the shoelace formula on a local plane.

use crate::algorithms::projection::LocalProjection;
use crate::core::{GeographicPoint, PlanarPoint, EARTH_RADIUS_M, MIN_PERIMETER_POINTS};

/// Great-circle distance in meters
pub fn distance(p1: &GeographicPoint, p2: &GeographicPoint) -> f64 {
    let lat1 = p1.lat.to_radians();
    let lat2 = p2.lat.to_radians();
    let dlat = (p2.lat - p1.lat).to_radians();
    let dlon = (p2.lon - p1.lon).to_radians();

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

/// Unsigned polygon area in square meters, projected around `points[0]`
pub fn polygon_area(points: &[GeographicPoint]) -> f64 {
    match points.first() {
        Some(first) if points.len() >= MIN_PERIMETER_POINTS => {
            polygon_area_in(&LocalProjection::new(first), points)
        }
        _ => 0.0,
    }
}

/// Unsigned polygon area in square meters on a caller-chosen projection
pub fn polygon_area_in(projection: &LocalProjection, points: &[GeographicPoint]) -> f64 {
    if points.len() < MIN_PERIMETER_POINTS {
        return 0.0;
    }
    shoelace(&projection.project_all(points))
}

/// Unsigned shoelace area of a closed planar ring
pub fn shoelace(ring: &[PlanarPoint]) -> f64 {
    if ring.len() < MIN_PERIMETER_POINTS {
        return 0.0;
    }
    let twice_area: f64 = ring
        .iter()
        .zip(ring.iter().cycle().skip(1))
        .map(|(a, b)| a.x * b.y - b.x * a.y)
        .sum();
    twice_area.abs() / 2.0
}

/// Length of an open path (e.g. a walked fairway line) in meters
pub fn path_length(points: &[GeographicPoint]) -> f64 {
    points.windows(2).map(|w| distance(&w[0], &w[1])).sum()
}

/// Length of a closed loop, including the edge back to the first point
pub fn perimeter_length(points: &[GeographicPoint]) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }
    let closing = match (points.first(), points.last()) {
        (Some(first), Some(last)) => distance(last, first),
        _ => 0.0,
    };
    path_length(points) + closing
}
