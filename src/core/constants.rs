//! Physical constants and rating defaults

/// Mean earth radius used by haversine and the local projection (m)
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Yards per meter
pub const YARDS_PER_METER: f64 = 1.09361;

/// Minimum number of points for a closed perimeter
pub const MIN_PERIMETER_POINTS: usize = 3;

/// Determinant magnitude below which a line/edge pair is treated as parallel
pub const PARALLEL_EPSILON: f64 = 1e-10;

/// Slack on the edge parameter so crossings through a vertex are not lost
pub const EDGE_PARAM_EPSILON: f64 = 1e-9;

/// Default concavity ratio below which a green is split into two portions
pub const DEFAULT_CONCAVITY_THRESHOLD: f64 = 0.82;

/// Default length/width ratio above which a green is split into two portions
pub const DEFAULT_MAX_SIMPLE_RATIO: f64 = 3.6;

/// Default relative difference between quarter widths that flags inconsistency
pub const DEFAULT_INCONSISTENCY_TOLERANCE: f64 = 0.25;

/// Default number of spine sampling intervals (16 samples)
pub const DEFAULT_SPINE_STEPS: usize = 15;

/// Default curved/straight length ratio above which manual rating is required
pub const DEFAULT_MANUAL_RATING_FACTOR: f64 = 1.15;

/// Convert meters to yards
pub fn meters_to_yards(meters: f64) -> f64 {
    meters * YARDS_PER_METER
}

/// Convert square meters to square yards
pub fn square_meters_to_square_yards(square_meters: f64) -> f64 {
    square_meters * YARDS_PER_METER * YARDS_PER_METER
}
