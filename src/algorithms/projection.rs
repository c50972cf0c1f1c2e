//! Local planar projection anchored at a reference point
//!
//! Equirectangular approximation: longitude differences are scaled by the
//! cosine of the reference latitude so both axes carry roughly the same
//! meters-per-degree near the reference. Accurate at green and fairway
//! scale, not over kilometers.

use crate::core::{GeographicPoint, PlanarPoint, EARTH_RADIUS_M};

/// Local tangent plane around one reference point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalProjection {
    ref_lat: f64,
    ref_lon: f64,
    cos_ref_lat: f64,
}

impl LocalProjection {
    /// Anchor the plane at `reference`; its latitude sets the longitude scale
    pub fn new(reference: &GeographicPoint) -> Self {
        Self {
            ref_lat: reference.lat,
            ref_lon: reference.lon,
            cos_ref_lat: reference.lat.to_radians().cos(),
        }
    }

    /// Geodetic to local plane (meters)
    pub fn to_local(&self, point: &GeographicPoint) -> PlanarPoint {
        let x = (point.lon - self.ref_lon).to_radians() * EARTH_RADIUS_M * self.cos_ref_lat;
        let y = (point.lat - self.ref_lat).to_radians() * EARTH_RADIUS_M;
        PlanarPoint::new(x, y)
    }

    /// Local plane back to geodetic, the exact inverse of `to_local`
    pub fn from_local(&self, local: &PlanarPoint) -> GeographicPoint {
        let lat = self.ref_lat + (local.y / EARTH_RADIUS_M).to_degrees();
        let lon = self.ref_lon + (local.x / (EARTH_RADIUS_M * self.cos_ref_lat)).to_degrees();
        GeographicPoint::new(lat, lon)
    }

    pub fn project_all(&self, points: &[GeographicPoint]) -> Vec<PlanarPoint> {
        points.iter().map(|p| self.to_local(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reference_maps_to_origin() {
        let reference = GeographicPoint::new(37.7749, -122.4194);
        let projection = LocalProjection::new(&reference);

        let local = projection.to_local(&reference);
        assert!(local.x.abs() < 1e-12);
        assert!(local.y.abs() < 1e-12);
    }

    #[test]
    fn test_equator_scale() {
        let projection = LocalProjection::new(&GeographicPoint::new(0.0, 0.0));

        let local = projection.to_local(&GeographicPoint::new(0.001, 0.001));

        // ~111 meters per millidegree in both directions at the equator
        assert!((local.x - 111.19).abs() < 0.1);
        assert!((local.y - 111.19).abs() < 0.1);
    }

    #[test]
    fn test_longitude_shrinks_with_latitude() {
        let projection = LocalProjection::new(&GeographicPoint::new(60.0, 10.0));

        let local = projection.to_local(&GeographicPoint::new(60.0, 10.001));

        // cos(60deg) = 0.5
        assert!((local.x - 55.6).abs() < 0.1);
        assert!(local.y.abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn round_trip_is_exact(
            ref_lat in -85.0f64..85.0,
            ref_lon in -179.0f64..179.0,
            dlat in -0.01f64..0.01,
            dlon in -0.01f64..0.01,
        ) {
            let projection = LocalProjection::new(&GeographicPoint::new(ref_lat, ref_lon));
            let point = GeographicPoint::new(ref_lat + dlat, ref_lon + dlon);

            let back = projection.from_local(&projection.to_local(&point));

            prop_assert!((back.lat - point.lat).abs() <= 1e-9);
            prop_assert!((back.lon - point.lon).abs() <= 1e-9);
        }
    }
}
