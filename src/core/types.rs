//! Core data types for green measurement

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Position on the local plane in meters (x east, y north)
pub type PlanarPoint = Vector2<f64>;

/// What a captured sample outlines. The geometry engine ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PointRole {
    #[default]
    Perimeter,
    BunkerEdge,
}

/// A captured position sample in geodetic coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeographicPoint {
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lon: f64,
    /// Altitude above the ellipsoid (m), if reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,
    /// Horizontal accuracy radius (m), if reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_accuracy: Option<f64>,
    /// Vertical accuracy (m), if reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_accuracy: Option<f64>,
    /// Capture time, milliseconds since the unix epoch
    #[serde(default)]
    pub timestamp_ms: u64,
    #[serde(default)]
    pub role: PointRole,
}

impl GeographicPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            altitude: None,
            horizontal_accuracy: None,
            vertical_accuracy: None,
            timestamp_ms: 0,
            role: PointRole::Perimeter,
        }
    }

    pub fn with_timestamp(mut self, timestamp_ms: u64) -> Self {
        self.timestamp_ms = timestamp_ms;
        self
    }

    pub fn with_altitude(mut self, altitude: f64) -> Self {
        self.altitude = Some(altitude);
        self
    }

    pub fn with_accuracy(mut self, horizontal: f64, vertical: Option<f64>) -> Self {
        self.horizontal_accuracy = Some(horizontal);
        self.vertical_accuracy = vertical;
        self
    }

    pub fn with_role(mut self, role: PointRole) -> Self {
        self.role = role;
        self
    }
}
