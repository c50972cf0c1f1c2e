use thiserror::Error;

use crate::core::{GeographicPoint, MIN_PERIMETER_POINTS};
use crate::utils::config::AnalysisConfig;

/// Reasons a captured sample or perimeter is rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("coordinate is not a finite number: lat={lat}, lon={lon}")]
    NonFinite { lat: f64, lon: f64 },

    #[error("invalid latitude {0}: must be between -90 and 90 degrees")]
    InvalidLatitude(f64),

    #[error("invalid longitude {0}: must be between -180 and 180 degrees")]
    InvalidLongitude(f64),

    #[error("sample accuracy {accuracy_m:.1} m is worse than the {limit_m:.1} m limit")]
    PoorAccuracy { accuracy_m: f64, limit_m: f64 },

    #[error("perimeter needs at least {required} points, got {available}")]
    TooFewPoints { available: usize, required: usize },
}

/// Checks samples before they enter a perimeter
#[derive(Debug, Clone, Default)]
pub struct PerimeterValidator {
    /// Worst acceptable horizontal accuracy (m)
    pub max_accuracy_m: Option<f64>,
}

impl PerimeterValidator {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            max_accuracy_m: config.min_sample_accuracy_m,
        }
    }

    pub fn validate_sample(&self, point: &GeographicPoint) -> Result<(), ValidationError> {
        if !point.lat.is_finite() || !point.lon.is_finite() {
            return Err(ValidationError::NonFinite {
                lat: point.lat,
                lon: point.lon,
            });
        }
        if !(-90.0..=90.0).contains(&point.lat) {
            return Err(ValidationError::InvalidLatitude(point.lat));
        }
        if !(-180.0..=180.0).contains(&point.lon) {
            return Err(ValidationError::InvalidLongitude(point.lon));
        }
        if let (Some(limit_m), Some(accuracy_m)) = (self.max_accuracy_m, point.horizontal_accuracy) {
            if accuracy_m > limit_m {
                return Err(ValidationError::PoorAccuracy { accuracy_m, limit_m });
            }
        }
        Ok(())
    }

    /// Every sample valid and enough of them to close a loop
    pub fn validate_perimeter(&self, points: &[GeographicPoint]) -> Result<(), ValidationError> {
        if points.len() < MIN_PERIMETER_POINTS {
            return Err(ValidationError::TooFewPoints {
                available: points.len(),
                required: MIN_PERIMETER_POINTS,
            });
        }
        points.iter().try_for_each(|p| self.validate_sample(p))
    }
}
