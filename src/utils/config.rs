use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::core::{
    DEFAULT_CONCAVITY_THRESHOLD, DEFAULT_INCONSISTENCY_TOLERANCE, DEFAULT_MANUAL_RATING_FACTOR,
    DEFAULT_MAX_SIMPLE_RATIO, DEFAULT_SPINE_STEPS,
};

/// Thresholds used by the shape analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Area / hull area below which a green is split into two portions
    pub concavity_threshold: f64,
    /// Length / width above which a green is split into two portions
    pub max_simple_ratio: f64,
    /// Relative difference between the quarter widths that flags inconsistency
    pub inconsistency_tolerance: f64,
    /// Number of intervals sampled along the axis when building the spine
    pub spine_steps: usize,
    /// Curved / straight length ratio above which manual rating is required
    pub manual_rating_factor: f64,
    /// Reject samples whose horizontal accuracy is worse than this (meters)
    pub min_sample_accuracy_m: Option<f64>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            concavity_threshold: DEFAULT_CONCAVITY_THRESHOLD,
            max_simple_ratio: DEFAULT_MAX_SIMPLE_RATIO,
            inconsistency_tolerance: DEFAULT_INCONSISTENCY_TOLERANCE,
            spine_steps: DEFAULT_SPINE_STEPS,
            manual_rating_factor: DEFAULT_MANUAL_RATING_FACTOR,
            min_sample_accuracy_m: None,
        }
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid parameter {parameter} = {value}: {reason}")]
    InvalidParameter {
        parameter: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("failed to access config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to (de)serialize config: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AnalysisConfig {
    /// Copy of the defaults with a different concavity threshold
    pub fn with_concavity_threshold(threshold: f64) -> Self {
        Self {
            concavity_threshold: threshold,
            ..Default::default()
        }
    }

    /// Check every threshold against its meaningful range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.concavity_threshold > 0.0 && self.concavity_threshold <= 1.0) {
            return Err(ConfigError::InvalidParameter {
                parameter: "concavity_threshold",
                value: self.concavity_threshold.to_string(),
                reason: "must be in (0, 1]",
            });
        }
        if !(self.max_simple_ratio >= 1.0) {
            return Err(ConfigError::InvalidParameter {
                parameter: "max_simple_ratio",
                value: self.max_simple_ratio.to_string(),
                reason: "must be at least 1",
            });
        }
        if !(self.inconsistency_tolerance > 0.0 && self.inconsistency_tolerance < 1.0) {
            return Err(ConfigError::InvalidParameter {
                parameter: "inconsistency_tolerance",
                value: self.inconsistency_tolerance.to_string(),
                reason: "must be in (0, 1)",
            });
        }
        if self.spine_steps < 2 {
            return Err(ConfigError::InvalidParameter {
                parameter: "spine_steps",
                value: self.spine_steps.to_string(),
                reason: "must be at least 2",
            });
        }
        if !(self.manual_rating_factor >= 1.0) {
            return Err(ConfigError::InvalidParameter {
                parameter: "manual_rating_factor",
                value: self.manual_rating_factor.to_string(),
                reason: "must be at least 1",
            });
        }
        if let Some(accuracy) = self.min_sample_accuracy_m {
            if !(accuracy > 0.0) {
                return Err(ConfigError::InvalidParameter {
                    parameter: "min_sample_accuracy_m",
                    value: accuracy.to_string(),
                    reason: "must be positive",
                });
            }
        }
        Ok(())
    }

    /// Load and validate a JSON config file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.as_ref().to_string_lossy().to_string(),
            source,
        })?;

        let config: AnalysisConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the config as pretty JSON
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content).map_err(|source| ConfigError::Io {
            path: path.as_ref().to_string_lossy().to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AnalysisConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.concavity_threshold, 0.82);
        assert_eq!(config.spine_steps, 15);
    }

    #[test]
    fn test_out_of_range_threshold_rejected() {
        let config = AnalysisConfig::with_concavity_threshold(1.5);

        match config.validate() {
            Err(ConfigError::InvalidParameter { parameter, .. }) => {
                assert_eq!(parameter, "concavity_threshold")
            }
            other => panic!("expected invalid parameter, got {:?}", other),
        }
    }

    #[test]
    fn test_nan_rejected() {
        let config = AnalysisConfig {
            manual_rating_factor: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: AnalysisConfig = serde_json::from_str(r#"{ "spine_steps": 30 }"#).unwrap();

        assert_eq!(config.spine_steps, 30);
        assert_eq!(config.max_simple_ratio, 3.6);
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("analysis.json");
        let config = AnalysisConfig {
            min_sample_accuracy_m: Some(5.0),
            ..AnalysisConfig::with_concavity_threshold(0.75)
        };

        config.save_to_file(&path).unwrap();
        let loaded = AnalysisConfig::load_from_file(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = AnalysisConfig::load_from_file(dir.path().join("missing.json"));

        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
