//! Walk-around survey of a single green
//!
//! Samples arrive one at a time while the user walks the edge of the green.
//! Every accepted perimeter sample triggers a fresh analysis so the display
//! can update live; nothing is mutated in place.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::api::source::PositionSource;
use crate::api::store::PerimeterStore;
use crate::api::types::{summarize, GreenRecord, GreenSummary};
use crate::core::{GeographicPoint, PointRole, MIN_PERIMETER_POINTS};
use crate::utils::config::AnalysisConfig;
use crate::validation::data::{PerimeterValidator, ValidationError};
use crate::validation::error::GreenResult;

pub struct GreenSurvey {
    name: String,
    config: AnalysisConfig,
    validator: PerimeterValidator,
    perimeter: Vec<GeographicPoint>,
    bunker_edges: Vec<GeographicPoint>,
    summary: GreenSummary,
    rejected: usize,
}

impl GreenSurvey {
    pub fn new(name: impl Into<String>, config: AnalysisConfig) -> GreenResult<Self> {
        config.validate()?;
        Ok(Self {
            name: name.into(),
            validator: PerimeterValidator::new(&config),
            summary: summarize(&[], &config),
            config,
            perimeter: Vec::new(),
            bunker_edges: Vec::new(),
            rejected: 0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn perimeter(&self) -> &[GeographicPoint] {
        &self.perimeter
    }

    pub fn bunker_edges(&self) -> &[GeographicPoint] {
        &self.bunker_edges
    }

    /// Latest measurements; the analysis is absent below three points
    pub fn summary(&self) -> &GreenSummary {
        &self.summary
    }

    /// Samples refused by validation so far
    pub fn rejected_count(&self) -> usize {
        self.rejected
    }

    /// Validate and append one sample, re-analyzing the perimeter
    pub fn record(&mut self, point: GeographicPoint) -> Result<&GreenSummary, ValidationError> {
        if let Err(e) = self.validator.validate_sample(&point) {
            self.rejected += 1;
            log::warn!("survey '{}': rejected sample: {}", self.name, e);
            return Err(e);
        }

        match point.role {
            PointRole::Perimeter => {
                self.perimeter.push(point);
                self.refresh();
            }
            PointRole::BunkerEdge => self.bunker_edges.push(point),
        }
        Ok(&self.summary)
    }

    /// Pull samples until the source runs dry or is cancelled.
    /// Invalid samples are skipped; returns the number accepted.
    pub fn drain<S: PositionSource>(&mut self, source: &mut S) -> usize {
        let mut accepted = 0;
        while let Some(point) = source.next_sample() {
            if self.record(point).is_ok() {
                accepted += 1;
            }
        }
        accepted
    }

    /// Drop the most recent perimeter sample
    pub fn undo_last(&mut self) -> Option<GeographicPoint> {
        let removed = self.perimeter.pop();
        if removed.is_some() {
            self.refresh();
        }
        removed
    }

    /// Close the loop and produce the record to store
    pub fn finalize(self) -> GreenResult<GreenRecord> {
        if self.perimeter.len() < MIN_PERIMETER_POINTS {
            return Err(ValidationError::TooFewPoints {
                available: self.perimeter.len(),
                required: MIN_PERIMETER_POINTS,
            }
            .into());
        }

        let finalized_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);

        log::debug!(
            "survey '{}' finalized with {} points, egd {:?}",
            self.name,
            self.perimeter.len(),
            self.summary.egd()
        );

        Ok(GreenRecord {
            name: self.name,
            perimeter: self.perimeter,
            bunker_edges: self.bunker_edges,
            summary: self.summary,
            finalized_ms,
        })
    }

    /// Finalize and append the record to `store`
    pub fn finalize_into<S: PerimeterStore>(self, store: &mut S) -> GreenResult<GreenRecord> {
        let record = self.finalize()?;
        let mut records = store.load()?;
        records.push(record.clone());
        store.save(&records)?;
        Ok(record)
    }

    fn refresh(&mut self) {
        self.summary = summarize(&self.perimeter, &self.config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::projection::LocalProjection;
    use crate::api::source::ReplaySource;
    use crate::api::store::MemoryStore;
    use crate::core::PlanarPoint;
    use crate::validation::error::GreenError;

    fn walk(xy: &[(f64, f64)]) -> Vec<GeographicPoint> {
        let projection = LocalProjection::new(&GeographicPoint::new(57.06, -2.0));
        xy.iter()
            .enumerate()
            .map(|(i, &(x, y))| {
                projection
                    .from_local(&PlanarPoint::new(x, y))
                    .with_timestamp(1_000 + i as u64 * 1_000)
            })
            .collect()
    }

    #[test]
    fn test_analysis_appears_at_third_point() {
        let mut survey = GreenSurvey::new("3rd", AnalysisConfig::default()).unwrap();
        let points = walk(&[(0.0, 0.0), (30.0, 0.0), (30.0, 20.0), (0.0, 20.0)]);

        assert!(survey.record(points[0].clone()).unwrap().analysis.is_none());
        assert!(survey.record(points[1].clone()).unwrap().analysis.is_none());
        assert!(survey.record(points[2].clone()).unwrap().analysis.is_some());
        let summary = survey.record(points[3].clone()).unwrap();

        assert_eq!(summary.point_count, 4);
        assert!((summary.area_m2 - 600.0).abs() < 0.1);
    }

    #[test]
    fn test_bunker_edges_kept_apart() {
        let mut survey = GreenSurvey::new("5th", AnalysisConfig::default()).unwrap();
        let points = walk(&[(0.0, 0.0), (5.0, -3.0)]);

        survey.record(points[0].clone()).unwrap();
        survey
            .record(points[1].clone().with_role(PointRole::BunkerEdge))
            .unwrap();

        assert_eq!(survey.perimeter().len(), 1);
        assert_eq!(survey.bunker_edges().len(), 1);
    }

    #[test]
    fn test_rejected_samples_are_counted() {
        let mut survey = GreenSurvey::new("9th", AnalysisConfig::default()).unwrap();

        assert!(survey.record(GeographicPoint::new(120.0, 0.0)).is_err());
        assert_eq!(survey.rejected_count(), 1);
        assert!(survey.perimeter().is_empty());
    }

    #[test]
    fn test_drain_and_undo() {
        let mut survey = GreenSurvey::new("12th", AnalysisConfig::default()).unwrap();
        let mut samples = walk(&[(0.0, 0.0), (30.0, 0.0), (30.0, 20.0), (0.0, 20.0)]);
        samples.insert(2, GeographicPoint::new(f64::NAN, 0.0));
        let mut source = ReplaySource::new(samples);

        let accepted = survey.drain(&mut source);

        assert_eq!(accepted, 4);
        assert_eq!(survey.rejected_count(), 1);
        assert!(survey.summary().analysis.is_some());

        survey.undo_last();
        survey.undo_last();
        assert_eq!(survey.perimeter().len(), 2);
        assert!(survey.summary().analysis.is_none());
    }

    #[test]
    fn test_finalize_requires_closed_loop() {
        let mut survey = GreenSurvey::new("14th", AnalysisConfig::default()).unwrap();
        survey.record(walk(&[(0.0, 0.0)])[0].clone()).unwrap();

        match survey.finalize() {
            Err(GreenError::Validation(ValidationError::TooFewPoints { available, .. })) => {
                assert_eq!(available, 1)
            }
            other => panic!("expected too few points, got {:?}", other.map(|r| r.name)),
        }
    }

    #[test]
    fn test_finalize_into_store() {
        let mut store = MemoryStore::new();
        let mut survey = GreenSurvey::new("16th", AnalysisConfig::default()).unwrap();
        survey.drain(&mut ReplaySource::new(walk(&[(0.0, 0.0), (25.0, 0.0), (25.0, 25.0), (0.0, 25.0)])));

        let record = survey.finalize_into(&mut store).unwrap();

        assert_eq!(record.name, "16th");
        assert!(record.summary.egd().is_some());
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = AnalysisConfig {
            spine_steps: 0,
            ..Default::default()
        };
        assert!(matches!(GreenSurvey::new("x", config), Err(GreenError::Config(_))));
    }
}
