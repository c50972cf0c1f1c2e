//! Persistence of finalized surveys

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::api::types::GreenRecord;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to access store '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to (de)serialize records: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Where finalized records live between sessions
pub trait PerimeterStore {
    /// Replace the stored records
    fn save(&mut self, records: &[GreenRecord]) -> Result<(), StoreError>;

    /// All stored records, empty if nothing was saved yet
    fn load(&self) -> Result<Vec<GreenRecord>, StoreError>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<GreenRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PerimeterStore for MemoryStore {
    fn save(&mut self, records: &[GreenRecord]) -> Result<(), StoreError> {
        self.records = records.to_vec();
        Ok(())
    }

    fn load(&self) -> Result<Vec<GreenRecord>, StoreError> {
        Ok(self.records.clone())
    }
}

/// Records kept as one pretty-printed JSON array on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.to_string_lossy().to_string(),
            source,
        }
    }
}

impl PerimeterStore for JsonFileStore {
    fn save(&mut self, records: &[GreenRecord]) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, content).map_err(|e| self.io_error(e))?;
        log::debug!("saved {} records to {}", records.len(), self.path.display());
        Ok(())
    }

    fn load(&self) -> Result<Vec<GreenRecord>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error(e)),
        };
        let records: Vec<GreenRecord> = serde_json::from_str(&content)?;
        log::debug!("loaded {} records from {}", records.len(), self.path.display());
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::summarize;
    use crate::core::GeographicPoint;
    use crate::utils::config::AnalysisConfig;

    fn record(name: &str) -> GreenRecord {
        let perimeter = vec![
            GeographicPoint::new(36.5680, -121.9500).with_timestamp(1),
            GeographicPoint::new(36.5680, -121.9497).with_timestamp(2),
            GeographicPoint::new(36.5682, -121.9497).with_timestamp(3),
            GeographicPoint::new(36.5682, -121.9500).with_timestamp(4),
        ];
        GreenRecord {
            name: name.to_string(),
            summary: summarize(&perimeter, &AnalysisConfig::default()),
            perimeter,
            bunker_edges: Vec::new(),
            finalized_ms: 5,
        }
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert!(store.load().unwrap().is_empty());

        store.save(&[record("7th")]).unwrap();

        assert_eq!(store.load().unwrap(), vec![record("7th")]);
    }

    #[test]
    fn test_json_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("greens.json"));
        let records = vec![record("1st"), record("18th")];

        store.save(&records).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[1].name, "18th");
        assert_eq!(loaded[0].perimeter, records[0].perimeter);
        assert_eq!(loaded[0].summary.egd(), records[0].summary.egd());
    }

    #[test]
    fn test_json_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("none.json"));

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_json_store_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "not json").unwrap();

        let result = JsonFileStore::new(&path).load();

        assert!(matches!(result, Err(StoreError::Serialization(_))));
    }
}
