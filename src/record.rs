//! High-score persistence
//!
//! The record is a single integer stored as a JSON document. A missing or
//! unreadable file is never fatal: the record simply starts at zero.
//!
//! # Example
//!
//! ```ignore
//! let store = RecordStore::new(RecordStore::default_path());
//! let record = store.load();
//! if score > record {
//!     store.save(score)?;
//! }
//! ```

use crate::error::GameError;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        RecordStore {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// `<data dir>/star_doom/record.json`, or `./record.json` when the
    /// platform has no data directory
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .map(|p| p.join("star_doom").join("record.json"))
            .unwrap_or_else(|| PathBuf::from("./record.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored record, falling back to 0
    pub fn load(&self) -> u32 {
        match self.try_load() {
            Ok(record) => record,
            Err(e) if e.is_not_found() => {
                log::info!("No record file at {}, starting from 0", self.path.display());
                0
            }
            Err(e) => {
                log::warn!("Ignoring record file {}: {}", self.path.display(), e);
                0
            }
        }
    }

    fn try_load(&self) -> Result<u32, GameError> {
        let json = fs::read_to_string(&self.path)?;
        let record: u32 = serde_json::from_str(json.trim())?;
        Ok(record)
    }

    /// Overwrites the stored record
    pub fn save(&self, record: u32) -> Result<(), GameError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string(&record)?;
        fs::write(&self.path, json)?;

        log::debug!("Record {} written to {}", record, self.path.display());
        Ok(())
    }
}

/// Score and best score for one play session
///
/// The record only moves up, and the store is only touched when the score
/// actually beats it.
#[derive(Debug, Clone)]
pub struct ScoreKeeper {
    pub score: u32,
    pub record: u32,
}

impl ScoreKeeper {
    pub fn new(record: u32) -> Self {
        ScoreKeeper { score: 0, record }
    }

    /// Adds points and returns true when a new record was set
    pub fn add(&mut self, points: u32) -> bool {
        self.score = self.score.saturating_add(points);
        if self.score > self.record {
            self.record = self.score;
            true
        } else {
            false
        }
    }

    /// Score rounded to the nearest ten, as shown on the scoreboard
    pub fn display_score(&self) -> u32 {
        round_to_ten(self.score)
    }

    pub fn display_record(&self) -> u32 {
        round_to_ten(self.record)
    }
}

/// Nearest multiple of ten, halves rounding up
pub fn round_to_ten(n: u32) -> u32 {
    n.saturating_add(5) / 10 * 10
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("star_doom_test_{}_{}", std::process::id(), name))
            .join("record.json")
    }

    #[test]
    fn test_missing_file_is_zero() {
        let store = RecordStore::new(scratch_path("missing"));
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch_path("roundtrip");
        let store = RecordStore::new(&path);

        store.save(1230).unwrap();
        assert_eq!(store.load(), 1230);
        assert_eq!(fs::read_to_string(&path).unwrap(), "1230");

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_corrupt_file_is_zero() {
        let path = scratch_path("corrupt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not a number").unwrap();

        let store = RecordStore::new(&path);
        assert_eq!(store.load(), 0);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_score_keeper_record_only_rises() {
        let mut keeper = ScoreKeeper::new(100);

        assert!(!keeper.add(50));
        assert_eq!(keeper.record, 100);

        assert!(!keeper.add(50)); // tie is not a new record
        assert!(keeper.add(20));
        assert_eq!(keeper.score, 120);
        assert_eq!(keeper.record, 120);
    }

    #[test]
    fn test_display_score_rounds_to_tens() {
        let mut keeper = ScoreKeeper::new(0);
        keeper.add(34);
        assert_eq!(keeper.display_score(), 30);
        keeper.add(1);
        assert_eq!(keeper.display_score(), 40);
    }
}
