//! Runtime configuration
//!
//! Loaded once at startup from `star_doom.json` (or the file named by
//! `STAR_DOOM_CONFIG`). Every field has a default, so a partial file or no
//! file at all is fine.

use crate::error::GameError;
use crate::record::RecordStore;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV_VAR: &str = "STAR_DOOM_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "star_doom.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    /// Logical screen width in pixels
    pub screen_width: u32,
    /// Logical screen height in pixels
    pub screen_height: u32,
    pub fps: u32,
    /// How long GAME OVER / victory screens stay up before the main menu
    pub end_screen_secs: f32,
    /// Directory searched for optional `.bmp` textures
    pub asset_dir: PathBuf,
    /// High-score file; `None` uses the platform data directory
    pub record_path: Option<PathBuf>,
    /// Fixed RNG seed for reproducible runs
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            screen_width: 1280,
            screen_height: 720,
            fps: 60,
            end_screen_secs: 6.0,
            asset_dir: PathBuf::from("resources/images"),
            record_path: None,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let json = fs::read_to_string(path.as_ref())?;
        let config: GameConfig = serde_json::from_str(&json)?;
        Ok(config.sanitized())
    }

    /// Resolves the config path from the environment and loads it, falling
    /// back to defaults on any problem
    pub fn load_or_default() -> Self {
        let path = std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        match Self::load_from_file(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) if e.is_not_found() => {
                log::info!("No config at {}, using defaults", path.display());
                GameConfig::default()
            }
            Err(e) => {
                log::warn!("Bad config at {}: {}; using defaults", path.display(), e);
                GameConfig::default()
            }
        }
    }

    pub fn record_store(&self) -> RecordStore {
        match &self.record_path {
            Some(path) => RecordStore::new(path),
            None => RecordStore::new(RecordStore::default_path()),
        }
    }

    /// Clamps values that would make the game unplayable
    fn sanitized(mut self) -> Self {
        self.screen_width = self.screen_width.max(640);
        self.screen_height = self.screen_height.max(480);
        self.fps = self.fps.clamp(15, 240);
        if !self.end_screen_secs.is_finite() || self.end_screen_secs < 0.0 {
            self.end_screen_secs = GameConfig::default().end_screen_secs;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{ "fps": 30, "seed": 7 }"#).unwrap();
        assert_eq!(config.fps, 30);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.screen_width, 1280);
        assert_eq!(config.end_screen_secs, 6.0);
    }

    #[test]
    fn test_sanitize_clamps_tiny_screens() {
        let config = GameConfig {
            screen_width: 10,
            screen_height: 10,
            fps: 1000,
            end_screen_secs: -3.0,
            ..Default::default()
        }
        .sanitized();

        assert_eq!(config.screen_width, 640);
        assert_eq!(config.screen_height, 480);
        assert_eq!(config.fps, 240);
        assert_eq!(config.end_screen_secs, 6.0);
    }

    #[test]
    fn test_missing_file_reports_not_found() {
        let err = GameConfig::load_from_file("/definitely/not/here/star_doom.json").unwrap_err();
        assert!(err.is_not_found());
    }
}
