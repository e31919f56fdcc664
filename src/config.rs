//! User configuration - optional YAML overrides for timing and the avatar image

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::animation::frames_for;
use crate::constants::{
    ANDROID_ROBOT_URL, CONFIG_DIR_NAME, DEFAULT_AVATAR_SIZE, DEFAULT_COLOR_FADE_MS,
    DEFAULT_FPS, DEFAULT_LOG_FILE, DEFAULT_SCROLL_MS,
};

const CONFIG_FILE: &str = "config.yaml";

/// Runtime settings. Every field is optional in the file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Animation frame rate
    pub fps: u16,
    /// Label background fade duration
    pub color_fade_ms: u64,
    /// Animated scroll duration
    pub scroll_ms: u64,
    /// Avatar image location
    pub image_url: String,
    /// Avatar target size in dp
    pub avatar_size: u16,
    /// Set to false to never hit the network
    pub fetch_image: bool,
    /// Log file; defaults to the working directory
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            fps: DEFAULT_FPS,
            color_fade_ms: DEFAULT_COLOR_FADE_MS,
            scroll_ms: DEFAULT_SCROLL_MS,
            image_url: String::from(ANDROID_ROBOT_URL),
            avatar_size: DEFAULT_AVATAR_SIZE,
            fetch_image: true,
            log_file: None,
        }
    }
}

impl Config {
    /// Load `~/.greetings-tui/config.yaml`, falling back to defaults
    pub fn load() -> Self {
        let path = Self::config_dir().join(CONFIG_FILE);
        match Self::load_from(&path) {
            Ok(Some(config)) => config,
            Ok(None) => Config::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring invalid config");
                Config::default()
            }
        }
    }

    /// Read a config file. `Ok(None)` when it does not exist.
    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Some(Config::default()));
        }
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(Some(config))
    }

    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR_NAME)
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE))
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_micros(1_000_000 / self.fps.max(1) as u64)
    }

    pub fn fade_frames(&self) -> u32 {
        frames_for(Duration::from_millis(self.color_fade_ms), self.fps)
    }

    pub fn scroll_frames(&self) -> u32 {
        frames_for(Duration::from_millis(self.scroll_ms), self.fps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempdir().unwrap();
        let loaded = Config::load_from(&dir.path().join("config.yaml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "fps: 30\nfetch_image: false\n").unwrap();

        let config = Config::load_from(&path).unwrap().unwrap();
        assert_eq!(config.fps, 30);
        assert!(!config.fetch_image);
        assert_eq!(config.image_url, ANDROID_ROBOT_URL);
        assert_eq!(config.scroll_ms, DEFAULT_SCROLL_MS);
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "fps: [not, a, number]\n").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_frame_math() {
        let config = Config {
            fps: 50,
            color_fade_ms: 200,
            ..Config::default()
        };
        assert_eq!(config.frame_interval(), Duration::from_millis(20));
        assert_eq!(config.fade_frames(), 10);
    }
}
