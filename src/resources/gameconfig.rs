//! Game configuration resource.
//!
//! Manages runtime settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [simulation]
//! ticks = 120
//! map = 1
//!
//! [tremble]
//! amplitude = 8
//! speed = 0.8
//! ; omit for an endless tremble
//! cycles = 3
//!
//! [save]
//! path = ./save.json
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_TICKS: u64 = 120;
const DEFAULT_MAP_ID: u32 = 1;
const DEFAULT_AMPLITUDE: f64 = 8.0;
const DEFAULT_SPEED: f64 = 0.8;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";
const DEFAULT_SAVE_PATH: &str = "./save.json";

/// Game configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Number of ticks the headless runner simulates.
    pub ticks: u64,
    /// Map loaded at startup.
    pub map_id: u32,
    /// Default tremble amplitude in pixels.
    pub amplitude: f64,
    /// Default tremble phase speed in radians per tick.
    pub speed: f64,
    /// Default cycle limit; `None` trembles forever.
    pub cycles: Option<f64>,
    /// Where save files are written and read.
    pub save_path: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            ticks: DEFAULT_TICKS,
            map_id: DEFAULT_MAP_ID,
            amplitude: DEFAULT_AMPLITUDE,
            speed: DEFAULT_SPEED,
            cycles: None,
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [simulation] section
        if let Some(ticks) = config.getuint("simulation", "ticks").ok().flatten() {
            self.ticks = ticks;
        }
        if let Some(map) = config.getuint("simulation", "map").ok().flatten() {
            self.map_id = map as u32;
        }

        // [tremble] section
        if let Some(amplitude) = config.getfloat("tremble", "amplitude").ok().flatten() {
            self.amplitude = amplitude;
        }
        if let Some(speed) = config.getfloat("tremble", "speed").ok().flatten() {
            self.speed = speed;
        }
        if let Some(cycles) = config.getfloat("tremble", "cycles").ok().flatten() {
            self.cycles = Some(cycles);
        }

        // [save] section
        if let Some(path) = config.get("save", "path") {
            self.save_path = PathBuf::from(path);
        }

        info!(
            "Loaded config: ticks={}, map={}, amplitude={}, speed={}, cycles={:?}, save={:?}",
            self.ticks, self.map_id, self.amplitude, self.speed, self.cycles, self.save_path
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [simulation] section
        config.set("simulation", "ticks", Some(self.ticks.to_string()));
        config.set("simulation", "map", Some(self.map_id.to_string()));

        // [tremble] section
        config.set("tremble", "amplitude", Some(self.amplitude.to_string()));
        config.set("tremble", "speed", Some(self.speed.to_string()));
        if let Some(cycles) = self.cycles {
            config.set("tremble", "cycles", Some(cycles.to_string()));
        }

        // [save] section
        config.set(
            "save",
            "path",
            Some(self.save_path.to_string_lossy().into_owned()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "eventtremble_{}_{}.ini",
            name,
            std::process::id()
        ))
    }

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.ticks, DEFAULT_TICKS);
        assert_eq!(config.map_id, DEFAULT_MAP_ID);
        assert_eq!(config.amplitude, DEFAULT_AMPLITUDE);
        assert_eq!(config.speed, DEFAULT_SPEED);
        assert!(config.cycles.is_none());
    }

    #[test]
    fn test_missing_file_is_an_error_and_keeps_defaults() {
        let mut config = GameConfig::with_path(temp_config_path("missing"));
        assert!(config.load_from_file().is_err());
        assert_eq!(config.ticks, DEFAULT_TICKS);
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_config_path("roundtrip");
        let mut config = GameConfig::with_path(&path);
        config.ticks = 30;
        config.map_id = 4;
        config.amplitude = 3.0;
        config.speed = 0.25;
        config.cycles = Some(2.0);
        config.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        assert_eq!(loaded.ticks, 30);
        assert_eq!(loaded.map_id, 4);
        assert_eq!(loaded.amplitude, 3.0);
        assert_eq!(loaded.speed, 0.25);
        assert_eq!(loaded.cycles, Some(2.0));

        let _ = std::fs::remove_file(path);
    }
}
