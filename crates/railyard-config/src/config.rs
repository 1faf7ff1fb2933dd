//! Configuration structs with defaults, validation and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name used inside the configuration directory.
const CONFIG_FILE: &str = "config.ron";

/// Largest search inset a cell lookup may use; anything above would invert
/// the search box.
pub const MAX_SEARCH_SENSITIVITY: f32 = 0.49;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Cart lookup, spawn and drop settings.
    pub carts: CartConfig,
    /// Logging settings.
    pub debug: DebugConfig,
}

/// Cart lookup, spawn and drop settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CartConfig {
    /// Search inset used to recover a cart right after a generic placement.
    pub spawn_search_sensitivity: f32,
    /// Height above a cart at which refused items are dropped.
    pub drop_offset_y: f32,
    /// Ticks before a dropped item may be picked up again.
    pub drop_pickup_delay_ticks: u32,
    /// Run as a mirrored (non-authoritative) side. Owner writes are skipped.
    pub remote: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Default tracing level when `RUST_LOG` is unset.
    pub log_level: String,
    /// Write a JSON log file next to the config in debug builds.
    pub log_to_file: bool,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            spawn_search_sensitivity: 0.3,
            drop_offset_y: 1.0,
            drop_pickup_delay_ticks: 10,
            remote: false,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_to_file: false,
        }
    }
}

/// Per-user directory holding `config.ron`.
pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("railyard"))
        .ok_or(ConfigError::NoConfigDir)
}

impl Config {
    /// Reads `config.ron` from `config_dir`. If there is none yet, writes the
    /// defaults there and returns them.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let path = config_dir.join(CONFIG_FILE);
        if !path.exists() {
            let defaults = Config::default();
            defaults.save(config_dir)?;
            log::info!("Wrote default railyard config to {}", path.display());
            return Ok(defaults);
        }

        let config = Self::read(&path)?;
        log::info!("Railyard config loaded from {}", path.display());
        Ok(config)
    }

    /// Writes this config to `config_dir/config.ron`, creating the directory.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;
        let text = ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::new()
                .depth_limit(2)
                .enumerate_arrays(false),
        )
        .map_err(ConfigError::SerializeError)?;
        std::fs::write(config_dir.join(CONFIG_FILE), text).map_err(ConfigError::WriteError)
    }

    /// Re-reads the file. `Some` only when its contents differ from `self`.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let on_disk = Self::read(&config_dir.join(CONFIG_FILE))?;
        if on_disk == *self {
            return Ok(None);
        }
        log::info!("Railyard config changed on disk");
        Ok(Some(on_disk))
    }

    /// Checks value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sensitivity = self.carts.spawn_search_sensitivity;
        if !sensitivity.is_finite() || sensitivity > MAX_SEARCH_SENSITIVITY {
            return Err(ConfigError::InvalidValue {
                field: "carts.spawn_search_sensitivity",
                reason: format!(
                    "must be finite and at most {MAX_SEARCH_SENSITIVITY}, got {sensitivity}"
                ),
            });
        }
        if !self.carts.drop_offset_y.is_finite() {
            return Err(ConfigError::InvalidValue {
                field: "carts.drop_offset_y",
                reason: "must be finite".to_string(),
            });
        }
        Ok(())
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(2))
                .unwrap();
        assert!(ron_str.contains("spawn_search_sensitivity: 0.3"));
        assert!(ron_str.contains("log_level: \"info\""));
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.carts.drop_offset_y = 0.5;
        config.carts.remote = true;
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_section_uses_default() {
        let config: Config = ron::from_str("(debug: (log_level: \"trace\"))").unwrap();
        assert_eq!(config.carts, CartConfig::default());
        assert_eq!(config.debug.log_level, "trace");
        assert!(!config.debug.log_to_file);
    }

    #[test]
    fn test_extra_field_ignored() {
        let result: Result<Config, _> = ron::from_str("(future_setting: true)");
        assert!(result.is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.carts.spawn_search_sensitivity = 0.2;
        config.carts.drop_pickup_delay_ticks = 0;

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_or_create_writes_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join("config.ron").exists());
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let mut modified = config.clone();
        modified.carts.drop_pickup_delay_ticks = 40;
        modified.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert_eq!(result.unwrap().carts.drop_pickup_delay_ticks, 40);
    }

    #[test]
    fn test_reload_no_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        assert!(config.reload(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.ron"), "{{not valid}}").unwrap();
        let result = Config::load_or_create(dir.path());
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_validate_rejects_oversized_sensitivity() {
        let mut config = Config::default();
        config.carts.spawn_search_sensitivity = 0.6;
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "carts.spawn_search_sensitivity",
                ..
            }
        ));
    }

    #[test]
    fn test_validate_accepts_negative_sensitivity() {
        let mut config = Config::default();
        config.carts.spawn_search_sensitivity = -0.25;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_nan_drop_offset() {
        let mut config = Config::default();
        config.carts.drop_offset_y = f32::NAN;
        assert!(config.validate().is_err());
    }
}
