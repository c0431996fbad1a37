//! TOML-based application configuration.
//!
//! Stores the session duration table and the auto-start preference at
//! `~/.config/focusring/config.toml`. Every field has a serde default,
//! so a partial or missing file always yields a usable config.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::session::SessionPlan;
use crate::storage::data_dir;

/// Session durations, in seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionsConfig {
    #[serde(default = "default_pomodoro")]
    pub pomodoro: u32,
    #[serde(default = "default_short_break")]
    pub short_break: u32,
    #[serde(default = "default_long_break")]
    pub long_break: u32,
    #[serde(default = "default_pomodoros_before_long_break")]
    pub pomodoros_before_long_break: u32,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/focusring/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sessions: SessionsConfig,
    /// Start the next session immediately when one completes.
    #[serde(default)]
    pub auto_start_next: bool,
}

// Default functions
fn default_pomodoro() -> u32 {
    25 * 60
}
fn default_short_break() -> u32 {
    5 * 60
}
fn default_long_break() -> u32 {
    15 * 60
}
fn default_pomodoros_before_long_break() -> u32 {
    4
}

impl Default for SessionsConfig {
    fn default() -> Self {
        Self {
            pomodoro: default_pomodoro(),
            short_break: default_short_break(),
            long_break: default_long_break(),
            pomodoros_before_long_break: default_pomodoros_before_long_break(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::DirUnavailable(e.to_string()))?;
        Ok(dir.join("config.toml"))
    }

    /// Load from disk, writing the defaults out first if no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            let cfg = Self::default();
            cfg.save_to(&path)?;
            Ok(cfg)
        }
    }

    /// Load from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    /// Persist to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// The duration table the engine should run with.
    pub fn plan(&self) -> SessionPlan {
        SessionPlan::new(
            self.sessions.pomodoro,
            self.sessions.short_break,
            self.sessions.long_break,
            self.sessions.pomodoros_before_long_break,
        )
    }

    /// Get a config value as a string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "sessions.pomodoro" => Some(self.sessions.pomodoro.to_string()),
            "sessions.short_break" => Some(self.sessions.short_break.to_string()),
            "sessions.long_break" => Some(self.sessions.long_break.to_string()),
            "sessions.pomodoros_before_long_break" => {
                Some(self.sessions.pomodoros_before_long_break.to_string())
            }
            "auto_start_next" => Some(self.auto_start_next.to_string()),
            _ => None,
        }
    }

    /// All known keys, in the order `list` prints them.
    pub fn keys() -> &'static [&'static str] {
        &[
            "sessions.pomodoro",
            "sessions.short_break",
            "sessions.long_break",
            "sessions.pomodoros_before_long_break",
            "auto_start_next",
        ]
    }

    /// Set a config value by dot-separated key. Mutates in memory only;
    /// the caller persists with [`Config::save`].
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value cannot be
    /// parsed for that key. Durations must be at least 1 second.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "sessions.pomodoro" => self.sessions.pomodoro = parse_positive(key, value)?,
            "sessions.short_break" => self.sessions.short_break = parse_positive(key, value)?,
            "sessions.long_break" => self.sessions.long_break = parse_positive(key, value)?,
            "sessions.pomodoros_before_long_break" => {
                self.sessions.pomodoros_before_long_break = parse_positive(key, value)?
            }
            "auto_start_next" => {
                self.auto_start_next = value.parse().map_err(|_| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: format!("cannot parse '{value}' as bool"),
                })?
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }
}

fn parse_positive(key: &str, value: &str) -> Result<u32, ConfigError> {
    match value.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        Ok(_) => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: "must be at least 1".to_string(),
        }),
        Err(_) => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("cannot parse '{value}' as a whole number of seconds"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, cfg);
        assert_eq!(parsed.sessions.pomodoro, 1500);
        assert_eq!(parsed.sessions.pomodoros_before_long_break, 4);
        assert!(!parsed.auto_start_next);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let cfg: Config = toml::from_str("[sessions]\npomodoro = 600\n").unwrap();
        assert_eq!(cfg.sessions.pomodoro, 600);
        assert_eq!(cfg.sessions.short_break, 300);
        assert_eq!(cfg.sessions.long_break, 900);
    }

    #[test]
    fn empty_file_is_the_default_config() {
        let cfg: Config = toml::from_str("").unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn plan_reflects_configured_durations() {
        let mut cfg = Config::default();
        cfg.sessions.pomodoro = 60;
        cfg.sessions.pomodoros_before_long_break = 2;
        let plan = cfg.plan();
        assert_eq!(plan.duration_secs(crate::session::SessionType::Pomodoro), 60);
        assert_eq!(plan.pomodoros_per_cycle(), 2);
    }

    #[test]
    fn get_returns_every_listed_key() {
        let cfg = Config::default();
        for key in Config::keys() {
            assert!(cfg.get(key).is_some(), "missing key {key}");
        }
        assert_eq!(cfg.get("sessions.pomodoro").as_deref(), Some("1500"));
        assert_eq!(cfg.get("auto_start_next").as_deref(), Some("false"));
        assert_eq!(cfg.get("sessions.nope"), None);
    }

    #[test]
    fn set_updates_known_keys() {
        let mut cfg = Config::default();
        cfg.set("sessions.short_break", "120").unwrap();
        assert_eq!(cfg.sessions.short_break, 120);
        cfg.set("auto_start_next", "true").unwrap();
        assert!(cfg.auto_start_next);
    }

    #[test]
    fn set_rejects_unknown_keys_and_bad_values() {
        let mut cfg = Config::default();
        assert!(matches!(
            cfg.set("sessions.nope", "1"),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(matches!(
            cfg.set("sessions.pomodoro", "0"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            cfg.set("sessions.pomodoro", "soon"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            cfg.set("auto_start_next", "yes"),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn saves_and_reloads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut cfg = Config::default();
        cfg.set("sessions.pomodoro", "900").unwrap();
        cfg.save_to(&path).unwrap();
        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded, cfg);
    }

    #[test]
    fn unparsable_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "sessions = \"not a table\"").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::LoadFailed { .. })
        ));
    }
}
