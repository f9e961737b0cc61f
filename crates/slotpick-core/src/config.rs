//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Scheduling preferences (timezone, slot count, expected increment)
//! - Provider endpoint settings
//!
//! Configuration is stored at `~/.config/slotpick/config.toml`.

use std::path::PathBuf;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::selection::{DEFAULT_INCREMENT_MINUTES, DEFAULT_MAX_SLOTS};

/// Scheduling preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulingConfig {
    /// IANA zone suggestions are localized to (e.g. "America/New_York").
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_max_slots")]
    pub max_slots: usize,
    /// Expected spacing between provider slots (minutes).
    #[serde(default = "default_increment_minutes")]
    pub increment_minutes: i64,
}

/// Provider endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub event_type_id: u64,
    /// Booking duration used to derive slot ends (minutes).
    #[serde(default = "default_duration_minutes")]
    pub duration_minutes: i64,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/slotpick/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scheduling: SchedulingConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
}

// Default functions
fn default_timezone() -> String {
    "UTC".into()
}
fn default_max_slots() -> usize {
    DEFAULT_MAX_SLOTS
}
fn default_increment_minutes() -> i64 {
    DEFAULT_INCREMENT_MINUTES
}
fn default_base_url() -> String {
    "https://api.cal.com/v2".into()
}
fn default_duration_minutes() -> i64 {
    30
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            max_slots: default_max_slots(),
            increment_minutes: default_increment_minutes(),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            event_type_id: 0,
            duration_minutes: default_duration_minutes(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scheduling: SchedulingConfig::default(),
            provider: ProviderConfig::default(),
        }
    }
}

impl Config {
    /// Path to the config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load configuration from the config file.
    ///
    /// # Errors
    /// Returns an error if the file is missing or does not parse.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        let raw = std::fs::read_to_string(&path).map_err(|e| ConfigError::LoadFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        toml::from_str(&raw).map_err(|e| ConfigError::LoadFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Load configuration, falling back to defaults if missing or invalid.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Persist configuration, creating the config directory if needed.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_path()?;
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| ConfigError::SaveFailed {
                path: path.clone(),
                message: e.to_string(),
            })?;
        }
        let raw = toml::to_string_pretty(self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        std::fs::write(&path, raw).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Parse the configured timezone into a [`Tz`].
    ///
    /// # Errors
    /// Returns an error if the zone name is not a known IANA identifier.
    pub fn timezone(&self) -> Result<Tz, ConfigError> {
        self.scheduling
            .timezone
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                key: "scheduling.timezone".to_string(),
                message: format!("unknown IANA zone: {}", self.scheduling.timezone),
            })
    }

    /// Look up a config value by dotted path (e.g. "scheduling.max_slots").
    pub fn get(&self, key: &str) -> Option<serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let root = serde_json::to_value(self).ok()?;
        let mut current = &root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current.clone())
    }

    /// Set a config value by dotted path.
    ///
    /// The new value is parsed according to the type of the existing value,
    /// so "scheduling.max_slots" takes a number and
    /// "scheduling.timezone" a string.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut root =
            serde_json::to_value(&*self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        set_json_value_by_path(&mut root, key, value)?;
        *self = serde_json::from_value(root).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }
}

fn set_json_value_by_path(
    root: &mut serde_json::Value,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    let invalid = |message: String| ConfigError::InvalidValue {
        key: key.to_string(),
        message,
    };

    let mut parts = key.split('.').peekable();
    if parts.peek().is_none() {
        return Err(invalid("config key is empty".to_string()));
    }

    let mut current = root;
    while let Some(part) = parts.next() {
        let is_leaf = parts.peek().is_none();
        if is_leaf {
            let obj = current
                .as_object_mut()
                .ok_or_else(|| invalid(format!("unknown config key: {key}")))?;
            let existing = obj
                .get(part)
                .ok_or_else(|| invalid(format!("unknown config key: {key}")))?;

            let new_value = match existing {
                serde_json::Value::Bool(_) => serde_json::Value::Bool(
                    value
                        .parse::<bool>()
                        .map_err(|_| invalid(format!("cannot parse '{value}' as bool")))?,
                ),
                serde_json::Value::Number(_) => {
                    if let Ok(n) = value.parse::<u64>() {
                        serde_json::Value::Number(n.into())
                    } else if let Ok(n) = value.parse::<i64>() {
                        serde_json::Value::Number(n.into())
                    } else if let Ok(n) = value.parse::<f64>() {
                        serde_json::Number::from_f64(n)
                            .map(serde_json::Value::Number)
                            .ok_or_else(|| invalid(format!("cannot parse '{value}' as number")))?
                    } else {
                        return Err(invalid(format!("cannot parse '{value}' as number")));
                    }
                }
                serde_json::Value::String(_) => serde_json::Value::String(value.to_string()),
                _ => return Err(invalid(format!("unsupported config key: {key}"))),
            };
            obj.insert(part.to_string(), new_value);
        } else {
            current = current
                .get_mut(part)
                .ok_or_else(|| invalid(format!("unknown config key: {key}")))?;
        }
    }

    Ok(())
}

/// Returns `~/.config/slotpick[-dev]/` based on SLOTPICK_ENV.
///
/// Set SLOTPICK_ENV=dev to use a development config directory.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("SLOTPICK_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("slotpick-dev")
    } else {
        base_dir.join("slotpick")
    };

    Ok(dir)
}
