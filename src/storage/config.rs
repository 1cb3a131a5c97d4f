use super::Result;
use crate::api::client::DEFAULT_BASE_URL;
use crate::api::models::DEFAULT_PLACEHOLDER_IMAGE;
use crate::error::{ConfigError, StorageError};
use crate::utils::validation::validate_url;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const APP_DIR: &str = "pokelookup";
const CONFIG_FILE: &str = "config.toml";

pub const CONFIG_KEYS: [&str; 4] = [
    "base_url",
    "timeout_seconds",
    "placeholder_image",
    "use_colors",
];

/// On-disk settings. Every field is optional; accessors supply defaults.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub placeholder_image: Option<String>,
    pub use_colors: Option<bool>,
}

impl Config {
    /// Load from `path`, or from the per-user config dir. Missing file means defaults.
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if !config_path.exists() {
            log::debug!("No config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        toml::from_str(&content).map_err(|e| StorageError::ConfigParseError {
            message: format!("{}: {}", config_path.display(), e),
        })
    }

    pub fn save(&self, path: Option<PathBuf>) -> Result<()> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::FileIo {
                path: parent.to_string_lossy().to_string(),
                source,
            })?;
        }

        let toml_content = toml::to_string(self).map_err(|e| StorageError::ConfigSaveFailed {
            message: e.to_string(),
        })?;

        fs::write(&config_path, toml_content).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        log::debug!("Saved config to {}", config_path.display());
        Ok(())
    }

    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(StorageError::ConfigDirNotFound)?;
        Ok(config_dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// `config.toml` inside an explicit directory (`--config-dir`).
    pub fn file_in(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILE)
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// `None` means no timeout.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    pub fn placeholder_image(&self) -> &str {
        self.placeholder_image
            .as_deref()
            .unwrap_or(DEFAULT_PLACEHOLDER_IMAGE)
    }

    pub fn use_colors(&self) -> bool {
        self.use_colors.unwrap_or(true)
    }

    /// Validate and store one key.
    pub fn set(&mut self, key: &str, value: &str) -> crate::Result<()> {
        let invalid = |reason: &str| ConfigError::InvalidValue {
            field: key.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        };

        match key {
            "base_url" => {
                validate_url(value)?;
                self.base_url = Some(value.trim_end_matches('/').to_string());
            }
            "timeout_seconds" => {
                let secs: u64 = value
                    .parse()
                    .map_err(|_| invalid("expected a whole number of seconds"))?;
                if secs == 0 {
                    return Err(invalid("must be greater than zero").into());
                }
                self.timeout_seconds = Some(secs);
            }
            "placeholder_image" => {
                if value.trim().is_empty() {
                    return Err(invalid("must not be empty").into());
                }
                self.placeholder_image = Some(value.to_string());
            }
            "use_colors" => {
                let enabled = value
                    .parse::<bool>()
                    .map_err(|_| invalid("expected true or false"))?;
                self.use_colors = Some(enabled);
            }
            _ => {
                return Err(ConfigError::UnknownKey {
                    key: key.to_string(),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Effective settings, one `key = value` line each.
    pub fn effective_lines(&self) -> Vec<String> {
        let timeout = match self.timeout_seconds {
            Some(secs) => format!("{}s", secs),
            None => "none".to_string(),
        };
        vec![
            format!("base_url = {}", self.base_url()),
            format!("timeout_seconds = {}", timeout),
            format!("placeholder_image = {}", self.placeholder_image()),
            format!("use_colors = {}", self.use_colors()),
        ]
    }
}
