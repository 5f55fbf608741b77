use crate::errors::{AppError, AppResult};
use crate::timeline::rows::DEFAULT_HEADER_LABELS;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// IANA zone used when `--tz` is not given
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_header_labels")]
    pub header_labels: Vec<String>,
    #[serde(default = "default_prod_id")]
    pub prod_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar_name: Option<String>,
    #[serde(default = "default_event_description")]
    pub event_description: String,
}

fn default_timezone() -> String {
    "UTC".to_string()
}
fn default_header_labels() -> Vec<String> {
    DEFAULT_HEADER_LABELS.iter().map(|s| s.to_string()).collect()
}
fn default_prod_id() -> String {
    "-//rtimeline//Timeline//EN".to_string()
}
fn default_event_description() -> String {
    "Generated from timeline".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            header_labels: default_header_labels(),
            prod_id: default_prod_id(),
            calendar_name: None,
            event_description: default_event_description(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimeline")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rtimeline")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimeline.conf")
    }

    /// Load configuration from `path`, or return defaults if the file is missing
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        log::debug!("config loaded from {}", path.display());
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write a default configuration file at `path`.
    /// An existing file is left alone unless `force` is set.
    pub fn init_at(path: &Path, force: bool) -> AppResult<Self> {
        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let config = Config::default();
        let mut file = fs::File::create(path)?;
        file.write_all(config.to_yaml()?.as_bytes())?;
        Ok(config)
    }
}
