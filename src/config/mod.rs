//! Application configuration
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (`<config dir>/gamehub/config.toml`)
//! 3. Built-in defaults (lowest priority)

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::{validate_page_size, DEFAULT_PAGE_SIZE};
use crate::error::{AppError, AppResult};

/// Public endpoint of the metadata service
pub const DEFAULT_API_URL: &str = "https://api.rawg.io/api";

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_LOG_LEVEL: &str = "info";
const APP_DIR_NAME: &str = "gamehub";

/// Resolved application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the metadata service, without trailing slash
    pub api_base_url: String,

    /// Static credential sent as the `key` query parameter
    pub api_key: Option<String>,

    /// Games per list page
    pub page_size: u32,

    pub request_timeout_secs: u64,

    /// Where the favorites database lives
    pub data_dir: PathBuf,

    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,
}

/// On-disk shape of `config.toml`; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub api_base_url: Option<String>,
    pub api_key: Option<String>,
    pub page_size: Option<u32>,
    pub request_timeout_secs: Option<u64>,
    pub data_dir: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            data_dir: default_data_dir(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Config file path: `<config dir>/gamehub/config.toml`
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join(APP_DIR_NAME).join("config.toml"))
    }

    /// Load configuration: env > file > defaults
    pub fn from_env() -> AppResult<Self> {
        let file = match Self::config_path() {
            Some(path) => Self::load_file(&path)?,
            None => FileConfig::default(),
        };
        Self::from_sources(file, |name| std::env::var(name).ok())
    }

    /// Read a config file. A missing file yields defaults; an
    /// unreadable or malformed one is an error.
    pub fn load_file(path: &Path) -> AppResult<FileConfig> {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).map_err(|e| {
                AppError::Config(format!("Invalid config file {}: {}", path.display(), e))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => Err(AppError::Config(format!(
                "Cannot read config file {}: {}",
                path.display(),
                e
            ))),
        }
    }

    /// Merge a parsed file with an environment lookup
    pub fn from_sources<F>(file: FileConfig, env: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_base_url = env("GAMEHUB_API_URL")
            .or(file.api_base_url)
            .unwrap_or(defaults.api_base_url)
            .trim_end_matches('/')
            .to_string();

        let api_key = env("GAMEHUB_API_KEY")
            .or(file.api_key)
            .filter(|key| !key.trim().is_empty());

        let page_size = match env("GAMEHUB_PAGE_SIZE") {
            Some(raw) => raw.trim().parse::<u32>().map_err(|_| {
                AppError::Config(format!("GAMEHUB_PAGE_SIZE is not a number: '{}'", raw))
            })?,
            None => file.page_size.unwrap_or(defaults.page_size),
        };
        let page_size =
            validate_page_size(page_size).map_err(|e| AppError::Config(e.to_string()))?;

        let data_dir = env("GAMEHUB_DATA_DIR")
            .map(PathBuf::from)
            .or(file.data_dir)
            .unwrap_or(defaults.data_dir);

        Ok(Self {
            api_base_url,
            api_key,
            page_size,
            request_timeout_secs: file
                .request_timeout_secs
                .unwrap_or(defaults.request_timeout_secs),
            data_dir,
            log_level: file.log_level.unwrap_or(defaults.log_level),
        })
    }

    /// The credential, or a configuration error when none was given
    pub fn require_api_key(&self) -> AppResult<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            AppError::Config(
                "No API key configured. Set GAMEHUB_API_KEY or api_key in config.toml".to_string(),
            )
        })
    }

    /// Database file inside the data directory
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("gamehub.db")
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}
