//! # Configuration Management
//!
//! Handles application configuration, directory management, and settings
//! for hubview, including XDG base directory support and environment
//! overrides for the API token and base URL.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use hubview_gh::consts::API_BASE_URL;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::listing::DEFAULT_PAGE_SIZE;

/// Environment variable holding a GitHub personal access token
pub const ENV_GITHUB_TOKEN: &str = "GITHUB_TOKEN";

/// Environment variable overriding the API base URL
pub const ENV_API_URL: &str = "HUBVIEW_API_URL";

/// Environment variable relocating the configuration directory
pub const ENV_CONFIG_DIR: &str = "HUBVIEW_CONFIG_DIR";

/// Default HTTP request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User-editable settings stored in `config.toml`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
  /// GitHub REST API root
  pub api_base_url: String,
  /// Users requested per listing page
  pub page_size: u32,
  /// HTTP request timeout in seconds
  pub timeout_secs: u64,
  /// Personal access token; raises the rate limit when present
  #[serde(skip_serializing_if = "Option::is_none")]
  pub token: Option<String>,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      api_base_url: API_BASE_URL.to_string(),
      page_size: DEFAULT_PAGE_SIZE,
      timeout_secs: DEFAULT_TIMEOUT_SECS,
      token: None,
    }
  }
}

impl Settings {
  /// Load settings from a TOML file, or return defaults if it does not exist
  pub fn load(path: &Path) -> Result<Self> {
    if !path.exists() {
      debug!("No config file at {}, using defaults", path.display());
      return Ok(Self::default());
    }

    let content =
      fs::read_to_string(path).with_context(|| format!("Failed to read config from {}", path.display()))?;
    let settings: Self =
      toml::from_str(&content).with_context(|| format!("Failed to parse config from {}", path.display()))?;

    Ok(settings)
  }

  /// Save settings as pretty TOML, creating parent directories
  pub fn save(&self, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent).with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }

    let content = toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;
    fs::write(path, content).with_context(|| format!("Failed to write config to {}", path.display()))?;

    Ok(())
  }

  /// Apply overrides from variables resolved by `lookup`. Blank values are
  /// ignored.
  pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
    let non_blank = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

    if let Some(token) = non_blank(ENV_GITHUB_TOKEN) {
      self.token = Some(token);
    }
    if let Some(url) = non_blank(ENV_API_URL) {
      self.api_base_url = url;
    }
    self
  }

  /// Apply overrides from the process environment
  pub fn with_env_overrides(self) -> Self {
    self.with_overrides(|name| std::env::var(name).ok())
  }

  pub const fn timeout(&self) -> Duration {
    Duration::from_secs(self.timeout_secs)
  }
}

/// Represents the configuration directories for the hubview application
#[derive(Debug, Clone)]
pub struct ConfigDirs {
  pub config_dir: PathBuf,
  pub cache_dir: Option<PathBuf>,
}

impl ConfigDirs {
  /// Create a new ConfigDirs instance from the platform conventions, or
  /// from `$HUBVIEW_CONFIG_DIR` when set
  pub fn new() -> Result<Self> {
    if let Some(config_dir) = std::env::var_os(ENV_CONFIG_DIR).filter(|dir| !dir.is_empty()) {
      return Ok(Self::at(PathBuf::from(config_dir), None));
    }

    let proj_dirs = ProjectDirs::from("", "", "hubview").context("Failed to determine project directories")?;

    Ok(Self {
      config_dir: proj_dirs.config_dir().to_path_buf(),
      cache_dir: Some(proj_dirs.cache_dir().to_path_buf()),
    })
  }

  /// Use explicit directories instead of the platform ones
  pub const fn at(config_dir: PathBuf, cache_dir: Option<PathBuf>) -> Self {
    Self { config_dir, cache_dir }
  }

  /// Get the config directory
  pub fn config_dir(&self) -> &PathBuf {
    &self.config_dir
  }

  /// Get the cache directory
  pub fn cache_dir(&self) -> Option<&PathBuf> {
    self.cache_dir.as_ref()
  }

  /// Get the path to the settings file
  pub fn config_path(&self) -> PathBuf {
    self.config_dir.join("config.toml")
  }

  /// Create the directories and a default settings file if none exists.
  ///
  /// Returns the settings file path.
  pub fn init(&self) -> Result<PathBuf> {
    fs::create_dir_all(&self.config_dir).context("Failed to create config directory")?;
    if let Some(cache_dir) = &self.cache_dir {
      fs::create_dir_all(cache_dir).context("Failed to create cache directory")?;
    }

    let config_path = self.config_path();
    if !config_path.exists() {
      Settings::default().save(&config_path)?;
    }

    Ok(config_path)
  }

  /// Load the settings file, or defaults if it does not exist
  pub fn load_settings(&self) -> Result<Settings> {
    Settings::load(&self.config_path())
  }
}

/// Get the configuration directories
pub fn get_config_dirs() -> Result<ConfigDirs> {
  ConfigDirs::new()
}
