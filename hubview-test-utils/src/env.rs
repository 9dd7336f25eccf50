//! Environment management for testing the hubview binary
//!
//! Spawned binaries get their configuration directory, API URL and token
//! through environment variables. This module builds that environment around a
//! per-test temporary directory so tests never read or write the developer's
//! real configuration and never reach the real GitHub API.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// A per-test environment for child `hubview` processes
pub struct CliEnvGuard {
  /// The temporary directory backing the configuration directory
  pub temp_dir: TempDir,
  api_url: Option<String>,
  token: Option<String>,
}

impl Default for CliEnvGuard {
  fn default() -> Self {
    Self::new()
  }
}

impl CliEnvGuard {
  /// Environment variable names understood by hubview
  pub const CONFIG_DIR: &'static str = "HUBVIEW_CONFIG_DIR";
  pub const API_URL: &'static str = "HUBVIEW_API_URL";
  pub const GITHUB_TOKEN: &'static str = "GITHUB_TOKEN";

  /// Create a new test environment with an empty configuration directory
  pub fn new() -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    fs::create_dir_all(temp_dir.path().join("config")).expect("Failed to create config directory");

    Self {
      temp_dir,
      api_url: None,
      token: None,
    }
  }

  /// Point the child at a mock API server
  pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
    self.api_url = Some(url.into());
    self
  }

  /// Authenticate the child with a token
  pub fn with_token(mut self, token: impl Into<String>) -> Self {
    self.token = Some(token.into());
    self
  }

  /// Get the path to the isolated configuration directory
  pub fn config_dir(&self) -> PathBuf {
    self.temp_dir.path().join("config")
  }

  /// Get the path to the settings file inside the configuration directory
  pub fn config_path(&self) -> PathBuf {
    self.config_dir().join("config.toml")
  }

  /// Write a settings file for the child to pick up
  pub fn write_config(&self, content: &str) {
    fs::write(self.config_path(), content).expect("Failed to write config file");
  }

  /// Variables to set on the child process.
  ///
  /// The token is always present so a token from the developer's shell never
  /// leaks into a test; an empty value counts as unset.
  pub fn vars(&self) -> Vec<(&'static str, String)> {
    let mut vars = vec![
      (Self::CONFIG_DIR, self.config_dir().display().to_string()),
      (Self::GITHUB_TOKEN, self.token.clone().unwrap_or_default()),
    ];
    if let Some(url) = &self.api_url {
      vars.push((Self::API_URL, url.clone()));
    }
    vars
  }
}
