//! # Client Creation
//!
//! Resolves settings from the configuration file and environment and builds
//! the GitHub client the commands fetch through.

use std::sync::Arc;

use anyhow::{Context, Result};
use hubview_core::{Settings, get_config_dirs};
use hubview_gh::{GitHubClient, create_github_client};
use tokio::runtime::Runtime;
use tracing::debug;

/// Load `config.toml` and apply environment overrides on top
pub fn load_settings() -> Result<Settings> {
  let dirs = get_config_dirs()?;
  let settings = dirs.load_settings()?.with_env_overrides();
  debug!(
    "Using API at {} ({})",
    settings.api_base_url,
    if settings.token.is_some() { "authenticated" } else { "anonymous" }
  );
  Ok(settings)
}

/// Creates a GitHub client from resolved settings
pub fn create_github_client_from_settings(settings: &Settings) -> Result<GitHubClient> {
  create_github_client(settings.token.as_deref(), &settings.api_base_url, settings.timeout())
    .context("Failed to create GitHub client")
}

/// Creates a tokio runtime, the resolved settings and a shared GitHub client
///
/// This is a convenience function for commands that drive a controller.
pub fn create_github_runtime_and_client() -> Result<(Runtime, Settings, Arc<GitHubClient>)> {
  let rt = Runtime::new().context("Failed to create async runtime")?;
  let settings = load_settings()?;
  let client = create_github_client_from_settings(&settings)?;
  Ok((rt, settings, Arc::new(client)))
}
