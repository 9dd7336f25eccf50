//! # GitHub Client Errors
//!
//! Typed failures returned by every endpoint, so callers can tell a missing
//! resource apart from transport trouble.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while talking to the GitHub API
#[derive(Debug, Error)]
pub enum GitHubError {
  #[error("GET {url} failed: {source}")]
  Request {
    url: String,
    #[source]
    source: reqwest::Error,
  },
  #[error("Invalid GitHub API URL: {0}")]
  InvalidUrl(#[from] url::ParseError),
  #[error("{0} not found")]
  NotFound(String),
  #[error("Authentication failed. Please check your GitHub token.")]
  Unauthorized,
  #[error("GitHub API rate limit exceeded: {0}")]
  RateLimited(String),
  #[error("Unexpected error: HTTP {status} - {message}")]
  Status { status: StatusCode, message: String },
  #[error("Failed to parse {what}: {source}")]
  Decode {
    what: String,
    #[source]
    source: serde_json::Error,
  },
}

impl GitHubError {
  /// Whether the error means the requested resource does not exist
  pub const fn is_not_found(&self) -> bool {
    matches!(self, Self::NotFound(_))
  }
}
