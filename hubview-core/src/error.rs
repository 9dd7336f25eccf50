//! # Fetch Errors
//!
//! The failure taxonomy controllers surface to the presentation layer. Each
//! variant is terminal for the attempt that produced it and carries a message
//! fit for display.

use hubview_gh::GitHubError;
use thiserror::Error;

/// Why a fetch attempt failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
  /// Network, HTTP or decoding failure in the data source
  #[error("{0}")]
  Transport(String),
  /// The requested resource does not exist
  #[error("{0}")]
  NotFound(String),
  /// The caller passed a key that cannot identify anything
  #[error("Invalid input: {0}")]
  InvalidInput(String),
}

impl From<GitHubError> for FetchError {
  fn from(error: GitHubError) -> Self {
    if error.is_not_found() {
      Self::NotFound(error.to_string())
    } else {
      Self::Transport(error.to_string())
    }
  }
}
