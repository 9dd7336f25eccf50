//! GitHub Activity API endpoint implementations.

use tracing::{info, instrument, trace};

use crate::client::GitHubClient;
use crate::error::GitHubError;
use crate::models::ApiGithubEvent;

impl GitHubClient {
  /// Get the public events performed by a user, newest first.
  ///
  /// # Errors
  ///
  /// Returns [`GitHubError::NotFound`] if no user has this login, and the
  /// usual transport errors otherwise.
  #[instrument(skip(self), level = "debug")]
  pub async fn get_user_public_events(&self, login: &str) -> Result<Vec<ApiGithubEvent>, GitHubError> {
    info!("Fetching public events for {}", login);

    let url = self.endpoint_url(&["users", login, "events", "public"])?;
    let events: Vec<ApiGithubEvent> = self.get_json(url, &format!("Events for '{login}'")).await?;
    trace!("Received {} events", events.len());
    Ok(events)
  }
}
