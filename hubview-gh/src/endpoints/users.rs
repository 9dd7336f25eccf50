//! GitHub Users API endpoint implementations.

use tracing::{info, instrument, trace};

use crate::client::GitHubClient;
use crate::consts::MAX_PER_PAGE;
use crate::error::GitHubError;
use crate::models::{ApiUserDetails, ApiUserListItem};

impl GitHubClient {
  /// List users in sign-up order, starting after the user id `since`.
  ///
  /// `since = None` starts from the beginning of the directory. `per_page` is
  /// clamped to the API maximum of 100.
  ///
  /// # Errors
  ///
  /// Returns an error if the request cannot be sent, the API answers with a
  /// non-success status, or the response cannot be parsed.
  #[instrument(skip(self), level = "debug")]
  pub async fn list_users(&self, since: Option<u64>, per_page: u32) -> Result<Vec<ApiUserListItem>, GitHubError> {
    info!("Listing GitHub users since {:?}", since);

    let mut url = self.endpoint_url(&["users"])?;
    {
      let mut query = url.query_pairs_mut();
      if let Some(since) = since {
        query.append_pair("since", &since.to_string());
      }
      query.append_pair("per_page", &per_page.clamp(1, MAX_PER_PAGE).to_string());
    }

    let users: Vec<ApiUserListItem> = self.get_json(url, "User listing").await?;
    trace!("Received {} users", users.len());
    Ok(users)
  }

  /// Get the profile of a single user.
  ///
  /// # Errors
  ///
  /// Returns [`GitHubError::NotFound`] if no user has this login, and the
  /// usual transport errors otherwise.
  #[instrument(skip(self), level = "debug")]
  pub async fn get_user(&self, login: &str) -> Result<ApiUserDetails, GitHubError> {
    info!("Fetching GitHub user {}", login);

    let url = self.endpoint_url(&["users", login])?;
    let user: ApiUserDetails = self.get_json(url, &format!("User '{login}'")).await?;
    trace!("User: {:?}", user);
    Ok(user)
  }
}
