//! # User Data Source
//!
//! The fetch capability the controllers consume. [`GitHubClient`] provides
//! it over HTTP; tests provide scripted in-memory versions.

use async_trait::async_trait;
use hubview_gh::{ApiGithubEvent, ApiUserDetails, ApiUserListItem, GitHubClient};

use crate::error::FetchError;

/// Something that can hand out raw user records
#[async_trait]
pub trait UserSource: Send + Sync {
  /// One page of users after the id `since` (`None` = start of collection)
  async fn list_users(&self, since: Option<u64>, per_page: u32) -> Result<Vec<ApiUserListItem>, FetchError>;

  /// A user's full profile; [`FetchError::NotFound`] if the login is unknown
  async fn get_user(&self, login: &str) -> Result<ApiUserDetails, FetchError>;

  /// A user's public activity, newest first
  async fn get_user_events(&self, login: &str) -> Result<Vec<ApiGithubEvent>, FetchError>;
}

#[async_trait]
impl UserSource for GitHubClient {
  async fn list_users(&self, since: Option<u64>, per_page: u32) -> Result<Vec<ApiUserListItem>, FetchError> {
    Ok(GitHubClient::list_users(self, since, per_page).await?)
  }

  async fn get_user(&self, login: &str) -> Result<ApiUserDetails, FetchError> {
    Ok(GitHubClient::get_user(self, login).await?)
  }

  async fn get_user_events(&self, login: &str) -> Result<Vec<ApiGithubEvent>, FetchError> {
    Ok(self.get_user_public_events(login).await?)
  }
}
