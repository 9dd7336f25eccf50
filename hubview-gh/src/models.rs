use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

/// Represents GitHub authentication credentials
#[derive(Clone, Default)]
pub struct GitHubAuth {
  pub token: Option<String>,
}

impl GitHubAuth {
  /// Unauthenticated access, subject to the low anonymous rate limit
  pub const fn anonymous() -> Self {
    Self { token: None }
  }

  /// Authenticate every request with a personal access token
  pub fn with_token(token: impl Into<String>) -> Self {
    Self {
      token: Some(token.into()),
    }
  }
}

impl std::fmt::Debug for GitHubAuth {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("GitHubAuth")
      .field("token", &self.token.as_ref().map(|_| "<redacted>"))
      .finish()
  }
}

/// A user as returned by `/users` and as the `actor` of an event
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ApiUserListItem {
  pub login: String,
  pub id: u64,
  pub avatar_url: Option<String>,
  pub url: String,
}

/// A full user profile from `/users/{login}`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ApiUserDetails {
  pub login: String,
  pub id: u64,
  pub avatar_url: Option<String>,
  pub name: Option<String>,
  pub bio: Option<String>,
  pub company: Option<String>,
  pub location: Option<String>,
  pub blog: Option<String>,
  pub twitter_username: Option<String>,
  pub email: Option<String>,
  #[serde(default)]
  pub followers: u32,
  #[serde(default)]
  pub following: u32,
  #[serde(default)]
  pub public_repos: u32,
}

/// The repository an event happened in
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ApiRepository {
  pub id: u64,
  pub name: String,
  pub url: String,
}

/// Event kinds reported by the public events API
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Hash)]
pub enum ApiEventType {
  CommitCommentEvent,
  CreateEvent,
  DeleteEvent,
  ForkEvent,
  GollumEvent,
  IssueCommentEvent,
  IssuesEvent,
  MemberEvent,
  PublicEvent,
  PullRequestEvent,
  PullRequestReviewEvent,
  PullRequestReviewCommentEvent,
  PullRequestReviewThreadEvent,
  PushEvent,
  ReleaseEvent,
  SponsorshipEvent,
  WatchEvent,
  /// Any kind GitHub added after this list was written
  #[serde(other)]
  Unknown,
}

/// One entry of `/users/{login}/events/public`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ApiGithubEvent {
  #[serde(rename = "type")]
  pub event_type: ApiEventType,
  pub actor: ApiUserListItem,
  #[serde(rename = "repo")]
  pub repository: Option<ApiRepository>,
  pub created_at: DateTime<FixedOffset>,
}
