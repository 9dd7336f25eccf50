//! # Domain Model
//!
//! Immutable values the controllers publish, each built from one raw API
//! record.

use chrono::{DateTime, FixedOffset};
pub use hubview_gh::ApiEventType as GithubEventType;
use hubview_gh::{ApiGithubEvent, ApiRepository, ApiUserDetails, ApiUserListItem};

/// One row of the user listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserListingEntry {
  pub id: u64,
  pub login: String,
  pub avatar_url: Option<String>,
  pub profile_url: String,
}

impl From<ApiUserListItem> for UserListingEntry {
  fn from(record: ApiUserListItem) -> Self {
    Self {
      id: record.id,
      login: record.login,
      avatar_url: record.avatar_url,
      profile_url: record.url,
    }
  }
}

/// A user's public profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDetails {
  pub login: String,
  pub name: Option<String>,
  pub bio: Option<String>,
  pub id: u64,
  pub avatar_url: Option<String>,
  pub company: Option<String>,
  pub location: Option<String>,
  pub blog: Option<String>,
  pub twitter_handle: Option<String>,
  pub email: Option<String>,
  pub followers: u32,
  pub following: u32,
  pub public_repositories: u32,
}

impl UserDetails {
  /// The display name, falling back to the login
  pub fn display_name(&self) -> &str {
    self.name.as_deref().filter(|name| !name.trim().is_empty()).unwrap_or(&self.login)
  }
}

impl From<ApiUserDetails> for UserDetails {
  fn from(record: ApiUserDetails) -> Self {
    // GitHub reports an unset blog as "" rather than null
    let blog = record.blog.filter(|blog| !blog.trim().is_empty());

    Self {
      login: record.login,
      name: record.name,
      bio: record.bio,
      id: record.id,
      avatar_url: record.avatar_url,
      company: record.company,
      location: record.location,
      blog,
      twitter_handle: record.twitter_username,
      email: record.email,
      followers: record.followers,
      following: record.following,
      public_repositories: record.public_repos,
    }
  }
}

/// The repository an event happened in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
  pub id: u64,
  pub name: String,
  pub url: String,
}

impl From<ApiRepository> for Repository {
  fn from(record: ApiRepository) -> Self {
    Self {
      id: record.id,
      name: record.name,
      url: record.url,
    }
  }
}

/// One entry of a user's public activity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubEvent {
  pub event_type: GithubEventType,
  pub actor: UserListingEntry,
  /// Absent when the repository has since been deleted or hidden
  pub repository: Option<Repository>,
  pub created_at: DateTime<FixedOffset>,
}

impl From<ApiGithubEvent> for GithubEvent {
  fn from(record: ApiGithubEvent) -> Self {
    Self {
      event_type: record.event_type,
      actor: record.actor.into(),
      repository: record.repository.map(Repository::from),
      created_at: record.created_at,
    }
  }
}

/// Short human label for an event kind
pub const fn event_label(event_type: GithubEventType) -> &'static str {
  match event_type {
    GithubEventType::CommitCommentEvent => "commented on a commit",
    GithubEventType::CreateEvent => "created",
    GithubEventType::DeleteEvent => "deleted",
    GithubEventType::ForkEvent => "forked",
    GithubEventType::GollumEvent => "edited the wiki",
    GithubEventType::IssueCommentEvent => "commented on an issue",
    GithubEventType::IssuesEvent => "updated an issue",
    GithubEventType::MemberEvent => "changed collaborators",
    GithubEventType::PublicEvent => "open sourced",
    GithubEventType::PullRequestEvent => "updated a pull request",
    GithubEventType::PullRequestReviewEvent => "reviewed a pull request",
    GithubEventType::PullRequestReviewCommentEvent => "commented on a pull request review",
    GithubEventType::PullRequestReviewThreadEvent => "resolved a review thread",
    GithubEventType::PushEvent => "pushed",
    GithubEventType::ReleaseEvent => "published a release",
    GithubEventType::SponsorshipEvent => "updated a sponsorship",
    GithubEventType::WatchEvent => "starred",
    GithubEventType::Unknown => "did something",
  }
}
