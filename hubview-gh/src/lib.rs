//! # GitHub API Client
//!
//! Provides GitHub REST API integration for the public user directory, user
//! profiles, and public activity feeds, with optional token authentication.

pub mod client;
pub mod consts;
pub mod endpoints;
pub mod error;
pub mod models;

// Re-export the client
pub use client::{GitHubClient, create_github_client};
pub use error::GitHubError;
// Re-export models
pub use models::{ApiEventType, ApiGithubEvent, ApiRepository, ApiUserDetails, ApiUserListItem, GitHubAuth};
