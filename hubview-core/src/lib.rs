//! # hubview Core Library
//!
//! Domain model, state controllers and configuration for hubview. The two
//! controllers own their state and publish every change through
//! `tokio::sync::watch` channels so any front-end can render from them:
//!
//! - [`UserListingController`] pages through the GitHub user directory.
//! - [`UserProfileController`] loads one user's profile and public activity
//!   side by side.

pub mod config;
pub mod error;
pub mod listing;
pub mod loadable;
pub mod models;
pub mod output;
pub mod profile;
pub mod source;

#[cfg(test)]
mod testing;

// Re-export main types for front-ends
pub use config::{ConfigDirs, Settings, get_config_dirs};
pub use error::FetchError;
pub use listing::{ListingState, PaginationStatus, UserListingController};
pub use loadable::Loadable;
pub use models::{GithubEvent, GithubEventType, Repository, UserDetails, UserListingEntry};
pub use output::ColorMode;
pub use profile::UserProfileController;
pub use source::UserSource;
