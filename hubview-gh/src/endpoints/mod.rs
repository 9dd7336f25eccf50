//! # GitHub API Endpoints
//!
//! Organized endpoint implementations for the GitHub resources hubview
//! reads: the user directory, single user profiles, and public activity.

pub mod events;
pub mod users;
