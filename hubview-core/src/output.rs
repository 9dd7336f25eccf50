//! # Output Formatting
//!
//! Provides formatted output functions with colors, emojis, and consistent
//! styling for user-facing messages and terminal output.

use chrono::{DateTime, FixedOffset};
use owo_colors::OwoColorize;

use crate::listing::PaginationStatus;
use crate::models::{GithubEventType, event_label};

/// Enum representing different color modes for output
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
  /// Enable colored output
  Yes,
  /// Enable colored output (alias for Yes)
  Always,
  /// Automatically detect if colors should be used based on terminal
  /// capabilities
  Auto,
  /// Disable colored output
  No,
  /// Disable colored output (alias for No)
  Never,
}

impl ColorMode {
  /// Apply the mode to the global color override
  pub fn apply(self) {
    match self {
      Self::Always | Self::Yes => owo_colors::set_override(true),
      Self::Never | Self::No => owo_colors::set_override(false),
      // Let owo_colors detect the terminal
      Self::Auto => {}
    }
  }
}

/// Helper function to safely get an emoji or fallback to a default character
pub fn get_emoji_or_default(name: &str, default: &str) -> String {
  match emojis::get_by_shortcode(name) {
    Some(emoji) => emoji.to_string(),
    None => default.to_string(),
  }
}

/// Print a success message
pub fn print_success(message: &str) {
  let check = get_emoji_or_default("check_mark", "✓");
  println!("{} {}", check.green().bold(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
  let cross = get_emoji_or_default("cross_mark", "✗");
  eprintln!("{} {}", cross.red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
  let warning = get_emoji_or_default("warning", "⚠");
  println!("{} {}", warning.yellow().bold(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
  let info = get_emoji_or_default("information", "ℹ");
  println!("{} {}", info.blue().bold(), message);
}

/// Print a section header
pub fn print_header(header: &str) {
  println!("\n{}", header.blue().bold());
}

/// Format a user login
pub fn format_login(login: &str) -> String {
  login.bright_cyan().bold().to_string()
}

/// Format a repository name
pub fn format_repo_name(name: &str) -> String {
  name.bright_green().to_string()
}

/// Format a timestamp
pub fn format_timestamp(timestamp: &DateTime<FixedOffset>) -> String {
  timestamp.format("%Y-%m-%d %H:%M %:z").to_string().yellow().to_string()
}

/// Format a URL
pub fn format_url(url: &str) -> String {
  url.underline().to_string()
}

/// Format an event kind as a colored verb phrase
pub fn format_event_type(event_type: GithubEventType) -> String {
  let label = event_label(event_type);
  match event_type {
    GithubEventType::PushEvent | GithubEventType::CreateEvent | GithubEventType::ReleaseEvent => {
      label.green().to_string()
    }
    GithubEventType::DeleteEvent => label.red().to_string(),
    GithubEventType::PullRequestEvent
    | GithubEventType::PullRequestReviewEvent
    | GithubEventType::PullRequestReviewCommentEvent
    | GithubEventType::PullRequestReviewThreadEvent => label.purple().to_string(),
    GithubEventType::WatchEvent | GithubEventType::ForkEvent => label.yellow().to_string(),
    GithubEventType::Unknown => label.bright_black().to_string(),
    _ => label.to_string(),
  }
}

/// Format a pagination status
pub fn format_pagination_status(status: PaginationStatus) -> String {
  match status {
    PaginationStatus::LoadingFirst => "loading".blue().to_string(),
    PaginationStatus::FetchingMore => "fetching more".blue().to_string(),
    PaginationStatus::Idle => "idle".green().to_string(),
    PaginationStatus::Error => "error".red().to_string(),
    PaginationStatus::Done => "done".bright_black().to_string(),
  }
}

/// Format a count followed by the singular or plural noun
pub fn format_count(count: u32, singular: &str, plural: &str) -> String {
  let noun = if count == 1 { singular } else { plural };
  format!("{} {noun}", count.bold())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_get_emoji_or_default() {
    // Test with a known emoji
    let result = get_emoji_or_default("check_mark", "✓");
    assert!(!result.is_empty());

    // Test with unknown emoji
    let result = get_emoji_or_default("nonexistent_emoji", "fallback");
    assert_eq!(result, "fallback");
  }

  #[test]
  fn test_format_functions() {
    assert!(format_login("octocat").contains("octocat"));
    assert!(format_repo_name("octocat/Hello-World").contains("octocat/Hello-World"));
    assert!(format_url("https://github.com").contains("https://github.com"));

    let timestamp = DateTime::parse_from_rfc3339("2022-06-09T12:47:28+02:00").unwrap();
    assert!(format_timestamp(&timestamp).contains("2022-06-09 12:47 +02:00"));
  }

  #[test]
  fn test_event_type_formatting() {
    assert!(format_event_type(GithubEventType::PushEvent).contains("pushed"));
    assert!(format_event_type(GithubEventType::WatchEvent).contains("starred"));
    assert!(format_event_type(GithubEventType::GollumEvent).contains("wiki"));
    assert!(!format_event_type(GithubEventType::Unknown).is_empty());
  }

  #[test]
  fn test_pagination_status_formatting() {
    assert!(format_pagination_status(PaginationStatus::Idle).contains("idle"));
    assert!(format_pagination_status(PaginationStatus::Error).contains("error"));
    assert!(format_pagination_status(PaginationStatus::Done).contains("done"));
  }

  #[test]
  fn test_format_count() {
    assert!(format_count(1, "follower", "followers").ends_with(" follower"));
    assert!(format_count(9000, "follower", "followers").ends_with(" followers"));
    assert!(format_count(0, "repository", "repositories").ends_with(" repositories"));
  }
}
