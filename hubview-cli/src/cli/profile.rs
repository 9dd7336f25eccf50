//! # Profile Command
//!
//! Loads a user's profile and public activity through a
//! [`UserProfileController`], rendering from its subscriptions, and prints
//! whichever of the two arrived.

use anyhow::{Context, Result};
use clap::Args;
use hubview_core::output::{
  format_count, format_event_type, format_login, format_repo_name, format_timestamp, format_url, print_error,
  print_header, print_warning,
};
use hubview_core::{GithubEvent, Loadable, UserDetails, UserProfileController};
use owo_colors::OwoColorize;

use crate::clients::create_github_runtime_and_client;

/// Default number of activity entries to show
const DEFAULT_EVENT_LIMIT: usize = 10;

/// Command for showing one user
#[derive(Args)]
pub struct ProfileArgs {
  /// The user's login
  #[arg(required = true, value_name = "LOGIN")]
  pub login: String,

  /// Maximum number of activity entries to show
  #[arg(long, short = 'e', value_name = "N", default_value_t = DEFAULT_EVENT_LIMIT)]
  pub events: usize,
}

pub(crate) fn handle_profile_command(args: ProfileArgs) -> Result<()> {
  let (rt, _settings, client) = create_github_runtime_and_client()?;
  let controller = UserProfileController::new(client);

  let (user, events) = rt.block_on(async {
    let mut user = controller.subscribe_user();
    let mut events = controller.subscribe_events();

    // Every load settles the profile, so its first settled value is this
    // load's outcome; a loaded profile is printed without waiting for activity
    let show_user = async {
      let settled = user.wait_for(Loadable::is_settled).await.map(|state| state.clone());
      if let Ok(Loadable::Loaded(details)) = &settled {
        render_user(details);
      }
      settled.unwrap_or_default()
    };
    let ((), user) = tokio::join!(controller.load(&args.login), show_user);

    // A blank login leaves activity unrequested, so read whatever was published
    (user, events.borrow_and_update().clone())
  });

  render_events(&events, args.events);

  match user {
    Loadable::Failed(error) => Err(error).context(format!("Failed to load profile for '{}'", args.login.trim())),
    Loadable::Uninitialized | Loadable::Loading | Loadable::Loaded(_) => Ok(()),
  }
}

fn render_user(user: &UserDetails) {
  print_header(user.display_name());
  println!("  {}", format_login(&user.login));

  if let Some(bio) = &user.bio {
    println!("\n  {}", bio.italic());
  }

  println!();
  let details = [
    ("Company", user.company.as_deref()),
    ("Location", user.location.as_deref()),
    ("Email", user.email.as_deref()),
    ("Blog", user.blog.as_deref()),
    ("Twitter", user.twitter_handle.as_deref()),
  ];
  for (label, value) in details {
    if let Some(value) = value {
      println!("  {:<10} {}", format!("{label}:").bold(), value);
    }
  }
  if let Some(avatar_url) = &user.avatar_url {
    println!("  {:<10} {}", "Avatar:".bold(), format_url(avatar_url));
  }

  println!(
    "\n  {} · {} · {}",
    format_count(user.followers, "follower", "followers"),
    format_count(user.following, "following", "following"),
    format_count(user.public_repositories, "repository", "repositories")
  );
}

fn render_events(events: &Loadable<Vec<GithubEvent>>, limit: usize) {
  print_header("Recent Activity");

  match events {
    Loadable::Loaded(events) if events.is_empty() => println!("  No public activity"),
    Loadable::Loaded(events) => {
      for event in events.iter().take(limit) {
        let target = event
          .repository
          .as_ref()
          .map(|repo| format_repo_name(&repo.name))
          .unwrap_or_default();
        println!(
          "  {}  {} {}",
          format_timestamp(&event.created_at),
          format_event_type(event.event_type),
          target
        );
      }
      if events.len() > limit {
        println!("  {}", format!("... and {} more", events.len() - limit).dimmed());
      }
    }
    Loadable::Failed(error) => print_error(&format!("Failed to load activity: {error}")),
    Loadable::Uninitialized | Loadable::Loading => print_warning("Activity was not loaded"),
  }
}
