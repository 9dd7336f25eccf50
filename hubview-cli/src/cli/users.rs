//! # Users Command
//!
//! Pages through the GitHub user directory with a [`UserListingController`],
//! printing each page as a table as soon as the controller publishes it.

use anyhow::{Context, Result};
use clap::Args;
use hubview_core::listing::is_near_end;
use hubview_core::output::{format_count, format_pagination_status, print_header, print_info};
use hubview_core::{ListingState, PaginationStatus, UserListingController, UserSource};
use owo_colors::OwoColorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tracing::{debug, info};

use crate::clients::create_github_runtime_and_client;

/// Command for listing GitHub users
#[derive(Args)]
pub struct UsersArgs {
  /// Number of pages to fetch
  #[arg(long, short = 'p', value_name = "N", default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
  pub pages: u32,

  /// Users per page (1-100, defaults to the configured page size)
  #[arg(long = "page-size", short = 's', value_name = "N")]
  pub page_size: Option<u32>,
}

#[derive(Tabled)]
struct UserRow {
  #[tabled(rename = "#")]
  position: usize,
  #[tabled(rename = "ID")]
  id: u64,
  #[tabled(rename = "Login")]
  login: String,
  #[tabled(rename = "Profile")]
  profile_url: String,
}

pub(crate) fn handle_users_command(args: UsersArgs) -> Result<()> {
  let (rt, settings, client) = create_github_runtime_and_client()?;
  let controller = UserListingController::with_page_size(client, args.page_size.unwrap_or(settings.page_size));

  print_header("GitHub Users");
  let state = rt.block_on(browse(&controller, args.pages));
  render_summary(&state);

  match state.error {
    Some(error) if state.status == PaginationStatus::Error => {
      Err(error).context(format!("Failed to load users after {} were shown", state.entries.len()))
    }
    _ => Ok(()),
  }
}

/// Drive the listing the way a scrolling view would: render every state the
/// controller publishes and ask for another page while the last rendered row
/// is near the end of the listing, up to `pages` requests
async fn browse<S: UserSource + ?Sized>(controller: &UserListingController<S>, pages: u32) -> ListingState {
  let mut updates = controller.subscribe();
  let mut rendered: usize = 0;
  let mut requested = 0;

  loop {
    let state = updates.borrow_and_update().clone();
    let wants_more = match state.status {
      // Nothing asked for yet
      PaginationStatus::LoadingFirst => requested == 0,
      PaginationStatus::Idle => requested < pages && is_near_end(state.entries.len(), rendered.saturating_sub(1)),
      PaginationStatus::FetchingMore | PaginationStatus::Error | PaginationStatus::Done => false,
    };
    if !wants_more {
      return state;
    }

    requested += 1;
    let render = async {
      while updates.changed().await.is_ok() {
        let state = updates.borrow_and_update().clone();
        debug!("Listing is {:?} with {} users", state.status, state.entries.len());
        rendered = render_rows(&state, rendered);
        if !matches!(state.status, PaginationStatus::LoadingFirst | PaginationStatus::FetchingMore) {
          break;
        }
      }
    };
    let (issued, ()) = tokio::join!(controller.request_more(), render);
    info!("Requested page {} of {} (issued: {})", requested, pages, issued);
  }
}

/// Print the rows of `state` past the first `rendered` ones and return the
/// new number of rendered rows
fn render_rows(state: &ListingState, rendered: usize) -> usize {
  let Some(fresh) = state.entries.get(rendered..).filter(|fresh| !fresh.is_empty()) else {
    return rendered;
  };

  let rows: Vec<UserRow> = fresh
    .iter()
    .enumerate()
    .map(|(offset, entry)| UserRow {
      position: rendered + offset + 1,
      id: entry.id,
      login: entry.login.clone(),
      profile_url: entry.profile_url.clone(),
    })
    .collect();
  println!("\n{}", Table::new(rows).with(Style::sharp()));

  state.entries.len()
}

fn render_summary(state: &ListingState) {
  if state.entries.is_empty() {
    println!("  No users found");
  }

  println!(
    "\n{} {}",
    format_count(u32::try_from(state.entries.len()).unwrap_or(u32::MAX), "user", "users"),
    format!("({})", format_pagination_status(state.status)).dimmed()
  );

  if let (PaginationStatus::Idle, Some(cursor)) = (state.status, state.cursor) {
    print_info(&format!("More users are available after ID {cursor}"));
  }
}
