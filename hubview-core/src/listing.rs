//! # User Listing Controller
//!
//! Cursor-based pagination over the user directory. The controller is purely
//! reactive: the front-end calls [`UserListingController::request_more`] once
//! on creation and again whenever its "near end of visible content" signal
//! fires while the status is [`PaginationStatus::Idle`].
//!
//! Status, entries and cursor live in one [`ListingState`] that is replaced in
//! a single `watch` update, so subscribers never observe a status that is
//! ahead of the entries it describes.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use hubview_gh::consts::MAX_PER_PAGE;
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

use crate::error::FetchError;
use crate::models::UserListingEntry;
use crate::source::UserSource;

/// Users requested per page unless configured otherwise
pub const DEFAULT_PAGE_SIZE: u32 = 30;

/// Remaining-rows threshold below which a view counts as "near the end"
pub const PREFETCH_THRESHOLD: usize = 10;

/// Where a paginated listing stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationStatus {
  /// Fetching the very first page
  LoadingFirst,
  /// Fetching a page after at least one was received
  FetchingMore,
  /// Ready for another page
  Idle,
  /// The last fetch failed; entries are unchanged
  Error,
  /// The source has no more users to give
  Done,
}

/// Everything a subscriber needs to render the listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingState {
  pub status: PaginationStatus,
  pub entries: Vec<UserListingEntry>,
  /// Id of the last received user; `None` until the first page arrives
  pub cursor: Option<u64>,
  /// Failure behind the current [`PaginationStatus::Error`], if any
  pub error: Option<FetchError>,
}

impl Default for ListingState {
  fn default() -> Self {
    Self {
      status: PaginationStatus::LoadingFirst,
      entries: Vec::new(),
      cursor: None,
      error: None,
    }
  }
}

/// Whether a view showing rows up to `last_visible_index` is close enough to
/// the end of `total_rows` to ask for the next page
pub const fn is_near_end(total_rows: usize, last_visible_index: usize) -> bool {
  total_rows.saturating_sub(last_visible_index) < PREFETCH_THRESHOLD
}

/// Accumulates pages of users and publishes the growing listing
pub struct UserListingController<S: ?Sized> {
  source: Arc<S>,
  page_size: u32,
  state: Arc<watch::Sender<ListingState>>,
  in_flight: Arc<AtomicBool>,
}

impl<S: ?Sized> Clone for UserListingController<S> {
  fn clone(&self) -> Self {
    Self {
      source: Arc::clone(&self.source),
      page_size: self.page_size,
      state: Arc::clone(&self.state),
      in_flight: Arc::clone(&self.in_flight),
    }
  }
}

impl<S: UserSource + ?Sized> UserListingController<S> {
  /// Create a controller requesting [`DEFAULT_PAGE_SIZE`] users per page
  pub fn new(source: Arc<S>) -> Self {
    Self::with_page_size(source, DEFAULT_PAGE_SIZE)
  }

  /// Create a controller with a custom page size, clamped to what the API
  /// serves in one response
  pub fn with_page_size(source: Arc<S>, page_size: u32) -> Self {
    let (state, _) = watch::channel(ListingState::default());
    Self {
      source,
      page_size: page_size.clamp(1, MAX_PER_PAGE),
      state: Arc::new(state),
      in_flight: Arc::new(AtomicBool::new(false)),
    }
  }

  pub const fn page_size(&self) -> u32 {
    self.page_size
  }

  /// Receive every state change from now on
  pub fn subscribe(&self) -> watch::Receiver<ListingState> {
    self.state.subscribe()
  }

  /// A copy of the current state
  pub fn snapshot(&self) -> ListingState {
    self.state.borrow().clone()
  }

  pub fn status(&self) -> PaginationStatus {
    self.state.borrow().status
  }

  /// Fetch the next page and fold it into the listing.
  ///
  /// Returns `false` without touching the source when a fetch is already in
  /// flight. Calling this while [`PaginationStatus::Done`] asks the source
  /// again from the current cursor. Dropping the returned future mid-fetch
  /// puts the status back to what it was before the call.
  #[instrument(skip(self), level = "debug")]
  pub async fn request_more(&self) -> bool {
    let Some(mut in_flight) = InFlightGuard::acquire(&self.in_flight, &self.state) else {
      debug!("Page fetch already in flight, ignoring request");
      return false;
    };

    let cursor = self.state.borrow().cursor;
    in_flight.begin(match cursor {
      None => PaginationStatus::LoadingFirst,
      Some(_) => PaginationStatus::FetchingMore,
    });

    debug!("Requesting {} users after {:?}", self.page_size, cursor);
    match self.source.list_users(cursor, self.page_size).await {
      Ok(records) if records.is_empty() => {
        info!("User listing exhausted at cursor {:?}", cursor);
        in_flight.finish(|state| {
          state.status = PaginationStatus::Done;
          state.error = None;
        });
      }
      Ok(records) => {
        let exhausted = records.len() < self.page_size as usize;
        let page: Vec<UserListingEntry> = records.into_iter().map(UserListingEntry::from).collect();
        let next_cursor = page.last().map(|entry| entry.id);
        info!("Received {} users, next cursor {:?}", page.len(), next_cursor);

        in_flight.finish(|state| {
          state.entries.extend(page);
          state.cursor = next_cursor.or(state.cursor);
          state.status = if exhausted {
            PaginationStatus::Done
          } else {
            PaginationStatus::Idle
          };
          state.error = None;
        });
      }
      Err(error) => {
        warn!("Failed to fetch users after {:?}: {}", cursor, error);
        in_flight.finish(|state| {
          state.status = PaginationStatus::Error;
          state.error = Some(error);
        });
      }
    }

    true
  }
}

/// Holds the in-flight flag for the duration of one fetch. When the fetching
/// future is dropped before [`InFlightGuard::finish`], the status published by
/// [`InFlightGuard::begin`] is rolled back before the flag is released.
struct InFlightGuard<'a> {
  flag: &'a AtomicBool,
  state: &'a watch::Sender<ListingState>,
  interrupted: Option<PaginationStatus>,
}

impl<'a> InFlightGuard<'a> {
  fn acquire(flag: &'a AtomicBool, state: &'a watch::Sender<ListingState>) -> Option<Self> {
    flag
      .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
      .ok()
      .map(|_| Self {
        flag,
        state,
        interrupted: None,
      })
  }

  fn begin(&mut self, status: PaginationStatus) {
    self.interrupted = Some(self.state.borrow().status);
    self.state.send_modify(|state| state.status = status);
  }

  fn finish(&mut self, update: impl FnOnce(&mut ListingState)) {
    self.interrupted = None;
    self.state.send_modify(update);
  }
}

impl Drop for InFlightGuard<'_> {
  fn drop(&mut self) {
    if let Some(previous) = self.interrupted.take() {
      debug!("Page fetch dropped, restoring status {:?}", previous);
      self.state.send_modify(|state| state.status = previous);
    }
    self.flag.store(false, Ordering::Release);
  }
}
