//! # User Profile Controller
//!
//! Loads a user's profile and public activity concurrently. Each resource has
//! its own `watch` channel and its own load generation and settles on its
//! own, so a failed profile never hides successfully loaded activity and vice
//! versa.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

use crate::error::FetchError;
use crate::loadable::Loadable;
use crate::models::{GithubEvent, UserDetails};
use crate::source::UserSource;

/// Publishes a user's details and activity as two independent resources
pub struct UserProfileController<S: ?Sized> {
  source: Arc<S>,
  user: Arc<watch::Sender<Loadable<UserDetails>>>,
  events: Arc<watch::Sender<Loadable<Vec<GithubEvent>>>>,
  user_generation: Arc<AtomicU64>,
  events_generation: Arc<AtomicU64>,
}

impl<S: ?Sized> Clone for UserProfileController<S> {
  fn clone(&self) -> Self {
    Self {
      source: Arc::clone(&self.source),
      user: Arc::clone(&self.user),
      events: Arc::clone(&self.events),
      user_generation: Arc::clone(&self.user_generation),
      events_generation: Arc::clone(&self.events_generation),
    }
  }
}

impl<S: UserSource + ?Sized> UserProfileController<S> {
  pub fn new(source: Arc<S>) -> Self {
    let (user, _) = watch::channel(Loadable::Uninitialized);
    let (events, _) = watch::channel(Loadable::Uninitialized);
    Self {
      source,
      user: Arc::new(user),
      events: Arc::new(events),
      user_generation: Arc::new(AtomicU64::new(0)),
      events_generation: Arc::new(AtomicU64::new(0)),
    }
  }

  pub fn subscribe_user(&self) -> watch::Receiver<Loadable<UserDetails>> {
    self.user.subscribe()
  }

  pub fn subscribe_events(&self) -> watch::Receiver<Loadable<Vec<GithubEvent>>> {
    self.events.subscribe()
  }

  /// Current state of the profile resource
  pub fn user(&self) -> Loadable<UserDetails> {
    self.user.borrow().clone()
  }

  /// Current state of the activity resource
  pub fn events(&self) -> Loadable<Vec<GithubEvent>> {
    self.events.borrow().clone()
  }

  /// Load the profile and activity of `login`.
  ///
  /// A blank login fails the profile resource with
  /// [`FetchError::InvalidInput`] without contacting the source and leaves
  /// the activity resource as it was, including an activity fetch still in
  /// flight from an earlier call. A resource drops results of a fetch that a
  /// newer call has since restarted.
  #[instrument(skip(self), level = "debug")]
  pub async fn load(&self, login: &str) {
    let user_generation = self.user_generation.fetch_add(1, Ordering::AcqRel) + 1;
    let login = login.trim();

    if login.is_empty() {
      warn!("Refusing to load a profile without a login");
      self
        .user
        .send_replace(Loadable::Failed(FetchError::InvalidInput("Invalid/unknown user".to_string())));
      return;
    }

    let events_generation = self.events_generation.fetch_add(1, Ordering::AcqRel) + 1;
    info!("Loading profile and activity for {}", login);
    self.user.send_replace(Loadable::Loading);
    self.events.send_replace(Loadable::Loading);

    let load_user = async {
      let result = self.source.get_user(login).await.map(UserDetails::from);
      settle(&self.user, &self.user_generation, user_generation, result, "profile");
    };
    let load_events = async {
      let result = self
        .source
        .get_user_events(login)
        .await
        .map(|records| records.into_iter().map(GithubEvent::from).collect());
      settle(&self.events, &self.events_generation, events_generation, result, "activity");
    };

    tokio::join!(load_user, load_events);
  }
}

/// Publish `result` unless a newer load has restarted the resource since
fn settle<T>(
  slot: &watch::Sender<Loadable<T>>,
  current: &AtomicU64,
  generation: u64,
  result: Result<T, FetchError>,
  what: &str,
) {
  if current.load(Ordering::Acquire) != generation {
    debug!("Discarding {} from superseded load #{}", what, generation);
    return;
  }

  if let Err(error) = &result {
    warn!("Failed to load {}: {}", what, error);
  }
  slot.send_replace(Loadable::from(result));
}
