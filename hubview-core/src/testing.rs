//! Scripted in-memory [`UserSource`] for controller tests.

use std::collections::VecDeque;
use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::DateTime;
use hubview_gh::{ApiEventType, ApiGithubEvent, ApiRepository, ApiUserDetails, ApiUserListItem};
use tokio::sync::Semaphore;

use crate::error::FetchError;
use crate::source::UserSource;

type Scripted<T> = Mutex<VecDeque<Result<T, FetchError>>>;

/// Answers from queued results; an exhausted listing script yields empty
/// pages. Optional gates park a call until the test adds a permit.
#[derive(Default)]
pub(crate) struct ScriptedSource {
  pages: Scripted<Vec<ApiUserListItem>>,
  users: Scripted<ApiUserDetails>,
  events: Scripted<Vec<ApiGithubEvent>>,
  listing_gate: Option<Arc<Semaphore>>,
  user_gate: Option<Arc<Semaphore>>,
  events_gate: Option<Arc<Semaphore>>,
  list_calls: AtomicUsize,
  user_calls: AtomicUsize,
  events_calls: AtomicUsize,
  cursors: Mutex<Vec<Option<u64>>>,
  page_sizes: Mutex<Vec<u32>>,
}

impl ScriptedSource {
  pub(crate) fn with_listing_gate(mut self, gate: Arc<Semaphore>) -> Self {
    self.listing_gate = Some(gate);
    self
  }

  pub(crate) fn with_user_gate(mut self, gate: Arc<Semaphore>) -> Self {
    self.user_gate = Some(gate);
    self
  }

  pub(crate) fn with_events_gate(mut self, gate: Arc<Semaphore>) -> Self {
    self.events_gate = Some(gate);
    self
  }

  pub(crate) fn push_page(&self, page: Result<Vec<ApiUserListItem>, FetchError>) {
    self.pages.lock().unwrap().push_back(page);
  }

  pub(crate) fn push_user(&self, user: Result<ApiUserDetails, FetchError>) {
    self.users.lock().unwrap().push_back(user);
  }

  pub(crate) fn push_events(&self, events: Result<Vec<ApiGithubEvent>, FetchError>) {
    self.events.lock().unwrap().push_back(events);
  }

  pub(crate) fn list_calls(&self) -> usize {
    self.list_calls.load(Ordering::SeqCst)
  }

  pub(crate) fn user_calls(&self) -> usize {
    self.user_calls.load(Ordering::SeqCst)
  }

  pub(crate) fn events_calls(&self) -> usize {
    self.events_calls.load(Ordering::SeqCst)
  }

  pub(crate) fn cursors(&self) -> Vec<Option<u64>> {
    self.cursors.lock().unwrap().clone()
  }

  pub(crate) fn page_sizes(&self) -> Vec<u32> {
    self.page_sizes.lock().unwrap().clone()
  }
}

async fn pass(gate: Option<&Arc<Semaphore>>) {
  if let Some(gate) = gate {
    gate.acquire().await.unwrap().forget();
  }
}

fn next<T>(script: &Scripted<T>, what: &str) -> Result<T, FetchError> {
  script
    .lock()
    .unwrap()
    .pop_front()
    .unwrap_or_else(|| Err(FetchError::Transport(format!("no scripted {what}"))))
}

#[async_trait]
impl UserSource for ScriptedSource {
  async fn list_users(&self, since: Option<u64>, per_page: u32) -> Result<Vec<ApiUserListItem>, FetchError> {
    self.list_calls.fetch_add(1, Ordering::SeqCst);
    self.cursors.lock().unwrap().push(since);
    self.page_sizes.lock().unwrap().push(per_page);
    pass(self.listing_gate.as_ref()).await;
    self.pages.lock().unwrap().pop_front().unwrap_or_else(|| Ok(Vec::new()))
  }

  async fn get_user(&self, _login: &str) -> Result<ApiUserDetails, FetchError> {
    self.user_calls.fetch_add(1, Ordering::SeqCst);
    pass(self.user_gate.as_ref()).await;
    next(&self.users, "user")
  }

  async fn get_user_events(&self, _login: &str) -> Result<Vec<ApiGithubEvent>, FetchError> {
    self.events_calls.fetch_add(1, Ordering::SeqCst);
    pass(self.events_gate.as_ref()).await;
    next(&self.events, "events")
  }
}

pub(crate) fn user_record(id: u64, login: &str) -> ApiUserListItem {
  ApiUserListItem {
    login: login.to_string(),
    id,
    avatar_url: Some(format!("https://avatars.githubusercontent.com/u/{id}?v=4")),
    url: format!("https://api.github.com/users/{login}"),
  }
}

pub(crate) fn user_records(ids: RangeInclusive<u64>) -> Vec<ApiUserListItem> {
  ids.map(|id| user_record(id, &format!("user{id}"))).collect()
}

pub(crate) fn user_details(login: &str) -> ApiUserDetails {
  ApiUserDetails {
    login: login.to_string(),
    id: 583231,
    avatar_url: None,
    name: Some("The Octocat".to_string()),
    bio: None,
    company: Some("@github".to_string()),
    location: Some("San Francisco".to_string()),
    blog: Some("https://github.blog".to_string()),
    twitter_username: None,
    email: None,
    followers: 9000,
    following: 9,
    public_repos: 8,
  }
}

pub(crate) fn event(event_type: ApiEventType, repository: Option<&str>) -> ApiGithubEvent {
  ApiGithubEvent {
    event_type,
    actor: user_record(583231, "octocat"),
    repository: repository.map(|name| ApiRepository {
      id: 1296269,
      name: name.to_string(),
      url: format!("https://api.github.com/repos/{name}"),
    }),
    created_at: DateTime::parse_from_rfc3339("2022-06-09T12:47:28Z").unwrap(),
  }
}
