//! # GitHub HTTP Client
//!
//! HTTP client implementation for GitHub API interactions, handling optional
//! token authentication, request building, and response parsing for GitHub
//! REST API operations.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode, header};
use serde::de::DeserializeOwned;
use tracing::{debug, trace, warn};
use url::Url;

use crate::consts::{ACCEPT, API_BASE_URL, RATE_LIMIT_REMAINING_HEADER, USER_AGENT};
use crate::error::GitHubError;
use crate::models::GitHubAuth;

/// Represents a GitHub API client
#[derive(Clone)]
pub struct GitHubClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) auth: GitHubAuth,
}

impl GitHubClient {
  /// Create a new GitHub client pointed at the public API
  pub fn new(auth: GitHubAuth) -> Self {
    let client = Client::new();
    Self {
      client,
      base_url: API_BASE_URL.to_string(),
      auth,
    }
  }

  /// Replace the API base URL (GitHub Enterprise, test servers)
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into().trim_end_matches('/').to_string();
    self
  }

  /// The API base URL requests are sent to
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Whether requests carry an `Authorization` header
  pub const fn is_authenticated(&self) -> bool {
    self.auth.token.is_some()
  }

  /// Build an endpoint URL from path segments, percent-encoding each one
  pub(crate) fn endpoint_url(&self, segments: &[&str]) -> Result<Url, GitHubError> {
    let mut url = Url::parse(&self.base_url)?;
    url
      .path_segments_mut()
      .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
      .pop_if_empty()
      .extend(segments);
    Ok(url)
  }

  /// Issue a GET request and decode a successful JSON body.
  ///
  /// `what` names the resource in error messages, e.g. `"User 'octocat'"`.
  pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: Url, what: &str) -> Result<T, GitHubError> {
    trace!("GitHub API URL: {}", url);

    let mut request = self
      .client
      .get(url.clone())
      .header(header::ACCEPT, ACCEPT)
      .header(header::USER_AGENT, USER_AGENT);
    if let Some(token) = &self.auth.token {
      request = request.bearer_auth(token);
    }

    let response = request.send().await.map_err(|source| GitHubError::Request {
      url: url.to_string(),
      source,
    })?;

    let status = response.status();
    debug!("GitHub API response status: {}", status);

    if status.is_success() {
      let body = response.text().await.map_err(|source| GitHubError::Request {
        url: url.to_string(),
        source,
      })?;
      return serde_json::from_str::<T>(&body).map_err(|source| GitHubError::Decode {
        what: what.to_string(),
        source,
      });
    }

    let rate_limited = is_rate_limited(&response);
    let message = api_message(response).await;

    match status {
      StatusCode::NOT_FOUND => Err(GitHubError::NotFound(what.to_string())),
      StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS if rate_limited => {
        warn!("GitHub API rate limit exhausted");
        Err(GitHubError::RateLimited(message))
      }
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
        warn!("Authentication failed when accessing GitHub API");
        Err(GitHubError::Unauthorized)
      }
      _ => {
        warn!("Unexpected GitHub API error: HTTP {} - {}", status, message);
        Err(GitHubError::Status { status, message })
      }
    }
  }
}

/// Create a GitHub client with an optional token, base URL and request timeout
pub fn create_github_client(
  token: Option<&str>,
  base_url: &str,
  timeout: Duration,
) -> Result<GitHubClient, GitHubError> {
  let client = Client::builder()
    .timeout(timeout)
    .build()
    .map_err(|source| GitHubError::Request {
      url: base_url.to_string(),
      source,
    })?;

  let auth = GitHubAuth {
    token: token.map(str::to_string),
  };

  Ok(
    GitHubClient {
      client,
      base_url: API_BASE_URL.to_string(),
      auth,
    }
    .with_base_url(base_url),
  )
}

fn is_rate_limited(response: &Response) -> bool {
  response.status() == StatusCode::TOO_MANY_REQUESTS
    || response
      .headers()
      .get(RATE_LIMIT_REMAINING_HEADER)
      .and_then(|value| value.to_str().ok())
      .is_some_and(|remaining| remaining.trim() == "0")
}

/// Extract GitHub's `message` field from an error body, falling back to the
/// raw text
async fn api_message(response: Response) -> String {
  let body = response.text().await.unwrap_or_default();
  serde_json::from_str::<serde_json::Value>(&body)
    .ok()
    .and_then(|json| json.get("message").and_then(|m| m.as_str()).map(str::to_string))
    .unwrap_or(body)
}
