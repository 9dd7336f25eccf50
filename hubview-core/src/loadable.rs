//! # Loadable Resources
//!
//! A value that is fetched asynchronously, together with where that fetch
//! stands.

use crate::error::FetchError;

/// A resource moving through not-yet-requested, in-flight, obtained or failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Loadable<T> {
  /// No load has been requested yet
  Uninitialized,
  /// A load is in flight
  Loading,
  /// The most recent load succeeded
  Loaded(T),
  /// The most recent load failed
  Failed(FetchError),
}

impl<T> Default for Loadable<T> {
  fn default() -> Self {
    Self::Uninitialized
  }
}

impl<T> Loadable<T> {
  /// The loaded value, if any
  pub const fn value(&self) -> Option<&T> {
    match self {
      Self::Loaded(value) => Some(value),
      _ => None,
    }
  }

  /// The failure, if the last load failed
  pub const fn error(&self) -> Option<&FetchError> {
    match self {
      Self::Failed(error) => Some(error),
      _ => None,
    }
  }

  pub const fn is_loading(&self) -> bool {
    matches!(self, Self::Loading)
  }

  /// Whether a load has finished, successfully or not
  pub const fn is_settled(&self) -> bool {
    matches!(self, Self::Loaded(_) | Self::Failed(_))
  }

  /// Transform the loaded value, keeping every other state
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Loadable<U> {
    match self {
      Self::Uninitialized => Loadable::Uninitialized,
      Self::Loading => Loadable::Loading,
      Self::Loaded(value) => Loadable::Loaded(f(value)),
      Self::Failed(error) => Loadable::Failed(error),
    }
  }
}

impl<T> From<Result<T, FetchError>> for Loadable<T> {
  fn from(result: Result<T, FetchError>) -> Self {
    match result {
      Ok(value) => Self::Loaded(value),
      Err(error) => Self::Failed(error),
    }
  }
}
