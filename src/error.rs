//! Error types for optimization and persistence.

use std::fmt;

/// Failure from the persistence collaborator.
#[derive(Debug)]
pub enum StoreError {
    Http(reqwest::Error),
    Backend(String),
    NotFound(String),
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        StoreError::Http(err)
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Http(err) => write!(f, "store request failed: {}", err),
            StoreError::Backend(msg) => write!(f, "store backend error: {}", msg),
            StoreError::NotFound(id) => write!(f, "no route with id {}", id),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Http(err) => Some(err),
            _ => None,
        }
    }
}

/// Failure of one optimization invocation.
///
/// None of these are retried internally; all surface synchronously to the
/// caller.
#[derive(Debug)]
pub enum OptimizeError {
    /// Aggregate required crew exceeds vehicle capacity. Detected before
    /// any computation; recoverable by adjusting the selection.
    ConstraintViolation,
    /// Distance/duration/cost/score derivation produced a non-finite
    /// result, e.g. from a malformed coordinate or zero fuel efficiency.
    Computation(String),
    /// The store insert failed. The computed route is discarded; re-running
    /// the optimization is cheap and idempotent.
    Persistence(StoreError),
}

impl From<StoreError> for OptimizeError {
    fn from(err: StoreError) -> Self {
        OptimizeError::Persistence(err)
    }
}

impl fmt::Display for OptimizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptimizeError::ConstraintViolation => write!(f, "insufficient vehicle capacity"),
            OptimizeError::Computation(msg) => write!(f, "optimization failed: {}", msg),
            OptimizeError::Persistence(err) => write!(f, "failed to save route: {}", err),
        }
    }
}

impl std::error::Error for OptimizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OptimizeError::Persistence(err) => Some(err),
            _ => None,
        }
    }
}
