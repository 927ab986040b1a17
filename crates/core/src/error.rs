//! Repository error model.

use thiserror::Error;

/// Result type returned by every store operation.
pub type RepoResult<T> = Result<T, RepoError>;

/// Failure surfaced by the data-access layer.
///
/// Keep this limited to infrastructure faults. Business-rule rejections
/// (duplicate name, missing row on update/delete) travel inside a successful
/// [`Outcome`](crate::Outcome) with `flag: false`, and a read miss is plain
/// `Ok(None)` — no operation communicates failure through two channels.
///
/// By the time a `RepoError` leaves a repository the underlying store fault
/// has already been logged; the variant carries only the sanitized message
/// shown to clients.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// The persistent store failed or was unreachable.
    #[error("{0}")]
    Store(String),
}

impl RepoError {
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }

    /// The user-facing message for this failure.
    pub fn message(&self) -> &str {
        match self {
            Self::Store(msg) => msg,
        }
    }
}
