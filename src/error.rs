use thiserror::Error;
use uuid::Uuid;

use crate::token::TokenError;

/// Errors surfaced by the folder read operations.
///
/// Pagination errors terminate the current request only; pages already
/// fetched with earlier tokens stay valid.
#[derive(Debug, Error)]
pub enum FolderError {
    /// A paginated request asked for a non-positive page size.
    #[error("per_page must be positive, got {0}")]
    InvalidPageSize(i64),

    /// The continuation token could not be decoded into a cursor.
    #[error("invalid continuation token: {0}")]
    InvalidToken(#[from] TokenError),

    /// The token decoded cleanly but its cursor no longer names a record in
    /// the organization's current result set. Never reinterpreted as a
    /// restart or as end-of-results.
    #[error("stale continuation token: cursor {cursor} is not in the result set")]
    StaleToken { cursor: Uuid },

    /// A record source failure, propagated unchanged.
    #[error(transparent)]
    Source(#[from] anyhow::Error),
}
