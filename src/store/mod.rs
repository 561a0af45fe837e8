//! Record sources: where folder records come from.
//!
//! This module is split into the [`FolderSource`] trait — the seam the
//! pagination engine and service layer are written against — and the
//! shipped in-memory implementation:
//! - `sample`: a deterministic generated dataset, the stand-in for a real
//!   store until one exists.
//!
//! External modules should import from `folders_service::store` — the
//! sample source is re-exported here for convenience.

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::model::Folder;

pub mod sample;

pub use sample::SampleSource;

/// An ordered, organization-scoped supplier of folder records.
///
/// Implementations must return the folders belonging to `org_id` in a
/// stable, deterministic order across repeated calls within a logical
/// session — continuation tokens index into that order, so an unstable
/// source breaks pagination. Errors are returned as-is; retry policy, if
/// any, belongs to the implementation.
#[async_trait]
pub trait FolderSource: Send + Sync {
    async fn fetch_by_org(&self, org_id: Uuid) -> Result<Vec<Folder>>;
}
