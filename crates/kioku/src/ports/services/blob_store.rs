//! Blob Store Port
//!
//! Media bytes never pass through this service. Callers ask for an
//! upload target, send the payload straight to blob storage, then hand
//! the returned key back on a memory create/update.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Time-bounded write target for one upload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadTarget {
    /// Where to send the payload
    pub url: String,
    /// Blob key to reference from a memory once the upload finishes
    pub key: String,
    pub expires_at: DateTime<Utc>,
}

/// Blob storage interface
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Issue a fresh upload target
    async fn create_upload_target(&self) -> Result<UploadTarget, DomainError>;

    /// Turn a blob key into a retrievable URL.
    ///
    /// `Ok(None)` means the blob does not exist; `Err` is reserved for
    /// transport or service failures.
    async fn resolve(&self, key: &str) -> Result<Option<String>, DomainError>;
}
