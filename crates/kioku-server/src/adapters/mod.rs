//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod blob;
pub mod identity;
pub mod postgres;
mod signing;

#[cfg(test)]
pub mod in_memory;

// Re-exports
pub use blob::{BlobConfig, SignedUrlBlobStore};
pub use identity::SignedTokenIdentity;
pub use postgres::{PgMemoryRepository, PgReminderRepository, PgSuggestionRepository};
