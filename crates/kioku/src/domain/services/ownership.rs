//! Ownership Guard
//!
//! Every record has exactly one owner. A record is visible and mutable
//! only to a caller whose identity equals its `owner_id`; to anyone else
//! it behaves exactly like a record that does not exist.

use uuid::Uuid;

use crate::domain::entities::{Memory, Reminder, ResolvedMemory, Suggestion};
use crate::domain::errors::DomainError;

/// A record with a single, immutable owner
pub trait Owned {
    fn owner_id(&self) -> Uuid;

    fn is_owned_by(&self, caller: Uuid) -> bool {
        self.owner_id() == caller
    }
}

impl Owned for Memory {
    fn owner_id(&self) -> Uuid {
        self.owner_id
    }
}

impl Owned for ResolvedMemory {
    fn owner_id(&self) -> Uuid {
        self.memory.owner_id
    }
}

impl Owned for Reminder {
    fn owner_id(&self) -> Uuid {
        self.owner_id
    }
}

impl Owned for Suggestion {
    fn owner_id(&self) -> Uuid {
        self.owner_id
    }
}

/// Demand a caller identity for a write
pub fn require_caller(caller: Option<Uuid>) -> Result<Uuid, DomainError> {
    caller.ok_or(DomainError::Unauthenticated)
}

/// Keep `record` only if `caller` owns it
pub fn visible_to<T: Owned>(caller: Uuid, record: Option<T>) -> Option<T> {
    record.filter(|r| r.is_owned_by(caller))
}

/// Like [`visible_to`], but an invisible record is an error
pub fn owned_or_not_found<T: Owned>(
    caller: Uuid,
    record: Option<T>,
    entity_type: &str,
) -> Result<T, DomainError> {
    visible_to(caller, record).ok_or_else(|| DomainError::not_found(entity_type))
}
