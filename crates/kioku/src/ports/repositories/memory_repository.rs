//! Memory Repository Port
//!
//! Abstract interface for Memory persistence operations.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, Memory, MemoryType, Mood};

/// Repository interface for Memory entities
#[async_trait]
pub trait MemoryRepository: Send + Sync {
    /// Insert a new memory
    async fn insert(&self, memory: &Memory) -> Result<Memory, DomainError>;

    /// Find a memory by ID regardless of owner
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Memory>, DomainError>;

    /// All memories of an owner, in store enumeration (insertion) order
    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<Memory>, DomainError>;

    /// Memories of an owner with the given type, newest first
    async fn find_by_owner_and_type(
        &self,
        owner_id: Uuid,
        memory_type: MemoryType,
    ) -> Result<Vec<Memory>, DomainError>;

    /// Memories of an owner with the given mood, newest first
    async fn find_by_owner_and_mood(
        &self,
        owner_id: Uuid,
        mood: Mood,
    ) -> Result<Vec<Memory>, DomainError>;

    /// Overwrite the editable fields of an existing memory.
    ///
    /// `id`, `owner_id` and `date` are never written.
    async fn update(&self, memory: &Memory) -> Result<Memory, DomainError>;

    /// Delete a memory by ID
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
