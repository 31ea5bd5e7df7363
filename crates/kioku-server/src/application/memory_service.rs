//! Memory Application Service (Use Case)
//!
//! Owner-scoped CRUD over memories plus the timeline and map reads.
//! Reads without a caller return nothing; writes without one fail.

use std::sync::Arc;
use uuid::Uuid;

use kioku::domain::{owned_or_not_found, require_caller, visible_to};
use kioku::{
    layout_map, timeline, BlobStore, DomainError, MapEdge, MapPlacement, MemoryDraft,
    MemoryRepository, MemoryType, Memory, Mood, ResolvedMemory, UploadTarget,
};

use super::media::{resolve_media, resolve_media_all};

/// Map view: one placement per memory (enumeration order) and the edges
#[derive(Debug, Clone, Default)]
pub struct MemoryMap {
    pub nodes: Vec<(ResolvedMemory, MapPlacement)>,
    pub edges: Vec<MapEdge>,
}

/// Application service for Memory operations
pub struct MemoryService<R: MemoryRepository, B: BlobStore> {
    repo: Arc<R>,
    blobs: Arc<B>,
}

impl<R: MemoryRepository, B: BlobStore> MemoryService<R, B> {
    pub fn new(repo: Arc<R>, blobs: Arc<B>) -> Self {
        Self { repo, blobs }
    }

    /// Create a memory owned by the caller and return its ID
    pub async fn create(
        &self,
        caller: Option<Uuid>,
        draft: MemoryDraft,
    ) -> Result<Uuid, DomainError> {
        let owner_id = require_caller(caller)?;
        draft.validate()?;

        let memory = Memory::new(owner_id, draft);
        let saved = self.repo.insert(&memory).await?;

        tracing::info!(
            "Created {} memory {} for {}",
            saved.memory_type,
            saved.id,
            owner_id
        );

        Ok(saved.id)
    }

    /// Get one memory with media resolved, `None` unless the caller owns it
    pub async fn get(
        &self,
        caller: Option<Uuid>,
        id: Uuid,
    ) -> Result<Option<ResolvedMemory>, DomainError> {
        let Some(caller) = caller else {
            return Ok(None);
        };

        match visible_to(caller, self.repo.find_by_id(id).await?) {
            Some(memory) => Ok(Some(resolve_media(self.blobs.as_ref(), memory).await?)),
            None => Ok(None),
        }
    }

    /// All of the caller's memories in store enumeration order
    pub async fn list(&self, caller: Option<Uuid>) -> Result<Vec<ResolvedMemory>, DomainError> {
        let Some(caller) = caller else {
            return Ok(Vec::new());
        };

        let memories = self.repo.find_by_owner(caller).await?;
        resolve_media_all(self.blobs.as_ref(), memories).await
    }

    /// Caller's memories of one type, newest first
    pub async fn list_by_type(
        &self,
        caller: Option<Uuid>,
        memory_type: MemoryType,
    ) -> Result<Vec<ResolvedMemory>, DomainError> {
        let Some(caller) = caller else {
            return Ok(Vec::new());
        };

        let memories = self
            .repo
            .find_by_owner_and_type(caller, memory_type)
            .await?;
        resolve_media_all(self.blobs.as_ref(), memories).await
    }

    /// Caller's memories with one mood, newest first
    pub async fn list_by_mood(
        &self,
        caller: Option<Uuid>,
        mood: Mood,
    ) -> Result<Vec<ResolvedMemory>, DomainError> {
        let Some(caller) = caller else {
            return Ok(Vec::new());
        };

        let memories = self.repo.find_by_owner_and_mood(caller, mood).await?;
        resolve_media_all(self.blobs.as_ref(), memories).await
    }

    /// Caller's memories, newest first
    pub async fn timeline(
        &self,
        caller: Option<Uuid>,
    ) -> Result<Vec<ResolvedMemory>, DomainError> {
        Ok(timeline(self.list(caller).await?))
    }

    /// Caller's memories laid out on the map
    pub async fn map(&self, caller: Option<Uuid>) -> Result<MemoryMap, DomainError> {
        let memories = self.list(caller).await?;
        let layout = layout_map(&memories);

        Ok(MemoryMap {
            nodes: memories.into_iter().zip(layout.placements).collect(),
            edges: layout.edges,
        })
    }

    /// Replace every editable field of a memory the caller owns
    pub async fn update(
        &self,
        caller: Option<Uuid>,
        id: Uuid,
        draft: MemoryDraft,
    ) -> Result<Uuid, DomainError> {
        let caller = require_caller(caller)?;
        draft.validate()?;

        let mut memory = owned_or_not_found(caller, self.repo.find_by_id(id).await?, "Memory")?;
        memory.apply(draft);
        self.repo.update(&memory).await?;

        tracing::info!("Updated memory {}", id);

        Ok(id)
    }

    /// Hard-delete a memory the caller owns.
    ///
    /// Blobs and references held by other records are left as they are.
    pub async fn delete(&self, caller: Option<Uuid>, id: Uuid) -> Result<Uuid, DomainError> {
        let caller = require_caller(caller)?;
        owned_or_not_found(caller, self.repo.find_by_id(id).await?, "Memory")?;

        if !self.repo.delete(id).await? {
            return Err(DomainError::not_found("Memory"));
        }

        tracing::info!("Deleted memory {}", id);

        Ok(id)
    }

    /// Hand out a one-off upload target for media
    pub async fn request_upload_target(
        &self,
        caller: Option<Uuid>,
    ) -> Result<UploadTarget, DomainError> {
        require_caller(caller)?;
        self.blobs.create_upload_target().await
    }
}
