//! Blob Reference Resolver
//!
//! Attaches retrievable URLs to photo and video memories right before
//! they leave the service. A key the blob store does not know degrades
//! to an absent URL; transport failures propagate.

use futures::future::try_join_all;

use kioku::{BlobStore, DomainError, Memory, MemoryType, ResolvedMemory};

async fn resolve_key<B: BlobStore + ?Sized>(
    blobs: &B,
    memory: &Memory,
    key: Option<&String>,
) -> Result<Option<String>, DomainError> {
    let Some(key) = key else {
        return Ok(None);
    };

    let url = blobs.resolve(key).await?;
    if url.is_none() {
        tracing::warn!("Blob {} for memory {} is missing", key, memory.id);
    }
    Ok(url)
}

/// Resolve the media locations of one memory
pub async fn resolve_media<B: BlobStore + ?Sized>(
    blobs: &B,
    memory: Memory,
) -> Result<ResolvedMemory, DomainError> {
    let mut resolved = ResolvedMemory::unresolved(memory);
    if !resolved.memory.memory_type.has_media() {
        return Ok(resolved);
    }
    let memory = &resolved.memory;

    match memory.memory_type {
        MemoryType::Photo => {
            resolved.image_url =
                resolve_key(blobs, memory, memory.image_storage_id.as_ref()).await?;
        }
        MemoryType::Video if memory.video_storage_id.is_some() => {
            let (video_url, thumbnail_url) = tokio::try_join!(
                resolve_key(blobs, memory, memory.video_storage_id.as_ref()),
                resolve_key(blobs, memory, memory.video_thumbnail_storage_id.as_ref()),
            )?;
            resolved.video_url = video_url;
            resolved.video_thumbnail_url = thumbnail_url;
        }
        _ => {}
    }

    Ok(resolved)
}

/// Resolve a batch concurrently, keeping input order
pub async fn resolve_media_all<B: BlobStore + ?Sized>(
    blobs: &B,
    memories: Vec<Memory>,
) -> Result<Vec<ResolvedMemory>, DomainError> {
    try_join_all(
        memories
            .into_iter()
            .map(|memory| resolve_media(blobs, memory)),
    )
    .await
}
