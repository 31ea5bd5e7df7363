//! Suggestion Application Service (Use Case)
//!
//! Suggestions are produced elsewhere; this service lists them and
//! records the owner's reaction.

use std::sync::Arc;
use uuid::Uuid;

use kioku::domain::{owned_or_not_found, require_caller};
use kioku::{
    BlobStore, DomainError, MemoryRepository, ResolvedMemory, Suggestion, SuggestionRepository,
};

use super::MemoryService;

/// Upper bound for a single listing
pub const MAX_SUGGESTION_LIMIT: i64 = 50;

/// Application service for Suggestion operations
pub struct SuggestionService<S: SuggestionRepository> {
    repo: Arc<S>,
    default_limit: i64,
}

impl<S: SuggestionRepository> SuggestionService<S> {
    pub fn new(repo: Arc<S>, default_limit: i64) -> Self {
        Self {
            repo,
            default_limit: default_limit.clamp(1, MAX_SUGGESTION_LIMIT),
        }
    }

    /// Caller's non-dismissed suggestions, newest first
    pub async fn list_active(
        &self,
        caller: Option<Uuid>,
        limit: Option<i64>,
    ) -> Result<Vec<Suggestion>, DomainError> {
        let Some(caller) = caller else {
            return Ok(Vec::new());
        };

        let limit = match limit {
            Some(l) if l < 1 => {
                return Err(DomainError::invalid(format!(
                    "limit must be positive, got {l}"
                )))
            }
            Some(l) => l.min(MAX_SUGGESTION_LIMIT),
            None => self.default_limit,
        };

        self.repo.find_active_by_owner(caller, limit).await
    }

    pub async fn dismiss(&self, caller: Option<Uuid>, id: Uuid) -> Result<Uuid, DomainError> {
        let caller = require_caller(caller)?;
        owned_or_not_found(caller, self.repo.find_by_id(id).await?, "Suggestion")?;

        if !self.repo.set_dismissed(id).await? {
            return Err(DomainError::not_found("Suggestion"));
        }

        tracing::info!("Dismissed suggestion {}", id);

        Ok(id)
    }

    pub async fn mark_acted(&self, caller: Option<Uuid>, id: Uuid) -> Result<Uuid, DomainError> {
        let caller = require_caller(caller)?;
        owned_or_not_found(caller, self.repo.find_by_id(id).await?, "Suggestion")?;

        if !self.repo.set_action_taken(id).await? {
            return Err(DomainError::not_found("Suggestion"));
        }
        Ok(id)
    }

    /// Memories a suggestion points at. Dangling references are skipped.
    pub async fn related_memories<R, B>(
        &self,
        caller: Option<Uuid>,
        id: Uuid,
        memories: &MemoryService<R, B>,
    ) -> Result<Vec<ResolvedMemory>, DomainError>
    where
        R: MemoryRepository,
        B: BlobStore,
    {
        let Some(caller_id) = caller else {
            return Ok(Vec::new());
        };
        let suggestion =
            owned_or_not_found(caller_id, self.repo.find_by_id(id).await?, "Suggestion")?;

        let mut related = Vec::with_capacity(suggestion.related_memory_ids.len());
        for memory_id in &suggestion.related_memory_ids {
            match memories.get(caller, *memory_id).await? {
                Some(memory) => related.push(memory),
                None => tracing::debug!(
                    "Suggestion {} references missing memory {}",
                    id,
                    memory_id
                ),
            }
        }
        Ok(related)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::in_memory::{
        InMemoryBlobStore, InMemoryMemoryRepository, InMemorySuggestionRepository,
    };
    use chrono::{Duration, Utc};
    use kioku::{MemoryDetails, MemoryDraft, SuggestionType};

    struct Fixture {
        suggestions: SuggestionService<InMemorySuggestionRepository>,
        repo: Arc<InMemorySuggestionRepository>,
        memories: MemoryService<InMemoryMemoryRepository, InMemoryBlobStore>,
    }

    fn fixture() -> Fixture {
        let repo = Arc::new(InMemorySuggestionRepository::default());
        Fixture {
            suggestions: SuggestionService::new(repo.clone(), 3),
            repo,
            memories: MemoryService::new(
                Arc::new(InMemoryMemoryRepository::default()),
                Arc::new(InMemoryBlobStore::default()),
            ),
        }
    }

    async fn seed(
        repo: &InMemorySuggestionRepository,
        owner: Uuid,
        title: &str,
        age_minutes: i64,
        related: Vec<Uuid>,
    ) -> Suggestion {
        let mut suggestion = Suggestion::new(
            owner,
            SuggestionType::Anniversary,
            title.to_string(),
            "It has been a year".to_string(),
            0.8,
            related,
        );
        suggestion.created_at = Utc::now() - Duration::minutes(age_minutes);
        repo.insert(&suggestion).await.unwrap()
    }

    #[tokio::test]
    async fn test_list_active_newest_first_with_default_limit() {
        let f = fixture();
        let owner = Uuid::new_v4();
        for (i, title) in ["d", "c", "b", "a"].iter().enumerate() {
            seed(&f.repo, owner, title, i as i64, vec![]).await;
        }
        seed(&f.repo, Uuid::new_v4(), "foreign", 0, vec![]).await;

        let titles: Vec<String> = f
            .suggestions
            .list_active(Some(owner), None)
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.title)
            .collect();
        assert_eq!(titles, vec!["d", "c", "b"]);

        assert_eq!(
            f.suggestions
                .list_active(Some(owner), Some(500))
                .await
                .unwrap()
                .len(),
            4
        );
        assert!(f.suggestions.list_active(None, None).await.unwrap().is_empty());
        assert!(matches!(
            f.suggestions.list_active(Some(owner), Some(0)).await,
            Err(DomainError::InvalidArgument(_))
        ));
    }

    #[tokio::test]
    async fn test_dismiss_hides_suggestion() {
        let f = fixture();
        let owner = Uuid::new_v4();
        let s = seed(&f.repo, owner, "gift idea", 0, vec![]).await;

        f.suggestions.dismiss(Some(owner), s.id).await.unwrap();

        assert!(f
            .suggestions
            .list_active(Some(owner), None)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_dismiss_requires_ownership() {
        let f = fixture();
        let owner = Uuid::new_v4();
        let s = seed(&f.repo, owner, "gift idea", 0, vec![]).await;

        assert!(matches!(
            f.suggestions.dismiss(Some(Uuid::new_v4()), s.id).await,
            Err(DomainError::NotFoundOrUnauthorized { .. })
        ));
        assert!(matches!(
            f.suggestions.dismiss(None, s.id).await,
            Err(DomainError::Unauthenticated)
        ));
        assert!(matches!(
            f.suggestions.mark_acted(Some(Uuid::new_v4()), s.id).await,
            Err(DomainError::NotFoundOrUnauthorized { .. })
        ));
        assert_eq!(
            f.suggestions.list_active(Some(owner), None).await.unwrap().len(),
            1
        );
    }

    #[tokio::test]
    async fn test_mark_acted() {
        let f = fixture();
        let owner = Uuid::new_v4();
        let s = seed(&f.repo, owner, "plan dinner", 0, vec![]).await;

        f.suggestions.mark_acted(Some(owner), s.id).await.unwrap();

        let stored = f.repo.find_by_id(s.id).await.unwrap().unwrap();
        assert!(stored.action_taken);
        assert!(!stored.dismissed);
    }

    #[tokio::test]
    async fn test_deleted_memory_leaves_dangling_reference() {
        let f = fixture();
        let owner = Uuid::new_v4();
        let draft = MemoryDraft::new("Wedding", "Best day", 10, MemoryDetails::Event);
        let kept = f.memories.create(Some(owner), draft.clone()).await.unwrap();
        let deleted = f.memories.create(Some(owner), draft).await.unwrap();
        let s = seed(&f.repo, owner, "anniversary", 0, vec![kept, deleted]).await;

        f.memories.delete(Some(owner), deleted).await.unwrap();

        let stored = f.repo.find_by_id(s.id).await.unwrap().unwrap();
        assert_eq!(stored.related_memory_ids, vec![kept, deleted]);
        assert!(f.memories.get(Some(owner), deleted).await.unwrap().is_none());

        let related = f
            .suggestions
            .related_memories(Some(owner), s.id, &f.memories)
            .await
            .unwrap();
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].memory.id, kept);
    }
}
