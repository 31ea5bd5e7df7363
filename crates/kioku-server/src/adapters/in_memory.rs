//! In-memory port implementations for application tests

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashSet;
use tokio::sync::RwLock;
use uuid::Uuid;

use kioku::{
    BlobStore, DomainError, Memory, MemoryRepository, MemoryType, Mood, Reminder,
    ReminderRepository, Suggestion, SuggestionRepository, UploadTarget,
};

/// Memories kept in insertion order
#[derive(Default)]
pub struct InMemoryMemoryRepository {
    rows: RwLock<Vec<Memory>>,
}

impl InMemoryMemoryRepository {
    /// Overwrite a stored creation date, keeping enumeration order
    pub async fn set_date(&self, id: Uuid, date: DateTime<Utc>) {
        if let Some(m) = self.rows.write().await.iter_mut().find(|m| m.id == id) {
            m.date = date;
        }
    }

    fn newest_first(mut memories: Vec<Memory>) -> Vec<Memory> {
        memories.reverse();
        memories.sort_by(|a, b| b.date.cmp(&a.date));
        memories
    }
}

#[async_trait]
impl MemoryRepository for InMemoryMemoryRepository {
    async fn insert(&self, memory: &Memory) -> Result<Memory, DomainError> {
        self.rows.write().await.push(memory.clone());
        Ok(memory.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Memory>, DomainError> {
        Ok(self.rows.read().await.iter().find(|m| m.id == id).cloned())
    }

    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<Memory>, DomainError> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|m| m.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn find_by_owner_and_type(
        &self,
        owner_id: Uuid,
        memory_type: MemoryType,
    ) -> Result<Vec<Memory>, DomainError> {
        let rows = self.find_by_owner(owner_id).await?;
        Ok(Self::newest_first(
            rows.into_iter()
                .filter(|m| m.memory_type == memory_type)
                .collect(),
        ))
    }

    async fn find_by_owner_and_mood(
        &self,
        owner_id: Uuid,
        mood: Mood,
    ) -> Result<Vec<Memory>, DomainError> {
        let rows = self.find_by_owner(owner_id).await?;
        Ok(Self::newest_first(
            rows.into_iter().filter(|m| m.mood == Some(mood)).collect(),
        ))
    }

    async fn update(&self, memory: &Memory) -> Result<Memory, DomainError> {
        let mut rows = self.rows.write().await;
        let row = rows
            .iter_mut()
            .find(|m| m.id == memory.id)
            .ok_or_else(|| DomainError::not_found("Memory"))?;

        let (owner_id, date) = (row.owner_id, row.date);
        *row = Memory {
            owner_id,
            date,
            ..memory.clone()
        };
        Ok(row.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|m| m.id != id);
        Ok(rows.len() < before)
    }
}

#[derive(Default)]
pub struct InMemoryReminderRepository {
    rows: RwLock<Vec<Reminder>>,
}

#[async_trait]
impl ReminderRepository for InMemoryReminderRepository {
    async fn insert(&self, reminder: &Reminder) -> Result<Reminder, DomainError> {
        self.rows.write().await.push(reminder.clone());
        Ok(reminder.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Reminder>, DomainError> {
        Ok(self.rows.read().await.iter().find(|r| r.id == id).cloned())
    }

    async fn find_pending_by_owner(&self, owner_id: Uuid) -> Result<Vec<Reminder>, DomainError> {
        let mut pending: Vec<Reminder> = self
            .rows
            .read()
            .await
            .iter()
            .filter(|r| r.owner_id == owner_id && !r.completed)
            .cloned()
            .collect();
        pending.sort_by(|a, b| a.due_date.cmp(&b.due_date));
        Ok(pending)
    }

    async fn set_completed(&self, id: Uuid, completed: bool) -> Result<bool, DomainError> {
        let mut rows = self.rows.write().await;
        match rows.iter_mut().find(|r| r.id == id) {
            Some(r) => {
                r.completed = completed;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|r| r.id != id);
        Ok(rows.len() < before)
    }
}

#[derive(Default)]
pub struct InMemorySuggestionRepository {
    rows: RwLock<Vec<Suggestion>>,
}

impl InMemorySuggestionRepository {
    async fn update_flag(
        &self,
        id: Uuid,
        apply: impl FnOnce(&mut Suggestion),
    ) -> Result<bool, DomainError> {
        let mut rows = self.rows.write().await;
        match rows.iter_mut().find(|s| s.id == id) {
            Some(s) => {
                apply(s);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl SuggestionRepository for InMemorySuggestionRepository {
    async fn insert(&self, suggestion: &Suggestion) -> Result<Suggestion, DomainError> {
        self.rows.write().await.push(suggestion.clone());
        Ok(suggestion.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Suggestion>, DomainError> {
        Ok(self.rows.read().await.iter().find(|s| s.id == id).cloned())
    }

    async fn find_active_by_owner(
        &self,
        owner_id: Uuid,
        limit: i64,
    ) -> Result<Vec<Suggestion>, DomainError> {
        let mut active: Vec<Suggestion> = self
            .rows
            .read()
            .await
            .iter()
            .filter(|s| s.owner_id == owner_id && !s.dismissed)
            .cloned()
            .collect();
        active.reverse();
        active.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        active.truncate(limit.max(0) as usize);
        Ok(active)
    }

    async fn set_dismissed(&self, id: Uuid) -> Result<bool, DomainError> {
        self.update_flag(id, |s| s.dismissed = true).await
    }

    async fn set_action_taken(&self, id: Uuid) -> Result<bool, DomainError> {
        self.update_flag(id, |s| s.action_taken = true).await
    }
}

/// Blob store backed by a set of known keys
#[derive(Default)]
pub struct InMemoryBlobStore {
    keys: RwLock<HashSet<String>>,
    /// Simulate an unreachable backend
    pub unavailable: bool,
}

impl InMemoryBlobStore {
    pub fn unavailable() -> Self {
        Self {
            keys: RwLock::default(),
            unavailable: true,
        }
    }

    pub async fn put(&self, key: &str) {
        self.keys.write().await.insert(key.to_string());
    }

    pub async fn remove(&self, key: &str) {
        self.keys.write().await.remove(key);
    }

    pub fn url_for(key: &str) -> String {
        format!("memory://blobs/{key}")
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn create_upload_target(&self) -> Result<UploadTarget, DomainError> {
        if self.unavailable {
            return Err(DomainError::ExternalService("blob store down".to_string()));
        }
        let key = Uuid::new_v4().to_string();
        Ok(UploadTarget {
            url: format!("memory://upload/{key}"),
            key,
            expires_at: Utc::now() + Duration::minutes(15),
        })
    }

    async fn resolve(&self, key: &str) -> Result<Option<String>, DomainError> {
        if self.unavailable {
            return Err(DomainError::ExternalService("blob store down".to_string()));
        }
        Ok(self
            .keys
            .read()
            .await
            .contains(key)
            .then(|| Self::url_for(key)))
    }
}
