//! Reminder Application Service (Use Case)

use std::sync::Arc;
use uuid::Uuid;

use kioku::domain::{owned_or_not_found, require_caller};
use kioku::{DomainError, Reminder, ReminderDraft, ReminderRepository};

/// Application service for Reminder operations
pub struct ReminderService<R: ReminderRepository> {
    repo: Arc<R>,
}

impl<R: ReminderRepository> ReminderService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Create a reminder owned by the caller.
    ///
    /// `memory_id` is stored as given; it is not checked against the store.
    pub async fn create(
        &self,
        caller: Option<Uuid>,
        draft: ReminderDraft,
    ) -> Result<Reminder, DomainError> {
        let owner_id = require_caller(caller)?;
        draft.validate()?;

        let saved = self.repo.insert(&Reminder::new(owner_id, draft)).await?;

        tracing::info!("Created reminder {} due {}", saved.id, saved.due_date);

        Ok(saved)
    }

    /// Caller's open reminders, earliest due first
    pub async fn list_pending(&self, caller: Option<Uuid>) -> Result<Vec<Reminder>, DomainError> {
        match caller {
            Some(caller) => self.repo.find_pending_by_owner(caller).await,
            None => Ok(Vec::new()),
        }
    }

    /// Mark a reminder done
    pub async fn complete(&self, caller: Option<Uuid>, id: Uuid) -> Result<Uuid, DomainError> {
        let caller = require_caller(caller)?;
        owned_or_not_found(caller, self.repo.find_by_id(id).await?, "Reminder")?;

        if !self.repo.set_completed(id, true).await? {
            return Err(DomainError::not_found("Reminder"));
        }
        Ok(id)
    }

    pub async fn delete(&self, caller: Option<Uuid>, id: Uuid) -> Result<Uuid, DomainError> {
        let caller = require_caller(caller)?;
        owned_or_not_found(caller, self.repo.find_by_id(id).await?, "Reminder")?;

        if !self.repo.delete(id).await? {
            return Err(DomainError::not_found("Reminder"));
        }

        tracing::info!("Deleted reminder {}", id);

        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::in_memory::InMemoryReminderRepository;
    use chrono::{Duration, Utc};
    use kioku::ReminderPriority;

    fn service() -> ReminderService<InMemoryReminderRepository> {
        ReminderService::new(Arc::new(InMemoryReminderRepository::default()))
    }

    fn draft(title: &str, due_in_days: i64) -> ReminderDraft {
        ReminderDraft {
            memory_id: None,
            title: title.to_string(),
            content: String::new(),
            due_date: Utc::now() + Duration::days(due_in_days),
            priority: ReminderPriority::High,
            ai_generated: false,
        }
    }

    #[tokio::test]
    async fn test_pending_sorted_by_due_date() {
        let service = service();
        let owner = Uuid::new_v4();

        service.create(Some(owner), draft("later", 5)).await.unwrap();
        service.create(Some(owner), draft("soon", 1)).await.unwrap();
        let done = service.create(Some(owner), draft("done", 0)).await.unwrap();
        service.complete(Some(owner), done.id).await.unwrap();

        let titles: Vec<String> = service
            .list_pending(Some(owner))
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(titles, vec!["soon", "later"]);
    }

    #[tokio::test]
    async fn test_ownership() {
        let service = service();
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();
        let reminder = service.create(Some(owner), draft("mine", 1)).await.unwrap();

        assert!(service.list_pending(Some(stranger)).await.unwrap().is_empty());
        assert!(service.list_pending(None).await.unwrap().is_empty());
        assert!(matches!(
            service.complete(Some(stranger), reminder.id).await,
            Err(DomainError::NotFoundOrUnauthorized { .. })
        ));
        assert!(matches!(
            service.delete(Some(stranger), reminder.id).await,
            Err(DomainError::NotFoundOrUnauthorized { .. })
        ));
        assert!(matches!(
            service.create(None, draft("anon", 1)).await,
            Err(DomainError::Unauthenticated)
        ));

        service.delete(Some(owner), reminder.id).await.unwrap();
        assert!(service.list_pending(Some(owner)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_dangling_memory_reference_is_accepted() {
        let service = service();
        let mut d = draft("follow up", 2);
        d.memory_id = Some(Uuid::new_v4());

        let reminder = service.create(Some(Uuid::new_v4()), d.clone()).await.unwrap();
        assert_eq!(reminder.memory_id, d.memory_id);
        assert!(!reminder.completed);
    }
}
