//! Reminder Repository Port

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, Reminder};

/// Repository interface for Reminder entities
#[async_trait]
pub trait ReminderRepository: Send + Sync {
    async fn insert(&self, reminder: &Reminder) -> Result<Reminder, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Reminder>, DomainError>;

    /// Uncompleted reminders of an owner, earliest due date first
    async fn find_pending_by_owner(&self, owner_id: Uuid) -> Result<Vec<Reminder>, DomainError>;

    async fn set_completed(&self, id: Uuid, completed: bool) -> Result<bool, DomainError>;

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
