//! Suggestion Repository Port

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, Suggestion};

/// Repository interface for Suggestion entities
#[async_trait]
pub trait SuggestionRepository: Send + Sync {
    /// Insert a suggestion (used by the external producer)
    async fn insert(&self, suggestion: &Suggestion) -> Result<Suggestion, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Suggestion>, DomainError>;

    /// Non-dismissed suggestions of an owner, newest first, at most `limit`
    async fn find_active_by_owner(
        &self,
        owner_id: Uuid,
        limit: i64,
    ) -> Result<Vec<Suggestion>, DomainError>;

    async fn set_dismissed(&self, id: Uuid) -> Result<bool, DomainError>;

    async fn set_action_taken(&self, id: Uuid) -> Result<bool, DomainError>;
}
