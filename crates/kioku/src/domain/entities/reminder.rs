//! Reminder - A dated to-do with an optional weak link to a memory

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::value_objects::ReminderPriority;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: Uuid,
    pub owner_id: Uuid,
    /// Memory this reminder was created from (may dangle)
    pub memory_id: Option<Uuid>,
    pub title: String,
    pub content: String,
    pub due_date: DateTime<Utc>,
    pub completed: bool,
    pub priority: ReminderPriority,
    pub ai_generated: bool,
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied fields for a new reminder
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderDraft {
    pub memory_id: Option<Uuid>,
    pub title: String,
    pub content: String,
    pub due_date: DateTime<Utc>,
    pub priority: ReminderPriority,
    pub ai_generated: bool,
}

impl ReminderDraft {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::invalid("title must not be empty"));
        }
        Ok(())
    }
}

impl Reminder {
    /// Create a new, uncompleted reminder with generated ID and timestamp
    pub fn new(owner_id: Uuid, draft: ReminderDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            memory_id: draft.memory_id,
            title: draft.title,
            content: draft.content,
            due_date: draft.due_date,
            completed: false,
            priority: draft.priority,
            ai_generated: draft.ai_generated,
            created_at: Utc::now(),
        }
    }
}
