//! Reminder DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use kioku::{Reminder, ReminderDraft, ReminderPriority};

/// Create reminder request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateReminderRequest {
    /// Memory this reminder follows up on
    pub memory_id: Option<Uuid>,
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub due_date: DateTime<Utc>,
    #[serde(default)]
    pub priority: ReminderPriority,
    #[serde(default)]
    pub ai_generated: bool,
}

impl From<CreateReminderRequest> for ReminderDraft {
    fn from(req: CreateReminderRequest) -> Self {
        Self {
            memory_id: req.memory_id,
            title: req.title,
            content: req.content,
            due_date: req.due_date,
            priority: req.priority,
            ai_generated: req.ai_generated,
        }
    }
}

/// Reminder response
#[derive(Debug, Serialize, ToSchema)]
pub struct ReminderResponse {
    pub id: Uuid,
    pub memory_id: Option<Uuid>,
    pub title: String,
    pub content: String,
    pub due_date: DateTime<Utc>,
    pub completed: bool,
    pub priority: ReminderPriority,
    pub ai_generated: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Reminder> for ReminderResponse {
    fn from(r: Reminder) -> Self {
        Self {
            id: r.id,
            memory_id: r.memory_id,
            title: r.title,
            content: r.content,
            due_date: r.due_date,
            completed: r.completed,
            priority: r.priority,
            ai_generated: r.ai_generated,
            created_at: r.created_at,
        }
    }
}
