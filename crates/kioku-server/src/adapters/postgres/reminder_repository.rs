//! PostgreSQL implementation of ReminderRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use kioku::{DomainError, Reminder, ReminderRepository};

use super::parse_column;

/// PostgreSQL implementation of ReminderRepository
pub struct PgReminderRepository {
    pool: PgPool,
}

impl PgReminderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ReminderRow {
    id: Uuid,
    owner_id: Uuid,
    memory_id: Option<Uuid>,
    title: String,
    content: String,
    due_date: DateTime<Utc>,
    completed: bool,
    priority: String,
    ai_generated: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<ReminderRow> for Reminder {
    type Error = DomainError;

    fn try_from(row: ReminderRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            owner_id: row.owner_id,
            memory_id: row.memory_id,
            title: row.title,
            content: row.content,
            due_date: row.due_date,
            completed: row.completed,
            priority: parse_column("priority", &row.priority)?,
            ai_generated: row.ai_generated,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl ReminderRepository for PgReminderRepository {
    async fn insert(&self, reminder: &Reminder) -> Result<Reminder, DomainError> {
        let row = sqlx::query_as::<_, ReminderRow>(
            r#"
            INSERT INTO reminders
                (id, owner_id, memory_id, title, content, due_date, completed, priority, ai_generated, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(reminder.id)
        .bind(reminder.owner_id)
        .bind(reminder.memory_id)
        .bind(&reminder.title)
        .bind(&reminder.content)
        .bind(reminder.due_date)
        .bind(reminder.completed)
        .bind(reminder.priority.to_string())
        .bind(reminder.ai_generated)
        .bind(reminder.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        row.try_into()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Reminder>, DomainError> {
        let row = sqlx::query_as::<_, ReminderRow>("SELECT * FROM reminders WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        row.map(Reminder::try_from).transpose()
    }

    async fn find_pending_by_owner(&self, owner_id: Uuid) -> Result<Vec<Reminder>, DomainError> {
        let rows = sqlx::query_as::<_, ReminderRow>(
            r#"
            SELECT * FROM reminders
            WHERE owner_id = $1 AND completed = FALSE
            ORDER BY due_date ASC
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        rows.into_iter().map(Reminder::try_from).collect()
    }

    async fn set_completed(&self, id: Uuid, completed: bool) -> Result<bool, DomainError> {
        let result = sqlx::query("UPDATE reminders SET completed = $2 WHERE id = $1")
            .bind(id)
            .bind(completed)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM reminders WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
