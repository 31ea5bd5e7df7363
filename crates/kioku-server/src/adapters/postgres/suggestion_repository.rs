//! PostgreSQL implementation of SuggestionRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use kioku::{DomainError, Suggestion, SuggestionRepository};

use super::parse_column;

/// PostgreSQL implementation of SuggestionRepository
pub struct PgSuggestionRepository {
    pool: PgPool,
}

impl PgSuggestionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn set_flag(&self, sql: &str, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query(sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}

#[derive(sqlx::FromRow)]
struct SuggestionRow {
    id: Uuid,
    owner_id: Uuid,
    suggestion_type: String,
    title: String,
    content: String,
    confidence: f64,
    related_memory_ids: Vec<Uuid>,
    dismissed: bool,
    action_taken: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<SuggestionRow> for Suggestion {
    type Error = DomainError;

    fn try_from(row: SuggestionRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            owner_id: row.owner_id,
            suggestion_type: parse_column("suggestion_type", &row.suggestion_type)?,
            title: row.title,
            content: row.content,
            confidence: row.confidence,
            related_memory_ids: row.related_memory_ids,
            dismissed: row.dismissed,
            action_taken: row.action_taken,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl SuggestionRepository for PgSuggestionRepository {
    async fn insert(&self, suggestion: &Suggestion) -> Result<Suggestion, DomainError> {
        let row = sqlx::query_as::<_, SuggestionRow>(
            r#"
            INSERT INTO suggestions
                (id, owner_id, suggestion_type, title, content, confidence,
                 related_memory_ids, dismissed, action_taken, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(suggestion.id)
        .bind(suggestion.owner_id)
        .bind(suggestion.suggestion_type.to_string())
        .bind(&suggestion.title)
        .bind(&suggestion.content)
        .bind(suggestion.confidence)
        .bind(&suggestion.related_memory_ids)
        .bind(suggestion.dismissed)
        .bind(suggestion.action_taken)
        .bind(suggestion.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        row.try_into()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Suggestion>, DomainError> {
        let row = sqlx::query_as::<_, SuggestionRow>("SELECT * FROM suggestions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        row.map(Suggestion::try_from).transpose()
    }

    async fn find_active_by_owner(
        &self,
        owner_id: Uuid,
        limit: i64,
    ) -> Result<Vec<Suggestion>, DomainError> {
        let rows = sqlx::query_as::<_, SuggestionRow>(
            r#"
            SELECT * FROM suggestions
            WHERE owner_id = $1 AND dismissed = FALSE
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(owner_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        rows.into_iter().map(Suggestion::try_from).collect()
    }

    async fn set_dismissed(&self, id: Uuid) -> Result<bool, DomainError> {
        self.set_flag("UPDATE suggestions SET dismissed = TRUE WHERE id = $1", id)
            .await
    }

    async fn set_action_taken(&self, id: Uuid) -> Result<bool, DomainError> {
        self.set_flag("UPDATE suggestions SET action_taken = TRUE WHERE id = $1", id)
            .await
    }
}
