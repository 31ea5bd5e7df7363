//! PostgreSQL implementation of MemoryRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use kioku::{DomainError, Location, Memory, MemoryRepository, MemoryType, Mood};

use super::{parse_column, parse_optional_column};

const MEMORY_COLUMNS: &str = r#"
    id, owner_id, title, content, memory_type, date, tags,
    location_lat, location_lng, location_name, importance, connections,
    image_storage_id, music_url, music_title, music_artist,
    video_storage_id, video_duration, video_thumbnail_storage_id,
    calendar_date, calendar_end_date, calendar_type,
    mood, is_private, thought_category
"#;

/// PostgreSQL implementation of MemoryRepository
pub struct PgMemoryRepository {
    pool: PgPool,
}

impl PgMemoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_many(
        &self,
        sql: &str,
        owner_id: Uuid,
        key: Option<String>,
    ) -> Result<Vec<Memory>, DomainError> {
        let mut query = sqlx::query_as::<_, MemoryRow>(sql).bind(owner_id);
        if let Some(key) = key {
            query = query.bind(key);
        }

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        rows.into_iter().map(Memory::try_from).collect()
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct MemoryRow {
    id: Uuid,
    owner_id: Uuid,
    title: String,
    content: String,
    memory_type: String,
    date: DateTime<Utc>,
    tags: Vec<String>,
    location_lat: Option<f64>,
    location_lng: Option<f64>,
    location_name: Option<String>,
    importance: i32,
    connections: Vec<Uuid>,
    image_storage_id: Option<String>,
    music_url: Option<String>,
    music_title: Option<String>,
    music_artist: Option<String>,
    video_storage_id: Option<String>,
    video_duration: Option<f64>,
    video_thumbnail_storage_id: Option<String>,
    calendar_date: Option<DateTime<Utc>>,
    calendar_end_date: Option<DateTime<Utc>>,
    calendar_type: Option<String>,
    mood: Option<String>,
    is_private: Option<bool>,
    thought_category: Option<String>,
}

impl TryFrom<MemoryRow> for Memory {
    type Error = DomainError;

    fn try_from(row: MemoryRow) -> Result<Self, Self::Error> {
        let location = match (row.location_lat, row.location_lng, row.location_name) {
            (Some(lat), Some(lng), Some(name)) => Some(Location { lat, lng, name }),
            _ => None,
        };

        Ok(Self {
            id: row.id,
            owner_id: row.owner_id,
            title: row.title,
            content: row.content,
            memory_type: parse_column("memory_type", &row.memory_type)?,
            date: row.date,
            tags: row.tags,
            location,
            importance: row.importance,
            connections: row.connections,
            image_storage_id: row.image_storage_id,
            music_url: row.music_url,
            music_title: row.music_title,
            music_artist: row.music_artist,
            video_storage_id: row.video_storage_id,
            video_duration: row.video_duration,
            video_thumbnail_storage_id: row.video_thumbnail_storage_id,
            calendar_date: row.calendar_date,
            calendar_end_date: row.calendar_end_date,
            calendar_type: parse_optional_column("calendar_type", row.calendar_type)?,
            mood: parse_optional_column("mood", row.mood)?,
            is_private: row.is_private,
            thought_category: parse_optional_column("thought_category", row.thought_category)?,
        })
    }
}

#[async_trait]
impl MemoryRepository for PgMemoryRepository {
    async fn insert(&self, memory: &Memory) -> Result<Memory, DomainError> {
        let sql = format!(
            r#"
            INSERT INTO memories (
                id, owner_id, title, content, memory_type, date, tags,
                location_lat, location_lng, location_name, importance, connections,
                image_storage_id, music_url, music_title, music_artist,
                video_storage_id, video_duration, video_thumbnail_storage_id,
                calendar_date, calendar_end_date, calendar_type,
                mood, is_private, thought_category
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                    $14, $15, $16, $17, $18, $19, $20, $21, $22, $23, $24, $25)
            RETURNING {MEMORY_COLUMNS}
            "#
        );
        let location = memory.location.as_ref();

        let row = sqlx::query_as::<_, MemoryRow>(&sql)
            .bind(memory.id)
            .bind(memory.owner_id)
            .bind(&memory.title)
            .bind(&memory.content)
            .bind(memory.memory_type.to_string())
            .bind(memory.date)
            .bind(&memory.tags)
            .bind(location.map(|l| l.lat))
            .bind(location.map(|l| l.lng))
            .bind(location.map(|l| l.name.clone()))
            .bind(memory.importance)
            .bind(&memory.connections)
            .bind(&memory.image_storage_id)
            .bind(&memory.music_url)
            .bind(&memory.music_title)
            .bind(&memory.music_artist)
            .bind(&memory.video_storage_id)
            .bind(memory.video_duration)
            .bind(&memory.video_thumbnail_storage_id)
            .bind(memory.calendar_date)
            .bind(memory.calendar_end_date)
            .bind(memory.calendar_type.map(|t| t.to_string()))
            .bind(memory.mood.map(|m| m.to_string()))
            .bind(memory.is_private)
            .bind(memory.thought_category.map(|c| c.to_string()))
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        row.try_into()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Memory>, DomainError> {
        let sql = format!("SELECT {MEMORY_COLUMNS} FROM memories WHERE id = $1");
        let row = sqlx::query_as::<_, MemoryRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        row.map(Memory::try_from).transpose()
    }

    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<Memory>, DomainError> {
        let sql = format!("SELECT {MEMORY_COLUMNS} FROM memories WHERE owner_id = $1 ORDER BY seq");
        self.fetch_many(&sql, owner_id, None).await
    }

    async fn find_by_owner_and_type(
        &self,
        owner_id: Uuid,
        memory_type: MemoryType,
    ) -> Result<Vec<Memory>, DomainError> {
        let sql = format!(
            "SELECT {MEMORY_COLUMNS} FROM memories \
             WHERE owner_id = $1 AND memory_type = $2 ORDER BY date DESC, seq DESC"
        );
        self.fetch_many(&sql, owner_id, Some(memory_type.to_string()))
            .await
    }

    async fn find_by_owner_and_mood(
        &self,
        owner_id: Uuid,
        mood: Mood,
    ) -> Result<Vec<Memory>, DomainError> {
        let sql = format!(
            "SELECT {MEMORY_COLUMNS} FROM memories \
             WHERE owner_id = $1 AND mood = $2 ORDER BY date DESC, seq DESC"
        );
        self.fetch_many(&sql, owner_id, Some(mood.to_string())).await
    }

    async fn update(&self, memory: &Memory) -> Result<Memory, DomainError> {
        let sql = format!(
            r#"
            UPDATE memories
            SET title = $2, content = $3, memory_type = $4, tags = $5,
                location_lat = $6, location_lng = $7, location_name = $8,
                importance = $9, connections = $10,
                image_storage_id = $11, music_url = $12, music_title = $13, music_artist = $14,
                video_storage_id = $15, video_duration = $16, video_thumbnail_storage_id = $17,
                calendar_date = $18, calendar_end_date = $19, calendar_type = $20,
                mood = $21, is_private = $22, thought_category = $23
            WHERE id = $1
            RETURNING {MEMORY_COLUMNS}
            "#
        );
        let location = memory.location.as_ref();

        let row = sqlx::query_as::<_, MemoryRow>(&sql)
            .bind(memory.id)
            .bind(&memory.title)
            .bind(&memory.content)
            .bind(memory.memory_type.to_string())
            .bind(&memory.tags)
            .bind(location.map(|l| l.lat))
            .bind(location.map(|l| l.lng))
            .bind(location.map(|l| l.name.clone()))
            .bind(memory.importance)
            .bind(&memory.connections)
            .bind(&memory.image_storage_id)
            .bind(&memory.music_url)
            .bind(&memory.music_title)
            .bind(&memory.music_artist)
            .bind(&memory.video_storage_id)
            .bind(memory.video_duration)
            .bind(&memory.video_thumbnail_storage_id)
            .bind(memory.calendar_date)
            .bind(memory.calendar_end_date)
            .bind(memory.calendar_type.map(|t| t.to_string()))
            .bind(memory.mood.map(|m| m.to_string()))
            .bind(memory.is_private)
            .bind(memory.thought_category.map(|c| c.to_string()))
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        row.ok_or_else(|| DomainError::not_found("Memory"))?
            .try_into()
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM memories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
