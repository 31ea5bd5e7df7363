//! Memory DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use kioku::{
    CalendarType, DomainError, Location, MapEdge, MapPlacement, MemoryDetails, MemoryDraft,
    MemoryType, Mood, ResolvedMemory, ThoughtCategory, UploadTarget,
};

// ============================================
// Request DTOs
// ============================================

/// Create/replace memory request.
///
/// Flat like the stored record, but only the fields of `memory_type`
/// may be set.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct MemoryRequest {
    pub title: String,
    pub content: String,
    /// event, photo, music, video, calendar or thought
    pub memory_type: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub location: Option<Location>,
    /// Importance score (1 - 10)
    pub importance: i32,

    pub image_storage_id: Option<String>,

    pub music_url: Option<String>,
    pub music_title: Option<String>,
    pub music_artist: Option<String>,

    pub video_storage_id: Option<String>,
    pub video_duration: Option<f64>,
    pub video_thumbnail_storage_id: Option<String>,

    pub calendar_date: Option<DateTime<Utc>>,
    pub calendar_end_date: Option<DateTime<Utc>>,
    pub calendar_type: Option<CalendarType>,

    pub mood: Option<Mood>,
    pub is_private: Option<bool>,
    pub thought_category: Option<ThoughtCategory>,
}

impl MemoryRequest {
    /// Names of the type-specific fields that carry a value
    fn present_detail_fields(&self) -> Vec<(&'static str, MemoryType)> {
        let candidates = [
            ("image_storage_id", MemoryType::Photo, self.image_storage_id.is_some()),
            ("music_url", MemoryType::Music, self.music_url.is_some()),
            ("music_title", MemoryType::Music, self.music_title.is_some()),
            ("music_artist", MemoryType::Music, self.music_artist.is_some()),
            ("video_storage_id", MemoryType::Video, self.video_storage_id.is_some()),
            ("video_duration", MemoryType::Video, self.video_duration.is_some()),
            (
                "video_thumbnail_storage_id",
                MemoryType::Video,
                self.video_thumbnail_storage_id.is_some(),
            ),
            ("calendar_date", MemoryType::Calendar, self.calendar_date.is_some()),
            ("calendar_end_date", MemoryType::Calendar, self.calendar_end_date.is_some()),
            ("calendar_type", MemoryType::Calendar, self.calendar_type.is_some()),
            ("mood", MemoryType::Thought, self.mood.is_some()),
            ("is_private", MemoryType::Thought, self.is_private.is_some()),
            ("thought_category", MemoryType::Thought, self.thought_category.is_some()),
        ];

        candidates
            .into_iter()
            .filter(|(_, _, present)| *present)
            .map(|(name, owner, _)| (name, owner))
            .collect()
    }
}

impl TryFrom<MemoryRequest> for MemoryDraft {
    type Error = DomainError;

    fn try_from(req: MemoryRequest) -> Result<Self, Self::Error> {
        let memory_type: MemoryType = req.memory_type.parse().map_err(DomainError::invalid)?;

        if let Some((field, owner)) = req
            .present_detail_fields()
            .into_iter()
            .find(|(_, owner)| *owner != memory_type)
        {
            return Err(DomainError::invalid(format!(
                "field '{}' belongs to {} memories, not {}",
                field, owner, memory_type
            )));
        }

        let details = match memory_type {
            MemoryType::Event => MemoryDetails::Event,
            MemoryType::Photo => MemoryDetails::Photo {
                image_storage_id: req.image_storage_id,
            },
            MemoryType::Music => MemoryDetails::Music {
                url: req.music_url,
                title: req.music_title,
                artist: req.music_artist,
            },
            MemoryType::Video => MemoryDetails::Video {
                storage_id: req.video_storage_id,
                duration: req.video_duration,
                thumbnail_storage_id: req.video_thumbnail_storage_id,
            },
            MemoryType::Calendar => MemoryDetails::Calendar {
                date: req.calendar_date,
                end_date: req.calendar_end_date,
                calendar_type: req.calendar_type,
            },
            MemoryType::Thought => MemoryDetails::Thought {
                mood: req.mood,
                is_private: req.is_private,
                category: req.thought_category,
            },
        };

        Ok(MemoryDraft {
            title: req.title,
            content: req.content,
            tags: req.tags,
            location: req.location,
            importance: req.importance,
            details,
        })
    }
}

// ============================================
// Response DTOs
// ============================================

/// Memory with media URLs resolved for this read
#[derive(Debug, Serialize, ToSchema)]
pub struct MemoryResponse {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub content: String,
    pub memory_type: MemoryType,
    pub date: DateTime<Utc>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    pub importance: i32,
    pub connections: Vec<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_storage_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub music_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub music_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub music_artist: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_storage_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_thumbnail_storage_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_thumbnail_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar_end_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar_type: Option<CalendarType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thought_category: Option<ThoughtCategory>,
}

impl From<ResolvedMemory> for MemoryResponse {
    fn from(resolved: ResolvedMemory) -> Self {
        let m = resolved.memory;
        Self {
            id: m.id,
            owner_id: m.owner_id,
            title: m.title,
            content: m.content,
            memory_type: m.memory_type,
            date: m.date,
            tags: m.tags,
            location: m.location,
            importance: m.importance,
            connections: m.connections,
            image_storage_id: m.image_storage_id,
            image_url: resolved.image_url,
            music_url: m.music_url,
            music_title: m.music_title,
            music_artist: m.music_artist,
            video_storage_id: m.video_storage_id,
            video_url: resolved.video_url,
            video_duration: m.video_duration,
            video_thumbnail_storage_id: m.video_thumbnail_storage_id,
            video_thumbnail_url: resolved.video_thumbnail_url,
            calendar_date: m.calendar_date,
            calendar_end_date: m.calendar_end_date,
            calendar_type: m.calendar_type,
            mood: m.mood,
            is_private: m.is_private,
            thought_category: m.thought_category,
        }
    }
}

/// Returned by create, update and delete
#[derive(Debug, Serialize, ToSchema)]
pub struct MemoryIdResponse {
    pub id: Uuid,
}

/// A memory placed on the map
#[derive(Debug, Serialize, ToSchema)]
pub struct MapNodeResponse {
    #[serde(flatten)]
    pub memory: MemoryResponse,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

impl From<(ResolvedMemory, MapPlacement)> for MapNodeResponse {
    fn from((memory, placement): (ResolvedMemory, MapPlacement)) -> Self {
        Self {
            memory: memory.into(),
            x: placement.x,
            y: placement.y,
            radius: placement.radius,
        }
    }
}

/// Undirected link between two map nodes
#[derive(Debug, Serialize, ToSchema)]
pub struct MapConnectionResponse {
    pub from: Uuid,
    pub to: Uuid,
}

impl From<MapEdge> for MapConnectionResponse {
    fn from(edge: MapEdge) -> Self {
        Self {
            from: edge.from,
            to: edge.to,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MemoryMapResponse {
    pub nodes: Vec<MapNodeResponse>,
    pub connections: Vec<MapConnectionResponse>,
}

/// One-off upload target for media
#[derive(Debug, Serialize, ToSchema)]
pub struct UploadTargetResponse {
    pub upload_url: String,
    /// Blob key to send back as `image_storage_id` / `video_storage_id`
    pub storage_id: String,
    pub expires_at: DateTime<Utc>,
}

impl From<UploadTarget> for UploadTargetResponse {
    fn from(target: UploadTarget) -> Self {
        Self {
            upload_url: target.url,
            storage_id: target.key,
            expires_at: target.expires_at,
        }
    }
}
