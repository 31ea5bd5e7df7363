//! Memory - A journaled moment
//!
//! The stored record is a flat superset: every type-specific field is
//! optional and only the ones matching `memory_type` are meaningful.
//! Writes go through [`MemoryDraft`], whose [`MemoryDetails`] can only
//! carry the fields of a single variant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::value_objects::{CalendarType, Location, MemoryType, Mood, ThoughtCategory};

/// Lowest allowed importance
pub const MIN_IMPORTANCE: i32 = 1;
/// Highest allowed importance
pub const MAX_IMPORTANCE: i32 = 10;

/// Memory - stored record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Memory {
    pub id: Uuid,
    /// Identity that created the memory; never changes
    pub owner_id: Uuid,
    pub title: String,
    pub content: String,
    pub memory_type: MemoryType,
    /// Server-assigned creation time; never changes
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// Importance score (1 - 10)
    pub importance: i32,
    /// Explicit links to other memories (weak references, may dangle)
    #[serde(default)]
    pub connections: Vec<Uuid>,

    // Photo
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_storage_id: Option<String>,
    // Music
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub music_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub music_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub music_artist: Option<String>,
    // Video
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_storage_id: Option<String>,
    /// Length in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_thumbnail_storage_id: Option<String>,
    // Calendar
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar_end_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar_type: Option<CalendarType>,
    // Thought
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thought_category: Option<ThoughtCategory>,
}

/// Type-specific payload of a memory, one variant per [`MemoryType`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MemoryDetails {
    Event,
    Photo {
        image_storage_id: Option<String>,
    },
    Music {
        url: Option<String>,
        title: Option<String>,
        artist: Option<String>,
    },
    Video {
        storage_id: Option<String>,
        duration: Option<f64>,
        thumbnail_storage_id: Option<String>,
    },
    Calendar {
        date: Option<DateTime<Utc>>,
        end_date: Option<DateTime<Utc>>,
        calendar_type: Option<CalendarType>,
    },
    Thought {
        mood: Option<Mood>,
        is_private: Option<bool>,
        category: Option<ThoughtCategory>,
    },
}

impl MemoryDetails {
    pub fn memory_type(&self) -> MemoryType {
        match self {
            MemoryDetails::Event => MemoryType::Event,
            MemoryDetails::Photo { .. } => MemoryType::Photo,
            MemoryDetails::Music { .. } => MemoryType::Music,
            MemoryDetails::Video { .. } => MemoryType::Video,
            MemoryDetails::Calendar { .. } => MemoryType::Calendar,
            MemoryDetails::Thought { .. } => MemoryType::Thought,
        }
    }
}

/// Caller-supplied fields for creating or replacing a memory
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryDraft {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub location: Option<Location>,
    pub importance: i32,
    pub details: MemoryDetails,
}

impl MemoryDraft {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        importance: i32,
        details: MemoryDetails,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            tags: Vec::new(),
            location: None,
            importance,
            details,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Check shared fields against their declared domains
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::invalid("title must not be empty"));
        }
        if self.content.trim().is_empty() {
            return Err(DomainError::invalid("content must not be empty"));
        }
        if !(MIN_IMPORTANCE..=MAX_IMPORTANCE).contains(&self.importance) {
            return Err(DomainError::invalid(format!(
                "importance must be between {} and {}, got {}",
                MIN_IMPORTANCE, MAX_IMPORTANCE, self.importance
            )));
        }
        Ok(())
    }
}

impl Memory {
    /// Create a new memory with generated ID and timestamp
    pub fn new(owner_id: Uuid, draft: MemoryDraft) -> Self {
        let mut memory = Self {
            id: Uuid::new_v4(),
            owner_id,
            title: String::new(),
            content: String::new(),
            memory_type: MemoryType::Event,
            date: Utc::now(),
            tags: Vec::new(),
            location: None,
            importance: MIN_IMPORTANCE,
            connections: Vec::new(),
            image_storage_id: None,
            music_url: None,
            music_title: None,
            music_artist: None,
            video_storage_id: None,
            video_duration: None,
            video_thumbnail_storage_id: None,
            calendar_date: None,
            calendar_end_date: None,
            calendar_type: None,
            mood: None,
            is_private: None,
            thought_category: None,
        };
        memory.apply(draft);
        memory
    }

    /// Replace every caller-editable field.
    ///
    /// `id`, `owner_id`, `date` and `connections` are left untouched.
    /// Fields of variants other than the draft's are cleared.
    pub fn apply(&mut self, draft: MemoryDraft) {
        self.title = draft.title;
        self.content = draft.content;
        self.tags = draft.tags;
        self.location = draft.location;
        self.importance = draft.importance;
        self.memory_type = draft.details.memory_type();
        self.clear_details();

        match draft.details {
            MemoryDetails::Event => {}
            MemoryDetails::Photo { image_storage_id } => {
                self.image_storage_id = image_storage_id;
            }
            MemoryDetails::Music { url, title, artist } => {
                self.music_url = url;
                self.music_title = title;
                self.music_artist = artist;
            }
            MemoryDetails::Video {
                storage_id,
                duration,
                thumbnail_storage_id,
            } => {
                self.video_storage_id = storage_id;
                self.video_duration = duration;
                self.video_thumbnail_storage_id = thumbnail_storage_id;
            }
            MemoryDetails::Calendar {
                date,
                end_date,
                calendar_type,
            } => {
                self.calendar_date = date;
                self.calendar_end_date = end_date;
                self.calendar_type = calendar_type;
            }
            MemoryDetails::Thought {
                mood,
                is_private,
                category,
            } => {
                self.mood = mood;
                self.is_private = is_private;
                self.thought_category = category;
            }
        }
    }

    /// View the type-specific fields as the active variant
    pub fn details(&self) -> MemoryDetails {
        match self.memory_type {
            MemoryType::Event => MemoryDetails::Event,
            MemoryType::Photo => MemoryDetails::Photo {
                image_storage_id: self.image_storage_id.clone(),
            },
            MemoryType::Music => MemoryDetails::Music {
                url: self.music_url.clone(),
                title: self.music_title.clone(),
                artist: self.music_artist.clone(),
            },
            MemoryType::Video => MemoryDetails::Video {
                storage_id: self.video_storage_id.clone(),
                duration: self.video_duration,
                thumbnail_storage_id: self.video_thumbnail_storage_id.clone(),
            },
            MemoryType::Calendar => MemoryDetails::Calendar {
                date: self.calendar_date,
                end_date: self.calendar_end_date,
                calendar_type: self.calendar_type,
            },
            MemoryType::Thought => MemoryDetails::Thought {
                mood: self.mood,
                is_private: self.is_private,
                category: self.thought_category,
            },
        }
    }

    /// Whether this memory shares at least one tag with `other` (exact, case-sensitive)
    pub fn shares_tag_with(&self, other: &Memory) -> bool {
        self.tags.iter().any(|tag| other.tags.contains(tag))
    }

    fn clear_details(&mut self) {
        self.image_storage_id = None;
        self.music_url = None;
        self.music_title = None;
        self.music_artist = None;
        self.video_storage_id = None;
        self.video_duration = None;
        self.video_thumbnail_storage_id = None;
        self.calendar_date = None;
        self.calendar_end_date = None;
        self.calendar_type = None;
        self.mood = None;
        self.is_private = None;
        self.thought_category = None;
    }
}

/// Memory with its blob keys resolved to retrievable URLs.
///
/// Derived at read time and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedMemory {
    #[serde(flatten)]
    pub memory: Memory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_thumbnail_url: Option<String>,
}

impl ResolvedMemory {
    /// Wrap a memory with no resolved locations
    pub fn unresolved(memory: Memory) -> Self {
        Self {
            memory,
            image_url: None,
            video_url: None,
            video_thumbnail_url: None,
        }
    }
}

impl AsRef<Memory> for Memory {
    fn as_ref(&self) -> &Memory {
        self
    }
}

impl AsRef<Memory> for ResolvedMemory {
    fn as_ref(&self) -> &Memory {
        &self.memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo_draft() -> MemoryDraft {
        MemoryDraft::new(
            "Beach day",
            "Sand everywhere",
            7,
            MemoryDetails::Photo {
                image_storage_id: Some("blob-1".to_string()),
            },
        )
        .with_tags(["trip", "summer"])
        .with_location(Location::new(35.3, 139.5, "Kamakura"))
    }

    #[test]
    fn test_new_memory_sets_server_fields() {
        let owner = Uuid::new_v4();
        let memory = Memory::new(owner, photo_draft());

        assert_eq!(memory.owner_id, owner);
        assert_eq!(memory.memory_type, MemoryType::Photo);
        assert!(memory.connections.is_empty());
        assert_eq!(memory.image_storage_id.as_deref(), Some("blob-1"));
        assert_eq!(memory.tags, vec!["trip", "summer"]);
    }

    #[test]
    fn test_details_roundtrip() {
        let draft = photo_draft();
        let memory = Memory::new(Uuid::new_v4(), draft.clone());
        assert_eq!(memory.details(), draft.details);
    }

    #[test]
    fn test_apply_switching_variant_clears_old_fields() {
        let mut memory = Memory::new(Uuid::new_v4(), photo_draft());
        let id = memory.id;
        let owner = memory.owner_id;
        let date = memory.date;

        memory.apply(MemoryDraft::new(
            "Late night",
            "Could not sleep",
            3,
            MemoryDetails::Thought {
                mood: Some(Mood::Anxious),
                is_private: Some(true),
                category: Some(ThoughtCategory::Worry),
            },
        ));

        assert_eq!(memory.id, id);
        assert_eq!(memory.owner_id, owner);
        assert_eq!(memory.date, date);
        assert_eq!(memory.memory_type, MemoryType::Thought);
        assert!(memory.image_storage_id.is_none());
        assert_eq!(memory.mood, Some(Mood::Anxious));
        assert!(memory.tags.is_empty());
        assert!(memory.location.is_none());
    }

    #[test]
    fn test_validate_rejects_out_of_range_importance() {
        let mut draft = photo_draft();
        draft.importance = 0;
        assert!(matches!(
            draft.validate(),
            Err(DomainError::InvalidArgument(_))
        ));
        draft.importance = 11;
        assert!(draft.validate().is_err());
        draft.importance = 10;
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_title() {
        let mut draft = photo_draft();
        draft.title = "   ".to_string();
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_shares_tag_is_case_sensitive() {
        let a = Memory::new(Uuid::new_v4(), photo_draft().with_tags(["Trip"]));
        let b = Memory::new(Uuid::new_v4(), photo_draft().with_tags(["trip"]));
        let c = Memory::new(Uuid::new_v4(), photo_draft().with_tags(["work", "trip"]));
        assert!(!a.shares_tag_with(&b));
        assert!(b.shares_tag_with(&c));
    }

    #[test]
    fn test_resolved_memory_serializes_flat() {
        let mut resolved = ResolvedMemory::unresolved(Memory::new(Uuid::new_v4(), photo_draft()));
        resolved.image_url = Some("https://blobs.example/objects/blob-1".to_string());

        let json = serde_json::to_value(&resolved).unwrap();
        assert_eq!(json["memory_type"], "photo");
        assert_eq!(json["image_url"], "https://blobs.example/objects/blob-1");
        assert!(json.get("video_url").is_none());
    }
}
