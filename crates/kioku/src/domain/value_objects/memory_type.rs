//! MemoryType - Which kind of moment a memory records

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Memory type discriminator
///
/// Selects which type-specific fields of a [`crate::Memory`] are meaningful.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MemoryType {
    #[default]
    Event,
    Photo,
    Music,
    Video,
    Calendar,
    Thought,
}

impl MemoryType {
    /// Whether records of this type carry blob keys that need resolving
    pub fn has_media(&self) -> bool {
        matches!(self, MemoryType::Photo | MemoryType::Video)
    }
}

impl std::fmt::Display for MemoryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemoryType::Event => write!(f, "event"),
            MemoryType::Photo => write!(f, "photo"),
            MemoryType::Music => write!(f, "music"),
            MemoryType::Video => write!(f, "video"),
            MemoryType::Calendar => write!(f, "calendar"),
            MemoryType::Thought => write!(f, "thought"),
        }
    }
}

impl std::str::FromStr for MemoryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "event" => Ok(MemoryType::Event),
            "photo" => Ok(MemoryType::Photo),
            "music" => Ok(MemoryType::Music),
            "video" => Ok(MemoryType::Video),
            "calendar" => Ok(MemoryType::Calendar),
            "thought" => Ok(MemoryType::Thought),
            _ => Err(format!("Unknown memory type: {}", s)),
        }
    }
}
