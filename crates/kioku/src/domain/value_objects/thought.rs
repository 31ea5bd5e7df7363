//! Thought classification - mood and category of a thought memory

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Mood attached to a thought
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Happy,
    Sad,
    Excited,
    Anxious,
    Peaceful,
    Frustrated,
    Grateful,
    Nostalgic,
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mood::Happy => write!(f, "happy"),
            Mood::Sad => write!(f, "sad"),
            Mood::Excited => write!(f, "excited"),
            Mood::Anxious => write!(f, "anxious"),
            Mood::Peaceful => write!(f, "peaceful"),
            Mood::Frustrated => write!(f, "frustrated"),
            Mood::Grateful => write!(f, "grateful"),
            Mood::Nostalgic => write!(f, "nostalgic"),
        }
    }
}

impl std::str::FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "happy" => Ok(Mood::Happy),
            "sad" => Ok(Mood::Sad),
            "excited" => Ok(Mood::Excited),
            "anxious" => Ok(Mood::Anxious),
            "peaceful" => Ok(Mood::Peaceful),
            "frustrated" => Ok(Mood::Frustrated),
            "grateful" => Ok(Mood::Grateful),
            "nostalgic" => Ok(Mood::Nostalgic),
            _ => Err(format!("Unknown mood: {}", s)),
        }
    }
}

/// What kind of thought was recorded
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ThoughtCategory {
    Reflection,
    Idea,
    Dream,
    Goal,
    Worry,
    Gratitude,
}

impl std::fmt::Display for ThoughtCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThoughtCategory::Reflection => write!(f, "reflection"),
            ThoughtCategory::Idea => write!(f, "idea"),
            ThoughtCategory::Dream => write!(f, "dream"),
            ThoughtCategory::Goal => write!(f, "goal"),
            ThoughtCategory::Worry => write!(f, "worry"),
            ThoughtCategory::Gratitude => write!(f, "gratitude"),
        }
    }
}

impl std::str::FromStr for ThoughtCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reflection" => Ok(ThoughtCategory::Reflection),
            "idea" => Ok(ThoughtCategory::Idea),
            "dream" => Ok(ThoughtCategory::Dream),
            "goal" => Ok(ThoughtCategory::Goal),
            "worry" => Ok(ThoughtCategory::Worry),
            "gratitude" => Ok(ThoughtCategory::Gratitude),
            _ => Err(format!("Unknown thought category: {}", s)),
        }
    }
}
