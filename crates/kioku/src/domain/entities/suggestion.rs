//! Suggestion - AI-produced hint surfaced to the owner
//!
//! Suggestions are written by an external producer. This crate only
//! lists them and flips their `dismissed` / `action_taken` flags.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::SuggestionType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub suggestion_type: SuggestionType,
    pub title: String,
    pub content: String,
    /// Producer confidence (0.0 - 1.0), not re-validated on read
    pub confidence: f64,
    /// Memories the suggestion is about (weak references, may dangle)
    #[serde(default)]
    pub related_memory_ids: Vec<Uuid>,
    pub dismissed: bool,
    pub action_taken: bool,
    pub created_at: DateTime<Utc>,
}

impl Suggestion {
    pub fn new(
        owner_id: Uuid,
        suggestion_type: SuggestionType,
        title: String,
        content: String,
        confidence: f64,
        related_memory_ids: Vec<Uuid>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            suggestion_type,
            title,
            content,
            confidence,
            related_memory_ids,
            dismissed: false,
            action_taken: false,
            created_at: Utc::now(),
        }
    }
}
