//! Suggestion DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use kioku::{Suggestion, SuggestionType};

/// Query for listing active suggestions
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListSuggestionsQuery {
    /// Maximum number of suggestions (default 3, capped at 50)
    pub limit: Option<i64>,
}

/// Suggestion response
#[derive(Debug, Serialize, ToSchema)]
pub struct SuggestionResponse {
    pub id: Uuid,
    pub suggestion_type: SuggestionType,
    pub title: String,
    pub content: String,
    /// Producer confidence (0.0 - 1.0)
    pub confidence: f64,
    pub related_memory_ids: Vec<Uuid>,
    pub action_taken: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Suggestion> for SuggestionResponse {
    fn from(s: Suggestion) -> Self {
        Self {
            id: s.id,
            suggestion_type: s.suggestion_type,
            title: s.title,
            content: s.content,
            confidence: s.confidence,
            related_memory_ids: s.related_memory_ids,
            action_taken: s.action_taken,
            created_at: s.created_at,
        }
    }
}
