//! SuggestionType - What an AI suggestion proposes

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionType {
    Anniversary,
    Gift,
    Event,
    Connection,
}

impl std::fmt::Display for SuggestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SuggestionType::Anniversary => write!(f, "anniversary"),
            SuggestionType::Gift => write!(f, "gift"),
            SuggestionType::Event => write!(f, "event"),
            SuggestionType::Connection => write!(f, "connection"),
        }
    }
}

impl std::str::FromStr for SuggestionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "anniversary" => Ok(SuggestionType::Anniversary),
            "gift" => Ok(SuggestionType::Gift),
            "event" => Ok(SuggestionType::Event),
            "connection" => Ok(SuggestionType::Connection),
            _ => Err(format!("Unknown suggestion type: {}", s)),
        }
    }
}
