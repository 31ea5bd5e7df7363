//! ReminderPriority - Urgency of a reminder

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReminderPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl std::fmt::Display for ReminderPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReminderPriority::Low => write!(f, "low"),
            ReminderPriority::Medium => write!(f, "medium"),
            ReminderPriority::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for ReminderPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(ReminderPriority::Low),
            "medium" => Ok(ReminderPriority::Medium),
            "high" => Ok(ReminderPriority::High),
            _ => Err(format!("Unknown reminder priority: {}", s)),
        }
    }
}
