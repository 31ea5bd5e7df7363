//! CalendarType - Kind of calendar entry

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CalendarType {
    Event,
    Reminder,
    Birthday,
    Anniversary,
}

impl std::fmt::Display for CalendarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalendarType::Event => write!(f, "event"),
            CalendarType::Reminder => write!(f, "reminder"),
            CalendarType::Birthday => write!(f, "birthday"),
            CalendarType::Anniversary => write!(f, "anniversary"),
        }
    }
}

impl std::str::FromStr for CalendarType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "event" => Ok(CalendarType::Event),
            "reminder" => Ok(CalendarType::Reminder),
            "birthday" => Ok(CalendarType::Birthday),
            "anniversary" => Ok(CalendarType::Anniversary),
            _ => Err(format!("Unknown calendar type: {}", s)),
        }
    }
}
