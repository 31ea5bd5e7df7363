//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use kioku::{
    CalendarType, Location, MemoryType, Mood, ReminderPriority, SuggestionType, ThoughtCategory,
};

use crate::models::{
    CreateReminderRequest,
    MapConnectionResponse,
    MapNodeResponse,
    MemoryIdResponse,
    MemoryMapResponse,
    // Memory models
    MemoryRequest,
    MemoryResponse,
    // Reminder models
    ReminderResponse,
    // Suggestion models
    SuggestionResponse,
    UploadTargetResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        crate::health_check,
        // Memory endpoints
        super::memory::list_memories,
        super::memory::create_memory,
        super::memory::get_memory,
        super::memory::update_memory,
        super::memory::delete_memory,
        super::memory::list_memories_by_type,
        super::memory::list_memories_by_mood,
        super::memory::timeline,
        super::memory::memory_map,
        super::memory::request_upload,
        // Reminder endpoints
        super::reminder::list_reminders,
        super::reminder::create_reminder,
        super::reminder::complete_reminder,
        super::reminder::delete_reminder,
        // Suggestion endpoints
        super::suggestion::list_suggestions,
        super::suggestion::dismiss_suggestion,
        super::suggestion::act_on_suggestion,
        super::suggestion::related_memories,
    ),
    info(
        title = "Kioku API",
        version = "0.1.0",
        description = "記憶 (Memory) - Personal memory journal API\n\nEvery record is private to the identity that created it.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Memory", description = "Memory - Journaled moments, timeline and map"),
        (name = "Reminder", description = "Reminder - Dated to-dos"),
        (name = "Suggestion", description = "Suggestion - AI suggestions about memories"),
    ),
    components(
        schemas(
            crate::HealthCheck,
            // Value objects
            MemoryType,
            Mood,
            ThoughtCategory,
            CalendarType,
            Location,
            ReminderPriority,
            SuggestionType,
            // Memory
            MemoryRequest,
            MemoryResponse,
            MemoryIdResponse,
            MapNodeResponse,
            MapConnectionResponse,
            MemoryMapResponse,
            UploadTargetResponse,
            // Reminder
            CreateReminderRequest,
            ReminderResponse,
            // Suggestion
            SuggestionResponse,
        )
    ),
)]
pub struct ApiDoc;
