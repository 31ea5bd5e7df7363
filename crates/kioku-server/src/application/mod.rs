//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! repositories and external services. Every use case takes the
//! caller identity (possibly absent) and applies the ownership guard.

mod media;
mod memory_service;
mod reminder_service;
mod suggestion_service;

pub use memory_service::{MemoryMap, MemoryService};
pub use reminder_service::ReminderService;
pub use suggestion_service::SuggestionService;
