//! Kioku Domain Library
//!
//! Core domain types and interfaces for the Kioku memory journal.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Memory, Reminder, Suggestion)
//!   - `value_objects/`: Immutable value types (MemoryType, Mood, Location, ...)
//!   - `services/`: Ownership guard, map layout, timeline ordering
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Record store interfaces
//!   - `services/`: Blob storage and identity interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use kioku::domain::{Memory, MemoryDraft, MemoryDetails};
//! use kioku::ports::{MemoryRepository, BlobStore};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    layout_map, timeline, CalendarType, DomainError, Location, MapEdge, MapLayout, MapPlacement,
    Memory, MemoryDetails, MemoryDraft, MemoryType, Mood, Owned, Reminder, ReminderDraft,
    ReminderPriority, ResolvedMemory, Suggestion, SuggestionType, ThoughtCategory,
};
pub use ports::{
    // Services
    BlobStore,
    IdentityProvider,
    // Repositories
    MemoryRepository,
    ReminderRepository,
    SuggestionRepository,
    UploadTarget,
};
