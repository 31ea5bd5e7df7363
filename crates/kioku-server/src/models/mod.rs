//! Kioku Data Models
//!
//! Request/response DTOs for the HTTP surface.
//! - Memory: Journaled moments, map and upload targets
//! - Reminder: Dated to-dos
//! - Suggestion: AI suggestions

mod memory;
mod reminder;
mod suggestion;

pub use memory::*;
pub use reminder::*;
pub use suggestion::*;
