//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Memory: A journaled moment (event, photo, music, video, calendar, thought)
//! - Reminder: A dated to-do, optionally pointing back at a memory
//! - Suggestion: An externally produced AI suggestion

mod memory;
mod reminder;
mod suggestion;

pub use memory::*;
pub use reminder::*;
pub use suggestion::*;
