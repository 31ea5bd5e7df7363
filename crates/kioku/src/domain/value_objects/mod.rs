//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod calendar_type;
mod location;
mod memory_type;
mod reminder_priority;
mod suggestion_type;
mod thought;

pub use calendar_type::*;
pub use location::*;
pub use memory_type::*;
pub use reminder_priority::*;
pub use suggestion_type::*;
pub use thought::*;
