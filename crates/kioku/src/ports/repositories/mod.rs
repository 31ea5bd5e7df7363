//! Repository Ports
//!
//! Abstract interfaces for record persistence. Every listing method is
//! keyed on the owner so that filtering happens inside the store query.

mod memory_repository;
mod reminder_repository;
mod suggestion_repository;

pub use memory_repository::*;
pub use reminder_repository::*;
pub use suggestion_repository::*;
