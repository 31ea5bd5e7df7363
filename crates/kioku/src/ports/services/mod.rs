//! Service Ports
//!
//! Interfaces to collaborators outside the record store.

mod blob_store;
mod identity;

pub use blob_store::*;
pub use identity::*;
