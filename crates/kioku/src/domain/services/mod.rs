//! Domain Services
//!
//! Stateless rules that operate on entities: who may see a record,
//! and the two read-time projections (map layout, timeline).

mod map_layout;
mod ownership;
mod timeline;

pub use map_layout::*;
pub use ownership::*;
pub use timeline::*;
