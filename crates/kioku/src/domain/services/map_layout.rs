//! Map Layout
//!
//! Places memories evenly on a circle and links neighbours that share a
//! tag. Input order matters: callers pass memories in store enumeration
//! order, not date order.
//!
//! Connections are only ever drawn between positions `i` and `i + 1`,
//! so the scan is linear and yields at most `n - 1` edges. Two memories
//! that share a tag but are not adjacent are never linked.

use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::Memory;

pub const MAP_CENTER_X: f64 = 400.0;
pub const MAP_CENTER_Y: f64 = 300.0;
pub const MAP_RADIUS: f64 = 200.0;
pub const MIN_NODE_RADIUS: f64 = 20.0;
pub const NODE_RADIUS_PER_IMPORTANCE: f64 = 5.0;

/// Position and size of one node
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapPlacement {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

/// Undirected link between two neighbouring memories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MapEdge {
    pub from: Uuid,
    pub to: Uuid,
}

/// Placements (same order as the input) plus edges
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MapLayout {
    pub placements: Vec<MapPlacement>,
    pub edges: Vec<MapEdge>,
}

/// Node radius for an importance score
pub fn node_radius(importance: i32) -> f64 {
    (importance as f64 * NODE_RADIUS_PER_IMPORTANCE).max(MIN_NODE_RADIUS)
}

/// Position of slot `index` out of `total`. `total` must be non-zero.
pub fn circle_position(index: usize, total: usize) -> (f64, f64) {
    debug_assert!(total > 0, "circle_position called with empty set");
    let angle = (index as f64 * 2.0 * std::f64::consts::PI) / total as f64;
    (
        MAP_CENTER_X + MAP_RADIUS * angle.cos(),
        MAP_CENTER_Y + MAP_RADIUS * angle.sin(),
    )
}

/// Lay out `memories` in the given order. An empty slice yields an empty layout.
pub fn layout_map<M: AsRef<Memory>>(memories: &[M]) -> MapLayout {
    if memories.is_empty() {
        return MapLayout::default();
    }

    let total = memories.len();
    let placements = memories
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let (x, y) = circle_position(i, total);
            MapPlacement {
                x,
                y,
                radius: node_radius(m.as_ref().importance),
            }
        })
        .collect();

    let edges = memories
        .windows(2)
        .filter_map(|pair| {
            let (a, b) = (pair[0].as_ref(), pair[1].as_ref());
            a.shares_tag_with(b).then_some(MapEdge { from: a.id, to: b.id })
        })
        .collect();

    MapLayout { placements, edges }
}
