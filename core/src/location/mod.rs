//! World coordinates and the fixed problem sites of the room.

mod registry;

pub use registry::{LocationGroup, PILLARS, VENTS};

use serde::{Deserialize, Serialize};

use crate::game_data::NORTH_HALF_MIN_Y;

/// An absolute tile position in the game world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorldPoint {
    pub x: i32,
    pub y: i32,
    pub plane: i32,
}

impl WorldPoint {
    pub const fn new(x: i32, y: i32, plane: i32) -> Self {
        Self { x, y, plane }
    }

    /// Euclidean distance over x/y. The plane is not considered.
    pub fn planar_distance(&self, other: &WorldPoint) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        dx.hypot(dy)
    }

    /// Whether the point lies in the north half of the Apmeken room.
    #[inline]
    pub fn is_north_half(&self) -> bool {
        self.y >= NORTH_HALF_MIN_Y
    }
}

/// A scene-local position as projected by the [`Scene`](crate::markers::Scene).
///
/// Used as the de-duplicating key for markers: two world points can project to
/// the same local point, and a world point outside the loaded scene has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocalPoint {
    pub x: i32,
    pub y: i32,
}

impl LocalPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
