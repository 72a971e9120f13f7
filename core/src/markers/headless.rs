//! In-memory scene for replays and tests.
//!
//! Projects world points into a square window of tiles the way the client
//! does: 128 local units per tile, keys taken at the tile centre, no plane
//! check. Objects are kept in a map and never drawn.

use hashbrown::{HashMap, HashSet};
use serde::Serialize;

use super::{Scene, SceneError};
use crate::location::{LocalPoint, WorldPoint};

/// Local units per tile.
pub const LOCAL_TILE_SIZE: i32 = 128;

/// Width and height of the loaded scene, in tiles.
pub const SCENE_SIZE: i32 = 104;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(u32);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneObject {
    pub model_id: i32,
    pub location: Option<LocalPoint>,
    pub plane: i32,
    pub active: bool,
}

/// Call counters, useful for asserting create/release balance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SceneStats {
    pub created: u32,
    pub registered: u32,
    pub removed: u32,
    /// Removals of objects that were not registered at the time.
    pub invalid_removals: u32,
}

#[derive(Debug)]
pub struct HeadlessScene {
    base_x: i32,
    base_y: i32,
    plane: i32,
    next_id: u32,
    objects: HashMap<ObjectId, SceneObject>,
    registered: HashSet<ObjectId>,
    unavailable_models: HashSet<i32>,
    stats: SceneStats,
}

impl HeadlessScene {
    /// Scene whose south-west corner is the tile `(base_x, base_y)`.
    pub fn new(base_x: i32, base_y: i32, plane: i32) -> Self {
        Self {
            base_x,
            base_y,
            plane,
            next_id: 0,
            objects: HashMap::new(),
            registered: HashSet::new(),
            unavailable_models: HashSet::new(),
            stats: SceneStats::default(),
        }
    }

    /// Scene loaded around `center`, as when a player stands there.
    pub fn centered_on(center: WorldPoint) -> Self {
        let half = SCENE_SIZE / 2;
        Self::new(center.x - half, center.y - half, center.plane)
    }

    pub fn set_plane(&mut self, plane: i32) {
        self.plane = plane;
    }

    /// Make every later `create_object` for this model fail.
    pub fn mark_model_unavailable(&mut self, model_id: i32) {
        self.unavailable_models.insert(model_id);
    }

    pub fn mark_model_available(&mut self, model_id: i32) {
        self.unavailable_models.remove(&model_id);
    }

    /// Drop every registered object, as a scene reload does.
    pub fn unload_all(&mut self) {
        self.registered.clear();
    }

    /// Inverse of [`Scene::local_point`] on the current plane.
    pub fn world_point(&self, local: LocalPoint) -> WorldPoint {
        WorldPoint::new(
            self.base_x + local.x / LOCAL_TILE_SIZE,
            self.base_y + local.y / LOCAL_TILE_SIZE,
            self.plane,
        )
    }

    pub fn registered_objects(&self) -> impl Iterator<Item = &SceneObject> + '_ {
        self.registered.iter().filter_map(|id| self.objects.get(id))
    }

    pub fn registered_count(&self) -> usize {
        self.registered.len()
    }

    pub fn stats(&self) -> SceneStats {
        self.stats
    }
}

impl Scene for HeadlessScene {
    type Handle = ObjectId;

    fn local_point(&self, world: WorldPoint) -> Option<LocalPoint> {
        let dx = world.x - self.base_x;
        let dy = world.y - self.base_y;
        if !(0..SCENE_SIZE).contains(&dx) || !(0..SCENE_SIZE).contains(&dy) {
            return None;
        }
        let half_tile = LOCAL_TILE_SIZE / 2;
        Some(LocalPoint::new(
            dx * LOCAL_TILE_SIZE + half_tile,
            dy * LOCAL_TILE_SIZE + half_tile,
        ))
    }

    fn plane(&self) -> i32 {
        self.plane
    }

    fn create_object(&mut self, model_id: i32) -> Result<ObjectId, SceneError> {
        if self.unavailable_models.contains(&model_id) {
            return Err(SceneError::ModelUnavailable(model_id));
        }
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        self.objects.insert(
            id,
            SceneObject {
                model_id,
                location: None,
                plane: self.plane,
                active: false,
            },
        );
        self.stats.created += 1;
        Ok(id)
    }

    fn place_object(&mut self, handle: &ObjectId, location: LocalPoint, plane: i32) {
        if let Some(object) = self.objects.get_mut(handle) {
            object.location = Some(location);
            object.plane = plane;
        }
    }

    fn register_object(&mut self, handle: &ObjectId) {
        if let Some(object) = self.objects.get_mut(handle) {
            object.active = true;
            if self.registered.insert(*handle) {
                self.stats.registered += 1;
            }
        }
    }

    fn is_object_registered(&self, handle: &ObjectId) -> bool {
        self.registered.contains(handle)
    }

    fn remove_object(&mut self, handle: &ObjectId) {
        if self.registered.remove(handle) {
            self.stats.removed += 1;
        } else {
            self.stats.invalid_removals += 1;
        }
        if let Some(object) = self.objects.get_mut(handle) {
            object.active = false;
        }
    }
}
