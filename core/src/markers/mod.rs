//! Marker lifecycle management.
//!
//! Markers are scene objects owned by a [`MarkerManager`] and keyed by the
//! local point they were placed on. The manager never hands out scene handles;
//! every removal goes through it so that an object is released at most once.
//!
//! ```text
//!   WorldPoint ──Scene::local_point──▶ LocalPoint (key)
//!                                          │
//!                 create ─ place ─ register│
//!                                          ▼
//!                               HashMap<LocalPoint, Handle>
//! ```

mod headless;

pub use headless::{HeadlessScene, ObjectId, SceneObject, SceneStats};

use hashbrown::HashMap;

use crate::game_data::model_id;
use crate::location::{LocalPoint, WorldPoint};

/// Failures reported by a [`Scene`] when creating objects.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("model {0} could not be loaded")]
    ModelUnavailable(i32),
    #[error("scene rejected object: {0}")]
    Rejected(String),
}

/// The rendering collaborator that draws marker objects.
pub trait Scene {
    /// Opaque reference to a scene object.
    type Handle;

    /// Project a world point into the loaded scene, if it is currently loaded.
    fn local_point(&self, world: WorldPoint) -> Option<LocalPoint>;

    /// Plane currently loaded by the client.
    fn plane(&self) -> i32;

    fn create_object(&mut self, model_id: i32) -> Result<Self::Handle, SceneError>;

    fn place_object(&mut self, handle: &Self::Handle, location: LocalPoint, plane: i32);

    /// Activate the object and add it to the drawn scene.
    fn register_object(&mut self, handle: &Self::Handle);

    fn is_object_registered(&self, handle: &Self::Handle) -> bool;

    fn remove_object(&mut self, handle: &Self::Handle);
}

/// Model used for a marker at `location`. Skulls face into the room.
pub fn marker_model_for(location: WorldPoint) -> i32 {
    if location.is_north_half() {
        model_id::SKULL_FACING_SOUTH
    } else {
        model_id::SKULL_FACING_NORTH
    }
}

/// Tracks the markers currently shown, one per local point.
#[derive(Debug)]
pub struct MarkerManager<H> {
    markers: HashMap<LocalPoint, H>,
}

impl<H> Default for MarkerManager<H> {
    fn default() -> Self {
        Self {
            markers: HashMap::new(),
        }
    }
}

impl<H> MarkerManager<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a marker at `location`. Returns true if a new marker was created.
    ///
    /// Does nothing when the location is not in the loaded scene, when a marker
    /// already occupies its local point, or when the scene fails to create the
    /// object.
    pub fn show_marker_at<S>(&mut self, location: WorldPoint, scene: &mut S) -> bool
    where
        S: Scene<Handle = H>,
    {
        let Some(key) = scene.local_point(location) else {
            tracing::trace!(?location, "Marker location not in scene");
            return false;
        };
        if self.markers.contains_key(&key) {
            return false;
        }

        let model_id = marker_model_for(location);
        let handle = match scene.create_object(model_id) {
            Ok(handle) => handle,
            Err(e) => {
                tracing::warn!(error = %e, ?location, "Failed to create issue marker");
                return false;
            }
        };

        let plane = scene.plane();
        scene.place_object(&handle, key, plane);
        scene.register_object(&handle);
        self.markers.insert(key, handle);
        true
    }

    /// Remove the marker at `location`. Returns true if one was tracked there.
    pub fn remove_marker_at<S>(&mut self, location: WorldPoint, scene: &mut S) -> bool
    where
        S: Scene<Handle = H>,
    {
        let Some(key) = scene.local_point(location) else {
            return false;
        };
        let Some(handle) = self.markers.remove(&key) else {
            return false;
        };
        if scene.is_object_registered(&handle) {
            scene.remove_object(&handle);
        }
        true
    }

    /// Remove every tracked marker from the scene.
    pub fn clear_all<S>(&mut self, scene: &mut S)
    where
        S: Scene<Handle = H>,
    {
        for (_, handle) in self.markers.drain() {
            if scene.is_object_registered(&handle) {
                scene.remove_object(&handle);
            }
        }
    }

    pub fn has_marker_at<S>(&self, location: WorldPoint, scene: &S) -> bool
    where
        S: Scene<Handle = H>,
    {
        scene
            .local_point(location)
            .is_some_and(|key| self.markers.contains_key(&key))
    }

    pub fn marker_keys(&self) -> impl Iterator<Item = LocalPoint> + '_ {
        self.markers.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
