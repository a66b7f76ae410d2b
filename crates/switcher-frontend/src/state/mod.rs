//! Application state module

mod viewport;

pub use viewport::{OrbitCamera, SharedViewportState, ViewportState, create_shared_viewport};

use std::collections::HashMap;
use std::sync::Arc;

use glam::Vec3;
use parking_lot::Mutex;
use uuid::Uuid;

use switcher_core::{SceneObject, ViewAction};

/// Application state
#[derive(Default)]
pub struct AppState {
    /// Objects indexed by ID for quick lookup
    pub objects: HashMap<Uuid, SceneObject>,
    /// Stable display order for the outliner
    object_order: Vec<Uuid>,
    /// Currently active object
    pub active_object: Option<Uuid>,
    /// Last user-facing warning, shown in the status bar
    pub status: Option<String>,
    /// Pending actions
    pending_actions: Vec<ViewAction>,
}

impl AppState {
    /// Create an empty app state
    pub fn new() -> Self {
        Self::default()
    }

    /// State pre-populated with a few primitives to act on.
    pub fn demo_scene() -> Self {
        let mut state = Self::new();
        let first = state.add_object(SceneObject::new("Box", Vec3::ZERO, 1.0));
        state.add_object(SceneObject::new("Cylinder", Vec3::new(2.5, 0.0, 0.0), 1.2));
        state.add_object(SceneObject::new("Sphere", Vec3::new(-2.5, 0.0, 0.5), 0.8));
        state.active_object = Some(first);
        state
    }

    /// Add an object and return its ID
    pub fn add_object(&mut self, object: SceneObject) -> Uuid {
        let id = object.id;
        self.object_order.push(id);
        self.objects.insert(id, object);
        id
    }

    /// Objects in display order
    pub fn ordered_objects(&self) -> impl Iterator<Item = &SceneObject> {
        self.object_order.iter().filter_map(|id| self.objects.get(id))
    }

    /// Set the active object
    pub fn set_active(&mut self, id: Option<Uuid>) {
        self.active_object = id;
    }

    /// The active object, if any
    pub fn active_object(&self) -> Option<&SceneObject> {
        self.active_object.and_then(|id| self.objects.get(&id))
    }

    /// Mutable access to the active object
    pub fn active_object_mut(&mut self) -> Option<&mut SceneObject> {
        let id = self.active_object?;
        self.objects.get_mut(&id)
    }

    /// Queue an action
    pub fn queue_action(&mut self, action: ViewAction) {
        self.pending_actions.push(action);
    }

    /// Take pending actions
    pub fn take_pending_actions(&mut self) -> Vec<ViewAction> {
        std::mem::take(&mut self.pending_actions)
    }

    /// Record a user-facing warning
    pub fn report_warning(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    /// Clear the status line
    pub fn clear_status(&mut self) {
        self.status = None;
    }
}

pub type SharedAppState = Arc<Mutex<AppState>>;

/// Create a new shared app state
pub fn create_shared_state() -> SharedAppState {
    Arc::new(Mutex::new(AppState::demo_scene()))
}
