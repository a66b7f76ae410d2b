//! Viewport state: orbit camera angles and overlay flags
//!
//! The switcher consumes `view_axis` / `view_camera` / `view_selected` as
//! opaque host capabilities; the actual projection and rendering live in
//! the host.

use std::sync::Arc;

use glam::Vec3;
use parking_lot::Mutex;

use switcher_core::{OverlaySettings, ViewOrientation};

/// Orbit camera parameters
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub target: Vec3,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            yaw: 45.0_f32.to_radians(),
            pitch: 30.0_f32.to_radians(),
            distance: 5.0,
            target: Vec3::ZERO,
        }
    }
}

impl OrbitCamera {
    /// Snap to a canonical orientation.
    pub fn set_orientation(&mut self, orientation: ViewOrientation) {
        let (yaw, pitch): (f32, f32) = match orientation {
            ViewOrientation::Front => (0.0, 0.0),
            ViewOrientation::Back => (180.0, 0.0),
            ViewOrientation::Right => (90.0, 0.0),
            ViewOrientation::Left => (-90.0, 0.0),
            // Straight up/down flips the orbit basis, stop just short
            ViewOrientation::Top => (0.0, 89.0),
            ViewOrientation::Bottom => (0.0, -89.0),
        };
        self.yaw = yaw.to_radians();
        self.pitch = pitch.to_radians();
    }

    /// Fit the view to a bounding sphere.
    pub fn fit(&mut self, center: Vec3, radius: f32) {
        self.target = center;
        self.distance = (radius * 2.5).max(1.0);
    }

    /// Camera position derived from the orbit parameters.
    pub fn position(&self) -> Vec3 {
        let x = self.distance * self.pitch.cos() * self.yaw.cos();
        let y = self.distance * self.pitch.cos() * self.yaw.sin();
        let z = self.distance * self.pitch.sin();
        self.target + Vec3::new(x, y, z)
    }
}

/// Viewport state as far as the switcher is concerned
#[derive(Debug, Clone, Default)]
pub struct ViewportState {
    pub camera: OrbitCamera,
    pub overlay: OverlaySettings,
    /// Looking through the scene camera instead of the orbit view
    pub camera_view: bool,
}

impl ViewportState {
    /// Create a new viewport state
    pub fn new() -> Self {
        Self::default()
    }

    /// Orient the view to a canonical axis, leaving camera view.
    pub fn view_axis(&mut self, orientation: ViewOrientation) {
        self.camera_view = false;
        self.camera.set_orientation(orientation);
    }

    /// Toggle looking through the scene camera.
    pub fn view_camera(&mut self) {
        self.camera_view = !self.camera_view;
    }

    /// Frame the given bounding sphere.
    pub fn view_selected(&mut self, center: Vec3, radius: f32) {
        self.camera_view = false;
        self.camera.fit(center, radius);
    }
}

pub type SharedViewportState = Arc<Mutex<ViewportState>>;

/// Create a new shared viewport state
pub fn create_shared_viewport() -> SharedViewportState {
    Arc::new(Mutex::new(ViewportState::new()))
}
