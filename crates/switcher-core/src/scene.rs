//! Scene objects and viewport overlay toggles
//!
//! The switcher does not own this state; the host keeps it on the object
//! and the viewport. These types model the slice of it the switcher reads
//! and flips.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A scene object as seen by the switcher: identity, a bounding sphere for
/// focusing the view, and the per-object display flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneObject {
    pub id: Uuid,
    pub name: String,
    /// World-space center, used when focusing the view.
    pub position: Vec3,
    /// Bounding radius, used when focusing the view.
    pub radius: f32,
    /// Wireframe display enabled.
    pub show_wire: bool,
    /// Draw all edges while the wireframe is shown.
    pub show_all_edges: bool,
}

impl SceneObject {
    /// Create a new object with the display flags off.
    pub fn new(name: impl Into<String>, position: Vec3, radius: f32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            position,
            radius,
            show_wire: false,
            show_all_edges: false,
        }
    }
}

/// Per-viewport overlay flags.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct OverlaySettings {
    /// Color faces by orientation.
    pub show_face_orientation: bool,
}

/// Errors from the toggle operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToggleError {
    #[error("No active object")]
    NoActiveObject,
    #[error("No active 3D viewport")]
    MissingViewportContext,
}

/// Flip wireframe display on the active object.
///
/// `show_all_edges` follows the wireframe flag. Returns the new state; with
/// no active object nothing is mutated.
pub fn toggle_wire(object: Option<&mut SceneObject>) -> Result<bool, ToggleError> {
    let object = object.ok_or(ToggleError::NoActiveObject)?;
    object.show_wire = !object.show_wire;
    object.show_all_edges = object.show_wire;
    Ok(object.show_wire)
}

/// Flip the face-orientation overlay on the active viewport.
pub fn toggle_face_orientation(
    overlay: Option<&mut OverlaySettings>,
) -> Result<bool, ToggleError> {
    let overlay = overlay.ok_or(ToggleError::MissingViewportContext)?;
    overlay.show_face_orientation = !overlay.show_face_orientation;
    Ok(overlay.show_face_orientation)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object() -> SceneObject {
        SceneObject::new("Box", Vec3::ZERO, 1.0)
    }

    #[test]
    fn test_toggle_wire_drives_both_flags() {
        let mut obj = object();
        assert_eq!(toggle_wire(Some(&mut obj)), Ok(true));
        assert!(obj.show_wire);
        assert!(obj.show_all_edges);
    }

    #[test]
    fn test_toggle_wire_twice_restores_state() {
        let mut obj = object();
        toggle_wire(Some(&mut obj)).unwrap();
        toggle_wire(Some(&mut obj)).unwrap();
        assert!(!obj.show_wire);
        assert!(!obj.show_all_edges);
    }

    #[test]
    fn test_toggle_wire_without_object() {
        assert_eq!(toggle_wire(None), Err(ToggleError::NoActiveObject));
    }

    #[test]
    fn test_toggle_face_orientation() {
        let mut overlay = OverlaySettings::default();
        assert_eq!(toggle_face_orientation(Some(&mut overlay)), Ok(true));
        assert_eq!(toggle_face_orientation(Some(&mut overlay)), Ok(false));
    }

    #[test]
    fn test_toggle_face_orientation_without_viewport() {
        assert_eq!(
            toggle_face_orientation(None),
            Err(ToggleError::MissingViewportContext)
        );
    }
}
