//! View Switcher Core
//!
//! Toolkit-independent data model and display composition for the view
//! switcher: persisted configuration, the fixed set of canonical camera
//! orientations, per-object and per-viewport display toggles, and the
//! composer that turns those into button descriptors for a render surface.

pub mod compose;
pub mod config;
pub mod orientation;
pub mod scene;

pub use compose::{ButtonDescriptor, Surface, ToggleState, ViewAction, compose};
pub use config::{ConfigError, ConfigManager, DisplayLocation, SwitcherConfig};
pub use orientation::ViewOrientation;
pub use scene::{OverlaySettings, SceneObject, ToggleError, toggle_face_orientation, toggle_wire};
