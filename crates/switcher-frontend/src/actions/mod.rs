//! Action handling module
//!
//! Switcher actions are queued in AppState by the render surfaces and
//! processed each frame.

mod display;
mod view;

use switcher_core::ViewAction;

use crate::state::{SharedAppState, SharedViewportState};

pub use display::handle_display_action;
pub use view::handle_view_action;

/// Context for action handlers
pub struct ActionContext<'a> {
    pub app_state: &'a SharedAppState,
    pub viewport_state: &'a Option<SharedViewportState>,
}

impl<'a> ActionContext<'a> {
    pub fn new(
        app_state: &'a SharedAppState,
        viewport_state: &'a Option<SharedViewportState>,
    ) -> Self {
        Self {
            app_state,
            viewport_state,
        }
    }
}

/// Dispatch an action to the appropriate handler
pub fn dispatch_action(action: ViewAction, ctx: &ActionContext) {
    match action {
        ViewAction::Orient(_) | ViewAction::CameraView | ViewAction::FocusSelection => {
            handle_view_action(action, ctx);
        }
        ViewAction::ToggleWire | ViewAction::ToggleFaceOrientation => {
            handle_display_action(action, ctx);
        }
    }
}
