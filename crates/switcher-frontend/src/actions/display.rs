//! Display toggle actions: wireframe and face orientation

use switcher_core::{ToggleError, ViewAction, toggle_face_orientation, toggle_wire};

use super::ActionContext;

/// Handle a display toggle action
pub fn handle_display_action(action: ViewAction, ctx: &ActionContext) {
    match action {
        ViewAction::ToggleWire => {
            let mut state = ctx.app_state.lock();
            match toggle_wire(state.active_object_mut()) {
                Ok(enabled) => {
                    state.clear_status();
                    tracing::debug!(enabled, "Toggled wireframe");
                }
                Err(e) => {
                    tracing::warn!("{}", e);
                    state.report_warning(e.to_string());
                }
            }
        }
        ViewAction::ToggleFaceOrientation => match ctx.viewport_state {
            Some(viewport_state) => {
                let enabled = {
                    let mut vp = viewport_state.lock();
                    toggle_face_orientation(Some(&mut vp.overlay))
                };
                if let Ok(enabled) = enabled {
                    tracing::debug!(enabled, "Toggled face orientation");
                }
                ctx.app_state.lock().clear_status();
            }
            None => {
                let e = ToggleError::MissingViewportContext;
                tracing::warn!("{}", e);
                ctx.app_state.lock().report_warning(e.to_string());
            }
        },
        _ => {}
    }
}
