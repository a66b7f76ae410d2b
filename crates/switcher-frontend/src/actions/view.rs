//! Camera view actions: orient, camera view, focus selection

use switcher_core::ViewAction;

use super::ActionContext;

/// Handle a camera view action
pub fn handle_view_action(action: ViewAction, ctx: &ActionContext) {
    let Some(viewport_state) = ctx.viewport_state else {
        tracing::warn!("View action {:?} without a 3D viewport", action);
        return;
    };

    match action {
        ViewAction::Orient(orientation) => {
            viewport_state.lock().view_axis(orientation);
            ctx.app_state.lock().clear_status();
        }
        ViewAction::CameraView => {
            viewport_state.lock().view_camera();
            ctx.app_state.lock().clear_status();
        }
        ViewAction::FocusSelection => {
            let target = {
                let state = ctx.app_state.lock();
                state.active_object().map(|obj| (obj.position, obj.radius))
            };
            match target {
                Some((center, radius)) => {
                    viewport_state.lock().view_selected(center, radius);
                    ctx.app_state.lock().clear_status();
                }
                None => {
                    tracing::debug!("Focus requested with nothing selected");
                }
            }
        }
        _ => {}
    }
}
