//! Viewport context-menu surface

use switcher_core::{Surface, ViewAction, compose};

use crate::app::DrawContext;

use super::gather_toggle_state;

/// Draw the switcher entries of the viewport right-click menu.
pub fn draw_context_menu(ui: &mut egui::Ui, ctx: &DrawContext) {
    let config = ctx.config.read().config().clone();
    let state = gather_toggle_state(ctx);
    let buttons = compose(Surface::ContextMenu, &config, &state);

    for descriptor in &buttons {
        if descriptor.action == ViewAction::ToggleWire {
            ui.separator();
        }
        // Menu entries always carry the action label; the composed icon
        // becomes a prefix glyph when icon mode is on.
        let text = match descriptor.icon {
            Some(icon) => format!("{} {}", icon, descriptor.action.label()),
            None => descriptor.label.to_string(),
        };
        if ui.button(text).clicked() {
            ctx.app_state.lock().queue_action(descriptor.action);
            ui.close_menu();
        }
    }
}
