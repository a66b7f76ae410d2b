//! Sidebar panel surface

use switcher_core::{Surface, ViewAction, compose};

use crate::app::DrawContext;

use super::{descriptor_button, gather_toggle_state};

/// Draw the sidebar panel body.
pub fn draw_sidebar(ui: &mut egui::Ui, ctx: &DrawContext) {
    let config = ctx.config.read().config().clone();
    let state = gather_toggle_state(ctx);
    let buttons = compose(Surface::Sidebar, &config, &state);
    // Hidden by the display-location preference
    if buttons.is_empty() {
        return;
    }

    ui.strong("View Switcher");
    ui.separator();

    for descriptor in &buttons {
        if descriptor.action == ViewAction::ToggleWire {
            ui.separator();
        }
        let clicked = if descriptor.icon.is_some() {
            descriptor_button(ui, descriptor)
        } else {
            ui.add_sized(
                [ui.available_width(), 20.0],
                egui::Button::new(descriptor.label),
            )
            .clicked()
        };
        if clicked {
            ctx.app_state.lock().queue_action(descriptor.action);
        }
    }
}
