//! Header row surface

use switcher_core::{Surface, compose};

use crate::app::DrawContext;

use super::{descriptor_button, gather_toggle_state};

/// Draw the switcher row appended to the viewport header.
pub fn draw_header_row(ui: &mut egui::Ui, ctx: &DrawContext) {
    let config = ctx.config.read().config().clone();
    let state = gather_toggle_state(ctx);
    let buttons = compose(Surface::Header, &config, &state);
    if buttons.is_empty() {
        return;
    }

    ui.separator();
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 2.0;
        for descriptor in &buttons {
            if descriptor_button(ui, descriptor) {
                ctx.app_state.lock().queue_action(descriptor.action);
            }
        }
    });
}
