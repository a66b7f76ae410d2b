//! Switcher render surfaces and supporting panels

mod context_menu;
mod header;
mod outliner;
mod preferences;
mod sidebar;

pub use context_menu::draw_context_menu;
pub use header::draw_header_row;
pub use outliner::draw_outliner;
pub use preferences::show_preferences_window;
pub use sidebar::draw_sidebar;

use switcher_core::{ButtonDescriptor, ToggleState};

use crate::app::DrawContext;

/// Snapshot the toggle state the composer reflects.
pub fn gather_toggle_state(ctx: &DrawContext) -> ToggleState {
    let wireframe = ctx
        .app_state
        .lock()
        .active_object()
        .map(|obj| obj.show_wire);
    let face_orientation = ctx
        .viewport_state
        .as_ref()
        .map(|vp| vp.lock().overlay.show_face_orientation);
    ToggleState {
        wireframe,
        face_orientation,
    }
}

/// Render one descriptor as a compact button. Returns true when clicked.
pub fn descriptor_button(ui: &mut egui::Ui, descriptor: &ButtonDescriptor) -> bool {
    let response = match descriptor.icon {
        Some(icon) => {
            let button = egui::Button::new(icon).min_size(egui::vec2(24.0, 24.0));
            ui.add(button).on_hover_text(descriptor.action.label())
        }
        None => ui.add(egui::Button::new(descriptor.label)),
    };
    response.clicked()
}
