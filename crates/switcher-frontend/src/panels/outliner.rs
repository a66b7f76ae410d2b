//! Scene outliner
//!
//! Minimal host scaffolding: lists the scene objects and picks the active
//! one. Clicking the active object again deselects it.

use crate::state::SharedAppState;

/// Draw the object list.
pub fn draw_outliner(ui: &mut egui::Ui, app_state: &SharedAppState) {
    ui.strong("Objects");
    ui.separator();

    let mut state = app_state.lock();
    let mut clicked = None;
    for object in state.ordered_objects() {
        let selected = state.active_object == Some(object.id);
        let mut label = object.name.clone();
        if object.show_wire {
            label.push_str("  (wire)");
        }
        if ui.selectable_label(selected, label).clicked() {
            clicked = Some(object.id);
        }
    }

    if let Some(id) = clicked {
        if state.active_object == Some(id) {
            state.set_active(None);
        } else {
            state.set_active(Some(id));
        }
    }
}
