//! Preferences window for the switcher settings

use switcher_core::DisplayLocation;

use crate::config::SharedConfig;

/// Show the preferences window
pub fn show_preferences_window(ctx: &egui::Context, config: &SharedConfig, open: &mut bool) {
    egui::Window::new("Preferences")
        .open(open)
        .resizable(false)
        .default_size([320.0, 140.0])
        .show(ctx, |ui| {
            {
                let mut cfg = config.write();
                let switcher = cfg.config_mut();

                ui.checkbox(&mut switcher.use_icons, "Use Icons")
                    .on_hover_text("Display icons instead of text in the header");

                ui.horizontal(|ui| {
                    ui.label("Display Location:");
                    egui::ComboBox::from_id_salt("display_location")
                        .selected_text(switcher.display_location.label())
                        .show_ui(ui, |ui| {
                            for location in DisplayLocation::ALL {
                                ui.selectable_value(
                                    &mut switcher.display_location,
                                    location,
                                    location.label(),
                                );
                            }
                        });
                });
            }

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Reset to Defaults").clicked() {
                    config.write().reset_to_defaults();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Save").clicked() {
                        if let Err(e) = config.write().save() {
                            tracing::error!("Failed to save config: {}", e);
                        }
                    }
                });
            });
        });
}
