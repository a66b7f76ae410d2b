//! Main application module

mod registry;

pub use registry::{
    DrawCallback, DrawContext, SurfaceRegistry, install_default_surfaces, remove_default_surfaces,
};

use switcher_core::Surface;

use crate::actions::{ActionContext, dispatch_action};
use crate::config::{SharedConfig, config_path, create_shared_config};
use crate::panels;
use crate::state::{SharedAppState, SharedViewportState, create_shared_state, create_shared_viewport};

/// Main application
pub struct ViewSwitcherApp {
    app_state: SharedAppState,
    viewport_state: Option<SharedViewportState>,
    config: SharedConfig,
    registry: SurfaceRegistry,
    /// Whether the preferences window is open
    preferences_open: bool,
}

impl ViewSwitcherApp {
    /// Create a new app
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = create_shared_config(config_path());

        let mut registry = SurfaceRegistry::new();
        install_default_surfaces(&mut registry);

        Self {
            app_state: create_shared_state(),
            viewport_state: Some(create_shared_viewport()),
            config,
            registry,
            preferences_open: false,
        }
    }

    /// Process pending actions
    fn process_actions(&mut self) {
        let actions = self.app_state.lock().take_pending_actions();
        let ctx = ActionContext::new(&self.app_state, &self.viewport_state);

        for action in actions {
            dispatch_action(action, &ctx);
        }
    }

    /// Readout lines painted over the viewport placeholder
    fn viewport_summary(&self) -> Vec<String> {
        let mut lines = Vec::new();

        if let Some(viewport_state) = &self.viewport_state {
            let vp = viewport_state.lock();
            if vp.camera_view {
                lines.push("Camera View".to_string());
            } else {
                lines.push(format!(
                    "Orbit {:.0}\u{00b0} / {:.0}\u{00b0}",
                    vp.camera.yaw.to_degrees(),
                    vp.camera.pitch.to_degrees()
                ));
            }
            if vp.overlay.show_face_orientation {
                lines.push("Face Orientation".to_string());
            }
        }

        let state = self.app_state.lock();
        match state.active_object() {
            Some(obj) => {
                let mut line = format!("Active: {}", obj.name);
                if obj.show_wire {
                    line.push_str(" (wire)");
                }
                lines.push(line);
            }
            None => lines.push("No active object".to_string()),
        }

        lines
    }
}

impl eframe::App for ViewSwitcherApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Process pending actions
        self.process_actions();

        // Header: menu bar plus the registered header surface
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Preferences...").clicked() {
                        self.preferences_open = true;
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                let dc = DrawContext {
                    config: &self.config,
                    app_state: &self.app_state,
                    viewport_state: &self.viewport_state,
                };
                self.registry.draw(Surface::Header, ui, &dc);
            });
        });

        // Sidebar panel, gated by the display-location preference
        let show_sidebar = self.config.read().config().display_location.shows_sidebar()
            && self.registry.has_callbacks(Surface::Sidebar);
        if show_sidebar {
            egui::SidePanel::right("view_switcher_sidebar")
                .resizable(false)
                .default_width(170.0)
                .show(ctx, |ui| {
                    let dc = DrawContext {
                        config: &self.config,
                        app_state: &self.app_state,
                        viewport_state: &self.viewport_state,
                    };
                    self.registry.draw(Surface::Sidebar, ui, &dc);
                });
        }

        // Outliner
        egui::SidePanel::left("outliner")
            .resizable(false)
            .default_width(150.0)
            .show(ctx, |ui| {
                panels::draw_outliner(ui, &self.app_state);
            });

        // Status bar for the last warning
        let status = self.app_state.lock().status.clone();
        if let Some(message) = status {
            egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.colored_label(egui::Color32::from_rgb(230, 180, 80), message);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("Dismiss").clicked() {
                            self.app_state.lock().clear_status();
                        }
                    });
                });
            });
        }

        // Viewport placeholder with the context-menu surface attached
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::click());
            ui.painter()
                .rect_filled(response.rect, 0.0, egui::Color32::from_gray(30));

            let mut pos = response.rect.left_top() + egui::vec2(10.0, 10.0);
            for line in self.viewport_summary() {
                ui.painter().text(
                    pos,
                    egui::Align2::LEFT_TOP,
                    line,
                    egui::FontId::default(),
                    egui::Color32::from_gray(160),
                );
                pos.y += 18.0;
            }

            let dc = DrawContext {
                config: &self.config,
                app_state: &self.app_state,
                viewport_state: &self.viewport_state,
            };
            response.context_menu(|ui| {
                self.registry.draw(Surface::ContextMenu, ui, &dc);
            });
        });

        // Preferences window
        panels::show_preferences_window(ctx, &self.config, &mut self.preferences_open);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        remove_default_surfaces(&mut self.registry);
    }
}
