//! Surface registry
//!
//! Maps each render surface to the draw callbacks attached to it, the
//! host's append/remove draw-callback lifecycle. Plain function pointers;
//! no dynamic dispatch.

use std::collections::HashMap;

use switcher_core::Surface;

use crate::config::SharedConfig;
use crate::state::{SharedAppState, SharedViewportState};

/// Everything a surface callback may read or mutate.
pub struct DrawContext<'a> {
    pub config: &'a SharedConfig,
    pub app_state: &'a SharedAppState,
    pub viewport_state: &'a Option<SharedViewportState>,
}

/// A draw callback attached to a surface.
pub type DrawCallback = fn(&mut egui::Ui, &DrawContext);

/// Registry of draw callbacks per surface
#[derive(Default)]
pub struct SurfaceRegistry {
    callbacks: HashMap<Surface, Vec<DrawCallback>>,
}

impl SurfaceRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a callback to a surface.
    pub fn register(&mut self, surface: Surface, callback: DrawCallback) {
        self.callbacks.entry(surface).or_default().push(callback);
    }

    /// Remove a previously registered callback.
    pub fn unregister(&mut self, surface: Surface, callback: DrawCallback) {
        if let Some(callbacks) = self.callbacks.get_mut(&surface) {
            callbacks.retain(|&cb| !std::ptr::fn_addr_eq(cb, callback));
        }
    }

    /// Whether any callbacks are attached to `surface`.
    pub fn has_callbacks(&self, surface: Surface) -> bool {
        self.callbacks.get(&surface).is_some_and(|c| !c.is_empty())
    }

    /// Run every callback attached to `surface`.
    pub fn draw(&self, surface: Surface, ui: &mut egui::Ui, ctx: &DrawContext) {
        if let Some(callbacks) = self.callbacks.get(&surface) {
            for callback in callbacks {
                callback(ui, ctx);
            }
        }
    }
}

/// Attach the switcher's draw callbacks to their surfaces.
pub fn install_default_surfaces(registry: &mut SurfaceRegistry) {
    registry.register(Surface::Header, crate::panels::draw_header_row);
    registry.register(Surface::Sidebar, crate::panels::draw_sidebar);
    registry.register(Surface::ContextMenu, crate::panels::draw_context_menu);
}

/// Detach the switcher's draw callbacks.
pub fn remove_default_surfaces(registry: &mut SurfaceRegistry) {
    registry.unregister(Surface::Header, crate::panels::draw_header_row);
    registry.unregister(Surface::Sidebar, crate::panels::draw_sidebar);
    registry.unregister(Surface::ContextMenu, crate::panels::draw_context_menu);
}
