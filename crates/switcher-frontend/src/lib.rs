//! View Switcher Frontend
//!
//! egui-based surfaces for the view switcher: header row, sidebar panel,
//! viewport context menu, and the preferences window.

pub mod actions;
pub mod app;
pub mod config;
pub mod panels;
pub mod state;

// Re-exports for convenience
pub use app::ViewSwitcherApp;
pub use config::{SharedConfig, config_path, create_shared_config};
pub use state::{AppState, SharedAppState};
