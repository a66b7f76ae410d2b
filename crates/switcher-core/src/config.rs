//! Switcher configuration and persistence
//!
//! The configuration is stored as RON next to the application (or wherever
//! the frontend resolves the path to) and edited through the preferences
//! window.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Where the switcher buttons are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplayLocation {
    /// Show in the viewport header row.
    #[default]
    Header,
    /// Show in the sidebar panel.
    Sidebar,
    /// Show in both places.
    Both,
}

impl DisplayLocation {
    /// All locations, for the preferences combo box.
    pub const ALL: [DisplayLocation; 3] = [
        DisplayLocation::Header,
        DisplayLocation::Sidebar,
        DisplayLocation::Both,
    ];

    /// Display name.
    pub fn label(&self) -> &'static str {
        match self {
            DisplayLocation::Header => "Header",
            DisplayLocation::Sidebar => "Sidebar",
            DisplayLocation::Both => "Both",
        }
    }

    /// Whether the header row renders.
    pub fn shows_header(&self) -> bool {
        matches!(self, DisplayLocation::Header | DisplayLocation::Both)
    }

    /// Whether the sidebar panel renders.
    pub fn shows_sidebar(&self) -> bool {
        matches!(self, DisplayLocation::Sidebar | DisplayLocation::Both)
    }
}

/// Persisted switcher preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitcherConfig {
    /// Display icons instead of text labels.
    #[serde(default = "default_use_icons")]
    pub use_icons: bool,
    /// Where to show the view switcher buttons.
    #[serde(default)]
    pub display_location: DisplayLocation,
}

fn default_use_icons() -> bool {
    true
}

impl Default for SwitcherConfig {
    fn default() -> Self {
        Self {
            use_icons: true,
            display_location: DisplayLocation::Header,
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Deserialization error: {0}")]
    Deserialize(String),
}

/// Owns the loaded configuration and the path it persists to.
pub struct ConfigManager {
    config: SwitcherConfig,
    path: PathBuf,
}

impl ConfigManager {
    /// Create a manager with default settings, persisting to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            config: SwitcherConfig::default(),
            path: path.into(),
        }
    }

    /// Load the configuration stored at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        let config =
            ron::from_str(&content).map_err(|e| ConfigError::Deserialize(e.to_string()))?;
        Ok(Self {
            config,
            path: path.to_path_buf(),
        })
    }

    /// Current configuration.
    pub fn config(&self) -> &SwitcherConfig {
        &self.config
    }

    /// Mutable access to the current configuration.
    pub fn config_mut(&mut self) -> &mut SwitcherConfig {
        &mut self.config
    }

    /// Path the configuration persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the current configuration to disk as RON.
    pub fn save(&self) -> Result<(), ConfigError> {
        let content = ron::ser::to_string_pretty(&self.config, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;
        fs::write(&self.path, content).map_err(|e| ConfigError::Io(e.to_string()))
    }

    /// Restore the built-in defaults (does not save).
    pub fn reset_to_defaults(&mut self) {
        self.config = SwitcherConfig::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SwitcherConfig::default();
        assert!(config.use_icons);
        assert_eq!(config.display_location, DisplayLocation::Header);
    }

    #[test]
    fn test_display_location_visibility() {
        assert!(DisplayLocation::Header.shows_header());
        assert!(!DisplayLocation::Header.shows_sidebar());
        assert!(!DisplayLocation::Sidebar.shows_header());
        assert!(DisplayLocation::Sidebar.shows_sidebar());
        assert!(DisplayLocation::Both.shows_header());
        assert!(DisplayLocation::Both.shows_sidebar());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("switcher.ron");

        let mut manager = ConfigManager::new(&path);
        manager.config_mut().use_icons = false;
        manager.config_mut().display_location = DisplayLocation::Both;
        manager.save().unwrap();

        let loaded = ConfigManager::load(&path).unwrap();
        assert_eq!(loaded.config(), manager.config());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ConfigManager::load(dir.path().join("absent.ron")).is_err());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: SwitcherConfig = ron::from_str("(display_location: Both)").unwrap();
        assert!(config.use_icons);
        assert_eq!(config.display_location, DisplayLocation::Both);
    }

    #[test]
    fn test_reset_to_defaults() {
        let mut manager = ConfigManager::new("switcher.ron");
        manager.config_mut().display_location = DisplayLocation::Sidebar;
        manager.reset_to_defaults();
        assert_eq!(manager.config(), &SwitcherConfig::default());
    }
}
