//! Shared configuration handle

use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::RwLock;

use switcher_core::ConfigManager;

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "VIEW_SWITCHER_CONFIG";

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "view-switcher.ron";

pub type SharedConfig = Arc<RwLock<ConfigManager>>;

/// Resolve the config file path.
pub fn config_path() -> PathBuf {
    std::env::var(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE))
}

/// Load the configuration at `path`, falling back to defaults when the
/// file is missing or unreadable.
pub fn create_shared_config(path: PathBuf) -> SharedConfig {
    let manager = match ConfigManager::load(&path) {
        Ok(manager) => manager,
        Err(e) => {
            if path.exists() {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
            }
            ConfigManager::new(path)
        }
    };
    Arc::new(RwLock::new(manager))
}
