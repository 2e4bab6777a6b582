//! Look-and-feel and configuration for the catalog TUI.
//!
//! Holds the color palette plus the `settings.conf` layer (paths, parsing,
//! persistence). Public re-exports keep the `crate::theme::*` API stable.

/// Settings file creation and persistence.
mod config;
/// Configuration parsing utilities.
mod parsing;
/// Path resolution for config directories.
mod paths;
/// Settings access.
mod settings;
/// Built-in palette.
mod store;
/// Theme type definitions.
mod types;

pub use config::{SETTINGS_SKELETON_CONTENT, ensure_settings_file, save_setting};
pub use paths::{config_dir, logs_dir, settings_path};
pub use settings::{load_settings, parse_settings, read_setting, settings};
pub use store::theme;
pub use types::{DEFAULT_ENDPOINT, Settings, Theme};

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a process-wide mutex to serialize environment-mutating tests in this module.
///
/// Inputs:
/// - None
///
/// Output:
/// - Shared reference to a lazily-initialized `Mutex<()>`.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
