//! Helpers shared by the reelflow binary and TUI: filesystem locations and
//! layered read-only settings.

pub mod path_processing;
pub mod settings;

pub use path_processing::{APP_DIR_NAME, LOG_FILE_NAME, app_config_dir, default_log_path, expand_tilde};
pub use settings::{Settings, SettingsError, default_settings_path};
