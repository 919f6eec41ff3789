use std::path::PathBuf;

use dirs_next::{cache_dir, config_dir, home_dir};

/// Directory name used under the platform config and cache roots.
pub const APP_DIR_NAME: &str = "reelflow";

/// File the TUI writes tracing output to while it owns the terminal.
pub const LOG_FILE_NAME: &str = "reelflow.log";

pub fn expand_tilde(path: &str) -> PathBuf {
    let p = path.trim();
    if p == "~" {
        return home_dir().unwrap_or_else(|| PathBuf::from("~"));
    }
    if let Some(rest) = p.strip_prefix("~/").or_else(|| p.strip_prefix("~\\")) {
        return home_dir().unwrap_or_else(|| PathBuf::from("~")).join(rest);
    }
    PathBuf::from(p)
}

/// `<config>/reelflow`, or `./reelflow` when the platform has no config dir.
pub fn app_config_dir() -> PathBuf {
    config_dir().unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR_NAME)
}

/// `<cache>/reelflow/reelflow.log`, falling back to the system temp dir.
pub fn default_log_path() -> PathBuf {
    cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR_NAME)
        .join(LOG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paths_pass_through_trimmed() {
        assert_eq!(expand_tilde("  /tmp/settings.json "), PathBuf::from("/tmp/settings.json"));
    }

    #[test]
    fn tilde_prefix_expands_to_home() {
        let Some(home) = home_dir() else {
            return;
        };
        assert_eq!(expand_tilde("~"), home);
        assert_eq!(expand_tilde("~/reelflow/settings.json"), home.join("reelflow/settings.json"));
    }

    #[test]
    fn log_path_ends_with_app_dir_and_file() {
        let path = default_log_path();
        assert!(path.ends_with(PathBuf::from(APP_DIR_NAME).join(LOG_FILE_NAME)));
    }
}
