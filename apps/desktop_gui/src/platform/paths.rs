use std::path::{Path, PathBuf};

use color_core::config::SETTINGS_FILE_NAME;

const APP_DIR_NAME: &str = "color_changer";

/// Resolves the settings file: an explicit path wins, then the per-user
/// config directory, then the working directory.
pub fn resolve_settings_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    match dirs::config_dir() {
        Some(base) => settings_path_in(&base),
        None => PathBuf::from(SETTINGS_FILE_NAME),
    }
}

fn settings_path_in(config_dir: &Path) -> PathBuf {
    config_dir.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME)
}
