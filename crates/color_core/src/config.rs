use std::{fs, io, path::Path};

use anyhow::Context;
use serde::Deserialize;
use shared::domain::{
    default_palette, ColorValue, DEFAULT_DRAFT_COLOR, DEFAULT_GRADIENT_END, DEFAULT_GRADIENT_START,
};
use tracing::warn;

pub const SETTINGS_FILE_NAME: &str = "settings.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub initial_draft: ColorValue,
    pub gradient_start: ColorValue,
    pub gradient_end: ColorValue,
    pub palette: Vec<ColorValue>,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            initial_draft: DEFAULT_DRAFT_COLOR.into(),
            gradient_start: DEFAULT_GRADIENT_START.into(),
            gradient_end: DEFAULT_GRADIENT_END.into(),
            palette: default_palette(),
            log_filter: "info".into(),
        }
    }
}

/// Reads `path` if it exists, then applies `APP__*` environment overrides.
///
/// A missing or malformed file yields defaults; a file that exists but
/// cannot be read is an error.
pub fn load_settings(path: &Path) -> anyhow::Result<Settings> {
    let settings = read_settings_file(path)?.unwrap_or_default();
    Ok(apply_env_overrides(settings, |name| std::env::var(name).ok()))
}

pub fn read_settings_file(path: &Path) -> anyhow::Result<Option<Settings>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read settings file '{}'", path.display()))
        }
    };
    match toml::from_str::<Settings>(&raw) {
        Ok(settings) => Ok(Some(settings)),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "ignoring malformed settings file");
            Ok(None)
        }
    }
}

pub fn apply_env_overrides(
    mut settings: Settings,
    lookup: impl Fn(&str) -> Option<String>,
) -> Settings {
    if let Some(v) = lookup("APP__INITIAL_DRAFT") {
        settings.initial_draft = v.into();
    }
    if let Some(v) = lookup("APP__GRADIENT_START") {
        settings.gradient_start = v.into();
    }
    if let Some(v) = lookup("APP__GRADIENT_END") {
        settings.gradient_end = v.into();
    }
    if let Some(v) = lookup("APP__PALETTE") {
        settings.palette = v
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(ColorValue::from)
            .collect();
    }
    if let Some(v) = lookup("APP__LOG_FILTER") {
        settings.log_filter = v;
    }

    if settings.palette.is_empty() {
        settings.palette = default_palette();
    }
    settings
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
