use super::*;

use std::{collections::HashMap, fs};

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(SETTINGS_FILE_NAME);

    assert_eq!(read_settings_file(&path).expect("read"), None);
    assert_eq!(load_settings(&path).expect("defaults").palette.len(), 24);
}

#[test]
fn partial_file_keeps_defaults_for_unset_fields() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(SETTINGS_FILE_NAME);
    fs::write(
        &path,
        "initial_draft = \"#123456\"\npalette = [\"red\", \"navy\"]\n",
    )
    .expect("write settings");

    let settings = read_settings_file(&path).expect("read").expect("settings");
    assert_eq!(settings.initial_draft.as_str(), "#123456");
    assert_eq!(
        settings.palette,
        vec![ColorValue::from("red"), ColorValue::from("navy")]
    );
    assert_eq!(settings.gradient_end.as_str(), "#8f94fb");
    assert_eq!(settings.log_filter, "info");
}

#[test]
fn malformed_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(SETTINGS_FILE_NAME);
    fs::write(&path, "palette = 7").expect("write settings");

    assert_eq!(read_settings_file(&path).expect("read"), None);
    let settings = load_settings(&path).expect("defaults");
    assert_eq!(settings.palette.len(), 24);
    assert_eq!(settings.gradient_end.as_str(), "#8f94fb");
}

#[test]
fn unreadable_path_is_an_error_with_context() {
    let dir = tempfile::tempdir().expect("tempdir");

    let err = read_settings_file(dir.path()).expect_err("directory is not a file");
    assert!(format!("{err:#}").contains("failed to read settings file"));
}

#[test]
fn env_overrides_replace_file_values() {
    let env: HashMap<&str, &str> = HashMap::from([
        ("APP__INITIAL_DRAFT", "#abcdef"),
        ("APP__GRADIENT_START", "black"),
        ("APP__PALETTE", "red, blue,,gold"),
        ("APP__LOG_FILTER", "debug"),
    ]);

    let settings = apply_env_overrides(Settings::default(), |name| {
        env.get(name).map(|v| v.to_string())
    });
    assert_eq!(settings.initial_draft.as_str(), "#abcdef");
    assert_eq!(settings.gradient_start.as_str(), "black");
    assert_eq!(settings.gradient_end.as_str(), "#8f94fb");
    assert_eq!(
        settings.palette,
        vec![
            ColorValue::from("red"),
            ColorValue::from("blue"),
            ColorValue::from("gold")
        ]
    );
    assert_eq!(settings.log_filter, "debug");
}

#[test]
fn empty_palette_falls_back_to_presets() {
    let settings = Settings {
        palette: Vec::new(),
        ..Settings::default()
    };
    assert_eq!(apply_env_overrides(settings, no_env).palette.len(), 24);
}
