//! Integration Tests for Configuration Loading
//!
//! Loads configuration files from disk and checks that they shape the
//! session built from them.

use std::fs;

use tempfile::TempDir;
use termfolio::{create_session, load_config, Classification, Config, ConfigLoader, Error};

#[test]
fn test_toml_config_shapes_session() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("termfolio.toml");
    fs::write(
        &path,
        r#"
[terminal]
prompt = "guest@site:~$"
help_column_width = 12

[[commands]]
name = "blog"
description = "Read my blog"
lines = ["blog.example.com", "", "New posts every month"]
"#,
    )
    .unwrap();

    let config = load_config(Some(&path)).unwrap();
    let mut session = create_session(&config).unwrap();
    assert_eq!(session.prompt(), "guest@site:~$");

    let blog = session.submit("blog").unwrap().clone();
    assert_eq!(blog.classification(), Classification::Success);
    assert_eq!(
        blog.output_lines(),
        ["blog.example.com", "", "New posts every month"]
    );

    let help = session.submit("help").unwrap().clone();
    assert_eq!(help.output_lines().last().unwrap(), &format!("{:<12} Read my blog", "blog"));
    assert!(help.output_lines()[0].starts_with(&format!("{:<12} Show", "help")));
}

#[test]
fn test_json_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("termfolio.json");
    fs::write(&path, r#"{"terminal": {"copy_feedback_ms": 750}}"#).unwrap();

    let config = load_config(Some(&path)).unwrap();
    assert_eq!(config.terminal.copy_feedback_ms, 750);
    assert_eq!(config.terminal.prompt, Config::default().terminal.prompt);
}

#[test]
fn test_invalid_toml_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.toml");
    fs::write(&path, "[terminal\nprompt = ").unwrap();

    let result = load_config(Some(&path));
    assert!(matches!(result, Err(Error::ConfigParseFailed { .. })));
}

#[test]
fn test_custom_command_cannot_shadow_builtin() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("shadow.toml");
    fs::write(
        &path,
        r#"
[[commands]]
name = "help"
lines = ["nope"]
"#,
    )
    .unwrap();

    let config = load_config(Some(&path)).unwrap();
    let result = create_session(&config);
    assert!(matches!(result, Err(Error::DuplicateCommand { name }) if name == "help"));
}

#[test]
fn test_out_of_range_width_is_rejected_on_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("wide.toml");
    fs::write(&path, "[terminal]\nhelp_column_width = 500\n").unwrap();

    let result = ConfigLoader::load_from_path(&path);
    assert!(matches!(
        result,
        Err(Error::ConfigValidationFailed { field, .. }) if field == "terminal.help_column_width"
    ));
}
