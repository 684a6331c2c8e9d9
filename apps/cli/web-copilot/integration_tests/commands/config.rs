use web_copilot::commands::config::show_config;

use copilot_core::QueryConfig;

use tempfile::TempDir;

#[test]
fn given_empty_dir_when_shown_then_defaults_printed_without_writing() {
    let dir = TempDir::new().unwrap();

    let toml = show_config(dir.path(), false).unwrap();

    assert!(toml.contains("max_context_chars = 10000"));
    assert!(toml.contains("model = \"gpt-4\""));
    assert!(!dir.path().join("copilot.toml").exists());
}

#[test]
fn given_init_flag_when_shown_then_defaults_written_and_loadable() {
    let dir = TempDir::new().unwrap();

    show_config(dir.path(), true).unwrap();

    assert!(dir.path().join("copilot.toml").exists());
    assert_eq!(QueryConfig::load(dir.path()).unwrap(), QueryConfig::default());
}
