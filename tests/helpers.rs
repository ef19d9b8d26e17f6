//! Path and settings helpers driven from a loaded configuration.

use web_helpers::config::parse_config;
use web_helpers::{absolute_path, containing_dir, AppRoot};

const CONFIG: &str = r#"
[paths]
app_root = "/wiki"
physical_root = 'C:\sites\wiki\'

[app_settings]
SiteName = "  Team Wiki "
Empty = "   "
"#;

#[test]
fn rewrites_against_configured_root() {
    let config = parse_config(CONFIG).unwrap();
    let root = AppRoot::new(&config.paths.app_root);

    let markdown = "[Home](~/index) ![logo](%7E/img/logo.png)";
    assert_eq!(root.transform(markdown), "[Home](/wiki/index) ![logo](/wiki/img/logo.png)");
}

#[test]
fn physical_file_to_url_and_directory() {
    let config = parse_config(CONFIG).unwrap();

    let url = absolute_path(r"C:\sites\wiki\docs\setup\install.md", &config.paths.physical_root);
    assert_eq!(url, "/docs/setup/install.md");
    assert_eq!(containing_dir(&url), "/docs/setup/");
}

#[test]
fn settings_with_defaults() {
    let config = parse_config(CONFIG).unwrap();
    let settings = config.settings();

    assert_eq!(settings.param("SiteName"), "Team Wiki");
    assert_eq!(settings.param_or("Empty", "n/a"), "n/a");
    assert_eq!(settings.param_or("Missing", "n/a"), "n/a");
    assert_eq!(settings.param("Missing"), "");
}
