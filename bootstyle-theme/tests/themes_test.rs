//! Tests for theme loading, switching and contrast rules

use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use bootstyle_theme::config::ThemeConfig;
use bootstyle_theme::definition::{load_themes_file, load_themes_str, DefinitionFormat, ThemeDefinition};
use bootstyle_theme::theme::builtin;
use bootstyle_theme::{ColorToken, ThemeError, ThemeProvider};

const OCEAN_TOML: &str = r##"
[[themes]]
name = "ocean"
type = "dark"

[themes.colors]
primary = "#1b6ca8"
secondary = "#4e5d6c"
success = "#5cb85c"
info = "#5bc0de"
warning = "#f0ad4e"
danger = "#d9534f"
light = "#abb6c2"
dark = "#20374c"
bg = "#0b1d2e"
fg = "#ffffff"
border = "#222222"

[[themes]]
name = "sand"

[themes.colors]
primary = "#c2a878"
secondary = "#9e9e9e"
success = "#4caf50"
info = "#2196f3"
warning = "#ff9800"
danger = "#f44336"
light = "#fafafa"
dark = "#3e3e3e"
background = "#fffdf7"
foreground = "#3e3e3e"
bordercolor = "#d6d0c4"
"##;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("bootstyle-theme-{}-{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_dark_background_contrasts_with_foreground() {
    let theme = builtin::theme("darkly").unwrap();
    assert_eq!(
        theme.contrast_foreground(ColorToken::Background),
        theme.color(ColorToken::Foreground)
    );
}

#[test]
fn test_light_extreme_contrasts_with_dark() {
    let theme = builtin::theme("litera").unwrap();
    assert_eq!(theme.contrast_foreground(ColorToken::Light), theme.color(ColorToken::Dark));
}

#[test]
fn test_toml_theme_list() {
    let themes = load_themes_str(OCEAN_TOML, DefinitionFormat::Toml).unwrap();
    let names: Vec<_> = themes.iter().map(|t| t.name().to_string()).collect();
    assert_eq!(names, vec!["ocean", "sand"]);
    assert!(themes[0].is_dark());
    assert!(!themes[1].is_dark());
    assert_eq!(themes[1].color(ColorToken::Border).to_hex(), "#d6d0c4");
}

#[test]
fn test_json_list_of_definitions() {
    let defs: Vec<ThemeDefinition> = ["cosmo", "cyborg"]
        .iter()
        .map(|name| ThemeDefinition::from(&builtin::theme(name).unwrap()))
        .collect();
    let json = serde_json::to_string(&defs).unwrap();
    let themes = load_themes_str(&json, DefinitionFormat::Json).unwrap();
    assert_eq!(themes.len(), 2);
    assert_eq!(themes[1], builtin::theme("cyborg").unwrap());
}

#[test]
fn test_invalid_file_reports_path() {
    let dir = scratch_dir("invalid");
    let path = dir.join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    match load_themes_file(&path) {
        Err(ThemeError::ParseError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_config_file_loads_relative_definitions() {
    let dir = scratch_dir("config");
    fs::write(dir.join("ocean.toml"), OCEAN_TOML).unwrap();
    fs::write(
        dir.join("bootstyle.toml"),
        "[theme]\ndefault = \"ocean\"\nfallback = \"litera\"\ndefinitions = [\"ocean.toml\"]\n",
    )
    .unwrap();

    let config = ThemeConfig::from_file(dir.join("bootstyle.toml")).unwrap();
    assert_eq!(config.definitions, vec![dir.join("ocean.toml")]);

    let mut provider = ThemeProvider::new();
    let change = config.apply(&mut provider).unwrap();
    assert_eq!(change.previous, "litera");
    assert_eq!(change.current, "ocean");
    assert!(provider.get("sand").is_some());
}

#[test]
fn test_switch_round_trip_notifies_in_order() {
    let mut provider = ThemeProvider::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = log.clone();
    provider.subscribe(move |change| sink.lock().unwrap().push(change.current.clone()));

    provider.use_theme("minty").unwrap();
    provider.use_theme("solar").unwrap();
    provider.use_theme("solar").unwrap();
    provider.use_theme("minty").unwrap();

    assert_eq!(*log.lock().unwrap(), vec!["minty", "solar", "minty"]);
    assert_eq!(provider.active(), provider.get("minty").unwrap());
}
