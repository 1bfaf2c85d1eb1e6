use super::*;
use tempfile::tempdir;

#[test]
fn ensure_settings_file_writes_defaults_once() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".zpad").join("settings.json");

    ensure_settings_file(&path).unwrap();
    assert_eq!(load_settings_from(&path).unwrap(), Settings::default());

    std::fs::write(&path, r#"{ "sidebar_visible": false }"#).unwrap();
    ensure_settings_file(&path).unwrap();
    assert!(!load_settings_from(&path).unwrap().sidebar_visible);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(
        &path,
        r#"{ "editor": { "theme": "monokai", "initial_mode": "python" }, "seed_samples": false }"#,
    )
    .unwrap();

    let settings = load_settings_from(&path).unwrap();

    assert_eq!(settings.editor.theme, "monokai");
    assert_eq!(settings.editor.initial_mode, SyntaxMode::Python);
    assert!(settings.editor.line_numbers);
    assert!(settings.sidebar_visible);
    assert!(!settings.seed_samples);
}

#[test]
fn parse_errors_are_reported() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = load_settings_from(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Parse(_)));
    assert!(err.to_string().starts_with("invalid settings file"));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let err = load_settings_from(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, SettingsError::Io(_)));
}

#[test]
fn editor_options_start_read_only() {
    let settings = EditorSettings {
        theme: "solarized".to_string(),
        line_numbers: false,
        initial_mode: SyntaxMode::Stylesheet,
    };

    let options = settings.editor_options();

    assert!(options.read_only);
    assert!(!options.line_numbers);
    assert_eq!(options.theme, "solarized");
    assert_eq!(options.mode, SyntaxMode::Stylesheet);
}

#[test]
fn initial_mode_defaults_to_markup() {
    assert_eq!(Settings::default().editor.initial_mode, SyntaxMode::Markup);

    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "editor": {} }"#).unwrap();
    assert_eq!(
        load_settings_from(&path).unwrap().editor.initial_mode,
        SyntaxMode::Markup
    );
}
