//! Settings parsing and loading

use checkers_core::{Difficulty, LlmSettings, Settings, SettingsError};
use std::path::PathBuf;
use std::time::Duration;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("checkers-{}-{}", std::process::id(), name))
}

#[test]
fn test_defaults() {
    let settings = Settings::default();
    assert_eq!(settings.difficulty, Difficulty::Medium);
    assert!(settings.llm.endpoint.contains("generateContent"));
    assert_eq!(settings.llm.api_key_env, "GEMINI_API_KEY");
    assert_eq!(settings.llm.timeout(), Duration::from_secs(20));
}

#[test]
fn test_partial_file_keeps_defaults() {
    let settings = Settings::from_toml("difficulty = \"hard\"").unwrap();
    assert_eq!(settings.difficulty, Difficulty::Hard);
    assert_eq!(settings.llm, LlmSettings::default());

    let settings = Settings::from_toml("[llm]\ntimeout_secs = 5\n").unwrap();
    assert_eq!(settings.difficulty, Difficulty::Medium);
    assert_eq!(settings.llm.timeout_secs, 5);
    assert_eq!(settings.llm.api_key_env, "GEMINI_API_KEY");
}

#[test]
fn test_bad_difficulty_rejected() {
    assert!(Settings::from_toml("difficulty = \"expert\"").is_err());
}

#[test]
fn test_load_from_file() {
    let path = temp_path("load.toml");
    std::fs::write(
        &path,
        "difficulty = \"easy\"\n[llm]\nendpoint = \"http://localhost:9/gen\"\napi_key_env = \"CHECKERS_TEST_KEY\"\n",
    )
    .unwrap();

    let settings = Settings::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(settings.difficulty, Difficulty::Easy);
    assert_eq!(settings.llm.endpoint, "http://localhost:9/gen");
    assert_eq!(settings.llm.api_key_env, "CHECKERS_TEST_KEY");
}

#[test]
fn test_load_errors() {
    let missing = temp_path("missing.toml");
    assert!(matches!(
        Settings::load(&missing),
        Err(SettingsError::Read { .. })
    ));

    let broken = temp_path("broken.toml");
    std::fs::write(&broken, "difficulty = [").unwrap();
    let err = Settings::load(&broken);
    std::fs::remove_file(&broken).ok();
    assert!(matches!(err, Err(SettingsError::Parse { .. })));
}

#[test]
fn test_api_key_lookup() {
    let llm = LlmSettings {
        api_key_env: "CHECKERS_SETTINGS_TEST_UNSET_KEY".to_string(),
        ..LlmSettings::default()
    };
    assert_eq!(llm.api_key(), None);
}
