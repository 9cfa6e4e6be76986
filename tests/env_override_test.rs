use ldforge::config::Settings;
use ldforge::validation::ValidationPolicy;
use std::fs;
use tempfile::TempDir;

// Kept alone in its own test binary: it mutates process environment.
#[test]
fn test_env_overrides_config_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("ldforge.toml");
    fs::write(&path, "[preview]\ndebounce_ms = 500\n")?;

    std::env::set_var("LDFORGE_PREVIEW__DEBOUNCE_MS", "75");
    std::env::set_var("LDFORGE_MAPPER__VALIDATION", "strict");
    let settings = Settings::from_path(&path);
    std::env::remove_var("LDFORGE_PREVIEW__DEBOUNCE_MS");
    std::env::remove_var("LDFORGE_MAPPER__VALIDATION");

    let settings = settings?;
    assert_eq!(settings.preview.debounce_ms, 75);
    assert_eq!(settings.mapper.validation, ValidationPolicy::Strict);
    Ok(())
}
