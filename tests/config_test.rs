use clap::Parser;
use ldforge::cli::Cli;
use ldforge::config::Settings;
use ldforge::mapper::RecipeRowBinding;
use ldforge::validation::ValidationPolicy;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_config_file_uses_defaults() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let settings = Settings::from_path(&temp_dir.path().join("ldforge.toml"))?;

    assert_eq!(settings.mapper.validation, ValidationPolicy::Lenient);
    assert_eq!(settings.mapper.recipe_row_binding, RecipeRowBinding::Legacy);
    assert_eq!(settings.preview.debounce_ms, 250);
    assert_eq!(settings.clipboard.feedback_ms, 2000);
    assert_eq!(settings.clipboard.copied_label, "Copied!");
    assert_eq!(settings.logging.filter, "ldforge=info");
    Ok(())
}

#[test]
fn test_load_config_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("ldforge.toml");

    let ldforge_toml = r#"
[mapper]
validation = "strict"
recipe_row_binding = "direct"

[preview]
debounce_ms = 0

[clipboard]
label = "Copy code"
"#;
    fs::write(&path, ldforge_toml)?;

    let settings = Settings::from_path(&path)?;
    assert_eq!(settings.mapper.validation, ValidationPolicy::Strict);
    assert_eq!(settings.mapper.recipe_row_binding, RecipeRowBinding::Direct);
    assert_eq!(settings.preview.debounce_ms, 0);
    assert_eq!(settings.clipboard.label, "Copy code");
    // untouched keys keep their defaults
    assert_eq!(settings.clipboard.feedback_ms, 2000);
    Ok(())
}

#[test]
fn test_cli_overrides_config_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("ldforge.toml");
    fs::write(
        &path,
        "[mapper]\nrecipe_row_binding = \"direct\"\n\n[preview]\ndebounce_ms = 500\n",
    )?;

    let config = path.to_string_lossy().to_string();
    let cli = Cli::parse_from([
        "ldforge",
        "--config",
        config.as_str(),
        "--strict",
        "--recipe-binding",
        "legacy",
        "--debounce-ms",
        "50",
        "types",
    ]);
    let settings = Settings::new_with_cli(&cli)?;

    assert_eq!(settings.mapper.validation, ValidationPolicy::Strict);
    assert_eq!(settings.mapper.recipe_row_binding, RecipeRowBinding::Legacy);
    assert_eq!(settings.preview.debounce_ms, 50);
    Ok(())
}

#[test]
fn test_invalid_config_is_rejected() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("ldforge.toml");
    fs::write(&path, "[clipboard]\nfeedback_ms = 0\ncopied_label = \"\"\n")?;

    let err = Settings::from_path(&path).unwrap_err().to_string();
    assert!(err.contains("Configuration validation failed"));
    assert!(err.contains("clipboard.feedback_ms"));
    assert!(err.contains("clipboard.copied_label"));
    Ok(())
}

#[test]
fn test_unknown_policy_is_a_load_error() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("ldforge.toml");
    fs::write(&path, "[mapper]\nvalidation = \"sometimes\"\n")?;

    assert!(Settings::from_path(&path).is_err());
    Ok(())
}
