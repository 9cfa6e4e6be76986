use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub mod validator;

use crate::cli::Cli;
use crate::mapper::RecipeRowBinding;
use crate::validation::ValidationPolicy;

pub const ENV_PREFIX: &str = "LDFORGE";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub mapper: MapperSettings,
    #[serde(default)]
    pub preview: PreviewSettings,
    #[serde(default)]
    pub clipboard: ClipboardSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// How form state becomes schema
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct MapperSettings {
    #[serde(default)]
    pub validation: ValidationPolicy,
    /// Which rows feed `recipeIngredient` and `recipeInstructions`
    #[serde(default)]
    pub recipe_row_binding: RecipeRowBinding,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PreviewSettings {
    /// Delay between the last edit and the preview refresh; 0 refreshes on every edit
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl PreviewSettings {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClipboardSettings {
    /// How long the copy button shows `copied_label`
    #[serde(default = "default_feedback_ms")]
    pub feedback_ms: u64,
    #[serde(default = "default_copy_label")]
    pub label: String,
    #[serde(default = "default_copied_label")]
    pub copied_label: String,
}

impl ClipboardSettings {
    pub fn feedback_window(&self) -> Duration {
        Duration::from_millis(self.feedback_ms)
    }
}

impl Default for ClipboardSettings {
    fn default() -> Self {
        Self {
            feedback_ms: default_feedback_ms(),
            label: default_copy_label(),
            copied_label: default_copied_label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingSettings {
    /// `tracing_subscriber::EnvFilter` directive; `RUST_LOG` takes precedence
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    250
}

fn default_feedback_ms() -> u64 {
    2000
}

fn default_copy_label() -> String {
    "Copy".to_string()
}

fn default_copied_label() -> String {
    "Copied!".to_string()
}

fn default_log_filter() -> String {
    "ldforge=info".to_string()
}

impl Settings {
    /// Create settings from CLI arguments (config file, then env, then CLI overrides)
    pub fn new_with_cli(cli: &Cli) -> Result<Self, anyhow::Error> {
        let mut settings = Self::load(&cli.config)?;

        // CLI > env vars > config file
        settings.apply_cli_overrides(cli);

        settings.validate()?;
        Ok(settings)
    }

    pub fn from_path(path: &Path) -> Result<Self, anyhow::Error> {
        let settings = Self::load(path)?;
        settings.validate()?;
        Ok(settings)
    }

    fn load(path: &Path) -> Result<Self, anyhow::Error> {
        let s = Config::builder()
            .set_default("mapper.validation", "lenient")?
            .set_default("mapper.recipe_row_binding", "legacy")?
            .set_default("preview.debounce_ms", default_debounce_ms() as i64)?
            .set_default("clipboard.feedback_ms", default_feedback_ms() as i64)?
            .set_default("clipboard.label", default_copy_label())?
            .set_default("clipboard.copied_label", default_copied_label())?
            .set_default("logging.filter", default_log_filter())?
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = s.try_deserialize()?;
        tracing::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Apply CLI argument overrides to settings
    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if cli.strict {
            self.mapper.validation = ValidationPolicy::Strict;
        }
        if let Some(binding) = cli.recipe_binding {
            self.mapper.recipe_row_binding = binding;
        }
        if let Some(debounce_ms) = cli.debounce_ms {
            self.preview.debounce_ms = debounce_ms;
        }
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        validator::ConfigValidator::validate(self).map_err(|errors| {
            let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            anyhow::anyhow!(
                "Configuration validation failed:\n{}",
                error_messages.join("\n")
            )
        })
    }
}
