//! Reading form state from JSON, YAML or TOML files

use std::path::{Path, PathBuf};

use super::FormState;
use crate::error::FormLoadError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormFormat {
    Json,
    Yaml,
    Toml,
}

impl FormFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str())? {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    pub fn parse(self, content: &str) -> Result<FormState, String> {
        match self {
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            Self::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

/// Load one form file; the format follows the extension
pub fn load_form_state(path: &Path) -> Result<FormState, FormLoadError> {
    let format = FormFormat::from_path(path)
        .ok_or_else(|| FormLoadError::UnsupportedFormat(path.to_path_buf()))?;
    let content = std::fs::read_to_string(path).map_err(|source| FormLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let state = format.parse(&content).map_err(|reason| FormLoadError::Parse {
        path: path.to_path_buf(),
        reason,
    })?;
    tracing::debug!("Loaded {} form from {}", state.schema_type, path.display());
    Ok(state)
}

/// Load every form file in a directory, sorted by path.
///
/// Files with other extensions are skipped; unreadable glob entries are
/// logged and skipped.
pub fn load_forms_from_dir(dir: &Path) -> Result<Vec<(PathBuf, FormState)>, FormLoadError> {
    let pattern = format!("{}/*", dir.display());
    let mut forms = Vec::new();
    for entry in glob::glob(&pattern)? {
        match entry {
            Ok(path) => {
                if FormFormat::from_path(&path).is_some() {
                    let state = load_form_state(&path)?;
                    forms.push((path, state));
                }
            }
            Err(e) => tracing::warn!("Failed to read glob entry: {}", e),
        }
    }
    forms.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(forms)
}
