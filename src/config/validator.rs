use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::{ClipboardSettings, LoggingSettings, PreviewSettings, Settings};

/// Longest debounce a preview may wait before refreshing
pub const MAX_DEBOUNCE_MS: u64 = 10_000;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(settings: &Settings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = Self::validate_preview(&settings.preview) {
            errors.extend(e);
        }

        if let Err(e) = Self::validate_clipboard(&settings.clipboard) {
            errors.extend(e);
        }

        if let Err(e) = Self::validate_logging(&settings.logging) {
            errors.extend(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_preview(preview: &PreviewSettings) -> Result<(), Vec<ValidationError>> {
        if preview.debounce_ms > MAX_DEBOUNCE_MS {
            return Err(vec![ValidationError::InvalidValue {
                field: "preview.debounce_ms".to_string(),
                reason: format!("Debounce must not exceed {} ms", MAX_DEBOUNCE_MS),
            }]);
        }
        Ok(())
    }

    fn validate_clipboard(clipboard: &ClipboardSettings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if clipboard.feedback_ms == 0 {
            errors.push(ValidationError::InvalidValue {
                field: "clipboard.feedback_ms".to_string(),
                reason: "Feedback window must be greater than 0".to_string(),
            });
        }

        if clipboard.label.trim().is_empty() {
            errors.push(ValidationError::MissingField("clipboard.label".to_string()));
        }

        if clipboard.copied_label.trim().is_empty() {
            errors.push(ValidationError::MissingField(
                "clipboard.copied_label".to_string(),
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_logging(logging: &LoggingSettings) -> Result<(), Vec<ValidationError>> {
        if logging.filter.trim().is_empty() {
            return Err(vec![ValidationError::MissingField(
                "logging.filter".to_string(),
            )]);
        }
        if let Err(e) = EnvFilter::try_new(&logging.filter) {
            return Err(vec![ValidationError::InvalidValue {
                field: "logging.filter".to_string(),
                reason: e.to_string(),
            }]);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let settings = Settings::default();
        let result = ConfigValidator::validate(&settings);
        assert!(result.is_ok());
    }

    #[test]
    fn test_debounce_upper_bound() {
        let mut settings = Settings::default();
        settings.preview.debounce_ms = MAX_DEBOUNCE_MS + 1;

        let result = ConfigValidator::validate(&settings);
        assert!(result.is_err());
        let errors = result.unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("preview.debounce_ms"));
    }

    #[test]
    fn test_clipboard_errors_are_collected() {
        let mut settings = Settings::default();
        settings.clipboard.feedback_ms = 0;
        settings.clipboard.label = " ".to_string();
        settings.clipboard.copied_label = String::new();

        let errors = ConfigValidator::validate(&settings).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_invalid_log_filter() {
        let mut settings = Settings::default();
        settings.logging.filter = "ldforge=loud".to_string();

        let errors = ConfigValidator::validate(&settings).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], ValidationError::InvalidValue { .. }));
    }
}
