//! Schema Mapper
//!
//! Turns the in-memory [`FormState`] into one schema.org object for the
//! selected type. Mapping itself never fails: blank or absent inputs read as
//! `""` and optional sub-objects are dropped per type. The validation policy
//! decides whether missing or malformed fields block generation.
//!
//! Shared shaping rules:
//! - list-shaped fields collapse to a bare value for one entry and stay an
//!   array for two or more (see [`collapse`])
//! - durations are built as `PT{minutes}M` or `PT{minutes}M{seconds}S`
//! - date and time join with `T` only when both are present
//! - status and availability selections become `https://schema.org/{value}`

use serde_json::Value;

use crate::config::MapperSettings;
use crate::domain::SchemaType;
use crate::error::{GenerateError, GenerateResult};
use crate::forms::FormState;
use crate::preview;
use crate::validation::{self, ValidationPolicy};

mod article;
mod breadcrumb;
mod event;
mod faq;
mod howto;
mod job_posting;
mod local_business;
mod person;
mod recipe;
mod video;
mod website;

#[cfg(test)]
mod content_test;
#[cfg(test)]
mod entity_test;

pub use article::map_article;
pub use breadcrumb::map_breadcrumb;
pub use event::map_event;
pub use faq::map_faq;
pub use howto::map_howto;
pub use job_posting::map_job_posting;
pub use local_business::map_local_business;
pub use person::map_person;
pub use recipe::map_recipe;
pub use video::map_video;
pub use website::map_website;

/// Which rows the Recipe generator reads for ingredients and instructions.
///
/// `Legacy` reproduces the published tool, whose ingredient and step rows were
/// never picked up, so those fields always carry their placeholders.
/// `Direct` reads the rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipeRowBinding {
    #[default]
    Legacy,
    Direct,
}

impl std::str::FromStr for RecipeRowBinding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "direct" => Ok(Self::Direct),
            other => Err(format!("Unknown recipe row binding: {}", other)),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SchemaMapper {
    settings: MapperSettings,
}

impl SchemaMapper {
    pub fn new(settings: MapperSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &MapperSettings {
        &self.settings
    }

    /// Map the selected type without validation
    pub fn map(&self, state: &FormState) -> Value {
        self.map_type(state, state.schema_type)
    }

    /// Map a specific type without validation
    pub fn map_type(&self, state: &FormState, schema_type: SchemaType) -> Value {
        match schema_type {
            SchemaType::Article => map_article(&state.article),
            SchemaType::Breadcrumb => map_breadcrumb(&state.breadcrumb),
            SchemaType::Event => map_event(&state.event),
            SchemaType::Faq => map_faq(&state.faq),
            SchemaType::HowTo => map_howto(&state.howto),
            SchemaType::JobPosting => map_job_posting(&state.job_posting),
            SchemaType::LocalBusiness => map_local_business(&state.local_business),
            SchemaType::Person => map_person(&state.person),
            SchemaType::Video => map_video(&state.video),
            SchemaType::Website => map_website(&state.website),
            SchemaType::Recipe => map_recipe(&state.recipe, self.settings.recipe_row_binding),
        }
    }

    /// Validate, then map the selected type.
    ///
    /// Under the lenient policy issues are logged and mapping proceeds; under
    /// the strict policy they are returned as [`GenerateError::Invalid`].
    pub fn generate(&self, state: &FormState) -> GenerateResult<Value> {
        let report = validation::validate(state, state.schema_type);
        if !report.is_empty() {
            match self.settings.validation {
                ValidationPolicy::Lenient => {
                    for issue in report.issues() {
                        tracing::warn!("{} form: {}", state.schema_type, issue);
                    }
                }
                ValidationPolicy::Strict => return Err(GenerateError::Invalid(report)),
            }
        }
        let schema = self.map(state);
        tracing::debug!("Generated {} schema", state.schema_type);
        Ok(schema)
    }

    /// Generate and wrap in the JSON-LD script tag
    pub fn render(&self, state: &FormState) -> GenerateResult<String> {
        let schema = self.generate(state)?;
        preview::render_script(&schema)
    }
}

// ============================================================================
// Shaping helpers
// ============================================================================

/// Read a form field: trimmed, blank reads as `""`
pub(crate) fn field(value: &str) -> &str {
    value.trim()
}

/// One entry becomes the bare entry, two or more stay an array, none is `None`
pub(crate) fn collapse(mut items: Vec<Value>) -> Option<Value> {
    match items.len() {
        0 => None,
        1 => items.pop(),
        _ => Some(Value::Array(items)),
    }
}

/// [`collapse`] with a per-type placeholder for the empty case
pub(crate) fn collapse_or(items: Vec<Value>, placeholder: Value) -> Value {
    collapse(items).unwrap_or(placeholder)
}

/// `PT{minutes}M`, or `""` for a blank input
pub(crate) fn minutes_duration(minutes: &str) -> String {
    let minutes = field(minutes);
    if minutes.is_empty() {
        String::new()
    } else {
        format!("PT{}M", minutes)
    }
}

/// `{date}T{time}` when both are present, otherwise the date alone
pub(crate) fn date_time(date: &str, time: &str) -> String {
    let (date, time) = (field(date), field(time));
    if !date.is_empty() && !time.is_empty() {
        format!("{}T{}", date, time)
    } else {
        date.to_string()
    }
}

/// `https://schema.org/{value}`, or `""` for a blank selection
pub(crate) fn schema_uri(value: &str) -> String {
    let value = field(value);
    if value.is_empty() {
        String::new()
    } else {
        format!("https://schema.org/{}", value)
    }
}

/// Blank falls back to `default`
pub(crate) fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    let value = field(value);
    if value.is_empty() {
        default
    } else {
        value
    }
}
