use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ExportError;

pub mod catalog;
pub mod rows;
pub mod social;

#[cfg(test)]
mod rows_test;

pub use rows::{RowId, RowList};
pub use social::{Platform, PlatformOptions, SocialProfile, SocialProfiles};

/// The eleven schema.org shapes the mapper can produce.
///
/// Serialized with the same values the type selector submits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchemaType {
    #[default]
    Article,
    Breadcrumb,
    Event,
    #[serde(rename = "FAQ")]
    Faq,
    HowTo,
    JobPosting,
    LocalBusiness,
    Person,
    Video,
    Website,
    Recipe,
}

impl SchemaType {
    pub const ALL: [SchemaType; 11] = [
        SchemaType::Article,
        SchemaType::Breadcrumb,
        SchemaType::Event,
        SchemaType::Faq,
        SchemaType::HowTo,
        SchemaType::JobPosting,
        SchemaType::LocalBusiness,
        SchemaType::Person,
        SchemaType::Video,
        SchemaType::Website,
        SchemaType::Recipe,
    ];

    /// Value of the type selector option
    pub const fn as_str(self) -> &'static str {
        match self {
            SchemaType::Article => "Article",
            SchemaType::Breadcrumb => "Breadcrumb",
            SchemaType::Event => "Event",
            SchemaType::Faq => "FAQ",
            SchemaType::HowTo => "HowTo",
            SchemaType::JobPosting => "JobPosting",
            SchemaType::LocalBusiness => "LocalBusiness",
            SchemaType::Person => "Person",
            SchemaType::Video => "Video",
            SchemaType::Website => "Website",
            SchemaType::Recipe => "Recipe",
        }
    }

    /// The `@type` emitted at the top level (Article and LocalBusiness
    /// default to their own name but can be narrowed by the form)
    pub const fn schema_org_type(self) -> &'static str {
        match self {
            SchemaType::Breadcrumb => "BreadcrumbList",
            SchemaType::Faq => "FAQPage",
            SchemaType::Video => "VideoObject",
            SchemaType::Website => "WebSite",
            other => other.as_str(),
        }
    }

    /// Id of the form section shown for this type, e.g. `howto-form`
    pub fn form_id(self) -> String {
        format!("{}-form", self.as_str().to_lowercase())
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SchemaType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted) || t.schema_org_type() == wanted)
            .ok_or_else(|| format!("Unknown schema type: {}", s))
    }
}

/// Receives the complete wrapped script on every refresh
pub trait PreviewRenderer {
    fn render(&mut self, script: &str);
}

/// Destination for the "copy" action
pub trait ClipboardExporter {
    fn write_text(&mut self, text: &str) -> Result<(), ExportError>;
}
