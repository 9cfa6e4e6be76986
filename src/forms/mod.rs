//! In-memory form state
//!
//! One form per schema type plus the currently selected type. The mapper is
//! a pure function of this model; front ends bind their inputs to it.

use serde::{Deserialize, Serialize};

use crate::domain::SchemaType;

pub mod editorial;
pub mod entity;
pub mod loader;


pub use editorial::*;
pub use entity::*;
pub use loader::{load_form_state, load_forms_from_dir, FormFormat};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormState {
    pub schema_type: SchemaType,
    pub article: ArticleForm,
    pub breadcrumb: BreadcrumbForm,
    pub event: EventForm,
    pub faq: FaqForm,
    pub howto: HowToForm,
    pub job_posting: JobPostingForm,
    pub local_business: LocalBusinessForm,
    pub person: PersonForm,
    pub video: VideoForm,
    pub website: WebsiteForm,
    pub recipe: RecipeForm,
}

impl FormState {
    pub fn new(schema_type: SchemaType) -> Self {
        Self {
            schema_type,
            ..Self::default()
        }
    }

    /// Switch the visible form. Field values of other types are kept.
    pub fn select(&mut self, schema_type: SchemaType) {
        if self.schema_type != schema_type {
            tracing::debug!("Schema type switched from {} to {}", self.schema_type, schema_type);
        }
        self.schema_type = schema_type;
    }
}
