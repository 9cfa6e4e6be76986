//! # ldforge - schema.org JSON-LD authoring engine
//!
//! ldforge turns structured-data form input into a schema.org JSON-LD
//! `<script>` block, ready to paste into a page's `<head>`.
//!
//! ## Features
//!
//! - **11 Schema Types**: Article, Breadcrumb, Event, FAQ, HowTo, JobPosting,
//!   LocalBusiness, Person, Video, Website, Recipe
//! - **Repeatable Rows**: never-reused row ids with per-section floors
//! - **Social Profiles**: one platform per row, most recent assignment wins
//! - **Validation**: lenient (log and generate) or strict (refuse) policies
//! - **Live Preview**: debounced refresh and copy-to-clipboard feedback
//! - **Form Files**: JSON, YAML or TOML, single files or whole directories
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ldforge::forms::{load_form_state, FormState};
//! use ldforge::mapper::SchemaMapper;
//!
//! fn main() -> anyhow::Result<()> {
//!     let state: FormState = load_form_state("event.yaml".as_ref())?;
//!     let script = SchemaMapper::default().render(&state)?;
//!     println!("{}", script);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **Domain**: schema types, row lists, social profiles, option catalogues
//! - **Forms**: the in-memory form state and its file formats
//! - **Mapper**: one pure generator per schema type
//! - **Validation**: required fields and field formats per form
//! - **Preview / Session**: rendering, debounce and clipboard export
//! - **Config**: settings from file, environment and CLI

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod forms;
pub mod mapper;
pub mod preview;
pub mod session;
pub mod validation;

pub use domain::SchemaType;
pub use error::{ExportError, FormLoadError, GenerateError, GenerateResult};
pub use forms::FormState;
pub use mapper::SchemaMapper;
pub use session::AuthoringSession;
