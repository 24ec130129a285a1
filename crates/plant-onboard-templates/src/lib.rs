//! # plant-onboard-templates
//!
//! Saved onboarding configurations that can be reloaded into the wizard.
//!
//! Templates are addressed by an id derived from their name (see
//! [`template_id`]) and stored behind the [`TemplateStore`] trait.
//! [`FileTemplateStore`] keeps one pretty-printed JSON document per template.
//! [`seed_samples`] writes the bundled sample templates into a store.

mod error;
mod samples;
mod store;

pub use error::{TemplateError, TemplateResult};
pub use samples::{sample_templates, seed_samples};
pub use store::{
    is_valid_id, template_id, FileTemplateStore, NewTemplate, TemplateDocument, TemplateStore,
    TemplateSummary,
};
