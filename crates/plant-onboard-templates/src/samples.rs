//! Sample templates shipped with the crate

use crate::error::{TemplateError, TemplateResult};
use crate::store::{template_id, NewTemplate, TemplateStore};

const SAMPLE_TEMPLATES: &str = include_str!("../data/sample_templates.json");

/// The bundled sample templates ("Standard Power Plant", "Cooling Tower Plant")
pub fn sample_templates() -> TemplateResult<Vec<NewTemplate>> {
    Ok(serde_json::from_str(SAMPLE_TEMPLATES)?)
}

/// Save every sample template whose id is not taken yet
///
/// Existing templates are left untouched. Returns the ids that were written.
pub fn seed_samples(store: &dyn TemplateStore) -> TemplateResult<Vec<String>> {
    let mut seeded = Vec::new();

    for template in sample_templates()? {
        match store.get(&template_id(&template.name)) {
            Ok(_) => continue,
            Err(TemplateError::NotFound { .. }) => {}
            Err(e) => return Err(e),
        }
        seeded.push(store.save(template)?);
    }

    if !seeded.is_empty() {
        tracing::info!(templates = ?seeded, "seeded sample templates");
    }
    Ok(seeded)
}
