//! Template storage

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use plant_onboard_core::format_timestamp;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{TemplateError, TemplateResult};

/// Derive a template id from its name
///
/// Lower-cases the name, turns spaces and hyphens into `_` and drops every
/// other character that is not alphanumeric.
///
/// ```rust
/// use plant_onboard_templates::template_id;
///
/// assert_eq!(template_id("Standard Power-Plant (v2)"), "standard_power_plant_v2");
/// ```
pub fn template_id(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect()
}

/// Check whether `id` could have been produced by [`template_id`]
pub fn is_valid_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_alphanumeric() || c == '_')
}

/// A template as submitted for saving
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTemplate {
    pub name: String,
    pub description: String,
    /// Full onboarding configuration, kept as opaque JSON
    pub config: Value,
}

/// A template as stored on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateDocument {
    pub name: String,
    pub description: String,
    pub config: Value,
    pub created_at: String,
}

/// Listing entry for a stored template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_at: String,
}

/// Storage for onboarding templates
pub trait TemplateStore: Send + Sync {
    /// Summaries of every stored template, sorted by id
    fn list(&self) -> TemplateResult<Vec<TemplateSummary>>;

    /// The stored document of a template, as written
    fn get(&self, id: &str) -> TemplateResult<Value>;

    /// Save a template, replacing any template with the same id
    ///
    /// Returns the template id.
    fn save(&self, template: NewTemplate) -> TemplateResult<String>;

    /// Delete a template
    fn delete(&self, id: &str) -> TemplateResult<()>;
}

/// Template store keeping one `<id>.json` file per template in a directory
#[derive(Debug, Clone)]
pub struct FileTemplateStore {
    dir: PathBuf,
}

impl FileTemplateStore {
    /// Open a store, creating the directory if needed
    pub fn open<P: AsRef<Path>>(dir: P) -> TemplateResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        tracing::debug!(dir = %dir.display(), "opened template store");
        Ok(Self { dir })
    }

    /// Directory holding the template files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: &str) -> TemplateResult<PathBuf> {
        if !is_valid_id(id) {
            return Err(TemplateError::not_found(id));
        }
        Ok(self.dir.join(format!("{}.json", id)))
    }

    fn summarize(path: &Path, id: &str) -> TemplateResult<TemplateSummary> {
        let data: Value = serde_json::from_str(&fs::read_to_string(path)?)?;
        let text = |key: &str| data.get(key).and_then(Value::as_str).map(str::to_string);

        Ok(TemplateSummary {
            id: id.to_string(),
            name: text("name").unwrap_or_else(|| id.to_string()),
            description: text("description").unwrap_or_default(),
            created_at: text("created_at").unwrap_or_default(),
        })
    }
}

fn not_found_or(id: &str, err: io::Error) -> TemplateError {
    if err.kind() == io::ErrorKind::NotFound {
        TemplateError::not_found(id)
    } else {
        TemplateError::Io(err)
    }
}

impl TemplateStore for FileTemplateStore {
    fn list(&self) -> TemplateResult<Vec<TemplateSummary>> {
        let mut templates = Vec::new();

        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            match Self::summarize(&path, id) {
                Ok(summary) => templates.push(summary),
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "skipping unreadable template"
                    );
                }
            }
        }

        templates.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(templates)
    }

    fn get(&self, id: &str) -> TemplateResult<Value> {
        let path = self.path_for(id)?;
        let json = fs::read_to_string(&path).map_err(|e| not_found_or(id, e))?;
        Ok(serde_json::from_str(&json)?)
    }

    fn save(&self, template: NewTemplate) -> TemplateResult<String> {
        let id = template_id(&template.name);
        if id.is_empty() {
            return Err(TemplateError::InvalidName(template.name));
        }

        let document = TemplateDocument {
            name: template.name,
            description: template.description,
            config: template.config,
            created_at: format_timestamp(Utc::now().naive_utc()),
        };

        let path = self.path_for(&id)?;
        fs::write(&path, serde_json::to_string_pretty(&document)?)?;
        tracing::info!(id = %id, "saved template");
        Ok(id)
    }

    fn delete(&self, id: &str) -> TemplateResult<()> {
        let path = self.path_for(id)?;
        fs::remove_file(&path).map_err(|e| not_found_or(id, e))?;
        tracing::info!(id = %id, "deleted template");
        Ok(())
    }
}
