//! Shared application state

use std::sync::Arc;

use anyhow::{Context, Result};
use plant_onboard::{
    seed_samples, FileTemplateStore, ParameterRegistry, SuggestionEngine, TemplateStore,
};

use crate::config::ServerConfig;

/// State shared by every request handler
///
/// The registry and suggestion table are read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ParameterRegistry>,
    pub suggestions: Arc<SuggestionEngine>,
    pub templates: Arc<dyn TemplateStore>,
}

impl AppState {
    pub fn new(
        registry: ParameterRegistry,
        suggestions: SuggestionEngine,
        templates: Arc<dyn TemplateStore>,
    ) -> Self {
        Self {
            registry: Arc::new(registry),
            suggestions: Arc::new(suggestions),
            templates,
        }
    }

    /// Load registry and template store as configured
    pub fn load(config: &ServerConfig) -> Result<Self> {
        let registry = match &config.registry {
            Some(path) => ParameterRegistry::from_path(path)
                .with_context(|| format!("Failed to load parameter registry: {}", path.display()))?,
            None => ParameterRegistry::builtin()
                .context("Failed to load built-in parameter registry")?,
        };

        let templates = FileTemplateStore::open(&config.templates_dir).with_context(|| {
            format!(
                "Failed to open template directory: {}",
                config.templates_dir.display()
            )
        })?;
        if config.seed_samples {
            seed_samples(&templates).context("Failed to seed sample templates")?;
        }

        tracing::info!(
            parameters = registry.len(),
            templates_dir = %config.templates_dir.display(),
            "application state loaded"
        );

        Ok(Self::new(registry, SuggestionEngine::builtin(), Arc::new(templates)))
    }
}
