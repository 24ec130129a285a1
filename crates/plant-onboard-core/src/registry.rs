//! Parameter registry
//!
//! The registry is the catalogue of parameters the wizard offers, loaded once
//! at startup and read-only afterwards.

use std::path::Path;

use ahash::AHashMap;

use crate::error::{Error, Result};
use crate::parameter::Parameter;

const BUILTIN_REGISTRY: &str = include_str!("../data/parameter_registry.json");

/// Ordered catalogue of known parameters
#[derive(Debug, Clone, Default)]
pub struct ParameterRegistry {
    parameters: Vec<Parameter>,
    by_name: AHashMap<String, usize>,
}

impl ParameterRegistry {
    /// Create a registry, rejecting duplicate names
    pub fn new(parameters: Vec<Parameter>) -> Result<Self> {
        let mut by_name = AHashMap::with_capacity(parameters.len());
        for (index, parameter) in parameters.iter().enumerate() {
            if by_name.insert(parameter.name.clone(), index).is_some() {
                return Err(Error::DuplicateParameter(parameter.name.clone()));
            }
        }
        Ok(Self {
            parameters,
            by_name,
        })
    }

    /// Load a registry from a JSON array of parameters
    pub fn from_json(json: &str) -> Result<Self> {
        let parameters: Vec<Parameter> = serde_json::from_str(json)?;
        Self::new(parameters)
    }

    /// Load a registry from a JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let registry = Self::from_json(&json)?;
        tracing::debug!(
            path = %path.display(),
            parameters = registry.len(),
            "loaded parameter registry"
        );
        Ok(registry)
    }

    /// The registry shipped with the crate
    ///
    /// Covers boilers, turbines and cooling towers, plus a `PLANT SUMMARY`
    /// section shared between asset types.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_REGISTRY)
    }

    /// All parameters in registry order
    pub fn all(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Check whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Look up a parameter by name
    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.by_name.get(name).map(|&index| &self.parameters[index])
    }

    /// Parameters applicable to any of the given asset types
    ///
    /// An empty filter returns every parameter. Registry order is preserved.
    pub fn filter<S: AsRef<str>>(&self, asset_types: &[S]) -> Vec<Parameter> {
        if asset_types.is_empty() {
            return self.parameters.clone();
        }
        self.parameters
            .iter()
            .filter(|p| p.applies_to_any(asset_types))
            .cloned()
            .collect()
    }
}
