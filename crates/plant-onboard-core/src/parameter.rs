//! Parameter definitions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Role of a parameter in a plant configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Measured or entered value
    Input,
    /// Produced quantity
    Output,
    /// Defined by a formula over other parameters
    Calculated,
}

impl Category {
    /// All categories in wire order
    pub const ALL: [Category; 3] = [Category::Input, Category::Output, Category::Calculated];

    /// Wire name of the category
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Input => "input",
            Category::Output => "output",
            Category::Calculated => "calculated",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    /// Parse a wire name, ignoring surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == trimmed)
            .ok_or_else(|| Error::InvalidCategory(s.to_string()))
    }
}

/// A named plant quantity with display metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub display_name: String,
    pub unit: String,
    pub category: Category,
    pub section: String,
    #[serde(default)]
    pub applicable_asset_types: Vec<String>,
}

impl Parameter {
    /// Check whether the parameter applies to an asset type
    pub fn applies_to(&self, asset_type: &str) -> bool {
        self.applicable_asset_types.iter().any(|t| t == asset_type)
    }

    /// Check whether the parameter applies to any of the given asset types
    pub fn applies_to_any<S: AsRef<str>>(&self, asset_types: &[S]) -> bool {
        asset_types.iter().any(|t| self.applies_to(t.as_ref()))
    }
}

fn enabled_by_default() -> bool {
    true
}

/// A parameter together with its on/off state in the wizard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSelection {
    #[serde(flatten)]
    pub parameter: Parameter,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

impl ParameterSelection {
    /// Select a parameter (enabled)
    pub fn enabled(parameter: Parameter) -> Self {
        Self {
            parameter,
            enabled: true,
        }
    }
}

impl From<Parameter> for ParameterSelection {
    fn from(parameter: Parameter) -> Self {
        Self::enabled(parameter)
    }
}
