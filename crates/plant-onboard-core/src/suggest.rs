//! Keyword-based parameter suggestions
//!
//! A plant description (plus the selected asset types) is matched against an
//! ordered table of keywords. Each matching keyword contributes its parameters,
//! first match wins when two keywords suggest the same name.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::parameter::{Category, Parameter};

type RuleEntry = (&'static str, &'static str, &'static str, Category, &'static str);

const BUILTIN_RULES: &[(&str, &[RuleEntry])] = &[
    (
        "cement",
        &[
            ("clinker_production", "Clinker Production", "TPD", Category::Output, "KILN"),
            ("kiln_temperature", "Kiln Temperature", "°C", Category::Input, "KILN"),
            ("raw_meal_feed_rate", "Raw Meal Feed Rate", "TPH", Category::Input, "KILN"),
            (
                "specific_heat_consumption",
                "Specific Heat Consumption",
                "kcal/kg",
                Category::Calculated,
                "KILN",
            ),
        ],
    ),
    (
        "power",
        &[
            ("gross_generation", "Gross Generation", "MWh", Category::Output, "GENERATION"),
            ("plant_load_factor", "Plant Load Factor", "%", Category::Calculated, "GENERATION"),
            (
                "specific_oil_consumption",
                "Specific Oil Consumption",
                "ml/kWh",
                Category::Calculated,
                "FUEL",
            ),
        ],
    ),
    (
        "steel",
        &[
            (
                "hot_metal_production",
                "Hot Metal Production",
                "TPD",
                Category::Output,
                "BLAST FURNACE",
            ),
            ("coke_rate", "Coke Rate", "kg/THM", Category::Input, "BLAST FURNACE"),
            ("blast_volume", "Blast Volume", "Nm³/min", Category::Input, "BLAST FURNACE"),
        ],
    ),
    (
        "boiler",
        &[
            ("steam_flow_rate", "Steam Flow Rate", "TPH", Category::Output, "BOILER"),
            ("coal_gcv", "Coal GCV", "kcal/kg", Category::Input, "FUEL"),
            ("excess_air", "Excess Air", "%", Category::Calculated, "BOILER"),
        ],
    ),
    (
        "turbine",
        &[
            ("turbine_speed", "Turbine Speed", "RPM", Category::Input, "TURBINE"),
            ("condenser_vacuum", "Condenser Vacuum", "mmHg", Category::Input, "CONDENSER"),
        ],
    ),
    (
        "cooling",
        &[
            ("wet_bulb_temperature", "Wet Bulb Temperature", "°C", Category::Input, "COOLING"),
            ("evaporation_loss", "Evaporation Loss", "m³/hr", Category::Calculated, "COOLING"),
        ],
    ),
];

/// A suggested parameter and why it was suggested
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(flatten)]
    pub parameter: Parameter,
    pub reason: String,
}

/// Keyword and the parameters it suggests
#[derive(Debug, Clone)]
pub struct SuggestionRule {
    keyword: String,
    parameters: Vec<Parameter>,
}

impl SuggestionRule {
    /// Create a rule; the keyword is matched case-insensitively
    pub fn new<S: Into<String>>(keyword: S, parameters: Vec<Parameter>) -> Self {
        Self {
            keyword: keyword.into().to_lowercase(),
            parameters,
        }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }
}

/// Ordered keyword table producing parameter suggestions
#[derive(Debug, Clone)]
pub struct SuggestionEngine {
    rules: Vec<SuggestionRule>,
}

impl SuggestionEngine {
    /// Create an engine over the given rules, visited in order
    pub fn new(rules: Vec<SuggestionRule>) -> Self {
        Self { rules }
    }

    /// Engine with the built-in cement, power, steel, boiler, turbine and
    /// cooling rules
    pub fn builtin() -> Self {
        let rules = BUILTIN_RULES
            .iter()
            .map(|(keyword, entries)| {
                let parameters = entries
                    .iter()
                    .map(|&(name, display_name, unit, category, section)| Parameter {
                        name: name.to_string(),
                        display_name: display_name.to_string(),
                        unit: unit.to_string(),
                        category,
                        section: section.to_string(),
                        applicable_asset_types: Vec::new(),
                    })
                    .collect();
                SuggestionRule::new(*keyword, parameters)
            })
            .collect();
        Self::new(rules)
    }

    pub fn rules(&self) -> &[SuggestionRule] {
        &self.rules
    }

    /// Suggest parameters for a plant description and its asset types
    ///
    /// Asset type names take part in keyword matching, so selecting a
    /// `boiler` asset is enough to trigger the boiler rule. Every suggestion
    /// applies to the requested asset types.
    pub fn suggest<S: AsRef<str>>(&self, description: &str, asset_types: &[S]) -> Vec<Suggestion> {
        let asset_types: Vec<String> = asset_types.iter().map(|t| t.as_ref().to_string()).collect();
        let haystack = format!("{} {}", description, asset_types.join(" ")).to_lowercase();

        let mut seen = AHashSet::new();
        let mut suggestions = Vec::new();

        for rule in &self.rules {
            if !haystack.contains(rule.keyword()) {
                continue;
            }
            for parameter in rule.parameters() {
                if !seen.insert(parameter.name.as_str()) {
                    continue;
                }
                suggestions.push(Suggestion {
                    parameter: Parameter {
                        applicable_asset_types: asset_types.clone(),
                        ..parameter.clone()
                    },
                    reason: format!(
                        "Suggested based on keyword '{}' in plant description",
                        rule.keyword()
                    ),
                });
            }
        }

        tracing::debug!(count = suggestions.len(), "suggested parameters");
        suggestions
    }
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::builtin()
    }
}
