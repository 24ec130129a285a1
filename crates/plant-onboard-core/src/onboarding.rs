//! Onboarding submission payload

use ahash::AHashSet;
use chrono::NaiveDateTime;
use lazy_regex::regex_is_match;
use serde::{Deserialize, Serialize};

use crate::parameter::Category;

/// Timestamp layout used on the wire (`2026-01-01T00:00:00.000000`)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Format a UTC timestamp the way responses and stored documents carry it
pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Plant identity from the first wizard step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantInfo {
    pub name: String,
    pub address: String,
    pub manager_email: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A physical asset of the plant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub name: String,
    pub display_name: String,
    pub asset_type: String,
}

fn enabled_by_default() -> bool {
    true
}

/// Parameter as configured for this plant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterConfig {
    pub name: String,
    pub display_name: String,
    pub unit: String,
    pub category: Category,
    pub section: String,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

/// Formula defining a calculated parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaConfig {
    pub parameter_name: String,
    pub expression: String,
    #[serde(default)]
    pub depends_on: Vec<String>,
}

/// Final configuration submitted by the wizard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingPayload {
    pub plant: PlantInfo,
    pub assets: Vec<Asset>,
    pub parameters: Vec<ParameterConfig>,
    #[serde(default)]
    pub formulas: Vec<FormulaConfig>,
}

/// Counts echoed back after a successful submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingSummary {
    pub plant_name: String,
    pub num_assets: usize,
    pub num_parameters: usize,
    pub num_formulas: usize,
    pub submitted_at: String,
}

impl OnboardingPayload {
    /// Check the payload for problems the JSON shape cannot express
    ///
    /// Returns every issue found; an empty list means the payload is
    /// acceptable.
    pub fn check(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.plant.name.trim().is_empty() {
            issues.push("Plant name is required".to_string());
        }
        if self.plant.address.trim().is_empty() {
            issues.push("Plant address is required".to_string());
        }
        if !regex_is_match!(r"^[^\s@]+@[^\s@]+\.[^\s@]+$", &self.plant.manager_email) {
            issues.push(format!(
                "Invalid manager email: '{}'",
                self.plant.manager_email
            ));
        }

        let mut assets = AHashSet::new();
        for asset in &self.assets {
            if !assets.insert(asset.name.as_str()) {
                issues.push(format!("Duplicate asset name: '{}'", asset.name));
            }
        }

        let mut parameters = AHashSet::new();
        for parameter in &self.parameters {
            if !parameters.insert(parameter.name.as_str()) {
                issues.push(format!("Duplicate parameter name: '{}'", parameter.name));
            }
        }

        issues
    }

    /// Names of the enabled parameters, in payload order
    pub fn enabled_parameters(&self) -> Vec<&str> {
        self.parameters
            .iter()
            .filter(|p| p.enabled)
            .map(|p| p.name.as_str())
            .collect()
    }

    /// Summary of the submission
    pub fn summary(&self, submitted_at: NaiveDateTime) -> OnboardingSummary {
        OnboardingSummary {
            plant_name: self.plant.name.clone(),
            num_assets: self.assets.len(),
            num_parameters: self.parameters.len(),
            num_formulas: self.formulas.len(),
            submitted_at: format_timestamp(submitted_at),
        }
    }

    /// Confirmation message for a successful submission
    pub fn success_message(&self) -> String {
        format!("Plant '{}' onboarded successfully", self.plant.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn payload() -> OnboardingPayload {
        serde_json::from_str(
            r#"{
                "plant": {
                    "name": "Demo Cogeneration Plant",
                    "address": "Industrial Area, Phase II, Mumbai",
                    "manager_email": "ops.manager@demoplant.com"
                },
                "assets": [
                    {"name": "main_boiler", "display_name": "Main Boiler", "asset_type": "boiler"},
                    {"name": "primary_turbine", "display_name": "Primary Turbine", "asset_type": "turbine"}
                ],
                "parameters": [
                    {"name": "coal_consumption", "display_name": "Coal Consumption", "unit": "MT", "category": "input", "section": "COGEN BOILER"},
                    {"name": "steam_generation", "display_name": "Steam Generation", "unit": "TPH", "category": "output", "section": "COGEN BOILER"},
                    {"name": "boiler_efficiency", "display_name": "Boiler Efficiency", "unit": "%", "category": "calculated", "section": "COGEN BOILER", "enabled": false}
                ],
                "formulas": [
                    {"parameter_name": "boiler_efficiency", "expression": "steam_generation / coal_consumption * 100"}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_defaults_applied() {
        let payload = payload();
        assert_eq!(payload.plant.description, None);
        assert!(payload.parameters[0].enabled);
        assert!(payload.formulas[0].depends_on.is_empty());

        let minimal: OnboardingPayload = serde_json::from_str(
            r#"{"plant":{"name":"P","address":"A","manager_email":"a@b.co","description":null},
                "assets":[],"parameters":[]}"#,
        )
        .unwrap();
        assert!(minimal.formulas.is_empty());
    }

    #[test]
    fn test_check_accepts_valid_payload() {
        assert_eq!(payload().check(), Vec::<String>::new());
    }

    #[test]
    fn test_check_reports_every_issue() {
        let mut payload = payload();
        payload.plant.name = "  ".into();
        payload.plant.manager_email = "not-an-email".into();
        payload.assets.push(payload.assets[0].clone());
        payload.parameters.push(payload.parameters[1].clone());

        assert_eq!(
            payload.check(),
            vec![
                "Plant name is required",
                "Invalid manager email: 'not-an-email'",
                "Duplicate asset name: 'main_boiler'",
                "Duplicate parameter name: 'steam_generation'",
            ]
        );
    }

    #[test]
    fn test_email_shapes() {
        let mut payload = payload();
        for (email, ok) in [
            ("ops@plant.com", true),
            ("a@b.c", true),
            ("a b@plant.com", false),
            ("a@plant", false),
            ("@plant.com", false),
            ("", false),
        ] {
            payload.plant.manager_email = email.into();
            assert_eq!(payload.check().is_empty(), ok, "{email}");
        }
    }

    #[test]
    fn test_enabled_parameters() {
        assert_eq!(
            payload().enabled_parameters(),
            vec!["coal_consumption", "steam_generation"]
        );
    }

    #[test]
    fn test_summary() {
        let at = NaiveDate::from_ymd_opt(2026, 1, 1)
            .unwrap()
            .and_hms_micro_opt(8, 30, 0, 42)
            .unwrap();
        let payload = payload();
        let summary = payload.summary(at);

        assert_eq!(
            summary,
            OnboardingSummary {
                plant_name: "Demo Cogeneration Plant".into(),
                num_assets: 2,
                num_parameters: 3,
                num_formulas: 1,
                submitted_at: "2026-01-01T08:30:00.000042".into(),
            }
        );
        assert_eq!(
            payload.success_message(),
            "Plant 'Demo Cogeneration Plant' onboarded successfully"
        );
    }
}
