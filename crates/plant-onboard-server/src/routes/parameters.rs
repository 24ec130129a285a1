use axum::{
    extract::{Query, State},
    Json,
};
use plant_onboard::Parameter;
use serde::Deserialize;

use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ParametersQuery {
    /// Comma-separated asset types, e.g. `boiler,turbine`
    pub asset_types: Option<String>,
}

impl ParametersQuery {
    /// Requested asset types, blanks dropped
    pub fn asset_types(&self) -> Vec<&str> {
        self.asset_types
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }
}

/// GET /api/parameters
pub(super) async fn list_parameters(
    State(state): State<AppState>,
    Query(query): Query<ParametersQuery>,
) -> Json<Vec<Parameter>> {
    Json(state.registry.filter(&query.asset_types()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn query(asset_types: Option<&str>) -> ParametersQuery {
        ParametersQuery {
            asset_types: asset_types.map(str::to_string),
        }
    }

    #[test]
    fn test_asset_types_split() {
        assert_eq!(query(Some("boiler,turbine")).asset_types(), vec!["boiler", "turbine"]);
        assert_eq!(query(Some(" boiler , ,turbine,")).asset_types(), vec!["boiler", "turbine"]);
        assert!(query(Some("")).asset_types().is_empty());
        assert!(query(None).asset_types().is_empty());
    }
}
