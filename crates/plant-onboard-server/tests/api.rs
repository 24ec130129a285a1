//! HTTP-level tests for the onboarding API.
//!
//! Each test builds the router over the built-in registry and a template
//! store in a temporary directory, then drives it with `oneshot` requests.

use std::ffi::OsStr;
use std::sync::Arc;

use axum::body::Body;
use clap::Parser;
use http_body_util::BodyExt;
use hyper::{Request, StatusCode};
use plant_onboard::{FileTemplateStore, ParameterRegistry, SuggestionEngine};
use plant_onboard_server::{build_router, AppState, ServerConfig};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

// ── Test app builder ───────────────────────────────────────────

fn build_test_app() -> (tempfile::TempDir, axum::Router) {
    let dir = tempfile::tempdir().unwrap();
    let store = FileTemplateStore::open(dir.path().join("templates")).unwrap();
    let state = AppState::new(
        ParameterRegistry::builtin().unwrap(),
        SuggestionEngine::builtin(),
        Arc::new(store),
    );
    (dir, build_router(state))
}

async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap_or_else(
        |_| json!({ "raw": String::from_utf8_lossy(&bytes).to_string() }),
    )
}

async fn get(app: &axum::Router, uri: &str) -> (StatusCode, Value) {
    let resp = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    (status, body_json(resp).await)
}

async fn send_json(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Value,
) -> (StatusCode, Value) {
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = resp.status();
    (status, body_json(resp).await)
}

async fn upload(app: &axum::Router, filename: &str, contents: &str) -> (StatusCode, Value) {
    const BOUNDARY: &str = "plant-onboard-test-boundary";
    let body = format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n\
         Content-Type: text/csv\r\n\r\n\
         {contents}\r\n\
         --{BOUNDARY}--\r\n"
    );
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/import-parameters")
                .header(
                    "content-type",
                    format!("multipart/form-data; boundary={BOUNDARY}"),
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = resp.status();
    (status, body_json(resp).await)
}

fn onboarding_payload() -> Value {
    json!({
        "plant": {
            "name": "Demo Cogeneration Plant",
            "address": "Industrial Area, Phase II, Mumbai",
            "manager_email": "ops.manager@demoplant.com",
            "description": "A 200MW coal-fired cogeneration facility"
        },
        "assets": [
            {"name": "main_boiler", "display_name": "Main Boiler", "asset_type": "boiler"}
        ],
        "parameters": [
            {"name": "coal_consumption", "display_name": "Coal Consumption", "unit": "MT", "category": "input", "section": "COGEN BOILER"},
            {"name": "steam_generation", "display_name": "Steam Generation", "unit": "TPH", "category": "output", "section": "COGEN BOILER"},
            {"name": "boiler_efficiency", "display_name": "Boiler Efficiency", "unit": "%", "category": "calculated", "section": "COGEN BOILER"}
        ],
        "formulas": [
            {"parameter_name": "boiler_efficiency", "expression": "steam_generation / coal_consumption * 100",
             "depends_on": ["steam_generation", "coal_consumption"]}
        ]
    })
}

// ── Root and parameters ────────────────────────────────────────

#[tokio::test]
async fn test_root() {
    let (_dir, app) = build_test_app();
    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Plant Onboarding API is running");
}

#[tokio::test]
async fn test_parameters_filtered_by_asset_type() {
    let (_dir, app) = build_test_app();

    let (status, all) = get(&app, "/api/parameters").await;
    assert_eq!(status, StatusCode::OK);
    let all = all.as_array().unwrap().len();
    assert!(all > 0);

    let (_, boiler) = get(&app, "/api/parameters?asset_types=boiler").await;
    let boiler = boiler.as_array().unwrap();
    assert!(!boiler.is_empty() && boiler.len() < all);
    for p in boiler {
        let types = p["applicable_asset_types"].as_array().unwrap();
        assert!(types.contains(&json!("boiler")));
    }

    let (_, both) = get(&app, "/api/parameters?asset_types=boiler,%20turbine,").await;
    assert!(both.as_array().unwrap().len() > boiler.len());

    let (_, none) = get(&app, "/api/parameters?asset_types=nonexistent_type").await;
    assert_eq!(none, json!([]));
}

// ── Formula validation ─────────────────────────────────────────

#[tokio::test]
async fn test_validate_formula() {
    let (_dir, app) = build_test_app();

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/validate-formula",
        json!({
            "expression": "steam_generation / coal_consumption * 100",
            "enabled_parameters": ["steam_generation", "coal_consumption"]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "valid": true,
            "depends_on": ["coal_consumption", "steam_generation"],
            "error": null
        })
    );
}

#[tokio::test]
async fn test_rejected_formula_is_still_200() {
    let (_dir, app) = build_test_app();

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/validate-formula",
        json!({"expression": "import os; os.system('x')", "enabled_parameters": ["os"]}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], false);
    assert_eq!(body["depends_on"], json!([]));
    assert_eq!(body["error"], "Unsafe token detected: 'import'");
}

#[tokio::test]
async fn test_malformed_request_rejected_by_transport() {
    let (_dir, app) = build_test_app();
    let (status, _) = send_json(
        &app,
        "POST",
        "/api/validate-formula",
        json!({"expression": "a + b"}),
    )
    .await;
    assert!(status.is_client_error());
}

// ── Suggestions ────────────────────────────────────────────────

#[tokio::test]
async fn test_suggest_parameters() {
    let (_dir, app) = build_test_app();
    let (status, body) = send_json(
        &app,
        "POST",
        "/api/suggest-parameters",
        json!({"description": "Large cement manufacturing plant", "asset_types": ["boiler"]}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let suggestions = body["suggestions"].as_array().unwrap();
    assert_eq!(body["count"], suggestions.len());
    assert_eq!(suggestions[0]["name"], "clinker_production");
    assert_eq!(suggestions[0]["applicable_asset_types"], json!(["boiler"]));
    assert_eq!(
        suggestions[0]["reason"],
        "Suggested based on keyword 'cement' in plant description"
    );
}

// ── CSV import ─────────────────────────────────────────────────

#[tokio::test]
async fn test_import_parameters() {
    let (_dir, app) = build_test_app();
    let (status, body) = upload(
        &app,
        "params.csv",
        "name,display_name,unit,category,section\n\
         kiln_temperature,Kiln Temperature,C,input,KILN\n\
         ,Nameless,,input,KILN\n\
         clinker_factor,Clinker Factor,,derived,KILN",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["parameters"][0]["name"], "kiln_temperature");
    assert_eq!(body["parameters"][0]["enabled"], true);
    assert_eq!(
        body["errors"],
        json!(["Row 3: missing name", "Row 4: invalid category 'derived'"])
    );
}

#[tokio::test]
async fn test_import_rejects_bad_uploads() {
    let (_dir, app) = build_test_app();

    let (status, body) = upload(&app, "params.xlsx", "whatever").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Unsupported file type: .xlsx. Please upload a CSV file."
    );

    let (status, body) = upload(&app, "params.csv", "name,unit\nflow,TPH").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Missing required columns: category, display_name, section"
    );

    let (status, body) = upload(&app, "", "name,unit").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No file provided");
}

// ── Templates ──────────────────────────────────────────────────

#[tokio::test]
async fn test_template_lifecycle() {
    let (_dir, app) = build_test_app();

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/templates",
        json!({
            "name": "Standard Power Plant",
            "description": "A typical coal-fired cogeneration power plant",
            "config": onboarding_payload()
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"status": "saved", "id": "standard_power_plant", "name": "Standard Power Plant"})
    );

    let (status, body) = get(&app, "/api/templates").await;
    assert_eq!(status, StatusCode::OK);
    let templates = body["templates"].as_array().unwrap();
    assert_eq!(templates.len(), 1);
    assert_eq!(templates[0]["id"], "standard_power_plant");
    assert!(templates[0]["created_at"].as_str().unwrap().starts_with("20"));

    let (status, body) = get(&app, "/api/templates/standard_power_plant").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["config"], onboarding_payload());

    let (status, body) = send_json(
        &app,
        "DELETE",
        "/api/templates/standard_power_plant",
        json!({}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "deleted", "id": "standard_power_plant"}));

    let (status, body) = get(&app, "/api/templates/standard_power_plant").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Template not found"}));
}

#[tokio::test]
async fn test_template_errors() {
    let (_dir, app) = build_test_app();

    let (status, body) = send_json(&app, "DELETE", "/api/templates/missing", json!({})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Template not found");

    let (status, _) = get(&app, "/api/templates/..%2Fsecret").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/templates",
        json!({"name": "!!!", "description": "", "config": {}}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("valid id"));
}

// ── Onboarding ─────────────────────────────────────────────────

#[tokio::test]
async fn test_onboarding_success() {
    let (_dir, app) = build_test_app();
    let (status, body) = send_json(&app, "POST", "/api/onboarding", onboarding_payload()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(
        body["message"],
        "Plant 'Demo Cogeneration Plant' onboarded successfully"
    );
    assert_eq!(body["summary"]["plant_name"], "Demo Cogeneration Plant");
    assert_eq!(body["summary"]["num_assets"], 1);
    assert_eq!(body["summary"]["num_parameters"], 3);
    assert_eq!(body["summary"]["num_formulas"], 1);
    assert!(body["summary"]["submitted_at"].is_string());
}

#[tokio::test]
async fn test_onboarding_rejects_bad_payload() {
    let (_dir, app) = build_test_app();

    let mut payload = onboarding_payload();
    payload["plant"]["manager_email"] = json!("not-an-email");
    payload["formulas"][0]["expression"] = json!("steam_generation / auxiliary_power");

    let (status, body) = send_json(&app, "POST", "/api/onboarding", payload).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Onboarding payload rejected");
    assert_eq!(
        body["issues"],
        json!([
            "Invalid manager email: 'not-an-email'",
            "Formula for 'boiler_efficiency': Parameter(s) not enabled: auxiliary_power"
        ])
    );
}

#[tokio::test]
async fn test_seeded_samples_are_listed_and_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let templates_dir = dir.path().join("templates");
    let config = ServerConfig::parse_from([
        OsStr::new("plant-onboard"),
        OsStr::new("--templates-dir"),
        templates_dir.as_os_str(),
        OsStr::new("--seed-samples"),
    ]);
    let app = build_router(AppState::load(&config).unwrap());

    let (status, body) = get(&app, "/api/templates").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<_> = body["templates"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["cooling_tower_plant", "standard_power_plant"]);

    for id in ids {
        let (_, template) = get(&app, &format!("/api/templates/{id}")).await;
        let (status, body) =
            send_json(&app, "POST", "/api/onboarding", template["config"].clone()).await;
        assert_eq!(status, StatusCode::OK, "{id}: {body}");
        assert_eq!(body["status"], "success");
    }
}
