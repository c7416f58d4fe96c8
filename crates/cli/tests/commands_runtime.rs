use std::fs;
use std::path::Path;

use bincare_cli::commands::{config, quote, rates};
use serde_json::Value;
use tempfile::TempDir;

#[test]
fn quote_prices_a_fixture_request() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = dir.path().join("request.json");
    fs::write(
        &path,
        r#"{
            "propertyCategory": "commercial",
            "commercialSubtype": "Office Building",
            "unitCount": 1,
            "frequency": "Monthly"
        }"#,
    )
    .expect("fixture should be written");

    let result = quote::run(&path);
    assert_eq!(result.exit_code, 0, "expected successful quote run");

    let payload: Value =
        serde_json::from_str(&result.output).expect("quote output should be valid JSON");
    assert_eq!(payload["finalPrice"], 95.0);
    assert_eq!(payload["requiresManualReview"], false);
    assert_eq!(payload["breakdown"]["total"], payload["finalPrice"]);
}

#[test]
fn quote_surfaces_review_reasons_for_flagged_requests() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = dir.path().join("request.json");
    fs::write(
        &path,
        r#"{
            "propertyCategory": "commercial",
            "unitCount": 4,
            "frequency": "Monthly",
            "specialRequirements": "compactor on site"
        }"#,
    )
    .expect("fixture should be written");

    let result = quote::run(&path);
    assert_eq!(result.exit_code, 0);

    let payload: Value =
        serde_json::from_str(&result.output).expect("quote output should be valid JSON");
    assert_eq!(payload["requiresManualReview"], true);
    assert_eq!(
        payload["reviewReasons"],
        serde_json::json!([
            "Dumpster count (4) requires custom scheduling",
            "Special requirements need custom review",
        ])
    );
}

#[test]
fn quote_rejects_an_invalid_payload_with_error_class() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = dir.path().join("request.json");
    fs::write(&path, r#"{"propertyCategory": "marina", "frequency": "Monthly"}"#)
        .expect("fixture should be written");

    let result = quote::run(&path);
    assert_eq!(result.exit_code, 2, "expected invalid-request failure code");

    let payload: Value =
        serde_json::from_str(&result.output).expect("failure output should be valid JSON");
    assert_eq!(payload["command"], "quote");
    assert_eq!(payload["status"], "error");
    assert_eq!(payload["error_class"], "invalid_request");
}

#[test]
fn quote_fails_when_the_payload_file_is_missing() {
    let result = quote::run(Path::new("/nonexistent/request.json"));
    assert_eq!(result.exit_code, 2, "expected read failure code");

    let payload: Value =
        serde_json::from_str(&result.output).expect("failure output should be valid JSON");
    assert_eq!(payload["error_class"], "read_input");
}

#[test]
fn rates_prints_the_published_constants() {
    let result = rates::run();
    assert_eq!(result.exit_code, 0);

    let payload: Value =
        serde_json::from_str(&result.output).expect("rates output should be valid JSON");
    assert_eq!(payload["commercial"]["base"], 95.0);
    assert_eq!(payload["restaurant"]["base"], 120.0);
    assert_eq!(payload["residential"]["base"], 55.0);
    assert_eq!(payload["pad_cleaning_addon"], 75.0);
    assert_eq!(payload["pad_cleaning_floor"], 150.0);
    assert_eq!(payload["multipliers"]["weekly"], 3.2);
}

#[test]
fn config_renders_effective_values() {
    let output = config::run();
    assert!(output.contains("effective config"));
    assert!(output.contains("server.port"));
    assert!(output.contains("logging.level"));
}
