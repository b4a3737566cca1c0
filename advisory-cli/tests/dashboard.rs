use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;

const CURRENT: &str = r#"{
    "patient_load": {"prediction": 512, "load_level": "CRITICAL", "confidence_interval": {"lower": 470, "upper": 560}},
    "environmental_factors": {"AQI": 212, "temp": 37.0, "rainfall": 0.0, "epidemic_alert_level": 3},
    "advisories": [
        {"type": "heat", "severity": "CRITICAL", "message": "Extreme heat expected.", "recommendation": "Avoid outdoor work between 12 and 4 PM.", "icon": "sun"}
    ],
    "health_tips": ["Drink water every hour"],
    "llm_reasoning": "Heat wave combined with poor air quality."
}"#;

const FORECAST: &str = r#"{"forecast": [
    {"date": "2024-06-01", "predicted_patients": 480, "aqi": 200, "temp": 36, "load_level": "HIGH"},
    {"date": "2024-06-02", "predicted_patients": 520, "aqi": 215, "temp": 37, "load_level": "CRITICAL"}
]}"#;

async fn mock(server: &MockServer, path: &str, status: u16, body: &str) {
    server
        .mock_async(|when, then| {
            when.method(GET).path(format!("/public-advisory{path}"));
            then.status(status)
                .header("content-type", "application/json")
                .body(body);
        })
        .await;
}

#[tokio::test]
async fn dashboard_renders_all_sections() {
    let server = MockServer::start_async().await;
    mock(&server, "/current", 200, CURRENT).await;
    mock(&server, "/forecast", 200, FORECAST).await;

    Command::new(assert_cmd::cargo::cargo_bin!("advisory-cli"))
        .args(["--url", &server.base_url(), "--no-color"])
        .env_remove("ADVISORY_CONFIG")
        .env_remove("ADVISORY_API_URL")
        .assert()
        .success()
        .stdout(predicate::str::contains("Predicted Patient Load"))
        .stdout(predicate::str::contains("85.3%"))
        .stdout(predicate::str::contains("[Very Unhealthy]"))
        .stdout(predicate::str::contains("Trend: ↑ increasing"))
        .stdout(predicate::str::contains("Avoid outdoor work"));
}

#[tokio::test]
async fn dashboard_fails_when_either_fetch_fails() {
    let server = MockServer::start_async().await;
    mock(&server, "/current", 500, "{}").await;
    mock(&server, "/forecast", 200, FORECAST).await;

    Command::new(assert_cmd::cargo::cargo_bin!("advisory-cli"))
        .args(["--url", &server.base_url(), "--no-color", "dashboard"])
        .env_remove("ADVISORY_CONFIG")
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Unable to load AI predictions. Please try again later.",
        ))
        .stdout(predicate::str::contains("Forecast").not());
}

#[tokio::test]
async fn dashboard_json_output() {
    let server = MockServer::start_async().await;
    mock(&server, "/current", 200, CURRENT).await;
    mock(&server, "/forecast", 200, FORECAST).await;

    let output = Command::new(assert_cmd::cargo::cargo_bin!("advisory-cli"))
        .args(["--url", &server.base_url(), "--json"])
        .env_remove("ADVISORY_CONFIG")
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["current"]["patient_load"]["load_level"], "CRITICAL");
    assert_eq!(value["forecast"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn dashboard_json_output_reports_load_error() {
    let server = MockServer::start_async().await;
    mock(&server, "/current", 200, CURRENT).await;
    mock(&server, "/forecast", 503, "{}").await;

    let output = Command::new(assert_cmd::cargo::cargo_bin!("advisory-cli"))
        .args(["--url", &server.base_url(), "--json"])
        .env_remove("ADVISORY_CONFIG")
        .output()
        .unwrap();
    assert!(!output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value["error"],
        "Unable to load AI predictions. Please try again later."
    );
    assert!(value.get("current").is_none());
}

#[tokio::test]
async fn dashboard_writes_output_file() {
    let server = MockServer::start_async().await;
    mock(&server, "/current", 200, CURRENT).await;
    mock(&server, "/forecast", 200, FORECAST).await;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dashboard.txt");

    Command::new(assert_cmd::cargo::cargo_bin!("advisory-cli"))
        .args(["--url", &server.base_url(), "--output"])
        .arg(&path)
        .env_remove("ADVISORY_CONFIG")
        .assert()
        .success();

    let content = std::fs::read_to_string(path).unwrap();
    assert!(content.contains("2-Day Forecast"));
    assert!(!content.contains('\u{1b}'), "file output must not carry ANSI codes");
}

#[tokio::test]
async fn config_file_supplies_base_url() {
    let server = MockServer::start_async().await;
    mock(&server, "/current", 200, CURRENT).await;
    let forecast = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/public-advisory/forecast")
                .query_param("days", "2");
            then.status(200)
                .header("content-type", "application/json")
                .body(FORECAST);
        })
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("advisory.toml");
    std::fs::write(
        &config,
        format!(
            "[api]\nbase_url = \"{}\"\n\n[display]\nforecast_days = 2\ncolor = false\n",
            server.base_url()
        ),
    )
    .unwrap();

    Command::new(assert_cmd::cargo::cargo_bin!("advisory-cli"))
        .arg("--config")
        .arg(&config)
        .env_remove("ADVISORY_API_URL")
        .env_remove("ADVISORY_FORECAST_DAYS")
        .assert()
        .success()
        .stdout(predicate::str::contains("Health Advisories"));
    forecast.assert_async().await;
}
