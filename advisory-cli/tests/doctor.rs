use assert_cmd::Command;
use httpmock::prelude::*;

#[tokio::test]
async fn doctor_command_checks_every_endpoint() {
    let server = MockServer::start_async().await;

    let _current = server
        .mock_async(|when, then| {
            when.method(GET).path("/public-advisory/current");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{
                    "patient_load": {"prediction": 120, "load_level": "LOW"},
                    "environmental_factors": {"AQI": 35, "temp": 22, "rainfall": 2, "epidemic_alert_level": 0},
                    "advisories": [],
                    "health_tips": []
                }"#);
        })
        .await;
    let _forecast = server
        .mock_async(|when, then| {
            when.method(GET).path("/public-advisory/forecast");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"forecast": []}"#);
        })
        .await;
    for path in ["/public-advisory/health-risks", "/public-advisory/model-info"] {
        server
            .mock_async(|when, then| {
                when.method(GET).path(path);
                then.status(200)
                    .header("content-type", "application/json")
                    .body("{}");
            })
            .await;
    }
    let _factors = server
        .mock_async(|when, then| {
            when.method(GET).path("/public-advisory/environmental-factors");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"AQI": 35, "temp": 22, "rainfall": 2, "epidemic_alert_level": 0}"#);
        })
        .await;

    Command::new(assert_cmd::cargo::cargo_bin!("advisory-cli"))
        .args(["--url", &server.base_url(), "--no-color", "doctor"])
        .env_remove("ADVISORY_CONFIG")
        .assert()
        .success()
        .stdout(predicates::str::contains("Advisory Doctor"))
        .stdout(predicates::str::contains("All advisory endpoints are reachable."));
}

#[tokio::test]
async fn doctor_command_handles_unreachable_server() {
    // Doctor still exits successfully but reports FAIL per endpoint
    Command::new(assert_cmd::cargo::cargo_bin!("advisory-cli"))
        .args(["--url", "http://127.0.0.1:59999", "--no-color", "doctor"])
        .env_remove("ADVISORY_CONFIG")
        .assert()
        .success()
        .stdout(predicates::str::contains("FAIL"));
}
