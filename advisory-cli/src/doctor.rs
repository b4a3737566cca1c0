use crate::client::{AdvisoryClient, FetchError};
use crate::pretty::heading;
use colored::*;

fn status_line(label: &str, result: Result<String, FetchError>, color: bool) -> (String, bool) {
    let (text, ok) = match result {
        Ok(detail) => (format!("OK ({detail})"), true),
        Err(err) => (format!("FAIL ({err})"), false),
    };
    let text = match (color, ok) {
        (false, _) => text,
        (true, true) => text.green().to_string(),
        (true, false) => text.red().to_string(),
    };
    (format!("• {label:<24}{text}"), ok)
}

pub async fn run_doctor(client: &AdvisoryClient, days: u32, color: bool) -> String {
    let mut lines = vec![
        heading("🩺 Advisory Doctor", color),
        format!("Checking {} ...", client.base_url()),
        String::new(),
    ];
    let mut all_good = true;

    let checks = [
        (
            "Current advisory:",
            client
                .current()
                .await
                .map(|s| format!("{} advisories", s.advisories.len())),
        ),
        (
            "Forecast:",
            client.forecast(days).await.map(|f| match f {
                Some(entries) => format!("{} days", entries.len()),
                None => "no forecast array".to_string(),
            }),
        ),
        (
            "Health risks:",
            client.health_risks().await.map(|_| "payload received".to_string()),
        ),
        (
            "Environmental factors:",
            client
                .environmental_factors()
                .await
                .map(|f| format!("AQI {:.0}", f.aqi)),
        ),
        (
            "Model info:",
            client.model_info().await.map(|_| "payload received".to_string()),
        ),
    ];

    for (label, result) in checks {
        let (line, ok) = status_line(label, result, color);
        all_good &= ok;
        lines.push(line);
    }

    lines.push(String::new());
    if all_good {
        lines.push(conclude("✅ All advisory endpoints are reachable.", true, color));
    } else {
        lines.push(conclude(
            "⚠️  Some advisory endpoints failed. See above.",
            false,
            color,
        ));
        lines.push("  → Is the advisory API running? Check --url or ADVISORY_API_URL.".to_string());
    }
    lines.join("\n")
}

fn conclude(text: &str, ok: bool, color: bool) -> String {
    match (color, ok) {
        (false, _) => text.to_string(),
        (true, true) => text.bold().green().to_string(),
        (true, false) => text.bold().yellow().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn reports_each_endpoint() {
        let server = MockServer::start_async().await;
        let _factors = server
            .mock_async(|when, then| {
                when.method(GET).path("/public-advisory/environmental-factors");
                then.status(200)
                    .header("content-type", "application/json")
                    .body(r#"{"AQI": 42, "temp": 20, "rainfall": 0, "epidemic_alert_level": 0}"#);
            })
            .await;
        let _model = server
            .mock_async(|when, then| {
                when.method(GET).path("/public-advisory/model-info");
                then.status(200)
                    .header("content-type", "application/json")
                    .body(r#"{"model": "xgboost", "version": "1.2"}"#);
            })
            .await;

        let client = AdvisoryClient::new(&server.base_url(), None).unwrap();
        let report = run_doctor(&client, 7, false).await;
        assert!(report.contains("Environmental factors:  OK (AQI 42)"), "{report}");
        assert!(report.contains("Model info:             OK"), "{report}");
        assert!(report.contains("Current advisory:       FAIL"), "{report}");
        assert!(report.contains("Some advisory endpoints failed"));
    }
}
