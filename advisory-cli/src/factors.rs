use crate::client::AdvisoryClient;
use crate::pretty::{Pretty, heading};
use advisory_common::EnvironmentalFactors;

pub async fn run_factors(client: &AdvisoryClient, json: bool, color: bool) -> anyhow::Result<String> {
    let factors = client.environmental_factors().await?;
    if json {
        return Ok(serde_json::to_string_pretty(&factors)?);
    }
    Ok(render_factors(&factors, color))
}

fn render_factors(factors: &EnvironmentalFactors, color: bool) -> String {
    format!(
        "{}\n{}",
        heading("Environmental Factors", color),
        factors.pretty(color)
    )
}
