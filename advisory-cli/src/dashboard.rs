use crate::controller::{DashboardData, PageState};
use crate::pretty::{ForecastChart, Pretty, heading};
use advisory_common::{Carousel, ForecastEntry, SPECIALISTS};
use chrono::{DateTime, Utc};
use colored::*;

/// Render the whole page for the current state.
///
/// Sections with nothing to show are left out individually; the error view
/// replaces every data section.
pub fn render_page(
    state: &PageState,
    carousel: &Carousel,
    now: DateTime<Utc>,
    color: bool,
) -> String {
    let mut out = format!(
        "{} {}\n\n",
        heading("AI Public Health Advisory", color),
        now.format("[%Y-%m-%d %H:%M:%S UTC]")
    );

    match state {
        PageState::Loading => out.push_str("Loading AI predictions...\n"),
        PageState::Error(message) => {
            let line = if color {
                message.red().bold().to_string()
            } else {
                message.clone()
            };
            out.push_str(&format!("{line}\nPress 'r' or run the command again to retry.\n"));
        }
        PageState::Success(data) => render_data(&mut out, data, color),
    }

    out.push('\n');
    out.push_str(&render_specialist(carousel, color));
    out
}

fn render_data(out: &mut String, data: &DashboardData, color: bool) {
    let advisory = &data.advisory;

    out.push_str(&format!("{}\n", heading("Predicted Patient Load", color)));
    out.push_str(&format!("  {}\n\n", advisory.patient_load.pretty(color)));

    out.push_str(&format!("{}\n", heading("Environmental Factors", color)));
    out.push_str(&format!("{}\n\n", advisory.environmental_factors.pretty(color)));

    if data.forecast.is_some() {
        out.push_str(&render_forecast(data.forecast.as_deref(), color));
        out.push_str("\n\n");
    }

    if !advisory.advisories.is_empty() {
        out.push_str(&format!("{}\n", heading("Health Advisories", color)));
        for item in &advisory.advisories {
            out.push_str(&format!("{}\n", item.pretty(color)));
        }
        out.push('\n');
    }

    if !advisory.health_tips.is_empty() {
        out.push_str(&format!("{}\n", heading("Health Tips", color)));
        for tip in &advisory.health_tips {
            out.push_str(&format!("  • {tip}\n"));
        }
        out.push('\n');
    }

    if let Some(reasoning) = advisory.llm_reasoning.as_deref().filter(|r| !r.trim().is_empty()) {
        out.push_str(&format!("{}\n", heading("AI Reasoning", color)));
        out.push_str(&format!("  {}\n", reasoning.trim()));
    }
}

/// Forecast section. A response without a `forecast` array renders nothing;
/// the dashboard leaves the section out in that case.
pub fn render_forecast(forecast: Option<&[ForecastEntry]>, color: bool) -> String {
    let Some(forecast) = forecast else {
        return String::new();
    };
    format!(
        "{}\n{}",
        heading(&format!("{}-Day Forecast", forecast.len()), color),
        ForecastChart(forecast).pretty(color)
    )
}

pub fn render_specialist(carousel: &Carousel, color: bool) -> String {
    let Some(specialist) = carousel.current(SPECIALISTS) else {
        return String::new();
    };
    format!(
        "{} ({}/{})\n{}\n",
        heading("Consult a Specialist", color),
        carousel.index() + 1,
        carousel.len(),
        specialist.pretty(color)
    )
}

/// Every specialist, with the carousel position marked.
pub fn render_directory(carousel: &Carousel, color: bool) -> String {
    let mut out = format!("{}\n", heading("Specialist Directory", color));
    for (idx, specialist) in SPECIALISTS.iter().enumerate() {
        let marker = if idx == carousel.index() { "▶" } else { " " };
        out.push_str(&format!(
            "{marker} {:>2}. {} - {} ({})\n",
            idx + 1,
            specialist.name,
            specialist.specialty,
            specialist.contact
        ));
    }
    out.push('\n');
    out.push_str(&render_specialist(carousel, color));
    out
}
