use advisory_common::classify::{
    classify_aqi, classify_epidemic_level, classify_load_level, classify_severity,
    classify_temperature,
};
use advisory_common::{
    Advisory, Classification, EnvironmentalFactors, ForecastEntry, Hue, PatientLoad, Specialist,
    Trend, gauge_percentage, summarize,
};
use colored::*;

const GAUGE_WIDTH: usize = 30;
const CHART_WIDTH: usize = 32;

pub trait Pretty {
    fn pretty(&self, color: bool) -> String;
}

fn hue_color(hue: Hue) -> Color {
    match hue {
        Hue::Green => Color::Green,
        Hue::Yellow => Color::Yellow,
        Hue::Orange => Color::TrueColor {
            r: 255,
            g: 140,
            b: 0,
        },
        Hue::Red => Color::Red,
        Hue::Purple => Color::Magenta,
        Hue::Maroon => Color::TrueColor { r: 128, g: 0, b: 0 },
        Hue::Blue => Color::Blue,
        Hue::Gray => Color::BrightBlack,
    }
}

pub fn paint(text: &str, hue: Hue, color: bool) -> ColoredString {
    if color {
        text.color(hue_color(hue))
    } else {
        text.normal()
    }
}

/// Label rendered on its background colour, or in brackets without colour.
pub fn badge(class: &Classification, color: bool) -> String {
    if color {
        format!(" {} ", class.label)
            .black()
            .on_color(hue_color(class.style.background))
            .bold()
            .to_string()
    } else {
        format!("[{}]", class.label)
    }
}

pub fn heading(text: &str, color: bool) -> String {
    if color {
        text.bold().cyan().to_string()
    } else {
        text.to_string()
    }
}

fn bar(filled: usize, width: usize) -> String {
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

impl Pretty for PatientLoad {
    fn pretty(&self, color: bool) -> String {
        let level = classify_load_level(self.load_level);
        let pct = gauge_percentage(self.prediction);
        let filled = (pct / 100.0 * GAUGE_WIDTH as f64).round() as usize;
        let mut out = format!(
            "[{}] {:>5.1}%  {} patients  {}",
            paint(&bar(filled, GAUGE_WIDTH), level.style.text, color),
            pct,
            self.prediction.round(),
            badge(&level, color)
        );
        if let Some(ci) = self.confidence_interval {
            out.push_str(&format!(
                "\n  Confidence interval: {:.0} - {:.0}",
                ci.lower, ci.upper
            ));
        }
        out
    }
}

impl Pretty for EnvironmentalFactors {
    fn pretty(&self, color: bool) -> String {
        let aqi = classify_aqi(self.aqi);
        let temp = classify_temperature(self.temp);
        let epidemic = classify_epidemic_level(self.epidemic_alert_level);
        let level = self
            .epidemic_alert_level
            .map(|l| l.to_string())
            .unwrap_or_else(|| "-".to_string());
        format!(
            "  {:<16} {:<10} {}\n  {:<16} {:<10} {}\n  {:<16} {:<10}\n  {:<16} {:<10} {}",
            "Air Quality",
            format!("{:.0}", self.aqi),
            badge(&aqi, color),
            "Temperature",
            format!("{:.1}°C", self.temp),
            badge(&temp, color),
            "Rainfall",
            format!("{:.1} mm", self.rainfall),
            "Epidemic Alert",
            level,
            badge(&epidemic, color),
        )
    }
}

impl Pretty for Advisory {
    fn pretty(&self, color: bool) -> String {
        let severity = classify_severity(self.severity);
        let title = if self.icon.is_empty() {
            self.kind.clone()
        } else {
            format!("{} ({})", self.kind, self.icon)
        };
        let title = if color {
            title.bold().to_string()
        } else {
            title
        };
        format!(
            "  {} {}\n    {}\n    → {}",
            badge(&severity, color),
            title,
            self.message,
            self.recommendation
        )
    }
}

impl Pretty for Specialist {
    fn pretty(&self, color: bool) -> String {
        let name = if color {
            self.name.bold().to_string()
        } else {
            self.name.to_string()
        };
        format!(
            "  {} - {}\n    Expertise: {}\n    Contact:   {}",
            name, self.specialty, self.expertise, self.contact
        )
    }
}

/// Horizontal bar chart of a forecast followed by its summary line.
pub struct ForecastChart<'a>(pub &'a [ForecastEntry]);

impl Pretty for ForecastChart<'_> {
    fn pretty(&self, color: bool) -> String {
        let Some(summary) = summarize(self.0) else {
            return "  No forecast data available.".to_string();
        };
        let scale = summary.peak.predicted_patients.max(1.0);

        let mut out = String::new();
        for entry in self.0 {
            let level = classify_load_level(entry.load_level);
            let filled = (entry.predicted_patients / scale * CHART_WIDTH as f64).round() as usize;
            out.push_str(&format!(
                "  {} │{} {:>5.0}  AQI {:>3.0}  {:>5.1}°C  {}\n",
                entry.date.format("%a %m/%d"),
                paint(&bar(filled, CHART_WIDTH), level.style.text, color),
                entry.predicted_patients,
                entry.aqi,
                entry.temp,
                badge(&level, color)
            ));
        }

        let (arrow, hue) = match summary.trend {
            Trend::Increasing => ("↑", Hue::Red),
            Trend::Decreasing => ("↓", Hue::Green),
        };
        let trend = paint(&format!("{arrow} {}", summary.trend.as_str()), hue, color);
        out.push_str(&format!(
            "  Peak: {:.0} on {}   Lowest: {:.0} on {}   Average: {}   Trend: {}",
            summary.peak.predicted_patients,
            summary.peak.date.format("%a %m/%d"),
            summary.lowest.predicted_patients,
            summary.lowest.date.format("%a %m/%d"),
            summary.average,
            trend
        ));
        out
    }
}
