//! Threshold and enum classification for dashboard readings.
//!
//! Every function is total: values outside the documented ranges (including
//! NaN) fall through to the terminal bucket of their ladder.

use crate::{LoadLevel, Severity};

/// Display colour family. Renderers decide the concrete shade.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Hue {
    Green,
    Yellow,
    Orange,
    Red,
    Purple,
    Maroon,
    Blue,
    Gray,
}

/// Text and background colour tokens for one classified value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Style {
    pub text: Hue,
    pub background: Hue,
}

impl Style {
    pub const fn tinted(hue: Hue) -> Self {
        Self {
            text: hue,
            background: hue,
        }
    }

    pub const NEUTRAL: Style = Style::tinted(Hue::Gray);
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    pub label: &'static str,
    pub style: Style,
}

impl Classification {
    const fn new(label: &'static str, hue: Hue) -> Self {
        Self {
            label,
            style: Style::tinted(hue),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum AqiStatus {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiStatus {
    pub fn classification(self) -> Classification {
        match self {
            Self::Good => Classification::new("Good", Hue::Green),
            Self::Moderate => Classification::new("Moderate", Hue::Yellow),
            Self::UnhealthyForSensitiveGroups => {
                Classification::new("Unhealthy for Sensitive Groups", Hue::Orange)
            }
            Self::Unhealthy => Classification::new("Unhealthy", Hue::Red),
            Self::VeryUnhealthy => Classification::new("Very Unhealthy", Hue::Purple),
            Self::Hazardous => Classification::new("Hazardous", Hue::Maroon),
        }
    }
}

/// Inclusive upper bounds, ascending.
const AQI_BANDS: &[(f64, AqiStatus)] = &[
    (50.0, AqiStatus::Good),
    (100.0, AqiStatus::Moderate),
    (150.0, AqiStatus::UnhealthyForSensitiveGroups),
    (200.0, AqiStatus::Unhealthy),
    (300.0, AqiStatus::VeryUnhealthy),
];

pub fn aqi_status(aqi: f64) -> AqiStatus {
    AQI_BANDS
        .iter()
        .find(|(upper, _)| aqi <= *upper)
        .map(|(_, status)| *status)
        .unwrap_or(AqiStatus::Hazardous)
}

pub fn classify_aqi(aqi: f64) -> Classification {
    aqi_status(aqi).classification()
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TemperatureStatus {
    Cold,
    Pleasant,
    Warm,
    Hot,
}

impl TemperatureStatus {
    pub fn classification(self) -> Classification {
        match self {
            Self::Cold => Classification::new("Cold", Hue::Blue),
            Self::Pleasant => Classification::new("Pleasant", Hue::Green),
            Self::Warm => Classification::new("Warm", Hue::Orange),
            Self::Hot => Classification::new("Hot", Hue::Red),
        }
    }
}

/// Exclusive upper bounds in °C, ascending.
const TEMPERATURE_BANDS: &[(f64, TemperatureStatus)] = &[
    (10.0, TemperatureStatus::Cold),
    (25.0, TemperatureStatus::Pleasant),
    (35.0, TemperatureStatus::Warm),
];

pub fn temperature_status(celsius: f64) -> TemperatureStatus {
    TEMPERATURE_BANDS
        .iter()
        .find(|(upper, _)| celsius < *upper)
        .map(|(_, status)| *status)
        .unwrap_or(TemperatureStatus::Hot)
}

pub fn classify_temperature(celsius: f64) -> Classification {
    temperature_status(celsius).classification()
}

pub fn classify_epidemic_level(level: Option<i64>) -> Classification {
    match level {
        Some(0) => Classification::new("No Alert", Hue::Green),
        Some(1) => Classification::new("Level 1 Monitor", Hue::Yellow),
        Some(2) => Classification::new("Level 2 Caution", Hue::Orange),
        Some(3) => Classification::new("Level 3 Critical", Hue::Red),
        _ => Classification::new("Unknown", Hue::Gray),
    }
}

pub fn classify_severity(severity: Severity) -> Classification {
    match severity {
        Severity::Low => Classification::new("LOW", Hue::Blue),
        Severity::Medium => Classification::new("MEDIUM", Hue::Yellow),
        Severity::High => Classification::new("HIGH", Hue::Orange),
        Severity::Critical => Classification::new("CRITICAL", Hue::Red),
        Severity::Unknown => Classification {
            label: "UNKNOWN",
            style: Style::NEUTRAL,
        },
    }
}

pub fn classify_load_level(level: LoadLevel) -> Classification {
    match level {
        LoadLevel::Low => Classification::new("LOW", Hue::Green),
        LoadLevel::Normal => Classification::new("NORMAL", Hue::Blue),
        LoadLevel::High => Classification::new("HIGH", Hue::Orange),
        LoadLevel::Critical => Classification::new("CRITICAL", Hue::Red),
        LoadLevel::Unknown => Classification {
            label: "UNKNOWN",
            style: Style::NEUTRAL,
        },
    }
}
