//! Shared data model for the public health advisory dashboard.
//!
//! Everything here is pure: payload types as they arrive from the advisory
//! API, the classification rules that turn raw readings into labels and
//! style tokens, forecast statistics, and the static specialist directory.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

pub mod classify;
pub mod forecast;
pub mod specialists;

pub use classify::{Classification, Hue, Style};
pub use forecast::{ForecastSummary, Trend, gauge_percentage, summarize};
pub use specialists::{Carousel, SPECIALISTS, Specialist};

/// Hospital capacity stress indicator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "UPPERCASE")]
pub enum LoadLevel {
    Low,
    Normal,
    High,
    Critical,
    Unknown,
}

impl From<&str> for LoadLevel {
    fn from(s: &str) -> Self {
        match s {
            "LOW" => Self::Low,
            "NORMAL" => Self::Normal,
            "HIGH" => Self::High,
            "CRITICAL" => Self::Critical,
            _ => Self::Unknown,
        }
    }
}

impl From<String> for LoadLevel {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

/// Advisory urgency indicator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "UPPERCASE")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
    Unknown,
}

impl From<&str> for Severity {
    fn from(s: &str) -> Self {
        match s {
            "LOW" => Self::Low,
            "MEDIUM" => Self::Medium,
            "HIGH" => Self::High,
            "CRITICAL" => Self::Critical,
            _ => Self::Unknown,
        }
    }
}

impl From<String> for Severity {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientLoad {
    /// Expected patient count.
    pub prediction: f64,
    pub load_level: LoadLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_interval: Option<ConfidenceInterval>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalFactors {
    #[serde(rename = "AQI")]
    pub aqi: f64,
    /// Degrees Celsius.
    pub temp: f64,
    /// Millimetres.
    pub rainfall: f64,
    /// Only whole numbers survive decoding; anything else reads as absent
    /// and classifies as Unknown.
    #[serde(default, deserialize_with = "deserialize_alert_level")]
    pub epidemic_alert_level: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisory {
    #[serde(rename = "type")]
    pub kind: String,
    pub severity: Severity,
    pub message: String,
    pub recommendation: String,
    #[serde(default)]
    pub icon: String,
}

/// One fetch of `/public-advisory/current`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisorySnapshot {
    pub patient_load: PatientLoad,
    pub environmental_factors: EnvironmentalFactors,
    #[serde(default)]
    pub advisories: Vec<Advisory>,
    #[serde(default)]
    pub health_tips: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub llm_reasoning: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    #[serde(deserialize_with = "deserialize_day")]
    pub date: NaiveDate,
    pub predicted_patients: f64,
    pub aqi: f64,
    pub temp: f64,
    pub load_level: LoadLevel,
}

/// Body of `/public-advisory/forecast`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub forecast: Option<Vec<ForecastEntry>>,
}

/// Accepts `2024-05-01` as well as `2024-05-01T00:00:00Z`; only the day is kept.
fn deserialize_day<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let day = raw.get(..10).unwrap_or(&raw);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").map_err(serde::de::Error::custom)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAlertLevel {
    Whole(i64),
    Number(f64),
    Other(#[allow(dead_code)] serde::de::IgnoredAny),
}

fn deserialize_alert_level<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let level = match Option::<RawAlertLevel>::deserialize(deserializer)? {
        Some(RawAlertLevel::Whole(n)) => Some(n),
        Some(RawAlertLevel::Number(x)) if x.is_finite() && x.fract() == 0.0 => Some(x as i64),
        Some(RawAlertLevel::Number(_) | RawAlertLevel::Other(_)) | None => None,
    };
    Ok(level)
}
