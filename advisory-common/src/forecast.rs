use crate::ForecastEntry;

/// Patient count treated as full hospital capacity on the load gauge.
pub const GAUGE_CAPACITY: f64 = 600.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Trend {
    Increasing,
    Decreasing,
}

impl Trend {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Increasing => "increasing",
            Self::Decreasing => "decreasing",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSummary<'a> {
    pub peak: &'a ForecastEntry,
    pub peak_index: usize,
    pub lowest: &'a ForecastEntry,
    pub lowest_index: usize,
    pub average: i64,
    pub trend: Trend,
}

/// Peak, lowest, rounded mean and trend of a forecast.
///
/// Returns `None` for an empty forecast. Extremes keep the first entry on
/// ties. The trend only reports `Increasing` when the last day is strictly
/// above the first; a flat forecast counts as `Decreasing`.
pub fn summarize(entries: &[ForecastEntry]) -> Option<ForecastSummary<'_>> {
    let first = entries.first()?;
    let last = entries.last()?;

    let mut peak_index = 0;
    let mut lowest_index = 0;
    let mut total = 0.0;
    for (idx, entry) in entries.iter().enumerate() {
        if entry.predicted_patients > entries[peak_index].predicted_patients {
            peak_index = idx;
        }
        if entry.predicted_patients < entries[lowest_index].predicted_patients {
            lowest_index = idx;
        }
        total += entry.predicted_patients;
    }

    let trend = if last.predicted_patients > first.predicted_patients {
        Trend::Increasing
    } else {
        Trend::Decreasing
    };

    Some(ForecastSummary {
        peak: &entries[peak_index],
        peak_index,
        lowest: &entries[lowest_index],
        lowest_index,
        average: round_half_up(total / entries.len() as f64),
        trend,
    })
}

/// Share of [`GAUGE_CAPACITY`] as a percentage, clamped to 100.
pub fn gauge_percentage(prediction: f64) -> f64 {
    (prediction / GAUGE_CAPACITY * 100.0).min(100.0)
}

fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
