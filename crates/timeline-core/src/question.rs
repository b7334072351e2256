// File: crates/timeline-core/src/question.rs
// Summary: Question-type dispatch, forecast payloads, and display-value scaling.

use chrono::{TimeZone, Utc};

use crate::series::ChoiceSeries;
use crate::types::ThemeColor;

/// Closed set of question kinds a timeline can belong to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QuestionType {
    Binary,
    Numeric,
    Date,
    MultipleChoice,
}

/// A submitted forecast, tagged per question type.
///
/// Binary carries a single yes-probability, continuous questions carry a CDF
/// over the internal [0, 1] range, multiple choice a probability per option.
#[derive(Clone, Debug, PartialEq)]
pub enum ForecastPayload {
    Binary { yes: f64 },
    Continuous { cdf: Vec<f64> },
    MultipleChoice { by_option: Vec<(String, f64)> },
}

impl ForecastPayload {
    /// Whether this payload is the right shape for a question type. A
    /// continuous payload serves both numeric and date questions.
    pub fn matches(&self, question_type: QuestionType) -> bool {
        match (self, question_type) {
            (ForecastPayload::Binary { .. }, QuestionType::Binary) => true,
            (ForecastPayload::Continuous { .. }, QuestionType::Numeric | QuestionType::Date) => {
                true
            }
            (ForecastPayload::MultipleChoice { .. }, QuestionType::MultipleChoice) => true,
            _ => false,
        }
    }
}

/// How a question's internal [0, 1] locations map onto its actual range.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Scaling {
    pub range_min: Option<f64>,
    pub range_max: Option<f64>,
    /// Set for log-scaled questions; the ratio anchor of the scale.
    pub zero_point: Option<f64>,
}

/// Map an internal [0, 1] location to the question's actual range.
///
/// Linear between `range_min` and `range_max`; when `zero_point` is set the
/// mapping follows the derivative-ratio log scale instead.
pub fn unscale_location(x: f64, scaling: &Scaling) -> f64 {
    let min = scaling.range_min.unwrap_or(0.0);
    let max = scaling.range_max.unwrap_or(1.0);
    match scaling.zero_point {
        Some(zero) => {
            let deriv_ratio = (max - zero) / (min - zero);
            min + (max - min) * (deriv_ratio.powf(x) - 1.0) / (deriv_ratio - 1.0)
        }
        None => min + (max - min) * x,
    }
}

/// Human-readable value for a cursor readout: percent for binary questions,
/// the unscaled number for numeric, a calendar date for date questions.
pub fn display_value(x: f64, question_type: QuestionType, scaling: &Scaling) -> String {
    match question_type {
        QuestionType::Binary | QuestionType::MultipleChoice => {
            format!("{}%", (x * 100.0).round() as i64)
        }
        QuestionType::Numeric => {
            let value = unscale_location(x, scaling);
            if value.abs() >= 1000.0 {
                format!("{value:.0}")
            } else {
                format!("{value:.1}")
            }
        }
        QuestionType::Date => {
            let secs = unscale_location(x, scaling).round() as i64;
            Utc.timestamp_opt(secs, 0)
                .single()
                .map(|d| d.format("%b %-d, %Y").to_string())
                .unwrap_or_default()
        }
    }
}

/// One aggregate forecast history as the data layer hands it over.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AggregateHistory {
    pub timestamps: Vec<i64>,
    pub medians: Vec<Option<f64>>,
    pub q1s: Option<Vec<Option<f64>>>,
    pub q3s: Option<Vec<Option<f64>>>,
}

/// Shape one labeled aggregate history into a plottable choice series, with
/// its color cycled from the palette by option index. Quartiles, when both
/// present, become the uncertainty band.
pub fn choice_series_from_history(
    label: impl Into<String>,
    index: usize,
    history: AggregateHistory,
) -> ChoiceSeries {
    let mut series = ChoiceSeries::new(label, history.medians, ThemeColor::for_index(index))
        .with_timestamps(history.timestamps);
    if let (Some(q1s), Some(q3s)) = (history.q1s, history.q3s) {
        series = series.with_bounds(q1s, q3s);
    }
    series
}
