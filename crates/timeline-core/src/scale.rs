// File: crates/timeline-core/src/scale.rs
// Summary: Axis scale generation; percentage Y ticks and calendar-aware X ticks.

use chrono::{Datelike, Months, TimeZone, Utc};

/// Tick label granularity for the time axis. Chosen from the domain span:
/// a wider span never yields a finer granularity than a narrower one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum TimeGranularity {
    Minutes,
    Hours,
    Days,
    Months,
    Years,
}

const HOUR: i64 = 3600;
const DAY: i64 = 24 * HOUR;

impl TimeGranularity {
    pub fn for_span(span_secs: i64) -> Self {
        if span_secs < 2 * HOUR {
            TimeGranularity::Minutes
        } else if span_secs < 2 * DAY {
            TimeGranularity::Hours
        } else if span_secs < 90 * DAY {
            TimeGranularity::Days
        } else if span_secs < 730 * DAY {
            TimeGranularity::Months
        } else {
            TimeGranularity::Years
        }
    }

    /// Format printed under the axis.
    const fn tick_fmt(&self) -> &'static str {
        match self {
            TimeGranularity::Minutes | TimeGranularity::Hours => "%H:%M",
            TimeGranularity::Days => "%b %-d",
            TimeGranularity::Months => "%b %Y",
            TimeGranularity::Years => "%Y",
        }
    }

    /// Fuller format for the interactive cursor readout.
    const fn cursor_fmt(&self) -> &'static str {
        match self {
            TimeGranularity::Minutes => "%H:%M",
            TimeGranularity::Hours => "%b %-d, %H:%M",
            TimeGranularity::Days | TimeGranularity::Months => "%b %-d, %Y",
            TimeGranularity::Years => "%b %Y",
        }
    }
}

/// Maps a raw tick value to its display string.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickFormatter {
    /// Probability in [0, 1]; only multiples of `labeled_step` get a label,
    /// minor ticks print as empty strings.
    Percent { labeled_step: f64 },
    /// Unix-seconds timestamp formatted with a chrono pattern (UTC).
    Calendar { fmt: &'static str },
}

impl TickFormatter {
    pub fn label(&self, value: f64) -> String {
        match self {
            TickFormatter::Percent { labeled_step } => {
                let steps = value / labeled_step;
                if (steps - steps.round()).abs() < 1e-6 {
                    format!("{}%", (value * 100.0).round() as i64)
                } else {
                    String::new()
                }
            }
            TickFormatter::Calendar { fmt } => Utc
                .timestamp_opt(value.round() as i64, 0)
                .single()
                .map(|d| d.format(fmt).to_string())
                .unwrap_or_default(),
        }
    }
}

/// Tick positions plus their formatting for one axis.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisScale {
    pub ticks: Vec<f64>,
    pub formatter: TickFormatter,
    /// Distinct format for the interactive readout, where present.
    pub cursor_formatter: Option<TickFormatter>,
}

impl AxisScale {
    pub fn label(&self, value: f64) -> String {
        self.formatter.label(value)
    }

    pub fn cursor_label(&self, value: f64) -> String {
        self.cursor_formatter.as_ref().unwrap_or(&self.formatter).label(value)
    }
}

/// Vertical scale for the fixed [0, 1] probability domain.
///
/// Major ticks every 20 points when the surface is tall enough, else every
/// 50; three unlabeled minor ticks sit between consecutive majors.
pub fn percent_y_scale(height: u32) -> AxisScale {
    let labeled_step = if height >= 120 { 0.2 } else { 0.5 };
    let step: f64 = labeled_step / 4.0;
    let count = (1.0 / step).round() as usize;
    let ticks = (0..=count).map(|i| i as f64 * step).collect();
    AxisScale {
        ticks,
        formatter: TickFormatter::Percent { labeled_step },
        cursor_formatter: None,
    }
}

/// Horizontal scale for a unix-seconds domain.
///
/// Ticks sit on calendar boundaries (UTC) at a granularity picked from the
/// domain span, then are thinned to roughly one per 80 px of width.
pub fn timestamp_x_scale(domain: (i64, i64), width: u32) -> AxisScale {
    let (start, end) = domain;
    let granularity = TimeGranularity::for_span((end - start).max(0));

    let mut ticks = calendar_ticks(start, end, granularity);
    let max_ticks = (width / 80).max(2) as usize;
    if ticks.len() > max_ticks {
        let stride = ticks.len().div_ceil(max_ticks);
        ticks = ticks.into_iter().step_by(stride).collect();
    }
    if ticks.is_empty() {
        // Span shorter than a single boundary interval.
        ticks = vec![start as f64, end as f64];
    }

    AxisScale {
        ticks,
        formatter: TickFormatter::Calendar { fmt: granularity.tick_fmt() },
        cursor_formatter: Some(TickFormatter::Calendar { fmt: granularity.cursor_fmt() }),
    }
}

/// All calendar boundaries of `granularity` inside [start, end].
fn calendar_ticks(start: i64, end: i64, granularity: TimeGranularity) -> Vec<f64> {
    match granularity {
        TimeGranularity::Minutes => aligned_ticks(start, end, 60),
        TimeGranularity::Hours => aligned_ticks(start, end, HOUR),
        TimeGranularity::Days => aligned_ticks(start, end, DAY),
        TimeGranularity::Months => month_starts(start, end).unwrap_or_default(),
        TimeGranularity::Years => year_starts(start, end).unwrap_or_default(),
    }
}

fn aligned_ticks(start: i64, end: i64, unit: i64) -> Vec<f64> {
    let mut t = start.div_euclid(unit) * unit;
    if t < start {
        t += unit;
    }
    let mut out = Vec::new();
    while t <= end {
        out.push(t as f64);
        t += unit;
    }
    out
}

fn month_starts(start: i64, end: i64) -> Option<Vec<f64>> {
    let first = Utc.timestamp_opt(start, 0).single()?;
    let mut cursor = Utc.with_ymd_and_hms(first.year(), first.month(), 1, 0, 0, 0).single()?;
    if cursor.timestamp() < start {
        cursor = cursor.checked_add_months(Months::new(1))?;
    }
    let mut out = Vec::new();
    while cursor.timestamp() <= end {
        out.push(cursor.timestamp() as f64);
        cursor = cursor.checked_add_months(Months::new(1))?;
    }
    Some(out)
}

fn year_starts(start: i64, end: i64) -> Option<Vec<f64>> {
    let first = Utc.timestamp_opt(start, 0).single()?;
    let mut year = first.year();
    let mut cursor = Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).single()?;
    if cursor.timestamp() < start {
        year += 1;
        cursor = Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).single()?;
    }
    let mut out = Vec::new();
    while cursor.timestamp() <= end {
        out.push(cursor.timestamp() as f64);
        year += 1;
        cursor = Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).single()?;
    }
    Some(out)
}
