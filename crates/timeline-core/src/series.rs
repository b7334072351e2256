// File: crates/timeline-core/src/series.rs
// Summary: Series model for forecast choices and per-user forecast marks.
// Notes:
// - A `ChoiceSeries` keeps its value sequences index-aligned with its
//   timestamp axis; absent values stay in place as `None` and project to a
//   0.0 sentinel rather than being dropped.
// - Constructors follow the builder-style helpers used across the workspace
//   so callers opt in to bounds/resolution without positional noise.

use crate::types::ThemeColor;

/// Outcome a question resolved to, as far as a single series cares.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolutionLabel {
    /// Multiple-choice: the named choice won.
    Choice(String),
    /// Binary affirmative outcome.
    Yes,
    /// Binary negative outcome.
    No,
}

/// One forecastable choice: aggregate estimates over time plus display flags.
#[derive(Clone, Debug, PartialEq)]
pub struct ChoiceSeries {
    pub id: String,
    /// Own timestamp axis (unix seconds, non-decreasing). `None` means the
    /// shared axis passed to `project` applies.
    pub timestamps: Option<Vec<i64>>,
    /// Point estimates, aligned 1:1 with the axis. `None` marks an absent value.
    pub values: Vec<Option<f64>>,
    /// Lower edge of the uncertainty band. Only drawn when the upper edge is
    /// present as well.
    pub lower_bounds: Option<Vec<Option<f64>>>,
    /// Upper edge of the uncertainty band.
    pub upper_bounds: Option<Vec<Option<f64>>>,
    pub color: ThemeColor,
    /// Whether the line is drawn at all.
    pub active: bool,
    /// Whether this series is emphasized; dims the others and reveals its band.
    pub highlighted: bool,
    pub resolution: Option<ResolutionLabel>,
    /// Vertical placement of the resolution marker for scaled questions.
    pub range_min: Option<f64>,
    pub range_max: Option<f64>,
}

impl ChoiceSeries {
    pub fn new(id: impl Into<String>, values: Vec<Option<f64>>, color: ThemeColor) -> Self {
        Self {
            id: id.into(),
            timestamps: None,
            values,
            lower_bounds: None,
            upper_bounds: None,
            color,
            active: true,
            highlighted: false,
            resolution: None,
            range_min: None,
            range_max: None,
        }
    }

    /// Give the series its own timestamp axis instead of the shared one.
    pub fn with_timestamps(mut self, timestamps: Vec<i64>) -> Self {
        self.timestamps = Some(timestamps);
        self
    }

    /// Attach both band edges. Either edge alone never draws a band.
    pub fn with_bounds(mut self, lower: Vec<Option<f64>>, upper: Vec<Option<f64>>) -> Self {
        self.lower_bounds = Some(lower);
        self.upper_bounds = Some(upper);
        self
    }

    pub fn with_resolution(mut self, resolution: ResolutionLabel) -> Self {
        self.resolution = Some(resolution);
        self
    }

    /// Vertical range used to place the resolution marker.
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.range_min = Some(min);
        self.range_max = Some(max);
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }

    /// The axis this series actually plots against.
    pub fn axis<'a>(&'a self, shared: &'a [i64]) -> &'a [i64] {
        self.timestamps.as_deref().unwrap_or(shared)
    }
}

/// A single user's own submitted forecasts for one choice. Drawn as discrete
/// marks on top of the aggregate series, never merged into them.
#[derive(Clone, Debug, PartialEq)]
pub struct UserMarkSeries {
    pub choice: String,
    pub color: ThemeColor,
    pub timestamps: Vec<i64>,
    pub values: Vec<f64>,
}

impl UserMarkSeries {
    pub fn new(choice: impl Into<String>, color: ThemeColor) -> Self {
        Self { choice: choice.into(), color, timestamps: Vec::new(), values: Vec::new() }
    }

    pub fn with_points(mut self, timestamps: Vec<i64>, values: Vec<f64>) -> Self {
        self.timestamps = timestamps;
        self.values = values;
        self
    }

    /// (timestamp, value) pairs, truncated to the shorter sequence.
    pub fn points(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.timestamps.iter().copied().zip(self.values.iter().copied())
    }
}
