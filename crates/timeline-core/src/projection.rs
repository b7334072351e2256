// File: crates/timeline-core/src/projection.rs
// Summary: The chart projector; turns choice series + zoom window into plotting primitives.

use thiserror::Error;

use crate::scale::{percent_y_scale, timestamp_x_scale, AxisScale};
use crate::series::{ChoiceSeries, ResolutionLabel};
use crate::types::ThemeColor;
use crate::window::{x_domain, ZoomWindow};

/// Stroke opacity for non-highlighted lines while any highlight is active.
pub const DIMMED_LINE_OPACITY: f32 = 0.2;
/// Fill opacity of the uncertainty band.
pub const BAND_FILL_OPACITY: f32 = 0.3;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ProjectionError {
    #[error("timestamp axis is empty")]
    EmptyTimestamps,
    #[error("series `{id}`: {field} has {got} entries, timestamp axis has {want}")]
    LengthMismatch { id: String, field: &'static str, got: usize, want: usize },
    #[error("series `{id}`: timestamps are not sorted")]
    UnsortedTimestamps { id: String },
}

/// One (x, upper, lower) sample of the uncertainty band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandPoint {
    pub x: f64,
    pub upper: f64,
    pub lower: f64,
}

/// Terminal marker showing the outcome a question resolved to, placed at the
/// final timestamp of its series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolutionMarker {
    pub x: f64,
    pub y: f64,
}

/// Plotting primitives for one choice, ready for a rendering surface.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesPlot {
    pub id: String,
    /// One point per axis entry; absent source values land at y = 0.
    pub line: Vec<(f64, f64)>,
    /// Present iff both bound sequences were supplied.
    pub band: Option<Vec<BandPoint>>,
    pub marker: Option<ResolutionMarker>,
    pub color: ThemeColor,
    pub active: bool,
    pub highlighted: bool,
}

impl SeriesPlot {
    /// Stroke opacity under the surface's emphasis rules: invisible when
    /// inactive, full when nothing is highlighted or self is, else dimmed.
    pub fn line_opacity(&self, highlight_active: bool) -> f32 {
        if !self.active {
            0.0
        } else if !highlight_active || self.highlighted {
            1.0
        } else {
            DIMMED_LINE_OPACITY
        }
    }

    /// The band is only revealed while its series is highlighted.
    pub fn shows_band(&self) -> bool {
        self.band.is_some() && self.highlighted
    }
}

/// Output of one projection pass. An immutable snapshot: recomputed whole on
/// every data, window, or size change.
#[derive(Clone, Debug, PartialEq)]
pub struct Projection {
    pub x_domain: (i64, i64),
    pub x_scale: AxisScale,
    pub y_scale: AxisScale,
    pub plots: Vec<SeriesPlot>,
}

impl Projection {
    pub fn highlight_active(&self) -> bool {
        self.plots.iter().any(|p| p.highlighted)
    }
}

/// Project choice series onto a rendering surface of `width` x `height`.
///
/// Pure and synchronous: identical inputs produce identical outputs, and a
/// structurally invalid input fails before any plot is produced. Callers
/// measure the surface first; a zero-sized surface is a caller bug, not a
/// recoverable condition here.
pub fn project(
    timestamps: &[i64],
    choices: &[ChoiceSeries],
    width: u32,
    height: u32,
    window: ZoomWindow,
) -> Result<Projection, ProjectionError> {
    debug_assert!(width > 0 && height > 0, "surface must be measured before projecting");

    let domain = x_domain(timestamps, window)?;

    let mut plots = Vec::with_capacity(choices.len());
    for series in choices {
        plots.push(project_series(series, timestamps)?);
    }

    Ok(Projection {
        x_domain: domain,
        x_scale: timestamp_x_scale(domain, width),
        y_scale: percent_y_scale(height),
        plots,
    })
}

fn project_series(series: &ChoiceSeries, shared: &[i64]) -> Result<SeriesPlot, ProjectionError> {
    let axis = series.axis(shared);
    validate_series(series, axis)?;

    let line = axis
        .iter()
        .zip(series.values.iter())
        .map(|(&t, v)| (t as f64, v.unwrap_or(0.0)))
        .collect();

    let band = match (&series.lower_bounds, &series.upper_bounds) {
        (Some(lower), Some(upper)) => Some(
            axis.iter()
                .enumerate()
                .map(|(i, &t)| BandPoint {
                    x: t as f64,
                    upper: upper[i].unwrap_or(0.0),
                    lower: lower[i].unwrap_or(0.0),
                })
                .collect(),
        ),
        _ => None,
    };

    let marker = series.resolution.as_ref().and_then(|resolution| {
        let x = *axis.last()? as f64;
        let y = match resolution {
            ResolutionLabel::Choice(name) if *name == series.id => series.range_max.unwrap_or(1.0),
            ResolutionLabel::Yes => series.range_max.unwrap_or(1.0),
            ResolutionLabel::No => series.range_min.unwrap_or(0.0),
            // Some other choice won; this series gets no marker.
            ResolutionLabel::Choice(_) => return None,
        };
        Some(ResolutionMarker { x, y })
    });

    Ok(SeriesPlot {
        id: series.id.clone(),
        line,
        band,
        marker,
        color: series.color,
        active: series.active,
        highlighted: series.highlighted,
    })
}

fn validate_series(series: &ChoiceSeries, axis: &[i64]) -> Result<(), ProjectionError> {
    if !axis.windows(2).all(|w| w[0] <= w[1]) {
        return Err(ProjectionError::UnsortedTimestamps { id: series.id.clone() });
    }
    check_len(series, "values", series.values.len(), axis.len())?;
    if let Some(lower) = &series.lower_bounds {
        check_len(series, "lower_bounds", lower.len(), axis.len())?;
    }
    if let Some(upper) = &series.upper_bounds {
        check_len(series, "upper_bounds", upper.len(), axis.len())?;
    }
    Ok(())
}

fn check_len(
    series: &ChoiceSeries,
    field: &'static str,
    got: usize,
    want: usize,
) -> Result<(), ProjectionError> {
    if got != want {
        return Err(ProjectionError::LengthMismatch { id: series.id.clone(), field, got, want });
    }
    Ok(())
}
