// File: crates/timeline-core/src/lib.rs
// Summary: Core library entry point; exports the projection API for forecast timelines.

pub mod cursor;
pub mod projection;
pub mod question;
pub mod scale;
pub mod series;
pub mod types;
pub mod window;

pub use cursor::{previous_index, previous_timestamp};
pub use projection::{
    project, BandPoint, Projection, ProjectionError, ResolutionMarker, SeriesPlot,
    BAND_FILL_OPACITY, DIMMED_LINE_OPACITY,
};
pub use question::{ForecastPayload, QuestionType, Scaling};
pub use scale::{percent_y_scale, timestamp_x_scale, AxisScale, TickFormatter, TimeGranularity};
pub use series::{ChoiceSeries, ResolutionLabel, UserMarkSeries};
pub use types::{Insets, ThemeColor};
pub use window::{x_domain, ZoomWindow};
