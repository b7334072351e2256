// File: crates/timeline-core/src/window.rs
// Summary: Zoom window options and horizontal domain derivation.

use chrono::{DateTime, Duration, Months, TimeZone, Utc};

use crate::projection::ProjectionError;

/// User-selectable time range filter. Stateless: the domain is recomputed
/// from the full timestamp axis on every change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoomWindow {
    OneDay,
    OneWeek,
    TwoMonths,
    All,
}

impl ZoomWindow {
    pub const ALL: [ZoomWindow; 4] = [
        ZoomWindow::OneDay,
        ZoomWindow::OneWeek,
        ZoomWindow::TwoMonths,
        ZoomWindow::All,
    ];

    /// Short label for zoom pickers.
    pub const fn label(&self) -> &'static str {
        match self {
            ZoomWindow::OneDay => "1d",
            ZoomWindow::OneWeek => "1w",
            ZoomWindow::TwoMonths => "2m",
            ZoomWindow::All => "all",
        }
    }

    /// Window start for a given latest instant. `None` means unbounded.
    fn start_from(&self, latest: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            ZoomWindow::OneDay => Some(latest - Duration::days(1)),
            ZoomWindow::OneWeek => Some(latest - Duration::weeks(1)),
            // Calendar months, not a fixed number of days.
            ZoomWindow::TwoMonths => latest.checked_sub_months(Months::new(2)),
            ZoomWindow::All => None,
        }
    }
}

/// Derive the horizontal (min, max) domain in unix seconds for a window.
///
/// The right edge is always the latest timestamp; the left edge is the window
/// start clamped to the earliest timestamp. Depends only on the shared axis
/// and the window, never on the series set.
pub fn x_domain(timestamps: &[i64], window: ZoomWindow) -> Result<(i64, i64), ProjectionError> {
    let earliest = *timestamps.iter().min().ok_or(ProjectionError::EmptyTimestamps)?;
    let latest = *timestamps.iter().max().ok_or(ProjectionError::EmptyTimestamps)?;

    let start = Utc
        .timestamp_opt(latest, 0)
        .single()
        .and_then(|l| window.start_from(l))
        .map(|s| s.timestamp())
        .unwrap_or(earliest);

    Ok((start.max(earliest), latest))
}
