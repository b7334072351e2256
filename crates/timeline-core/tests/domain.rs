// File: crates/timeline-core/tests/domain.rs
// Purpose: Validate zoom-window domain derivation over the shared axis.

use chrono::{TimeZone, Utc};
use timeline_core::{x_domain, ProjectionError, ZoomWindow};

#[test]
fn all_time_spans_full_range() {
    let ts = vec![100, 2_000, 50_000, 5_000];
    assert_eq!(x_domain(&ts, ZoomWindow::All).unwrap(), (100, 50_000));
}

#[test]
fn one_week_window_ends_at_latest() {
    let ts = vec![0, 4_000_000, 10_000_000];
    let (start, end) = x_domain(&ts, ZoomWindow::OneWeek).unwrap();
    assert_eq!(end, 10_000_000);
    assert_eq!(start, 10_000_000 - 7 * 86_400);
}

#[test]
fn one_day_window_ends_at_latest() {
    let ts = vec![0, 10_000_000];
    assert_eq!(
        x_domain(&ts, ZoomWindow::OneDay).unwrap(),
        (10_000_000 - 86_400, 10_000_000)
    );
}

#[test]
fn bounded_window_clamps_to_earliest() {
    // Whole history shorter than the window: the left edge stays at the
    // earliest timestamp instead of preceding it.
    let latest = 10_000_000;
    let ts = vec![latest - 3_600, latest];
    assert_eq!(x_domain(&ts, ZoomWindow::OneWeek).unwrap(), (latest - 3_600, latest));
    assert_eq!(x_domain(&ts, ZoomWindow::TwoMonths).unwrap(), (latest - 3_600, latest));
}

#[test]
fn two_months_subtracts_calendar_months() {
    let earliest = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap().timestamp();
    let latest = Utc.with_ymd_and_hms(2024, 3, 31, 12, 0, 0).unwrap().timestamp();
    let expected_start = Utc.with_ymd_and_hms(2024, 1, 31, 12, 0, 0).unwrap().timestamp();

    let ts = vec![earliest, latest];
    assert_eq!(x_domain(&ts, ZoomWindow::TwoMonths).unwrap(), (expected_start, latest));
}

#[test]
fn empty_axis_is_rejected() {
    assert_eq!(x_domain(&[], ZoomWindow::All), Err(ProjectionError::EmptyTimestamps));
}
