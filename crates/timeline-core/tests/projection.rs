// File: crates/timeline-core/tests/projection.rs
// Purpose: Validate the projector's plots, emphasis rules, and failure modes.

use timeline_core::{
    project, ChoiceSeries, ProjectionError, ResolutionLabel, ThemeColor, ZoomWindow,
    DIMMED_LINE_OPACITY,
};

fn shared_axis() -> Vec<i64> {
    vec![1_000, 2_000, 3_000, 4_000]
}

#[test]
fn projection_is_deterministic() {
    let ts = shared_axis();
    let choices = vec![
        ChoiceSeries::new("alpha", vec![Some(0.1), Some(0.2), Some(0.3), Some(0.4)], ThemeColor::Blue),
        ChoiceSeries::new("beta", vec![Some(0.9), Some(0.8), None, Some(0.6)], ThemeColor::Orange)
            .highlighted(true),
    ];
    let a = project(&ts, &choices, 800, 300, ZoomWindow::All).unwrap();
    let b = project(&ts, &choices, 800, 300, ZoomWindow::All).unwrap();
    assert_eq!(a, b);
}

#[test]
fn absent_values_land_at_zero() {
    let ts = shared_axis();
    let choices =
        vec![ChoiceSeries::new("alpha", vec![Some(0.2), Some(0.4), None, Some(0.6)], ThemeColor::Blue)];
    let projection = project(&ts, &choices, 800, 300, ZoomWindow::All).unwrap();

    let line = &projection.plots[0].line;
    assert_eq!(line.len(), ts.len());
    assert_eq!(line[2], (3_000.0, 0.0));
}

#[test]
fn band_requires_both_bounds() {
    let ts = shared_axis();
    let mut lone = ChoiceSeries::new("alpha", vec![Some(0.5); 4], ThemeColor::Blue);
    lone.upper_bounds = Some(vec![Some(0.7); 4]);

    let both = ChoiceSeries::new("beta", vec![Some(0.5); 4], ThemeColor::Orange)
        .with_bounds(vec![Some(0.3); 4], vec![Some(0.7); 4]);

    let projection = project(&ts, &[lone, both], 800, 300, ZoomWindow::All).unwrap();
    assert!(projection.plots[0].band.is_none());

    let band = projection.plots[1].band.as_ref().unwrap();
    assert_eq!(band.len(), ts.len());
    assert_eq!(band[0].upper, 0.7);
    assert_eq!(band[0].lower, 0.3);
}

#[test]
fn highlight_dims_the_other_lines() {
    let ts = shared_axis();
    let choices = vec![
        ChoiceSeries::new("alpha", vec![Some(0.5); 4], ThemeColor::Blue),
        ChoiceSeries::new("beta", vec![Some(0.5); 4], ThemeColor::Orange).highlighted(true),
        ChoiceSeries::new("gamma", vec![Some(0.5); 4], ThemeColor::Green).active(false),
    ];
    let projection = project(&ts, &choices, 800, 300, ZoomWindow::All).unwrap();
    let highlight = projection.highlight_active();
    assert!(highlight);

    assert_eq!(projection.plots[0].line_opacity(highlight), DIMMED_LINE_OPACITY);
    assert_eq!(projection.plots[1].line_opacity(highlight), 1.0);
    assert_eq!(projection.plots[2].line_opacity(highlight), 0.0);
}

#[test]
fn no_highlight_means_full_opacity() {
    let ts = shared_axis();
    let choices = vec![ChoiceSeries::new("alpha", vec![Some(0.5); 4], ThemeColor::Blue)];
    let projection = project(&ts, &choices, 800, 300, ZoomWindow::All).unwrap();
    assert!(!projection.highlight_active());
    assert_eq!(projection.plots[0].line_opacity(false), 1.0);
}

#[test]
fn band_shows_only_while_highlighted() {
    let ts = shared_axis();
    let series = ChoiceSeries::new("alpha", vec![Some(0.5); 4], ThemeColor::Blue)
        .with_bounds(vec![Some(0.3); 4], vec![Some(0.7); 4]);
    let projection = project(&ts, &[series.clone().highlighted(true)], 800, 300, ZoomWindow::All)
        .unwrap();
    assert!(projection.plots[0].shows_band());

    let projection = project(&ts, &[series], 800, 300, ZoomWindow::All).unwrap();
    assert!(!projection.plots[0].shows_band());
}

#[test]
fn own_choice_resolution_marks_the_top() {
    let ts = shared_axis();
    let series = ChoiceSeries::new("alpha", vec![Some(0.5); 4], ThemeColor::Blue)
        .with_resolution(ResolutionLabel::Choice("alpha".to_string()));
    let projection = project(&ts, &[series], 800, 300, ZoomWindow::All).unwrap();

    let marker = projection.plots[0].marker.unwrap();
    assert_eq!(marker.x, 4_000.0);
    assert_eq!(marker.y, 1.0);
}

#[test]
fn foreign_choice_resolution_has_no_marker() {
    let ts = shared_axis();
    let series = ChoiceSeries::new("alpha", vec![Some(0.5); 4], ThemeColor::Blue)
        .with_resolution(ResolutionLabel::Choice("beta".to_string()));
    let projection = project(&ts, &[series], 800, 300, ZoomWindow::All).unwrap();
    assert!(projection.plots[0].marker.is_none());
}

#[test]
fn binary_resolution_respects_declared_range() {
    let ts = shared_axis();
    let yes = ChoiceSeries::new("alpha", vec![Some(0.5); 4], ThemeColor::Blue)
        .with_resolution(ResolutionLabel::Yes)
        .with_range(0.1, 0.9);
    let no = ChoiceSeries::new("beta", vec![Some(0.5); 4], ThemeColor::Orange)
        .with_resolution(ResolutionLabel::No);

    let projection = project(&ts, &[yes, no], 800, 300, ZoomWindow::All).unwrap();
    assert_eq!(projection.plots[0].marker.unwrap().y, 0.9);
    assert_eq!(projection.plots[1].marker.unwrap().y, 0.0);
}

#[test]
fn series_own_axis_drives_its_line() {
    let ts = shared_axis();
    let series = ChoiceSeries::new("alpha", vec![Some(0.5), Some(0.6)], ThemeColor::Blue)
        .with_timestamps(vec![1_500, 3_500])
        .with_resolution(ResolutionLabel::Yes);
    let projection = project(&ts, &[series], 800, 300, ZoomWindow::All).unwrap();

    let plot = &projection.plots[0];
    assert_eq!(plot.line, vec![(1_500.0, 0.5), (3_500.0, 0.6)]);
    // Marker sits on the series' own last timestamp, not the shared axis'.
    assert_eq!(plot.marker.unwrap().x, 3_500.0);
}

#[test]
fn zero_choices_is_a_valid_projection() {
    let ts = shared_axis();
    let projection = project(&ts, &[], 800, 300, ZoomWindow::All).unwrap();
    assert!(projection.plots.is_empty());
    assert_eq!(projection.x_domain, (1_000, 4_000));
}

#[test]
fn empty_shared_axis_fails_fast() {
    assert_eq!(
        project(&[], &[], 800, 300, ZoomWindow::All).unwrap_err(),
        ProjectionError::EmptyTimestamps
    );
}

#[test]
fn mismatched_value_length_fails_fast() {
    let ts = shared_axis();
    let series = ChoiceSeries::new("alpha", vec![Some(0.5); 3], ThemeColor::Blue);
    let err = project(&ts, &[series], 800, 300, ZoomWindow::All).unwrap_err();
    assert_eq!(
        err,
        ProjectionError::LengthMismatch {
            id: "alpha".to_string(),
            field: "values",
            got: 3,
            want: 4
        }
    );
}

#[test]
fn mismatched_bound_length_fails_fast() {
    let ts = shared_axis();
    let series = ChoiceSeries::new("alpha", vec![Some(0.5); 4], ThemeColor::Blue)
        .with_bounds(vec![Some(0.3); 2], vec![Some(0.7); 4]);
    let err = project(&ts, &[series], 800, 300, ZoomWindow::All).unwrap_err();
    assert!(matches!(err, ProjectionError::LengthMismatch { field: "lower_bounds", .. }));
}

#[test]
fn unsorted_own_axis_fails_fast() {
    let ts = shared_axis();
    let series = ChoiceSeries::new("alpha", vec![Some(0.5), Some(0.6)], ThemeColor::Blue)
        .with_timestamps(vec![3_000, 2_000]);
    let err = project(&ts, &[series], 800, 300, ZoomWindow::All).unwrap_err();
    assert_eq!(err, ProjectionError::UnsortedTimestamps { id: "alpha".to_string() });
}
