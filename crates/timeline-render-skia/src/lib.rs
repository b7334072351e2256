// File: crates/timeline-render-skia/src/lib.rs
// Summary: Skia-backed rendering surface for timeline projections; CPU raster PNG pipeline.

use anyhow::Result;
use skia_safe as skia;

use timeline_core::types::{HEIGHT, WIDTH};
use timeline_core::{Insets, Projection, SeriesPlot, UserMarkSeries, BAND_FILL_OPACITY};

pub mod theme;

pub use theme::{find, presets, with_opacity, Theme};

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    pub draw_labels: bool,
    /// Snapped cursor timestamp; draws the dashed readout line when set.
    pub cursor: Option<i64>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::dark(),
            draw_labels: true,
            cursor: None,
        }
    }
}

/// Pixel mapping for one frame: time domain to [left, right], the [0, 1]
/// probability range to [bottom, top].
#[derive(Clone, Copy, Debug)]
struct PixelFrame {
    left: f32,
    right: f32,
    top: f32,
    bottom: f32,
    domain_start: f64,
    domain_span: f64,
}

impl PixelFrame {
    fn new(opts: &RenderOptions, x_domain: (i64, i64)) -> Self {
        Self {
            left: opts.insets.left as f32,
            right: (opts.width - opts.insets.right as i32) as f32,
            top: opts.insets.top as f32,
            bottom: (opts.height - opts.insets.bottom as i32) as f32,
            domain_start: x_domain.0 as f64,
            domain_span: ((x_domain.1 - x_domain.0) as f64).max(1e-9),
        }
    }

    #[inline]
    fn x(&self, t: f64) -> f32 {
        self.left + ((t - self.domain_start) / self.domain_span) as f32 * (self.right - self.left)
    }

    #[inline]
    fn y(&self, v: f64) -> f32 {
        self.bottom - (v as f32) * (self.bottom - self.top)
    }

    fn rect(&self) -> skia::Rect {
        skia::Rect::from_ltrb(self.left, self.top, self.right, self.bottom)
    }
}

/// Render a projection to PNG bytes on a CPU raster surface.
///
/// Applies the projection's emphasis rules: dimmed lines while a highlight is
/// active, bands only for highlighted series, markers only for active ones.
pub fn render_to_png_bytes(
    projection: &Projection,
    marks: &[UserMarkSeries],
    opts: &RenderOptions,
) -> Result<Vec<u8>> {
    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
    let canvas = surface.canvas();

    canvas.clear(opts.theme.background);

    let frame = PixelFrame::new(opts, projection.x_domain);
    let highlight = projection.highlight_active();

    draw_grid(canvas, &frame, projection, &opts.theme);

    // Series content stays inside the plot rect once a zoom window narrows
    // the domain.
    canvas.save();
    canvas.clip_rect(frame.rect(), None, None);
    for plot in &projection.plots {
        if plot.shows_band() {
            draw_band(canvas, &frame, plot, &opts.theme);
        }
    }
    for plot in &projection.plots {
        draw_line_plot(canvas, &frame, plot, &opts.theme, highlight);
    }
    for plot in &projection.plots {
        if plot.active {
            draw_marker(canvas, &frame, plot, &opts.theme);
        }
    }
    draw_user_marks(canvas, &frame, marks, &opts.theme);
    canvas.restore();

    draw_axes(canvas, &frame, projection, opts);
    if let Some(cursor) = opts.cursor {
        draw_cursor(canvas, &frame, projection, cursor, opts);
    }

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render the projection straight to a PNG file.
pub fn render_to_png(
    projection: &Projection,
    marks: &[UserMarkSeries],
    opts: &RenderOptions,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let bytes = render_to_png_bytes(projection, marks, opts)?;
    if let Some(parent) = output_png_path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_png_path, bytes)?;
    Ok(())
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(canvas: &skia::Canvas, frame: &PixelFrame, projection: &Projection, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    // verticals at time ticks
    for tick in &projection.x_scale.ticks {
        let x = frame.x(*tick);
        canvas.draw_line((x, frame.top), (x, frame.bottom), &paint);
    }
    // horizontals at labeled probability ticks only
    for tick in &projection.y_scale.ticks {
        if projection.y_scale.label(*tick).is_empty() {
            continue;
        }
        let y = frame.y(*tick);
        canvas.draw_line((frame.left, y), (frame.right, y), &paint);
    }
}

fn draw_band(canvas: &skia::Canvas, frame: &PixelFrame, plot: &SeriesPlot, theme: &Theme) {
    let band = match &plot.band {
        Some(band) if band.len() >= 2 => band,
        _ => return,
    };

    let mut path = skia::Path::new();
    path.move_to((frame.x(band[0].x), frame.y(band[0].upper)));
    for point in band.iter().skip(1) {
        path.line_to((frame.x(point.x), frame.y(point.upper)));
    }
    for point in band.iter().rev() {
        path.line_to((frame.x(point.x), frame.y(point.lower)));
    }
    path.close();

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(with_opacity(theme.resolve(plot.color), BAND_FILL_OPACITY));
    canvas.draw_path(&path, &fill);
}

fn draw_line_plot(
    canvas: &skia::Canvas,
    frame: &PixelFrame,
    plot: &SeriesPlot,
    theme: &Theme,
    highlight: bool,
) {
    let opacity = plot.line_opacity(highlight);
    if opacity <= 0.0 || plot.line.len() < 2 {
        return;
    }

    let mut path = skia::Path::new();
    let (x0, y0) = plot.line[0];
    path.move_to((frame.x(x0), frame.y(y0)));
    for &(x, y) in plot.line.iter().skip(1) {
        path.line_to((frame.x(x), frame.y(y)));
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);
    stroke.set_color(with_opacity(theme.resolve(plot.color), opacity));
    canvas.draw_path(&path, &stroke);
}

fn draw_marker(canvas: &skia::Canvas, frame: &PixelFrame, plot: &SeriesPlot, theme: &Theme) {
    let marker = match plot.marker {
        Some(marker) => marker,
        None => return,
    };
    let cx = frame.x(marker.x);
    let cy = frame.y(marker.y);
    let half = 5.0;

    // hollow diamond at the terminal timestamp
    let mut path = skia::Path::new();
    path.move_to((cx, cy - half));
    path.line_to((cx + half, cy));
    path.line_to((cx, cy + half));
    path.line_to((cx - half, cy));
    path.close();

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.5);
    stroke.set_color(theme.resolve(plot.color));
    canvas.draw_path(&path, &stroke);
}

fn draw_user_marks(
    canvas: &skia::Canvas,
    frame: &PixelFrame,
    marks: &[UserMarkSeries],
    theme: &Theme,
) {
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);

    for series in marks {
        stroke.set_color(theme.resolve(series.color));
        for (t, v) in series.points() {
            canvas.draw_circle((frame.x(t as f64), frame.y(v)), 3.0, &stroke);
        }
    }
}

fn draw_axes(
    canvas: &skia::Canvas,
    frame: &PixelFrame,
    projection: &Projection,
    opts: &RenderOptions,
) {
    let theme = &opts.theme;
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    // X and Y axis lines
    canvas.draw_line((frame.left, frame.bottom), (frame.right, frame.bottom), &axis_paint);
    canvas.draw_line((frame.left, frame.top), (frame.left, frame.bottom), &axis_paint);

    if !opts.draw_labels {
        return;
    }

    let mut label_paint = skia::Paint::default();
    label_paint.set_color(theme.axis_label);
    label_paint.set_anti_alias(true);
    let mut font = skia::Font::default();
    font.set_size(12.0);

    for tick in &projection.x_scale.ticks {
        let text = projection.x_scale.label(*tick);
        if text.is_empty() {
            continue;
        }
        let (advance, _) = font.measure_str(&text, Some(&label_paint));
        canvas.draw_str(
            &text,
            (frame.x(*tick) - advance / 2.0, frame.bottom + 16.0),
            &font,
            &label_paint,
        );
    }

    for tick in &projection.y_scale.ticks {
        let text = projection.y_scale.label(*tick);
        if text.is_empty() {
            continue;
        }
        let (advance, _) = font.measure_str(&text, Some(&label_paint));
        canvas.draw_str(
            &text,
            (frame.left - advance - 6.0, frame.y(*tick) + 4.0),
            &font,
            &label_paint,
        );
    }
}

fn draw_cursor(
    canvas: &skia::Canvas,
    frame: &PixelFrame,
    projection: &Projection,
    cursor: i64,
    opts: &RenderOptions,
) {
    let (start, end) = projection.x_domain;
    if cursor < start || cursor > end {
        return;
    }
    let theme = &opts.theme;
    let x = frame.x(cursor as f64);

    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.0);
    paint.set_color(theme.cursor);
    paint.set_path_effect(skia::dash_path_effect::new(&[4.0, 3.0], 0.0));
    canvas.draw_line((x, frame.top), (x, frame.bottom), &paint);

    if !opts.draw_labels {
        return;
    }

    // The live edge reads as "now", any other snap as its timestamp.
    let text = if cursor == end {
        "now".to_string()
    } else {
        projection.x_scale.cursor_label(cursor as f64)
    };
    let mut label_paint = skia::Paint::default();
    label_paint.set_color(theme.axis_label);
    label_paint.set_anti_alias(true);
    let mut font = skia::Font::default();
    font.set_size(12.0);
    let (advance, _) = font.measure_str(&text, Some(&label_paint));
    let tx = (x - advance / 2.0).clamp(frame.left, (frame.right - advance).max(frame.left));
    canvas.draw_str(&text, (tx, frame.bottom + 32.0), &font, &label_paint);
}
