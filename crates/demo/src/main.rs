// File: crates/demo/src/main.rs
// Summary: Demo loads forecast-history CSV (or synthesizes one) and renders zoomed timelines to PNGs.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use timeline_core::{project, ChoiceSeries, ThemeColor, ZoomWindow};
use timeline_render_skia::{render_to_png, RenderOptions, Theme};

fn main() -> Result<()> {
    // Accept a CSV path from the CLI or fall back to a synthetic history.
    let (timestamps, choices) = match std::env::args().nth(1) {
        Some(raw) => {
            let path = Path::new(&raw);
            println!("Using input file: {}", path.display());
            let loaded = load_forecast_csv(path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            if loaded.1.is_empty() {
                anyhow::bail!("no choices loaded — check headers/delimiter.");
            }
            loaded
        }
        None => {
            println!("No input file given; using synthetic history.");
            synthetic_history()
        }
    };

    println!(
        "Loaded {} choices over {} timestamps",
        choices.len(),
        timestamps.len()
    );

    for window in [ZoomWindow::All, ZoomWindow::TwoMonths] {
        let projection = project(&timestamps, &choices, 1024, 400, window)?;
        println!(
            "Window {}: domain [{}, {}], {} ticks",
            window.label(),
            projection.x_domain.0,
            projection.x_domain.1,
            projection.x_scale.ticks.len()
        );

        for theme in [Theme::dark(), Theme::light()] {
            let opts = RenderOptions {
                theme,
                cursor: Some(projection.x_domain.1),
                ..Default::default()
            };
            let out = out_name(window, opts.theme.name);
            render_to_png(&projection, &[], &opts, &out)?;
            println!("Wrote {}", out.display());
        }
    }

    Ok(())
}

/// Produce output file name like target/out/timeline_<window>_<theme>.png
fn out_name(window: ZoomWindow, theme: &str) -> PathBuf {
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("timeline_{}_{}.png", window.label(), theme));
    out
}

/// Load `timestamp,choice,median[,lower,upper]` rows into per-choice series.
///
/// Every choice ends up on its own timestamp axis, so histories with uneven
/// sampling load as-is. Rows are expected in timestamp order per choice.
fn load_forecast_csv(path: &Path) -> Result<(Vec<i64>, Vec<ChoiceSeries>)> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    println!("Headers: {:?}", headers);

    let idx = |names: &[&str]| -> Option<usize> {
        headers.iter().position(|h| names.contains(&h.as_str()))
    };

    let i_time = idx(&["timestamp", "time", "date"])
        .context("missing timestamp column")?;
    let i_choice = idx(&["choice", "option", "label"]).context("missing choice column")?;
    let i_median = idx(&["median", "value", "probability"]).context("missing median column")?;
    let i_lower = idx(&["lower", "q1"]);
    let i_upper = idx(&["upper", "q3"]);

    // Keep first-seen choice order for stable palette assignment.
    let mut order: Vec<String> = Vec::new();
    let mut per_choice: std::collections::HashMap<String, (Vec<i64>, Vec<Option<f64>>, Vec<Option<f64>>, Vec<Option<f64>>)> =
        std::collections::HashMap::new();
    let mut shared: Vec<i64> = Vec::new();

    for rec in rdr.records() {
        let rec = rec?;
        let t = match rec.get(i_time).and_then(|s| s.trim().parse::<i64>().ok()) {
            Some(t) => t,
            None => continue,
        };
        let choice = match rec.get(i_choice) {
            Some(c) if !c.trim().is_empty() => c.trim().to_string(),
            _ => continue,
        };
        let parse = |i: Option<usize>| -> Option<f64> {
            i.and_then(|ix| rec.get(ix)).and_then(|s| s.trim().parse::<f64>().ok())
        };

        if !per_choice.contains_key(&choice) {
            order.push(choice.clone());
        }
        let entry = per_choice.entry(choice).or_default();
        entry.0.push(t);
        entry.1.push(parse(Some(i_median)));
        entry.2.push(parse(i_lower));
        entry.3.push(parse(i_upper));
        shared.push(t);
    }

    shared.sort_unstable();
    shared.dedup();

    let choices = order
        .into_iter()
        .enumerate()
        .map(|(index, label)| {
            let (ts, medians, lowers, uppers) = per_choice.remove(&label).unwrap_or_default();
            let has_bounds =
                lowers.iter().any(Option::is_some) && uppers.iter().any(Option::is_some);
            let mut series = ChoiceSeries::new(label, medians, ThemeColor::for_index(index))
                .with_timestamps(ts);
            if has_bounds {
                series = series.with_bounds(lowers, uppers);
            }
            series
        })
        .collect();

    Ok((shared, choices))
}

/// Three choices over ninety days of six-hourly aggregate estimates.
fn synthetic_history() -> (Vec<i64>, Vec<ChoiceSeries>) {
    let start = 1_700_000_000i64;
    let step = 6 * 3_600;
    let points = 90 * 4;
    let timestamps: Vec<i64> = (0..points).map(|i| start + i as i64 * step).collect();

    let wave = |i: usize, phase: f64, base: f64| -> f64 {
        let t = i as f64 * 0.05 + phase;
        (base + 0.25 * t.sin() + 0.05 * (3.1 * t).cos()).clamp(0.02, 0.98)
    };

    let choices = vec![
        ChoiceSeries::new(
            "stabilizes",
            (0..points).map(|i| Some(wave(i, 0.0, 0.5))).collect(),
            ThemeColor::for_index(0),
        )
        .with_bounds(
            (0..points).map(|i| Some(wave(i, 0.0, 0.4))).collect(),
            (0..points).map(|i| Some(wave(i, 0.0, 0.6))).collect(),
        )
        .highlighted(true),
        ChoiceSeries::new(
            "escalates",
            (0..points).map(|i| Some(wave(i, 2.1, 0.35))).collect(),
            ThemeColor::for_index(1),
        ),
        ChoiceSeries::new(
            "resolves early",
            (0..points).map(|i| Some(wave(i, 4.2, 0.2))).collect(),
            ThemeColor::for_index(2),
        ),
    ];

    (timestamps, choices)
}
