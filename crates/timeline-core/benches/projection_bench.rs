use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use timeline_core::{project, ChoiceSeries, ThemeColor, ZoomWindow};

fn gen_inputs(points: usize, choices: usize) -> (Vec<i64>, Vec<ChoiceSeries>) {
    let timestamps: Vec<i64> = (0..points).map(|i| 1_600_000_000 + i as i64 * 3_600).collect();
    let series = (0..choices)
        .map(|c| {
            let values = (0..points)
                .map(|i| Some((((i + c * 13) as f64 * 0.01).sin() + 1.0) / 2.0))
                .collect();
            let lower = (0..points).map(|i| Some(((i % 50) as f64) / 100.0)).collect();
            let upper = (0..points).map(|i| Some(0.5 + ((i % 50) as f64) / 100.0)).collect();
            ChoiceSeries::new(format!("choice-{c}"), values, ThemeColor::for_index(c))
                .with_bounds(lower, upper)
        })
        .collect();
    (timestamps, series)
}

fn bench_project(c: &mut Criterion) {
    let mut group = c.benchmark_group("project");
    for &(points, choices) in &[(1_000usize, 4usize), (10_000, 8)] {
        let (timestamps, series) = gen_inputs(points, choices);
        for window in [ZoomWindow::All, ZoomWindow::TwoMonths] {
            let id = BenchmarkId::from_parameter(format!("p{points}_c{choices}_{}", window.label()));
            group.bench_with_input(id, &window, |b, &window| {
                b.iter_batched(
                    || (timestamps.clone(), series.clone()),
                    |(ts, s)| {
                        let _ = black_box(project(&ts, &s, 1024, 400, window));
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_project);
criterion_main!(benches);
