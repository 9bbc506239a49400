use criterion::{Criterion, criterion_group, criterion_main};
use solar_chart::api::{ChartConfig, ProductionChart};
use solar_chart::core::{ChartDataPoint, PlotLayout, PlotScale, project_all_series};
use solar_chart::render::{NullRenderer, SvgRenderer, svg_path_data};
use std::hint::black_box;

fn daily_data(days: usize) -> Vec<ChartDataPoint> {
    (0..days)
        .map(|i| {
            let t = i as f64;
            let actual = 500.0 + 120.0 * (t / 9.0).sin();
            let baseline = 520.0 + 40.0 * (t / 30.0).cos();
            ChartDataPoint::new(format!("D{i}"), actual, baseline, baseline * 0.97)
        })
        .collect()
}

fn bench_series_projection_365(c: &mut Criterion) {
    let data = daily_data(365);
    let layout = PlotLayout::default();

    c.bench_function("series_projection_365", |b| {
        b.iter(|| {
            let scale = PlotScale::from_data(layout, black_box(&data));
            let geometries = project_all_series(black_box(&data), scale);
            for geometry in &geometries {
                let _ = svg_path_data(&geometry.area);
            }
        })
    });
}

fn bench_pointer_sweep_365(c: &mut Criterion) {
    let mut chart =
        ProductionChart::new(NullRenderer::default(), ChartConfig::default()).expect("chart init");
    chart.set_data(daily_data(365));

    c.bench_function("pointer_sweep_365", |b| {
        b.iter(|| {
            for x in (0..824).step_by(4) {
                chart.pointer_move(black_box(x as f64));
            }
            chart.pointer_leave();
        })
    });
}

fn bench_svg_render_quarterly(c: &mut Criterion) {
    let mut chart =
        ProductionChart::new(SvgRenderer::new(), ChartConfig::default()).expect("chart init");
    chart.set_data(solar_chart::api::default_quarterly_chart_data());
    chart.pointer_move(300.0);

    c.bench_function("svg_render_quarterly", |b| {
        b.iter(|| chart.render().expect("render"))
    });
}

criterion_group!(
    benches,
    bench_series_projection_365,
    bench_pointer_sweep_365,
    bench_svg_render_quarterly
);
criterion_main!(benches);
