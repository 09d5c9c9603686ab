use criterion::{Criterion, criterion_group, criterion_main};
use focus_chart::api::{ChartConfig, ChartEngine, plan_year_ticks, project_runs};
use focus_chart::core::{EntitySeries, LinearScale, SeriesStore, YearValue};
use focus_chart::render::NullRenderer;
use std::hint::black_box;

fn synthetic_store(entity_count: usize) -> SeriesStore {
    let series = (0..entity_count)
        .map(|index| {
            let base = 1.0 + (index % 17) as f64 * 0.4;
            let points = (1960..=2020)
                .filter(|year| (year + index as i32) % 23 != 0)
                .map(|year| YearValue::new(year, base + f64::from(year - 1960) * 0.01))
                .collect();
            EntitySeries::new(format!("Entity {index}"), format!("E{index}"), points)
                .expect("valid generated series")
        })
        .collect();
    SeriesStore::new((1960..=2020).collect(), series).expect("valid store")
}

fn bench_linear_scale_round_trip(c: &mut Criterion) {
    let scale = LinearScale::new((1960.0, 2020.0), (0.0, 1100.0)).expect("valid scale");

    c.bench_function("linear_scale_round_trip", |b| {
        b.iter(|| {
            let px = scale.map(black_box(1987.25));
            let _ = scale.invert(px);
        })
    });
}

fn bench_plan_year_ticks(c: &mut Criterion) {
    let years: Vec<i32> = (1960..=2020).collect();

    c.bench_function("plan_year_ticks", |b| {
        b.iter(|| plan_year_ticks(black_box((1963.4, 2011.7)), black_box(&years)))
    });
}

fn bench_project_runs_250(c: &mut Criterion) {
    let store = synthetic_store(250);
    let x = LinearScale::new((1960.0, 2020.0), (0.0, 1100.0)).expect("x scale");
    let y = LinearScale::new((0.0, 10.0), (380.0, 0.0)).expect("y scale");

    c.bench_function("project_runs_250", |b| {
        b.iter(|| {
            for series in store.iter() {
                let _ = project_runs(black_box(series), &store, x, y, (84.0, 24.0));
            }
        })
    });
}

fn bench_brush_drag_frame_250(c: &mut Criterion) {
    let mut engine = ChartEngine::new(
        NullRenderer::default(),
        synthetic_store(250),
        ChartConfig::default(),
    )
    .expect("engine init");
    engine.click("Entity 3").expect("pin");
    engine.click("Entity 42").expect("pin");

    let mut offset = 0.0;
    c.bench_function("brush_drag_frame_250", |b| {
        b.iter(|| {
            offset = (offset + 7.0) % 300.0;
            engine
                .queue_selection_change(Some((offset, offset + 300.0)))
                .expect("queue");
            engine.flush_frame().expect("flush")
        })
    });
}

criterion_group!(
    benches,
    bench_linear_scale_round_trip,
    bench_plan_year_ticks,
    bench_project_runs_250,
    bench_brush_drag_frame_250
);
criterion_main!(benches);
