use focus_chart::api::{BrushSelection, ChartConfig, ChartEngine, ChartSnapshot};
use focus_chart::core::{EntitySeries, SeriesStore, YearValue};
use focus_chart::interaction::EntityVisualState;
use focus_chart::render::NullRenderer;
use focus_chart::ChartError;

fn store() -> SeriesStore {
    let entities = [("Kenya", "KEN", 7.9, -0.07), ("Japan", "JPN", 2.0, -0.01), ("India", "IND", 5.9, -0.05)];
    let series = entities
        .iter()
        .map(|(name, code, base, slope)| {
            let points = (1960..=2020)
                .map(|year| YearValue::new(year, base + slope * f64::from(year - 1960)))
                .collect();
            EntitySeries::new(*name, *code, points).expect("series")
        })
        .collect();
    SeriesStore::new((1960..=2020).collect(), series).expect("store")
}

#[test]
fn engine_smoke_flow() {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), store(), ChartConfig::default()).expect("engine init");
    assert_eq!(engine.focus_dimensions().width, 788.0);
    assert_eq!(engine.renderer().last_focus_line_count, 3);
    assert_eq!(engine.renderer().last_context_line_count, 3);

    engine.pointer_enter("India").expect("hover");
    engine.click("Kenya").expect("pin");
    engine
        .queue_selection_change(Some((100.0, 400.0)))
        .expect("queue");
    engine.flush_frame().expect("flush");
    engine.pointer_leave("India").expect("leave");

    assert_eq!(engine.entity_state("India"), Some(EntityVisualState::Idle));
    assert_eq!(engine.entity_state("Kenya"), Some(EntityVisualState::Pinned));
    assert_eq!(engine.renderer().last_label_count, 1);

    let (start, end) = engine.focus_domain();
    assert!(start > 1960.0 && end < 2020.0);
    assert!(engine.focus_ticks().iter().all(|year| f64::from(*year) >= start.ceil()));

    let renders = engine.renderer().render_count;
    let renderer = engine.into_renderer();
    assert_eq!(renderer.render_count, renders);
}

#[test]
fn value_domain_is_shared_and_rounded() {
    let engine =
        ChartEngine::new(NullRenderer::default(), store(), ChartConfig::default()).expect("engine init");
    let (low, high) = engine.value_domain();
    assert!(low <= 1.4 && high >= 7.9);
    assert_eq!(engine.scales().focus_y().domain(), engine.scales().context_y().domain());
}

#[test]
fn invalid_config_is_rejected_at_construction() {
    let mut config = ChartConfig::default();
    config.value_tick_count = 0;
    let err = ChartEngine::new(NullRenderer::default(), store(), config).err().expect("error");
    assert!(matches!(err, ChartError::Config(_)));
}

#[test]
fn snapshot_records_active_entities() {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), store(), ChartConfig::default()).expect("engine init");
    engine.click("Japan").expect("pin");
    engine.pointer_enter("India").expect("hover");

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.entity_count, 3);
    assert_eq!(
        snapshot.selection,
        BrushSelection::Extent { x0: 0.0, x1: 788.0 }
    );
    let names: Vec<&str> = snapshot
        .active_entities
        .iter()
        .map(|entity| entity.name.as_str())
        .collect();
    assert_eq!(names, vec!["Japan", "India"]);
    assert_eq!(snapshot.active_entities[0].state, EntityVisualState::Pinned);
    assert!(snapshot.active_entities[1].raise_rank > snapshot.active_entities[0].raise_rank);

    let json = engine.snapshot_json_pretty().expect("json");
    assert!(json.contains("\"focus_domain\""));
    let parsed = ChartSnapshot::from_json_str(&json).expect("parse");
    assert_eq!(parsed, snapshot);
}
