use focus_chart::api::{ChartConfig, ChartEngine};
use focus_chart::core::{EntitySeries, SeriesStore, YearValue};
use focus_chart::interaction::EntityVisualState;
use focus_chart::render::NullRenderer;

fn value_a(year: i32) -> f64 {
    2.0 + f64::from(year - 1960) * 0.05
}

fn engine() -> ChartEngine<NullRenderer> {
    let dense: Vec<YearValue> = (1960..=2020)
        .map(|year| YearValue::new(year, value_a(year)))
        .collect();
    let sparse = vec![
        YearValue::new(1960, 8.0),
        YearValue::new(1990, 6.0),
        YearValue::new(2020, 1.0),
    ];
    let store = SeriesStore::new(
        (1960..=2020).collect(),
        vec![
            EntitySeries::new("A", "AAA", dense).expect("A"),
            EntitySeries::new("B", "BBB", sparse).expect("B"),
        ],
    )
    .expect("store");
    let config = ChartConfig::default().with_container_width(772.0);
    ChartEngine::new(NullRenderer::default(), store, config).expect("engine init")
}

fn point_on_a(engine: &ChartEngine<NullRenderer>, year: i32) -> (f64, f64) {
    let scales = engine.scales();
    (
        scales.focus_x().map(f64::from(year)),
        scales.focus_y().map(value_a(year)),
    )
}

#[test]
fn picks_line_under_pointer() {
    let engine = engine();
    let (x, y) = point_on_a(&engine, 1990);
    assert_eq!(engine.pick_entity_at(x, y + 2.0), Some("A"));
    assert_eq!(engine.pick_entity_at(x, y + 40.0), None);
    assert_eq!(engine.pick_entity_at(-5.0, y), None);
    assert_eq!(engine.pick_entity_at(f64::NAN, y), None);
}

#[test]
fn points_across_a_hole_are_not_connected() {
    let engine = engine();
    // None of B's points are adjacent dataset years, so B draws no segments.
    let scales = engine.scales();
    let x = scales.focus_x().map(1975.0);
    let y = scales.focus_y().map(7.0);
    assert_eq!(engine.pick_entity_at(x, y), None);
}

#[test]
fn pointer_move_fires_enter_and_leave_on_target_change() {
    let mut engine = engine();
    let (x, y) = point_on_a(&engine, 1990);

    assert_eq!(engine.pointer_move(x, y).expect("move"), Some("A".to_owned()));
    assert_eq!(engine.entity_state("A"), Some(EntityVisualState::Hovered));
    let renders = engine.renderer().render_count;

    engine.pointer_move(x + 1.0, y - 0.05).expect("move along line");
    assert_eq!(engine.renderer().render_count, renders);

    assert_eq!(engine.pointer_move(x, y + 60.0).expect("move off"), None);
    assert_eq!(engine.entity_state("A"), Some(EntityVisualState::Idle));
}

#[test]
fn leaving_the_chart_releases_hover() {
    let mut engine = engine();
    let (x, y) = point_on_a(&engine, 2000);
    engine.pointer_move(x, y).expect("move");
    engine.pointer_leave_chart().expect("leave chart");
    assert_eq!(engine.entity_state("A"), Some(EntityVisualState::Idle));
    engine.pointer_leave_chart().expect("second leave is a no-op");
}

#[test]
fn click_pin_then_unpin_under_pointer_needs_fresh_enter() {
    let mut engine = engine();
    let (x, y) = point_on_a(&engine, 1990);

    let clicked = engine.click_at(x, y).expect("click");
    assert_eq!(clicked, Some(("A".to_owned(), EntityVisualState::Pinned)));

    let clicked = engine.click_at(x, y).expect("click again");
    assert_eq!(clicked, Some(("A".to_owned(), EntityVisualState::Idle)));

    engine.pointer_move(x + 1.0, y).expect("wiggle");
    assert_eq!(engine.entity_state("A"), Some(EntityVisualState::Idle));

    engine.pointer_move(x, y + 60.0).expect("off");
    engine.pointer_move(x, y).expect("back on");
    assert_eq!(engine.entity_state("A"), Some(EntityVisualState::Hovered));
}

#[test]
fn click_on_empty_space_does_nothing() {
    let mut engine = engine();
    let (x, y) = point_on_a(&engine, 1990);
    assert_eq!(engine.click_at(x, y + 60.0).expect("click"), None);
    assert!(engine.pinned_entities().next().is_none());
}

#[test]
fn topmost_line_wins_where_lines_cross() {
    let rising: Vec<YearValue> = (1960..=2020).map(|year| YearValue::new(year, value_a(year))).collect();
    let falling: Vec<YearValue> = (1960..=2020)
        .map(|year| YearValue::new(year, 5.0 - f64::from(year - 1960) * 0.05))
        .collect();
    let store = SeriesStore::new(
        (1960..=2020).collect(),
        vec![
            EntitySeries::new("A", "AAA", rising).expect("A"),
            EntitySeries::new("C", "CCC", falling).expect("C"),
        ],
    )
    .expect("store");
    let config = ChartConfig::default().with_container_width(772.0);
    let mut engine = ChartEngine::new(NullRenderer::default(), store, config).expect("engine init");

    let scales = engine.scales();
    let x = scales.focus_x().map(1990.0);
    let y = scales.focus_y().map(3.5);

    assert_eq!(engine.pick_entity_at(x, y), Some("C"));
    engine.pointer_enter("A").expect("raise A");
    engine.pointer_leave("A").expect("leave A");
    assert_eq!(engine.pick_entity_at(x, y), Some("A"));
}
