use focus_chart::api::{ChartConfig, ChartEngine};
use focus_chart::core::{EntitySeries, SeriesStore, YearValue};
use focus_chart::interaction::{EntityVisualState, UnpinPolicy};
use focus_chart::render::{NullRenderer, TextHAlign};
use focus_chart::ChartError;

fn store() -> SeriesStore {
    let dense: Vec<YearValue> = (1960..=2020)
        .map(|year| YearValue::new(year, 2.0 + f64::from(year - 1960) * 0.05))
        .collect();
    let sparse = vec![
        YearValue::new(1960, 8.0),
        YearValue::new(1990, 6.0),
        YearValue::new(2020, 1.0),
    ];
    SeriesStore::new(
        (1960..=2020).collect(),
        vec![
            EntitySeries::new("A", "AAA", dense).expect("A"),
            EntitySeries::new("B", "BBB", sparse).expect("B"),
        ],
    )
    .expect("store")
}

fn engine_with(config: ChartConfig) -> ChartEngine<NullRenderer> {
    ChartEngine::new(
        NullRenderer::default(),
        store(),
        config.with_container_width(772.0),
    )
    .expect("engine init")
}

fn engine() -> ChartEngine<NullRenderer> {
    engine_with(ChartConfig::default())
}

#[test]
fn hover_highlights_and_labels_entity() {
    let mut engine = engine();
    let state = engine.pointer_enter("A").expect("enter");
    assert_eq!(state, EntityVisualState::Hovered);

    let record = engine.entity_record("A").expect("record");
    assert!(record.is_highlighted());
    assert!(record.context_line.is_some_and(|line| line.highlighted));
    let label = engine.label("A").expect("label");
    assert!(label.visible);
    assert!(!label.pinned);
    assert_eq!(label.text, "A");
    assert_eq!(label.h_align, TextHAlign::Right);
    assert_eq!(engine.renderer().last_label_count, 1);

    let state = engine.pointer_leave("A").expect("leave");
    assert_eq!(state, EntityVisualState::Idle);
    assert!(engine.label("A").is_none());
    assert!(!engine.entity_record("A").expect("record").is_highlighted());
    assert_eq!(engine.renderer().last_label_count, 0);
}

#[test]
fn hovered_entity_without_visible_points_keeps_hidden_label() {
    let mut engine = engine();
    engine
        .on_selection_change(Some((20.0, 120.0)))
        .expect("selection");
    let (start, end) = engine.focus_domain();
    assert!(start > 1960.0 && end < 1990.0);

    engine.pointer_enter("B").expect("enter");
    assert_eq!(engine.entity_state("B"), Some(EntityVisualState::Hovered));
    let label = engine.label("B").expect("label exists");
    assert!(!label.visible);
    assert_eq!(engine.renderer().last_label_count, 0);

    engine.on_context_double_activate().expect("reset");
    assert!(engine.label("B").expect("label").visible);
    assert_eq!(engine.renderer().last_label_count, 1);
}

#[test]
fn pin_survives_pointer_leave() {
    let mut engine = engine();
    engine.pointer_enter("A").expect("enter");
    assert_eq!(engine.click("A").expect("click"), EntityVisualState::Pinned);
    assert_eq!(
        engine.pointer_leave("A").expect("leave"),
        EntityVisualState::Pinned
    );

    let label = engine.label("A").expect("label");
    assert!(label.visible);
    assert!(label.pinned);
    assert!(engine.entity_record("A").expect("record").focus_line.is_some_and(|line| line.pinned));
    assert_eq!(engine.pinned_entities().collect::<Vec<_>>(), vec!["A"]);
}

#[test]
fn unpin_while_hovered_settles_to_idle() {
    let mut engine = engine();
    engine.pointer_enter("A").expect("enter");
    engine.click("A").expect("pin");
    let state = engine.click("A").expect("unpin");

    assert_eq!(state, EntityVisualState::Idle);
    assert!(engine.label("A").is_none());
    assert!(!engine.entity_record("A").expect("record").is_highlighted());

    let state = engine.pointer_enter("A").expect("fresh enter");
    assert_eq!(state, EntityVisualState::Hovered);
}

#[test]
fn keep_pointer_hover_policy_drops_back_to_hovered() {
    let mut engine = engine_with(
        ChartConfig::default().with_unpin_policy(UnpinPolicy::KeepPointerHover),
    );
    engine.pointer_enter("A").expect("enter");
    engine.click("A").expect("pin");
    let state = engine.click("A").expect("unpin");

    assert_eq!(state, EntityVisualState::Hovered);
    let label = engine.label("A").expect("label");
    assert!(label.visible);
    assert!(!label.pinned);
    assert!(engine.entity_record("A").expect("record").is_highlighted());
}

#[test]
fn click_without_hover_pins_and_unpins() {
    let mut engine = engine_with(
        ChartConfig::default().with_unpin_policy(UnpinPolicy::KeepPointerHover),
    );
    assert_eq!(engine.click("B").expect("pin"), EntityVisualState::Pinned);
    assert_eq!(engine.click("B").expect("unpin"), EntityVisualState::Idle);
    assert!(engine.label("B").is_none());
}

#[test]
fn highlighted_lines_draw_last_in_both_charts() {
    let mut engine = engine();
    engine.pointer_enter("A").expect("enter A");
    engine.pointer_enter("B").expect("enter B");
    engine.pointer_leave("B").expect("leave B");

    let frame = engine.build_frame().expect("frame");
    let focus_order: Vec<&str> = frame
        .focus
        .series_lines()
        .iter()
        .map(|line| line.entity.as_str())
        .collect();
    let context_order: Vec<&str> = frame
        .context
        .series_lines()
        .iter()
        .map(|line| line.entity.as_str())
        .collect();
    assert_eq!(focus_order, vec!["A", "B"]);
    assert_eq!(context_order, vec!["A", "B"]);

    engine.pointer_enter("A").expect("enter A again");
    let frame = engine.build_frame().expect("frame");
    let last = frame.focus.series_lines().last().expect("lines");
    assert_eq!(last.entity, "A");
    assert!(last.highlighted);
}

fn focus_draw_order(engine: &ChartEngine<NullRenderer>) -> Vec<String> {
    engine
        .build_frame()
        .expect("frame")
        .focus
        .series_lines()
        .iter()
        .map(|line| line.entity.clone())
        .collect()
}

#[test]
fn pinned_lines_return_on_top_after_brush_change() {
    let mut engine = engine();
    engine.click("A").expect("pin A");
    engine.pointer_enter("B").expect("enter B");
    engine.pointer_leave("B").expect("leave B");
    assert_eq!(focus_draw_order(&engine), vec!["A", "B"]);

    engine
        .on_selection_change(Some((100.0, 400.0)))
        .expect("selection");
    assert_eq!(focus_draw_order(&engine), vec!["B", "A"]);
    let frame = engine.build_frame().expect("frame");
    assert_eq!(frame.context.series_lines().last().expect("lines").entity, "A");
}

#[test]
fn pin_toggle_keeps_other_pins_on_top() {
    let mut engine = engine();
    engine.click("A").expect("pin A");
    engine.pointer_enter("B").expect("enter B");
    engine.click("B").expect("pin B");
    assert_eq!(focus_draw_order(&engine), vec!["A", "B"]);

    engine.click("B").expect("unpin B");
    assert_eq!(engine.entity_state("B"), Some(EntityVisualState::Idle));
    assert_eq!(focus_draw_order(&engine), vec!["B", "A"]);
}

#[test]
fn labels_follow_the_focus_domain() {
    let mut engine = engine();
    engine.click("A").expect("pin");
    let full = engine.label("A").expect("label").clone();

    engine
        .on_selection_change(Some((0.0, 300.0)))
        .expect("selection");
    let narrowed = engine.label("A").expect("label").clone();
    assert_ne!(full, narrowed);
    assert!(narrowed.visible);
    assert_eq!(narrowed.h_align, TextHAlign::Right);

    engine.on_context_double_activate().expect("reset");
    assert_eq!(engine.label("A").expect("label"), &full);
}

#[test]
fn repeated_placement_is_idempotent() {
    let mut engine = engine();
    engine.pointer_enter("A").expect("enter");
    let first = engine.label("A").expect("label").clone();
    engine.pointer_enter("A").expect("enter again");
    assert_eq!(engine.label("A").expect("label"), &first);
}

#[test]
fn unknown_entity_is_an_error() {
    let mut engine = engine();
    let err = engine.click("Atlantis").expect_err("unknown");
    assert!(matches!(err, ChartError::UnknownSeries(name) if name == "Atlantis"));
}
