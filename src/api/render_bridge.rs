use indexmap::IndexMap;
use tracing::trace;

use crate::core::{ChartDimensions, EntitySeries, LinearScale, ScalePair, SeriesStore};
use crate::error::ChartResult;
use crate::render::{
    CanvasLayerKind, ChartFrame, ChartKind, Color, LinePrimitive, PolylinePrimitive, RectPrimitive,
    RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

use super::{
    BrushSelection, ChartConfig, ChartEngine, EntityRecord, LineHandle, RenderStyle,
    value_tick_labels,
};

/// Projected line runs for one series; a new run starts at every hole.
pub type ProjectedRuns = Vec<Vec<(f64, f64)>>;

const DOMAIN_LINE_WIDTH: f64 = 1.0;
const GRID_LINE_WIDTH: f64 = 1.0;
const TICK_LABEL_GAP_PX: f64 = 3.0;
const YEAR_TITLE_OFFSET_PX: f64 = 52.0;

/// Everything a draw pass reads from the engine.
pub(super) struct FrameInputs<'a> {
    pub(super) store: &'a SeriesStore,
    pub(super) scales: &'a ScalePair,
    pub(super) entities: &'a IndexMap<String, EntityRecord>,
    pub(super) focus_dims: ChartDimensions,
    pub(super) context_dims: ChartDimensions,
    pub(super) focus_ticks: &'a [i32],
    pub(super) context_ticks: &'a [i32],
    pub(super) selection: BrushSelection,
    pub(super) config: &'a ChartConfig,
}

impl<R: Renderer> ChartEngine<R> {
    /// Materializes the focus and context frames for the current state.
    pub fn build_frame(&self) -> ChartResult<ChartFrame> {
        let inputs = FrameInputs {
            store: &self.store,
            scales: &self.scales,
            entities: &self.entities,
            focus_dims: self.focus_dims,
            context_dims: self.context_dims,
            focus_ticks: &self.focus_ticks,
            context_ticks: &self.context_ticks,
            selection: self.selection,
            config: &self.config,
        };
        let frame = build_chart_frame(&inputs);
        trace!(
            focus_lines = frame.focus.series_lines().len(),
            labels = frame.focus.labels().len(),
            "frame built"
        );
        Ok(frame)
    }
}

pub(super) fn build_chart_frame(inputs: &FrameInputs<'_>) -> ChartFrame {
    let order = draw_order(inputs.store, inputs.entities);
    ChartFrame {
        focus: build_focus_frame(inputs, &order),
        context: build_context_frame(inputs, &order),
    }
}

/// Projects one series into pixel runs, offset by `origin`.
///
/// Two consecutive points stay in the same run only when their years are
/// adjacent in the dataset year list; anything missing in between is a hole.
#[must_use]
pub fn project_runs(
    series: &EntitySeries,
    store: &SeriesStore,
    x: LinearScale,
    y: LinearScale,
    origin: (f64, f64),
) -> ProjectedRuns {
    let mut runs = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();
    let mut previous_index: Option<usize> = None;

    for point in series.points() {
        let index = store.year_index(point.year);
        let contiguous = matches!((previous_index, index), (Some(p), Some(i)) if i == p + 1);
        if !contiguous && !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
        current.push((
            origin.0 + x.map(f64::from(point.year)),
            origin.1 + y.map(point.value),
        ));
        previous_index = index;
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

/// Projects every series in dataset order.
pub(super) fn project_all(
    store: &SeriesStore,
    x: LinearScale,
    y: LinearScale,
    origin: (f64, f64),
) -> Vec<ProjectedRuns> {
    #[cfg(feature = "parallel-projection")]
    {
        use rayon::prelude::*;

        let series: Vec<&EntitySeries> = store.iter().collect();
        series
            .par_iter()
            .map(|series| project_runs(series, store, x, y, origin))
            .collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        store
            .iter()
            .map(|series| project_runs(series, store, x, y, origin))
            .collect()
    }
}

/// Dataset indices sorted back-to-front: raised entities last, ties in data order.
pub(super) fn draw_order(store: &SeriesStore, entities: &IndexMap<String, EntityRecord>) -> Vec<usize> {
    let mut order: Vec<(u64, usize)> = store
        .iter()
        .enumerate()
        .map(|(index, series)| {
            let rank = entities.get(series.name()).map_or(0, EntityRecord::raise_rank);
            (rank, index)
        })
        .collect();
    order.sort_unstable();
    order.into_iter().map(|(_, index)| index).collect()
}

fn origin(dims: ChartDimensions) -> (f64, f64) {
    (dims.margins.left, dims.margins.top)
}

fn push_series_lines(
    frame: &mut RenderFrame,
    inputs: &FrameInputs<'_>,
    order: &[usize],
    projected: Vec<ProjectedRuns>,
    context: bool,
) {
    let style = inputs.config.style;
    let mut projected: Vec<Option<ProjectedRuns>> = projected.into_iter().map(Some).collect();

    for &index in order {
        let Some(series) = inputs.store.get_index(index) else {
            continue;
        };
        let Some(runs) = projected.get_mut(index).and_then(Option::take) else {
            continue;
        };
        if runs.is_empty() {
            continue;
        }
        let handle = inputs.entities.get(series.name()).and_then(|record| {
            if context {
                record.context_line
            } else {
                record.focus_line
            }
        });
        let LineHandle {
            highlighted,
            pinned,
            ..
        } = handle.unwrap_or_default();
        let (color, width) = style.series_stroke(highlighted, pinned, context);
        frame.push_polyline(
            CanvasLayerKind::Series,
            PolylinePrimitive::new(series.name(), runs, width, color).with_markers(highlighted, pinned),
        );
    }
}

fn push_year_axis(
    frame: &mut RenderFrame,
    style: RenderStyle,
    dims: ChartDimensions,
    x: LinearScale,
    ticks: &[i32],
) {
    let (ox, oy) = origin(dims);
    let axis_y = oy + dims.height;
    frame.push_line(
        CanvasLayerKind::Axis,
        LinePrimitive::new(ox, axis_y, ox + dims.width, axis_y, DOMAIN_LINE_WIDTH, style.axis_color)
            .with_class("axis axis--x domain"),
    );

    for &year in ticks {
        let px = ox + x.map(f64::from(year));
        frame.push_line(
            CanvasLayerKind::Axis,
            LinePrimitive::new(px, axis_y, px, axis_y + style.tick_size_px, DOMAIN_LINE_WIDTH, style.axis_color)
                .with_class("axis-tick"),
        );
        frame.push_text(
            CanvasLayerKind::Axis,
            TextPrimitive::new(
                year.to_string(),
                px,
                axis_y + style.tick_size_px + TICK_LABEL_GAP_PX + style.axis_font_size_px * 0.71,
                style.axis_font_size_px,
                style.axis_text_color,
                TextHAlign::Center,
            )
            .with_class("tick-label"),
        );
    }
}

fn push_value_axis(frame: &mut RenderFrame, inputs: &FrameInputs<'_>) {
    let style = inputs.config.style;
    let dims = inputs.focus_dims;
    let (ox, oy) = origin(dims);
    let y = inputs.scales.focus_y();

    frame.push_line(
        CanvasLayerKind::Axis,
        LinePrimitive::new(ox, oy, ox, oy + dims.height, DOMAIN_LINE_WIDTH, style.axis_color)
            .with_class("axis axis--y domain"),
    );

    for (value, label) in value_tick_labels(y, inputs.config.value_tick_count) {
        let py = oy + y.map(value);
        frame.push_line(
            CanvasLayerKind::Grid,
            LinePrimitive::new(ox, py, ox + dims.width, py, GRID_LINE_WIDTH, style.grid_color)
                .with_class("grid-line"),
        );
        frame.push_line(
            CanvasLayerKind::Axis,
            LinePrimitive::new(ox - style.tick_size_px, py, ox, py, DOMAIN_LINE_WIDTH, style.axis_color)
                .with_class("axis-tick"),
        );
        frame.push_text(
            CanvasLayerKind::Axis,
            TextPrimitive::new(
                label,
                ox - style.tick_size_px - TICK_LABEL_GAP_PX,
                py + style.axis_font_size_px * 0.32,
                style.axis_font_size_px,
                style.axis_text_color,
                TextHAlign::Right,
            )
            .with_class("tick-label"),
        );
    }
}

fn push_axis_titles(frame: &mut RenderFrame, inputs: &FrameInputs<'_>) {
    let style = inputs.config.style;
    let dims = inputs.focus_dims;
    let (ox, oy) = origin(dims);

    if !inputs.config.value_axis_title.is_empty() {
        frame.push_text(
            CanvasLayerKind::Axis,
            TextPrimitive::new(
                inputs.config.value_axis_title.as_str(),
                dims.margins.left / 3.0,
                oy + dims.height / 2.0,
                style.axis_title_font_size_px,
                style.axis_text_color,
                TextHAlign::Center,
            )
            .with_rotation(-90.0)
            .with_class("axis-title"),
        );
    }
    if !inputs.config.year_axis_title.is_empty() {
        frame.push_text(
            CanvasLayerKind::Axis,
            TextPrimitive::new(
                inputs.config.year_axis_title.as_str(),
                ox + dims.width / 2.0,
                oy + dims.height + YEAR_TITLE_OFFSET_PX,
                style.axis_title_font_size_px,
                style.axis_text_color,
                TextHAlign::Center,
            )
            .with_class("axis-title"),
        );
    }
}

fn push_labels(frame: &mut RenderFrame, inputs: &FrameInputs<'_>, order: &[usize]) {
    let style = inputs.config.style;
    let (ox, oy) = origin(inputs.focus_dims);

    for &index in order {
        let Some(series) = inputs.store.get_index(index) else {
            continue;
        };
        let Some(label) = inputs
            .entities
            .get(series.name())
            .and_then(|record| record.label.as_ref())
        else {
            continue;
        };
        if !label.visible {
            continue;
        }
        let (color, class): (Color, &str) = if label.pinned {
            (style.pinned_label_color, "country-label pinned")
        } else {
            (style.label_color, "country-label")
        };
        frame.push_text(
            CanvasLayerKind::Labels,
            TextPrimitive::new(
                label.text.as_str(),
                ox + label.x,
                oy + label.y,
                style.label_font_size_px,
                color,
                label.h_align,
            )
            .with_dx(label.dx)
            .with_class(class),
        );
    }
}

fn build_focus_frame(inputs: &FrameInputs<'_>, order: &[usize]) -> RenderFrame {
    let dims = inputs.focus_dims;
    let (ox, oy) = origin(dims);
    let mut frame = RenderFrame::new(ChartKind::Focus, dims.viewport()).with_clip(
        RectPrimitive::new(ox, oy, dims.width, dims.height, Color::rgb(1.0, 1.0, 1.0)),
    );

    push_value_axis(&mut frame, inputs);
    let projected = project_all(
        inputs.store,
        inputs.scales.focus_x(),
        inputs.scales.focus_y(),
        (ox, oy),
    );
    push_series_lines(&mut frame, inputs, order, projected, false);
    push_labels(&mut frame, inputs, order);
    push_year_axis(
        &mut frame,
        inputs.config.style,
        dims,
        inputs.scales.focus_x(),
        inputs.focus_ticks,
    );
    push_axis_titles(&mut frame, inputs);
    frame
}

fn build_context_frame(inputs: &FrameInputs<'_>, order: &[usize]) -> RenderFrame {
    let dims = inputs.context_dims;
    let (ox, oy) = origin(dims);
    let mut frame = RenderFrame::new(ChartKind::Context, dims.viewport());

    let projected = project_all(
        inputs.store,
        inputs.scales.context_x(),
        inputs.scales.context_y(),
        (ox, oy),
    );
    push_series_lines(&mut frame, inputs, order, projected, true);
    push_year_axis(
        &mut frame,
        inputs.config.style,
        dims,
        inputs.scales.context_x(),
        inputs.context_ticks,
    );

    if let BrushSelection::Extent { x0, x1 } = inputs.selection {
        frame.push_rect(
            CanvasLayerKind::Overlay,
            RectPrimitive::new(ox + x0, oy, x1 - x0, dims.height, inputs.config.style.brush_fill)
                .with_class("brush-selection"),
        );
    }
    frame
}
