use std::fmt::{self, Write};

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::error::{ChartError, ChartResult};
use crate::render::primitives::format_coordinate as num;
use crate::render::{
    ChartFrame, ChartKind, LayerPrimitives, LinePrimitive, PolylinePrimitive, RectPrimitive,
    RenderFrame, Renderer, TextPrimitive,
};

/// Serialises each frame pair into two standalone SVG documents.
///
/// Documents use a `viewBox` equal to the chart's outer size so the host can
/// scale them freely; class names follow the focus/context chart markup
/// (`country-line`, `highlighted`, `pinned`, `country-label`, `brush`).
#[derive(Debug, Default)]
pub struct SvgRenderer {
    focus_document: String,
    context_document: String,
    render_count: usize,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn focus_svg(&self) -> &str {
        &self.focus_document
    }

    #[must_use]
    pub fn context_svg(&self) -> &str {
        &self.context_document
    }

    #[must_use]
    pub fn render_count(&self) -> usize {
        self.render_count
    }

    pub fn document_for(frame: &RenderFrame) -> ChartResult<String> {
        let mut out = String::with_capacity(4096);
        write_document(&mut out, frame)
            .map_err(|_| ChartError::InvalidData("failed to format svg document".to_owned()))?;
        Ok(out)
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &ChartFrame) -> ChartResult<()> {
        frame.validate()?;
        self.focus_document = Self::document_for(&frame.focus)?;
        self.context_document = Self::document_for(&frame.context)?;
        self.render_count += 1;
        Ok(())
    }
}

fn write_document(out: &mut String, frame: &RenderFrame) -> fmt::Result {
    let id = frame.chart.as_str();
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" id="{id}" viewBox="0 0 {} {}" preserveAspectRatio="xMidYMid meet">"#,
        frame.viewport.width, frame.viewport.height
    )?;

    let clip_id = format!("{id}-clip");
    if let Some(clip) = frame.clip {
        writeln!(
            out,
            r#"<defs><clipPath id="{clip_id}"><rect x="{}" y="{}" width="{}" height="{}"/></clipPath></defs>"#,
            num(clip.x),
            num(clip.y),
            num(clip.width),
            num(clip.height)
        )?;
    }

    for layer in &frame.layers {
        if layer.is_empty() {
            continue;
        }
        write!(out, r#"<g class="{}""#, layer.kind.svg_group_class())?;
        if frame.clip.is_some() && layer.kind.is_clipped() {
            write!(out, r#" clip-path="url(#{clip_id})""#)?;
        }
        writeln!(out, ">")?;
        write_layer(out, frame.chart, layer)?;
        writeln!(out, "</g>")?;
    }

    writeln!(out, "</svg>")
}

fn write_layer(out: &mut String, chart: ChartKind, layer: &LayerPrimitives) -> fmt::Result {
    for rect in &layer.rects {
        write_rect(out, rect)?;
    }
    for line in &layer.lines {
        write_line(out, line)?;
    }
    for polyline in &layer.polylines {
        write_polyline(out, chart, polyline)?;
    }
    for text in &layer.texts {
        write_text(out, text)?;
    }
    Ok(())
}

fn write_line(out: &mut String, line: &LinePrimitive) -> fmt::Result {
    write!(out, "<line")?;
    if !line.class.is_empty() {
        write!(out, r#" class="{}""#, line.class)?;
    }
    writeln!(
        out,
        r#" x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-opacity="{}" stroke-width="{}"/>"#,
        num(line.x1),
        num(line.y1),
        num(line.x2),
        num(line.y2),
        line.color.to_css_rgb(),
        num(line.color.alpha),
        num(line.stroke_width)
    )
}

fn write_rect(out: &mut String, rect: &RectPrimitive) -> fmt::Result {
    write!(out, "<rect")?;
    if !rect.class.is_empty() {
        write!(out, r#" class="{}""#, rect.class)?;
    }
    writeln!(
        out,
        r#" x="{}" y="{}" width="{}" height="{}" fill="{}" fill-opacity="{}"/>"#,
        num(rect.x),
        num(rect.y),
        num(rect.width),
        num(rect.height),
        rect.fill.to_css_rgb(),
        num(rect.fill.alpha)
    )
}

fn write_polyline(out: &mut String, chart: ChartKind, polyline: &PolylinePrimitive) -> fmt::Result {
    let mut class = String::from("country-line");
    if chart == ChartKind::Context {
        class.push_str(" context-line");
    }
    if polyline.highlighted {
        class.push_str(" highlighted");
    }
    if polyline.pinned {
        class.push_str(" pinned");
    }
    writeln!(
        out,
        r#"<path class="{class}" data-entity="{}" d="{}" fill="none" stroke="{}" stroke-opacity="{}" stroke-width="{}"/>"#,
        encode_double_quoted_attribute(&polyline.entity),
        polyline.svg_path_data(),
        polyline.color.to_css_rgb(),
        num(polyline.color.alpha),
        num(polyline.stroke_width)
    )
}

fn write_text(out: &mut String, text: &TextPrimitive) -> fmt::Result {
    write!(out, "<text")?;
    if !text.class.is_empty() {
        write!(
            out,
            r#" class="{}""#,
            encode_double_quoted_attribute(&text.class)
        )?;
    }
    if text.rotation_deg != 0.0 {
        write!(
            out,
            r#" transform="translate({},{}) rotate({})""#,
            num(text.x),
            num(text.y),
            num(text.rotation_deg)
        )?;
    } else {
        write!(out, r#" x="{}" y="{}""#, num(text.x), num(text.y))?;
    }
    if text.dx != 0.0 {
        write!(out, r#" dx="{}""#, num(text.dx))?;
    }
    writeln!(
        out,
        r#" text-anchor="{}" font-size="{}" fill="{}">{}</text>"#,
        text.h_align.svg_text_anchor(),
        num(text.font_size_px),
        text.color.to_css_rgb(),
        encode_text(&text.text)
    )
}
