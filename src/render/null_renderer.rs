use crate::error::ChartResult;
use crate::render::{ChartFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests catch invalid geometry, and it
/// counts what the last pass would have drawn.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_focus_line_count: usize,
    pub last_context_line_count: usize,
    pub last_label_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &ChartFrame) -> ChartResult<()> {
        frame.validate()?;
        self.render_count += 1;
        self.last_focus_line_count = frame.focus.series_lines().len();
        self.last_context_line_count = frame.context.series_lines().len();
        self.last_label_count = frame.focus.labels().len();
        Ok(())
    }
}
