use crate::error::ChartResult;
use crate::render::{ChartLayerKind, RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch invalid geometry
/// before a real backend is involved.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_primitive_count: usize,
    pub last_polyline_count: usize,
    pub last_text_count: usize,
    pub last_cursor_line_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_primitive_count = frame.primitive_count();
        self.last_polyline_count = frame
            .layers
            .iter()
            .map(|layer| layer.polylines.len())
            .sum();
        self.last_text_count = frame.layers.iter().map(|layer| layer.texts.len()).sum();
        self.last_cursor_line_count = frame
            .layer(ChartLayerKind::Cursor)
            .map_or(0, |layer| layer.lines.len());
        Ok(())
    }
}
