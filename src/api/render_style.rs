use crate::render::{Color, LineStrokeStyle};

/// Fallback series color used when a host installs an empty palette.
const FALLBACK_SERIES_COLOR: Color = Color::rgb(0.816, 0.831, 0.859);

/// Default palette cycled across series in insertion order.
pub const DEFAULT_SERIES_PALETTE: &[Color] = &[
    Color::rgb(0.816, 0.831, 0.859),
    Color::rgb(0.604, 0.780, 0.969),
    Color::rgb(0.290, 0.678, 0.800),
    Color::rgb(0.157, 0.784, 0.471),
    Color::rgb(0.863, 0.314, 0.314),
    Color::rgb(0.965, 0.682, 0.176),
];

/// Style contract for the current render frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub background_color: Color,
    /// Colors cycled per series index.
    pub series_palette: &'static [Color],
    pub series_stroke_width: f64,
    pub series_stroke_style: LineStrokeStyle,
    /// Area fill color; `None` reuses the series color.
    pub area_fill_color: Option<Color>,
    pub area_fill_opacity: f64,
    pub marker_radius_px: f64,
    pub cursor_line_color: Color,
    pub cursor_line_width: f64,
    pub cursor_line_style: LineStrokeStyle,
    pub tooltip_box_color: Color,
    pub tooltip_box_corner_radius_px: f64,
    pub tooltip_box_padding_x_px: f64,
    pub tooltip_box_padding_y_px: f64,
    pub tooltip_box_min_width_px: f64,
    /// Gap between the pill bottom and the plot top.
    pub tooltip_box_offset_y_px: f64,
    /// Horizontal margin the pill keeps from the plot edges.
    pub tooltip_box_edge_margin_px: f64,
    /// Pixel step the pill position is quantized to while dragging.
    pub tooltip_box_stabilization_step_px: f64,
    pub tooltip_text_color: Color,
    pub tooltip_font_size_px: f64,
    /// `chrono` format pattern for the tooltip date label.
    pub tooltip_date_format: &'static str,
    /// Decimal places of the scrubbed-value readout.
    pub readout_precision: u8,
    pub region_label_color: Color,
    pub region_label_font_size_px: f64,
    pub axis_line_color: Color,
    pub axis_line_width: f64,
    pub axis_label_color: Color,
    pub axis_label_font_size_px: f64,
    pub axis_tick_length_px: f64,
    pub no_data_text_color: Color,
    pub no_data_font_size_px: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background_color: Color::rgb(0.071, 0.071, 0.078),
            series_palette: DEFAULT_SERIES_PALETTE,
            series_stroke_width: 1.0,
            series_stroke_style: LineStrokeStyle::Solid,
            area_fill_color: None,
            area_fill_opacity: 0.5,
            marker_radius_px: 3.5,
            cursor_line_color: Color::rgb(1.0, 1.0, 1.0),
            cursor_line_width: 1.0,
            cursor_line_style: LineStrokeStyle::Solid,
            tooltip_box_color: Color::rgb(0.290, 0.678, 0.800),
            tooltip_box_corner_radius_px: 14.0,
            tooltip_box_padding_x_px: 10.0,
            tooltip_box_padding_y_px: 6.0,
            tooltip_box_min_width_px: 60.0,
            tooltip_box_offset_y_px: 15.0,
            tooltip_box_edge_margin_px: 2.0,
            tooltip_box_stabilization_step_px: 1.0,
            tooltip_text_color: Color::rgb(1.0, 1.0, 1.0),
            tooltip_font_size_px: 15.0,
            tooltip_date_format: "%d/%m",
            readout_precision: 2,
            region_label_color: Color::rgb(0.82, 0.82, 0.86),
            region_label_font_size_px: 12.0,
            axis_line_color: Color::rgb(0.71, 0.71, 0.75),
            axis_line_width: 1.5,
            axis_label_color: Color::rgb(0.82, 0.82, 0.86),
            axis_label_font_size_px: 12.0,
            axis_tick_length_px: 4.0,
            no_data_text_color: Color::rgb(0.82, 0.82, 0.86),
            no_data_font_size_px: 16.0,
        }
    }
}

impl RenderStyle {
    /// Cyclic palette lookup for one series index.
    #[must_use]
    pub fn series_color(&self, index: usize) -> Color {
        if self.series_palette.is_empty() {
            return FALLBACK_SERIES_COLOR;
        }
        self.series_palette[index % self.series_palette.len()]
    }
}
