use crate::error::{ChartError, ChartResult};

use super::RenderStyle;

pub(super) fn validate_render_style(style: RenderStyle) -> ChartResult<()> {
    style.background_color.validate()?;
    for color in style.series_palette {
        color.validate()?;
    }
    if style.series_palette.is_empty() {
        return Err(ChartError::InvalidData(
            "series palette must not be empty".to_owned(),
        ));
    }
    if let Some(color) = style.area_fill_color {
        color.validate()?;
    }
    style.cursor_line_color.validate()?;
    style.tooltip_box_color.validate()?;
    style.tooltip_text_color.validate()?;
    style.region_label_color.validate()?;
    style.axis_line_color.validate()?;
    style.axis_label_color.validate()?;
    style.no_data_text_color.validate()?;
    style.series_stroke_style.validate()?;
    style.cursor_line_style.validate()?;

    for (value, name) in [
        (style.series_stroke_width, "series stroke width"),
        (style.marker_radius_px, "marker radius"),
        (style.cursor_line_width, "cursor line width"),
        (style.tooltip_font_size_px, "tooltip font size"),
        (style.region_label_font_size_px, "region label font size"),
        (style.axis_line_width, "axis line width"),
        (style.axis_label_font_size_px, "axis label font size"),
        (style.no_data_font_size_px, "no-data font size"),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "{name} must be finite and > 0"
            )));
        }
    }

    for (value, name) in [
        (style.tooltip_box_corner_radius_px, "tooltip corner radius"),
        (style.tooltip_box_padding_x_px, "tooltip padding x"),
        (style.tooltip_box_padding_y_px, "tooltip padding y"),
        (style.tooltip_box_min_width_px, "tooltip min width"),
        (style.tooltip_box_offset_y_px, "tooltip offset y"),
        (style.tooltip_box_edge_margin_px, "tooltip edge margin"),
        (
            style.tooltip_box_stabilization_step_px,
            "tooltip stabilization step",
        ),
        (style.axis_tick_length_px, "axis tick length"),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "{name} must be finite and >= 0"
            )));
        }
    }

    if !style.area_fill_opacity.is_finite() || !(0.0..=1.0).contains(&style.area_fill_opacity) {
        return Err(ChartError::InvalidData(
            "area fill opacity must be finite and in [0, 1]".to_owned(),
        ));
    }
    if style.tooltip_date_format.is_empty() {
        return Err(ChartError::InvalidData(
            "tooltip date format must not be empty".to_owned(),
        ));
    }

    Ok(())
}
