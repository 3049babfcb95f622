use crate::core::PlotRect;

use super::RenderStyle;
use super::layout_helpers::{estimate_label_text_width_px, stabilize_position};

/// Resolved geometry for the tooltip pill above the plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct TooltipPillLayout {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub text_x: f64,
    pub text_y: f64,
}

/// Cursor line x: the snapped sample position when one exists, otherwise the
/// clamped raw cursor, always inside the horizontal plot span.
pub(super) fn resolve_cursor_line_x(cursor_x: f64, snapped_x: Option<f64>, plot: PlotRect) -> f64 {
    snapped_x
        .unwrap_or(cursor_x)
        .clamp(plot.left, plot.right())
}

/// Lays out the tooltip pill around an anchor x.
///
/// The anchor is quantized by the stabilization step, then the pill is
/// clamped so it never crosses the plot edge margin. The pill sits above the
/// plot top; when the top inset cannot hold it, it clamps to the viewport
/// top instead of disappearing.
pub(super) fn resolve_tooltip_pill(
    anchor_x: f64,
    text: &str,
    plot: PlotRect,
    style: &RenderStyle,
) -> TooltipPillLayout {
    let text_width = estimate_label_text_width_px(text, style.tooltip_font_size_px);
    let width = (text_width + 2.0 * style.tooltip_box_padding_x_px)
        .max(style.tooltip_box_min_width_px)
        .min(plot.width);
    let height = style.tooltip_font_size_px + 2.0 * style.tooltip_box_padding_y_px;

    let anchor = stabilize_position(anchor_x, style.tooltip_box_stabilization_step_px)
        .clamp(plot.left, plot.right());
    let min_left = plot.left + style.tooltip_box_edge_margin_px;
    let max_left = (plot.right() - style.tooltip_box_edge_margin_px - width).max(min_left);
    let left = (anchor - width * 0.5).clamp(min_left, max_left);
    let top = (plot.top - style.tooltip_box_offset_y_px - height).max(0.0);

    TooltipPillLayout {
        left,
        top,
        width,
        height,
        text_x: left + width * 0.5,
        text_y: top + style.tooltip_box_padding_y_px,
    }
}

/// Formats the tooltip date from a domain x value.
///
/// Values representable as unix timestamps format through the configured
/// `chrono` pattern; anything else falls back to the plain number.
pub(super) fn format_tooltip_date(x_value: f64, format: &str) -> String {
    match chrono::DateTime::from_timestamp(x_value as i64, 0) {
        Some(timestamp) => timestamp.format(format).to_string(),
        None => format!("{x_value:.0}"),
    }
}

pub(super) fn format_readout_value(y_value: f64, precision: u8) -> String {
    format!("{y_value:.precision$}", precision = precision as usize)
}

#[cfg(test)]
mod tests {
    use super::{format_readout_value, format_tooltip_date, resolve_tooltip_pill};
    use crate::api::RenderStyle;
    use crate::core::PlotRect;

    const PLOT: PlotRect = PlotRect {
        left: 20.0,
        top: 48.0,
        width: 360.0,
        height: 200.0,
    };

    #[test]
    fn pill_stays_inside_edge_margin() {
        let style = RenderStyle::default();
        let near_left = resolve_tooltip_pill(PLOT.left, "01/02", PLOT, &style);
        assert!(near_left.left >= PLOT.left + style.tooltip_box_edge_margin_px);

        let near_right = resolve_tooltip_pill(PLOT.right(), "01/02", PLOT, &style);
        assert!(
            near_right.left + near_right.width
                <= PLOT.right() - style.tooltip_box_edge_margin_px + 1e-9
        );
    }

    #[test]
    fn pill_sits_above_plot_top() {
        let style = RenderStyle::default();
        let pill = resolve_tooltip_pill(200.0, "01/02", PLOT, &style);
        assert!(pill.top + pill.height <= PLOT.top);
        assert!(pill.top >= 0.0);
    }

    #[test]
    fn date_formats_from_unix_seconds() {
        // 2021-03-14 00:00:00 UTC
        assert_eq!(format_tooltip_date(1_615_680_000.0, "%d/%m"), "14/03");
    }

    #[test]
    fn readout_uses_requested_precision() {
        assert_eq!(format_readout_value(1234.5, 2), "1234.50");
        assert_eq!(format_readout_value(7.0, 0), "7");
    }
}
