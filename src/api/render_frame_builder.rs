use crate::core::{PlotRect, project_area_geometry, project_polyline};
use crate::error::ChartResult;
use crate::extensions::{
    MarkerVisibility, markers_in_cursor_column, place_point_markers, project_region_bands,
};
use crate::render::{
    ChartLayerKind, CirclePrimitive, LinePrimitive, PolygonPrimitive, PolylinePrimitive,
    RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

use super::ChartEngine;
use super::axis_ticks::{
    AXIS_MAX_TICKS, AXIS_MIN_TICKS, AXIS_X_TARGET_SPACING_PX, AXIS_Y_TARGET_SPACING_PX,
    axis_tick_target_count, format_tick_label, linear_ticks,
};
use super::tooltip_layout::{format_tooltip_date, resolve_cursor_line_x, resolve_tooltip_pill};

impl<R: Renderer> ChartEngine<R> {
    /// Materializes the full layered scene for the current engine state.
    ///
    /// With no data the frame holds only the background and the placeholder
    /// message; otherwise layers fill in canonical order: regions, series
    /// fills and polylines, markers, the scrub cursor, then axes.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let viewport = self.model.viewport;
        let mut frame = RenderFrame::new(viewport);
        frame.push_rect(
            ChartLayerKind::Background,
            RectPrimitive::new(
                0.0,
                0.0,
                f64::from(viewport.width),
                f64::from(viewport.height),
                self.style.background_color,
            ),
        );

        if !self.model.has_data() {
            frame.push_text(
                ChartLayerKind::Background,
                TextPrimitive::new(
                    self.config.no_data_message.clone(),
                    f64::from(viewport.width) * 0.5,
                    f64::from(viewport.height) * 0.5,
                    self.style.no_data_font_size_px,
                    self.style.no_data_text_color,
                    TextHAlign::Center,
                ),
            );
            frame.validate()?;
            return Ok(frame);
        }

        let plot = self.model.plot_rect()?;
        self.append_region_primitives(&mut frame, plot)?;
        self.append_series_primitives(&mut frame, plot)?;
        self.append_marker_primitives(&mut frame, plot)?;
        self.append_cursor_primitives(&mut frame, plot)?;
        self.append_axis_primitives(&mut frame, plot)?;

        frame.validate()?;
        Ok(frame)
    }

    fn append_region_primitives(&self, frame: &mut RenderFrame, plot: PlotRect) -> ChartResult<()> {
        let bands = project_region_bands(
            &self.model.regions,
            self.model.region_styling,
            self.model.y_scale,
            plot,
        )?;

        for band in bands {
            frame.push_rect(
                ChartLayerKind::Regions,
                RectPrimitive::new(band.x, band.y, band.width, band.height, band.fill),
            );
            if let Some(label) = band.label {
                frame.push_text(
                    ChartLayerKind::Regions,
                    TextPrimitive::new(
                        label.text,
                        label.x,
                        label.y,
                        self.style.region_label_font_size_px,
                        self.style.region_label_color,
                        TextHAlign::Center,
                    ),
                );
            }
        }
        Ok(())
    }

    fn append_series_primitives(&self, frame: &mut RenderFrame, plot: PlotRect) -> ChartResult<()> {
        for (index, points) in self.model.series.values().enumerate() {
            if points.len() < 2 {
                continue;
            }
            let color = self.style.series_color(index);

            if self.config.show_areas {
                let geometry =
                    project_area_geometry(points, self.model.x_scale, self.model.y_scale, plot)?;
                let fill = self
                    .style
                    .area_fill_color
                    .unwrap_or(color)
                    .with_opacity(self.style.area_fill_opacity);
                frame.push_polygon(
                    ChartLayerKind::Series,
                    PolygonPrimitive::new(
                        geometry
                            .fill_polygon
                            .iter()
                            .map(|vertex| (vertex.x, vertex.y))
                            .collect(),
                        fill,
                    ),
                );
            }

            let vertices = project_polyline(points, self.model.x_scale, self.model.y_scale, plot)?;
            frame.push_polyline(
                ChartLayerKind::Series,
                PolylinePrimitive::new(
                    vertices.iter().map(|vertex| (vertex.x, vertex.y)).collect(),
                    self.style.series_stroke_width,
                    color,
                )
                .with_stroke_style(self.style.series_stroke_style),
            );
        }
        Ok(())
    }

    fn append_marker_primitives(&self, frame: &mut RenderFrame, plot: PlotRect) -> ChartResult<()> {
        let scrub = self.model.scrub.state();
        let markers = match self.config.marker_visibility {
            MarkerVisibility::Hidden => return Ok(()),
            MarkerVisibility::ScrubOnly if !scrub.active || scrub.snapped.is_none() => {
                return Ok(());
            }
            _ => place_point_markers(
                self.model
                    .series
                    .iter()
                    .map(|(name, points)| (name.as_str(), points.as_slice())),
                self.model.x_scale,
                self.model.y_scale,
                plot,
                self.style.marker_radius_px,
            )?,
        };

        let markers = match (self.config.marker_visibility, &scrub.snapped) {
            (MarkerVisibility::ScrubOnly, Some(snapped)) => {
                markers_in_cursor_column(&markers, snapped.x_px)
            }
            _ => markers,
        };

        for marker in markers {
            let series_index = self
                .model
                .series
                .get_index_of(marker.series.as_str())
                .unwrap_or(0);
            frame.push_circle(
                ChartLayerKind::Markers,
                CirclePrimitive::new(
                    marker.x,
                    marker.y,
                    self.style.marker_radius_px,
                    self.style.series_color(series_index),
                ),
            );
        }
        Ok(())
    }

    fn append_cursor_primitives(&self, frame: &mut RenderFrame, plot: PlotRect) -> ChartResult<()> {
        let scrub = self.model.scrub.state();
        if !scrub.active || !self.config.scrub_enabled {
            return Ok(());
        }

        let line_x = resolve_cursor_line_x(
            scrub.cursor_x,
            scrub.snapped.as_ref().map(|snapped| snapped.x_px),
            plot,
        );
        frame.push_line(
            ChartLayerKind::Cursor,
            LinePrimitive::new(
                line_x,
                plot.top,
                line_x,
                plot.bottom(),
                self.style.cursor_line_width,
                self.style.cursor_line_color,
            )
            .with_stroke_style(self.style.cursor_line_style),
        );

        if let Some(snapped) = &scrub.snapped {
            let text = format_tooltip_date(snapped.x_value, self.style.tooltip_date_format);
            let pill = resolve_tooltip_pill(line_x, &text, plot, &self.style);
            frame.push_rect(
                ChartLayerKind::Cursor,
                RectPrimitive::new(
                    pill.left,
                    pill.top,
                    pill.width,
                    pill.height,
                    self.style.tooltip_box_color,
                )
                .with_corner_radius(self.style.tooltip_box_corner_radius_px),
            );
            frame.push_text(
                ChartLayerKind::Cursor,
                TextPrimitive::new(
                    text,
                    pill.text_x,
                    pill.text_y,
                    self.style.tooltip_font_size_px,
                    self.style.tooltip_text_color,
                    TextHAlign::Center,
                ),
            );
        }
        Ok(())
    }

    fn append_axis_primitives(&self, frame: &mut RenderFrame, plot: PlotRect) -> ChartResult<()> {
        frame.push_line(
            ChartLayerKind::Axis,
            LinePrimitive::new(
                plot.left,
                plot.bottom(),
                plot.right(),
                plot.bottom(),
                self.style.axis_line_width,
                self.style.axis_line_color,
            ),
        );
        frame.push_line(
            ChartLayerKind::Axis,
            LinePrimitive::new(
                plot.left,
                plot.top,
                plot.left,
                plot.bottom(),
                self.style.axis_line_width,
                self.style.axis_line_color,
            ),
        );

        let tick_len = self.style.axis_tick_length_px;

        let x_count = axis_tick_target_count(
            plot.width,
            AXIS_X_TARGET_SPACING_PX,
            AXIS_MIN_TICKS,
            AXIS_MAX_TICKS,
        );
        let x_ticks = linear_ticks(self.model.x_scale.domain(), x_count);
        for value in &x_ticks.values {
            let x = plot.left + self.model.x_scale.x_to_pixel(*value, plot.width)?;
            if tick_len > 0.0 {
                frame.push_line(
                    ChartLayerKind::Axis,
                    LinePrimitive::new(
                        x,
                        plot.bottom(),
                        x,
                        plot.bottom() + tick_len,
                        1.0,
                        self.style.axis_line_color,
                    ),
                );
            }
            frame.push_text(
                ChartLayerKind::Axis,
                TextPrimitive::new(
                    format_tooltip_date(*value, self.style.tooltip_date_format),
                    x,
                    plot.bottom() + tick_len + 2.0,
                    self.style.axis_label_font_size_px,
                    self.style.axis_label_color,
                    TextHAlign::Center,
                ),
            );
        }

        let y_count = axis_tick_target_count(
            plot.height,
            AXIS_Y_TARGET_SPACING_PX,
            AXIS_MIN_TICKS,
            AXIS_MAX_TICKS,
        );
        let y_ticks = linear_ticks(self.model.y_scale.domain(), y_count);
        for value in &y_ticks.values {
            let y = plot.top + self.model.y_scale.value_to_pixel(*value, plot.height)?;
            if tick_len > 0.0 {
                frame.push_line(
                    ChartLayerKind::Axis,
                    LinePrimitive::new(
                        plot.left - tick_len,
                        y,
                        plot.left,
                        y,
                        1.0,
                        self.style.axis_line_color,
                    ),
                );
            }
            frame.push_text(
                ChartLayerKind::Axis,
                TextPrimitive::new(
                    format_tick_label(*value, y_ticks.step),
                    plot.left - tick_len - 2.0,
                    y - self.style.axis_label_font_size_px * 0.5,
                    self.style.axis_label_font_size_px,
                    self.style.axis_label_color,
                    TextHAlign::Right,
                ),
            );
        }

        Ok(())
    }
}
