use serde::{Deserialize, Serialize};

use crate::core::{PlotRect, SamplePoint, XScale, YScale};
use crate::error::{ChartError, ChartResult};

/// Visibility policy for per-point circle markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MarkerVisibility {
    /// No markers are drawn.
    #[default]
    Hidden,
    /// Markers are drawn on every sample of every series.
    Always,
    /// Markers are drawn only on the column under the scrub cursor while a
    /// scrub gesture is active.
    ScrubOnly,
}

/// Marker projected into widget coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedPointMarker {
    pub series: String,
    pub point_index: usize,
    pub x: f64,
    pub y: f64,
}

/// Projects every sample of every series into marker positions.
///
/// Marker x positions are clamped so a circle of `radius_px` never leaves
/// the horizontal plot span.
pub fn place_point_markers<'a, I>(
    series: I,
    x_scale: XScale,
    y_scale: YScale,
    plot: PlotRect,
    radius_px: f64,
) -> ChartResult<Vec<PlacedPointMarker>>
where
    I: IntoIterator<Item = (&'a str, &'a [SamplePoint])>,
{
    if !radius_px.is_finite() || radius_px <= 0.0 {
        return Err(ChartError::InvalidData(
            "marker radius must be finite and > 0".to_owned(),
        ));
    }

    let mut placed = Vec::new();
    for (name, points) in series {
        for (point_index, point) in points.iter().enumerate() {
            let x_raw = plot.left + x_scale.x_to_pixel(point.x, plot.width)?;
            let y = plot.top + y_scale.value_to_pixel(point.y, plot.height)?;
            placed.push(PlacedPointMarker {
                series: name.to_owned(),
                point_index,
                x: clamp_x(x_raw, radius_px, plot),
                y,
            });
        }
    }

    Ok(placed)
}

/// Keeps markers that share the cursor's pixel column.
///
/// Column identity is the truncated pixel position, so every series' marker
/// at the scrubbed sample column survives the filter.
#[must_use]
pub fn markers_in_cursor_column(
    markers: &[PlacedPointMarker],
    cursor_x: f64,
) -> Vec<PlacedPointMarker> {
    markers
        .iter()
        .filter(|marker| marker.x.trunc() == cursor_x.trunc())
        .cloned()
        .collect()
}

fn clamp_x(x: f64, span_half: f64, plot: PlotRect) -> f64 {
    if plot.width <= 2.0 * span_half {
        plot.left + plot.width * 0.5
    } else {
        x.clamp(plot.left + span_half, plot.right() - span_half)
    }
}
