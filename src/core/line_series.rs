use serde::{Deserialize, Serialize};

use crate::core::{PlotRect, SamplePoint, XScale, YScale};
use crate::error::ChartResult;

/// Projected polyline vertex in widget coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolylineVertex {
    pub x: f64,
    pub y: f64,
}

/// Projected line segment in widget coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Projects a series into widget-space polyline vertices.
///
/// The function is deterministic and side-effect free so both rendering and
/// tests can consume the exact same geometry output.
pub fn project_polyline(
    points: &[SamplePoint],
    x_scale: XScale,
    y_scale: YScale,
    plot: PlotRect,
) -> ChartResult<Vec<PolylineVertex>> {
    let mut vertices = Vec::with_capacity(points.len());
    for point in points {
        let x = plot.left + x_scale.x_to_pixel(point.x, plot.width)?;
        let y = plot.top + y_scale.value_to_pixel(point.y, plot.height)?;
        vertices.push(PolylineVertex { x, y });
    }
    Ok(vertices)
}

/// Projects a series into adjacent line segments.
///
/// Series shorter than two points produce no segments.
pub fn project_line_segments(
    points: &[SamplePoint],
    x_scale: XScale,
    y_scale: YScale,
    plot: PlotRect,
) -> ChartResult<Vec<LineSegment>> {
    if points.len() < 2 {
        return Ok(Vec::new());
    }

    let vertices = project_polyline(points, x_scale, y_scale, plot)?;
    let mut segments = Vec::with_capacity(vertices.len() - 1);
    for pair in vertices.windows(2) {
        segments.push(LineSegment {
            x1: pair[0].x,
            y1: pair[0].y,
            x2: pair[1].x,
            y2: pair[1].y,
        });
    }

    Ok(segments)
}
