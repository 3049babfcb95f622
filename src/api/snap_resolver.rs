use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::core::{PlotRect, SamplePoint, XScale, YScale};
use crate::interaction::SnappedSample;
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Resolves the data sample nearest to a cursor pixel x.
    ///
    /// Every series contributes its nearest projected sample; the overall
    /// winner is the smallest pixel distance, ties broken by series
    /// insertion order then point index.
    pub(super) fn resolve_snap(&self, cursor_x: f64) -> Option<SnappedSample> {
        let plot = self.model.plot_rect().ok()?;

        let mut candidates: SmallVec<[(OrderedFloat<f64>, SnappedSample); 4]> = SmallVec::new();
        for (name, points) in &self.model.series {
            if let Some(candidate) = nearest_in_series(
                name,
                points,
                self.model.x_scale,
                self.model.y_scale,
                plot,
                cursor_x,
            ) {
                candidates.push(candidate);
            }
        }

        candidates
            .into_iter()
            .min_by_key(|item| item.0)
            .map(|(_, snap)| snap)
    }
}

fn nearest_in_series(
    name: &str,
    points: &[SamplePoint],
    x_scale: XScale,
    y_scale: YScale,
    plot: PlotRect,
    cursor_x: f64,
) -> Option<(OrderedFloat<f64>, SnappedSample)> {
    let mut best: Option<(OrderedFloat<f64>, SnappedSample)> = None;
    for (point_index, point) in points.iter().enumerate() {
        let x_px = match x_scale.x_to_pixel(point.x, plot.width) {
            Ok(value) => plot.left + value,
            Err(_) => continue,
        };
        let y_px = match y_scale.value_to_pixel(point.y, plot.height) {
            Ok(value) => plot.top + value,
            Err(_) => continue,
        };
        let dist = OrderedFloat((x_px - cursor_x).abs());
        match best {
            Some((current, _)) if current <= dist => {}
            _ => {
                best = Some((
                    dist,
                    SnappedSample {
                        x_px,
                        y_px,
                        x_value: point.x,
                        y_value: point.y,
                        series: name.to_owned(),
                        point_index,
                    },
                ))
            }
        }
    }
    best
}
