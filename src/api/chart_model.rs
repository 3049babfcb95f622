use indexmap::IndexMap;

use crate::core::{Insets, PlotRect, SamplePoint, Viewport, XScale, YScale};
use crate::error::ChartResult;
use crate::extensions::{Region, RegionStyling};
use crate::interaction::ScrubTracker;

/// Core chart domain state.
///
/// Groups the mutable chart state (viewport, insets, scales, ordered series,
/// regions, scrub tracker) so controllers operate on one place.
pub struct ChartModel {
    pub(super) viewport: Viewport,
    pub(super) insets: Insets,
    pub(super) x_scale: XScale,
    pub(super) y_scale: YScale,
    pub(super) series: IndexMap<String, Vec<SamplePoint>>,
    pub(super) regions: Vec<Region>,
    pub(super) region_styling: RegionStyling,
    pub(super) scrub: ScrubTracker,
}

pub(super) struct ChartModelBootstrap {
    pub viewport: Viewport,
    pub insets: Insets,
    pub x_scale: XScale,
    pub y_scale: YScale,
}

impl ChartModel {
    #[must_use]
    pub(super) fn new(bootstrap: ChartModelBootstrap) -> Self {
        Self {
            viewport: bootstrap.viewport,
            insets: bootstrap.insets,
            x_scale: bootstrap.x_scale,
            y_scale: bootstrap.y_scale,
            series: IndexMap::new(),
            regions: Vec::new(),
            region_styling: RegionStyling::default(),
            scrub: ScrubTracker::default(),
        }
    }

    pub(super) fn plot_rect(&self) -> ChartResult<PlotRect> {
        self.insets.plot_rect(self.viewport)
    }

    pub(super) fn series_slices(&self) -> impl Iterator<Item = &[SamplePoint]> {
        self.series.values().map(Vec::as_slice)
    }

    pub(super) fn has_data(&self) -> bool {
        self.series.values().any(|points| !points.is_empty())
    }
}
