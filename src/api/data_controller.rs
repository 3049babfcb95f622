use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::core::{SamplePoint, XScale, YScale};
use crate::error::{ChartError, ChartResult};
use crate::extensions::{ObserverEvent, Region, RegionStyling};
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Replaces one named series and refits both scales.
    ///
    /// Points are canonicalized (finite-checked, sorted by x) before they
    /// are stored. Replacing a series with an empty vector keeps the series
    /// registered but contributes nothing to the scales.
    pub fn set_series(
        &mut self,
        name: impl Into<String>,
        points: Vec<SamplePoint>,
    ) -> ChartResult<()> {
        let name = name.into();
        let original_count = points.len();
        let points = canonicalize_points(points)?;
        debug!(
            series = %name,
            original_count,
            canonical_count = points.len(),
            "set series"
        );

        let points_len = points.len();
        self.model.series.insert(name.clone(), points);
        self.refit_scales()?;
        self.emit_observer_event(ObserverEvent::DataUpdated {
            series: name,
            points_len,
        });
        Ok(())
    }

    /// Removes one named series. Returns whether it existed.
    pub fn remove_series(&mut self, name: &str) -> ChartResult<bool> {
        if self.model.series.shift_remove(name).is_none() {
            return Ok(false);
        }
        trace!(series = %name, "remove series");
        self.refit_scales()?;
        self.emit_observer_event(ObserverEvent::SeriesRemoved {
            series: name.to_owned(),
        });
        Ok(true)
    }

    /// Drops every series and returns the scales to their unit domains.
    pub fn clear_series(&mut self) -> ChartResult<()> {
        self.model.series.clear();
        self.refit_scales()?;
        self.emit_observer_event(ObserverEvent::SeriesCleared);
        Ok(())
    }

    #[must_use]
    pub fn series_names(&self) -> Vec<&str> {
        self.model.series.keys().map(String::as_str).collect()
    }

    #[must_use]
    pub fn series_points(&self, name: &str) -> Option<&[SamplePoint]> {
        self.model.series.get(name).map(Vec::as_slice)
    }

    #[must_use]
    pub fn has_data(&self) -> bool {
        self.model.has_data()
    }

    pub fn set_regions(&mut self, regions: Vec<Region>) -> ChartResult<()> {
        for region in &regions {
            region.validate()?;
        }
        debug!(region_count = regions.len(), "set regions");
        self.model.regions = regions;
        Ok(())
    }

    pub fn set_region_styling(&mut self, styling: RegionStyling) -> ChartResult<()> {
        styling.validate()?;
        self.model.region_styling = styling;
        Ok(())
    }

    #[must_use]
    pub fn regions(&self) -> &[Region] {
        &self.model.regions
    }

    fn refit_scales(&mut self) -> ChartResult<()> {
        if !self.model.has_data() {
            self.model.x_scale = XScale::new(0.0, 1.0)?;
            self.model.y_scale = YScale::new(0.0, 1.0)?;
            return Ok(());
        }

        let x_scale = XScale::fit(self.model.series_slices(), self.config.x_tuning)?;
        let y_scale = YScale::fit(
            self.model.series_slices(),
            self.config.y_floor,
            self.config.y_ceiling,
        )?;
        self.model.x_scale = x_scale;
        self.model.y_scale = y_scale;
        Ok(())
    }
}

fn canonicalize_points(mut points: Vec<SamplePoint>) -> ChartResult<Vec<SamplePoint>> {
    for point in &points {
        if !point.x.is_finite() || !point.y.is_finite() {
            return Err(ChartError::InvalidData(
                "sample coordinates must be finite".to_owned(),
            ));
        }
    }
    points.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal));
    Ok(points)
}
