use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::interaction::ScrubState;
use crate::render::Renderer;

use super::ChartEngine;
use super::tooltip_layout::{format_readout_value, format_tooltip_date};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub name: String,
    pub points_len: usize,
}

/// Serializable engine summary for host debugging and contract tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub viewport: Viewport,
    pub x_domain: (f64, f64),
    pub y_domain: (f64, f64),
    pub series: Vec<SeriesSummary>,
    pub scrub: ScrubState,
    /// Tooltip date text for the currently snapped sample.
    pub tooltip_date: Option<String>,
    /// Value readout text for the currently snapped sample.
    pub readout_value: Option<String>,
}

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        let scrub = self.model.scrub.state().clone();
        let tooltip_date = scrub
            .snapped
            .as_ref()
            .map(|snapped| format_tooltip_date(snapped.x_value, self.style.tooltip_date_format));
        let readout_value = scrub
            .snapped
            .as_ref()
            .map(|snapped| format_readout_value(snapped.y_value, self.style.readout_precision));

        ChartSnapshot {
            viewport: self.model.viewport,
            x_domain: self.model.x_scale.domain(),
            y_domain: self.model.y_scale.domain(),
            series: self
                .model
                .series
                .iter()
                .map(|(name, points)| SeriesSummary {
                    name: name.clone(),
                    points_len: points.len(),
                })
                .collect(),
            scrub,
            tooltip_date,
            readout_value,
        }
    }

    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|err| ChartError::Serialization(err.to_string()))
    }
}
