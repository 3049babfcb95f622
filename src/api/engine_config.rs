use crate::core::{Insets, Viewport, XScaleTuning};
use crate::error::{ChartError, ChartResult};
use crate::extensions::MarkerVisibility;

/// Validated construction parameters for [`super::ChartEngine`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChartEngineConfig {
    pub viewport: Viewport,
    pub insets: Insets,
    pub x_tuning: XScaleTuning,
    /// Widen-only lower bound merged into the fitted y domain.
    pub y_floor: Option<f64>,
    /// Widen-only upper bound merged into the fitted y domain.
    pub y_ceiling: Option<f64>,
    pub scrub_enabled: bool,
    pub show_areas: bool,
    pub marker_visibility: MarkerVisibility,
    /// Placeholder drawn when no series holds any sample.
    pub no_data_message: String,
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            // Room above the plot for the tooltip pill and below for x labels.
            insets: Insets::new(20.0, 48.0, 20.0, 28.0),
            x_tuning: XScaleTuning::default(),
            y_floor: None,
            y_ceiling: None,
            scrub_enabled: true,
            show_areas: true,
            marker_visibility: MarkerVisibility::default(),
            no_data_message: "No data available".to_owned(),
        }
    }

    #[must_use]
    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    #[must_use]
    pub fn with_x_tuning(mut self, tuning: XScaleTuning) -> Self {
        self.x_tuning = tuning;
        self
    }

    #[must_use]
    pub fn with_y_floor(mut self, floor: f64) -> Self {
        self.y_floor = Some(floor);
        self
    }

    #[must_use]
    pub fn with_y_ceiling(mut self, ceiling: f64) -> Self {
        self.y_ceiling = Some(ceiling);
        self
    }

    #[must_use]
    pub fn with_scrub_enabled(mut self, enabled: bool) -> Self {
        self.scrub_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_show_areas(mut self, show: bool) -> Self {
        self.show_areas = show;
        self
    }

    #[must_use]
    pub fn with_marker_visibility(mut self, visibility: MarkerVisibility) -> Self {
        self.marker_visibility = visibility;
        self
    }

    #[must_use]
    pub fn with_no_data_message(mut self, message: impl Into<String>) -> Self {
        self.no_data_message = message.into();
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.insets.plot_rect(self.viewport)?;

        for (value, name) in [(self.y_floor, "y floor"), (self.y_ceiling, "y ceiling")] {
            if let Some(value) = value {
                if !value.is_finite() {
                    return Err(ChartError::InvalidData(format!("{name} must be finite")));
                }
            }
        }
        if self.no_data_message.is_empty() {
            return Err(ChartError::InvalidData(
                "no-data message must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}
