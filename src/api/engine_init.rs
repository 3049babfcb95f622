use crate::core::{XScale, YScale};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::chart_model::{ChartModel, ChartModelBootstrap};
use super::{ChartEngine, ChartEngineConfig, RenderStyle};

impl<R: Renderer> ChartEngine<R> {
    /// Builds an engine with validated config and unit scales.
    ///
    /// Scales refit from data on the first series mutation.
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        config.validate()?;

        let model = ChartModel::new(ChartModelBootstrap {
            viewport: config.viewport,
            insets: config.insets,
            x_scale: XScale::new(0.0, 1.0)?,
            y_scale: YScale::new(0.0, 1.0)?,
        });

        Ok(Self {
            renderer,
            model,
            config,
            style: RenderStyle::default(),
            observers: Vec::new(),
        })
    }
}
