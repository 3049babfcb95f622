use crate::core::{PlotRect, Viewport};
use crate::error::ChartResult;
use crate::extensions::{ChartObserver, ObserverContext, ObserverEvent};
use crate::render::Renderer;

use super::chart_model::ChartModel;
use super::validation::validate_render_style;
use super::{ChartEngineConfig, RenderStyle};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` coordinates axis scales, series data, scrub interaction
/// state, and renderer calls.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) model: ChartModel,
    pub(super) config: ChartEngineConfig,
    pub(super) style: RenderStyle,
    pub(super) observers: Vec<Box<dyn ChartObserver>>,
}

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.model.viewport
    }

    pub fn plot_rect(&self) -> ChartResult<PlotRect> {
        self.model.plot_rect()
    }

    #[must_use]
    pub fn x_domain(&self) -> (f64, f64) {
        self.model.x_scale.domain()
    }

    #[must_use]
    pub fn y_domain(&self) -> (f64, f64) {
        self.model.y_scale.domain()
    }

    /// Maps a domain x value to widget-space pixels.
    pub fn map_x_to_pixel(&self, x: f64) -> ChartResult<f64> {
        let plot = self.model.plot_rect()?;
        Ok(plot.left + self.model.x_scale.x_to_pixel(x, plot.width)?)
    }

    /// Maps a widget-space pixel to a domain x value.
    pub fn map_pixel_to_x(&self, pixel: f64) -> ChartResult<f64> {
        let plot = self.model.plot_rect()?;
        self.model.x_scale.pixel_to_x(pixel - plot.left, plot.width)
    }

    /// Maps a domain y value to widget-space pixels.
    pub fn map_value_to_pixel(&self, value: f64) -> ChartResult<f64> {
        let plot = self.model.plot_rect()?;
        Ok(plot.top + self.model.y_scale.value_to_pixel(value, plot.height)?)
    }

    /// Maps a widget-space pixel to a domain y value.
    pub fn map_pixel_to_value(&self, pixel: f64) -> ChartResult<f64> {
        let plot = self.model.plot_rect()?;
        self.model
            .y_scale
            .pixel_to_value(pixel - plot.top, plot.height)
    }

    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.style
    }

    pub fn set_render_style(&mut self, style: RenderStyle) -> ChartResult<()> {
        validate_render_style(style)?;
        self.style = style;
        Ok(())
    }

    pub fn register_observer(&mut self, observer: Box<dyn ChartObserver>) {
        self.observers.push(observer);
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)?;
        self.emit_observer_event(ObserverEvent::Rendered);
        Ok(())
    }

    /// Renders the frame into an external cairo context.
    ///
    /// This path is used by host draw callbacks while keeping the renderer
    /// implementation decoupled from toolkit-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)?;
        self.emit_observer_event(ObserverEvent::Rendered);
        Ok(())
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub(super) fn emit_observer_event(&mut self, event: ObserverEvent) {
        if self.observers.is_empty() {
            return;
        }
        let context = ObserverContext {
            viewport: self.model.viewport,
            x_domain: self.model.x_scale.domain(),
            y_domain: self.model.y_scale.domain(),
            series_count: self.model.series.len(),
            scrub: self.model.scrub.state().clone(),
        };
        for observer in &mut self.observers {
            observer.on_event(&event, &context);
        }
    }
}
