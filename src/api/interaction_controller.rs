use tracing::trace;

use crate::error::ChartResult;
use crate::extensions::ObserverEvent;
use crate::interaction::ScrubState;
use crate::render::Renderer;

use super::ChartEngine;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScrubStage {
    Begin,
    Move,
    End,
    Cancel,
}

impl<R: Renderer> ChartEngine<R> {
    /// Starts a scrub gesture at a widget-space position.
    pub fn scrub_begin(&mut self, x: f64, y: f64) -> ChartResult<()> {
        self.handle_scrub(ScrubStage::Begin, x, y)
    }

    /// Continues a scrub gesture at a widget-space position.
    pub fn scrub_move(&mut self, x: f64, y: f64) -> ChartResult<()> {
        self.handle_scrub(ScrubStage::Move, x, y)
    }

    /// Ends a scrub gesture at its final widget-space position.
    pub fn scrub_end(&mut self, x: f64, y: f64) -> ChartResult<()> {
        self.handle_scrub(ScrubStage::End, x, y)
    }

    /// Delivers a terminated gesture.
    ///
    /// Termination follows the exact release path; only the trace output
    /// distinguishes the two.
    pub fn scrub_cancel(&mut self, x: f64, y: f64) -> ChartResult<()> {
        self.handle_scrub(ScrubStage::Cancel, x, y)
    }

    #[must_use]
    pub fn scrub_state(&self) -> ScrubState {
        self.model.scrub.state().clone()
    }

    fn handle_scrub(&mut self, stage: ScrubStage, x: f64, y: f64) -> ChartResult<()> {
        if !self.config.scrub_enabled {
            return Ok(());
        }

        let plot = self.model.plot_rect()?;
        let sample = match stage {
            ScrubStage::Begin => self.model.scrub.on_begin(plot, x, y),
            ScrubStage::Move => self.model.scrub.on_move(plot, x, y),
            ScrubStage::End | ScrubStage::Cancel => self.model.scrub.on_release(plot, x, y),
        };

        let snapped = self.resolve_snap(sample.cursor_x);
        match stage {
            ScrubStage::Begin => trace!(cursor_x = sample.cursor_x, "scrub begin"),
            ScrubStage::Move => trace!(cursor_x = sample.cursor_x, "scrub move"),
            ScrubStage::End => trace!(cursor_x = sample.cursor_x, "scrub end"),
            ScrubStage::Cancel => trace!(cursor_x = sample.cursor_x, "scrub cancelled"),
        }

        let event = match stage {
            ScrubStage::Begin => {
                self.model.scrub.set_snap(snapped.clone());
                ObserverEvent::ScrubStarted { sample, snapped }
            }
            ScrubStage::Move => {
                self.model.scrub.set_snap(snapped.clone());
                ObserverEvent::ScrubMoved { sample, snapped }
            }
            // Release already cleared the retained snap; the event still
            // carries the sample resolved at the final position.
            ScrubStage::End | ScrubStage::Cancel => ObserverEvent::ScrubEnded { sample, snapped },
        };
        self.emit_observer_event(event);
        Ok(())
    }
}
