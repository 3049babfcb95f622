use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::interaction::{ScrubSample, ScrubState, SnappedSample};

/// Read-only state snapshot passed to observer hooks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObserverContext {
    pub viewport: Viewport,
    pub x_domain: (f64, f64),
    pub y_domain: (f64, f64),
    pub series_count: usize,
    pub scrub: ScrubState,
}

/// Event stream exposed to observers.
///
/// The scrub events carry the clamped/normalized cursor sample plus the
/// resolved data sample, which covers both the gesture callbacks and the
/// value-readout callback of the original widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ObserverEvent {
    DataUpdated {
        series: String,
        points_len: usize,
    },
    SeriesRemoved {
        series: String,
    },
    SeriesCleared,
    ScrubStarted {
        sample: ScrubSample,
        snapped: Option<SnappedSample>,
    },
    ScrubMoved {
        sample: ScrubSample,
        snapped: Option<SnappedSample>,
    },
    ScrubEnded {
        sample: ScrubSample,
        snapped: Option<SnappedSample>,
    },
    Rendered,
}

/// Extension hook interface for bounded custom logic.
///
/// Observers can watch events and read engine context without mutating
/// chart internals directly.
pub trait ChartObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &ObserverEvent, context: &ObserverContext);
}
