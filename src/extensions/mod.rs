pub mod markers;
pub mod observers;
pub mod regions;

pub use markers::{MarkerVisibility, PlacedPointMarker, markers_in_cursor_column, place_point_markers};
pub use observers::{ChartObserver, ObserverContext, ObserverEvent};
pub use regions::{Region, RegionBand, RegionLabel, RegionStyling, project_region_bands};
