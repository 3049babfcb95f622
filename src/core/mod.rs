pub mod area_series;
pub mod line_series;
pub mod scale;
pub mod types;
pub mod x_scale;
pub mod y_scale;

pub use area_series::{AreaGeometry, AreaVertex, project_area_geometry};
pub use line_series::{LineSegment, PolylineVertex, project_line_segments, project_polyline};
pub use scale::LinearScale;
pub use types::{Insets, PlotRect, SamplePoint, Viewport};
pub use x_scale::{XScale, XScaleTuning};
pub use y_scale::YScale;
