mod axis_ticks;
mod chart_model;
mod data_controller;
mod engine;
mod engine_config;
mod engine_init;
mod interaction_controller;
mod layout_helpers;
mod render_frame_builder;
mod render_style;
mod snap_resolver;
mod snapshot;
mod tooltip_layout;
mod validation;

pub use engine::ChartEngine;
pub use engine_config::ChartEngineConfig;
pub use render_style::{DEFAULT_SERIES_PALETTE, RenderStyle};
pub use snapshot::{ChartSnapshot, SeriesSummary};
