use serde::{Deserialize, Serialize};

use crate::core::{PlotRect, YScale};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

pub const DEFAULT_REGION_FILL_OPACITY: f64 = 0.5;
pub const DEFAULT_REGION_LABEL_OFFSET_LEFT: f64 = 20.0;
pub const DEFAULT_REGION_LABEL_OFFSET_TOP: f64 = 0.0;

/// Labeled horizontal band covering the full plot width between two
/// y-domain values.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub from: f64,
    pub to: f64,
    pub fill: Color,
    pub fill_opacity: Option<f64>,
    pub label: Option<String>,
    pub label_offset_left: Option<f64>,
    pub label_offset_top: Option<f64>,
}

impl Region {
    #[must_use]
    pub fn new(from: f64, to: f64, fill: Color) -> Self {
        Self {
            from,
            to,
            fill,
            fill_opacity: None,
            label: None,
            label_offset_left: None,
            label_offset_top: None,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_fill_opacity(mut self, opacity: f64) -> Self {
        self.fill_opacity = Some(opacity);
        self
    }

    #[must_use]
    pub fn with_label_offset(mut self, left: f64, top: f64) -> Self {
        self.label_offset_left = Some(left);
        self.label_offset_top = Some(top);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.from.is_finite() || !self.to.is_finite() {
            return Err(ChartError::InvalidData(
                "region bounds must be finite".to_owned(),
            ));
        }
        self.fill.validate()?;
        validate_opacity(self.fill_opacity, "region fill opacity")?;
        validate_offset(self.label_offset_left, "region label offset left")?;
        validate_offset(self.label_offset_top, "region label offset top")?;
        Ok(())
    }
}

/// Shared styling defaults applied to every region that carries no
/// per-region override.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RegionStyling {
    pub fill_opacity: Option<f64>,
    pub label_offset_left: Option<f64>,
    pub label_offset_top: Option<f64>,
}

impl RegionStyling {
    pub fn validate(self) -> ChartResult<()> {
        validate_opacity(self.fill_opacity, "region styling fill opacity")?;
        validate_offset(self.label_offset_left, "region styling label offset left")?;
        validate_offset(self.label_offset_top, "region styling label offset top")?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegionLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Region band projected into widget coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionBand {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Color,
    pub label: Option<RegionLabel>,
}

/// Projects regions into normalized bands.
///
/// Band rectangles are normalized regardless of `from`/`to` order. Effective
/// fill opacity and label offsets resolve per-region override, then shared
/// styling, then the built-in defaults.
pub fn project_region_bands(
    regions: &[Region],
    styling: RegionStyling,
    y_scale: YScale,
    plot: PlotRect,
) -> ChartResult<Vec<RegionBand>> {
    styling.validate()?;

    let mut bands = Vec::with_capacity(regions.len());
    for region in regions {
        region.validate()?;

        let from_y = plot.top + y_scale.value_to_pixel(region.from, plot.height)?;
        let to_y = plot.top + y_scale.value_to_pixel(region.to, plot.height)?;

        let opacity = region
            .fill_opacity
            .or(styling.fill_opacity)
            .unwrap_or(DEFAULT_REGION_FILL_OPACITY);
        let offset_left = region
            .label_offset_left
            .or(styling.label_offset_left)
            .unwrap_or(DEFAULT_REGION_LABEL_OFFSET_LEFT);
        let offset_top = region
            .label_offset_top
            .or(styling.label_offset_top)
            .unwrap_or(DEFAULT_REGION_LABEL_OFFSET_TOP);

        let label = region.label.as_ref().map(|text| RegionLabel {
            text: text.clone(),
            x: plot.left + offset_left,
            y: to_y + offset_top,
        });

        bands.push(RegionBand {
            x: plot.left,
            y: from_y.min(to_y),
            width: plot.width,
            height: (to_y - from_y).abs(),
            fill: region.fill.with_opacity(opacity),
            label,
        });
    }

    Ok(bands)
}

fn validate_opacity(value: Option<f64>, name: &str) -> ChartResult<()> {
    if let Some(value) = value {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(ChartError::InvalidData(format!(
                "{name} must be finite and in [0, 1]"
            )));
        }
    }
    Ok(())
}

fn validate_offset(value: Option<f64>, name: &str) -> ChartResult<()> {
    if let Some(value) = value {
        if !value.is_finite() {
            return Err(ChartError::InvalidData(format!("{name} must be finite")));
        }
    }
    Ok(())
}
