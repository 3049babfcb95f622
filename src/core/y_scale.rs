use serde::{Deserialize, Serialize};

use crate::core::x_scale::normalize_range;
use crate::core::{LinearScale, SamplePoint};
use crate::error::{ChartError, ChartResult};

/// Vertical axis domain fitted from every series' y values.
///
/// Pixel mapping is inverted so larger values land closer to the plot top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YScale {
    min: f64,
    max: f64,
}

impl YScale {
    pub fn new(min: f64, max: f64) -> ChartResult<Self> {
        let (min, max) = normalize_range(min, max, 1.0)?;
        Ok(Self { min, max })
    }

    /// Fits the domain from every series and merges optional overrides.
    ///
    /// Overrides only ever widen the fitted domain: a floor above the fitted
    /// minimum (or a ceiling below the fitted maximum) is ignored.
    pub fn fit<'a, I>(series: I, floor: Option<f64>, ceiling: Option<f64>) -> ChartResult<Self>
    where
        I: IntoIterator<Item = &'a [SamplePoint]>,
    {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut seen = false;
        for points in series {
            for point in points {
                if !point.y.is_finite() {
                    return Err(ChartError::InvalidData(
                        "y values must be finite".to_owned(),
                    ));
                }
                min = min.min(point.y);
                max = max.max(point.y);
                seen = true;
            }
        }

        if !seen {
            return Err(ChartError::InvalidData(
                "y scale cannot be fitted from empty data".to_owned(),
            ));
        }

        if let Some(floor) = floor {
            if !floor.is_finite() {
                return Err(ChartError::InvalidData(
                    "y floor override must be finite".to_owned(),
                ));
            }
            min = min.min(floor);
        }
        if let Some(ceiling) = ceiling {
            if !ceiling.is_finite() {
                return Err(ChartError::InvalidData(
                    "y ceiling override must be finite".to_owned(),
                ));
            }
            max = max.max(ceiling);
        }

        let (min, max) = normalize_range(min, max, 1.0)?;
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.min, self.max)
    }

    pub fn value_to_pixel(self, value: f64, plot_height: f64) -> ChartResult<f64> {
        let raw = self.linear()?.domain_to_pixel(value, plot_height)?;
        Ok(plot_height - raw)
    }

    pub fn pixel_to_value(self, pixel: f64, plot_height: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }
        self.linear()?.pixel_to_domain(plot_height - pixel, plot_height)
    }

    fn linear(self) -> ChartResult<LinearScale> {
        LinearScale::new(self.min, self.max)
    }
}
