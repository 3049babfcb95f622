use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, SamplePoint};
use crate::error::{ChartError, ChartResult};

/// Tuning controls for horizontal domain fitting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct XScaleTuning {
    /// Symmetric padding added on both sides as a fraction of the fitted span.
    pub padding_ratio: f64,
    /// Minimum span used to widen an all-equal-x data set.
    pub min_span_absolute: f64,
}

impl Default for XScaleTuning {
    fn default() -> Self {
        Self {
            padding_ratio: 0.0,
            min_span_absolute: 1.0,
        }
    }
}

impl XScaleTuning {
    fn validate(self) -> ChartResult<Self> {
        if !self.padding_ratio.is_finite() || self.padding_ratio < 0.0 {
            return Err(ChartError::InvalidData(
                "x scale padding ratio must be finite and >= 0".to_owned(),
            ));
        }
        if !self.min_span_absolute.is_finite() || self.min_span_absolute <= 0.0 {
            return Err(ChartError::InvalidData(
                "x scale min span must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Horizontal axis domain fitted from every series' x values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct XScale {
    start: f64,
    end: f64,
}

impl XScale {
    pub fn new(start: f64, end: f64) -> ChartResult<Self> {
        let (start, end) = normalize_range(start, end, 1.0)?;
        Ok(Self { start, end })
    }

    /// Fits the domain from every series, then applies tuning.
    pub fn fit<'a, I>(series: I, tuning: XScaleTuning) -> ChartResult<Self>
    where
        I: IntoIterator<Item = &'a [SamplePoint]>,
    {
        let tuning = tuning.validate()?;

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut seen = false;
        for points in series {
            for point in points {
                if !point.x.is_finite() {
                    return Err(ChartError::InvalidData(
                        "x values must be finite".to_owned(),
                    ));
                }
                min = min.min(point.x);
                max = max.max(point.x);
                seen = true;
            }
        }

        if !seen {
            return Err(ChartError::InvalidData(
                "x scale cannot be fitted from empty data".to_owned(),
            ));
        }

        let (start, end) = normalize_range(min, max, tuning.min_span_absolute)?;
        let pad = (end - start) * tuning.padding_ratio;
        Ok(Self {
            start: start - pad,
            end: end + pad,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.start, self.end)
    }

    pub fn x_to_pixel(self, x: f64, plot_width: f64) -> ChartResult<f64> {
        self.linear()?.domain_to_pixel(x, plot_width)
    }

    pub fn pixel_to_x(self, pixel: f64, plot_width: f64) -> ChartResult<f64> {
        self.linear()?.pixel_to_domain(pixel, plot_width)
    }

    fn linear(self) -> ChartResult<LinearScale> {
        LinearScale::new(self.start, self.end)
    }
}

pub(crate) fn normalize_range(start: f64, end: f64, min_span: f64) -> ChartResult<(f64, f64)> {
    if !start.is_finite() || !end.is_finite() {
        return Err(ChartError::InvalidData(
            "scale range must be finite".to_owned(),
        ));
    }

    if start == end {
        let half = min_span / 2.0;
        return Ok((start - half, end + half));
    }

    Ok((start.min(end), start.max(end)))
}
