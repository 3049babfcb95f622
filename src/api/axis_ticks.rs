pub(super) const AXIS_X_TARGET_SPACING_PX: f64 = 72.0;
pub(super) const AXIS_Y_TARGET_SPACING_PX: f64 = 32.0;
pub(super) const AXIS_MIN_TICKS: usize = 2;
pub(super) const AXIS_MAX_TICKS: usize = 12;

/// Tick values selected for one axis plus the step they were built from.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct TickSet {
    pub values: Vec<f64>,
    pub step: f64,
}

impl TickSet {
    pub(super) fn empty() -> Self {
        Self {
            values: Vec::new(),
            step: 0.0,
        }
    }
}

pub(super) fn axis_tick_target_count(
    axis_span_px: f64,
    target_spacing_px: f64,
    min_ticks: usize,
    max_ticks: usize,
) -> usize {
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 {
        return min_ticks;
    }
    if !target_spacing_px.is_finite() || target_spacing_px <= 0.0 {
        return min_ticks;
    }

    let raw = (axis_span_px / target_spacing_px).floor() as usize + 1;
    raw.clamp(min_ticks, max_ticks)
}

/// Rounds a raw step up to the nearest 1/2/5 ladder value.
pub(super) fn nice_step(raw_step: f64) -> f64 {
    if !raw_step.is_finite() || raw_step <= 0.0 {
        return raw_step;
    }

    let magnitude = 10.0f64.powf(raw_step.log10().floor());
    let residual = raw_step / magnitude;
    let factor = if residual > 5.0 {
        10.0
    } else if residual > 2.0 {
        5.0
    } else if residual > 1.0 {
        2.0
    } else {
        1.0
    };
    magnitude * factor
}

/// Selects nice tick values inside a domain.
///
/// Ticks start at the first ladder multiple inside the domain and never
/// exceed its upper bound.
pub(super) fn linear_ticks(domain: (f64, f64), target_count: usize) -> TickSet {
    let (start, end) = (domain.0.min(domain.1), domain.0.max(domain.1));
    let span = end - start;
    if !span.is_finite() || span <= 0.0 || target_count < 2 {
        return TickSet::empty();
    }

    let step = nice_step(span / (target_count - 1) as f64);
    if !step.is_finite() || step <= 0.0 {
        return TickSet::empty();
    }

    let mut values = Vec::new();
    let mut tick = (start / step).ceil() * step;
    let limit = end + step * 1e-9;
    while tick <= limit && values.len() <= AXIS_MAX_TICKS * 4 {
        values.push(tick);
        tick += step;
    }

    TickSet { values, step }
}

/// Formats one tick label with decimals derived from the step size.
pub(super) fn format_tick_label(value: f64, step: f64) -> String {
    let decimals = if !step.is_finite() || step <= 0.0 || step >= 1.0 {
        0
    } else {
        (-step.log10().floor() as i32).clamp(0, 6) as usize
    };
    format!("{value:.decimals$}")
}
