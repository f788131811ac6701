use std::f64::consts::FRAC_PI_2;

use crate::foundation::core::Point;
use crate::foundation::error::{GnomonError, GnomonResult};
use crate::geometry::{MIN_EXTENT, PHI};

/// Polyline sampling parameters for the spiral trace.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpiralParams {
    slices: u32,
    decay: f64,
}

impl SpiralParams {
    /// Golden defaults: 1000 slices per quarter turn, with the per-step decay
    /// tuned so a quarter turn of steps contracts the radius by about 1/φ.
    pub fn golden() -> Self {
        // 0.78 narrows the raw per-step decay (1/φ)/slices to the rate that
        // actually lands on the dissection's pivots; carried as-is from the
        // tuned curve.
        Self {
            slices: 1000,
            decay: 1.0 - (1.0 / PHI) / 1000.0 * 0.78,
        }
    }

    /// Create validated parameters.
    ///
    /// `decay` must lie strictly inside `(0, 1)` — at 1 or above the trace
    /// never terminates — and `slices` must be non-zero.
    pub fn new(slices: u32, decay: f64) -> GnomonResult<Self> {
        if slices == 0 {
            return Err(GnomonError::validation("SpiralParams slices must be > 0"));
        }
        if !(decay > 0.0 && decay < 1.0) {
            return Err(GnomonError::validation(
                "SpiralParams decay must be in (0, 1)",
            ));
        }
        Ok(Self { slices, decay })
    }

    /// Steps per quarter turn.
    pub fn slices(self) -> u32 {
        self.slices
    }

    /// Per-step radius multiplier.
    pub fn decay(self) -> f64 {
        self.decay
    }

    /// Angular increment per step.
    pub fn step_angle(self) -> f64 {
        FRAC_PI_2 / f64::from(self.slices)
    }
}

impl Default for SpiralParams {
    fn default() -> Self {
        Self::golden()
    }
}

/// Trace the logarithmic spiral through `pivots` with golden defaults.
///
/// See [`trace_with`].
pub fn trace(pivots: &[Point]) -> Vec<Point> {
    trace_with(pivots, SpiralParams::golden())
}

/// Trace the logarithmic spiral anchored by a pivot sequence.
///
/// The first pivot is the spiral's starting point and the last acts as its
/// asymptotic center. Points are emitted at a fixed angular increment with a
/// multiplicatively decaying radius until the radius falls to
/// [`MIN_EXTENT`]. Fewer than two pivots yield an empty polyline — the
/// defined behavior for a degenerate viewport, not an error.
pub fn trace_with(pivots: &[Point], params: SpiralParams) -> Vec<Point> {
    if pivots.len() < 2 {
        return Vec::new();
    }
    let start = pivots[0];
    let origin = pivots[pivots.len() - 1];

    let mut radius = origin.distance(start);
    let mut theta = (start.y - origin.y).atan2(start.x - origin.x);
    let dtheta = params.step_angle();

    let mut out = Vec::new();
    while radius > MIN_EXTENT {
        out.push(Point::new(
            origin.x + radius * theta.cos(),
            origin.y + radius * theta.sin(),
        ));
        theta += dtheta;
        radius *= params.decay;
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/spiral.rs"]
mod tests;
