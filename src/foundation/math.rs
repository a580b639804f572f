//! Blending and ramp helpers shared by the stage interpolators.

use crate::foundation::core::ElementState;

/// Unclamped linear blend. `t` outside `[0, 1]` extrapolates past the endpoints.
pub trait Lerp: Sized {
    /// Blend from `a` (at `t = 0`) to `b` (at `t = 1`).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for ElementState {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            x: f64::lerp(&a.x, &b.x, t),
            y: f64::lerp(&a.y, &b.y, t),
            z: f64::lerp(&a.z, &b.z, t),
            scale: f64::lerp(&a.scale, &b.scale, t),
        }
    }
}

#[inline]
/// Clamp scalar value to normalized range `[0, 1]`.
pub fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

#[inline]
/// Floor-at-zero linear ramp: `max(0, (x - start) * rate)`.
///
/// Not clamped above; callers decide whether overshoot is meaningful.
pub fn ramp(x: f64, start: f64, rate: f64) -> f64 {
    ((x - start) * rate).max(0.0)
}

#[inline]
/// Same as [`ramp`] but expressed as a window length (`rate = 1 / span`).
pub fn ramp_over(x: f64, start: f64, span: f64) -> f64 {
    ((x - start) / span).max(0.0)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
