//! # Motion Helpers
//!
//! Time-based interpolation shared by the expansion transition and the
//! entrance animation. All functions take the current [`Instant`] explicitly
//! so animation state can be sampled deterministically in tests.

use std::time::{Duration, Instant};

/// Ease-out cubic: fast start, gentle settle.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Linear progress of an animation in `0.0..=1.0`.
///
/// Returns `0.0` before `start` and `1.0` once `duration` has elapsed.
pub fn progress(start: Instant, now: Instant, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    (elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0)
}

/// Interpolate between two column counts, rounding to the nearest cell.
pub fn lerp_u16(from: u16, to: u16, t: f64) -> u16 {
    let t = t.clamp(0.0, 1.0);
    let value = f64::from(from) + (f64::from(to) - f64::from(from)) * t;
    value.round().clamp(0.0, f64::from(u16::MAX)) as u16
}
