//! Frame-rate independent exponential smoothing
//!
//! The rule everywhere in the creature layer: a value approaches its target
//! by a fraction `1 - exp(-rate * dt)` per update. Unlike a fixed per-tick
//! weight, the result after a span of simulated time is the same whether it
//! was stepped at 30 Hz or 144 Hz.

use crate::math::Vec3;
use std::f32::consts::PI;

/// Blend fraction for one update of length `dt` at the given convergence rate
pub fn smooth_factor(rate: f32, dt: f32) -> f32 {
    1.0 - (-rate * dt.max(0.0)).exp()
}

/// Move a scalar toward `target`
pub fn smooth_toward(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    current + (target - current) * smooth_factor(rate, dt)
}

/// Move a position toward `target`
pub fn smooth_vec_toward(current: Vec3, target: Vec3, rate: f32, dt: f32) -> Vec3 {
    current.lerp(&target, smooth_factor(rate, dt))
}

/// Move an angle toward `target` along the shortest arc, wrap-aware
pub fn smooth_angle_toward(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    let mut delta = (target - current).rem_euclid(2.0 * PI);
    if delta > PI {
        delta -= 2.0 * PI;
    }
    current + delta * smooth_factor(rate, dt)
}
