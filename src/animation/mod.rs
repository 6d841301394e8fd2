//! Shared animation helpers
//!
//! Easing for keyframe/stage interpolation, and the exponential smoothing
//! discipline used by creature motion so behavior stays frame-rate
//! independent.

mod easing;
mod smoothing;

pub use easing::{ease, Easing};
pub use smoothing::{smooth_angle_toward, smooth_factor, smooth_toward, smooth_vec_toward};
