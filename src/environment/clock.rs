//! Environment clock
//!
//! Computes the full environment state for an hour of day and throttles
//! recomputation to roughly once per wall-clock minute. Consumers keep
//! animating from the cached state between updates.

use std::f32::consts::PI;

use crate::animation::{ease, Easing};
use crate::data::SkyMode;
use crate::math::Vec3;

use super::keyframes::{bracketing, SkyColors};

/// Sun/moon arc state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CelestialState {
    /// Normalized screen-space position: x in [-1, 1] across the arc,
    /// y in [0, 1] with the apex at 1
    pub position: Vec3,
    /// True while the sun owns the sky (daytime window)
    pub is_sun: bool,
    /// Normalized progress through the current day/night window
    pub window_progress: f32,
}

/// Boolean effect toggles, each a pure window function of the hour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SkyEffects {
    pub stars: bool,
    pub milky_way: bool,
    pub aurora: bool,
    pub god_rays: bool,
}

impl SkyEffects {
    /// Bitmask for the flat boundary buffer
    pub fn bits(&self) -> u32 {
        (self.stars as u32)
            | (self.milky_way as u32) << 1
            | (self.aurora as u32) << 2
            | (self.god_rays as u32) << 3
    }
}

/// Complete environment snapshot for one hour of day
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvironmentState {
    pub hour_of_day: f32,
    pub sky: SkyColors,
    pub celestial: CelestialState,
    pub effects: SkyEffects,
    /// Global wind strength in [0, 1], feeds leaf sway and creature fur/tail
    pub wind_strength: f32,
    /// Accumulating wind phase base derived from the hour
    pub wind_phase: f32,
}

const SUNRISE: f32 = 6.0;
const SUNSET: f32 = 18.0;

/// Day length of the sun window (and, by symmetry, the moon window)
const DAY_SPAN: f32 = SUNSET - SUNRISE;

fn in_window(hour: f32, start: f32, end: f32) -> bool {
    if start <= end {
        hour >= start && hour < end
    } else {
        // Window spans midnight
        hour >= start || hour < end
    }
}

fn celestial(hour: f32) -> CelestialState {
    let is_sun = in_window(hour, SUNRISE, SUNSET);
    let progress = if is_sun {
        (hour - SUNRISE) / DAY_SPAN
    } else {
        let night_hour = if hour >= SUNSET { hour - SUNSET } else { hour + 24.0 - SUNSET };
        night_hour / (24.0 - DAY_SPAN)
    };

    // Half-ellipse arc: horizon to horizon with the apex mid-window
    CelestialState {
        position: Vec3::new(progress * 2.0 - 1.0, (PI * progress).sin(), 0.0),
        is_sun,
        window_progress: progress,
    }
}

fn effects(hour: f32) -> SkyEffects {
    SkyEffects {
        stars: in_window(hour, 19.5, 5.0),
        milky_way: in_window(hour, 22.0, 4.0),
        aurora: in_window(hour, 23.0, 3.5),
        god_rays: in_window(hour, 9.0, 16.0),
    }
}

/// Compute the environment state for an hour of day. Pure: given the same
/// hour, the same state comes back every time.
pub fn compute_state(hour_of_day: f32) -> EnvironmentState {
    let hour = if hour_of_day.is_finite() {
        hour_of_day.rem_euclid(24.0)
    } else {
        12.0
    };

    let (from, to, t) = bracketing(hour);
    let sky = from.colors.lerp(&to.colors, ease(t, Easing::EaseInOut));

    // Breezier around dawn and dusk, calm at midday and deep night
    let wind_strength = 0.25 + 0.2 * (hour / 24.0 * 4.0 * PI).sin().abs();

    EnvironmentState {
        hour_of_day: hour,
        sky,
        celestial: celestial(hour),
        effects: effects(hour),
        wind_strength,
        wind_phase: hour * 60.0,
    }
}

/// Minimum hour delta between recomputations (one wall-clock minute)
const SAMPLE_INTERVAL_HOURS: f32 = 1.0 / 60.0;

/// Throttled environment sampler. Holds the sky mode and the last computed
/// state; `sample` is cheap to call every frame.
#[derive(Debug)]
pub struct EnvironmentClock {
    mode: SkyMode,
    state: EnvironmentState,
    sampled_hour: Option<f32>,
}

impl EnvironmentClock {
    pub fn new(mode: SkyMode) -> Self {
        let pinned = mode.pinned_hour().unwrap_or(12.0);
        Self {
            mode,
            state: compute_state(pinned),
            sampled_hour: None,
        }
    }

    pub fn mode(&self) -> SkyMode {
        self.mode
    }

    /// Change sky mode; forces a recompute on the next sample
    pub fn set_mode(&mut self, mode: SkyMode) {
        if self.mode != mode {
            self.mode = mode;
            self.sampled_hour = None;
        }
    }

    /// Sample the environment for the injected wall-clock hour. Fixed sky
    /// modes ignore the argument; recomputation is throttled to about once
    /// per wall-clock minute.
    pub fn sample(&mut self, wall_hour: f32) -> &EnvironmentState {
        let hour = self.mode.pinned_hour().unwrap_or(wall_hour);
        // Fall back before the staleness compare; a NaN stored in
        // `sampled_hour` would make every future delta NaN and wedge the
        // throttle
        let hour = if hour.is_finite() {
            hour.rem_euclid(24.0)
        } else {
            12.0
        };

        let stale = match self.sampled_hour {
            None => true,
            Some(prev) => {
                let mut delta = (hour - prev).rem_euclid(24.0);
                if delta > 12.0 {
                    delta = 24.0 - delta;
                }
                delta >= SAMPLE_INTERVAL_HOURS
            }
        };

        if stale {
            self.state = compute_state(hour);
            self.sampled_hour = Some(hour);
        }

        &self.state
    }

    /// Last computed state without sampling
    pub fn current(&self) -> &EnvironmentState {
        &self.state
    }
}
