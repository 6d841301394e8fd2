//! Time-of-day environment model
//!
//! Maps an hour of day to sky colors, celestial position, wind, and effect
//! toggles. The current time is always injected by the caller; nothing in
//! here reads a clock, which keeps every state fully reproducible in tests.

pub mod clock;
pub mod keyframes;

pub use clock::{compute_state, CelestialState, EnvironmentClock, EnvironmentState, SkyEffects};
pub use keyframes::{bracketing, SkyColors, SkyKeyframe, KEYFRAMES};
