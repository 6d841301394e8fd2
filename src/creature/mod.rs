//! Ambient creature simulation
//!
//! Each creature runs a timer-driven activity state machine producing a
//! target transform, blended with procedural secondary animation (legs,
//! tail, head tracking) and an independent jump overlay. Everything updates
//! once per animation frame with real elapsed time.

pub mod animation;
pub mod fsm;

pub use animation::PartPose;
pub use fsm::{Activity, Creature, Emotion, JumpOverlay, TickContext};
