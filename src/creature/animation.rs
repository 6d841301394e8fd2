//! Procedural secondary animation
//!
//! Leg swing, tail wag, and head tracking are derived from elapsed time and
//! the current activity, then blended toward their targets with the shared
//! exponential smoothing so state changes never snap a part discontinuously.

use crate::animation::{smooth_angle_toward, smooth_toward};
use crate::data::CreatureKind;

use super::fsm::{Activity, TickContext};
use crate::math::Vec3;

/// Head yaw is clamped to a believable neck range
const HEAD_YAW_LIMIT: f32 = 1.2;
const HEAD_PITCH_LIMIT: f32 = 0.6;
/// Blend rate for part angles
const PART_RATE: f32 = 6.0;
/// Blend rate for leg-swing amplitude fading in and out
const AMPLITUDE_RATE: f32 = 4.0;

/// Secondary part rotations handed to the renderer alongside the body
/// transform
#[derive(Debug, Clone, Copy, Default)]
pub struct PartPose {
    /// Leg-swing phase in radians, advances only while moving
    pub leg_phase: f32,
    /// Leg-swing amplitude in [0, 1], fades with movement
    pub leg_amplitude: f32,
    /// Tail angle in radians around rest
    pub tail_angle: f32,
    /// Head yaw relative to the body, radians
    pub head_yaw: f32,
    /// Head pitch, radians
    pub head_pitch: f32,
}

impl PartPose {
    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        dt: f32,
        ctx: &TickContext,
        kind: CreatureKind,
        activity: Activity,
        moving: bool,
        position: Vec3,
        body_yaw: f32,
    ) {
        // Legs: the phase accumulates only while actually covering ground;
        // amplitude eases in/out so a stop never freezes legs mid-stride
        let stride = match activity {
            Activity::Play => kind.leg_frequency() * 1.3,
            _ => kind.leg_frequency(),
        };
        if moving {
            self.leg_phase += dt * stride * std::f32::consts::TAU;
        }
        let amplitude_target = if moving { 1.0 } else { 0.0 };
        self.leg_amplitude =
            smooth_toward(self.leg_amplitude, amplitude_target, AMPLITUDE_RATE, dt);

        // Tail: wag frequency depends on mood of the activity, with wind
        // adding a small idle sway
        let (wag_rate, wag_scale) = match activity {
            Activity::Play => (6.0, 1.0),
            Activity::Walk => (3.0, 0.7),
            Activity::Sleeping => (0.4, 0.15),
            _ => (1.2, 0.4),
        };
        let wag = (ctx.time * wag_rate).sin() * kind.tail_amplitude() * wag_scale
            + (ctx.time * 0.7).sin() * 0.05 * ctx.wind_strength;
        self.tail_angle = smooth_toward(self.tail_angle, wag, PART_RATE, dt);

        // Head: track the camera while awake, droop while asleep
        let (yaw_target, pitch_target) = if activity == Activity::Sleeping {
            (0.0, -HEAD_PITCH_LIMIT)
        } else {
            let world_yaw = position.yaw_toward(&ctx.camera);
            let mut relative = (world_yaw - body_yaw).rem_euclid(std::f32::consts::TAU);
            if relative > std::f32::consts::PI {
                relative -= std::f32::consts::TAU;
            }
            let height = ctx.camera.y - position.y - kind.body_height();
            let flat = position.distance_xz(&ctx.camera).max(0.001);
            (
                relative.clamp(-HEAD_YAW_LIMIT, HEAD_YAW_LIMIT),
                (height / flat).atan().clamp(-HEAD_PITCH_LIMIT, HEAD_PITCH_LIMIT),
            )
        };
        self.head_yaw = smooth_angle_toward(self.head_yaw, yaw_target, PART_RATE, dt);
        self.head_pitch = smooth_toward(self.head_pitch, pitch_target, PART_RATE, dt);
    }
}
