//! Creature activity state machine
//!
//! A countdown timer drives transitions; on expiry the next activity comes
//! from a weighted draw conditioned on the external emotion signal. Draw
//! randomness chains off the creature seed and a transition counter, so a
//! creature's whole life is reproducible from its seed.

use std::collections::HashMap;
use std::f32::consts::TAU;

use crate::animation::{smooth_angle_toward, smooth_vec_toward};
use crate::data::{CreatureKind, CreatureSpec};
use crate::math::Vec3;
use crate::random::{derive, hash, range};

use super::animation::PartPose;

/// Radius of the wandering area around the garden center
pub const GARDEN_RADIUS: f32 = 4.0;
/// How far a single walk target may be from the current position
const WALK_RADIUS: f32 = 2.2;
/// How close to a companion a play target lands
const PLAY_APPROACH: f32 = 0.6;
/// Base convergence rate for position smoothing, scaled by the kind's
/// walk speed
const MOVE_RATE: f32 = 1.4;
/// Convergence rate for body yaw smoothing
const TURN_RATE: f32 = 5.0;
/// Gravity for the jump overlay
const GRAVITY: f32 = 9.8;

/// Creature activity states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Activity {
    Idle,
    Walk,
    Sit,
    Lie,
    Sleeping,
    Play,
}

impl Activity {
    pub const ALL: [Activity; 6] = [
        Activity::Idle,
        Activity::Walk,
        Activity::Sit,
        Activity::Lie,
        Activity::Sleeping,
        Activity::Play,
    ];

    /// Bounded timer range sampled on entering this state; no state may
    /// persist past its maximum
    pub fn timer_range(&self) -> (f32, f32) {
        match self {
            Activity::Idle => (2.0, 5.0),
            Activity::Walk => (3.0, 6.0),
            Activity::Sit => (4.0, 8.0),
            Activity::Lie => (6.0, 12.0),
            Activity::Sleeping => (8.0, 16.0),
            Activity::Play => (3.0, 6.0),
        }
    }

    pub fn is_moving(&self) -> bool {
        matches!(self, Activity::Walk | Activity::Play)
    }

    /// Numeric id handed to the renderer
    pub fn index(&self) -> u32 {
        match self {
            Activity::Idle => 0,
            Activity::Walk => 1,
            Activity::Sit => 2,
            Activity::Lie => 3,
            Activity::Sleeping => 4,
            Activity::Play => 5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Activity::Idle => "idle",
            Activity::Walk => "walk",
            Activity::Sit => "sit",
            Activity::Lie => "lie",
            Activity::Sleeping => "sleeping",
            Activity::Play => "play",
        }
    }
}

/// External emotion signal conditioning the activity draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Emotion {
    #[default]
    Neutral,
    Happy,
    Playful,
    Sleepy,
}

impl Emotion {
    /// Resolve an emotion string; unknown values fall back to neutral
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "happy" => Emotion::Happy,
            "playful" => Emotion::Playful,
            "sleepy" | "sleeping" | "tired" => Emotion::Sleepy,
            _ => Emotion::Neutral,
        }
    }
}

/// Draw weights per activity for an emotion. Sleepy is handled before the
/// draw (it forces Lie), so it has no row here.
fn weights(emotion: Emotion) -> [f32; 6] {
    // Order matches Activity::ALL
    match emotion {
        Emotion::Neutral => [30.0, 25.0, 18.0, 12.0, 5.0, 10.0],
        Emotion::Happy => [18.0, 30.0, 10.0, 5.0, 2.0, 35.0],
        Emotion::Playful => [10.0, 25.0, 5.0, 3.0, 2.0, 55.0],
        Emotion::Sleepy => [0.0, 0.0, 0.0, 1.0, 0.0, 0.0],
    }
}

fn weighted_draw(roll: f32, emotion: Emotion) -> Activity {
    let table = weights(emotion);
    let total: f32 = table.iter().sum();
    let mut mark = roll * total;
    for (activity, weight) in Activity::ALL.iter().zip(table) {
        if mark < weight {
            return *activity;
        }
        mark -= weight;
    }
    Activity::Idle
}

/// Transient vertical jump running concurrently with the base FSM
#[derive(Debug, Clone, Copy, Default)]
pub struct JumpOverlay {
    velocity: f32,
    height: f32,
    active: bool,
}

impl JumpOverlay {
    /// Start a jump. Ignored while already airborne.
    pub fn trigger(&mut self, initial_velocity: f32) {
        if !self.active {
            self.active = true;
            self.velocity = initial_velocity;
            self.height = 0.0;
        }
    }

    /// Integrate one frame; ends the overlay exactly when the ground is
    /// reached
    pub fn update(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        self.velocity -= GRAVITY * dt;
        self.height += self.velocity * dt;
        if self.height <= 0.0 {
            self.height = 0.0;
            self.velocity = 0.0;
            self.active = false;
        }
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// Read-only per-tick inputs shared by every creature
pub struct TickContext<'a> {
    pub emotion: Emotion,
    /// Current positions of every creature, rebuilt each tick; play targets
    /// resolve companions through this instead of holding back-references
    pub registry: &'a HashMap<String, Vec3>,
    /// Camera position for head tracking
    pub camera: Vec3,
    pub wind_strength: f32,
    /// Scene time in seconds
    pub time: f32,
}

/// One simulated creature. Created at scene mount, destroyed at teardown;
/// no identity persists beyond the session.
#[derive(Debug, Clone)]
pub struct Creature {
    pub id: String,
    pub kind: CreatureKind,
    pub activity: Activity,
    pub position: Vec3,
    pub target: Vec3,
    pub yaw: f32,
    pub timer: f32,
    pub jump: JumpOverlay,
    pub parts: PartPose,
    /// Companion resolved by id through the tick registry
    pub companion: Option<String>,
    seed: u32,
    transitions: u32,
}

impl Creature {
    /// Spawn with a randomized start position and activity
    pub fn new(spec: &CreatureSpec, seed: u32) -> Self {
        let spawn_angle = hash(derive(seed, 1)) * TAU;
        let spawn_dist = range(derive(seed, 2), 0.5, GARDEN_RADIUS * 0.8);
        let position = Vec3::new(
            spawn_angle.sin() * spawn_dist,
            0.0,
            spawn_angle.cos() * spawn_dist,
        );

        let activity = weighted_draw(hash(derive(seed, 3)), Emotion::Neutral);
        let (lo, hi) = activity.timer_range();

        Self {
            id: spec.id.clone(),
            kind: spec.kind,
            activity,
            position,
            target: position,
            yaw: hash(derive(seed, 4)) * TAU,
            timer: range(derive(seed, 5), lo, hi),
            jump: JumpOverlay::default(),
            parts: PartPose::default(),
            companion: None,
            seed,
            transitions: 0,
        }
    }

    /// Per-frame update: timers, movement smoothing, secondary animation,
    /// and the jump overlay
    pub fn update(&mut self, dt: f32, ctx: &TickContext) {
        self.timer -= dt;
        if self.timer <= 0.0 {
            self.transition(ctx);
        }

        if self.activity.is_moving() {
            let rate = MOVE_RATE * self.kind.walk_speed();
            self.position = smooth_vec_toward(self.position, self.target, rate, dt);
            if self.position.distance_xz(&self.target) > 0.05 {
                let desired = self.position.yaw_toward(&self.target);
                self.yaw = smooth_angle_toward(self.yaw, desired, TURN_RATE, dt);
            }
        }

        self.jump.update(dt);
        let moving = self.activity.is_moving()
            && self.position.distance_xz(&self.target) > 0.1;
        self.parts
            .update(dt, ctx, self.kind, self.activity, moving, self.position, self.yaw);
    }

    /// External interaction (e.g. a click on the creature)
    pub fn poke(&mut self) {
        self.jump.trigger(self.kind.jump_velocity());
    }

    fn transition(&mut self, ctx: &TickContext) {
        self.transitions = self.transitions.wrapping_add(1);
        let draw_seed = derive(self.seed, 10_000u32.wrapping_add(self.transitions));

        let next = if ctx.emotion == Emotion::Sleepy {
            // Forced rest: bypass the weighted draw, take a long timer
            self.timer = range(derive(draw_seed, 1), 18.0, 30.0);
            Activity::Lie
        } else {
            let activity = weighted_draw(hash(derive(draw_seed, 0)), ctx.emotion);
            let (lo, hi) = activity.timer_range();
            self.timer = range(derive(draw_seed, 1), lo, hi);
            activity
        };

        match next {
            Activity::Walk => self.target = self.walk_target(draw_seed),
            Activity::Play => self.target = self.play_target(draw_seed, ctx),
            _ => {}
        }
        self.activity = next;
    }

    /// Random point within a bounded radius, kept inside the garden
    fn walk_target(&self, draw_seed: u32) -> Vec3 {
        let theta = hash(derive(draw_seed, 2)) * TAU;
        let dist = range(derive(draw_seed, 3), 0.4, WALK_RADIUS);
        clamp_to_garden(Vec3::new(
            self.position.x + theta.sin() * dist,
            0.0,
            self.position.z + theta.cos() * dist,
        ))
    }

    /// A point near the companion's current position; a missing companion
    /// reference falls back to a bounded random target, never a null one
    fn play_target(&self, draw_seed: u32, ctx: &TickContext) -> Vec3 {
        let companion_pos = self
            .companion
            .as_ref()
            .and_then(|id| ctx.registry.get(id))
            .copied();

        match companion_pos {
            Some(pos) => {
                let theta = hash(derive(draw_seed, 4)) * TAU;
                clamp_to_garden(Vec3::new(
                    pos.x + theta.sin() * PLAY_APPROACH,
                    0.0,
                    pos.z + theta.cos() * PLAY_APPROACH,
                ))
            }
            None => self.walk_target(draw_seed),
        }
    }
}

fn clamp_to_garden(p: Vec3) -> Vec3 {
    let dist = (p.x * p.x + p.z * p.z).sqrt();
    if dist > GARDEN_RADIUS {
        let s = GARDEN_RADIUS / dist;
        Vec3::new(p.x * s, p.y, p.z * s)
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn spec(id: &str) -> CreatureSpec {
        CreatureSpec {
            id: id.to_string(),
            kind: CreatureKind::Cat,
        }
    }

    fn ctx<'a>(
        emotion: Emotion,
        registry: &'a HashMap<String, Vec3>,
    ) -> TickContext<'a> {
        TickContext {
            emotion,
            registry,
            camera: Vec3::new(0.0, 2.0, 8.0),
            wind_strength: 0.3,
            time: 0.0,
        }
    }

    #[test]
    fn test_spawn_is_deterministic_and_bounded() {
        let a = Creature::new(&spec("mochi"), 7);
        let b = Creature::new(&spec("mochi"), 7);
        assert_eq!(a.position, b.position);
        assert_eq!(a.activity, b.activity);
        assert!(a.position.distance_xz(&Vec3::ZERO) <= GARDEN_RADIUS);

        let c = Creature::new(&spec("mochi"), 8);
        assert_ne!(a.position, c.position);
    }

    #[test]
    fn test_timer_always_within_sampled_range() {
        let registry = HashMap::new();
        let mut creature = Creature::new(&spec("mochi"), 7);
        let context = ctx(Emotion::Neutral, &registry);

        for _ in 0..2000 {
            creature.update(0.1, &context);
            let (_, hi) = creature.activity.timer_range();
            assert!(creature.timer <= hi, "timer exceeds state maximum");
        }
    }

    #[test]
    fn test_every_state_eventually_visited() {
        let registry = HashMap::new();
        let mut creature = Creature::new(&spec("mochi"), 7);
        let context = ctx(Emotion::Neutral, &registry);

        let mut seen: HashSet<Activity> = HashSet::new();
        // Long simulated run at 10 Hz
        for _ in 0..60_000 {
            creature.update(0.1, &context);
            seen.insert(creature.activity);
        }
        for activity in Activity::ALL {
            assert!(seen.contains(&activity), "{:?} never visited", activity);
        }
    }

    #[test]
    fn test_sleepy_emotion_forces_lie_with_long_timer() {
        let registry = HashMap::new();
        let mut creature = Creature::new(&spec("mochi"), 7);
        let context = ctx(Emotion::Sleepy, &registry);

        // Push past the current timer
        for _ in 0..200 {
            creature.update(0.1, &context);
        }
        assert_eq!(creature.activity, Activity::Lie);

        // The forced timer is longer than any Lie draw
        creature.timer = 0.0;
        creature.update(0.001, &context);
        assert_eq!(creature.activity, Activity::Lie);
        assert!(creature.timer >= 17.9, "expected long timer, got {}", creature.timer);
    }

    #[test]
    fn test_walk_moves_toward_target() {
        let registry = HashMap::new();
        let mut creature = Creature::new(&spec("mochi"), 7);
        let context = ctx(Emotion::Neutral, &registry);

        creature.activity = Activity::Walk;
        creature.target = clamp_to_garden(creature.position + Vec3::new(1.5, 0.0, 0.5));
        creature.timer = 100.0;

        let before = creature.position.distance_xz(&creature.target);
        for _ in 0..30 {
            creature.update(0.033, &context);
        }
        let after = creature.position.distance_xz(&creature.target);
        assert!(after < before);
    }

    #[test]
    fn test_play_targets_companion_position() {
        let mut registry = HashMap::new();
        registry.insert("pudding".to_string(), Vec3::new(2.0, 0.0, 1.0));

        let mut creature = Creature::new(&spec("mochi"), 7);
        creature.companion = Some("pudding".to_string());
        let context = ctx(Emotion::Playful, &registry);

        // Force transitions until a Play state lands
        for _ in 0..50 {
            creature.timer = 0.0;
            creature.update(0.001, &context);
            if creature.activity == Activity::Play {
                break;
            }
        }
        assert_eq!(creature.activity, Activity::Play);
        let companion = Vec3::new(2.0, 0.0, 1.0);
        assert!(creature.target.distance_xz(&companion) <= PLAY_APPROACH + 0.001);
    }

    #[test]
    fn test_play_without_companion_falls_back_to_random_target() {
        let registry = HashMap::new();
        let mut creature = Creature::new(&spec("mochi"), 7);
        creature.companion = Some("ghost".to_string());
        let context = ctx(Emotion::Playful, &registry);

        for _ in 0..50 {
            creature.timer = 0.0;
            creature.update(0.001, &context);
            if creature.activity == Activity::Play {
                break;
            }
        }
        assert_eq!(creature.activity, Activity::Play);
        // Target is a real bounded point, not the origin-default or NaN
        assert!(creature.target.x.is_finite() && creature.target.z.is_finite());
        assert!(creature.target.distance_xz(&Vec3::ZERO) <= GARDEN_RADIUS + 0.001);
    }

    #[test]
    fn test_jump_ignores_retrigger_and_returns_to_ground() {
        let mut jump = JumpOverlay::default();
        jump.trigger(3.6);
        assert!(jump.is_active());

        // Step a few frames, then try to re-trigger mid-air
        for _ in 0..5 {
            jump.update(0.016);
        }
        let height_before = jump.height();
        jump.trigger(10.0);
        assert_eq!(jump.height(), height_before, "re-trigger must be a no-op");

        // Integrate to landing
        let mut steps = 0;
        while jump.is_active() && steps < 10_000 {
            jump.update(0.016);
            steps += 1;
        }
        assert!(!jump.is_active());
        assert_eq!(jump.height(), 0.0);
    }

    #[test]
    fn test_jump_runs_concurrently_with_fsm() {
        let registry = HashMap::new();
        let mut creature = Creature::new(&spec("mochi"), 7);
        let context = ctx(Emotion::Neutral, &registry);

        creature.poke();
        assert!(creature.jump.is_active());
        let mut peak = 0.0f32;
        for _ in 0..200 {
            creature.update(0.016, &context);
            peak = peak.max(creature.jump.height());
        }
        assert!(peak > 0.2, "jump should gain height, peak={}", peak);
        assert!(!creature.jump.is_active());
        assert_eq!(creature.jump.height(), 0.0);
    }

    #[test]
    fn test_weighted_draw_covers_table() {
        let mut seen = HashSet::new();
        for i in 0..1000 {
            seen.insert(weighted_draw(i as f32 / 1000.0, Emotion::Neutral));
        }
        assert_eq!(seen.len(), Activity::ALL.len());
    }

    #[test]
    fn test_unknown_emotion_name_is_neutral() {
        assert_eq!(Emotion::from_name("grumpy"), Emotion::Neutral);
        assert_eq!(Emotion::from_name("SLEEPY"), Emotion::Sleepy);
    }
}
