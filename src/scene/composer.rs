//! Scene composition
//!
//! One cooperative update per animation frame: the environment samples at
//! low frequency, creatures update every frame, and the structure cache
//! regenerates only when (seed, growth, tier) changes. The composer also
//! flattens descriptors into the plain float buffers the renderer consumes.

use std::collections::HashMap;

use crate::creature::{Creature, Emotion, TickContext};
use crate::data::{GardenConfig, SkyMode};
use crate::environment::{EnvironmentClock, EnvironmentState};
use crate::growth::{compute_growth, DetailTier, GrowthState};
use crate::math::Vec3;
use crate::random::derive;
use crate::structure::{StructureCache, StructureDescriptor};

/// Sub-seed stream for creature spawns
const SALT_CREATURE: u32 = 0xc0de;

/// Owns every live part of the scene and drives one synchronous update per
/// frame
pub struct SceneComposer {
    config: GardenConfig,
    emotion: Emotion,
    tier: DetailTier,
    growth: GrowthState,
    cache: StructureCache,
    clock: EnvironmentClock,
    creatures: Vec<Creature>,
    camera: Vec3,
    time: f32,
}

impl SceneComposer {
    pub fn new() -> Self {
        Self::from_config(GardenConfig::default())
    }

    /// Build a scene from a parsed config. Creatures spawn immediately with
    /// randomized positions; companions pair round-robin through the roster.
    pub fn from_config(config: GardenConfig) -> Self {
        let mut creatures: Vec<Creature> = config
            .creatures
            .iter()
            .enumerate()
            .map(|(i, spec)| Creature::new(spec, derive(config.seed, SALT_CREATURE + i as u32)))
            .collect();

        // Each creature's play partner is the next roster entry
        if creatures.len() > 1 {
            let ids: Vec<String> = creatures.iter().map(|c| c.id.clone()).collect();
            for (i, creature) in creatures.iter_mut().enumerate() {
                creature.companion = Some(ids[(i + 1) % ids.len()].clone());
            }
        }

        let clock = EnvironmentClock::new(config.sky_mode);
        let tier = DetailTier::select(config.quality);

        Self {
            config,
            emotion: Emotion::Neutral,
            tier,
            growth: compute_growth(0),
            cache: StructureCache::new(),
            clock,
            creatures,
            camera: Vec3::new(0.0, 2.5, 8.0),
            time: 0.0,
        }
    }

    /// Replace the config wholesale (scene reload)
    pub fn load(&mut self, config: GardenConfig) {
        *self = Self::from_config(config);
    }

    pub fn config(&self) -> &GardenConfig {
        &self.config
    }

    pub fn set_progress(&mut self, progress: i64) {
        self.growth = compute_growth(progress);
    }

    pub fn growth(&self) -> &GrowthState {
        &self.growth
    }

    pub fn set_quality(&mut self, hint: f32) {
        self.tier = DetailTier::select(hint);
    }

    pub fn tier(&self) -> DetailTier {
        self.tier
    }

    pub fn set_emotion(&mut self, emotion: Emotion) {
        self.emotion = emotion;
    }

    pub fn set_sky_mode(&mut self, mode: SkyMode) {
        self.clock.set_mode(mode);
    }

    pub fn set_camera(&mut self, position: Vec3) {
        self.camera = position;
    }

    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }

    /// One frame of simulation. `wall_hour` is the injected wall-clock hour
    /// of day; fixed sky modes ignore it.
    pub fn advance(&mut self, dt: f32, wall_hour: f32) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.time += dt;

        let env = *self.clock.sample(wall_hour);

        // Companion lookups go through this per-tick snapshot instead of
        // creature-to-creature references
        let registry: HashMap<String, Vec3> = self
            .creatures
            .iter()
            .map(|c| (c.id.clone(), c.position))
            .collect();

        let ctx = TickContext {
            emotion: self.emotion,
            registry: &registry,
            camera: self.camera,
            wind_strength: env.wind_strength,
            time: self.time,
        };

        for creature in &mut self.creatures {
            creature.update(dt, &ctx);
        }
    }

    /// Current structure, regenerated only when a cache key changed
    pub fn structure(&mut self) -> &StructureDescriptor {
        self.cache.descriptor_for(
            self.config.seed,
            &self.growth,
            self.tier,
            &self.config.flowers,
        )
    }

    /// Bumps whenever the structure was rebuilt; the renderer re-uploads
    /// geometry only when this changes
    pub fn structure_revision(&mut self) -> u32 {
        self.structure();
        self.cache.revision()
    }

    pub fn environment(&self) -> &EnvironmentState {
        self.clock.current()
    }

    /// Jump-trigger for a clicked creature; false when the id is unknown
    pub fn poke(&mut self, id: &str) -> bool {
        match self.creatures.iter_mut().find(|c| c.id == id) {
            Some(creature) => {
                creature.poke();
                true
            }
            None => false,
        }
    }

    // === Flat renderer buffers ===

    /// [height, radius, lean xyz] = 5 floats
    pub fn trunk_data(&mut self) -> Vec<f32> {
        let trunk = self.structure().trunk;
        vec![
            trunk.height,
            trunk.radius,
            trunk.lean.x,
            trunk.lean.y,
            trunk.lean.z,
        ]
    }

    /// Per branch: origin(3) + direction(3) + length + thickness + curve
    /// = 9 floats
    pub fn branch_data(&mut self) -> Vec<f32> {
        let structure = self.structure();
        let mut data = Vec::with_capacity(structure.branches.len() * 9);
        for b in &structure.branches {
            data.extend_from_slice(&b.origin.to_array());
            data.extend_from_slice(&b.direction.to_array());
            data.push(b.length);
            data.push(b.thickness);
            data.push(b.curve);
        }
        data
    }

    /// Per leaf cluster: position(3) + rotation(3) + scale + color(3)
    /// + sway phase/amplitude/frequency = 13 floats
    pub fn leaf_data(&mut self) -> Vec<f32> {
        let structure = self.structure();
        let mut data = Vec::with_capacity(structure.leaf_count() * 13);
        for b in &structure.branches {
            for l in &b.leaves {
                data.extend_from_slice(&l.position.to_array());
                data.extend_from_slice(&l.rotation.to_array());
                data.push(l.scale);
                data.extend_from_slice(&l.color.to_array());
                data.push(l.sway_phase);
                data.push(l.sway_amplitude);
                data.push(l.sway_frequency);
            }
        }
        data
    }

    /// Per twig: origin(3) + direction(3) + length + thickness = 8 floats
    pub fn twig_data(&mut self) -> Vec<f32> {
        let structure = self.structure();
        let mut data = Vec::with_capacity(structure.twig_count() * 8);
        for b in &structure.branches {
            for t in &b.twigs {
                data.extend_from_slice(&t.origin.to_array());
                data.extend_from_slice(&t.direction.to_array());
                data.push(t.length);
                data.push(t.thickness);
            }
        }
        data
    }

    /// Per flower: x, z, kind id, scale, petal color rgb = 7 floats
    pub fn flower_data(&mut self) -> Vec<f32> {
        let structure = self.structure();
        let mut data = Vec::with_capacity(structure.flowers.len() * 7);
        for f in &structure.flowers {
            data.push(f.x);
            data.push(f.z);
            data.push(f.kind.index() as f32);
            data.push(f.scale);
            data.extend_from_slice(&f.kind.petal_color().to_array());
        }
        data
    }

    /// hour(1) + zenith/mid/horizon(9) + celestial pos(3) + is_sun(1)
    /// + window progress(1) + wind strength/phase(2) + effect bits(1)
    /// = 18 floats
    pub fn environment_data(&self) -> Vec<f32> {
        let env = self.environment();
        let mut data = Vec::with_capacity(18);
        data.push(env.hour_of_day);
        data.extend_from_slice(&env.sky.zenith.to_array());
        data.extend_from_slice(&env.sky.mid.to_array());
        data.extend_from_slice(&env.sky.horizon.to_array());
        data.extend_from_slice(&env.celestial.position.to_array());
        data.push(if env.celestial.is_sun { 1.0 } else { 0.0 });
        data.push(env.celestial.window_progress);
        data.push(env.wind_strength);
        data.push(env.wind_phase);
        data.push(env.effects.bits() as f32);
        data
    }

    /// Per creature: position(3, y includes body height and jump) + yaw
    /// + leg phase/amplitude + tail + head yaw/pitch + jump height
    /// + activity id + kind id = 12 floats
    pub fn creature_data(&self) -> Vec<f32> {
        let mut data = Vec::with_capacity(self.creatures.len() * 12);
        for c in &self.creatures {
            data.push(c.position.x);
            data.push(c.kind.body_height() + c.jump.height());
            data.push(c.position.z);
            data.push(c.yaw);
            data.push(c.parts.leg_phase);
            data.push(c.parts.leg_amplitude);
            data.push(c.parts.tail_angle);
            data.push(c.parts.head_yaw);
            data.push(c.parts.head_pitch);
            data.push(c.jump.height());
            data.push(c.activity.index() as f32);
            data.push(c.kind.index() as f32);
        }
        data
    }
}

impl Default for SceneComposer {
    fn default() -> Self {
        Self::new()
    }
}
