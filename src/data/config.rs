//! Garden scene configuration
//!
//! Parsed from a YAML document supplied by the host application. Structural
//! problems (duplicate creature ids, missing fields) are reported as errors;
//! unknown kind strings are not errors and resolve to default archetypes.

use serde::Deserialize;

use super::kinds::{CreatureKind, FlowerKind};

/// Sky rendering mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkyMode {
    /// Track the real wall clock (time injected at the boundary)
    #[default]
    FollowClock,
    /// Pin the sky to midday
    FixedNoon,
    /// Pin the sky to deep night
    FixedNight,
}

impl SkyMode {
    /// Resolve a mode string; unknown values fall back to following the clock
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "noon" | "fixed-noon" | "day" => SkyMode::FixedNoon,
            "night" | "fixed-night" => SkyMode::FixedNight,
            _ => SkyMode::FollowClock,
        }
    }

    /// The pinned hour for fixed modes, if any
    pub fn pinned_hour(&self) -> Option<f32> {
        match self {
            SkyMode::FollowClock => None,
            SkyMode::FixedNoon => Some(12.0),
            SkyMode::FixedNight => Some(23.0),
        }
    }
}

/// YAML input format for the scene
#[derive(Debug, Deserialize)]
struct GardenInput {
    garden: GardenMeta,
    #[serde(default)]
    flowers: Vec<FlowerInput>,
    #[serde(default)]
    creatures: Vec<CreatureInput>,
}

#[derive(Debug, Deserialize)]
struct GardenMeta {
    name: String,
    #[serde(default)]
    seed: Option<f64>,
    #[serde(default)]
    sky_mode: Option<String>,
    #[serde(default)]
    quality: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct FlowerInput {
    kind: String,
    count: u32,
}

#[derive(Debug, Deserialize)]
struct CreatureInput {
    id: String,
    kind: String,
}

/// One configured bed of flowers of a single kind
#[derive(Debug, Clone, Copy)]
pub struct FlowerBed {
    pub kind: FlowerKind,
    pub count: u32,
}

/// One configured creature
#[derive(Debug, Clone)]
pub struct CreatureSpec {
    pub id: String,
    pub kind: CreatureKind,
}

/// Parsed and resolved garden configuration
#[derive(Debug, Clone)]
pub struct GardenConfig {
    pub name: String,
    pub seed: u32,
    pub sky_mode: SkyMode,
    pub quality: f32,
    pub flowers: Vec<FlowerBed>,
    pub creatures: Vec<CreatureSpec>,
}

impl Default for GardenConfig {
    fn default() -> Self {
        Self {
            name: "garden".to_string(),
            seed: crate::random::DEFAULT_SEED,
            sky_mode: SkyMode::default(),
            quality: 1.0,
            flowers: Vec::new(),
            creatures: Vec::new(),
        }
    }
}

impl GardenConfig {
    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let input: GardenInput =
            serde_yaml::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))?;

        let mut creatures = Vec::with_capacity(input.creatures.len());
        for c in &input.creatures {
            if c.id.is_empty() {
                return Err("Creature with empty id".to_string());
            }
            if creatures.iter().any(|s: &CreatureSpec| s.id == c.id) {
                return Err(format!("Duplicate creature id '{}'", c.id));
            }
            creatures.push(CreatureSpec {
                id: c.id.clone(),
                kind: CreatureKind::from_name(&c.kind),
            });
        }

        let flowers = input
            .flowers
            .iter()
            .map(|f| FlowerBed {
                kind: FlowerKind::from_name(&f.kind),
                count: f.count,
            })
            .collect();

        Ok(Self {
            name: input.garden.name,
            seed: crate::random::sanitize(input.garden.seed.unwrap_or(f64::NAN)),
            sky_mode: SkyMode::from_name(input.garden.sky_mode.as_deref().unwrap_or("")),
            quality: input.garden.quality.unwrap_or(1.0),
            flowers,
            creatures,
        })
    }

    /// Total configured flower count before any tier cap
    pub fn flower_total(&self) -> u32 {
        self.flowers.iter().map(|f| f.count).sum()
    }
}
