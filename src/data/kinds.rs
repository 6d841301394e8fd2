//! Closed archetype unions for creatures and flowers
//!
//! Type strings from config resolve through a single lookup with a default
//! fallback variant, so a typo in a config file produces a default-looking
//! entity rather than an invisible one.

use serde::Serialize;

use crate::math::Color;

/// Creature visual/behavioral archetype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CreatureKind {
    Cat,
    Dog,
    Rabbit,
    Bird,
}

impl Default for CreatureKind {
    fn default() -> Self {
        CreatureKind::Cat
    }
}

impl CreatureKind {
    /// Resolve a kind string; unknown names fall back to the default
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "cat" => CreatureKind::Cat,
            "dog" => CreatureKind::Dog,
            "rabbit" | "bunny" => CreatureKind::Rabbit,
            "bird" => CreatureKind::Bird,
            _ => CreatureKind::default(),
        }
    }

    /// Ground-plane movement speed in units/second while walking
    pub fn walk_speed(&self) -> f32 {
        match self {
            CreatureKind::Cat => 1.1,
            CreatureKind::Dog => 1.5,
            CreatureKind::Rabbit => 1.8,
            CreatureKind::Bird => 2.2,
        }
    }

    /// Leg-swing frequency in cycles/second while walking
    pub fn leg_frequency(&self) -> f32 {
        match self {
            CreatureKind::Cat => 2.6,
            CreatureKind::Dog => 3.0,
            CreatureKind::Rabbit => 3.8,
            CreatureKind::Bird => 4.5,
        }
    }

    /// Tail-wag amplitude in radians
    pub fn tail_amplitude(&self) -> f32 {
        match self {
            CreatureKind::Cat => 0.35,
            CreatureKind::Dog => 0.8,
            CreatureKind::Rabbit => 0.15,
            CreatureKind::Bird => 0.25,
        }
    }

    /// Rest height of the body above the ground plane
    pub fn body_height(&self) -> f32 {
        match self {
            CreatureKind::Cat => 0.28,
            CreatureKind::Dog => 0.4,
            CreatureKind::Rabbit => 0.22,
            CreatureKind::Bird => 0.15,
        }
    }

    /// Initial vertical velocity for the jump overlay
    pub fn jump_velocity(&self) -> f32 {
        match self {
            CreatureKind::Cat => 3.6,
            CreatureKind::Dog => 3.0,
            CreatureKind::Rabbit => 4.2,
            CreatureKind::Bird => 4.8,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CreatureKind::Cat => "cat",
            CreatureKind::Dog => "dog",
            CreatureKind::Rabbit => "rabbit",
            CreatureKind::Bird => "bird",
        }
    }

    /// Numeric id handed to the renderer in flat buffers
    pub fn index(&self) -> u32 {
        match self {
            CreatureKind::Cat => 0,
            CreatureKind::Dog => 1,
            CreatureKind::Rabbit => 2,
            CreatureKind::Bird => 3,
        }
    }
}

/// Flower visual archetype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FlowerKind {
    Daisy,
    Tulip,
    Rose,
    Sunflower,
    Lavender,
}

impl Default for FlowerKind {
    fn default() -> Self {
        FlowerKind::Daisy
    }
}

impl FlowerKind {
    /// Resolve a kind string; unknown names fall back to the default
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "daisy" => FlowerKind::Daisy,
            "tulip" => FlowerKind::Tulip,
            "rose" => FlowerKind::Rose,
            "sunflower" => FlowerKind::Sunflower,
            "lavender" => FlowerKind::Lavender,
            _ => FlowerKind::default(),
        }
    }

    pub fn base_scale(&self) -> f32 {
        match self {
            FlowerKind::Daisy => 0.12,
            FlowerKind::Tulip => 0.16,
            FlowerKind::Rose => 0.14,
            FlowerKind::Sunflower => 0.24,
            FlowerKind::Lavender => 0.18,
        }
    }

    pub fn petal_color(&self) -> Color {
        match self {
            FlowerKind::Daisy => Color::rgb8(250, 248, 239),
            FlowerKind::Tulip => Color::rgb8(235, 88, 115),
            FlowerKind::Rose => Color::rgb8(214, 46, 78),
            FlowerKind::Sunflower => Color::rgb8(247, 197, 49),
            FlowerKind::Lavender => Color::rgb8(158, 130, 214),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FlowerKind::Daisy => "daisy",
            FlowerKind::Tulip => "tulip",
            FlowerKind::Rose => "rose",
            FlowerKind::Sunflower => "sunflower",
            FlowerKind::Lavender => "lavender",
        }
    }

    /// Numeric id handed to the renderer in flat buffers
    pub fn index(&self) -> u32 {
        match self {
            FlowerKind::Daisy => 0,
            FlowerKind::Tulip => 1,
            FlowerKind::Rose => 2,
            FlowerKind::Sunflower => 3,
            FlowerKind::Lavender => 4,
        }
    }
}
