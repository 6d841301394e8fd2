pub mod config;
pub mod kinds;

pub use config::{CreatureSpec, FlowerBed, GardenConfig, SkyMode};
pub use kinds::{CreatureKind, FlowerKind};
