pub mod lod;
pub mod model;

pub use lod::DetailTier;
pub use model::{compute_growth, GrowthState};
