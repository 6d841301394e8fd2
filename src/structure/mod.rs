//! Procedural structure generation
//!
//! Turns (seed, growth, detail tier) into a hierarchical descriptor of
//! trunk, branches, leaf clusters, twiglets, and flowers. Everything is
//! derived from the analytic seed chain, so identical inputs always produce
//! a bit-identical descriptor and the tree only changes when growth does.

pub mod cache;
pub mod descriptor;
pub mod flowers;
pub mod generator;

pub use cache::StructureCache;
pub use descriptor::{Branch, Flower, LeafCluster, StructureDescriptor, Trunk, Twig};
pub use generator::generate;
