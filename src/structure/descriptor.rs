//! Renderer-facing structure records
//!
//! Plain transform data. The GPU pipeline consuming these lives outside the
//! engine; nothing here knows about meshes or shaders.

use serde::Serialize;

use crate::data::FlowerKind;
use crate::math::{Color, Vec3};

/// Complete generated garden structure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructureDescriptor {
    pub trunk: Trunk,
    pub branches: Vec<Branch>,
    pub flowers: Vec<Flower>,
}

impl StructureDescriptor {
    pub fn leaf_count(&self) -> usize {
        self.branches.iter().map(|b| b.leaves.len()).sum()
    }

    pub fn twig_count(&self) -> usize {
        self.branches.iter().map(|b| b.twigs.len()).sum()
    }
}

/// Trunk segment rising from the garden origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Trunk {
    pub height: f32,
    pub radius: f32,
    /// Slight lean direction for an organic silhouette
    pub lean: Vec3,
}

/// One primary branch off the trunk
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Branch {
    /// Stable index around the trunk (macro placement, tier-independent)
    pub index: u32,
    pub origin: Vec3,
    pub direction: Vec3,
    pub length: f32,
    pub thickness: f32,
    /// Upward bend factor applied along the branch
    pub curve: f32,
    pub leaves: Vec<LeafCluster>,
    pub twigs: Vec<Twig>,
}

impl Branch {
    /// Point along the branch at parameter t in [0, 1], including curve lift
    pub fn point_at(&self, t: f32) -> Vec3 {
        let mut p = self.origin + self.direction.scale(self.length * t);
        p.y += self.curve * self.length * t * t;
        p
    }
}

/// A puff of foliage attached to a branch
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LeafCluster {
    /// (branch index, leaf index) — stable across detail tiers
    pub branch_index: u32,
    pub leaf_index: u32,
    pub position: Vec3,
    /// Euler rotation in radians
    pub rotation: Vec3,
    pub scale: f32,
    pub color: Color,
    /// Wind oscillation parameters
    pub sway_phase: f32,
    pub sway_amplitude: f32,
    pub sway_frequency: f32,
}

/// Small decorative sub-branch, present only at higher detail tiers
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Twig {
    pub branch_index: u32,
    pub twig_index: u32,
    pub origin: Vec3,
    pub direction: Vec3,
    pub length: f32,
    pub thickness: f32,
}

/// One flower on the garden bed (ground plane, so position is x/z)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Flower {
    pub index: u32,
    pub x: f32,
    pub z: f32,
    pub kind: FlowerKind,
    pub scale: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_point_at_endpoints() {
        let branch = Branch {
            index: 0,
            origin: Vec3::new(0.0, 1.0, 0.0),
            direction: Vec3::RIGHT,
            length: 2.0,
            thickness: 0.1,
            curve: 0.0,
            leaves: vec![],
            twigs: vec![],
        };
        assert_eq!(branch.point_at(0.0), branch.origin);
        let tip = branch.point_at(1.0);
        assert!((tip.x - 2.0).abs() < 0.0001);
    }

    #[test]
    fn test_curve_lifts_the_tip() {
        let branch = Branch {
            index: 0,
            origin: Vec3::ZERO,
            direction: Vec3::RIGHT,
            length: 1.0,
            thickness: 0.1,
            curve: 0.3,
            leaves: vec![],
            twigs: vec![],
        };
        assert!(branch.point_at(1.0).y > branch.point_at(0.5).y);
        assert!(branch.point_at(0.5).y > 0.0);
    }
}
