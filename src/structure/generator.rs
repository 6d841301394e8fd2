//! Tree structure generation
//!
//! Branches spiral around the trunk at the golden angle across increasing
//! height bands; leaf clusters concentrate at branch tips with a weighted
//! scatter along the branch. All jitter comes from the seed chain, never
//! from shared state, so `generate` is a pure function of its arguments.

use std::f32::consts::PI;

use crate::data::FlowerBed;
use crate::growth::{DetailTier, GrowthState};
use crate::math::{hsv_to_rgb, Vec3};
use crate::random::{angle, derive, hash, range};

use super::descriptor::{Branch, LeafCluster, StructureDescriptor, Trunk, Twig};
use super::flowers::place_flowers;

/// ~137.5 degrees, the angle that never repeats around the trunk
pub const GOLDEN_ANGLE: f32 = PI * (3.0 - 2.23606797749979); // PI * (3 - sqrt 5)

/// Fraction of leaves drawn to the branch tip rather than scattered along it
const TIP_LEAF_WEIGHT: f32 = 0.85;

// Salts separating the sub-seed streams hanging off one branch seed
const SALT_LEAF: u32 = 0x1000;
const SALT_TWIG: u32 = 0x2000;
const SALT_FLOWERS: u32 = 0x8000;

/// Generate the full garden structure for (seed, growth, tier).
/// Identical inputs always produce an identical descriptor.
pub fn generate(
    seed: u32,
    growth: &GrowthState,
    tier: DetailTier,
    flower_beds: &[FlowerBed],
) -> StructureDescriptor {
    let trunk = generate_trunk(seed, growth);
    let branches = generate_branches(seed, growth, tier, &trunk);
    let flowers = place_flowers(derive(seed, SALT_FLOWERS), flower_beds, tier);

    StructureDescriptor {
        trunk,
        branches,
        flowers,
    }
}

fn generate_trunk(seed: u32, growth: &GrowthState) -> Trunk {
    let lean_angle = angle(derive(seed, 1));
    let lean_amount = range(derive(seed, 2), 0.01, 0.06);

    Trunk {
        height: 1.2 + 2.8 * growth.scale,
        radius: 0.08 + 0.14 * growth.scale,
        lean: Vec3::new(
            lean_angle.sin() * lean_amount,
            1.0,
            lean_angle.cos() * lean_amount,
        )
        .normalize(),
    }
}

fn generate_branches(
    seed: u32,
    growth: &GrowthState,
    tier: DetailTier,
    trunk: &Trunk,
) -> Vec<Branch> {
    let count = growth.branch_count;
    // Leaf budget split evenly; the tier caps it afterwards so lower tiers
    // carry a stable-id prefix of the higher tier's clusters
    let budget_per_branch = (growth.leaf_budget / count.max(1)).max(1);
    let leaf_cap = tier.leaf_cap(budget_per_branch);

    (0..count)
        .map(|i| {
            let branch_seed = derive(seed, i);

            // Macro placement: golden-angle azimuth, rising height bands.
            // Only the index and seed matter here, never the tier.
            let azimuth = i as f32 * GOLDEN_ANGLE + range(derive(branch_seed, 1), -0.15, 0.15);
            let height_frac = (i as f32 + 1.0) / (count as f32 + 1.0);
            let attach_height = trunk.height * (0.30 + 0.62 * height_frac)
                + range(derive(branch_seed, 2), -0.05, 0.05);

            // Lower branches reach out, upper branches reach up
            let elevation = 0.18
                + 0.55 * height_frac
                + range(derive(branch_seed, 3), -0.08, 0.08);

            let direction = Vec3::new(
                azimuth.sin() * elevation.cos(),
                elevation.sin(),
                azimuth.cos() * elevation.cos(),
            )
            .normalize();

            let origin = Vec3::new(
                direction.x * trunk.radius,
                attach_height,
                direction.z * trunk.radius,
            );

            let length = (0.5 + 1.4 * (1.0 - 0.45 * height_frac))
                * growth.scale
                * range(derive(branch_seed, 4), 0.85, 1.15);
            let thickness =
                (trunk.radius * (0.45 - 0.22 * height_frac)).max(0.015);
            let curve = range(derive(branch_seed, 5), 0.05, 0.30);

            let mut branch = Branch {
                index: i,
                origin,
                direction,
                length,
                thickness,
                curve,
                leaves: Vec::new(),
                twigs: Vec::new(),
            };

            let leaves = generate_leaves(&branch, derive(branch_seed, SALT_LEAF), leaf_cap);
            let twigs = generate_twigs(&branch, derive(branch_seed, SALT_TWIG), tier);
            branch.leaves = leaves;
            branch.twigs = twigs;
            branch
        })
        .collect()
}

fn generate_leaves(branch: &Branch, leaf_stream: u32, cap: u32) -> Vec<LeafCluster> {
    (0..cap)
        .map(|j| {
            let leaf_seed = derive(leaf_stream, j);

            // Weighted draw: most clusters crowd the tip, the rest scatter
            // along the branch
            let t = if hash(derive(leaf_seed, 0)) < TIP_LEAF_WEIGHT {
                range(derive(leaf_seed, 1), 0.82, 1.0)
            } else {
                range(derive(leaf_seed, 1), 0.25, 0.78)
            };

            let jitter_angle = angle(derive(leaf_seed, 2));
            let jitter_radius = range(derive(leaf_seed, 3), 0.02, 0.14);
            let mut position = branch.point_at(t);
            position.x += jitter_angle.sin() * jitter_radius;
            position.y += range(derive(leaf_seed, 4), -0.04, 0.10);
            position.z += jitter_angle.cos() * jitter_radius;

            // Hue jitter around foliage green
            let hue = range(derive(leaf_seed, 5), 0.24, 0.37);
            let color = hsv_to_rgb(hue, 0.62, range(derive(leaf_seed, 6), 0.55, 0.8));

            LeafCluster {
                branch_index: branch.index,
                leaf_index: j,
                position,
                rotation: Vec3::new(
                    range(derive(leaf_seed, 7), -0.4, 0.4),
                    angle(derive(leaf_seed, 8)),
                    range(derive(leaf_seed, 9), -0.4, 0.4),
                ),
                scale: range(derive(leaf_seed, 10), 0.10, 0.22),
                color,
                sway_phase: angle(derive(leaf_seed, 11)),
                sway_amplitude: range(derive(leaf_seed, 12), 0.04, 0.16),
                sway_frequency: range(derive(leaf_seed, 13), 0.8, 1.6),
            }
        })
        .collect()
}

fn generate_twigs(branch: &Branch, twig_stream: u32, tier: DetailTier) -> Vec<Twig> {
    (0..tier.twig_count())
        .map(|k| {
            let twig_seed = derive(twig_stream, k);
            let t = range(derive(twig_seed, 0), 0.3, 0.8);
            let radial = angle(derive(twig_seed, 1));

            // Push outward from the branch axis with a slight upward bias
            let direction = Vec3::new(
                branch.direction.x + radial.sin() * 0.7,
                branch.direction.y.abs() * 0.3 + 0.25,
                branch.direction.z + radial.cos() * 0.7,
            )
            .normalize();

            Twig {
                branch_index: branch.index,
                twig_index: k,
                origin: branch.point_at(t),
                direction,
                length: branch.length * range(derive(twig_seed, 2), 0.18, 0.32),
                thickness: branch.thickness * 0.35,
            }
        })
        .collect()
}
