//! Phyllotaxis flower placement
//!
//! Flowers fill the bed the way seeds fill a sunflower head: each index
//! advances by the golden angle while the radius grows with the square root
//! of the index, giving an even, non-overlapping organic spread.

use crate::data::FlowerBed;
use crate::growth::DetailTier;
use crate::random::{derive, range};

use super::descriptor::Flower;
use super::generator::GOLDEN_ANGLE;

/// Innermost placement radius, keeping flowers off the trunk
const BASE_RADIUS: f32 = 0.9;
/// Radial gap contributed per sqrt(index)
const RING_SPACING: f32 = 0.22;

/// Place every configured flower, capped at the tier's maximum. Beds are
/// flattened in config order so the tier cap keeps a stable prefix.
pub fn place_flowers(seed: u32, beds: &[FlowerBed], tier: DetailTier) -> Vec<Flower> {
    beds.iter()
        .flat_map(|bed| (0..bed.count).map(move |_| bed.kind))
        .take(tier.flower_cap() as usize)
        .enumerate()
        .map(|(i, kind)| {
            let index = i as u32;
            let theta = i as f32 * GOLDEN_ANGLE;
            let radius = BASE_RADIUS + (i as f32).sqrt() * RING_SPACING;

            Flower {
                index,
                x: theta.sin() * radius,
                z: theta.cos() * radius,
                kind,
                scale: kind.base_scale() * range(derive(seed, index), 0.8, 1.25),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::FlowerKind;

    fn beds() -> Vec<FlowerBed> {
        vec![
            FlowerBed {
                kind: FlowerKind::Tulip,
                count: 20,
            },
            FlowerBed {
                kind: FlowerKind::Sunflower,
                count: 30,
            },
        ]
    }

    #[test]
    fn test_placement_is_deterministic() {
        let a = place_flowers(9, &beds(), DetailTier::High);
        let b = place_flowers(9, &beds(), DetailTier::High);
        assert_eq!(a, b);
    }

    #[test]
    fn test_tier_caps_count_with_stable_prefix() {
        let high = place_flowers(9, &beds(), DetailTier::High);
        let low = place_flowers(9, &beds(), DetailTier::Low);

        assert_eq!(high.len(), 50);
        assert_eq!(low.len(), DetailTier::Low.flower_cap() as usize);
        for (h, l) in high.iter().zip(&low) {
            assert_eq!(h.index, l.index);
            assert_eq!(h.x, l.x);
            assert_eq!(h.z, l.z);
            assert_eq!(h.kind, l.kind);
        }
    }

    #[test]
    fn test_flowers_do_not_crowd() {
        let flowers = place_flowers(9, &beds(), DetailTier::High);
        for (i, a) in flowers.iter().enumerate() {
            for b in &flowers[i + 1..] {
                let dx = a.x - b.x;
                let dz = a.z - b.z;
                let dist = (dx * dx + dz * dz).sqrt();
                assert!(
                    dist > 0.12,
                    "flowers {} and {} overlap at distance {}",
                    a.index,
                    b.index,
                    dist
                );
            }
        }
    }

    #[test]
    fn test_radius_grows_outward() {
        let flowers = place_flowers(9, &beds(), DetailTier::High);
        let r = |f: &Flower| (f.x * f.x + f.z * f.z).sqrt();
        assert!(r(&flowers[0]) >= BASE_RADIUS - 0.001);
        assert!(r(flowers.last().unwrap()) > r(&flowers[0]));
    }

    #[test]
    fn test_empty_beds_produce_no_flowers() {
        assert!(place_flowers(9, &[], DetailTier::High).is_empty());
    }
}
