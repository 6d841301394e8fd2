//! Deterministic seeded randomness
//!
//! Everything "random" in the garden flows through these pure hash
//! functions, so a generated structure is stable across frames and only
//! changes when its seed or inputs change. Sub-seeds are derived
//! analytically from a parent seed plus an offset rather than drawn from a
//! shared counter, so generation order never affects reproducibility.

/// Seed substituted when the caller hands us a non-finite value
pub const DEFAULT_SEED: u32 = 0x5eed_0042;

/// Mix a 32-bit seed into a well-distributed 32-bit hash
fn mix(seed: u32) -> u32 {
    let mut h = seed.wrapping_add(0x9e37_79b9);
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    h
}

/// hash(seed) -> float in [0, 1). Pure and stateless; bit-identical output
/// for identical input across calls and re-renders.
pub fn hash(seed: u32) -> f32 {
    // 24 mantissa-safe bits so the f32 conversion is exact
    (mix(seed) >> 8) as f32 / (1u32 << 24) as f32
}

/// Derive a child seed from a parent seed and an index.
/// tree seed -> branch seed -> leaf seed all chain through here.
pub fn derive(parent: u32, index: u32) -> u32 {
    mix(parent ^ index.wrapping_mul(0x0a5c_b071))
}

/// Sanitize a raw seed from the boundary (a JS number). Non-finite or
/// negative values fall back to the fixed default instead of letting NaN
/// poison an entire generated structure.
pub fn sanitize(raw: f64) -> u32 {
    if raw.is_finite() && raw >= 0.0 {
        (raw as u64 & 0xffff_ffff) as u32
    } else {
        DEFAULT_SEED
    }
}

/// Uniform draw in [min, max)
pub fn range(seed: u32, min: f32, max: f32) -> f32 {
    min + hash(seed) * (max - min)
}

/// Uniform angle in [0, TAU)
pub fn angle(seed: u32) -> f32 {
    hash(seed) * std::f32::consts::TAU
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_pure() {
        for seed in [0u32, 1, 42, 0xdead_beef, u32::MAX] {
            assert_eq!(hash(seed).to_bits(), hash(seed).to_bits());
        }
    }

    #[test]
    fn test_hash_in_unit_interval() {
        for i in 0..10_000u32 {
            let v = hash(i.wrapping_mul(2654435761));
            assert!((0.0..1.0).contains(&v), "hash({}) = {} out of range", i, v);
        }
    }

    #[test]
    fn test_hash_spreads_nearby_seeds() {
        // Consecutive seeds should not produce visibly correlated values
        let a = hash(100);
        let b = hash(101);
        assert!((a - b).abs() > 0.0001);
    }

    #[test]
    fn test_derive_is_pure_and_distinct() {
        let parent = 7;
        assert_eq!(derive(parent, 3), derive(parent, 3));
        assert_ne!(derive(parent, 3), derive(parent, 4));
        assert_ne!(derive(parent, 3), derive(parent + 1, 3));
    }

    #[test]
    fn test_seed_chain_independent_of_order() {
        // Deriving leaf seeds in any order gives the same values
        let tree = 99;
        let branch = derive(tree, 2);
        let forward: Vec<u32> = (0..8).map(|i| derive(branch, i)).collect();
        let mut reverse: Vec<u32> = (0..8).rev().map(|i| derive(branch, i)).collect();
        reverse.reverse();
        assert_eq!(forward, reverse);
    }

    #[test]
    fn test_sanitize_rejects_non_finite() {
        assert_eq!(sanitize(f64::NAN), DEFAULT_SEED);
        assert_eq!(sanitize(f64::INFINITY), DEFAULT_SEED);
        assert_eq!(sanitize(f64::NEG_INFINITY), DEFAULT_SEED);
        assert_eq!(sanitize(-1.0), DEFAULT_SEED);
        assert_eq!(sanitize(12345.0), 12345);
    }

    #[test]
    fn test_range_bounds() {
        for i in 0..1000u32 {
            let v = range(i, 2.0, 5.0);
            assert!((2.0..5.0).contains(&v));
        }
    }
}
