//! Structure memoization
//!
//! Regenerating the full descriptor every frame is disallowed on cost
//! grounds; the cache recomputes only when (seed, growth, tier) changes and
//! exposes a revision counter so the consumer knows when to re-upload.

use crate::data::FlowerBed;
use crate::growth::{DetailTier, GrowthState};

use super::descriptor::StructureDescriptor;
use super::generator::generate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CacheKey {
    seed: u32,
    growth: u32,
    tier: DetailTier,
}

/// Memoized structure generation keyed by (seed, growth, tier)
#[derive(Debug)]
pub struct StructureCache {
    key: Option<CacheKey>,
    descriptor: Option<StructureDescriptor>,
    revision: u32,
}

impl StructureCache {
    pub fn new() -> Self {
        Self {
            key: None,
            descriptor: None,
            revision: 0,
        }
    }

    /// Drop the cached descriptor (config reload invalidates everything)
    pub fn invalidate(&mut self) {
        self.key = None;
        self.descriptor = None;
    }

    /// Get the descriptor for the given inputs, regenerating only when one
    /// of the cache keys changed since the previous call
    pub fn descriptor_for(
        &mut self,
        seed: u32,
        growth: &GrowthState,
        tier: DetailTier,
        flower_beds: &[FlowerBed],
    ) -> &StructureDescriptor {
        let key = CacheKey {
            seed,
            growth: growth.cache_key(),
            tier,
        };

        if self.key != Some(key) {
            self.key = Some(key);
            self.revision = self.revision.wrapping_add(1);
            self.descriptor = None;
        }

        self.descriptor
            .get_or_insert_with(|| generate(seed, growth, tier, flower_beds))
    }

    /// Bumped every time the descriptor is regenerated
    pub fn revision(&self) -> u32 {
        self.revision
    }

    pub fn cached(&self) -> Option<&StructureDescriptor> {
        self.descriptor.as_ref()
    }
}

impl Default for StructureCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::growth::compute_growth;

    #[test]
    fn test_same_inputs_do_not_regenerate() {
        let mut cache = StructureCache::new();
        let growth = compute_growth(80);

        cache.descriptor_for(1, &growth, DetailTier::High, &[]);
        let rev = cache.revision();
        for _ in 0..10 {
            cache.descriptor_for(1, &growth, DetailTier::High, &[]);
        }
        assert_eq!(cache.revision(), rev);
    }

    #[test]
    fn test_each_key_component_invalidates() {
        let mut cache = StructureCache::new();
        let growth = compute_growth(80);

        cache.descriptor_for(1, &growth, DetailTier::High, &[]);
        let r0 = cache.revision();

        cache.descriptor_for(2, &growth, DetailTier::High, &[]);
        assert_eq!(cache.revision(), r0 + 1);

        cache.descriptor_for(2, &compute_growth(81), DetailTier::High, &[]);
        assert_eq!(cache.revision(), r0 + 2);

        cache.descriptor_for(2, &compute_growth(81), DetailTier::Low, &[]);
        assert_eq!(cache.revision(), r0 + 3);
    }

    #[test]
    fn test_progress_beyond_cap_shares_key() {
        let mut cache = StructureCache::new();

        cache.descriptor_for(1, &compute_growth(500), DetailTier::High, &[]);
        let rev = cache.revision();
        cache.descriptor_for(1, &compute_growth(9000), DetailTier::High, &[]);
        assert_eq!(cache.revision(), rev);
    }

    #[test]
    fn test_invalidate_forces_regeneration() {
        let mut cache = StructureCache::new();
        let growth = compute_growth(80);

        cache.descriptor_for(1, &growth, DetailTier::High, &[]);
        let rev = cache.revision();
        cache.invalidate();
        assert!(cache.cached().is_none());
        cache.descriptor_for(1, &growth, DetailTier::High, &[]);
        assert_eq!(cache.revision(), rev + 1);
    }
}
