//! Level-of-detail selection
//!
//! Tiers gate only sub-structure budgets (leaf clusters, twiglets, flower
//! caps, facial detail). Macro placement never depends on the tier, so
//! switching tiers cannot move the tree's silhouette.

/// Detail tier for generated structures
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DetailTier {
    Low,
    Medium,
    High,
}

impl DetailTier {
    /// Map a quality/distance hint in [0, 1] to a tier. Monotonic: a lower
    /// hint never yields a higher tier.
    pub fn select(hint: f32) -> Self {
        // NaN lands on the middle tier rather than poisoning the structure
        // cache key; infinities clamp through the ordinary thresholds
        if hint.is_nan() {
            return DetailTier::Medium;
        }
        if hint < 0.34 {
            DetailTier::Low
        } else if hint < 0.75 {
            DetailTier::Medium
        } else {
            DetailTier::High
        }
    }

    /// Leaf clusters allowed per branch, as a cap over the growth budget
    pub fn leaf_cap(&self, budget_per_branch: u32) -> u32 {
        match self {
            DetailTier::High => budget_per_branch,
            DetailTier::Medium => (budget_per_branch * 2 / 3).max(1),
            DetailTier::Low => (budget_per_branch / 3).max(1),
        }
    }

    /// Decorative twiglets per branch
    pub fn twig_count(&self) -> u32 {
        match self {
            DetailTier::High => 2,
            DetailTier::Medium => 1,
            DetailTier::Low => 0,
        }
    }

    /// Maximum flowers in the garden bed
    pub fn flower_cap(&self) -> u32 {
        match self {
            DetailTier::High => 64,
            DetailTier::Medium => 40,
            DetailTier::Low => 24,
        }
    }

    /// Whether creatures carry facial detail parts
    pub fn facial_detail(&self) -> bool {
        matches!(self, DetailTier::High | DetailTier::Medium)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DetailTier::Low => "low",
            DetailTier::Medium => "medium",
            DetailTier::High => "high",
        }
    }
}
