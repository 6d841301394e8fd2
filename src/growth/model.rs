//! Growth model: accumulated progress -> visual maturity
//!
//! Progress is whatever the host application counts (days together, watering
//! actions, visits). Each stage linearly interpolates its own range so the
//! tree never pops at a stage boundary, and above the top threshold growth
//! is capped so cost stops increasing.

/// One maturity stage with its progress span and interpolation ranges
struct Stage {
    from_progress: f32,
    to_progress: f32,
    scale: (f32, f32),
    branches: (f32, f32),
    leaves: (f32, f32),
}

/// sapling -> young -> mature. Each stage starts where the previous ended,
/// which is what keeps scale and counts continuous across boundaries.
static STAGES: [Stage; 3] = [
    Stage {
        from_progress: 0.0,
        to_progress: 50.0,
        scale: (0.30, 0.55),
        branches: (6.0, 8.0),
        leaves: (24.0, 40.0),
    },
    Stage {
        from_progress: 50.0,
        to_progress: 200.0,
        scale: (0.55, 0.85),
        branches: (8.0, 10.0),
        leaves: (40.0, 72.0),
    },
    Stage {
        from_progress: 200.0,
        to_progress: 500.0,
        scale: (0.85, 1.0),
        branches: (10.0, 12.0),
        leaves: (72.0, 96.0),
    },
];

/// Computed growth snapshot for a progress value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthState {
    /// Progress after clamping (negative input clamps to zero)
    pub progress: u32,
    /// Overall tree scale multiplier
    pub scale: f32,
    /// Number of primary branches
    pub branch_count: u32,
    /// Total leaf clusters to distribute across branches
    pub leaf_budget: u32,
}

impl GrowthState {
    /// Key for structure memoization. Progress beyond the cap maps to the
    /// same key because the generated structure no longer changes.
    pub fn cache_key(&self) -> u32 {
        self.progress.min(STAGES[STAGES.len() - 1].to_progress as u32)
    }
}

fn lerp(range: (f32, f32), t: f32) -> f32 {
    range.0 + (range.1 - range.0) * t
}

/// Map an accumulated progress counter to a growth snapshot
pub fn compute_growth(progress: i64) -> GrowthState {
    let clamped = progress.max(0) as f32;

    let last = &STAGES[STAGES.len() - 1];
    let (stage, t) = if clamped >= last.to_progress {
        // Capped: further progress never increases cost
        (last, 1.0)
    } else {
        let stage = STAGES
            .iter()
            .rev()
            .find(|s| clamped >= s.from_progress)
            .unwrap_or(&STAGES[0]);
        let span = stage.to_progress - stage.from_progress;
        (stage, (clamped - stage.from_progress) / span)
    };

    GrowthState {
        progress: progress.clamp(0, u32::MAX as i64) as u32,
        scale: lerp(stage.scale, t),
        branch_count: lerp(stage.branches, t).floor() as u32,
        leaf_budget: lerp(stage.leaves, t).floor() as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_progress_is_minimum_sapling() {
        let g = compute_growth(0);
        assert!((g.scale - 0.30).abs() < 0.0001);
        assert_eq!(g.branch_count, 6);
        assert_eq!(g.leaf_budget, 24);
    }

    #[test]
    fn test_negative_progress_clamps_to_zero() {
        assert_eq!(compute_growth(-40), compute_growth(0));
    }

    #[test]
    fn test_progress_75_sits_inside_second_stage() {
        let g = compute_growth(75);
        assert!(g.scale > 0.55 && g.scale < 0.85, "scale={}", g.scale);
        assert!(g.branch_count >= 6 && g.branch_count <= 10);
    }

    #[test]
    fn test_monotonic_scale_and_branches() {
        let mut prev = compute_growth(0);
        for p in 1..700 {
            let g = compute_growth(p);
            assert!(g.scale >= prev.scale, "scale shrank at progress {}", p);
            assert!(
                g.branch_count >= prev.branch_count,
                "branches shrank at progress {}",
                p
            );
            assert!(g.leaf_budget >= prev.leaf_budget);
            prev = g;
        }
    }

    #[test]
    fn test_continuous_at_stage_boundaries() {
        for boundary in [50i64, 200] {
            let before = compute_growth(boundary - 1);
            let after = compute_growth(boundary);
            assert!(
                (after.scale - before.scale) < 0.01,
                "scale pops at boundary {}",
                boundary
            );
        }
    }

    #[test]
    fn test_growth_caps_at_top_threshold() {
        let capped = compute_growth(500);
        let beyond = compute_growth(1_000_000);
        assert_eq!(capped.scale, beyond.scale);
        assert_eq!(capped.branch_count, beyond.branch_count);
        assert_eq!(capped.leaf_budget, beyond.leaf_budget);
        assert_eq!(capped.cache_key(), beyond.cache_key());
    }

    #[test]
    fn test_mature_maximum() {
        let g = compute_growth(500);
        assert!((g.scale - 1.0).abs() < 0.0001);
        assert_eq!(g.branch_count, 12);
    }
}
