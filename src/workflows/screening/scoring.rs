use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{DensityLevel, DeterminantTier, ScoreComponents, Verdict};

/// Integer weight contributed by each determinant tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierWeights {
    pub tier_1: i32,
    pub tier_2: i32,
    pub tier_3: i32,
    pub tier_4: i32,
}

impl TierWeights {
    pub const fn weight_for(&self, tier: DeterminantTier) -> i32 {
        match tier {
            DeterminantTier::Tier1 => self.tier_1,
            DeterminantTier::Tier2 => self.tier_2,
            DeterminantTier::Tier3 => self.tier_3,
            DeterminantTier::Tier4 => self.tier_4,
        }
    }
}

impl Default for TierWeights {
    fn default() -> Self {
        Self {
            tier_1: 5,
            tier_2: 3,
            tier_3: 1,
            tier_4: 0,
        }
    }
}

/// Inclusive lower bounds for the verdict buckets; contiguous and exhaustive
/// over `[0, ∞)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VerdictCutoffs {
    pub strong_fit: f64,
    pub potential_fit: f64,
    pub weak_fit: f64,
}

impl VerdictCutoffs {
    pub fn bucket(&self, final_score: f64) -> Verdict {
        if final_score >= self.strong_fit {
            Verdict::StrongFit
        } else if final_score >= self.potential_fit {
            Verdict::PotentialFit
        } else if final_score >= self.weak_fit {
            Verdict::WeakFit
        } else {
            Verdict::InsufficientSignal
        }
    }
}

impl Default for VerdictCutoffs {
    fn default() -> Self {
        Self {
            strong_fit: 14.0,
            potential_fit: 9.0,
            weak_fit: 4.0,
        }
    }
}

/// Combines tier weights, the density multiplier, and a capped evidence bonus
/// into a final deterministic score and verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    pub weights: TierWeights,
    pub density_multipliers: BTreeMap<DensityLevel, f64>,
    pub evidence_bonus_cap: u32,
    pub cutoffs: VerdictCutoffs,
}

/// Score, verdict, and the audit components that produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreOutcome {
    pub final_score: f64,
    pub verdict: Verdict,
    pub components: ScoreComponents,
}

impl ScoringPolicy {
    /// A density level absent from the multiplier table contributes `0.0`,
    /// zeroing the dominant term rather than failing.
    pub fn density_factor(&self, level: DensityLevel) -> f64 {
        self.density_multipliers.get(&level).copied().unwrap_or(0.0)
    }

    pub fn compute(
        &self,
        density_level: DensityLevel,
        determinant_tiers: &[DeterminantTier],
        evidence_count: usize,
    ) -> ScoreOutcome {
        let tier_score: i32 = determinant_tiers
            .iter()
            .map(|tier| self.weights.weight_for(*tier))
            .sum();

        let density_factor = self.density_factor(density_level);
        let dominant = f64::from(tier_score) * density_factor;

        // Evidence never dominates: the raw hit count is hard-capped.
        let evidence_bonus = (evidence_count as u32).min(self.evidence_bonus_cap);

        let final_score = round2(dominant + f64::from(evidence_bonus));
        let verdict = self.cutoffs.bucket(final_score);

        ScoreOutcome {
            final_score,
            verdict,
            components: ScoreComponents {
                tier_score,
                density_factor,
                dominant,
                evidence_bonus,
            },
        }
    }
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        let density_multipliers = [
            (DensityLevel::Strong, 1.0),
            (DensityLevel::Adequate, 0.85),
            (DensityLevel::Weak, 0.6),
            (DensityLevel::Deficient, 0.3),
        ]
        .into_iter()
        .collect();

        Self {
            weights: TierWeights::default(),
            density_multipliers,
            evidence_bonus_cap: 3,
            cutoffs: VerdictCutoffs::default(),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
