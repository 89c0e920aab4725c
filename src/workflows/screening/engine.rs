use serde::{Deserialize, Serialize};

use super::aggregate::AggregateSettings;
use super::density::DensityPolicy;
use super::domain::{CandidateRecord, DensityLevel, Evaluation};
use super::evidence::{self, EvidenceFieldSets};
use super::narrative::NarrativePlan;
use super::roles::RoleFamilyTable;
use super::scoring::ScoringPolicy;
use super::tiers::TierPolicy;
use super::vocabulary::EvidenceVocabulary;

/// The complete policy surface of the evaluation engine.
///
/// Every table here is static, versionable data: the default value is the
/// frozen production rubric, and tests substitute alternates freely. Nothing
/// in the engine mutates it after construction.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreeningConfig {
    pub vocabulary: EvidenceVocabulary,
    pub field_sets: EvidenceFieldSets,
    pub role_families: RoleFamilyTable,
    pub density: DensityPolicy,
    pub tiers: TierPolicy,
    pub scoring: ScoringPolicy,
    pub aggregate: AggregateSettings,
    pub narrative: NarrativePlan,
}

/// Stateless evaluator binding the per-record stages for one candidate.
///
/// Density is deliberately an input, not something the engine computes: the
/// aggregator runs once per batch and its classification is shared by every
/// record in the same role bucket.
pub struct EvaluationEngine {
    config: ScreeningConfig,
}

impl EvaluationEngine {
    pub fn new(config: ScreeningConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScreeningConfig {
        &self.config
    }

    pub fn evaluate(&self, record: &CandidateRecord, density_level: DensityLevel) -> Evaluation {
        let config = &self.config;

        let raw_role = record
            .text(&config.aggregate.role_field)
            .unwrap_or_default();
        let role_family = config.role_families.resolve(&raw_role);

        let summary = evidence::summarize(record, &config.vocabulary, &config.field_sets);
        let additional = evidence::enrich(record, &config.vocabulary, &config.field_sets, &summary);
        let canonical_evidence = evidence::merge(summary, additional);

        // Parallel arrays: one tier per evidence hit, same index order.
        let mut determinant_tiers: Vec<_> = canonical_evidence
            .iter()
            .map(|category| config.tiers.resolve(role_family, category))
            .collect();
        config.tiers.apply_gating(&mut determinant_tiers);

        let outcome = config.scoring.compute(
            density_level,
            &determinant_tiers,
            canonical_evidence.len(),
        );

        Evaluation {
            role_family,
            density_level,
            canonical_evidence,
            determinant_tiers,
            final_score: outcome.final_score,
            verdict: outcome.verdict,
            components: outcome.components,
        }
    }
}
