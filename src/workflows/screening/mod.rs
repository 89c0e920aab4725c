//! Candidate evaluation and scoring engine.
//!
//! A batch of enriched candidate records flows one direction only: the
//! aggregator derives density inputs, then each record is resolved to a role
//! family, summarized into canonical evidence categories, tiered, scored, and
//! reshaped into a role-aware narrative view before invariant validation.
//! Every stage is a pure function over immutable inputs; all policy lives in
//! versionable tables on [`ScreeningConfig`].

pub mod aggregate;
pub mod density;
pub mod domain;
pub mod engine;
pub mod evidence;
pub mod narrative;
pub mod pipeline;
pub mod qc;
pub mod roles;
pub mod runner;
pub mod scoring;
pub mod tiers;
pub mod vocabulary;

#[cfg(test)]
mod tests;

pub use aggregate::{aggregate, AggregateSettings, DensityInputs, ScopeStats};
pub use density::{DensityAssessment, DensityMetrics, DensityPolicy, DensityThresholds};
pub use domain::{
    CandidateRecord, DensityLevel, DeterminantTier, Evaluation, FieldValue, RoleFamily,
    ScoreComponents, Verdict,
};
pub use engine::{EvaluationEngine, ScreeningConfig};
pub use evidence::EvidenceFieldSets;
pub use narrative::{NarrativeEntry, NarrativeField, NarrativePlan};
pub use pipeline::{
    RecordSource, ResultSink, ScreeningService, ScreeningServiceError, SinkError, SourceError,
};
pub use qc::{validate, QcViolation};
pub use roles::RoleFamilyTable;
pub use runner::{BatchRunner, ScreenedCandidate, ScreeningError};
pub use scoring::{ScoreOutcome, ScoringPolicy, TierWeights, VerdictCutoffs};
pub use tiers::{AntiInflationRules, TierLists, TierPolicy};
pub use vocabulary::EvidenceVocabulary;
