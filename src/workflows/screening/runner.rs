use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::aggregate::{self, DensityInputs};
use super::density::DensityAssessment;
use super::domain::{CandidateRecord, Evaluation};
use super::engine::{EvaluationEngine, ScreeningConfig};
use super::narrative::NarrativeEntry;
use super::qc::{self, QcViolation};

/// Fully screened output row for one input record, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenedCandidate {
    pub person_id: Option<String>,
    pub role_type: Option<String>,
    pub density: DensityAssessment,
    pub evaluation: Evaluation,
    pub narrative: Vec<NarrativeEntry>,
}

/// Batch failure taxonomy. Policy misses never land here; they resolve to
/// documented defaults inside the policies themselves.
#[derive(Debug, thiserror::Error)]
pub enum ScreeningError {
    #[error("record {index} failed evaluation QC: {source}")]
    Qc {
        index: usize,
        #[source]
        source: QcViolation,
    },
}

/// Drives the aggregator and the per-record stages across a whole batch.
///
/// The aggregator runs exactly once and is the only synchronization barrier;
/// every later stage is a pure per-record function. Output preserves input
/// order with no deduplication.
pub struct BatchRunner {
    engine: EvaluationEngine,
}

impl BatchRunner {
    pub fn new(config: ScreeningConfig) -> Self {
        Self {
            engine: EvaluationEngine::new(config),
        }
    }

    pub fn config(&self) -> &ScreeningConfig {
        self.engine.config()
    }

    pub fn aggregate(&self, records: &[CandidateRecord]) -> DensityInputs {
        aggregate::aggregate(records, &self.config().aggregate)
    }

    /// Screen the batch; the first QC violation aborts the whole run.
    pub fn run(
        &self,
        records: &[CandidateRecord],
    ) -> Result<Vec<ScreenedCandidate>, ScreeningError> {
        let config = self.config();
        info!(batch_size = records.len(), "screening batch started");

        let inputs = self.aggregate(records);
        debug!(
            role_buckets = inputs.by_role.len(),
            missing_person_id = inputs.global.missing_person_id,
            "density aggregation complete"
        );

        let mut results = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            let person_id = record.text(&config.aggregate.id_field);
            let role_type = record.text(&config.aggregate.role_field);

            let role_family = config
                .role_families
                .resolve(role_type.as_deref().unwrap_or(""));
            let stats = inputs.for_role(role_type.as_deref().unwrap_or(""));
            let density = config
                .density
                .classify(role_family.label(), stats.metrics());

            let evaluation = self.engine.evaluate(record, density.density_level);
            let narrative = config.narrative.sequence(evaluation.role_family, &evaluation);

            qc::validate(&evaluation).map_err(|source| ScreeningError::Qc { index, source })?;

            debug!(
                index,
                role_family = evaluation.role_family.label(),
                final_score = evaluation.final_score,
                verdict = evaluation.verdict.label(),
                "record screened"
            );

            results.push(ScreenedCandidate {
                person_id,
                role_type,
                density,
                evaluation,
                narrative,
            });
        }

        info!(results = results.len(), "screening batch finished");
        Ok(results)
    }
}
