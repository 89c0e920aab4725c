use super::domain::Evaluation;

/// Structural or semantic invariant broken by an evaluation result.
///
/// Verdict and density-level membership are enforced by the type system and
/// need no runtime check here.
#[derive(Debug, thiserror::Error)]
pub enum QcViolation {
    #[error("final score {0} is not a finite number")]
    NonFiniteScore(f64),
    #[error("final score {0} is negative")]
    NegativeScore(f64),
    #[error("canonical evidence present but determinant tiers empty")]
    EvidenceWithoutTiers,
    #[error("parallel arrays diverge: {evidence} evidence entries, {tiers} tiers")]
    LengthMismatch { evidence: usize, tiers: usize },
}

/// Assert the evaluation invariants, returning the first violation found.
///
/// Callers decide the blast radius; the batch runner treats any violation as
/// fatal to the whole run.
pub fn validate(evaluation: &Evaluation) -> Result<(), QcViolation> {
    if !evaluation.final_score.is_finite() {
        return Err(QcViolation::NonFiniteScore(evaluation.final_score));
    }
    if evaluation.final_score < 0.0 {
        return Err(QcViolation::NegativeScore(evaluation.final_score));
    }
    if !evaluation.canonical_evidence.is_empty() && evaluation.determinant_tiers.is_empty() {
        return Err(QcViolation::EvidenceWithoutTiers);
    }
    if evaluation.canonical_evidence.len() != evaluation.determinant_tiers.len() {
        return Err(QcViolation::LengthMismatch {
            evidence: evaluation.canonical_evidence.len(),
            tiers: evaluation.determinant_tiers.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::screening::domain::{
        DensityLevel, DeterminantTier, RoleFamily, ScoreComponents, Verdict,
    };

    fn valid() -> Evaluation {
        Evaluation {
            role_family: RoleFamily::Applied,
            density_level: DensityLevel::Weak,
            canonical_evidence: vec!["fine tuning".to_string()],
            determinant_tiers: vec![DeterminantTier::Tier1],
            final_score: 4.0,
            verdict: Verdict::WeakFit,
            components: ScoreComponents {
                tier_score: 5,
                density_factor: 0.6,
                dominant: 3.0,
                evidence_bonus: 1,
            },
        }
    }

    #[test]
    fn accepts_a_well_formed_evaluation() {
        assert!(validate(&valid()).is_ok());
    }

    #[test]
    fn rejects_negative_and_non_finite_scores() {
        let mut evaluation = valid();
        evaluation.final_score = -0.5;
        assert!(matches!(
            validate(&evaluation),
            Err(QcViolation::NegativeScore(_))
        ));

        evaluation.final_score = f64::NAN;
        assert!(matches!(
            validate(&evaluation),
            Err(QcViolation::NonFiniteScore(_))
        ));
    }

    #[test]
    fn rejects_evidence_without_tiers() {
        let mut evaluation = valid();
        evaluation.determinant_tiers.clear();
        assert!(matches!(
            validate(&evaluation),
            Err(QcViolation::EvidenceWithoutTiers)
        ));
    }

    #[test]
    fn rejects_diverging_parallel_arrays() {
        let mut evaluation = valid();
        evaluation
            .determinant_tiers
            .push(DeterminantTier::Tier4);
        assert!(matches!(
            validate(&evaluation),
            Err(QcViolation::LengthMismatch { evidence: 1, tiers: 2 })
        ));
    }
}
