use super::common::*;
use crate::workflows::screening::domain::{DensityLevel, DeterminantTier, RoleFamily, Verdict};
use crate::workflows::screening::engine::EvaluationEngine;

#[test]
fn frontier_candidate_composes_both_summarizer_passes() {
    let engine = EvaluationEngine::new(config());

    let evaluation = engine.evaluate(&frontier_candidate(), DensityLevel::Strong);

    assert_eq!(evaluation.role_family, RoleFamily::Frontier);
    assert_eq!(
        evaluation.canonical_evidence,
        vec![
            "base model training".to_string(),
            "distributed training".to_string(),
            "open source leadership".to_string(),
            "research publications".to_string(),
            "rlhf training".to_string(),
        ]
    );
    assert_eq!(
        evaluation.determinant_tiers,
        vec![
            DeterminantTier::Tier1,
            DeterminantTier::Tier1,
            DeterminantTier::Tier3,
            DeterminantTier::Tier2,
            DeterminantTier::Tier1,
        ]
    );
    assert_eq!(evaluation.components.tier_score, 19);
    assert_eq!(evaluation.components.evidence_bonus, 3);
    assert_eq!(evaluation.final_score, 22.0);
    assert_eq!(evaluation.verdict, Verdict::StrongFit);
}

#[test]
fn unknown_role_type_evaluates_under_the_applied_family() {
    let engine = EvaluationEngine::new(config());

    let evaluation = engine.evaluate(&unknown_role_candidate(), DensityLevel::Weak);

    assert_eq!(evaluation.role_family, RoleFamily::Applied);
    assert_eq!(
        evaluation.canonical_evidence,
        vec!["rag system design".to_string()]
    );
    assert_eq!(evaluation.determinant_tiers, vec![DeterminantTier::Tier1]);
    // 5 * 0.6 + 1 evidence bonus.
    assert_eq!(evaluation.final_score, 4.0);
    assert_eq!(evaluation.verdict, Verdict::WeakFit);
}

#[test]
fn record_without_evidence_floors_at_insufficient_signal() {
    let engine = EvaluationEngine::new(config());

    let evaluation = engine.evaluate(&sparse_candidate(), DensityLevel::Strong);

    assert_eq!(evaluation.role_family, RoleFamily::Gtm);
    assert!(evaluation.canonical_evidence.is_empty());
    assert!(evaluation.determinant_tiers.is_empty());
    assert_eq!(evaluation.final_score, 0.0);
    assert_eq!(evaluation.verdict, Verdict::InsufficientSignal);
}

#[test]
fn parallel_arrays_always_match_in_length() {
    let engine = EvaluationEngine::new(config());
    for record in [
        frontier_candidate(),
        applied_candidate(),
        unknown_role_candidate(),
        sparse_candidate(),
    ] {
        for level in [
            DensityLevel::Strong,
            DensityLevel::Adequate,
            DensityLevel::Weak,
            DensityLevel::Deficient,
        ] {
            let evaluation = engine.evaluate(&record, level);
            assert_eq!(
                evaluation.canonical_evidence.len(),
                evaluation.determinant_tiers.len()
            );
        }
    }
}

#[test]
fn gating_flag_changes_scores_without_touching_evidence() {
    let ungated = EvaluationEngine::new(config());
    let mut gated_config = config();
    gated_config.tiers.rules.enforce = true;
    let gated = EvaluationEngine::new(gated_config);

    let record = applied_candidate();
    let before = ungated.evaluate(&record, DensityLevel::Strong);
    let after = gated.evaluate(&record, DensityLevel::Strong);

    // Reference behavior: tier_2 stands on its own. Gated behavior: without a
    // tier_1 anchor the tier_2 hit demotes and the score drops.
    assert_eq!(
        before.determinant_tiers,
        vec![DeterminantTier::Tier2, DeterminantTier::Tier3]
    );
    assert_eq!(before.final_score, 6.0);
    assert_eq!(
        after.determinant_tiers,
        vec![DeterminantTier::Tier3, DeterminantTier::Tier3]
    );
    assert_eq!(after.final_score, 4.0);
    assert_eq!(before.canonical_evidence, after.canonical_evidence);
}

#[test]
fn evaluation_is_idempotent() {
    let engine = EvaluationEngine::new(config());
    let record = frontier_candidate();
    assert_eq!(
        engine.evaluate(&record, DensityLevel::Adequate),
        engine.evaluate(&record, DensityLevel::Adequate)
    );
}
