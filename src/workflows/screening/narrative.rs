use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::domain::{Evaluation, RoleFamily};

/// Evaluation fields a narrative view may surface, in presentation terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrativeField {
    DeterminantTiers,
    CanonicalEvidence,
    DensityLevel,
    FinalScore,
    Verdict,
}

impl NarrativeField {
    pub const fn key(self) -> &'static str {
        match self {
            NarrativeField::DeterminantTiers => "determinant_tiers",
            NarrativeField::CanonicalEvidence => "canonical_evidence",
            NarrativeField::DensityLevel => "density_level",
            NarrativeField::FinalScore => "final_score",
            NarrativeField::Verdict => "verdict",
        }
    }
}

/// One surfaced field of the narrative view, in presentation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeEntry {
    pub field: NarrativeField,
    pub value: Value,
}

/// Role-aware canonical presentation orders for evaluation results.
///
/// Sequencing is a view/reshape, not data loss: fields outside a family's
/// order list (for example `score_components`) simply are not surfaced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativePlan {
    orders: BTreeMap<RoleFamily, Vec<NarrativeField>>,
}

impl NarrativePlan {
    pub fn new(orders: BTreeMap<RoleFamily, Vec<NarrativeField>>) -> Self {
        Self { orders }
    }

    pub fn order_for(&self, family: RoleFamily) -> &[NarrativeField] {
        self.orders
            .get(&family)
            .or_else(|| self.orders.get(&RoleFamily::Applied))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn sequence(&self, family: RoleFamily, evaluation: &Evaluation) -> Vec<NarrativeEntry> {
        self.order_for(family)
            .iter()
            .map(|field| NarrativeEntry {
                field: *field,
                value: extract(*field, evaluation),
            })
            .collect()
    }
}

fn extract(field: NarrativeField, evaluation: &Evaluation) -> Value {
    match field {
        NarrativeField::DeterminantTiers => json!(evaluation.determinant_tiers),
        NarrativeField::CanonicalEvidence => json!(evaluation.canonical_evidence),
        NarrativeField::DensityLevel => json!(evaluation.density_level),
        NarrativeField::FinalScore => json!(evaluation.final_score),
        NarrativeField::Verdict => json!(evaluation.verdict),
    }
}

impl Default for NarrativePlan {
    fn default() -> Self {
        use NarrativeField::*;

        let mut orders = BTreeMap::new();
        // Technical families lead with the evidence trail; field-facing
        // families lead with the verdict.
        orders.insert(
            RoleFamily::Frontier,
            vec![DeterminantTiers, CanonicalEvidence, DensityLevel, FinalScore, Verdict],
        );
        orders.insert(
            RoleFamily::Infra,
            vec![DeterminantTiers, CanonicalEvidence, DensityLevel, FinalScore, Verdict],
        );
        orders.insert(
            RoleFamily::Applied,
            vec![CanonicalEvidence, DeterminantTiers, DensityLevel, FinalScore, Verdict],
        );
        orders.insert(
            RoleFamily::Solutions,
            vec![DensityLevel, CanonicalEvidence, DeterminantTiers, FinalScore, Verdict],
        );
        orders.insert(
            RoleFamily::Evangelism,
            vec![Verdict, FinalScore, CanonicalEvidence, DensityLevel],
        );
        orders.insert(
            RoleFamily::Gtm,
            vec![Verdict, FinalScore, DensityLevel],
        );

        Self { orders }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::screening::domain::{
        DensityLevel, DeterminantTier, ScoreComponents, Verdict,
    };

    fn evaluation() -> Evaluation {
        Evaluation {
            role_family: RoleFamily::Gtm,
            density_level: DensityLevel::Adequate,
            canonical_evidence: vec!["gtm strategy".to_string()],
            determinant_tiers: vec![DeterminantTier::Tier1],
            final_score: 7.25,
            verdict: Verdict::WeakFit,
            components: ScoreComponents {
                tier_score: 5,
                density_factor: 0.85,
                dominant: 4.25,
                evidence_bonus: 1,
            },
        }
    }

    #[test]
    fn gtm_order_surfaces_verdict_first() {
        let plan = NarrativePlan::default();
        let entries = plan.sequence(RoleFamily::Gtm, &evaluation());
        let fields: Vec<_> = entries.iter().map(|entry| entry.field.key()).collect();
        assert_eq!(fields, vec!["verdict", "final_score", "density_level"]);
        assert_eq!(entries[0].value, json!("weak_fit"));
        assert_eq!(entries[1].value, json!(7.25));
    }

    #[test]
    fn missing_family_falls_back_to_applied_order() {
        use NarrativeField::*;
        let mut orders = BTreeMap::new();
        orders.insert(RoleFamily::Applied, vec![FinalScore, Verdict]);
        let plan = NarrativePlan::new(orders);

        let entries = plan.sequence(RoleFamily::Frontier, &evaluation());
        let fields: Vec<_> = entries.iter().map(|entry| entry.field).collect();
        assert_eq!(fields, vec![FinalScore, Verdict]);
    }

    #[test]
    fn tiers_serialize_with_underscored_keys() {
        let plan = NarrativePlan::default();
        let entries = plan.sequence(RoleFamily::Frontier, &evaluation());
        assert_eq!(entries[0].field, NarrativeField::DeterminantTiers);
        assert_eq!(entries[0].value, json!(["tier_1"]));
    }
}
