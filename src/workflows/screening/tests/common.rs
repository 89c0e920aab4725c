use crate::workflows::screening::domain::CandidateRecord;
use crate::workflows::screening::engine::ScreeningConfig;

pub(super) fn config() -> ScreeningConfig {
    ScreeningConfig::default()
}

/// Densely evidenced frontier researcher.
pub(super) fn frontier_candidate() -> CandidateRecord {
    CandidateRecord::from_pairs([
        ("Person_ID", "cand-001"),
        ("Role_Type", "Research Scientist"),
        (
            "GitHub_Summary",
            "Maintainer of a Megatron fork; tensor parallel training at scale",
        ),
        (
            "Scholar_Summary",
            "First author at NeurIPS; RLHF preference tuning study",
        ),
        (
            "Background_Notes",
            "Led pretraining for a foundation model lab",
        ),
    ])
}

/// Applied engineer with open-source evaluation work.
pub(super) fn applied_candidate() -> CandidateRecord {
    CandidateRecord::from_pairs([
        ("Person_ID", "cand-002"),
        ("Role_Type", "AI Engineer"),
        ("GitHub_Summary", "Core contributor to an eval harness"),
    ])
}

/// Record with a role type no mapping table knows.
pub(super) fn unknown_role_candidate() -> CandidateRecord {
    CandidateRecord::from_pairs([
        ("Person_ID", "cand-003"),
        ("Role_Type", "Chief Vibes Officer"),
        ("Background_Notes", "Built a RAG pipeline for internal search"),
    ])
}

/// Record carrying no evidentiary text and no identity.
pub(super) fn sparse_candidate() -> CandidateRecord {
    CandidateRecord::from_pairs([("Role_Type", "Account Executive")])
}
