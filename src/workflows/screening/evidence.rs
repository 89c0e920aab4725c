use serde::{Deserialize, Serialize};

use super::domain::CandidateRecord;
use super::vocabulary::EvidenceVocabulary;

/// The two approved field sets the summarizer passes may read.
///
/// The strict pass reads only the scraped artifact summaries; the enrichment
/// pass widens to profile prose and may discover additional categories. Both
/// passes share identical matching semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceFieldSets {
    pub artifact_fields: Vec<String>,
    pub extended_fields: Vec<String>,
}

impl Default for EvidenceFieldSets {
    fn default() -> Self {
        Self {
            artifact_fields: [
                "GitHub_Summary",
                "HuggingFace_Summary",
                "Patent_Summary",
                "Scholar_Summary",
            ]
            .iter()
            .map(|field| field.to_string())
            .collect(),
            extended_fields: [
                "Notable_Repos",
                "Recent_Papers",
                "Conference_Talks",
                "Current_Title",
                "Background_Notes",
            ]
            .iter()
            .map(|field| field.to_string())
            .collect(),
        }
    }
}

/// Lower-cased concatenation of the allowed field values, numbers coerced to
/// text. Missing or blank fields contribute nothing.
fn blob(record: &CandidateRecord, fields: &[String]) -> String {
    let mut parts = Vec::new();
    for field in fields {
        if let Some(text) = record.text(field) {
            parts.push(text.to_lowercase());
        }
    }
    parts.join(" ")
}

/// Strict summarizer: canonical categories present in the artifact fields.
///
/// Output is sorted and unique, which keeps downstream tier resolution
/// deterministic.
pub fn summarize(
    record: &CandidateRecord,
    vocabulary: &EvidenceVocabulary,
    field_sets: &EvidenceFieldSets,
) -> Vec<String> {
    vocabulary.hits(&blob(record, &field_sets.artifact_fields))
}

/// Enrichment pass: additional categories discovered in the extended fields
/// that the strict pass did not already report.
pub fn enrich(
    record: &CandidateRecord,
    vocabulary: &EvidenceVocabulary,
    field_sets: &EvidenceFieldSets,
    known: &[String],
) -> Vec<String> {
    vocabulary
        .hits(&blob(record, &field_sets.extended_fields))
        .into_iter()
        .filter(|category| !known.iter().any(|existing| existing == category))
        .collect()
}

/// Sorted-unique union of the strict and enrichment passes.
pub fn merge(summary: Vec<String>, additional: Vec<String>) -> Vec<String> {
    let mut combined = summary;
    combined.extend(additional);
    combined.sort();
    combined.dedup();
    combined
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> CandidateRecord {
        CandidateRecord::from_pairs([
            (
                "GitHub_Summary",
                "Maintainer of an FSDP training fork; quantization experiments",
            ),
            ("Scholar_Summary", "First author at NeurIPS 2024"),
            ("Background_Notes", "Built a RAG pipeline for internal search"),
            ("Current_Title", "Research Engineer"),
        ])
    }

    #[test]
    fn summarize_reads_only_artifact_fields() {
        let hits = summarize(
            &record(),
            &EvidenceVocabulary::default(),
            &EvidenceFieldSets::default(),
        );
        assert_eq!(
            hits,
            vec![
                "distributed training".to_string(),
                "inference optimization".to_string(),
                "open source leadership".to_string(),
                "research publications".to_string(),
            ]
        );
    }

    #[test]
    fn enrich_reports_only_new_categories() {
        let vocabulary = EvidenceVocabulary::default();
        let field_sets = EvidenceFieldSets::default();
        let known = summarize(&record(), &vocabulary, &field_sets);
        let additional = enrich(&record(), &vocabulary, &field_sets, &known);
        assert_eq!(additional, vec!["rag system design".to_string()]);
    }

    #[test]
    fn merge_is_sorted_and_unique() {
        let merged = merge(
            vec!["rlhf training".to_string(), "fine tuning".to_string()],
            vec!["fine tuning".to_string(), "agent systems".to_string()],
        );
        assert_eq!(
            merged,
            vec![
                "agent systems".to_string(),
                "fine tuning".to_string(),
                "rlhf training".to_string(),
            ]
        );
    }

    #[test]
    fn empty_record_yields_no_hits() {
        let empty = CandidateRecord::default();
        let vocabulary = EvidenceVocabulary::default();
        let field_sets = EvidenceFieldSets::default();
        assert!(summarize(&empty, &vocabulary, &field_sets).is_empty());
        assert!(enrich(&empty, &vocabulary, &field_sets, &[]).is_empty());
    }
}
