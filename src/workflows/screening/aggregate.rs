use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::density::DensityMetrics;
use super::domain::CandidateRecord;

/// Batch-wide knobs for the density aggregator.
///
/// Signal-like and evidence-like field classification runs on field *names*,
/// not values: a name containing any keyword from a set belongs to that set's
/// metric. The two keyword lists are disjoint today, but a name matching both
/// counts toward both metrics independently; that is intentional, not a bug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateSettings {
    pub role_field: String,
    pub id_field: String,
    pub max_fields_tracked: usize,
    pub signal_name_keywords: Vec<String>,
    pub evidence_name_keywords: Vec<String>,
}

impl Default for AggregateSettings {
    fn default() -> Self {
        Self {
            role_field: "Role_Type".to_string(),
            id_field: "Person_ID".to_string(),
            max_fields_tracked: 40,
            signal_name_keywords: [
                "signal", "score", "rating", "rank", "fit", "priority", "strength", "weakness",
            ]
            .iter()
            .map(|keyword| keyword.to_string())
            .collect(),
            evidence_name_keywords: [
                "github", "scholar", "patent", "hugging", "repo", "paper", "publication",
                "talk", "summary",
            ]
            .iter()
            .map(|keyword| keyword.to_string())
            .collect(),
        }
    }
}

/// Descriptive statistics for one aggregation scope (global or one role).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScopeStats {
    pub row_count: usize,
    pub unique_ids: usize,
    pub missing_person_id: usize,
    pub nonempty_fields_avg: f64,
    pub signal_fields_avg: f64,
    pub evidence_fields_avg: f64,
}

impl ScopeStats {
    pub fn metrics(&self) -> DensityMetrics {
        DensityMetrics {
            nonempty_fields_avg: self.nonempty_fields_avg,
            signal_fields_avg: self.signal_fields_avg,
            evidence_fields_avg: self.evidence_fields_avg,
        }
    }
}

/// Scope-keyed density inputs: one global entry plus one per observed
/// role-type value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityInputs {
    pub global: ScopeStats,
    pub by_role: BTreeMap<String, ScopeStats>,
}

impl DensityInputs {
    /// Stats for a role bucket, falling back to the global scope when the
    /// role has no dedicated bucket.
    pub fn for_role(&self, role_value: &str) -> &ScopeStats {
        self.by_role.get(role_value).unwrap_or(&self.global)
    }
}

#[derive(Default)]
struct ScopeAccumulator {
    row_count: usize,
    ids: BTreeSet<String>,
    missing_person_id: usize,
    nonempty_total: usize,
    signal_total: usize,
    evidence_total: usize,
}

impl ScopeAccumulator {
    fn absorb(&mut self, counts: &RecordCounts, person_id: Option<&str>) {
        self.row_count += 1;
        match person_id {
            Some(id) => {
                self.ids.insert(id.to_string());
            }
            None => self.missing_person_id += 1,
        }
        self.nonempty_total += counts.nonempty;
        self.signal_total += counts.signal;
        self.evidence_total += counts.evidence;
    }

    fn finish(self) -> ScopeStats {
        ScopeStats {
            row_count: self.row_count,
            unique_ids: self.ids.len(),
            missing_person_id: self.missing_person_id,
            nonempty_fields_avg: average(self.nonempty_total, self.row_count),
            signal_fields_avg: average(self.signal_total, self.row_count),
            evidence_fields_avg: average(self.evidence_total, self.row_count),
        }
    }
}

struct RecordCounts {
    nonempty: usize,
    signal: usize,
    evidence: usize,
}

fn average(total: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    round3(total as f64 / count as f64)
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

fn name_matches(field_name: &str, keywords: &[String]) -> bool {
    let lowered = field_name.to_lowercase();
    keywords.iter().any(|keyword| lowered.contains(keyword.as_str()))
}

/// Scan a batch once and produce the global and per-role density inputs.
///
/// Field names are collected across the whole batch, sorted alphabetically,
/// and truncated at `max_fields_tracked`, so the denominators are identical
/// for every record in the batch. Purely descriptive: no judgment, no I/O.
pub fn aggregate(records: &[CandidateRecord], settings: &AggregateSettings) -> DensityInputs {
    let mut tracked: Vec<String> = records
        .iter()
        .flat_map(CandidateRecord::field_names)
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    tracked.truncate(settings.max_fields_tracked);

    let signal_fields: Vec<&String> = tracked
        .iter()
        .filter(|name| name_matches(name, &settings.signal_name_keywords))
        .collect();
    let evidence_fields: Vec<&String> = tracked
        .iter()
        .filter(|name| name_matches(name, &settings.evidence_name_keywords))
        .collect();

    let mut global = ScopeAccumulator::default();
    let mut by_role: BTreeMap<String, ScopeAccumulator> = BTreeMap::new();

    for record in records {
        let counts = RecordCounts {
            nonempty: tracked
                .iter()
                .filter(|name| record.is_populated(name))
                .count(),
            signal: signal_fields
                .iter()
                .filter(|name| record.is_populated(name))
                .count(),
            evidence: evidence_fields
                .iter()
                .filter(|name| record.is_populated(name))
                .count(),
        };

        let person_id = record.text(&settings.id_field);
        global.absorb(&counts, person_id.as_deref());

        if let Some(role_value) = record.text(&settings.role_field) {
            by_role
                .entry(role_value)
                .or_default()
                .absorb(&counts, person_id.as_deref());
        }
    }

    DensityInputs {
        global: global.finish(),
        by_role: by_role
            .into_iter()
            .map(|(role, accumulator)| (role, accumulator.finish()))
            .collect(),
    }
}
