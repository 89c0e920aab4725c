use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::DensityLevel;

/// Minimum per-row averages a scope must meet for each density check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityThresholds {
    pub nonempty_fields_min: f64,
    pub signal_fields_min: f64,
    pub evidence_fields_min: f64,
}

/// The metric triple a scope presents for classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityMetrics {
    pub nonempty_fields_avg: f64,
    pub signal_fields_avg: f64,
    pub evidence_fields_avg: f64,
}

/// Outcome of classifying one scope's metrics against a family's thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityAssessment {
    pub density_level: DensityLevel,
    pub explanation: String,
    pub thresholds: DensityThresholds,
    pub inputs: DensityMetrics,
    pub passed_checks: [bool; 3],
    pub passed_count: u8,
}

/// Per-family minimum thresholds for the three density metrics.
///
/// The keys here are a wider vocabulary than [`super::domain::RoleFamily`]:
/// the two tables are maintained separately on purpose, and a family key with
/// no entry falls back to the `applied` row. Do not collapse the two layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityPolicy {
    thresholds: BTreeMap<String, DensityThresholds>,
}

impl DensityPolicy {
    pub const FALLBACK_KEY: &'static str = "applied";

    pub fn new(thresholds: BTreeMap<String, DensityThresholds>) -> Self {
        Self { thresholds }
    }

    pub fn thresholds_for(&self, family_key: &str) -> DensityThresholds {
        let key = family_key.trim().to_lowercase();
        self.thresholds
            .get(key.as_str())
            .or_else(|| self.thresholds.get(Self::FALLBACK_KEY))
            .copied()
            .unwrap_or(DensityThresholds {
                nonempty_fields_min: 0.0,
                signal_fields_min: 0.0,
                evidence_fields_min: 0.0,
            })
    }

    pub fn has_entry(&self, family_key: &str) -> bool {
        let key = family_key.trim().to_lowercase();
        self.thresholds.contains_key(key.as_str())
    }

    /// Pure threshold count: each metric compared `>=` its minimum, and the
    /// number of passed checks selects the level. No weighting, no partial
    /// credit.
    pub fn classify(&self, family_key: &str, inputs: DensityMetrics) -> DensityAssessment {
        let thresholds = self.thresholds_for(family_key);

        let passed_checks = [
            inputs.nonempty_fields_avg >= thresholds.nonempty_fields_min,
            inputs.signal_fields_avg >= thresholds.signal_fields_min,
            inputs.evidence_fields_avg >= thresholds.evidence_fields_min,
        ];
        let passed_count = passed_checks.iter().filter(|passed| **passed).count() as u8;

        let density_level = match passed_count {
            3 => DensityLevel::Strong,
            2 => DensityLevel::Adequate,
            1 => DensityLevel::Weak,
            _ => DensityLevel::Deficient,
        };

        let explanation = format!(
            "{passed_count}/3 density checks passed against '{}' thresholds \
             (nonempty {:.3}>={:.1}, signal {:.3}>={:.1}, evidence {:.3}>={:.1})",
            family_key.trim().to_lowercase(),
            inputs.nonempty_fields_avg,
            thresholds.nonempty_fields_min,
            inputs.signal_fields_avg,
            thresholds.signal_fields_min,
            inputs.evidence_fields_avg,
            thresholds.evidence_fields_min,
        );

        DensityAssessment {
            density_level,
            explanation,
            thresholds,
            inputs,
            passed_checks,
            passed_count,
        }
    }
}

impl Default for DensityPolicy {
    fn default() -> Self {
        let table: [(&str, DensityThresholds); 9] = [
            ("frontier", DensityThresholds { nonempty_fields_min: 18.0, signal_fields_min: 6.0, evidence_fields_min: 3.0 }),
            ("research", DensityThresholds { nonempty_fields_min: 18.0, signal_fields_min: 6.0, evidence_fields_min: 3.0 }),
            ("infra", DensityThresholds { nonempty_fields_min: 16.0, signal_fields_min: 5.0, evidence_fields_min: 3.0 }),
            ("applied", DensityThresholds { nonempty_fields_min: 14.0, signal_fields_min: 5.0, evidence_fields_min: 2.0 }),
            ("product", DensityThresholds { nonempty_fields_min: 13.0, signal_fields_min: 4.0, evidence_fields_min: 2.0 }),
            ("solutions", DensityThresholds { nonempty_fields_min: 12.0, signal_fields_min: 4.0, evidence_fields_min: 2.0 }),
            ("evangelism", DensityThresholds { nonempty_fields_min: 10.0, signal_fields_min: 3.0, evidence_fields_min: 1.0 }),
            ("gtm", DensityThresholds { nonempty_fields_min: 10.0, signal_fields_min: 3.0, evidence_fields_min: 1.0 }),
            ("leadership", DensityThresholds { nonempty_fields_min: 12.0, signal_fields_min: 3.0, evidence_fields_min: 1.0 }),
        ];

        Self {
            thresholds: table
                .into_iter()
                .map(|(family, thresholds)| (family.to_string(), thresholds))
                .collect(),
        }
    }
}
