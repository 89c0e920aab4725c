use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single field value on a sourced candidate record.
///
/// Records arrive from scraping adapters with no enforced schema, so values
/// are either prose/identifier text, a number, or absent. Numbers are coerced
/// to text wherever matching is textual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Empty,
}

impl FieldValue {
    /// Blank strings count as empty alongside the explicit `Empty` marker.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::Number(_) => false,
            FieldValue::Empty => true,
        }
    }

    /// Textual form used by substring matching; numbers render via `Display`.
    pub fn as_text(&self) -> Option<String> {
        match self {
            FieldValue::Text(text) => Some(text.clone()),
            FieldValue::Number(value) => Some(value.to_string()),
            FieldValue::Empty => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

/// Immutable field-name → value mapping for one sourced candidate.
///
/// No closed schema is validated here; missing fields read as empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CandidateRecord {
    fields: BTreeMap<String, FieldValue>,
}

impl CandidateRecord {
    pub fn new(fields: BTreeMap<String, FieldValue>) -> Self {
        Self { fields }
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// True when the field exists and holds a non-blank value.
    pub fn is_populated(&self, field: &str) -> bool {
        self.fields
            .get(field)
            .map(|value| !value.is_empty())
            .unwrap_or(false)
    }

    /// Non-blank textual content of a field, if any.
    pub fn text(&self, field: &str) -> Option<String> {
        self.fields
            .get(field)
            .filter(|value| !value.is_empty())
            .and_then(FieldValue::as_text)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

/// Coarse grouping of role types used to select density thresholds and
/// determinant-tier tables.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RoleFamily {
    Frontier,
    Infra,
    Applied,
    Solutions,
    Evangelism,
    Gtm,
}

impl RoleFamily {
    pub const ALL: [RoleFamily; 6] = [
        RoleFamily::Frontier,
        RoleFamily::Infra,
        RoleFamily::Applied,
        RoleFamily::Solutions,
        RoleFamily::Evangelism,
        RoleFamily::Gtm,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            RoleFamily::Frontier => "frontier",
            RoleFamily::Infra => "infra",
            RoleFamily::Applied => "applied",
            RoleFamily::Solutions => "solutions",
            RoleFamily::Evangelism => "evangelism",
            RoleFamily::Gtm => "gtm",
        }
    }
}

/// Qualitative bucket summarizing how densely populated a scope's fields are
/// relative to role-specific minimums.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DensityLevel {
    Strong,
    Adequate,
    Weak,
    Deficient,
}

impl DensityLevel {
    pub const fn label(self) -> &'static str {
        match self {
            DensityLevel::Strong => "strong",
            DensityLevel::Adequate => "adequate",
            DensityLevel::Weak => "weak",
            DensityLevel::Deficient => "deficient",
        }
    }
}

/// Four-level scale indicating how decisive an evidence category is for a
/// role family.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum DeterminantTier {
    #[serde(rename = "tier_1")]
    Tier1,
    #[serde(rename = "tier_2")]
    Tier2,
    #[serde(rename = "tier_3")]
    Tier3,
    #[serde(rename = "tier_4")]
    Tier4,
}

impl DeterminantTier {
    pub const fn label(self) -> &'static str {
        match self {
            DeterminantTier::Tier1 => "Primary Determinant",
            DeterminantTier::Tier2 => "Strong Determinant",
            DeterminantTier::Tier3 => "Supporting Signal",
            DeterminantTier::Tier4 => "Non-Determinative",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            DeterminantTier::Tier1 => "tier_1",
            DeterminantTier::Tier2 => "tier_2",
            DeterminantTier::Tier3 => "tier_3",
            DeterminantTier::Tier4 => "tier_4",
        }
    }
}

/// Final categorical hiring-fit label derived from the numeric score.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    StrongFit,
    PotentialFit,
    WeakFit,
    InsufficientSignal,
}

impl Verdict {
    pub const fn label(self) -> &'static str {
        match self {
            Verdict::StrongFit => "strong_fit",
            Verdict::PotentialFit => "potential_fit",
            Verdict::WeakFit => "weak_fit",
            Verdict::InsufficientSignal => "insufficient_signal",
        }
    }
}

/// Discrete contributions to a final score, kept for transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponents {
    pub tier_score: i32,
    pub density_factor: f64,
    pub dominant: f64,
    pub evidence_bonus: u32,
}

/// Evaluation output for one candidate record.
///
/// `determinant_tiers` always has the same length as `canonical_evidence`:
/// one tier per evidence hit, same index order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub role_family: RoleFamily,
    pub density_level: DensityLevel,
    pub canonical_evidence: Vec<String>,
    pub determinant_tiers: Vec<DeterminantTier>,
    pub final_score: f64,
    pub verdict: Verdict,
    pub components: ScoreComponents,
}
