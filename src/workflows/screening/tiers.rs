use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{DeterminantTier, RoleFamily};

/// Canonical category lists for one role family, in tier_1 → tier_4 order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TierLists {
    pub tier_1: Vec<String>,
    pub tier_2: Vec<String>,
    pub tier_3: Vec<String>,
    pub tier_4: Vec<String>,
}

impl TierLists {
    fn ordered(&self) -> [(DeterminantTier, &[String]); 4] {
        [
            (DeterminantTier::Tier1, self.tier_1.as_slice()),
            (DeterminantTier::Tier2, self.tier_2.as_slice()),
            (DeterminantTier::Tier3, self.tier_3.as_slice()),
            (DeterminantTier::Tier4, self.tier_4.as_slice()),
        ]
    }

    pub fn all_categories(&self) -> impl Iterator<Item = &str> {
        self.tier_1
            .iter()
            .chain(&self.tier_2)
            .chain(&self.tier_3)
            .chain(&self.tier_4)
            .map(String::as_str)
    }
}

/// Declarative anti-inflation constraints that accompany the tier tables.
///
/// The reference rubric declares these flags but does not enforce them during
/// resolution; `enforce` keeps that behavior switchable without touching the
/// tables. With `enforce` off (the default) resolution matches the published
/// rubric outputs exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AntiInflationRules {
    pub single_keyword_never_sufficient: bool,
    pub tier_4_never_upgrades: bool,
    pub tier_3_requires_pairing: bool,
    pub tier_2_requires_tier_1: bool,
    pub enforce: bool,
}

impl Default for AntiInflationRules {
    fn default() -> Self {
        Self {
            single_keyword_never_sufficient: true,
            tier_4_never_upgrades: true,
            tier_3_requires_pairing: true,
            tier_2_requires_tier_1: true,
            enforce: false,
        }
    }
}

/// Per-role-family lookup tables mapping canonical evidence categories to
/// determinant tiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierPolicy {
    families: BTreeMap<RoleFamily, TierLists>,
    pub rules: AntiInflationRules,
}

impl TierPolicy {
    pub fn new(families: BTreeMap<RoleFamily, TierLists>, rules: AntiInflationRules) -> Self {
        Self { families, rules }
    }

    pub fn lists_for(&self, family: RoleFamily) -> Option<&TierLists> {
        self.families.get(&family)
    }

    /// Exact case-insensitive match against the family's tier lists; the
    /// first list containing the category (tier_1 → tier_4 order) wins.
    /// Empty categories and families with no table resolve to `Tier4`.
    pub fn resolve(&self, family: RoleFamily, category: &str) -> DeterminantTier {
        let needle = category.trim().to_lowercase();
        if needle.is_empty() {
            return DeterminantTier::Tier4;
        }

        let Some(lists) = self.families.get(&family) else {
            return DeterminantTier::Tier4;
        };

        for (tier, categories) in lists.ordered() {
            if categories
                .iter()
                .any(|entry| entry.trim().eq_ignore_ascii_case(&needle))
            {
                return tier;
            }
        }

        DeterminantTier::Tier4
    }

    /// Demotion-only gating implied by the anti-inflation flags. Only applied
    /// when `rules.enforce` is set; the default pipeline leaves tiers exactly
    /// as resolved.
    pub fn apply_gating(&self, tiers: &mut [DeterminantTier]) {
        if !self.rules.enforce {
            return;
        }

        if self.rules.tier_2_requires_tier_1
            && !tiers.iter().any(|tier| *tier == DeterminantTier::Tier1)
        {
            for tier in tiers.iter_mut() {
                if *tier == DeterminantTier::Tier2 {
                    *tier = DeterminantTier::Tier3;
                }
            }
        }

        if self.rules.tier_3_requires_pairing {
            let tier_3_count = tiers
                .iter()
                .filter(|tier| **tier == DeterminantTier::Tier3)
                .count();
            if tier_3_count == 1 {
                for tier in tiers.iter_mut() {
                    if *tier == DeterminantTier::Tier3 {
                        *tier = DeterminantTier::Tier4;
                    }
                }
            }
        }

        if self.rules.single_keyword_never_sufficient && tiers.len() == 1 {
            tiers[0] = match tiers[0] {
                DeterminantTier::Tier1 => DeterminantTier::Tier2,
                DeterminantTier::Tier2 => DeterminantTier::Tier3,
                DeterminantTier::Tier3 | DeterminantTier::Tier4 => DeterminantTier::Tier4,
            };
        }
    }
}

fn lists(
    tier_1: &[&str],
    tier_2: &[&str],
    tier_3: &[&str],
    tier_4: &[&str],
) -> TierLists {
    let collect = |entries: &[&str]| entries.iter().map(|entry| entry.to_string()).collect();
    TierLists {
        tier_1: collect(tier_1),
        tier_2: collect(tier_2),
        tier_3: collect(tier_3),
        tier_4: collect(tier_4),
    }
}

impl Default for TierPolicy {
    fn default() -> Self {
        let mut families = BTreeMap::new();

        families.insert(
            RoleFamily::Frontier,
            lists(
                &["base model training", "rlhf training", "distributed training"],
                &["research publications", "model evaluation", "fine tuning"],
                &["open source leadership", "patent portfolio", "inference optimization"],
                &["developer advocacy", "gtm strategy", "customer deployment"],
            ),
        );
        families.insert(
            RoleFamily::Infra,
            lists(
                &["distributed training", "inference optimization"],
                &["open source leadership", "base model training"],
                &["fine tuning", "model evaluation", "rag system design"],
                &["gtm strategy", "developer advocacy"],
            ),
        );
        families.insert(
            RoleFamily::Applied,
            lists(
                &["rag system design", "fine tuning", "agent systems"],
                &["model evaluation", "inference optimization"],
                &["open source leadership", "research publications", "customer deployment"],
                &["gtm strategy"],
            ),
        );
        families.insert(
            RoleFamily::Solutions,
            lists(
                &["customer deployment", "rag system design"],
                &["agent systems", "fine tuning"],
                &["developer advocacy", "inference optimization"],
                &["base model training", "research publications"],
            ),
        );
        families.insert(
            RoleFamily::Evangelism,
            lists(
                &["developer advocacy", "open source leadership"],
                &["agent systems", "rag system design"],
                &["research publications", "model evaluation"],
                &["distributed training", "patent portfolio"],
            ),
        );
        families.insert(
            RoleFamily::Gtm,
            lists(
                &["gtm strategy", "customer deployment"],
                &["developer advocacy"],
                &["agent systems", "rag system design"],
                &["base model training", "rlhf training"],
            ),
        );

        Self {
            families,
            rules: AntiInflationRules::default(),
        }
    }
}
