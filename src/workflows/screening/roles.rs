use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::RoleFamily;

/// Exact-match lookup from raw role-type strings to role families.
///
/// Resolution is total: unmapped or blank role types resolve to
/// [`RoleFamily::Applied`], a documented default rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleFamilyTable {
    mapping: BTreeMap<String, RoleFamily>,
}

impl RoleFamilyTable {
    pub const DEFAULT_FAMILY: RoleFamily = RoleFamily::Applied;

    pub fn new(mapping: BTreeMap<String, RoleFamily>) -> Self {
        Self { mapping }
    }

    pub fn resolve(&self, raw_role_type: &str) -> RoleFamily {
        let key = raw_role_type.trim();
        if key.is_empty() {
            return Self::DEFAULT_FAMILY;
        }

        self.mapping
            .get(key)
            .copied()
            .unwrap_or(Self::DEFAULT_FAMILY)
    }

    pub fn known_role_types(&self) -> impl Iterator<Item = &str> {
        self.mapping.keys().map(String::as_str)
    }
}

impl Default for RoleFamilyTable {
    fn default() -> Self {
        let table: [(&str, RoleFamily); 18] = [
            ("Research Scientist", RoleFamily::Frontier),
            ("Research Engineer", RoleFamily::Frontier),
            ("Member of Technical Staff - Pretraining", RoleFamily::Frontier),
            ("ML Infrastructure Engineer", RoleFamily::Infra),
            ("Inference Engineer", RoleFamily::Infra),
            ("Platform Engineer", RoleFamily::Infra),
            ("Site Reliability Engineer", RoleFamily::Infra),
            ("Machine Learning Engineer", RoleFamily::Applied),
            ("Applied Scientist", RoleFamily::Applied),
            ("AI Engineer", RoleFamily::Applied),
            ("Solutions Architect", RoleFamily::Solutions),
            ("Forward Deployed Engineer", RoleFamily::Solutions),
            ("Sales Engineer", RoleFamily::Solutions),
            ("Developer Advocate", RoleFamily::Evangelism),
            ("Developer Relations Engineer", RoleFamily::Evangelism),
            ("Community Manager", RoleFamily::Evangelism),
            ("Account Executive", RoleFamily::Gtm),
            ("Partnerships Manager", RoleFamily::Gtm),
        ];

        Self {
            mapping: table
                .into_iter()
                .map(|(role, family)| (role.to_string(), family))
                .collect(),
        }
    }
}
