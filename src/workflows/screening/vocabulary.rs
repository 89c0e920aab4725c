use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Frozen mapping from canonical evidence-category names to trigger
/// substrings.
///
/// Categories are the only evidence names the tier tables and narrative
/// composer ever see; triggers are matched as plain lower-case substrings
/// against approved record text. The table is data so it can be audited and
/// diffed independently of the matching code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceVocabulary {
    categories: BTreeMap<String, Vec<String>>,
}

impl EvidenceVocabulary {
    pub fn new(categories: BTreeMap<String, Vec<String>>) -> Self {
        Self { categories }
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn contains(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    pub fn triggers(&self, category: &str) -> Option<&[String]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    /// Categories whose triggers appear anywhere in the lower-cased blob.
    ///
    /// Output order follows the map's key order, so hits arrive already
    /// sorted and unique.
    pub fn hits(&self, blob: &str) -> Vec<String> {
        self.categories
            .iter()
            .filter(|(_, triggers)| triggers.iter().any(|trigger| blob.contains(trigger.as_str())))
            .map(|(category, _)| category.clone())
            .collect()
    }
}

impl Default for EvidenceVocabulary {
    fn default() -> Self {
        let table: [(&str, &[&str]); 14] = [
            (
                "base model training",
                &[
                    "pretraining",
                    "pre-training",
                    "base model",
                    "foundation model",
                    "trained from scratch",
                ],
            ),
            (
                "rlhf training",
                &[
                    "rlhf",
                    "reinforcement learning from human feedback",
                    "preference tuning",
                    "reward model",
                ],
            ),
            (
                "fine tuning",
                &["fine-tun", "fine tun", "finetun", "lora", "peft"],
            ),
            (
                "distributed training",
                &[
                    "fsdp",
                    "deepspeed",
                    "megatron",
                    "tensor parallel",
                    "pipeline parallel",
                    "multi-node training",
                ],
            ),
            (
                "inference optimization",
                &[
                    "quantization",
                    "tensorrt",
                    "kv cache",
                    "speculative decoding",
                    "inference latency",
                    "serving throughput",
                ],
            ),
            (
                "rag system design",
                &[
                    "retrieval-augmented",
                    "retrieval augmented",
                    "rag pipeline",
                    "rag system",
                    "vector database",
                    "vector store",
                ],
            ),
            (
                "agent systems",
                &[
                    "agentic",
                    "multi-agent",
                    "tool use",
                    "function calling",
                    "agent framework",
                ],
            ),
            (
                "model evaluation",
                &[
                    "eval harness",
                    "benchmark suite",
                    "model evaluation",
                    "red team",
                    "mmlu",
                ],
            ),
            (
                "research publications",
                &[
                    "neurips",
                    "icml",
                    "iclr",
                    "arxiv",
                    "first author",
                    "peer-reviewed",
                ],
            ),
            (
                "patent portfolio",
                &["patent", "uspto", "patent-pending"],
            ),
            (
                "open source leadership",
                &[
                    "open source",
                    "open-source",
                    "maintainer",
                    "core contributor",
                ],
            ),
            (
                "developer advocacy",
                &[
                    "developer advocate",
                    "devrel",
                    "conference talk",
                    "keynote",
                    "workshop series",
                ],
            ),
            (
                "customer deployment",
                &[
                    "production deployment",
                    "customer integration",
                    "enterprise rollout",
                    "solution architecture",
                    "proof of concept",
                ],
            ),
            (
                "gtm strategy",
                &[
                    "go-to-market",
                    "sales engineering",
                    "pipeline generation",
                    "quota attainment",
                ],
            ),
        ];

        Self {
            categories: table
                .into_iter()
                .map(|(category, triggers)| {
                    (
                        category.to_string(),
                        triggers.iter().map(|trigger| trigger.to_string()).collect(),
                    )
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triggers_are_lower_case() {
        let vocabulary = EvidenceVocabulary::default();
        for category in vocabulary.category_names() {
            let triggers = vocabulary.triggers(category).expect("category present");
            assert!(!triggers.is_empty(), "{category} has no triggers");
            for trigger in triggers {
                assert_eq!(
                    trigger,
                    &trigger.to_lowercase(),
                    "trigger '{trigger}' in '{category}' is not lower-case"
                );
            }
        }
    }

    #[test]
    fn hits_are_sorted_and_unique() {
        let vocabulary = EvidenceVocabulary::default();
        let blob = "led rlhf and reward model work; neurips first author; rlhf again";
        let hits = vocabulary.hits(blob);
        assert_eq!(
            hits,
            vec!["research publications".to_string(), "rlhf training".to_string()]
        );
    }

    #[test]
    fn no_hits_on_unrelated_text() {
        let vocabulary = EvidenceVocabulary::default();
        assert!(vocabulary.hits("managed a coffee shop in des moines").is_empty());
    }
}
