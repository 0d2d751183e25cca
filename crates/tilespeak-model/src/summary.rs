use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The summary manifest written next to the master corpus. One object per
/// pipeline run; `creation_date` is the only clock-derived field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CorpusSummary {
    pub dataset_name: String,
    pub version: String,
    pub creation_date: String,
    pub total_unique_examples: u64,
    pub total_categories: u64,
    pub duplicates_removed: u64,
    pub filtered_out: u64,
    pub average_complexity: f64,
    pub category_breakdown: BTreeMap<String, u64>,
    pub emotion_level_breakdown: BTreeMap<String, u64>,
    pub learning_patterns: BTreeMap<String, u64>,
    pub conversation_layers: BTreeMap<String, u64>,
    pub drill_down_contexts: BTreeMap<String, u64>,
    pub sensitive_content_examples: u64,
    pub per_shard_counts: BTreeMap<String, u64>,
    pub output_file: String,
}
