// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;

use crate::dedup::DedupReport;
use crate::filter::FilterReport;
use crate::loader::LoadReport;
use tilespeak_model::{CorpusSummary, EnhancedRecord};

const EMOTION_KEYS: &[&str] = &["low", "medium", "high"];
const LAYER_KEYS: &[&str] = &["layer_1", "layer_2", "layer_3", "layer_4"];

/// Aggregate one run into the summary manifest. Every breakdown map uses a
/// fixed key set where the axis is closed, so two runs over the same corpus
/// serialise identically.
#[must_use]
pub fn summarize(
    dataset_name: &str,
    version: &str,
    creation_date: &str,
    output_file: &str,
    records: &[EnhancedRecord],
    load: &LoadReport,
    filter: &FilterReport,
    dedup: &DedupReport,
) -> CorpusSummary {
    let mut category_breakdown: BTreeMap<String, u64> = BTreeMap::new();
    let mut emotion_level_breakdown: BTreeMap<String, u64> = EMOTION_KEYS
        .iter()
        .map(|k| ((*k).to_string(), 0))
        .collect();
    let mut learning_patterns: BTreeMap<String, u64> = BTreeMap::new();
    let mut conversation_layers: BTreeMap<String, u64> =
        LAYER_KEYS.iter().map(|k| ((*k).to_string(), 0)).collect();
    let mut drill_down_contexts: BTreeMap<String, u64> = BTreeMap::new();
    let mut sensitive_content_examples: u64 = 0;
    let mut complexity_sum: u64 = 0;

    for record in records {
        let usage = &record.aac_response.usage_data;
        *category_breakdown
            .entry(usage.category.as_str().to_string())
            .or_insert(0) += 1;
        *emotion_level_breakdown
            .entry(usage.emotion_level.as_str().to_string())
            .or_insert(0) += 1;
        *learning_patterns
            .entry(usage.learning_pattern.clone())
            .or_insert(0) += 1;
        *conversation_layers
            .entry(format!("layer_{}", usage.conversation_layer))
            .or_insert(0) += 1;
        *drill_down_contexts
            .entry(usage.drill_down_context.as_str().to_string())
            .or_insert(0) += 1;
        if usage.content_warning {
            sensitive_content_examples += 1;
        }
        complexity_sum += u64::from(usage.complexity);
    }

    let average_complexity = if records.is_empty() {
        0.0
    } else {
        let raw = complexity_sum as f64 / records.len() as f64;
        (raw * 100.0).round() / 100.0
    };

    CorpusSummary {
        dataset_name: dataset_name.to_string(),
        version: version.to_string(),
        creation_date: creation_date.to_string(),
        total_unique_examples: records.len() as u64,
        total_categories: category_breakdown.len() as u64,
        duplicates_removed: dedup.duplicates_removed,
        filtered_out: filter.total_rejected,
        average_complexity,
        category_breakdown,
        emotion_level_breakdown,
        learning_patterns,
        conversation_layers,
        drill_down_contexts,
        sensitive_content_examples,
        per_shard_counts: load.file_counts.clone(),
        output_file: output_file.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::summarize;
    use crate::dedup::DedupReport;
    use crate::filter::FilterReport;
    use crate::loader::LoadReport;
    use tilespeak_model::{
        AacResponse, Category, DrillDownContext, EmotionLevel, EnhancedRecord, Tile, UsageData,
    };

    fn record(category: Category, emotion: EmotionLevel, layer: u8, warn: bool) -> EnhancedRecord {
        EnhancedRecord {
            instruction: "AAC Response".to_string(),
            input: "How are you?".to_string(),
            aac_response: AacResponse {
                tiles: vec![Tile::new("😊", "Good", 1)],
                spoken_sentence: "I choose good.".to_string(),
                usage_data: UsageData {
                    category,
                    emotion_level: emotion,
                    complexity: 4,
                    frequency_weight: 1.0,
                    learning_pattern: "standard".to_string(),
                    conversation_layer: layer,
                    drill_down_context: DrillDownContext::None,
                    content_warning: warn,
                },
            },
            raw_output: "😊 Good, 😐 Okay, 😔 Sad, 💭 Think".to_string(),
        }
    }

    #[test]
    fn closed_axes_always_list_every_key() {
        let summary = summarize(
            "corpus",
            "1",
            "2026-08-29",
            "corpus.jsonl",
            &[record(Category::General, EmotionLevel::Low, 1, false)],
            &LoadReport::default(),
            &FilterReport::default(),
            &DedupReport::default(),
        );
        assert_eq!(summary.emotion_level_breakdown.len(), 3);
        assert_eq!(summary.emotion_level_breakdown.get("high"), Some(&0));
        assert_eq!(summary.conversation_layers.len(), 4);
        assert_eq!(summary.conversation_layers.get("layer_1"), Some(&1));
        assert_eq!(summary.conversation_layers.get("layer_4"), Some(&0));
    }

    #[test]
    fn total_categories_counts_distinct_strings() {
        let records = vec![
            record(Category::General, EmotionLevel::Low, 1, false),
            record(Category::General, EmotionLevel::Low, 1, false),
            record(
                Category::Other("celebration".to_string()),
                EmotionLevel::High,
                2,
                true,
            ),
        ];
        let summary = summarize(
            "corpus",
            "1",
            "2026-08-29",
            "corpus.jsonl",
            &records,
            &LoadReport::default(),
            &FilterReport::default(),
            &DedupReport::default(),
        );
        assert_eq!(summary.total_categories, 2);
        assert_eq!(summary.category_breakdown.get("general"), Some(&2));
        assert_eq!(summary.category_breakdown.get("celebration"), Some(&1));
        assert_eq!(summary.sensitive_content_examples, 1);
    }

    #[test]
    fn average_complexity_rounds_to_two_decimals() {
        let records = vec![
            record(Category::General, EmotionLevel::Low, 1, false),
            record(Category::General, EmotionLevel::Low, 1, false),
            record(Category::General, EmotionLevel::Low, 1, false),
        ];
        // 12 / 3 = 4.0 exactly; perturb one complexity to force rounding.
        let mut records = records;
        records[0].aac_response.usage_data.complexity = 3;
        let summary = summarize(
            "corpus",
            "1",
            "2026-08-29",
            "corpus.jsonl",
            &records,
            &LoadReport::default(),
            &FilterReport::default(),
            &DedupReport::default(),
        );
        assert!((summary.average_complexity - 3.67).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_corpus_has_zero_average() {
        let summary = summarize(
            "corpus",
            "1",
            "2026-08-29",
            "corpus.jsonl",
            &[],
            &LoadReport::default(),
            &FilterReport::default(),
            &DedupReport::default(),
        );
        assert_eq!(summary.average_complexity, 0.0);
        assert_eq!(summary.total_unique_examples, 0);
    }
}
