// SPDX-License-Identifier: Apache-2.0

use crate::normalize::Candidate;
use tilespeak_model::{Category, DrillDownContext, EmotionLevel, UsageData};

const POSITIVE_WORDS: &[&str] = &["happy", "joy", "excited", "good", "great"];
const NEGATIVE_WORDS: &[&str] = &["sad", "upset", "angry", "mad", "hurt"];
const REQUEST_WORDS: &[&str] = &["want", "need", "like", "prefer"];
const HELP_WORDS: &[&str] = &["help", "assistance", "support"];
const NEEDS_WORDS: &[&str] = &["eat", "drink", "food", "hungry", "thirsty"];
const MEDICAL_WORDS: &[&str] = &["pain", "hurt", "sick", "doctor"];

const HIGH_INTENSITY: &[&str] = &["very", "extremely", "really", "so", "incredibly"];
const MEDIUM_INTENSITY: &[&str] = &["pretty", "quite", "somewhat", "little"];

const LAYER_TOKENS: &[(&str, u8)] = &[("layer1", 1), ("layer2", 2), ("layer3", 3), ("layer4", 4)];

// First matching entry wins; keep this order fixed.
const CONTEXT_KEYWORDS: &[(DrillDownContext, &[&str])] = &[
    (DrillDownContext::Holiday, &["holiday"]),
    (DrillDownContext::WeatherClothing, &["weather", "clothing"]),
    (DrillDownContext::EmotionManagement, &["emotion", "coping"]),
    (DrillDownContext::HomeActivities, &["room", "kitchen", "home"]),
    (DrillDownContext::SchoolLearning, &["subject", "math", "school"]),
    (DrillDownContext::BedtimeRoutine, &["bedtime", "sleep"]),
    (DrillDownContext::FoodOrdering, &["food", "pizza", "meal"]),
    (DrillDownContext::ActivitySelection, &["activity", "game"]),
    (
        DrillDownContext::MedicalAppointment,
        &["doctor", "medical", "appointment"],
    ),
    (DrillDownContext::Shopping, &["shopping", "store"]),
    (DrillDownContext::Transportation, &["transport", "car"]),
];

/// Assign the five classification axes. Pure and deterministic; values
/// already carried by enhanced input are preserved over any heuristic.
pub(crate) fn classify(candidate: &Candidate) -> UsageData {
    let input_lower = candidate.input.to_lowercase();

    let category = match candidate.carried.category.as_deref() {
        Some(carried) => Category::from_wire(carried.trim()),
        None => infer_category(&input_lower),
    };

    let emotion_level = candidate
        .carried
        .emotion_level
        .as_deref()
        .and_then(EmotionLevel::from_wire)
        .unwrap_or_else(|| infer_emotion(&input_lower));

    let scan = layer_scan_string(candidate);
    let conversation_layer = extract_layer(&scan)
        .or_else(|| carried_layer(candidate))
        .unwrap_or(1);

    let drill_down_context = candidate
        .carried
        .drill_down_context
        .as_deref()
        .and_then(DrillDownContext::from_wire)
        .filter(|ctx| *ctx != DrillDownContext::None)
        .or_else(|| map_context(&scan))
        .unwrap_or(if conversation_layer > 1 {
            DrillDownContext::General
        } else {
            DrillDownContext::None
        });

    UsageData {
        category,
        emotion_level,
        complexity: candidate.tiles.len() as u32,
        frequency_weight: candidate.carried.frequency_weight.unwrap_or(1.0),
        learning_pattern: candidate
            .carried
            .learning_pattern
            .clone()
            .unwrap_or_else(|| "standard".to_string()),
        conversation_layer,
        drill_down_context,
        content_warning: candidate.carried.content_warning.unwrap_or(false),
    }
}

fn contains_any(input: &str, words: &[&str]) -> bool {
    words.iter().any(|w| input.contains(w))
}

fn infer_category(input_lower: &str) -> Category {
    if contains_any(input_lower, POSITIVE_WORDS) {
        Category::PositiveEmotion
    } else if contains_any(input_lower, NEGATIVE_WORDS) {
        Category::NegativeEmotion
    } else if contains_any(input_lower, REQUEST_WORDS) {
        Category::Request
    } else if contains_any(input_lower, HELP_WORDS) {
        Category::HelpSeeking
    } else if contains_any(input_lower, NEEDS_WORDS) {
        Category::BasicNeeds
    } else if contains_any(input_lower, MEDICAL_WORDS) {
        Category::Medical
    } else {
        Category::General
    }
}

fn infer_emotion(input_lower: &str) -> EmotionLevel {
    if contains_any(input_lower, HIGH_INTENSITY) {
        EmotionLevel::High
    } else if contains_any(input_lower, MEDIUM_INTENSITY) {
        EmotionLevel::Medium
    } else {
        EmotionLevel::Low
    }
}

/// Layer and context tokens live in the instruction and in any raw carried
/// drill-down tag (e.g. "pizza_toppings_layer2").
fn layer_scan_string(candidate: &Candidate) -> String {
    let mut scan = candidate.instruction.to_lowercase();
    if let Some(raw_context) = candidate.carried.drill_down_context.as_deref() {
        scan.push(' ');
        scan.push_str(&raw_context.to_lowercase());
    }
    scan
}

fn extract_layer(scan: &str) -> Option<u8> {
    LAYER_TOKENS
        .iter()
        .find(|(token, _)| scan.contains(token))
        .map(|(_, layer)| *layer)
}

fn carried_layer(candidate: &Candidate) -> Option<u8> {
    candidate
        .carried
        .conversation_layer
        .and_then(|layer| u8::try_from(layer).ok())
        .filter(|layer| (1..=4).contains(layer))
}

fn map_context(scan: &str) -> Option<DrillDownContext> {
    CONTEXT_KEYWORDS
        .iter()
        .find(|(_, keywords)| contains_any(scan, keywords))
        .map(|(context, _)| *context)
}
