// SPDX-License-Identifier: Apache-2.0

use tilespeak_model::{RawExample, Tile, TILES_PER_RECORD};
use unicode_segmentation::UnicodeSegmentation;

/// Sentinel emoji for tile parts that carry no non-ASCII grapheme.
pub const FALLBACK_EMOJI: &str = "💬";

const DEFAULT_INSTRUCTION: &str = "AAC Response";

/// Metadata carried through from an enhanced input line. Everything here is
/// preserve-if-present; the classifier fills the gaps.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct CarriedMeta {
    pub category: Option<String>,
    pub emotion_level: Option<String>,
    pub frequency_weight: Option<f64>,
    pub learning_pattern: Option<String>,
    pub conversation_layer: Option<i64>,
    pub drill_down_context: Option<String>,
    pub content_warning: Option<bool>,
    pub spoken_sentence: Option<String>,
}

/// One example after normalisation, before classification and filtering.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Candidate {
    pub instruction: String,
    pub input: String,
    pub raw_output: String,
    pub tiles: Vec<Tile>,
    pub carried: CarriedMeta,
}

pub(crate) fn normalize_example(raw: RawExample) -> Candidate {
    match raw {
        RawExample::Legacy(legacy) => {
            let tiles = parse_tiles(&legacy.output);
            Candidate {
                instruction: legacy
                    .instruction
                    .unwrap_or_else(|| DEFAULT_INSTRUCTION.to_string()),
                input: legacy.input,
                raw_output: legacy.output,
                tiles,
                carried: CarriedMeta::default(),
            }
        }
        RawExample::Enhanced(enhanced) => {
            let tiles = parse_tiles(&enhanced.raw_output);
            let mut carried = CarriedMeta::default();
            if let Some(aac) = enhanced.aac_response {
                carried.spoken_sentence = aac.spoken_sentence.filter(|s| !s.trim().is_empty());
                if let Some(usage) = aac.usage_data {
                    carried.category = usage.category.filter(|s| !s.trim().is_empty());
                    carried.emotion_level = usage.emotion_level;
                    carried.frequency_weight = usage.frequency_weight;
                    carried.learning_pattern =
                        usage.learning_pattern.filter(|s| !s.trim().is_empty());
                    carried.conversation_layer = usage.conversation_layer;
                    carried.drill_down_context =
                        usage.drill_down_context.filter(|s| !s.trim().is_empty());
                    carried.content_warning = usage.content_warning;
                }
            }
            Candidate {
                instruction: enhanced
                    .instruction
                    .unwrap_or_else(|| DEFAULT_INSTRUCTION.to_string()),
                input: enhanced.input,
                raw_output: enhanced.raw_output,
                tiles,
                carried,
            }
        }
    }
}

/// Split a raw tile string on commas and parse up to four tiles. The first
/// non-ASCII grapheme cluster in a part becomes the emoji (every occurrence
/// of it is stripped from the words); parts with no remaining words are
/// skipped.
#[must_use]
pub fn parse_tiles(raw_output: &str) -> Vec<Tile> {
    let mut tiles = Vec::new();
    for part in raw_output.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let (emoji, rest) = split_leading_emoji(part);
        let words = rest
            .trim_matches(|c: char| c.is_whitespace() || c.is_ascii_punctuation())
            .to_string();
        if words.is_empty() {
            continue;
        }
        let emoji = emoji.unwrap_or_else(|| FALLBACK_EMOJI.to_string());
        tiles.push(Tile::new(emoji, words, tiles.len() + 1));
        if tiles.len() == TILES_PER_RECORD {
            break;
        }
    }
    tiles
}

fn split_leading_emoji(part: &str) -> (Option<String>, String) {
    for grapheme in part.graphemes(true) {
        if !grapheme.is_ascii() {
            return (Some(grapheme.to_string()), part.replace(grapheme, ""));
        }
    }
    (None, part.to_string())
}

/// Layer-indexed spoken sentence from the first tile's first word.
#[must_use]
pub fn derive_spoken_sentence(tiles: &[Tile], layer: u8) -> String {
    let first = tiles.first().map(Tile::first_word).unwrap_or_default();
    match layer {
        2 => format!("Next, I want {first}."),
        3 => format!("Then I select {first}."),
        4 => format!("Finally I pick {first}."),
        _ => format!("I choose {first}."),
    }
}
