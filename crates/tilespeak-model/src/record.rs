use crate::axes::{Category, DrillDownContext, EmotionLevel};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError(pub String);

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ValidationError {}

/// A canonical record holds exactly this many tiles.
pub const TILES_PER_RECORD: usize = 4;

/// One selectable emoji + short-phrase pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tile {
    pub emoji: String,
    pub words: String,
    pub tile_id: String,
}

impl Tile {
    #[must_use]
    pub fn new(emoji: impl Into<String>, words: impl Into<String>, index: usize) -> Self {
        Self {
            emoji: emoji.into(),
            words: words.into(),
            tile_id: format!("tile_{index}"),
        }
    }

    /// First word of the phrase, lower-cased. Empty phrase yields "".
    #[must_use]
    pub fn first_word(&self) -> String {
        self.words
            .split_whitespace()
            .next()
            .unwrap_or("")
            .to_lowercase()
    }
}

/// Classification and tracking metadata. Field declaration order is the
/// serialized field order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UsageData {
    pub category: Category,
    pub emotion_level: EmotionLevel,
    pub complexity: u32,
    pub frequency_weight: f64,
    pub learning_pattern: String,
    pub conversation_layer: u8,
    pub drill_down_context: DrillDownContext,
    pub content_warning: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AacResponse {
    pub tiles: Vec<Tile>,
    pub spoken_sentence: String,
    pub usage_data: UsageData,
}

/// One canonical corpus line: prompt, four-tile response, preserved raw
/// tile string. Immutable once normalised.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnhancedRecord {
    pub instruction: String,
    pub input: String,
    pub aac_response: AacResponse,
    pub raw_output: String,
}

impl EnhancedRecord {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.input.trim().is_empty() {
            return Err(ValidationError("input must not be empty".to_string()));
        }
        if self.raw_output.trim().is_empty() {
            return Err(ValidationError("raw_output must not be empty".to_string()));
        }
        if self.aac_response.tiles.len() != TILES_PER_RECORD {
            return Err(ValidationError(format!(
                "record must hold exactly {TILES_PER_RECORD} tiles, found {}",
                self.aac_response.tiles.len()
            )));
        }
        for tile in &self.aac_response.tiles {
            if tile.emoji.is_empty() {
                return Err(ValidationError("tile emoji must not be empty".to_string()));
            }
            if tile.words.trim().is_empty() {
                return Err(ValidationError("tile words must not be empty".to_string()));
            }
            if tile.tile_id.trim().is_empty() {
                return Err(ValidationError("tile_id must not be empty".to_string()));
            }
        }
        let layer = self.aac_response.usage_data.conversation_layer;
        if !(1..=4).contains(&layer) {
            return Err(ValidationError(format!(
                "conversation_layer must be in 1..=4, found {layer}"
            )));
        }
        if layer > 1 && self.aac_response.usage_data.drill_down_context == DrillDownContext::None {
            return Err(ValidationError(
                "drill-down records (layer > 1) require a non-none drill_down_context".to_string(),
            ));
        }
        Ok(())
    }

    /// Lower-cased words across all tiles, for graph trigger matching.
    #[must_use]
    pub fn tile_words(&self) -> Vec<String> {
        self.aac_response
            .tiles
            .iter()
            .map(|t| t.words.to_lowercase())
            .collect()
    }
}
