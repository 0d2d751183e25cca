use serde::Deserialize;

/// One decoded shard line. Shape detection is serde-driven: a line carrying
/// `raw_output` is enhanced, a line carrying `output` is legacy; anything
/// else is a schema mismatch at the call site.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawExample {
    Enhanced(EnhancedExample),
    Legacy(LegacyExample),
}

#[derive(Debug, Clone, Deserialize)]
pub struct LegacyExample {
    #[serde(default)]
    pub instruction: Option<String>,
    pub input: String,
    pub output: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnhancedExample {
    #[serde(default)]
    pub instruction: Option<String>,
    pub input: String,
    pub raw_output: String,
    #[serde(default)]
    pub aac_response: Option<RawAacResponse>,
}

/// Lenient mirror of `AacResponse`: enhanced shards in the wild carry extra
/// bookkeeping fields and partial usage data, so nothing here is required
/// and unknown fields pass through.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAacResponse {
    #[serde(default)]
    pub spoken_sentence: Option<String>,
    #[serde(default)]
    pub usage_data: Option<RawUsageData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawUsageData {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub emotion_level: Option<String>,
    #[serde(default)]
    pub frequency_weight: Option<f64>,
    #[serde(default)]
    pub learning_pattern: Option<String>,
    #[serde(default)]
    pub conversation_layer: Option<i64>,
    #[serde(default)]
    pub drill_down_context: Option<String>,
    #[serde(default)]
    pub content_warning: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::RawExample;

    #[test]
    fn legacy_line_decodes_as_legacy() {
        let raw = r#"{"instruction":"AAC","input":"How are you?","output":"😊 Good, 😐 Okay"}"#;
        match serde_json::from_str::<RawExample>(raw).expect("decode") {
            RawExample::Legacy(l) => assert_eq!(l.output, "😊 Good, 😐 Okay"),
            RawExample::Enhanced(_) => panic!("expected legacy shape"),
        }
    }

    #[test]
    fn enhanced_line_with_extras_decodes_as_enhanced() {
        let raw = r#"{
            "input": "You picked pizza! What toppings?",
            "raw_output": "🍄 Mushrooms, 🥓 Bacon, 🧄 Pepperoni, 🧀 Cheese",
            "aac_response": {
                "tiles": [{"emoji":"🍄","words":"Mushrooms","tile_id":"tile_1"}],
                "spoken_sentence": "Next, I want mushrooms.",
                "usage_data": {
                    "category": "food_choices",
                    "conversation_layer": 2,
                    "drill_down_context": "pizza_toppings_layer2",
                    "context_type": "drill_down"
                }
            }
        }"#;
        match serde_json::from_str::<RawExample>(raw).expect("decode") {
            RawExample::Enhanced(e) => {
                let usage = e.aac_response.expect("aac").usage_data.expect("usage");
                assert_eq!(usage.conversation_layer, Some(2));
                assert_eq!(usage.category.as_deref(), Some("food_choices"));
            }
            RawExample::Legacy(_) => panic!("expected enhanced shape"),
        }
    }

    #[test]
    fn neither_shape_is_a_decode_error() {
        assert!(serde_json::from_str::<RawExample>(r#"{"input":"only a prompt"}"#).is_err());
        assert!(serde_json::from_str::<RawExample>(r#"[1,2,3]"#).is_err());
    }
}
