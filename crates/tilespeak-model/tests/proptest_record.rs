// SPDX-License-Identifier: Apache-2.0

use proptest::prelude::*;
use tilespeak_model::{Category, DrillDownContext, EmotionLevel};

proptest! {
    #[test]
    fn category_wire_form_roundtrips(name in "[a-z][a-z_]{0,30}") {
        let category = Category::from_wire(&name);
        prop_assert_eq!(category.as_str(), name.as_str());
        let encoded = serde_json::to_string(&category).expect("encode");
        let decoded: Category = serde_json::from_str(&encoded).expect("decode");
        prop_assert_eq!(decoded, category);
    }

    #[test]
    fn emotion_level_parse_accepts_only_wire_names(raw in "[a-z]{1,12}") {
        match EmotionLevel::from_wire(&raw) {
            Some(level) => prop_assert_eq!(level.as_str(), raw.as_str()),
            None => prop_assert!(!["low", "medium", "high"].contains(&raw.as_str())),
        }
    }

    #[test]
    fn drill_down_context_parse_is_exact(raw in "[a-z_]{1,24}") {
        if let Some(ctx) = DrillDownContext::from_wire(&raw) {
            prop_assert_eq!(ctx.as_str(), raw.as_str());
        }
    }
}
