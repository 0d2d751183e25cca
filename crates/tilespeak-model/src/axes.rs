use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Communication category of a record.
///
/// The pipeline assigns one of the keyword-inferred members; categories
/// already carried by enhanced input records are preserved verbatim, so the
/// wire form stays open via `Other`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    PositiveEmotion,
    NegativeEmotion,
    Request,
    HelpSeeking,
    BasicNeeds,
    Medical,
    General,
    Other(String),
}

impl Category {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::PositiveEmotion => "positive_emotion",
            Self::NegativeEmotion => "negative_emotion",
            Self::Request => "request",
            Self::HelpSeeking => "help_seeking",
            Self::BasicNeeds => "basic_needs",
            Self::Medical => "medical",
            Self::General => "general",
            Self::Other(name) => name,
        }
    }

    #[must_use]
    pub fn from_wire(input: &str) -> Self {
        match input {
            "positive_emotion" => Self::PositiveEmotion,
            "negative_emotion" => Self::NegativeEmotion,
            "request" => Self::Request,
            "help_seeking" => Self::HelpSeeking,
            "basic_needs" => Self::BasicNeeds,
            "medical" => Self::Medical,
            "general" => Self::General,
            other => Self::Other(other.to_string()),
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_wire(&raw))
    }
}

/// Emotional intensity read from the partner utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionLevel {
    Low,
    Medium,
    High,
}

impl EmotionLevel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    #[must_use]
    pub fn from_wire(input: &str) -> Option<Self> {
        match input {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

impl Display for EmotionLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Drill-down context of a multi-layer record. `None` marks single-layer
/// records; `General` marks drill-downs with no more specific match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrillDownContext {
    Holiday,
    WeatherClothing,
    EmotionManagement,
    HomeActivities,
    SchoolLearning,
    BedtimeRoutine,
    FoodOrdering,
    ActivitySelection,
    MedicalAppointment,
    Shopping,
    Transportation,
    General,
    None,
}

impl DrillDownContext {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Holiday => "holiday",
            Self::WeatherClothing => "weather_clothing",
            Self::EmotionManagement => "emotion_management",
            Self::HomeActivities => "home_activities",
            Self::SchoolLearning => "school_learning",
            Self::BedtimeRoutine => "bedtime_routine",
            Self::FoodOrdering => "food_ordering",
            Self::ActivitySelection => "activity_selection",
            Self::MedicalAppointment => "medical_appointment",
            Self::Shopping => "shopping",
            Self::Transportation => "transportation",
            Self::General => "general",
            Self::None => "none",
        }
    }

    /// Exact-name lookup for contexts already carried by enhanced input.
    #[must_use]
    pub fn from_wire(input: &str) -> Option<Self> {
        match input {
            "holiday" => Some(Self::Holiday),
            "weather_clothing" => Some(Self::WeatherClothing),
            "emotion_management" => Some(Self::EmotionManagement),
            "home_activities" => Some(Self::HomeActivities),
            "school_learning" => Some(Self::SchoolLearning),
            "bedtime_routine" => Some(Self::BedtimeRoutine),
            "food_ordering" => Some(Self::FoodOrdering),
            "activity_selection" => Some(Self::ActivitySelection),
            "medical_appointment" => Some(Self::MedicalAppointment),
            "shopping" => Some(Self::Shopping),
            "transportation" => Some(Self::Transportation),
            "general" => Some(Self::General),
            "none" => Some(Self::None),
            _ => None,
        }
    }
}

impl Display for DrillDownContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
