use crate::axes::{Category, EmotionLevel};
use crate::record::Tile;
use serde::{Deserialize, Serialize};

/// One `graph_nodes` line. Node ids follow master-corpus order: `node_<i>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphNode {
    pub id: String,
    pub input: String,
    pub raw_output: String,
    pub category: Category,
    pub emotion: EmotionLevel,
    pub tiles: Vec<Tile>,
}

/// One `graph_edges` line: a directed, weighted follow-up link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
    pub trigger: String,
    pub strength: f64,
}

/// A record suitable to open a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Starter {
    pub id: String,
    pub input: String,
    pub raw_output: String,
    pub category: Category,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TraceOption {
    pub trigger_word: String,
    pub response_raw_output: String,
    pub node_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TraceStep {
    pub depth: u32,
    pub node_id: String,
    pub input: String,
    pub raw_output: String,
    pub next_options: Vec<TraceOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConversationTrace {
    pub id: String,
    pub category: Category,
    pub steps: Vec<TraceStep>,
}

/// The single-object `starters_and_traces` artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct StartersAndTraces {
    pub starters: Vec<Starter>,
    pub traces: Vec<ConversationTrace>,
}
