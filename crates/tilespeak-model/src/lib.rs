#![forbid(unsafe_code)]
//! Tilespeak model SSOT.
//!
//! Every artifact the pipeline reads or writes is declared here: the
//! canonical enhanced record, the raw input shapes, the summary manifest and
//! the conversation-graph wire entities. Serde field order on these structs
//! is the artifact field order.

mod axes;
mod graph;
mod raw;
mod record;
mod summary;

pub use axes::{Category, DrillDownContext, EmotionLevel};
pub use graph::{
    ConversationTrace, GraphEdge, GraphNode, Starter, StartersAndTraces, TraceOption, TraceStep,
};
pub use raw::{EnhancedExample, LegacyExample, RawAacResponse, RawExample, RawUsageData};
pub use record::{AacResponse, EnhancedRecord, Tile, UsageData, ValidationError, TILES_PER_RECORD};
pub use summary::CorpusSummary;

pub const CRATE_NAME: &str = "tilespeak-model";
