// SPDX-License-Identifier: Apache-2.0

//! Conversation graph over the master corpus: follow-up edges between
//! records, conversation starters, and sampled traces.

#![forbid(unsafe_code)]

use std::error::Error;
use std::fmt::{self, Display};

mod build;
mod sampler;
mod write;

pub use build::{build_graph, ConversationGraph};
pub use sampler::{find_starters, sample_traces, MAX_TRACES, MAX_TRACE_STEPS};
pub use write::{write_graph, GraphArtifacts};

pub const DEFAULT_MAX_EDGES: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphError(pub String);

impl Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "graph error: {}", self.0)
    }
}

impl Error for GraphError {}
