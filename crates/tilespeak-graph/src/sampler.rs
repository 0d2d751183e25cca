// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;

use crate::build::ConversationGraph;
use tilespeak_model::{ConversationTrace, Starter, TraceOption, TraceStep};

pub const MAX_TRACES: usize = 20;
pub const MAX_TRACE_STEPS: usize = 4;
const MAX_STEP_OPTIONS: usize = 4;

const STARTER_WORDS: &[&str] = &[
    "hello", "hi", "start", "begin", "help", "what", "how", "feeling",
];

fn starter_indices(graph: &ConversationGraph) -> Vec<usize> {
    let in_degrees = graph.in_degrees();
    graph
        .nodes
        .iter()
        .enumerate()
        .filter(|(i, node)| {
            let input_lower = node.input.to_lowercase();
            STARTER_WORDS.iter().any(|w| input_lower.contains(w)) || in_degrees[*i] == 0
        })
        .map(|(i, _)| i)
        .collect()
}

/// Conversation starters in node order. A node qualifies by greeting
/// vocabulary in its input or by having no incoming edges.
#[must_use]
pub fn find_starters(graph: &ConversationGraph) -> Vec<Starter> {
    starter_indices(graph)
        .into_iter()
        .map(|i| {
            let node = &graph.nodes[i];
            Starter {
                id: node.id.clone(),
                input: node.input.clone(),
                raw_output: node.raw_output.clone(),
                category: node.category.clone(),
            }
        })
        .collect()
}

/// Greedy strongest-edge walks from the first `MAX_TRACES` starters. Each
/// walk takes at most `MAX_TRACE_STEPS` steps and halts on revisit; walks
/// shorter than two steps are not emitted.
#[must_use]
pub fn sample_traces(graph: &ConversationGraph) -> Vec<ConversationTrace> {
    let mut traces = Vec::new();
    for (idx, start) in starter_indices(graph).into_iter().take(MAX_TRACES).enumerate() {
        let steps = walk(graph, start);
        if steps.len() < 2 {
            continue;
        }
        traces.push(ConversationTrace {
            id: format!("conv_{idx}"),
            category: graph.nodes[start].category.clone(),
            steps,
        });
    }
    traces
}

fn walk(graph: &ConversationGraph, start: usize) -> Vec<TraceStep> {
    let mut visited: BTreeSet<usize> = BTreeSet::new();
    let mut steps = Vec::new();
    let mut current = start;
    while steps.len() < MAX_TRACE_STEPS {
        let node = &graph.nodes[current];
        let next_options = graph
            .outgoing(current)
            .iter()
            .take(MAX_STEP_OPTIONS)
            .map(|edge| TraceOption {
                trigger_word: edge.trigger.clone(),
                response_raw_output: graph.nodes[edge.to].raw_output.clone(),
                node_id: graph.nodes[edge.to].id.clone(),
            })
            .collect();
        steps.push(TraceStep {
            depth: steps.len() as u32 + 1,
            node_id: node.id.clone(),
            input: node.input.clone(),
            raw_output: node.raw_output.clone(),
            next_options,
        });
        visited.insert(current);

        // Strongest edge wins; equal strengths fall back to the smaller
        // successor index.
        let mut best: Option<(u32, usize)> = None;
        for edge in graph.outgoing(current) {
            let candidate = (edge.strength_centi, edge.to);
            best = match best {
                None => Some(candidate),
                Some((strength, to)) => {
                    if candidate.0 > strength || (candidate.0 == strength && candidate.1 < to) {
                        Some(candidate)
                    } else {
                        Some((strength, to))
                    }
                }
            };
        }
        match best {
            Some((_, next)) if !visited.contains(&next) => current = next,
            _ => break,
        }
    }
    steps
}
