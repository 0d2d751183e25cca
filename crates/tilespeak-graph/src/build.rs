// SPDX-License-Identifier: Apache-2.0

use std::collections::{BTreeMap, BTreeSet};

use tilespeak_model::{EnhancedRecord, GraphEdge, GraphNode};

/// One outgoing edge, kept in index form until serialisation.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct OutEdge {
    pub to: usize,
    pub trigger: String,
    /// Strength in hundredths, so ordering never touches float compare.
    pub strength_centi: u32,
}

impl OutEdge {
    pub(crate) fn strength(&self) -> f64 {
        f64::from(self.strength_centi) / 100.0
    }
}

/// Directed weighted follow-up graph. Node `i` corresponds to record `i`
/// of the master corpus; edge lists are stored ranked, ready to emit.
#[derive(Debug, Clone)]
pub struct ConversationGraph {
    pub nodes: Vec<GraphNode>,
    outgoing: Vec<Vec<OutEdge>>,
}

impl ConversationGraph {
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.outgoing.iter().map(Vec::len).sum()
    }

    pub(crate) fn outgoing(&self, u: usize) -> &[OutEdge] {
        &self.outgoing[u]
    }

    /// Wire-form edges, node by node, in stored rank order.
    pub fn edges(&self) -> Vec<GraphEdge> {
        let mut edges = Vec::with_capacity(self.edge_count());
        for (u, list) in self.outgoing.iter().enumerate() {
            for edge in list {
                edges.push(GraphEdge {
                    from: self.nodes[u].id.clone(),
                    to: self.nodes[edge.to].id.clone(),
                    trigger: edge.trigger.clone(),
                    strength: edge.strength(),
                });
            }
        }
        edges
    }

    #[must_use]
    pub fn in_degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0usize; self.nodes.len()];
        for list in &self.outgoing {
            for edge in list {
                degrees[edge.to] += 1;
            }
        }
        degrees
    }
}

/// Follow-up patterns a tile's words can leave in a successor's input.
fn follow_up_patterns(words: &str) -> [String; 10] {
    [
        words.to_string(),
        format!("{words} chosen"),
        format!("picked {words}"),
        format!("selected {words}"),
        format!("want {words}"),
        format!("need {words}"),
        format!("like {words}"),
        format!("about {words}"),
        format!("for {words}"),
        format!("with {words}"),
    ]
}

struct CandidateScore {
    pattern_hits: u32,
    trigger: String,
}

/// Build the conversation graph over the canonical record list.
///
/// Relevance for ranking is pattern hits plus 0.5 for a shared category and
/// 0.3 for a shared emotion level, accumulated in tenths so ties are exact.
/// Edge strength is computed independently and clamped to [0, 1]. Top
/// `max_edges` successors per node, ties broken by smaller successor index.
#[must_use]
pub fn build_graph(records: &[EnhancedRecord], max_edges: usize) -> ConversationGraph {
    let nodes: Vec<GraphNode> = records
        .iter()
        .enumerate()
        .map(|(i, record)| GraphNode {
            id: format!("node_{i}"),
            input: record.input.clone(),
            raw_output: record.raw_output.clone(),
            category: record.aac_response.usage_data.category.clone(),
            emotion: record.aac_response.usage_data.emotion_level,
            tiles: record.aac_response.tiles.clone(),
        })
        .collect();

    let inputs_lower: Vec<String> = nodes.iter().map(|n| n.input.to_lowercase()).collect();
    let tile_words: Vec<Vec<String>> = records.iter().map(EnhancedRecord::tile_words).collect();
    let output_word_sets: Vec<BTreeSet<&str>> = tile_words
        .iter()
        .map(|words| {
            words
                .iter()
                .flat_map(|w| w.split_whitespace())
                .map(trim_token)
                .filter(|t| !t.is_empty())
                .collect()
        })
        .collect();

    let mut outgoing = Vec::with_capacity(nodes.len());
    for u in 0..nodes.len() {
        // BTreeMap keeps candidates in ascending index order, which is the
        // tie-break we need after the rank sort.
        let mut candidates: BTreeMap<usize, CandidateScore> = BTreeMap::new();
        for words in &tile_words[u] {
            let patterns = follow_up_patterns(words);
            for (v, input_lower) in inputs_lower.iter().enumerate() {
                if v == u {
                    continue;
                }
                // Every pattern embeds the tile words, so one containment
                // probe gates the full pattern scan.
                if !input_lower.contains(words.as_str()) {
                    continue;
                }
                let hits = patterns.iter().filter(|p| input_lower.contains(p.as_str())).count() as u32;
                if hits == 0 {
                    continue;
                }
                candidates
                    .entry(v)
                    .and_modify(|score| score.pattern_hits += hits)
                    .or_insert_with(|| CandidateScore {
                        pattern_hits: hits,
                        trigger: words.clone(),
                    });
            }
        }

        let mut ranked: Vec<(u32, usize, String)> = candidates
            .into_iter()
            .map(|(v, score)| {
                let mut relevance_tenths = score.pattern_hits * 10;
                if nodes[v].category == nodes[u].category {
                    relevance_tenths += 5;
                }
                if nodes[v].emotion == nodes[u].emotion {
                    relevance_tenths += 3;
                }
                (relevance_tenths, v, score.trigger)
            })
            .collect();
        ranked.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
        ranked.truncate(max_edges);

        let edges = ranked
            .into_iter()
            .map(|(_, v, trigger)| OutEdge {
                to: v,
                trigger,
                strength_centi: strength_centi(&nodes, &inputs_lower, &output_word_sets, u, v),
            })
            .collect();
        outgoing.push(edges);
    }

    ConversationGraph { nodes, outgoing }
}

fn trim_token(token: &str) -> &str {
    token.trim_matches(|c: char| !c.is_alphanumeric())
}

fn strength_centi(
    nodes: &[GraphNode],
    inputs_lower: &[String],
    output_word_sets: &[BTreeSet<&str>],
    u: usize,
    v: usize,
) -> u32 {
    let mut centi = 0u32;
    if nodes[u].category == nodes[v].category {
        centi += 40;
    }
    if nodes[u].emotion == nodes[v].emotion {
        centi += 20;
    }
    let overlap = inputs_lower[v]
        .split_whitespace()
        .map(trim_token)
        .filter(|t| !t.is_empty())
        .collect::<BTreeSet<&str>>()
        .intersection(&output_word_sets[u])
        .count() as u32;
    centi += (overlap * 10).min(40);
    centi.min(100)
}
