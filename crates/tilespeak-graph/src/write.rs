// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::build::ConversationGraph;
use crate::sampler::{find_starters, sample_traces};
use crate::GraphError;
use tilespeak_core::sha256_hex;
use tilespeak_model::StartersAndTraces;

/// Where one graph run landed on disk, with content digests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphArtifacts {
    pub nodes_path: PathBuf,
    pub edges_path: PathBuf,
    pub starters_path: PathBuf,
    pub nodes_sha256: String,
    pub edges_sha256: String,
    pub starters_sha256: String,
    pub edge_count: usize,
    pub starter_count: usize,
    pub trace_count: usize,
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<String, GraphError> {
    let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
    if let Some(parent) = parent {
        fs::create_dir_all(parent)
            .map_err(|e| GraphError(format!("create {}: {e}", parent.display())))?;
    }
    let dir = parent.unwrap_or_else(|| Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .map_err(|e| GraphError(format!("temp file in {}: {e}", dir.display())))?;
    tmp.write_all(bytes)
        .map_err(|e| GraphError(format!("write {}: {e}", path.display())))?;
    tmp.persist(path)
        .map_err(|e| GraphError(format!("persist {}: {e}", path.display())))?;
    Ok(sha256_hex(bytes))
}

fn jsonl<T: serde::Serialize>(items: &[T]) -> Result<Vec<u8>, GraphError> {
    let mut bytes = Vec::new();
    for item in items {
        serde_json::to_writer(&mut bytes, item)
            .map_err(|e| GraphError(format!("encode line: {e}")))?;
        bytes.push(b'\n');
    }
    Ok(bytes)
}

/// Persist the three graph artifacts under `prefix`: `<prefix>_nodes.jsonl`,
/// `<prefix>_edges.jsonl`, `<prefix>_starters_and_traces.json`. Each file is
/// written atomically.
pub fn write_graph(prefix: &Path, graph: &ConversationGraph) -> Result<GraphArtifacts, GraphError> {
    let nodes_path = PathBuf::from(format!("{}_nodes.jsonl", prefix.display()));
    let edges_path = PathBuf::from(format!("{}_edges.jsonl", prefix.display()));
    let starters_path = PathBuf::from(format!("{}_starters_and_traces.json", prefix.display()));

    let edges = graph.edges();
    let bundle = StartersAndTraces {
        starters: find_starters(graph),
        traces: sample_traces(graph),
    };

    let nodes_sha256 = write_atomic(&nodes_path, &jsonl(&graph.nodes)?)?;
    let edges_sha256 = write_atomic(&edges_path, &jsonl(&edges)?)?;
    let mut bundle_bytes = serde_json::to_vec_pretty(&bundle)
        .map_err(|e| GraphError(format!("encode starters and traces: {e}")))?;
    bundle_bytes.push(b'\n');
    let starters_sha256 = write_atomic(&starters_path, &bundle_bytes)?;

    Ok(GraphArtifacts {
        nodes_path,
        edges_path,
        starters_path,
        nodes_sha256,
        edges_sha256,
        starters_sha256,
        edge_count: edges.len(),
        starter_count: bundle.starters.len(),
        trace_count: bundle.traces.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::write_graph;
    use crate::build::tests::record;
    use crate::build::build_graph;
    use std::fs;
    use tilespeak_model::{Category, EmotionLevel, GraphEdge, GraphNode, StartersAndTraces};

    #[test]
    fn artifacts_land_under_the_prefix_and_parse_back() {
        let records = vec![
            record(
                "How about pizza tonight?",
                ["Pizza", "Salad", "Water", "Later"],
                Category::Request,
                EmotionLevel::Low,
            ),
            record(
                "You picked pizza! Want toppings now?",
                ["Toppings", "Plain", "Extra", "None"],
                Category::Request,
                EmotionLevel::Low,
            ),
        ];
        let graph = build_graph(&records, 5);
        let dir = tempfile::tempdir().expect("tempdir");
        let prefix = dir.path().join("graph");

        let artifacts = write_graph(&prefix, &graph).expect("write");
        assert!(artifacts.nodes_path.ends_with("graph_nodes.jsonl"));

        let nodes_text = fs::read_to_string(&artifacts.nodes_path).expect("nodes");
        let nodes: Vec<GraphNode> = nodes_text
            .lines()
            .map(|l| serde_json::from_str(l).expect("node line"))
            .collect();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].id, "node_0");

        let edges_text = fs::read_to_string(&artifacts.edges_path).expect("edges");
        let edges: Vec<GraphEdge> = edges_text
            .lines()
            .map(|l| serde_json::from_str(l).expect("edge line"))
            .collect();
        assert_eq!(edges.len(), artifacts.edge_count);

        let bundle_text = fs::read_to_string(&artifacts.starters_path).expect("bundle");
        let bundle: StartersAndTraces = serde_json::from_str(&bundle_text).expect("bundle json");
        assert_eq!(bundle.starters.len(), artifacts.starter_count);
    }
}
