// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode as ProcessExitCode;

use tilespeak_core::ExitCode;
use tilespeak_graph::{build_graph, write_graph};
use tilespeak_pipeline::{compile_corpus, PipelineError, PipelineOptions};

/// `--version` is a manifest identity value here, so clap's own version
/// flag is disabled.
#[derive(Parser)]
#[command(name = "tilespeak")]
#[command(about = "Compile AAC corpus shards into a master corpus and conversation graph")]
#[command(disable_version_flag = true)]
struct Cli {
    /// Input shard file (JSONL); repeat for multiple shards.
    #[arg(long = "shard", required = true)]
    shard: Vec<PathBuf>,
    /// Master corpus output path (JSONL).
    #[arg(long)]
    out_corpus: PathBuf,
    /// Summary manifest output path (JSON).
    #[arg(long)]
    out_summary: PathBuf,
    /// Graph artifact prefix; when omitted the graph step is skipped.
    #[arg(long)]
    out_graph_prefix: Option<PathBuf>,
    /// Outgoing edges kept per graph node.
    #[arg(long, default_value_t = 5)]
    max_edges: usize,
    /// Dataset name recorded in the manifest.
    #[arg(long, default_value = "corpus")]
    name: String,
    /// Dataset version recorded in the manifest.
    #[arg(long, default_value = "1")]
    version: String,
    /// Manifest creation date (YYYY-MM-DD); defaults to today.
    #[arg(long)]
    date: Option<String>,
}

fn main() -> ProcessExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::Success,
                _ => ExitCode::Usage,
            };
            // clap renders help to stdout and diagnostics to stderr itself.
            let _ = err.print();
            return ProcessExitCode::from(code as u8);
        }
    };
    match run(cli) {
        Ok(()) => ProcessExitCode::from(ExitCode::Success as u8),
        Err((code, message)) => {
            eprintln!("tilespeak: {message}");
            ProcessExitCode::from(code as u8)
        }
    }
}

fn run(cli: Cli) -> Result<(), (ExitCode, String)> {
    let creation_date = cli
        .date
        .unwrap_or_else(|| chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string());

    let options = PipelineOptions {
        shards: cli.shard,
        out_corpus: cli.out_corpus,
        out_summary: cli.out_summary,
        dataset_name: cli.name,
        version: cli.version,
        creation_date,
    };
    let outcome = compile_corpus(&options).map_err(|err| {
        let code = match err {
            PipelineError::NoShards(_) => ExitCode::NoShards,
            PipelineError::Write(_) => ExitCode::WriteFailure,
        };
        (code, err.to_string())
    })?;

    println!(
        "loaded: shards={} examples_kept={} malformed={} schema_mismatches={} missing_shards={}",
        outcome.load.shards_loaded,
        outcome.records.len(),
        outcome.load.malformed_lines,
        outcome.load.schema_mismatches,
        outcome.load.missing_shards.len(),
    );
    println!(
        "filtered: rejected={} duplicates_removed={}",
        outcome.filter.total_rejected, outcome.dedup.duplicates_removed,
    );
    println!(
        "corpus: path={} records={} sha256={}",
        options.out_corpus.display(),
        outcome.summary.total_unique_examples,
        outcome.corpus_sha256,
    );
    println!(
        "summary: path={} sha256={}",
        options.out_summary.display(),
        outcome.summary_sha256,
    );

    if let Some(prefix) = cli.out_graph_prefix {
        let graph = build_graph(&outcome.records, cli.max_edges);
        let artifacts = write_graph(&prefix, &graph)
            .map_err(|err| (ExitCode::WriteFailure, err.to_string()))?;
        println!(
            "graph: nodes={} edges={} starters={} traces={}",
            graph.node_count(),
            artifacts.edge_count,
            artifacts.starter_count,
            artifacts.trace_count,
        );
        println!(
            "graph_artifacts: nodes={} edges={} starters_and_traces={}",
            artifacts.nodes_path.display(),
            artifacts.edges_path.display(),
            artifacts.starters_path.display(),
        );
    }

    Ok(())
}
