// SPDX-License-Identifier: Apache-2.0

//! Corpus compilation pipeline: shard loading, normalisation,
//! classification, filtering, dedup, summary, and atomic persistence.

#![forbid(unsafe_code)]

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{self, Display};
use std::path::PathBuf;

use tilespeak_model::{AacResponse, CorpusSummary, EnhancedRecord};

mod classify;
pub mod dedup;
pub mod filter;
pub mod loader;
pub mod logging;
pub mod normalize;
pub mod summarize;
pub mod write;

pub use dedup::{dedup_records, semantic_key, DedupReport};
pub use filter::{FilterReport, RejectReason};
pub use loader::{load_shards, LoadReport};
pub use logging::{PipelineEvent, PipelineLog, PipelineStage};
pub use normalize::{derive_spoken_sentence, parse_tiles, FALLBACK_EMOJI};
pub use summarize::summarize;
pub use write::{write_atomic, write_corpus, write_summary};

/// Pipeline failures that abort the run. Recoverable per-line problems are
/// counted in reports instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// No shard on the command line could be opened.
    NoShards(String),
    /// An output artifact could not be written.
    Write(String),
}

impl Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::NoShards(msg) => write!(f, "no shards: {msg}"),
            PipelineError::Write(msg) => write!(f, "write failure: {msg}"),
        }
    }
}

impl Error for PipelineError {}

/// One compile run, fully specified. `creation_date` is injected by the
/// caller so runs are reproducible under a pinned date.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub shards: Vec<PathBuf>,
    pub out_corpus: PathBuf,
    pub out_summary: PathBuf,
    pub dataset_name: String,
    pub version: String,
    pub creation_date: String,
}

/// Everything a caller needs after a successful run.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub records: Vec<EnhancedRecord>,
    pub summary: CorpusSummary,
    pub load: LoadReport,
    pub filter: FilterReport,
    pub dedup: DedupReport,
    pub corpus_sha256: String,
    pub summary_sha256: String,
    pub events: Vec<PipelineEvent>,
}

/// Run the full pipeline over `options.shards` and persist both artifacts.
pub fn compile_corpus(options: &PipelineOptions) -> Result<PipelineOutcome, PipelineError> {
    let mut log = PipelineLog::default();

    let (raw_examples, load) = load_shards(&options.shards);
    if load.shards_loaded == 0 {
        return Err(PipelineError::NoShards(format!(
            "none of {} shard path(s) could be opened",
            options.shards.len()
        )));
    }
    log.emit(
        PipelineStage::Load,
        "shards_loaded",
        BTreeMap::from([
            ("shards".to_string(), load.shards_loaded.to_string()),
            ("examples".to_string(), raw_examples.len().to_string()),
            ("malformed".to_string(), load.malformed_lines.to_string()),
            (
                "schema_mismatches".to_string(),
                load.schema_mismatches.to_string(),
            ),
        ]),
    );

    let total_raw = raw_examples.len();
    let mut filter_report = FilterReport::default();
    let mut records: Vec<EnhancedRecord> = Vec::with_capacity(raw_examples.len());
    for raw in raw_examples {
        let candidate = normalize::normalize_example(raw);
        if let Err(reason) = filter::check(&candidate) {
            filter_report.record(reason);
            continue;
        }
        let usage_data = classify::classify(&candidate);
        let spoken_sentence = match candidate.carried.spoken_sentence {
            Some(carried) => carried,
            None => derive_spoken_sentence(&candidate.tiles, usage_data.conversation_layer),
        };
        records.push(EnhancedRecord {
            instruction: candidate.instruction,
            input: candidate.input,
            aac_response: AacResponse {
                tiles: candidate.tiles,
                spoken_sentence,
                usage_data,
            },
            raw_output: candidate.raw_output,
        });
    }
    log.emit(
        PipelineStage::Normalize,
        "examples_normalized",
        BTreeMap::from([("candidates".to_string(), total_raw.to_string())]),
    );
    log.emit(
        PipelineStage::Filter,
        "candidates_filtered",
        BTreeMap::from([
            ("kept".to_string(), records.len().to_string()),
            (
                "rejected".to_string(),
                filter_report.total_rejected.to_string(),
            ),
        ]),
    );

    let (records, dedup_report) = dedup_records(records);
    log.emit(
        PipelineStage::Dedup,
        "duplicates_removed",
        BTreeMap::from([
            ("kept".to_string(), records.len().to_string()),
            (
                "removed".to_string(),
                dedup_report.duplicates_removed.to_string(),
            ),
        ]),
    );

    let output_file = options.out_corpus.display().to_string();
    let summary = summarize(
        &options.dataset_name,
        &options.version,
        &options.creation_date,
        &output_file,
        &records,
        &load,
        &filter_report,
        &dedup_report,
    );
    log.emit(
        PipelineStage::Summarize,
        "summary_built",
        BTreeMap::from([
            (
                "unique".to_string(),
                summary.total_unique_examples.to_string(),
            ),
            (
                "categories".to_string(),
                summary.total_categories.to_string(),
            ),
        ]),
    );

    let corpus_sha256 = write_corpus(&options.out_corpus, &records)?;
    let summary_sha256 = write_summary(&options.out_summary, &summary)?;
    log.emit(
        PipelineStage::Persist,
        "artifacts_written",
        BTreeMap::from([
            ("corpus_sha256".to_string(), corpus_sha256.clone()),
            ("summary_sha256".to_string(), summary_sha256.clone()),
        ]),
    );

    Ok(PipelineOutcome {
        records,
        summary,
        load,
        filter: filter_report,
        dedup: dedup_report,
        corpus_sha256,
        summary_sha256,
        events: log.events().to_vec(),
    })
}
