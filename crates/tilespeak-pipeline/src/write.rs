// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::PipelineError;
use tilespeak_core::sha256_hex;
use tilespeak_model::{CorpusSummary, EnhancedRecord};

/// Write `bytes` to `path` via a sibling temp file and an atomic rename.
/// Readers never observe a partially written artifact. Returns the sha256
/// of the bytes written.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<String, PipelineError> {
    let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
    if let Some(parent) = parent {
        fs::create_dir_all(parent)
            .map_err(|e| PipelineError::Write(format!("create {}: {e}", parent.display())))?;
    }
    let dir = parent.unwrap_or_else(|| Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .map_err(|e| PipelineError::Write(format!("temp file in {}: {e}", dir.display())))?;
    tmp.write_all(bytes)
        .map_err(|e| PipelineError::Write(format!("write {}: {e}", path.display())))?;
    tmp.persist(path)
        .map_err(|e| PipelineError::Write(format!("persist {}: {e}", path.display())))?;
    Ok(sha256_hex(bytes))
}

/// One JSON object per line, in record order, non-ASCII unescaped.
pub fn write_corpus(path: &Path, records: &[EnhancedRecord]) -> Result<String, PipelineError> {
    let mut bytes = Vec::new();
    for record in records {
        serde_json::to_writer(&mut bytes, record)
            .map_err(|e| PipelineError::Write(format!("encode corpus line: {e}")))?;
        bytes.push(b'\n');
    }
    write_atomic(path, &bytes)
}

pub fn write_summary(path: &Path, summary: &CorpusSummary) -> Result<String, PipelineError> {
    let mut bytes = serde_json::to_vec_pretty(summary)
        .map_err(|e| PipelineError::Write(format!("encode summary: {e}")))?;
    bytes.push(b'\n');
    write_atomic(path, &bytes)
}
