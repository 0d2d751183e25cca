// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use tilespeak_model::RawExample;

/// Per-run accounting for the shard loader. Malformed and mismatched lines
/// are recovered locally; only a run with zero loadable shards is fatal, and
/// that decision belongs to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub file_counts: BTreeMap<String, u64>,
    pub malformed_lines: u64,
    pub schema_mismatches: u64,
    pub missing_shards: Vec<String>,
    pub shards_loaded: u64,
}

/// Read every shard in list order, yielding decoded examples in source
/// order. A missing shard is reported with a zero count; a line that is not
/// JSON counts as malformed; JSON that is neither legacy nor enhanced counts
/// as a schema mismatch.
pub fn load_shards(paths: &[PathBuf]) -> (Vec<RawExample>, LoadReport) {
    let mut examples = Vec::new();
    let mut report = LoadReport::default();

    for path in paths {
        let key = path.display().to_string();
        let file = match fs::File::open(path) {
            Ok(file) => file,
            Err(_) => {
                report.missing_shards.push(key.clone());
                report.file_counts.insert(key, 0);
                continue;
            }
        };
        report.shards_loaded += 1;
        let mut count: u64 = 0;
        let reader = BufReader::new(file);
        for line in reader.lines() {
            let line = match line {
                Ok(line) => line,
                Err(_) => {
                    report.malformed_lines += 1;
                    break;
                }
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let value: serde_json::Value = match serde_json::from_str(line) {
                Ok(value) => value,
                Err(_) => {
                    report.malformed_lines += 1;
                    continue;
                }
            };
            match serde_json::from_value::<RawExample>(value) {
                Ok(example) => {
                    examples.push(example);
                    count += 1;
                }
                Err(_) => report.schema_mismatches += 1,
            }
        }
        report.file_counts.insert(key, count);
    }

    (examples, report)
}
