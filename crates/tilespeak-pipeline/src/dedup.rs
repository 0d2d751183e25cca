// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;

use tilespeak_model::EnhancedRecord;

/// Whitespace-normalised raw_output. Two records that differ only in
/// spacing are the same example.
#[must_use]
pub fn semantic_key(raw_output: &str) -> String {
    raw_output.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Tallies from one dedup pass. `per_key_count` keeps only keys that
/// actually collided.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DedupReport {
    pub duplicates_removed: u64,
    pub per_key_count: BTreeMap<String, u64>,
}

/// Keep the first record per semantic key, in input order.
pub fn dedup_records(records: Vec<EnhancedRecord>) -> (Vec<EnhancedRecord>, DedupReport) {
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    let mut kept = Vec::with_capacity(records.len());
    let mut report = DedupReport::default();
    for record in records {
        let key = semantic_key(&record.raw_output);
        let count = counts.entry(key).or_insert(0);
        *count += 1;
        if *count == 1 {
            kept.push(record);
        } else {
            report.duplicates_removed += 1;
        }
    }
    report.per_key_count = counts.into_iter().filter(|(_, n)| *n > 1).collect();
    (kept, report)
}
