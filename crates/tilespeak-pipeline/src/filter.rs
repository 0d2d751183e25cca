// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;

use crate::normalize::Candidate;
use tilespeak_model::TILES_PER_RECORD;

/// Why a candidate was rejected. Checks run in declaration order and the
/// first failure wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    EmptyInput,
    EmptyOutput,
    MissingCommas,
    InsufficientTiles,
    NoAlphaWords,
}

impl RejectReason {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RejectReason::EmptyInput => "empty_input",
            RejectReason::EmptyOutput => "empty_output",
            RejectReason::MissingCommas => "missing_commas",
            RejectReason::InsufficientTiles => "insufficient_tiles",
            RejectReason::NoAlphaWords => "no_alpha_words",
        }
    }
}

/// Per-reason rejection tallies for one compile run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterReport {
    pub rejected: BTreeMap<String, u64>,
    pub total_rejected: u64,
}

impl FilterReport {
    pub fn record(&mut self, reason: RejectReason) {
        *self.rejected.entry(reason.as_str().to_string()).or_insert(0) += 1;
        self.total_rejected += 1;
    }
}

pub(crate) fn check(candidate: &Candidate) -> Result<(), RejectReason> {
    if candidate.input.trim().is_empty() {
        return Err(RejectReason::EmptyInput);
    }
    if candidate.raw_output.trim().is_empty() {
        return Err(RejectReason::EmptyOutput);
    }
    if !candidate.raw_output.contains(',') {
        return Err(RejectReason::MissingCommas);
    }
    if candidate.tiles.len() != TILES_PER_RECORD {
        return Err(RejectReason::InsufficientTiles);
    }
    if !candidate
        .tiles
        .iter()
        .all(|tile| tile.words.chars().any(char::is_alphabetic))
    {
        return Err(RejectReason::NoAlphaWords);
    }
    Ok(())
}
