#![forbid(unsafe_code)]

use sha2::{Digest, Sha256};

pub const CRATE_NAME: &str = "tilespeak-core";

/// Process exit codes shared by every tilespeak binary surface.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    Usage = 1,
    NoShards = 2,
    WriteFailure = 3,
}

#[must_use]
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}
