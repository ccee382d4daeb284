use serde::{Deserialize, Serialize};

/// Outcome of one counting run, as handed to the reporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub inversions: u64,
    /// Number of integers that were read
    pub len: usize,
}
