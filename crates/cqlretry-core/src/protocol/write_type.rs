//! Write-type classification reported by write timeouts.

use std::fmt;
use std::str::FromStr;

/// Kind of write that timed out, as reported by the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WriteType {
    /// Non-batched, non-counter write.
    Simple,
    /// Logged batch; the batch log write already succeeded.
    Batch,
    /// Unlogged batch. No batch log write was attempted.
    UnloggedBatch,
    /// Counter write, batched or not.
    Counter,
    /// Write to the batch log that precedes a logged batch.
    BatchLog,
    /// Compare-and-set (lightweight transaction) write.
    Cas,
    /// Materialized view update.
    View,
    /// Write to a CDC-enabled table.
    Cdc,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown write type: {0}")]
pub struct ParseWriteTypeError(pub String);

impl WriteType {
    /// Wire string form.
    pub fn as_str(self) -> &'static str {
        match self {
            WriteType::Simple => "SIMPLE",
            WriteType::Batch => "BATCH",
            WriteType::UnloggedBatch => "UNLOGGED_BATCH",
            WriteType::Counter => "COUNTER",
            WriteType::BatchLog => "BATCH_LOG",
            WriteType::Cas => "CAS",
            WriteType::View => "VIEW",
            WriteType::Cdc => "CDC",
        }
    }
}

impl fmt::Display for WriteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WriteType {
    type Err = ParseWriteTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wt = match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "SIMPLE" => WriteType::Simple,
            "BATCH" => WriteType::Batch,
            "UNLOGGED_BATCH" => WriteType::UnloggedBatch,
            "COUNTER" => WriteType::Counter,
            "BATCH_LOG" => WriteType::BatchLog,
            "CAS" => WriteType::Cas,
            "VIEW" => WriteType::View,
            "CDC" => WriteType::Cdc,
            _ => return Err(ParseWriteTypeError(s.to_string())),
        };
        Ok(wt)
    }
}
