//! Decoded payloads of the recoverable protocol errors.

use super::{Consistency, ErrorCode, WriteType};

/// Read request timed out at the coordinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadTimeout {
    pub consistency: Consistency,
    /// Replicas that answered.
    pub received: i32,
    /// Replicas required by the consistency level.
    pub block_for: i32,
    /// Whether the replica asked for data responded.
    pub data_present: bool,
}

/// Write request timed out at the coordinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteTimeout {
    pub consistency: Consistency,
    pub received: i32,
    pub block_for: i32,
    pub write_type: WriteType,
}

/// Coordinator knew up front that too few replicas were alive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unavailable {
    pub consistency: Consistency,
    pub required: i32,
    pub alive: i32,
}

/// Any other `ERROR` response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    pub code: ErrorCode,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}
