//! Recoverable protocol error as seen by the execution loop.

use super::decision::RetryDecision;
use super::policy::RetryPolicy;
use crate::protocol::{ErrorResponse, ReadTimeout, Unavailable, WriteTimeout};

/// A failed attempt, already decoded by the codec.
/// Used so we can route it to the matching policy method before returning it
/// to the client unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProxyError {
    #[error(
        "read timeout at {} ({} of {} replicas responded, data present: {})",
        .0.consistency, .0.received, .0.block_for, .0.data_present
    )]
    ReadTimeout(ReadTimeout),
    #[error(
        "write timeout at {} ({} of {} replicas acknowledged, write type {})",
        .0.consistency, .0.received, .0.block_for, .0.write_type
    )]
    WriteTimeout(WriteTimeout),
    #[error(
        "unavailable at {} ({} replicas required, {} alive)",
        .0.consistency, .0.required, .0.alive
    )]
    Unavailable(Unavailable),
    #[error("{}: {}", .0.code, .0.message)]
    Response(ErrorResponse),
}

impl ProxyError {
    /// Short category name for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ProxyError::ReadTimeout(_) => "read_timeout",
            ProxyError::WriteTimeout(_) => "write_timeout",
            ProxyError::Unavailable(_) => "unavailable",
            ProxyError::Response(_) => "error_response",
        }
    }

    /// Ask `policy` what to do about this error after `retry_count` retries.
    pub fn decide(&self, policy: &dyn RetryPolicy, retry_count: u32) -> RetryDecision {
        let decision = match self {
            ProxyError::ReadTimeout(msg) => policy.on_read_timeout(msg, retry_count),
            ProxyError::WriteTimeout(msg) => policy.on_write_timeout(msg, retry_count),
            ProxyError::Unavailable(msg) => policy.on_unavailable(msg, retry_count),
            ProxyError::Response(msg) => policy.on_error_response(msg, retry_count),
        };
        tracing::debug!(
            kind = self.kind(),
            retry_count,
            "retry policy decision: {}",
            decision
        );
        decision
    }
}

impl From<ReadTimeout> for ProxyError {
    fn from(msg: ReadTimeout) -> Self {
        ProxyError::ReadTimeout(msg)
    }
}

impl From<WriteTimeout> for ProxyError {
    fn from(msg: WriteTimeout) -> Self {
        ProxyError::WriteTimeout(msg)
    }
}

impl From<Unavailable> for ProxyError {
    fn from(msg: Unavailable) -> Self {
        ProxyError::Unavailable(msg)
    }
}

impl From<ErrorResponse> for ProxyError {
    fn from(msg: ErrorResponse) -> Self {
        ProxyError::Response(msg)
    }
}
