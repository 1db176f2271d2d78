use super::decision::RetryDecision;
use super::policy::RetryPolicy;
use crate::protocol::{ErrorResponse, ReadTimeout, Unavailable, WriteTimeout};

/// Forwards every error directly to the client, never retries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FallthroughRetryPolicy;

impl RetryPolicy for FallthroughRetryPolicy {
    fn on_read_timeout(&self, _msg: &ReadTimeout, _retry_count: u32) -> RetryDecision {
        RetryDecision::ReturnError
    }

    fn on_write_timeout(&self, _msg: &WriteTimeout, _retry_count: u32) -> RetryDecision {
        RetryDecision::ReturnError
    }

    fn on_unavailable(&self, _msg: &Unavailable, _retry_count: u32) -> RetryDecision {
        RetryDecision::ReturnError
    }

    fn on_error_response(&self, _msg: &ErrorResponse, _retry_count: u32) -> RetryDecision {
        RetryDecision::ReturnError
    }
}
