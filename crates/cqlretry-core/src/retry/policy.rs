use std::fmt;

use super::decision::RetryDecision;
use crate::protocol::{
    ErrorCode, ErrorResponse, ReadTimeout, Unavailable, WriteTimeout, WriteType,
};

/// Decides how to react to a recoverable protocol error.
///
/// `retry_count` is the number of retries already performed for the
/// current request (0 on the first failure). Implementations must be pure:
/// the same payload and count always yield the same verdict.
pub trait RetryPolicy: fmt::Debug + Send + Sync {
    fn on_read_timeout(&self, msg: &ReadTimeout, retry_count: u32) -> RetryDecision;

    fn on_write_timeout(&self, msg: &WriteTimeout, retry_count: u32) -> RetryDecision;

    fn on_unavailable(&self, msg: &Unavailable, retry_count: u32) -> RetryDecision;

    fn on_error_response(&self, msg: &ErrorResponse, retry_count: u32) -> RetryDecision;
}

/// Built-in rules: retry only when it cannot duplicate a write or return
/// stale data, and at most once for timeouts and unavailable errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultRetryPolicy;

/// Shared instance; the policy has no state.
pub static DEFAULT_RETRY_POLICY: DefaultRetryPolicy = DefaultRetryPolicy;

impl RetryPolicy for DefaultRetryPolicy {
    fn on_read_timeout(&self, msg: &ReadTimeout, retry_count: u32) -> RetryDecision {
        // Enough replicas answered but the data replica had not; one more try
        // on the same coordinator usually succeeds.
        if retry_count == 0 && msg.received >= msg.block_for && !msg.data_present {
            RetryDecision::RetrySame
        } else {
            RetryDecision::ReturnError
        }
    }

    fn on_write_timeout(&self, msg: &WriteTimeout, retry_count: u32) -> RetryDecision {
        // Only the batch log write is safe to replay.
        if retry_count == 0 && msg.write_type == WriteType::BatchLog {
            RetryDecision::RetrySame
        } else {
            RetryDecision::ReturnError
        }
    }

    fn on_unavailable(&self, _msg: &Unavailable, retry_count: u32) -> RetryDecision {
        if retry_count == 0 {
            RetryDecision::RetryNext
        } else {
            RetryDecision::ReturnError
        }
    }

    // Not bounded by retry_count; the execution loop caps total attempts.
    fn on_error_response(&self, msg: &ErrorResponse, _retry_count: u32) -> RetryDecision {
        match msg.code.normalized() {
            ErrorCode::ReadFailure | ErrorCode::WriteFailure => RetryDecision::ReturnError,
            _ => RetryDecision::RetryNext,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::Consistency;

    fn read_timeout(received: i32, block_for: i32, data_present: bool) -> ReadTimeout {
        ReadTimeout {
            consistency: Consistency::LocalQuorum,
            received,
            block_for,
            data_present,
        }
    }

    fn write_timeout(write_type: WriteType) -> WriteTimeout {
        WriteTimeout {
            consistency: Consistency::LocalQuorum,
            received: 1,
            block_for: 2,
            write_type,
        }
    }

    fn unavailable() -> Unavailable {
        Unavailable {
            consistency: Consistency::Quorum,
            required: 2,
            alive: 1,
        }
    }

    #[test]
    fn read_timeout_retries_same_once_when_enough_replicas_without_data() {
        let p = DefaultRetryPolicy;
        assert_eq!(p.on_read_timeout(&read_timeout(2, 2, false), 0), RetryDecision::RetrySame);
        assert_eq!(p.on_read_timeout(&read_timeout(3, 2, false), 0), RetryDecision::RetrySame);
        assert_eq!(p.on_read_timeout(&read_timeout(2, 2, false), 1), RetryDecision::ReturnError);
    }

    #[test]
    fn read_timeout_with_data_or_missing_replicas_returns_error() {
        let p = DefaultRetryPolicy;
        assert_eq!(p.on_read_timeout(&read_timeout(2, 2, true), 0), RetryDecision::ReturnError);
        assert_eq!(p.on_read_timeout(&read_timeout(1, 2, false), 0), RetryDecision::ReturnError);
        assert_eq!(p.on_read_timeout(&read_timeout(0, 3, true), 0), RetryDecision::ReturnError);
    }

    #[test]
    fn write_timeout_retries_only_batch_log_once() {
        let p = DefaultRetryPolicy;
        let batch_log = write_timeout(WriteType::BatchLog);
        assert_eq!(p.on_write_timeout(&batch_log, 0), RetryDecision::RetrySame);
        assert_eq!(p.on_write_timeout(&batch_log, 1), RetryDecision::ReturnError);
        for wt in [
            WriteType::Simple,
            WriteType::Batch,
            WriteType::UnloggedBatch,
            WriteType::Counter,
            WriteType::Cas,
            WriteType::View,
            WriteType::Cdc,
        ] {
            let msg = write_timeout(wt);
            assert_eq!(p.on_write_timeout(&msg, 0), RetryDecision::ReturnError, "{wt}");
        }
    }

    #[test]
    fn unavailable_moves_to_next_node_once() {
        let p = DefaultRetryPolicy;
        assert_eq!(p.on_unavailable(&unavailable(), 0), RetryDecision::RetryNext);
        assert_eq!(p.on_unavailable(&unavailable(), 1), RetryDecision::ReturnError);
        assert_eq!(p.on_unavailable(&unavailable(), 7), RetryDecision::ReturnError);
    }

    #[test]
    fn replica_failures_are_never_retried() {
        let p = DefaultRetryPolicy;
        for count in [0, 1, 5] {
            let read = ErrorResponse::new(ErrorCode::ReadFailure, "replica failed");
            let write = ErrorResponse::new(ErrorCode::WriteFailure, "replica failed");
            assert_eq!(p.on_error_response(&read, count), RetryDecision::ReturnError);
            assert_eq!(p.on_error_response(&write, count), RetryDecision::ReturnError);
        }
    }

    #[test]
    fn replica_failures_in_raw_form_are_never_retried() {
        let p = DefaultRetryPolicy;
        for raw in [0x1300, 0x1500] {
            let msg = ErrorResponse::new(ErrorCode::Other(raw), "replica failed");
            for count in [0, 1] {
                assert_eq!(
                    p.on_error_response(&msg, count),
                    RetryDecision::ReturnError,
                    "0x{raw:04X}"
                );
            }
        }
    }

    #[test]
    fn other_error_codes_retry_next_regardless_of_count() {
        let p = DefaultRetryPolicy;
        for code in [
            ErrorCode::ServerError,
            ErrorCode::Overloaded,
            ErrorCode::IsBootstrapping,
            ErrorCode::Other(0x9999),
        ] {
            let msg = ErrorResponse::new(code, "boom");
            for count in [0, 1, 10, u32::MAX] {
                assert_eq!(p.on_error_response(&msg, count), RetryDecision::RetryNext, "{code}");
            }
        }
    }

    #[test]
    fn decisions_are_stable_across_calls() {
        let p: &dyn RetryPolicy = &DEFAULT_RETRY_POLICY;
        let rt = read_timeout(2, 2, false);
        let first = p.on_read_timeout(&rt, 0);
        for _ in 0..100 {
            assert_eq!(p.on_read_timeout(&rt, 0), first);
        }
    }

    #[test]
    fn policy_is_zero_sized() {
        assert_eq!(std::mem::size_of::<DefaultRetryPolicy>(), 0);
    }
}
