//! Retry loop: resend a request until it succeeds or the policy says stop.

use super::decision::RetryDecision;
use super::error::ProxyError;
use super::policy::RetryPolicy;

/// Which node an attempt should be sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// First attempt, routed by the connection pool as usual.
    Initial,
    /// Same coordinator as the previous attempt.
    SameNode,
    /// A different coordinator than the previous attempt.
    NextNode,
}

/// One attempt of a logical request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attempt {
    /// Retries already performed before this attempt.
    pub retry_count: u32,
    pub target: Target,
}

impl Attempt {
    fn first() -> Self {
        Self {
            retry_count: 0,
            target: Target::Initial,
        }
    }
}

/// Runs `f` until it succeeds, the policy returns [`RetryDecision::ReturnError`],
/// or `max_attempts` (including the first, minimum 1) is reached.
///
/// The original error of the last attempt is returned unchanged. No delay is
/// inserted between attempts.
pub fn run_with_retry<T, F>(
    policy: &dyn RetryPolicy,
    max_attempts: u32,
    mut f: F,
) -> Result<T, ProxyError>
where
    F: FnMut(&Attempt) -> Result<T, ProxyError>,
{
    let max_attempts = max_attempts.max(1);
    let mut attempt = Attempt::first();
    loop {
        let err = match f(&attempt) {
            Ok(v) => return Ok(v),
            Err(e) => e,
        };

        let target = match err.decide(policy, attempt.retry_count) {
            RetryDecision::ReturnError => {
                tracing::info!(
                    kind = err.kind(),
                    retry_count = attempt.retry_count,
                    "returning error to client: {}",
                    err
                );
                return Err(err);
            }
            RetryDecision::RetrySame => Target::SameNode,
            RetryDecision::RetryNext => Target::NextNode,
        };

        if attempt.retry_count + 1 >= max_attempts {
            tracing::warn!(
                kind = err.kind(),
                max_attempts,
                "attempt limit reached, returning error: {}",
                err
            );
            return Err(err);
        }

        attempt = Attempt {
            retry_count: attempt.retry_count + 1,
            target,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{Consistency, ErrorCode, ErrorResponse, WriteTimeout, WriteType};
    use crate::retry::{DefaultRetryPolicy, FallthroughRetryPolicy};

    fn batch_log_timeout() -> ProxyError {
        ProxyError::from(WriteTimeout {
            consistency: Consistency::Quorum,
            received: 0,
            block_for: 2,
            write_type: WriteType::BatchLog,
        })
    }

    #[test]
    fn first_attempt_success_is_returned() {
        let mut seen = Vec::new();
        let out = run_with_retry(&DefaultRetryPolicy, 3, |a| {
            seen.push(*a);
            Ok::<_, ProxyError>(42)
        });
        assert_eq!(out, Ok(42));
        assert_eq!(seen, vec![Attempt::first()]);
    }

    #[test]
    fn recovers_on_retry() {
        let out = run_with_retry(&DefaultRetryPolicy, 3, |a| {
            if a.retry_count == 0 {
                Err(batch_log_timeout())
            } else {
                Ok(a.target)
            }
        });
        assert_eq!(out, Ok(Target::SameNode));
    }

    #[test]
    fn batch_log_timeout_retried_exactly_once() {
        let mut attempts = Vec::new();
        let out: Result<(), _> = run_with_retry(&DefaultRetryPolicy, 10, |a| {
            attempts.push(*a);
            Err(batch_log_timeout())
        });
        assert_eq!(out, Err(batch_log_timeout()));
        assert_eq!(
            attempts,
            vec![
                Attempt::first(),
                Attempt {
                    retry_count: 1,
                    target: Target::SameNode
                },
            ]
        );
    }

    #[test]
    fn generic_errors_are_capped_by_max_attempts() {
        let mut calls = 0;
        let out: Result<(), _> = run_with_retry(&DefaultRetryPolicy, 4, |a| {
            calls += 1;
            if a.retry_count > 0 {
                assert_eq!(a.target, Target::NextNode);
            }
            Err(ErrorResponse::new(ErrorCode::Overloaded, "busy").into())
        });
        assert!(matches!(out, Err(ProxyError::Response(_))));
        assert_eq!(calls, 4);
    }

    #[test]
    fn zero_max_attempts_still_runs_once() {
        let mut calls = 0;
        let _: Result<(), _> = run_with_retry(&DefaultRetryPolicy, 0, |_| {
            calls += 1;
            Err(ErrorResponse::new(ErrorCode::ServerError, "x").into())
        });
        assert_eq!(calls, 1);
    }

    #[test]
    fn fallthrough_never_retries() {
        let mut calls = 0;
        let _: Result<(), _> = run_with_retry(&FallthroughRetryPolicy, 5, |_| {
            calls += 1;
            Err(batch_log_timeout())
        });
        assert_eq!(calls, 1);
    }
}
