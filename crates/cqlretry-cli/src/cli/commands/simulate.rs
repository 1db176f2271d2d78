//! Simulation: drive the retry loop against a request that never succeeds.

use cqlretry_core::retry::{run_with_retry, Attempt, ProxyError, RetryPolicy, Target};

/// One line per attempt, then the error returned to the client.
pub fn run_simulate(policy: &dyn RetryPolicy, err: &ProxyError, max_attempts: u32) -> Vec<String> {
    let mut lines = Vec::new();
    let outcome: Result<(), ProxyError> = run_with_retry(policy, max_attempts, |a: &Attempt| {
        let target = match a.target {
            Target::Initial => "initial node",
            Target::SameNode => "same node",
            Target::NextNode => "next node",
        };
        lines.push(format!("attempt {}: {}", a.retry_count + 1, target));
        Err(err.clone())
    });
    if let Err(returned) = outcome {
        let attempts = lines.len();
        lines.push(format!(
            "returned to client after {} attempt(s): {}",
            attempts, returned
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use cqlretry_core::protocol::{Consistency, Unavailable};
    use cqlretry_core::retry::{FallthroughRetryPolicy, DEFAULT_RETRY_POLICY};

    fn unavailable() -> ProxyError {
        Unavailable {
            consistency: Consistency::Quorum,
            required: 2,
            alive: 1,
        }
        .into()
    }

    #[test]
    fn unavailable_moves_to_next_node_then_gives_up() {
        let lines = run_simulate(&DEFAULT_RETRY_POLICY, &unavailable(), 5);
        assert_eq!(
            lines,
            vec![
                "attempt 1: initial node".to_string(),
                "attempt 2: next node".to_string(),
                "returned to client after 2 attempt(s): unavailable at QUORUM (2 replicas required, 1 alive)"
                    .to_string(),
            ]
        );
    }

    #[test]
    fn fallthrough_stops_after_first_attempt() {
        let lines = run_simulate(&FallthroughRetryPolicy, &unavailable(), 5);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("returned to client after 1 attempt(s)"));
    }
}
