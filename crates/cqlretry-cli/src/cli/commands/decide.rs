//! Single decision: one failure, one retry count, one verdict.

use cqlretry_core::retry::{ProxyError, RetryPolicy};

pub fn run_decide(policy: &dyn RetryPolicy, err: &ProxyError, retry_count: u32) -> String {
    let decision = err.decide(policy, retry_count);
    format!("{} (retry_count={}): {}", err.kind(), retry_count, decision)
}
