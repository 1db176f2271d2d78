//! Retry decisions for recoverable protocol errors.
//!
//! A [`RetryPolicy`] maps one decoded error plus the number of retries
//! already made into a [`RetryDecision`]. Policies are stateless and shared
//! behind `&dyn RetryPolicy`; the retry count is owned by the caller, see
//! [`run_with_retry`] for a reference execution loop.

mod decision;
mod error;
mod fallthrough;
mod policy;
mod run;

pub use decision::RetryDecision;
pub use error::ProxyError;
pub use fallthrough::FallthroughRetryPolicy;
pub use policy::{DefaultRetryPolicy, RetryPolicy, DEFAULT_RETRY_POLICY};
pub use run::{run_with_retry, Attempt, Target};
