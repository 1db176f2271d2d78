//! Retry-decision core for a CQL native-protocol proxy.
//!
//! Given a decoded, recoverable error and the number of retries already made,
//! a [`retry::RetryPolicy`] says whether to resend to the same coordinator,
//! move to another one, or return the error to the client.

pub mod config;
pub mod logging;
pub mod protocol;
pub mod retry;
