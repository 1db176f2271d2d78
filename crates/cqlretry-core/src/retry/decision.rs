//! Verdict returned by a retry policy.

use std::fmt;

/// What the execution loop should do with a failed attempt.
///
/// Raw values follow declaration order so the verdict can travel as a
/// `u8` (metrics labels, FFI); see [`RetryDecision::label_of`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RetryDecision {
    /// Resend the same request on the current connection.
    RetrySame = 0,
    /// Resend the same request to another coordinator.
    RetryNext = 1,
    /// Stop and hand the original error to the client.
    ReturnError = 2,
}

const UNKNOWN_LABEL: &str = "unknown";

impl RetryDecision {
    pub fn as_str(self) -> &'static str {
        match self {
            RetryDecision::RetrySame => "retry same node",
            RetryDecision::RetryNext => "retry next node",
            RetryDecision::ReturnError => "returning error",
        }
    }

    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(RetryDecision::RetrySame),
            1 => Some(RetryDecision::RetryNext),
            2 => Some(RetryDecision::ReturnError),
            _ => None,
        }
    }

    pub fn as_raw(self) -> u8 {
        self as u8
    }

    /// Label for a raw verdict value; out-of-range values render as "unknown".
    pub fn label_of(raw: u8) -> &'static str {
        Self::from_raw(raw).map_or(UNKNOWN_LABEL, Self::as_str)
    }

    pub fn is_retry(self) -> bool {
        !matches!(self, RetryDecision::ReturnError)
    }
}

impl fmt::Display for RetryDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(RetryDecision::RetrySame.to_string(), "retry same node");
        assert_eq!(RetryDecision::RetryNext.to_string(), "retry next node");
        assert_eq!(RetryDecision::ReturnError.to_string(), "returning error");
    }

    #[test]
    fn raw_values_follow_declaration_order() {
        assert_eq!(RetryDecision::RetrySame.as_raw(), 0);
        assert_eq!(RetryDecision::RetryNext.as_raw(), 1);
        assert_eq!(RetryDecision::ReturnError.as_raw(), 2);
        for raw in 0..=2 {
            let d = RetryDecision::from_raw(raw).unwrap();
            assert_eq!(RetryDecision::label_of(raw), d.as_str());
        }
    }

    #[test]
    fn out_of_range_raw_renders_unknown() {
        assert_eq!(RetryDecision::from_raw(3), None);
        assert_eq!(RetryDecision::label_of(3), "unknown");
        assert_eq!(RetryDecision::label_of(u8::MAX), "unknown");
    }

    #[test]
    fn only_return_error_is_terminal() {
        assert!(RetryDecision::RetrySame.is_retry());
        assert!(RetryDecision::RetryNext.is_retry());
        assert!(!RetryDecision::ReturnError.is_retry());
    }
}
