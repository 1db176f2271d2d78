//! Native-protocol error codes.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Error code of an `ERROR` response.
///
/// Codes the protocol does not define are kept as `Other` so that
/// conversion from the raw value never fails. Equality and hashing go by the
/// numeric code, so `Other(0x1300)` equals `ReadFailure`; match on
/// [`ErrorCode::normalized`] rather than on the raw value.
#[derive(Debug, Clone, Copy)]
pub enum ErrorCode {
    ServerError,
    ProtocolError,
    AuthenticationError,
    Unavailable,
    Overloaded,
    IsBootstrapping,
    TruncateError,
    WriteTimeout,
    ReadTimeout,
    ReadFailure,
    FunctionFailure,
    WriteFailure,
    CdcWriteFailure,
    CasWriteUnknown,
    SyntaxError,
    Unauthorized,
    Invalid,
    ConfigError,
    AlreadyExists,
    Unprepared,
    Other(u32),
}

const NAMED: [(ErrorCode, u32, &str); 20] = [
    (ErrorCode::ServerError, 0x0000, "server_error"),
    (ErrorCode::ProtocolError, 0x000A, "protocol_error"),
    (ErrorCode::AuthenticationError, 0x0100, "authentication_error"),
    (ErrorCode::Unavailable, 0x1000, "unavailable"),
    (ErrorCode::Overloaded, 0x1001, "overloaded"),
    (ErrorCode::IsBootstrapping, 0x1002, "is_bootstrapping"),
    (ErrorCode::TruncateError, 0x1003, "truncate_error"),
    (ErrorCode::WriteTimeout, 0x1100, "write_timeout"),
    (ErrorCode::ReadTimeout, 0x1200, "read_timeout"),
    (ErrorCode::ReadFailure, 0x1300, "read_failure"),
    (ErrorCode::FunctionFailure, 0x1400, "function_failure"),
    (ErrorCode::WriteFailure, 0x1500, "write_failure"),
    (ErrorCode::CdcWriteFailure, 0x1600, "cdc_write_failure"),
    (ErrorCode::CasWriteUnknown, 0x1700, "cas_write_unknown"),
    (ErrorCode::SyntaxError, 0x2000, "syntax_error"),
    (ErrorCode::Unauthorized, 0x2100, "unauthorized"),
    (ErrorCode::Invalid, 0x2200, "invalid"),
    (ErrorCode::ConfigError, 0x2300, "config_error"),
    (ErrorCode::AlreadyExists, 0x2400, "already_exists"),
    (ErrorCode::Unprepared, 0x2500, "unprepared"),
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid error code: {0}")]
pub struct ParseErrorCodeError(pub String);

impl ErrorCode {
    pub fn from_code(code: u32) -> Self {
        NAMED
            .iter()
            .find(|(_, c, _)| *c == code)
            .map(|(ec, _, _)| *ec)
            .unwrap_or(ErrorCode::Other(code))
    }

    pub fn code(self) -> u32 {
        match self {
            ErrorCode::ServerError => 0x0000,
            ErrorCode::ProtocolError => 0x000A,
            ErrorCode::AuthenticationError => 0x0100,
            ErrorCode::Unavailable => 0x1000,
            ErrorCode::Overloaded => 0x1001,
            ErrorCode::IsBootstrapping => 0x1002,
            ErrorCode::TruncateError => 0x1003,
            ErrorCode::WriteTimeout => 0x1100,
            ErrorCode::ReadTimeout => 0x1200,
            ErrorCode::ReadFailure => 0x1300,
            ErrorCode::FunctionFailure => 0x1400,
            ErrorCode::WriteFailure => 0x1500,
            ErrorCode::CdcWriteFailure => 0x1600,
            ErrorCode::CasWriteUnknown => 0x1700,
            ErrorCode::SyntaxError => 0x2000,
            ErrorCode::Unauthorized => 0x2100,
            ErrorCode::Invalid => 0x2200,
            ErrorCode::ConfigError => 0x2300,
            ErrorCode::AlreadyExists => 0x2400,
            ErrorCode::Unprepared => 0x2500,
            ErrorCode::Other(code) => code,
        }
    }

    /// Same code, with protocol-defined values moved out of `Other`.
    pub fn normalized(self) -> Self {
        Self::from_code(self.code())
    }

    /// Lowercase name, or `None` for codes outside the protocol's set.
    pub fn name(self) -> Option<&'static str> {
        let code = self.code();
        NAMED
            .iter()
            .find(|(_, c, _)| *c == code)
            .map(|(_, _, name)| *name)
    }
}

impl PartialEq for ErrorCode {
    fn eq(&self, other: &Self) -> bool {
        self.code() == other.code()
    }
}

impl Eq for ErrorCode {}

impl Hash for ErrorCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code().hash(state);
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} (0x{:04X})", name, self.code()),
            None => write!(f, "0x{:04X}", self.code()),
        }
    }
}

/// Accepts a name (`read_failure`), a hex code (`0x1300`) or a decimal code.
impl FromStr for ErrorCode {
    type Err = ParseErrorCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lowered = trimmed.to_ascii_lowercase().replace('-', "_");
        if let Some((ec, _, _)) = NAMED.iter().find(|(_, _, name)| *name == lowered) {
            return Ok(*ec);
        }
        let parsed = match lowered.strip_prefix("0x") {
            Some(hex) => u32::from_str_radix(hex, 16),
            None => lowered.parse::<u32>(),
        };
        parsed
            .map(ErrorCode::from_code)
            .map_err(|_| ParseErrorCodeError(trimmed.to_string()))
    }
}
