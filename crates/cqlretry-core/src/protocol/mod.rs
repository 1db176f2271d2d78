//! Typed error payloads of the CQL native protocol.
//!
//! These are the already-decoded forms the codec hands to the retry layer.
//! Nothing here touches wire bytes; the types only model the fields a retry
//! policy may inspect.

mod consistency;
mod error_code;
mod payload;
mod write_type;

pub use consistency::{Consistency, ParseConsistencyError};
pub use error_code::{ErrorCode, ParseErrorCodeError};
pub use payload::{ErrorResponse, ReadTimeout, Unavailable, WriteTimeout};
pub use write_type::{ParseWriteTypeError, WriteType};
