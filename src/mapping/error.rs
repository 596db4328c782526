//! Error definitions for the mapping module

use thiserror::Error;

/// Errors raised while parsing or registering mapping records
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// The GUID field is not exactly 32 hex characters
    #[error("Invalid device GUID: {0}")]
    InvalidGuid(String),

    /// The record or one of its fields does not follow the mapping grammar
    ///
    /// The whole record is rejected; nothing from it is applied.
    #[error("Malformed mapping: {0}")]
    MalformedMapping(String),
}
