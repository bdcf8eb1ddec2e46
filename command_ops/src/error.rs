//! Errors reported by command verbs

use thiserror::Error;

/// A failed command verb
///
/// `Display` is the exact text shown to the user.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OperationError {
    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },

    #[error("no such mapping")]
    NoSuchMapping,

    #[error("no supported: key mapping {from} {to}")]
    UnsupportedKeyMapping { from: String, to: String },
}
