//! Error types for data parsing in hts-types.

use thiserror::Error;

/// Errors that can occur when decoding or validating HTS settings data.
///
/// This error type is transport-agnostic and carries no BLE-specific
/// failures; those belong to whatever stack moves the bytes.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The input buffer does not have the exact length of the record.
    #[error("Length mismatch: settings record requires {expected} bytes, got {actual}")]
    LengthMismatch {
        /// Required number of bytes.
        expected: usize,
        /// Number of bytes supplied.
        actual: usize,
    },

    /// A field holds a value outside its documented enumeration.
    #[error("Invalid {field} value: {value}")]
    InvalidField {
        /// Wire name of the field.
        field: &'static str,
        /// The offending raw byte.
        value: u8,
    },

    /// A textual field value did not name a known variant.
    #[error("Invalid {field} name: '{name}'")]
    InvalidName {
        /// Wire name of the field.
        field: &'static str,
        /// The unrecognised input.
        name: String,
    },
}

/// Result type alias using hts-types' ParseError type.
pub type ParseResult<T> = std::result::Result<T, ParseError>;
