//! Errors shared by all patch fields.

use thiserror::Error;

use crate::support::{dictionary::DictionaryError, mapping::MappingError};

use super::PulseError;

/// Errors raised through the shared [`PatchField`](super::PatchField) contract.
///
/// None of these are recoverable by the patch field itself. A host that
/// receives one cannot continue with the affected boundary condition.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PatchFieldError {
    /// No constructor is registered under the requested type name.
    #[error("unknown patch field type '{name}', valid types are: {available}")]
    UnknownType {
        /// The requested type name.
        name: String,

        /// Comma-separated list of registered type names.
        available: String,
    },

    /// A remap was given a source patch field of a different kind.
    #[error("cannot map a '{found}' patch field onto a '{expected}' patch field")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// The configuration text is missing or malformed.
    #[error("invalid configuration: {0}")]
    Dictionary(#[from] DictionaryError),

    /// A face map did not fit the arrays it was applied to.
    #[error("face mapping failed: {0}")]
    Mapping(#[from] MappingError),

    /// A pulse boundary condition rejected its configuration.
    #[error("pulse boundary condition: {0}")]
    Pulse(#[from] PulseError),
}
