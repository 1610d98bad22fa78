//! Configuration errors of the pulse boundary condition.

use thiserror::Error;

use crate::support::{constraint::ConstraintError, dictionary::DictionaryError};

/// Errors that can occur while configuring a pulse boundary condition.
///
/// All of them are configuration errors: the boundary condition cannot be
/// built and the run cannot continue with it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PulseError {
    /// The active fraction lies outside the closed unit interval.
    #[error("duration = {value} is invalid (0 <= duration <= 1)")]
    InvalidDuration {
        value: f64,
        #[source]
        source: ConstraintError,
    },

    /// The period is zero, negative, or not a number.
    #[error("period = {value} is invalid (period > 0)")]
    InvalidPeriod {
        value: f64,
        #[source]
        source: ConstraintError,
    },

    /// The pulse array does not have one value per patch face.
    #[error("pulse value has {found} entries but the patch has {expected} faces")]
    PulseSize { expected: usize, found: usize },

    /// A required entry is missing or malformed.
    #[error("invalid configuration: {0}")]
    Dictionary(#[from] DictionaryError),
}
