use thiserror::Error;

/// Errors raised while reading configuration text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictionaryError {
    /// A required keyword has no entry.
    #[error("keyword '{key}' is undefined")]
    MissingKey { key: String },

    /// An entry exists but does not hold the expected kind of value.
    #[error("entry '{key}' should be a {expected}, found '{found}'")]
    Malformed {
        key: String,
        expected: String,
        found: String,
    },

    /// A per-face list has the wrong number of values for the patch.
    #[error("size {found} is not equal to the given value of {expected} for entry '{key}'")]
    SizeMismatch {
        key: String,
        expected: usize,
        found: usize,
    },

    /// The text contains a token where a keyword or value was expected.
    #[error("unexpected '{found}' on line {line}")]
    UnexpectedToken { line: usize, found: String },

    /// An entry is missing its closing `;`.
    #[error("entry '{keyword}' is not terminated by ';'")]
    UnterminatedEntry { keyword: String },

    /// A `/*` comment is never closed.
    #[error("comment starting on line {line} is never closed")]
    UnterminatedComment { line: usize },
}
