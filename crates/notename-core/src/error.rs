//! Error types for notename-core.

use thiserror::Error;

use crate::types::FieldName;

/// Errors raised while building field input or compiling a pattern.
///
/// Every error is fatal to the compilation call that raised it: no partial
/// fragment is ever returned alongside one.
#[derive(Debug, Error)]
pub enum Error {
    /// A keyword/value argument list had an odd number of elements.
    #[error("malformed call: {len} arguments cannot be paired into field/value entries")]
    MalformedCall { len: usize },

    /// A value appeared where a field key was expected.
    #[error("malformed call: expected a field name at argument {position}")]
    ExpectedField { position: usize },

    /// The value supplied for a field has the wrong shape.
    #[error("invalid value for `{field}`: expected {expected}")]
    InvalidValue {
        field: FieldName,
        expected: &'static str,
    },

    /// A field name outside the closed set.
    #[error("unknown field `{0}`")]
    UnknownField(String),

    /// A file-type tag missing from the registry.
    #[error("unknown file type `{0}`")]
    UnknownFileType(String),

    /// An `or`/`and` keyword node without children.
    #[error("empty `{0}` keyword expression")]
    EmptyKeywordExpression(&'static str),

    /// A keyword expression that could not be parsed or deserialised.
    #[error("malformed keyword expression: {0}")]
    MalformedKeywords(String),

    /// Identifiers are at most 15 characters wide.
    #[error("identifier is {len} characters long, the maximum is 15")]
    IdentifierTooLong { len: usize },

    /// A component order that names the same field twice.
    #[error("component order lists `{0}` more than once")]
    DuplicateComponent(FieldName),

    /// The rendered pattern was rejected by the regex engine.
    #[error("rendered pattern is not a valid regex: {0}")]
    Regex(#[from] regex::Error),
}

impl Error {
    /// `true` for failures caused by a reference that could not be resolved
    /// (as opposed to malformed input).
    pub fn is_unresolved_reference(&self) -> bool {
        matches!(self, Error::UnknownFileType(_))
    }
}

/// Result type for notename-core operations.
pub type Result<T> = std::result::Result<T, Error>;
