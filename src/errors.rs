use thiserror::Error;

use crate::LexerState;

/// The result type for the `enolex` crate.
pub type Result<T> = std::result::Result<T, LexerError>;

/// The error type for the `enolex` crate.
///
/// Tokenizing a line never fails. Errors only arise while a [crate::Lexer] is built from state
/// tables or while a persisted [crate::Snapshot] is restored.
#[derive(Error, Debug)]
pub struct LexerError {
    /// The source of the error.
    pub source: Box<LexerErrorKind>,
}

impl LexerError {
    /// Create a new `LexerError`.
    pub fn new(kind: LexerErrorKind) -> Self {
        LexerError {
            source: Box::new(kind),
        }
    }

    /// Get the kind of the error.
    #[inline]
    pub fn kind(&self) -> &LexerErrorKind {
        &self.source
    }
}

impl std::fmt::Display for LexerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

/// The error kind type.
#[derive(Error, Debug)]
pub enum LexerErrorKind {
    /// A regex segment of a pattern could not be compiled.
    #[error("'{1}' {0}")]
    RegexError(regex::Error, String),

    /// A pattern without any segment was given to a rule.
    #[error("Rule '{0}' has an empty pattern")]
    EmptyPattern(String),

    /// A static rule lists a different number of token kinds than its pattern has groups.
    #[error("Rule '{rule}' maps {found} token kinds, but its pattern has {expected} groups")]
    GroupCountMismatch {
        /// The name of the rule.
        rule: String,
        /// The number of capture groups of the pattern.
        expected: usize,
        /// The number of token kinds given.
        found: usize,
    },

    /// No state table was given for a lexer state.
    #[error("No state table for lexer state '{0}'")]
    MissingStateTable(LexerState),

    /// More than one state table was given for a lexer state.
    #[error("Duplicate state table for lexer state '{0}'")]
    DuplicateStateTable(LexerState),

    /// A persisted snapshot could not be read or written.
    #[cfg(feature = "serde")]
    #[error(transparent)]
    SnapshotError(serde_json::Error),
}

impl From<LexerErrorKind> for LexerError {
    fn from(kind: LexerErrorKind) -> Self {
        LexerError::new(kind)
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for LexerError {
    fn from(error: serde_json::Error) -> Self {
        LexerError::new(LexerErrorKind::SnapshotError(error))
    }
}
