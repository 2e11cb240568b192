#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Span, TokenKind};

/// A classified fragment of a line.
///
/// * `'h` represents the lifetime of the line the token was cut from.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Token<'h> {
    /// The syntactic role of the token.
    kind: TokenKind,
    /// The text of the token.
    #[cfg_attr(feature = "serde", serde(borrow))]
    text: &'h str,
    /// The byte span of the token in its line.
    span: Span,
}

impl<'h> Token<'h> {
    /// Create a new token.
    pub fn new(kind: TokenKind, text: &'h str, span: Span) -> Self {
        debug_assert_eq!(text.len(), span.len(), "token text and span disagree");
        Self { kind, text, span }
    }

    /// Create a token that covers the given span of `line`.
    pub(crate) fn from_line(kind: TokenKind, line: &'h str, span: Span) -> Self {
        Self::new(kind, &line[span.range()], span)
    }

    /// Get the kind of the token.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Get the text of the token.
    #[inline]
    pub fn text(&self) -> &'h str {
        self.text
    }

    /// Get the start of the token.
    #[inline]
    pub fn start(&self) -> usize {
        self.span.start
    }

    /// Get the end of the token.
    #[inline]
    pub fn end(&self) -> usize {
        self.span.end
    }

    /// Get the span of the token.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Get the span as range
    #[inline]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.span.range()
    }

    /// Get the length of the token.
    #[inline]
    pub fn len(&self) -> usize {
        self.span.len()
    }

    /// Check if the token is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    /// Get the token with its span moved by `offset` bytes, e.g. from line to document offsets.
    #[inline]
    pub fn with_offset(self, offset: usize) -> Self {
        Self {
            span: self.span.offset(offset),
            ..self
        }
    }
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?} {}", self.span, self.text, self.kind)
    }
}
