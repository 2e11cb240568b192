use crate::{Span, Token, TokenKind};

/// The groups a [crate::Pattern] captured in a line.
///
/// Group 0 spans the whole match, i.e. the line without its indentation. Groups of optional
/// parts that did not participate in the match are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captures<'h> {
    line: &'h str,
    groups: Vec<Option<Span>>,
}

impl<'h> Captures<'h> {
    pub(crate) fn new(line: &'h str, groups: Vec<Option<Span>>) -> Self {
        Self { line, groups }
    }

    /// Get the line the groups were captured in.
    #[inline]
    pub fn line(&self) -> &'h str {
        self.line
    }

    /// Get the number of groups, including group 0.
    #[inline]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check if there are no groups at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Get the span of group `index`.
    #[inline]
    pub fn span(&self, index: usize) -> Option<Span> {
        self.groups.get(index).copied().flatten()
    }

    /// Get the text of group `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&'h str> {
        self.span(index).map(|span| &self.line[span.range()])
    }

    /// Get a token of the given kind for group `index`. Missing and empty groups yield no token.
    pub fn token(&self, index: usize, kind: TokenKind) -> Option<Token<'h>> {
        self.span(index)
            .filter(|span| !span.is_empty())
            .map(|span| Token::from_line(kind, self.line, span))
    }

    /// Get the tokens for all groups, where `kinds[i]` is the kind of group `i + 1`.
    pub fn tokens(&self, kinds: &[TokenKind]) -> Vec<Token<'h>> {
        kinds
            .iter()
            .enumerate()
            .filter_map(|(i, kind)| self.token(i + 1, *kind))
            .collect()
    }
}
