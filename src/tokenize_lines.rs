use crate::{Lexer, Position, Snapshot, Token};

/// The tokens of one line of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTokens<'h> {
    /// The 1-based number of the line.
    pub line_number: usize,
    /// The byte offset of the start of the line in the document.
    pub offset: usize,
    /// The line without its line break.
    pub line: &'h str,
    /// The tokens of the line. Their spans are relative to the start of the line.
    pub tokens: Vec<Token<'h>>,
    /// The snapshot after the line, i.e. the one to tokenize the next line with.
    pub snapshot: Snapshot,
}

impl<'h> LineTokens<'h> {
    /// Returns the tokens with their spans relative to the start of the document.
    pub fn document_tokens(&self) -> impl Iterator<Item = Token<'h>> + '_ {
        self.tokens.iter().map(|t| t.with_offset(self.offset))
    }

    /// Returns the position of the start of the given token of this line.
    ///
    /// The token must come from [`LineTokens::tokens`], its span is relative to the line. Tokens
    /// of [`LineTokens::document_tokens`] are not accepted.
    pub fn position(&self, token: &Token<'_>) -> Position {
        debug_assert!(
            token.end() <= self.line.len(),
            "position expects a token with a line relative span"
        );
        let column = self.line[..token.start()].chars().count() + 1;
        Position::new(self.line_number, column)
    }
}

/// An iterator over the tokenized lines of a document.
///
/// Lines are separated by `\n`, a `\r` before it is not part of the line. The snapshot of each
/// line is threaded into the next one.
///
/// * `'h` represents the lifetime of the document being tokenized.
///
/// This iterator can be created with the [`crate::Lexer::tokenize_lines`] method.
#[derive(Debug, Clone)]
pub struct TokenizeLines<'h> {
    lexer: &'h Lexer,
    input: &'h str,
    offset: usize,
    line_number: usize,
    snapshot: Snapshot,
}

impl<'h> TokenizeLines<'h> {
    /// Creates a new `TokenizeLines` iterator.
    pub(crate) fn new(lexer: &'h Lexer, input: &'h str) -> Self {
        Self {
            lexer,
            input,
            offset: 0,
            line_number: 1,
            snapshot: lexer.initial_snapshot(),
        }
    }

    /// Resumes tokenization at a line boundary.
    ///
    /// A document driver that re-lexes after an edit passes the byte offset and number of the
    /// first changed line together with the snapshot it cached for the line before it. The
    /// preceding lines are not scanned again.
    pub fn resume_at(self, offset: usize, line_number: usize, snapshot: Snapshot) -> Self {
        debug_assert!(
            offset == 0 || self.input[..offset].ends_with('\n'),
            "offset must be at a line boundary"
        );
        Self {
            offset,
            line_number,
            snapshot,
            ..self
        }
    }

    /// Retrieve the byte offset of the next line to tokenize.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Retrieve the snapshot the next line is tokenized with.
    #[inline]
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }
}

impl<'h> Iterator for TokenizeLines<'h> {
    type Item = LineTokens<'h>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.input.len() {
            return None;
        }
        let rest = &self.input[self.offset..];
        let (line, consumed) = match rest.find('\n') {
            Some(i) => (&rest[..i], i + 1),
            None => (rest, rest.len()),
        };
        let line = line.strip_suffix('\r').unwrap_or(line);
        let (tokens, snapshot) = self.lexer.tokenize_line(line, &self.snapshot);
        let line_tokens = LineTokens {
            line_number: self.line_number,
            offset: self.offset,
            line,
            tokens,
            snapshot: snapshot.clone(),
        };
        self.snapshot = snapshot;
        self.offset += consumed;
        self.line_number += 1;
        Some(line_tokens)
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer;

    #[test]
    fn test_position_counts_characters() {
        let lines: Vec<_> = lexer().tokenize_lines("# s\näö: x\n").collect();
        let value = lines[1].tokens.last().unwrap();
        assert_eq!(value.text(), "x");
        assert_eq!(lines[1].position(value), crate::Position::new(2, 5));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "line relative span")]
    fn test_position_rejects_document_tokens() {
        let lines: Vec<_> = lexer().tokenize_lines("# s\nkey: value\n").collect();
        let value = lines[1].document_tokens().last().unwrap();
        lines[1].position(&value);
    }
}
