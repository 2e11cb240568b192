#![forbid(missing_docs)]
//! # `enolex`
//! The `enolex` crate is a line-oriented lexer for Eno, a plain-text format for human-editable
//! configuration and content documents.
//! It classifies every line into a sequence of typed tokens, e.g. for syntax highlighting in an
//! editor or as input of a structural parser.
//!
//! The lexer works on one line at a time. Multiline fields make the classification of a line
//! depend on the lines before it, so every call returns a [Snapshot] along with the tokens, which
//! is passed in when the next line is tokenized. A snapshot is a plain value: an editor can cache
//! the snapshot of each line and resume tokenization at any line after an edit.
//!
//! Tokenization never fails. Fragments that match no rule are classified as
//! [TokenKind::Invalid], and the tokens of a line always cover the line without gaps.
//!
//! # Example
//! ```rust
//! use enolex::{initial_snapshot, tokenize_line, TokenKind};
//!
//! const INPUT: &[&str] = &[
//!     "# greeting < template",
//!     "text: Hello",
//!     "-- poem",
//!     "roses: red",
//!     "-- poem",
//! ];
//!
//! fn main() {
//!     let mut snapshot = initial_snapshot();
//!     for line in INPUT {
//!         let (tokens, next) = tokenize_line(line, &snapshot);
//!         for token in &tokens {
//!             println!("{}", token);
//!         }
//!         snapshot = next;
//!     }
//!     assert_eq!(snapshot, initial_snapshot());
//! }
//! ```
//!
//! Custom rule sets can be assembled from [StateTable]s with the [LexerBuilder].
//!
//! # Crate features
//! - `serde`: enabled by default. Tokens, spans, token kinds and snapshots implement `Serialize`
//!   and `Deserialize`, and snapshots can be converted to and from JSON.

/// Module that provides a Captures type
mod captures;
pub use captures::Captures;

/// The Eno rule set and format metadata.
pub mod eno;

/// Module with error definitions
mod errors;
pub use errors::{LexerError, LexerErrorKind, Result};

/// The module with internal implementation details.
mod internal;

/// The module with the lexer.
mod lexer;
pub use lexer::Lexer;

/// The module with the lexer builder.
mod lexer_builder;
pub use lexer_builder::LexerBuilder;

/// Module that provides a Pattern type and a Segment type
mod pattern;
pub use pattern::{Pattern, Segment};

/// Module that provides a position type
mod position;
pub use position::Position;

/// Module that provides the Rule type
mod rule;
pub use rule::{Emit, Handler, Rule};

/// Module with the state carried from line to line
mod snapshot;
pub use snapshot::{Frame, LexerState, Snapshot};

/// Module that provides a Span type
mod span;
pub use span::Span;

/// The module with the state table.
mod state_table;
pub use state_table::{Fallback, StateTable};

/// Module that provides a Token type
mod token;
pub use token::Token;

/// Module that provides the TokenKind type
mod token_kind;
pub use token_kind::TokenKind;

/// Module that provides a TokenizeLines type
mod tokenize_lines;
pub use tokenize_lines::{LineTokens, TokenizeLines};

/// Returns the lexer for Eno documents.
pub fn lexer() -> &'static Lexer {
    &eno::ENO_LEXER
}

/// Returns the snapshot a document starts with: state `start` without open multiline fields.
pub fn initial_snapshot() -> Snapshot {
    Snapshot::initial()
}

/// Tokenizes one line of an Eno document with the snapshot returned for the previous line.
///
/// Returns the tokens of the line and the snapshot for the next line.
pub fn tokenize_line<'h>(line: &'h str, snapshot: &Snapshot) -> (Vec<Token<'h>>, Snapshot) {
    lexer().tokenize_line(line, snapshot)
}

/// Returns an iterator over the tokenized lines of an Eno document.
pub fn tokenize_lines(input: &str) -> TokenizeLines<'_> {
    lexer().tokenize_lines(input)
}
