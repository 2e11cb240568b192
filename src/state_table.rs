use crate::{LexerState, Rule, TokenKind};

/// How a line is tokenized when no rule of a state matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Every run of non-whitespace characters becomes a token of the given kind, every run of
    /// whitespace a [TokenKind::Text] token.
    Fragments(TokenKind),
    /// The whole line becomes a single token of the given kind.
    Line(TokenKind),
}

/// A lexer state with its rules.
/// The contained data is used to create a compiled state table that tokenizes lines in this state.
#[derive(Debug, Clone)]
pub struct StateTable {
    /// The state this table applies to.
    pub state: LexerState,
    /// The rules of the state.
    /// The priorities of the rules are determined by their order in the vector. The first rule
    /// that matches a line wins.
    pub rules: Vec<Rule>,
    /// The tokenization of lines no rule matches.
    pub fallback: Fallback,
}

impl StateTable {
    /// Creates a new state table with the given state, rules and fallback.
    pub fn new(state: LexerState, rules: Vec<Rule>, fallback: Fallback) -> Self {
        Self {
            state,
            rules,
            fallback,
        }
    }
}
