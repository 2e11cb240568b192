//! Module with the rule type.
//!
//! A rule couples a [Pattern] with the way tokens are produced from its groups. Most rules are
//! static, they map each group to a token kind. Rules that need to look at or change the
//! [Snapshot] carry a [Handler] instead.
use crate::{Captures, LexerState, Pattern, Snapshot, Token, TokenKind};

/// A function that turns the groups of a match into tokens and the snapshot for the next line.
///
/// Returning `None` declines the match. The lexer then continues with the next rule of the state
/// as if the pattern had not matched.
pub type Handler =
    for<'h> fn(&Captures<'h>, &Snapshot) -> Option<(Vec<Token<'h>>, Snapshot)>;

/// The way a rule produces tokens.
#[derive(Clone)]
pub enum Emit {
    /// One token kind per capture group, in group order.
    Tokens(Vec<TokenKind>),
    /// A stateful handler.
    Handler(Handler),
}

impl std::fmt::Debug for Emit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Emit::Tokens(kinds) => f.debug_tuple("Tokens").field(kinds).finish(),
            Emit::Handler(_) => f.write_str("Handler"),
        }
    }
}

/// A recognizer for one kind of line.
#[derive(Debug, Clone)]
pub struct Rule {
    /// The name of the rule, used in logs and errors.
    pub name: String,
    /// The pattern that must match the line.
    pub pattern: Pattern,
    /// How tokens are produced from a match.
    pub emit: Emit,
    /// The state the next line is lexed in after a static rule fired. Handlers determine the next
    /// state themselves.
    pub next_state: Option<LexerState>,
}

impl Rule {
    /// Create a static rule.
    pub fn new(name: &str, pattern: Pattern, kinds: &[TokenKind]) -> Self {
        Self {
            name: name.to_string(),
            pattern,
            emit: Emit::Tokens(kinds.to_vec()),
            next_state: None,
        }
    }

    /// Create a rule with a handler.
    pub fn with_handler(name: &str, pattern: Pattern, handler: Handler) -> Self {
        Self {
            name: name.to_string(),
            pattern,
            emit: Emit::Handler(handler),
            next_state: None,
        }
    }

    /// Set the state a static rule switches to.
    pub fn switch_to(self, next_state: LexerState) -> Self {
        Self {
            next_state: Some(next_state),
            ..self
        }
    }
}
