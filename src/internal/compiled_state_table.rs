use log::trace;

use crate::{Fallback, LexerState, Result, Snapshot, Span, StateTable, Token, TokenKind};

use super::CompiledRule;

/// A compiled state table that can be used to tokenize lines.
#[derive(Debug, Clone)]
pub(crate) struct CompiledStateTable {
    /// The state the table applies to.
    pub(crate) state: LexerState,
    /// The rules in priority order.
    rules: Vec<CompiledRule>,
    fallback: Fallback,
}

impl CompiledStateTable {
    /// Create a new compiled state table.
    pub(crate) fn try_from_state_table(state_table: StateTable) -> Result<Self> {
        let StateTable {
            state,
            rules,
            fallback,
        } = state_table;
        let rules = rules
            .into_iter()
            .map(CompiledRule::try_from_rule)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            state,
            rules,
            fallback,
        })
    }

    /// Tokenize one line with the first rule that matches it.
    ///
    /// Rules are matched against the line without its indentation, which becomes a
    /// [TokenKind::Text] token in front of the rule's tokens. If no rule matches, the fallback
    /// tokenizes the whole line and the snapshot is passed on unchanged.
    pub(crate) fn tokenize_line<'h>(
        &self,
        line: &'h str,
        snapshot: &Snapshot,
    ) -> (Vec<Token<'h>>, Snapshot) {
        let indent = line.len() - line.trim_start().len();
        for rule in &self.rules {
            if let Some((mut tokens, next_snapshot)) = rule.apply(line, indent, snapshot) {
                trace!("State {}: rule '{}' matched {:?}", self.state, rule.name, line);
                if indent > 0 {
                    tokens.insert(
                        0,
                        Token::from_line(TokenKind::Text, line, Span::new(0, indent)),
                    );
                }
                return (tokens, next_snapshot);
            }
        }
        trace!("State {}: no rule matched {:?}", self.state, line);
        (fallback_tokens(self.fallback, line), snapshot.clone())
    }
}

fn fallback_tokens(fallback: Fallback, line: &str) -> Vec<Token<'_>> {
    match fallback {
        Fallback::Line(_) if line.is_empty() => Vec::new(),
        Fallback::Line(kind) => vec![Token::from_line(kind, line, Span::new(0, line.len()))],
        Fallback::Fragments(kind) => {
            let mut tokens = Vec::new();
            let mut start = 0;
            let mut in_whitespace = false;
            for (i, c) in line.char_indices() {
                if c.is_whitespace() != in_whitespace && i > start {
                    let kind = if in_whitespace { TokenKind::Text } else { kind };
                    tokens.push(Token::from_line(kind, line, Span::new(start, i)));
                    start = i;
                }
                in_whitespace = c.is_whitespace();
            }
            if start < line.len() {
                let kind = if in_whitespace { TokenKind::Text } else { kind };
                tokens.push(Token::from_line(kind, line, Span::new(start, line.len())));
            }
            tokens
        }
    }
}
