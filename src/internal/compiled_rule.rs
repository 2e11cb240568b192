use crate::{Emit, LexerError, LexerErrorKind, LexerState, Result, Rule, Snapshot, Token};

use super::CompiledPattern;

/// A rule with its pattern compiled.
#[derive(Debug, Clone)]
pub(crate) struct CompiledRule {
    pub(crate) name: String,
    pattern: CompiledPattern,
    emit: Emit,
    next_state: Option<LexerState>,
}

impl CompiledRule {
    /// Compile the given rule.
    /// A static rule must list exactly one token kind per capture group of its pattern.
    pub(crate) fn try_from_rule(rule: Rule) -> Result<Self> {
        let Rule {
            name,
            pattern,
            emit,
            next_state,
        } = rule;
        if pattern.segments().is_empty() {
            return Err(LexerError::new(LexerErrorKind::EmptyPattern(name)));
        }
        let pattern = CompiledPattern::try_from_pattern(&pattern)?;
        if let Emit::Tokens(kinds) = &emit {
            if kinds.len() != pattern.group_count() {
                return Err(LexerError::new(LexerErrorKind::GroupCountMismatch {
                    rule: name,
                    expected: pattern.group_count(),
                    found: kinds.len(),
                }));
            }
        }
        Ok(Self {
            name,
            pattern,
            emit,
            next_state,
        })
    }

    /// Apply the rule to `line` from byte offset `start` on.
    /// Returns `None` if the pattern doesn't match or the handler declines the match.
    pub(crate) fn apply<'h>(
        &self,
        line: &'h str,
        start: usize,
        snapshot: &Snapshot,
    ) -> Option<(Vec<Token<'h>>, Snapshot)> {
        let captures = self.pattern.captures(line, start)?;
        match &self.emit {
            Emit::Tokens(kinds) => {
                let mut next_snapshot = snapshot.clone();
                if let Some(next_state) = self.next_state {
                    next_snapshot.state = next_state;
                }
                Some((captures.tokens(kinds), next_snapshot))
            }
            Emit::Handler(handler) => handler(&captures, snapshot),
        }
    }
}
