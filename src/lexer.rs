use log::trace;
use rustc_hash::FxHashMap;

use crate::{internal::CompiledStateTable, LexerState, Snapshot, Token, TokenizeLines};

/// A line lexer.
///
/// It consists of one compiled state table per [LexerState]. A line is tokenized with the table
/// of the state recorded in the [Snapshot] that was returned for the previous line. The lexer
/// itself holds no mutable state, so one instance can serve any number of documents and threads.
///
/// To create a lexer for a custom rule set, use the [crate::LexerBuilder]. The Eno rule set is
/// available through [crate::lexer].
#[derive(Debug, Clone)]
pub struct Lexer {
    pub(crate) tables: FxHashMap<LexerState, CompiledStateTable>,
}

impl Lexer {
    /// The snapshot a document starts with.
    pub fn initial_snapshot(&self) -> Snapshot {
        Snapshot::initial()
    }

    /// Tokenizes a single line, which must not contain a line break.
    ///
    /// Returns the tokens, which cover the line without gaps or overlaps, and the snapshot to
    /// tokenize the following line with.
    pub fn tokenize_line<'h>(
        &self,
        line: &'h str,
        snapshot: &Snapshot,
    ) -> (Vec<Token<'h>>, Snapshot) {
        // The builder guarantees a table for every state.
        let table = &self.tables[&snapshot.state];
        let (tokens, next_snapshot) = table.tokenize_line(line, snapshot);
        if next_snapshot.state != snapshot.state {
            trace!(
                "Switching from state {} to state {}",
                snapshot.state,
                next_snapshot.state
            );
        }
        (tokens, next_snapshot)
    }

    /// Returns an iterator over the tokenized lines of `input`, starting with the initial
    /// snapshot.
    pub fn tokenize_lines<'h>(&'h self, input: &'h str) -> TokenizeLines<'h> {
        TokenizeLines::new(self, input)
    }
}
