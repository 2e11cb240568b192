use log::debug;
use rustc_hash::FxHashMap;

use crate::{
    internal::CompiledStateTable, Lexer, LexerError, LexerErrorKind, LexerState, Result,
    StateTable,
};

/// A builder for creating a lexer.
#[derive(Debug, Clone, Default)]
pub struct LexerBuilder {
    state_tables: Vec<StateTable>,
}

impl LexerBuilder {
    /// Creates a new lexer builder.
    pub fn new() -> Self {
        Self {
            state_tables: Vec::new(),
        }
    }

    /// Adds a state table to the lexer builder.
    pub fn add_state_table(mut self, state_table: StateTable) -> Self {
        self.state_tables.push(state_table);
        self
    }

    /// Adds multiple state tables to the lexer builder.
    pub fn add_state_tables(mut self, state_tables: &[StateTable]) -> Self {
        self.state_tables.extend_from_slice(state_tables);
        self
    }

    /// Builds the lexer from the lexer builder.
    /// Every lexer state needs exactly one state table.
    pub fn build(self) -> Result<Lexer> {
        let mut tables = FxHashMap::default();
        for state_table in self.state_tables {
            let state = state_table.state;
            if tables.contains_key(&state) {
                return Err(LexerError::new(LexerErrorKind::DuplicateStateTable(state)));
            }
            debug!(
                "Compiling state table {} with {} rules",
                state,
                state_table.rules.len()
            );
            tables.insert(state, CompiledStateTable::try_from_state_table(state_table)?);
        }
        if let Some(state) = LexerState::ALL
            .iter()
            .find(|state| !tables.contains_key(*state))
        {
            return Err(LexerError::new(LexerErrorKind::MissingStateTable(*state)));
        }
        Ok(Lexer { tables })
    }
}
