//! Module with the state that is threaded from one line to the next.
//!
//! A [Snapshot] is all the lexer needs to resume tokenization at any line boundary. A document
//! driver stores the snapshot returned for a line and passes it back in when it re-lexes the
//! following line after an edit.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The states of the lexer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LexerState {
    /// Structural lines: sections, fields, items, comments.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "start"))]
    Start,
    /// The verbatim body of a multiline field.
    #[cfg_attr(feature = "serde", serde(rename = "multilineField"))]
    MultilineField,
}

impl LexerState {
    /// All lexer states.
    pub const ALL: [LexerState; 2] = [LexerState::Start, LexerState::MultilineField];

    /// The name of the state.
    pub fn name(&self) -> &'static str {
        match self {
            LexerState::Start => "start",
            LexerState::MultilineField => "multilineField",
        }
    }
}

impl std::fmt::Display for LexerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An open multiline field.
///
/// The block is closed by a line that reproduces both the operator and the key literally.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Frame {
    /// The dash run that opened the block, e.g. `--`.
    pub operator: String,
    /// The key text after the dash run, trailing whitespace excluded.
    pub key: String,
}

impl Frame {
    /// Create a new frame.
    pub fn new(operator: &str, key: &str) -> Self {
        Self {
            operator: operator.to_string(),
            key: key.to_string(),
        }
    }

    /// Check if the given operator and key close this frame.
    #[inline]
    pub fn is_closed_by(&self, operator: &str, key: &str) -> bool {
        self.operator == operator && self.key == key
    }
}

/// The lexer state carried across a line boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Snapshot {
    /// The state the next line is lexed in.
    pub state: LexerState,
    /// The open multiline fields, innermost last.
    pub stack: Vec<Frame>,
}

impl Snapshot {
    /// The snapshot a document starts with: state `start`, no open frames.
    pub fn initial() -> Self {
        Self::default()
    }

    /// Get the innermost open frame.
    #[inline]
    pub fn top(&self) -> Option<&Frame> {
        self.stack.last()
    }

    /// Get the snapshot after opening `frame`.
    pub(crate) fn push(mut self, frame: Frame) -> Self {
        self.stack.push(frame);
        self.state = LexerState::MultilineField;
        self
    }

    /// Get the snapshot after closing the innermost frame. The state stays `multilineField` while
    /// outer frames remain open.
    pub(crate) fn pop(mut self) -> Self {
        self.stack.pop();
        self.state = if self.stack.is_empty() {
            LexerState::Start
        } else {
            LexerState::MultilineField
        };
        self
    }

    /// Serialize the snapshot to JSON, e.g. to persist it in a line cache.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Restore a snapshot from JSON.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
