//! Module with the pattern types and their methods.
//!
//! A pattern is a sequence of segments that are matched one after the other against a line.
//! Each segment contributes a fixed number of capture groups, numbered from 1 in the order of the
//! segments. The last segment must reach the end of the line.
//!
//! Plain regular expressions cannot express the two constructs the format needs beyond regular
//! languages, a delimiter run that must not be followed by another delimiter and a fence whose
//! exact repetition closes the fenced text. Both are provided as dedicated segments.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One segment of a [Pattern].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Segment {
    /// The maximal run of `ch` at the current position, which must have at least `min`
    /// characters.
    ///
    /// Contributes one group, the run.
    Run {
        /// The repeated character.
        ch: char,
        /// The minimal length of the run.
        min: usize,
    },
    /// A fenced name. The maximal run of the fence character at the current position opens the
    /// fence, the next occurrence of exactly that run closes it. The text in between must not be
    /// empty.
    ///
    /// Contributes five groups: opening fence, leading whitespace, name, trailing whitespace and
    /// closing fence.
    Fence(char),
    /// A regular expression that is anchored at the current position.
    ///
    /// Contributes all of its capture groups.
    Regex(String),
}

impl Segment {
    /// The number of groups the segment contributes, if it is known without compiling it.
    pub fn static_group_count(&self) -> Option<usize> {
        match self {
            Segment::Run { .. } => Some(1),
            Segment::Fence(_) => Some(5),
            Segment::Regex(_) => None,
        }
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Segment::Run { ch, min } => write!(f, "({ch}{{{min},}})(?!{ch})"),
            Segment::Fence(ch) => write!(f, r"({ch}+)(\s*)((?:(?!\1).)+)(\s*)(\1)"),
            Segment::Regex(rx) => write!(f, "{rx}"),
        }
    }
}

/// A pattern that is used to match a line.
///
/// It displays in regular expression notation. The backreferences of a fence are numbered
/// relative to the fence segment.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pattern {
    segments: Vec<Segment>,
}

impl Pattern {
    /// Create a new, empty pattern.
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Create a pattern that consists of a single regular expression.
    pub fn regex(rx: &str) -> Self {
        Self::new().then_regex(rx)
    }

    /// Append a delimiter run segment.
    pub fn then_run(mut self, ch: char, min: usize) -> Self {
        self.segments.push(Segment::Run { ch, min });
        self
    }

    /// Append a fence segment.
    pub fn then_fence(mut self, ch: char) -> Self {
        self.segments.push(Segment::Fence(ch));
        self
    }

    /// Append a regular expression segment.
    pub fn then_regex(mut self, rx: &str) -> Self {
        self.segments.push(Segment::Regex(rx.to_string()));
        self
    }

    /// Get the segments.
    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for segment in &self.segments {
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}
