use regex::Regex;

use crate::{Captures, LexerError, LexerErrorKind, Pattern, Result, Segment, Span};

#[derive(Debug, Clone)]
enum CompiledSegment {
    Run { ch: char, min: usize },
    Fence(char),
    Regex(Regex),
}

/// A compiled pattern that can be matched against a line.
#[derive(Debug, Clone)]
pub(crate) struct CompiledPattern {
    segments: Vec<CompiledSegment>,
    /// The number of groups without group 0.
    group_count: usize,
}

impl CompiledPattern {
    /// Compile the given pattern.
    /// Every regex segment is anchored at its start, the last segment also at the end of the line.
    pub(crate) fn try_from_pattern(pattern: &Pattern) -> Result<Self> {
        let last = pattern.segments().len().saturating_sub(1);
        let mut segments = Vec::with_capacity(pattern.segments().len());
        let mut group_count = 0;
        for (i, segment) in pattern.segments().iter().enumerate() {
            let compiled = match segment {
                Segment::Run { ch, min } => CompiledSegment::Run { ch: *ch, min: *min },
                Segment::Fence(ch) => CompiledSegment::Fence(*ch),
                Segment::Regex(rx) => {
                    let anchored = if i == last {
                        format!("^(?:{rx})$")
                    } else {
                        format!("^(?:{rx})")
                    };
                    let regex = Regex::new(&anchored).map_err(|e| {
                        LexerError::new(LexerErrorKind::RegexError(e, rx.to_string()))
                    })?;
                    CompiledSegment::Regex(regex)
                }
            };
            group_count += segment
                .static_group_count()
                .unwrap_or_else(|| match &compiled {
                    CompiledSegment::Regex(regex) => regex.captures_len() - 1,
                    _ => 0,
                });
            segments.push(compiled);
        }
        Ok(Self {
            segments,
            group_count,
        })
    }

    /// The number of capture groups, group 0 not counted.
    #[inline]
    pub(crate) fn group_count(&self) -> usize {
        self.group_count
    }

    /// Match the pattern against `line`, starting at byte offset `start`. The match must extend
    /// to the end of the line.
    pub(crate) fn captures<'h>(&self, line: &'h str, start: usize) -> Option<Captures<'h>> {
        let mut groups = Vec::with_capacity(self.group_count + 1);
        groups.push(Some(Span::new(start, line.len())));
        let mut pos = start;
        for segment in &self.segments {
            pos = match segment {
                CompiledSegment::Run { ch, min } => match_run(line, pos, *ch, *min, &mut groups)?,
                CompiledSegment::Fence(ch) => match_fence(line, pos, *ch, &mut groups)?,
                CompiledSegment::Regex(regex) => match_regex(line, pos, regex, &mut groups)?,
            };
        }
        (pos == line.len()).then(|| Captures::new(line, groups))
    }
}

/// The byte length of the run of `ch` at the start of `text`.
#[inline]
fn run_len(text: &str, ch: char) -> usize {
    text.chars().take_while(|c| *c == ch).count() * ch.len_utf8()
}

fn match_run(
    line: &str,
    pos: usize,
    ch: char,
    min: usize,
    groups: &mut Vec<Option<Span>>,
) -> Option<usize> {
    let len = run_len(&line[pos..], ch);
    if len / ch.len_utf8() < min {
        return None;
    }
    groups.push(Some(Span::new(pos, pos + len)));
    Some(pos + len)
}

fn match_fence(
    line: &str,
    pos: usize,
    ch: char,
    groups: &mut Vec<Option<Span>>,
) -> Option<usize> {
    let open_end = pos + run_len(&line[pos..], ch);
    if open_end == pos {
        return None;
    }
    let fence = &line[pos..open_end];
    // The opening run is maximal, so the closing run can't start right after it.
    let close_start = open_end + line[open_end..].find(fence)?;
    let close_end = close_start + fence.len();
    let inner = &line[open_end..close_start];
    if inner.is_empty() {
        return None;
    }

    let name_start = open_end + (inner.len() - inner.trim_start().len());
    let name_end = open_end + inner.trim_end().len();
    groups.push(Some(Span::new(pos, open_end)));
    if name_start < name_end {
        groups.push(Some(Span::new(open_end, name_start)));
        groups.push(Some(Span::new(name_start, name_end)));
        groups.push(Some(Span::new(name_end, close_start)));
    } else {
        // A name of whitespace only
        groups.push(None);
        groups.push(Some(Span::new(open_end, close_start)));
        groups.push(None);
    }
    groups.push(Some(Span::new(close_start, close_end)));
    Some(close_end)
}

fn match_regex(
    line: &str,
    pos: usize,
    regex: &Regex,
    groups: &mut Vec<Option<Span>>,
) -> Option<usize> {
    let captures = regex.captures(&line[pos..])?;
    groups.extend(
        captures
            .iter()
            .skip(1)
            .map(|m| m.map(|m| Span::new(pos + m.start(), pos + m.end()))),
    );
    captures.get(0).map(|m| pos + m.end())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile(pattern: Pattern) -> CompiledPattern {
        CompiledPattern::try_from_pattern(&pattern).unwrap()
    }

    fn texts<'h>(captures: &Captures<'h>) -> Vec<Option<&'h str>> {
        (1..captures.len()).map(|i| captures.get(i)).collect()
    }

    #[test]
    fn test_regex_is_anchored_at_both_ends() {
        let pattern = compile(Pattern::regex(r"(a)(b)?"));
        assert_eq!(pattern.group_count(), 2);
        let captures = pattern.captures("ab", 0).unwrap();
        assert_eq!(texts(&captures), vec![Some("a"), Some("b")]);
        let captures = pattern.captures("a", 0).unwrap();
        assert_eq!(texts(&captures), vec![Some("a"), None]);
        assert!(pattern.captures("xab", 0).is_none());
        assert!(pattern.captures("abx", 0).is_none());
        assert!(pattern.captures("  ab", 2).is_some());
    }

    #[test]
    fn test_run_must_be_maximal() {
        let pattern = compile(Pattern::new().then_run('-', 2).then_regex(r"(\s*)(\S.*?)"));
        assert_eq!(pattern.group_count(), 3);
        let captures = pattern.captures("--- key", 0).unwrap();
        assert_eq!(texts(&captures), vec![Some("---"), Some(" "), Some("key")]);
        assert!(pattern.captures("- key", 0).is_none());
        // No backtracking into a shorter run
        assert!(pattern.captures("----", 0).is_none());
    }

    #[test]
    fn test_fence_closes_on_exact_run() {
        let pattern = compile(Pattern::new().then_fence('`').then_regex(r"(\s*)(:)"));
        assert_eq!(pattern.group_count(), 7);
        let captures = pattern.captures("`` a`b ``:", 0).unwrap();
        assert_eq!(
            texts(&captures),
            vec![
                Some("``"),
                Some(" "),
                Some("a`b"),
                Some(" "),
                Some("``"),
                Some(""),
                Some(":")
            ]
        );
        assert!(pattern.captures("`a:", 0).is_none());
        assert!(pattern.captures("`a``:", 0).is_none());
    }

    #[test]
    fn test_fence_with_whitespace_name() {
        let pattern = compile(Pattern::new().then_fence('`'));
        let captures = pattern.captures("` `", 0).unwrap();
        assert_eq!(
            texts(&captures),
            vec![Some("`"), None, Some(" "), None, Some("`")]
        );
    }

    #[test]
    fn test_invalid_regex() {
        let result = CompiledPattern::try_from_pattern(&Pattern::regex("("));
        assert!(matches!(
            result.unwrap_err().kind(),
            LexerErrorKind::RegexError(_, rx) if rx == "("
        ));
    }
}
