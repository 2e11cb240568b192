//! The rule set for Eno documents.
//!
//! Rules of the `start` state, in priority order:
//!
//! | Rule                    | Example                  |
//! |-------------------------|--------------------------|
//! | comment                 | `> note`                 |
//! | multiline field begin   | `-- description`         |
//! | list item               | `- value`                |
//! | section                 | `## name < template`     |
//! | escaped section         | ``# `a # b` << template``|
//! | continuation            | `\| more` or `\ more`    |
//! | empty element           | `name`                   |
//! | field                   | `name: value`            |
//! | fieldset entry          | `name = value`           |
//! | template reference      | `name < template`        |
//! | escaped field           | `` `a:b`: value ``       |
//! | escaped fieldset entry  | `` `a=b` = value ``      |
//! | escaped template ref.   | `` `a<b` < template ``   |
//!
//! Anything else is invalid. The structural rules come first, the negated character classes of
//! the key rules would shadow them otherwise.
//!
//! In the `multilineField` state every line is verbatim content, except the line that repeats
//! the dash run and the key of the innermost open field exactly.
use std::sync::LazyLock;

use log::trace;

use crate::TokenKind::*;
use crate::{
    Captures, Fallback, Frame, Lexer, LexerBuilder, LexerState, Pattern, Rule, Snapshot,
    StateTable, Token, TokenKind,
};

/// The name of the format.
pub const NAME: &str = "Eno";

/// The file extensions of the format.
pub const FILE_TYPES: &[&str] = &["eno"];

/// The scope name of the format, the root of all token scopes.
pub const SCOPE_NAME: &str = "text.eno";

/// The identifier editor hosts register the format under.
pub const MODE_ID: &str = "ace/mode/eno";

/// The character that starts a line comment.
pub const LINE_COMMENT_START: &str = ">";

const DASH: char = '-';
const HASH: char = '#';
const FENCE: char = '`';

/// The start of a bare key, which must not be confused with any other construct.
const KEY: &str = r"([^\s<>\-#=:\\|`][^<=:]*?)";

/// The remainder of a multiline field's begin or end line after the dash run.
const BLOCK_KEY: &str = r"(\s*)(\S.*?)(\s*)";

/// An optional template reference after a section name.
const SECTION_TEMPLATE: &str = r"(\s*)(?:(<<|<)(\s*)(\S.*?))?(\s*)";

const FIELD_TAIL: &str = r"(\s*)(:)(\s*)(\S.*?)?(\s*)";
const ENTRY_TAIL: &str = r"(\s*)(=)(\s*)(\S.*?)?(\s*)";
const TEMPLATE_TAIL: &str = r"(\s*)(<<|<)(\s*)(\S.*?)(\s*)";

const ESCAPED_KEY: [TokenKind; 5] = [EscapeBegin, Text, Key, Text, EscapeEnd];

/// Returns the state tables of the Eno rule set.
pub fn state_tables() -> Vec<StateTable> {
    vec![start_table(), multiline_field_table()]
}

fn start_table() -> StateTable {
    let rules = vec![
        Rule::new("comment", Pattern::regex(r"(>.*)"), &[Comment]),
        Rule::with_handler(
            "multiline field begin",
            Pattern::new().then_run(DASH, 2).then_regex(BLOCK_KEY),
            open_multiline_field,
        ),
        Rule::new(
            "list item",
            Pattern::regex(r"(-)(\s*)(.+?)?(\s*)"),
            &[ItemMarker, Text, ItemValue, Text],
        ),
        Rule::new(
            "section",
            Pattern::new()
                .then_run(HASH, 1)
                .then_regex(&format!(r"(\s*)([^\s<`][^<]*?){SECTION_TEMPLATE}")),
            &[
                SectionMarker,
                Text,
                SectionName,
                Text,
                SectionTemplateMarker,
                Text,
                SectionTemplateName,
                Text,
            ],
        ),
        Rule::new(
            "escaped section",
            Pattern::new()
                .then_run(HASH, 1)
                .then_regex(r"(\s*)")
                .then_fence(FENCE)
                .then_regex(SECTION_TEMPLATE),
            &[
                SectionMarker,
                Text,
                EscapeBegin,
                Text,
                SectionName,
                Text,
                EscapeEnd,
                Text,
                SectionTemplateMarker,
                Text,
                SectionTemplateName,
                Text,
            ],
        ),
        Rule::new(
            "continuation",
            Pattern::regex(r"([|\\])(\s*)(.+?)?(\s*)"),
            &[ContinuationMarker, Text, ContinuationValue, Text],
        ),
        Rule::new(
            "empty element",
            Pattern::regex(&format!(r"{KEY}(\s*)")),
            &[EmptyKey, Text],
        ),
        Rule::new(
            "field",
            Pattern::regex(&format!("{KEY}{FIELD_TAIL}")),
            &[Key, Text, KeySeparator, Text, Value, Text],
        ),
        Rule::new(
            "fieldset entry",
            Pattern::regex(&format!("{KEY}{ENTRY_TAIL}")),
            &[Key, Text, EntrySeparator, Text, Value, Text],
        ),
        Rule::new(
            "template reference",
            Pattern::regex(&format!("{KEY}{TEMPLATE_TAIL}")),
            &[Key, Text, TemplateSeparator, Text, TemplateValue, Text],
        ),
        Rule::new(
            "escaped field",
            Pattern::new().then_fence(FENCE).then_regex(FIELD_TAIL),
            &escaped_key_kinds([Text, KeySeparator, Text, Value, Text]),
        ),
        Rule::new(
            "escaped fieldset entry",
            Pattern::new().then_fence(FENCE).then_regex(ENTRY_TAIL),
            &escaped_key_kinds([Text, EntrySeparator, Text, Value, Text]),
        ),
        Rule::new(
            "escaped template reference",
            Pattern::new().then_fence(FENCE).then_regex(TEMPLATE_TAIL),
            &escaped_key_kinds([Text, TemplateSeparator, Text, TemplateValue, Text]),
        ),
    ];
    StateTable::new(LexerState::Start, rules, Fallback::Fragments(Invalid))
}

fn multiline_field_table() -> StateTable {
    let rules = vec![Rule::with_handler(
        "multiline field end",
        Pattern::new().then_run(DASH, 2).then_regex(BLOCK_KEY),
        close_multiline_field,
    )];
    StateTable::new(
        LexerState::MultilineField,
        rules,
        Fallback::Line(BlockContent),
    )
}

fn escaped_key_kinds(tail: [TokenKind; 5]) -> Vec<TokenKind> {
    ESCAPED_KEY.iter().chain(tail.iter()).copied().collect()
}

/// Opens a multiline field: the dash run and the key become the frame that closes it.
fn open_multiline_field<'h>(
    captures: &Captures<'h>,
    snapshot: &Snapshot,
) -> Option<(Vec<Token<'h>>, Snapshot)> {
    let frame = Frame::new(captures.get(1)?, captures.get(3)?);
    trace!("Opening multiline field {:?}", frame);
    let tokens = captures.tokens(&[BlockBegin, Text, BlockKey, Text]);
    Some((tokens, snapshot.clone().push(frame)))
}

/// Closes the innermost multiline field if the line repeats its dash run and key literally.
/// Declines otherwise, which turns the line into content.
fn close_multiline_field<'h>(
    captures: &Captures<'h>,
    snapshot: &Snapshot,
) -> Option<(Vec<Token<'h>>, Snapshot)> {
    let frame = snapshot.top()?;
    if !frame.is_closed_by(captures.get(1)?, captures.get(3)?) {
        return None;
    }
    trace!("Closing multiline field {:?}", frame);
    let tokens = captures.tokens(&[BlockEnd, Text, BlockKey, Text]);
    Some((tokens, snapshot.clone().pop()))
}

/// The lexer for the Eno rule set, compiled on first use.
pub(crate) static ENO_LEXER: LazyLock<Lexer> = LazyLock::new(|| {
    LexerBuilder::new()
        .add_state_tables(&state_tables())
        .build()
        .expect("the Eno rule set is well-formed")
});
