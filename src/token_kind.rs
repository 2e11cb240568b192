//! Module with the token kinds the lexer classifies line fragments into.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The syntactic role of a token.
///
/// Every fragment of a line is classified into exactly one of these kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum TokenKind {
    /// A line comment, `> ...`.
    Comment,
    /// The dash run that opens a multiline field, `--`.
    BlockBegin,
    /// The dash run that closes a multiline field.
    BlockEnd,
    /// The key of a multiline field on its begin or end line.
    BlockKey,
    /// A verbatim line inside a multiline field.
    BlockContent,
    /// The hash run of a section header, `#`.
    SectionMarker,
    /// The name of a section.
    SectionName,
    /// The `<` or `<<` introducing a section template.
    SectionTemplateMarker,
    /// The template name of a section.
    SectionTemplateName,
    /// The `-` of a list item.
    ItemMarker,
    /// The value of a list item.
    ItemValue,
    /// The `|` or `\` of a continuation.
    ContinuationMarker,
    /// The value of a continuation.
    ContinuationValue,
    /// The key of a field, fieldset entry or template reference.
    Key,
    /// A key standing alone on its line, i.e. an empty element.
    EmptyKey,
    /// The `:` after a field key.
    KeySeparator,
    /// The `=` after a fieldset entry key.
    EntrySeparator,
    /// The value of a field or fieldset entry.
    Value,
    /// The `<` or `<<` after a key.
    TemplateSeparator,
    /// The template a key refers to.
    TemplateValue,
    /// The opening fence of an escaped key or section name.
    EscapeBegin,
    /// The closing fence of an escaped key or section name.
    EscapeEnd,
    /// A fragment that matches no rule.
    Invalid,
    /// Plain content between the syntactic parts, i.e. whitespace.
    Text,
}

impl TokenKind {
    /// The TextMate style scope name hosts use to style the token.
    pub fn scope(&self) -> &'static str {
        match self {
            TokenKind::Comment => "comment.line.eno",
            TokenKind::BlockBegin => "punctuation.definition.multiline-field.begin.eno",
            TokenKind::BlockEnd => "punctuation.definition.multiline-field.end.eno",
            TokenKind::BlockKey => "variable.other.name.multiline-field.eno",
            TokenKind::BlockContent => "string.unquoted.eno",
            TokenKind::SectionMarker => "punctuation.definition.section.eno",
            TokenKind::SectionName => "entity.name.section.eno",
            TokenKind::SectionTemplateMarker => "punctuation.separator.template.eno",
            TokenKind::SectionTemplateName => "entity.name.section.template.eno",
            TokenKind::ItemMarker => "punctuation.definition.item.eno",
            TokenKind::ItemValue => "string.unquoted.eno",
            TokenKind::ContinuationMarker => "punctuation.definition.continuation.eno",
            TokenKind::ContinuationValue => "string.unquoted.eno",
            TokenKind::Key => "variable.other.name.element.eno",
            TokenKind::EmptyKey => "variable.other.name.empty.eno",
            TokenKind::KeySeparator => "punctuation.separator.element.eno",
            TokenKind::EntrySeparator => "punctuation.separator.fieldset-entry.eno",
            TokenKind::Value => "string.unquoted.value.eno",
            TokenKind::TemplateSeparator => "punctuation.separator.template.eno",
            TokenKind::TemplateValue => "variable.other.name.element.template.eno",
            TokenKind::EscapeBegin => "punctuation.definition.key.escape.begin.eno",
            TokenKind::EscapeEnd => "punctuation.definition.key.escape.end.eno",
            TokenKind::Invalid => "invalid.illegal.eno",
            TokenKind::Text => "text",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.scope())
    }
}
