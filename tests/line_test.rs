/// This file contains the single line tests of the Eno rule set. Every line is tokenized in state
/// `start` without open multiline fields.
use enolex::{initial_snapshot, tokenize_line, TokenKind, TokenKind::*};

/// Test data for the line tests.
/// The test data consists of a line and the expected tokens as kind and text.
#[derive(Debug)]
struct TestData {
    line: &'static str,
    expected: &'static [(TokenKind, &'static str)],
}

// A macro to easily create a TestData struct.
macro_rules! td {
    ($line:expr, $expected:expr) => {
        TestData {
            line: $line,
            expected: $expected,
        }
    };
}

const TEST_DATA: &[TestData] = &[
    // ---------------------------------------------------------------------------------------------
    // Comments
    // ---------------------------------------------------------------------------------------------
    td!("> a comment", &[(Comment, "> a comment")]),
    td!(
        "> - not a list item",
        &[(Comment, "> - not a list item")]
    ),
    td!(">", &[(Comment, ">")]),
    // ---------------------------------------------------------------------------------------------
    // Sections
    // ---------------------------------------------------------------------------------------------
    td!("# title", &[(SectionMarker, "#"), (Text, " "), (SectionName, "title")]),
    td!(
        "# title < base",
        &[
            (SectionMarker, "#"),
            (Text, " "),
            (SectionName, "title"),
            (Text, " "),
            (SectionTemplateMarker, "<"),
            (Text, " "),
            (SectionTemplateName, "base"),
        ]
    ),
    td!(
        "## nested << base",
        &[
            (SectionMarker, "##"),
            (Text, " "),
            (SectionName, "nested"),
            (Text, " "),
            (SectionTemplateMarker, "<<"),
            (Text, " "),
            (SectionTemplateName, "base"),
        ]
    ),
    td!(
        "# two words  ",
        &[
            (SectionMarker, "#"),
            (Text, " "),
            (SectionName, "two words"),
            (Text, "  "),
        ]
    ),
    td!(
        "# `a # <b>` < base",
        &[
            (SectionMarker, "#"),
            (Text, " "),
            (EscapeBegin, "`"),
            (SectionName, "a # <b>"),
            (EscapeEnd, "`"),
            (Text, " "),
            (SectionTemplateMarker, "<"),
            (Text, " "),
            (SectionTemplateName, "base"),
        ]
    ),
    td!("#", &[(Invalid, "#")]),
    td!(
        "# `unclosed",
        &[(Invalid, "#"), (Text, " "), (Invalid, "`unclosed")]
    ),
    // ---------------------------------------------------------------------------------------------
    // List items and continuations
    // ---------------------------------------------------------------------------------------------
    td!(
        "- item value",
        &[(ItemMarker, "-"), (Text, " "), (ItemValue, "item value")]
    ),
    td!("-", &[(ItemMarker, "-")]),
    td!("--", &[(ItemMarker, "-"), (ItemValue, "-")]),
    td!(
        "| continued",
        &[
            (ContinuationMarker, "|"),
            (Text, " "),
            (ContinuationValue, "continued")
        ]
    ),
    td!(
        "\\ spaced",
        &[
            (ContinuationMarker, "\\"),
            (Text, " "),
            (ContinuationValue, "spaced")
        ]
    ),
    // ---------------------------------------------------------------------------------------------
    // Keys
    // ---------------------------------------------------------------------------------------------
    td!("name", &[(EmptyKey, "name")]),
    td!("~", &[(EmptyKey, "~")]),
    td!("name  ", &[(EmptyKey, "name"), (Text, "  ")]),
    td!(
        "key: value",
        &[(Key, "key"), (KeySeparator, ":"), (Text, " "), (Value, "value")]
    ),
    td!("key:", &[(Key, "key"), (KeySeparator, ":")]),
    td!(
        "key: a: b",
        &[(Key, "key"), (KeySeparator, ":"), (Text, " "), (Value, "a: b")]
    ),
    td!(
        "entry = value  ",
        &[
            (Key, "entry"),
            (Text, " "),
            (EntrySeparator, "="),
            (Text, " "),
            (Value, "value"),
            (Text, "  "),
        ]
    ),
    td!(
        "copy < original",
        &[
            (Key, "copy"),
            (Text, " "),
            (TemplateSeparator, "<"),
            (Text, " "),
            (TemplateValue, "original"),
        ]
    ),
    td!(
        "copy << original",
        &[
            (Key, "copy"),
            (Text, " "),
            (TemplateSeparator, "<<"),
            (Text, " "),
            (TemplateValue, "original"),
        ]
    ),
    td!(
        "copy <",
        &[(Invalid, "copy"), (Text, " "), (Invalid, "<")]
    ),
    td!(
        "  indented: yes",
        &[
            (Text, "  "),
            (Key, "indented"),
            (KeySeparator, ":"),
            (Text, " "),
            (Value, "yes"),
        ]
    ),
    // ---------------------------------------------------------------------------------------------
    // Escaped keys
    // ---------------------------------------------------------------------------------------------
    td!(
        "`a:b`: value",
        &[
            (EscapeBegin, "`"),
            (Key, "a:b"),
            (EscapeEnd, "`"),
            (KeySeparator, ":"),
            (Text, " "),
            (Value, "value"),
        ]
    ),
    td!(
        "`` a`b `` = x",
        &[
            (EscapeBegin, "``"),
            (Text, " "),
            (Key, "a`b"),
            (Text, " "),
            (EscapeEnd, "``"),
            (Text, " "),
            (EntrySeparator, "="),
            (Text, " "),
            (Value, "x"),
        ]
    ),
    td!(
        "`key` << tpl",
        &[
            (EscapeBegin, "`"),
            (Key, "key"),
            (EscapeEnd, "`"),
            (Text, " "),
            (TemplateSeparator, "<<"),
            (Text, " "),
            (TemplateValue, "tpl"),
        ]
    ),
    td!("`a``: b", &[(Invalid, "`a``:"), (Text, " "), (Invalid, "b")]),
    // ---------------------------------------------------------------------------------------------
    // Fallback
    // ---------------------------------------------------------------------------------------------
    td!("=", &[(Invalid, "=")]),
    td!(": value", &[(Invalid, ":"), (Text, " "), (Invalid, "value")]),
    td!("<oops", &[(Invalid, "<oops")]),
    td!("", &[]),
    td!("   ", &[(Text, "   ")]),
];

#[test]
fn line_test() {
    let _ = env_logger::builder().is_test(true).try_init();
    for (i, test) in TEST_DATA.iter().enumerate() {
        let (tokens, next) = tokenize_line(test.line, &initial_snapshot());
        let actual: Vec<(TokenKind, &str)> = tokens.iter().map(|t| (t.kind(), t.text())).collect();
        assert_eq!(
            actual, test.expected,
            "#{} line {:?}: unexpected tokens",
            i, test.line
        );
        assert_eq!(
            next,
            initial_snapshot(),
            "#{} line {:?}: unexpected state change",
            i,
            test.line
        );
    }
}

#[test]
fn spans_match_texts() {
    let line = "  `a:b`: value ";
    let (tokens, _) = tokenize_line(line, &initial_snapshot());
    for token in &tokens {
        assert_eq!(&line[token.range()], token.text());
    }
    assert_eq!(tokens[0].start(), 0);
    assert_eq!(tokens.last().unwrap().end(), line.len());
}
