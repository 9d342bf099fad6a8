//! # Chat Grammar
//!
//! | Construct | Syntax | Children |
//! |-----------|--------|----------|
//! | Greentext | message starting with `>` | inline content |
//! | Code | `` `...` `` | none (raw zone) |
//! | Spoiler | `\|\|...\|\|` | inline content |
//! | Emote | known emote word, optional `:modifier`s | leaf |
//! | Mention | known nick | leaf |
//! | Tag | known tag | leaf |
//!
//! Unclosed code and spoiler delimiters are plain text. A word is tried as an
//! emote first, then a mention, then a tag.

use super::Parser;
use crate::lexer::TokenKind;
use crate::tree::{Emote, Mention, Node, Span, SpanKind, Tag};

/// Parse the whole message into the root span.
pub(super) fn message(p: &mut Parser<'_, '_, '_>) -> Span {
    let mut root = Span::message(p.len());
    match greentext(p) {
        Some(greentext) => root.nodes.push(greentext.into()),
        None => root.nodes = inline(p, None),
    }
    root
}

/// A `>` as the first non-whitespace token makes the rest of the message
/// greentext.
fn greentext(p: &mut Parser<'_, '_, '_>) -> Option<Span> {
    let checkpoint = p.checkpoint();
    if p.at(TokenKind::Whitespace) {
        p.bump();
    }
    if !p.at(TokenKind::Gt) {
        p.rewind(checkpoint);
        return None;
    }

    let start = p.offset();
    p.bump(); // >
    let nodes = inline(p, None);
    Some(Span::new(SpanKind::Greentext, start, p.len()).with_nodes(nodes))
}

/// Parse inline content until EOF or the `closer` token (left unconsumed).
fn inline(p: &mut Parser<'_, '_, '_>, closer: Option<TokenKind>) -> Vec<Node> {
    let mut nodes = Vec::new();

    while let Some(kind) = p.current() {
        if Some(kind) == closer {
            break;
        }
        match kind {
            TokenKind::Backtick => match code(p) {
                Some(span) => nodes.push(span.into()),
                None => {
                    p.bump();
                }
            },
            TokenKind::SpoilerDelim => match spoiler(p) {
                Some(span) => nodes.push(span.into()),
                None => {
                    p.bump();
                }
            },
            TokenKind::Word => nodes.extend(word(p)),
            _ => {
                p.bump();
            }
        }
    }

    nodes
}

/// Code spans are raw zones: everything up to the next backtick is skipped.
///
/// Returns `None` with the position restored if the span isn't closed.
fn code(p: &mut Parser<'_, '_, '_>) -> Option<Span> {
    let checkpoint = p.checkpoint();
    let start = p.offset();
    p.bump(); // `

    while let Some(kind) = p.current() {
        if kind == TokenKind::Backtick {
            let close = p.bump()?;
            return Some(Span::new(SpanKind::Code, start, close.end));
        }
        p.bump();
    }

    p.rewind(checkpoint);
    None
}

/// Returns `None` with the position restored if the spoiler isn't closed.
fn spoiler(p: &mut Parser<'_, '_, '_>) -> Option<Span> {
    let checkpoint = p.checkpoint();
    let start = p.offset();
    p.bump(); // ||

    let nodes = inline(p, Some(TokenKind::SpoilerDelim));
    match p.bump() {
        Some(close) => Some(Span::new(SpanKind::Spoiler, start, close.end).with_nodes(nodes)),
        None => {
            p.rewind(checkpoint);
            None
        }
    }
}

/// Consumes a word and classifies it against the vocabulary.
fn word(p: &mut Parser<'_, '_, '_>) -> Option<Node> {
    let token = p.bump()?;
    let vocabulary = p.vocabulary();

    if vocabulary.is_emote(token.text) {
        let mut end = token.end;
        let mut modifiers = Vec::new();
        while p.at(TokenKind::Colon)
            && p.nth(1) == Some(TokenKind::Word)
            && vocabulary.is_modifier(p.nth_text(1))
        {
            p.bump(); // :
            if let Some(modifier) = p.bump() {
                end = modifier.end;
                modifiers.push(modifier.text.to_string());
            }
        }
        return Some(
            Emote {
                name: token.text.to_string(),
                modifiers,
                start: token.start,
                end,
            }
            .into(),
        );
    }

    if let Some(nick) = vocabulary.nick(token.text) {
        return Some(
            Mention {
                nick: nick.to_string(),
                start: token.start,
                end: token.end,
            }
            .into(),
        );
    }

    vocabulary.tag(token.text).map(|name| {
        Tag {
            name: name.to_string(),
            start: token.start,
            end: token.end,
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use crate::parser::parse_message;
    use crate::vocabulary::{Vocabulary, VocabularyValues};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn vocab() -> Vocabulary {
        Vocabulary::new(VocabularyValues {
            emotes: vec!["Kappa".into(), "PEPE".into()],
            nicks: vec!["alice".into(), "Bob".into()],
            tags: vec!["nsfw".into(), "loud".into()],
            modifiers: vec!["spin".into(), "wide".into(), "mirror".into()],
        })
    }

    fn dump(message: &str) -> String {
        parse_message(&vocab(), message).to_string()
    }

    #[rstest]
    #[case("hello world", "Message@0..11\n")]
    #[case("", "Message@0..0\n")]
    #[case("hi Kappa", "Message@0..8\n  Emote@3..8 \"Kappa\"\n")]
    #[case("kappa", "Message@0..5\n")]
    #[case("hey BOB", "Message@0..7\n  Mention@4..7 \"Bob\"\n")]
    #[case("@alice hi", "Message@0..9\n  Mention@1..6 \"alice\"\n")]
    #[case("NSFW link", "Message@0..9\n  Tag@0..4 \"nsfw\"\n")]
    #[case("Kappa123", "Message@0..8\n")]
    #[case("Kappa!", "Message@0..6\n  Emote@0..5 \"Kappa\"\n")]
    fn words(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(dump(input), expected);
    }

    #[test]
    fn emote_modifiers_extend_bounds() {
        assert_eq!(
            dump("PEPE:spin:wide yo"),
            "Message@0..17\n  Emote@0..14 \"PEPE\" [\"spin\", \"wide\"]\n"
        );
    }

    #[test]
    fn unknown_modifier_ends_emote_before_colon() {
        assert_eq!(
            dump("PEPE:spin:nope"),
            "Message@0..14\n  Emote@0..9 \"PEPE\" [\"spin\"]\n"
        );
    }

    #[test]
    fn code_is_a_raw_zone() {
        assert_eq!(dump("`Kappa alice`"), "Message@0..13\n  Code@0..13\n");
    }

    #[test]
    fn unclosed_code_is_text() {
        assert_eq!(
            dump("`Kappa alice"),
            "Message@0..12\n  Emote@1..6 \"Kappa\"\n  Mention@7..12 \"alice\"\n"
        );
    }

    #[test]
    fn spoiler_parses_inline_content() {
        assert_eq!(
            dump("||Kappa `x`|| nsfw"),
            "Message@0..18\n  Spoiler@0..13\n    Emote@2..7 \"Kappa\"\n    Code@8..11\n  Tag@14..18 \"nsfw\"\n"
        );
    }

    #[test]
    fn empty_spoiler() {
        assert_eq!(dump("||||"), "Message@0..4\n  Spoiler@0..4\n");
    }

    #[test]
    fn unclosed_spoiler_is_text() {
        assert_eq!(
            dump("|| Kappa"),
            "Message@0..8\n  Emote@3..8 \"Kappa\"\n"
        );
    }

    #[test]
    fn code_may_swallow_spoiler_delimiter() {
        assert_eq!(
            dump("||a `b|| c`"),
            "Message@0..11\n  Code@4..11\n"
        );
    }

    #[test]
    fn greentext_wraps_rest_of_message() {
        assert_eq!(
            dump(">be me Kappa"),
            "Message@0..12\n  Greentext@0..12\n    Emote@7..12 \"Kappa\"\n"
        );
    }

    #[test]
    fn greentext_after_leading_whitespace() {
        assert_eq!(
            dump("  > ||alice||"),
            "Message@0..13\n  Greentext@2..13\n    Spoiler@4..13\n      Mention@6..11 \"alice\"\n"
        );
    }

    #[test]
    fn gt_later_in_message_is_text() {
        assert_eq!(dump("a > b"), "Message@0..5\n");
    }

    #[test]
    fn children_are_ordered_and_disjoint() {
        let root = parse_message(&vocab(), "Kappa ||PEPE:spin `code` alice|| loud `x` Bob");
        let mut last_end = 0;
        for node in &root.nodes {
            assert!(node.start() >= last_end, "overlap at {node:?}");
            assert!(node.start() <= node.end());
            last_end = node.end();
        }
        assert!(last_end <= root.end);
    }
}
