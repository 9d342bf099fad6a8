//! # Lexer - Tokenizing Chat Messages
//!
//! The first parsing stage breaks a message into tokens using the [Logos]
//! lexer generator.
//!
//! [Logos]: https://docs.rs/logos
//!
//! ## The Lossless Guarantee
//!
//! Every byte in the input appears in exactly one token. Nothing is skipped,
//! so token offsets can be used directly as byte offsets into the message:
//!
//! ```
//! use chat_entities_syntax::lexer::lex;
//!
//! let input = "||PEPE:spin|| hi";
//! let tokens = lex(input);
//!
//! let reconstructed: String = tokens.iter().map(|t| t.text).collect();
//! assert_eq!(input, reconstructed);
//! ```
//!
//! ## Token Design
//!
//! Tokens are minimal and context-free. The lexer doesn't know whether a word
//! is an emote, a nick or plain text; that needs the vocabulary and is the
//! parser's job. Characters with syntactic meaning get their own kinds:
//!
//! - `` ` `` → [`TokenKind::Backtick`] (code spans)
//! - `||` → [`TokenKind::SpoilerDelim`] (spoilers)
//! - `>` → [`TokenKind::Gt`] (greentext)
//! - `:` → [`TokenKind::Colon`] (emote modifiers)
//!
//! Runs of ASCII word characters become [`TokenKind::Word`]; everything else
//! is grouped into [`TokenKind::Text`] runs.

use logos::Logos;

/// Token kinds produced by the Logos lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Any run of whitespace
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    /// Single backtick delimiting code
    #[token("`")]
    Backtick,

    /// `||` delimiting spoilers
    #[token("||")]
    SpoilerDelim,

    /// A lone `|`
    #[token("|")]
    Pipe,

    /// `>` for greentext
    #[token(">")]
    Gt,

    /// `:` separating an emote from its modifiers
    #[token(":")]
    Colon,

    /// Candidate emote, nick or tag
    #[regex(r"[A-Za-z0-9_]+")]
    Word,

    /// Anything not matched by other rules
    #[regex(r"[^A-Za-z0-9_ \t\r\n\f`|>:]+")]
    Text,
}

/// A lexed token with its kind, text slice and byte offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

/// Lex the input into a sequence of tokens.
///
/// Guarantees that all bytes from the input appear in the output tokens.
pub fn lex(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(input);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        // Logos error means unrecognized input - treat as TEXT
        let kind = result.unwrap_or(TokenKind::Text);
        tokens.push(Token {
            kind,
            text: lexer.slice(),
            start: span.start,
            end: span.end,
        });
    }

    tokens
}
