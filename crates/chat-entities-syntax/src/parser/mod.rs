//! # Parser - Building the Node Tree
//!
//! Transforms the token stream into an owned [`Span`] tree, classifying words
//! against a [`Vocabulary`].
//!
//! The parser is a small recursive-descent machine over a token slice. Grammar
//! rules live in [`grammar`] and receive `&mut Parser`, using its methods to:
//!
//! - Inspect tokens: `current()`, `nth()`, `at()`, `at_end()`
//! - Consume tokens: `bump()`
//! - Backtrack: `checkpoint()` / `rewind()`
//!
//! Nesting is shallow by construction (greentext → spoiler → code), so
//! recursion depth never exceeds the grammar's own nesting.
//!
//! ## Public API
//!
//! The main entry point is [`parse_message`]:
//!
//! ```
//! use chat_entities_syntax::{Vocabulary, VocabularyValues, parse_message};
//!
//! let vocab = Vocabulary::new(VocabularyValues {
//!     emotes: vec!["Kappa".into()],
//!     ..Default::default()
//! });
//! let root = parse_message(&vocab, "hi Kappa");
//! assert_eq!(root.nodes.len(), 1);
//! assert_eq!(root.nodes[0].range(), 3..8);
//! ```

mod grammar;

use crate::lexer::{Token, TokenKind, lex};
use crate::tree::Span;
use crate::vocabulary::Vocabulary;

/// Parse a message into its root `Message` span.
pub fn parse_message(vocabulary: &Vocabulary, message: &str) -> Span {
    let tokens = lex(message);
    Parser::new(&tokens, vocabulary, message.len()).parse()
}

/// The parser state machine.
///
/// Holds the token stream, current position and the vocabulary used to
/// classify words.
pub struct Parser<'t, 'input, 'v> {
    tokens: &'t [Token<'input>],
    pos: usize,
    len: usize,
    vocabulary: &'v Vocabulary,
}

/// A saved parser position for backtracking.
#[derive(Debug, Clone, Copy)]
pub struct Checkpoint(usize);

impl<'t, 'input, 'v> Parser<'t, 'input, 'v> {
    /// Create a parser over `tokens` lexed from a message of `len` bytes.
    pub fn new(tokens: &'t [Token<'input>], vocabulary: &'v Vocabulary, len: usize) -> Self {
        Self {
            tokens,
            pos: 0,
            len,
            vocabulary,
        }
    }

    /// Parse the tokens and return the root span.
    pub fn parse(mut self) -> Span {
        grammar::message(&mut self)
    }

    pub fn vocabulary(&self) -> &'v Vocabulary {
        self.vocabulary
    }

    /// Length of the message in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current token kind, or `None` past the end.
    pub fn current(&self) -> Option<TokenKind> {
        self.nth(0)
    }

    /// Look ahead n tokens.
    pub fn nth(&self, n: usize) -> Option<TokenKind> {
        self.tokens.get(self.pos + n).map(|t| t.kind)
    }

    /// Text of the token n ahead, or `""` past the end.
    pub fn nth_text(&self, n: usize) -> &'input str {
        self.tokens.get(self.pos + n).map(|t| t.text).unwrap_or("")
    }

    /// Check if at end of input.
    pub fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Check if current token is of given kind.
    pub fn at(&self, kind: TokenKind) -> bool {
        self.current() == Some(kind)
    }

    /// Byte offset where the current token starts, or the message length
    /// past the end.
    pub fn offset(&self) -> usize {
        self.tokens.get(self.pos).map(|t| t.start).unwrap_or(self.len)
    }

    /// Consume the current token unconditionally, returning it.
    pub fn bump(&mut self) -> Option<&'t Token<'input>> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.pos)
    }

    pub fn rewind(&mut self, checkpoint: Checkpoint) {
        self.pos = checkpoint.0;
    }
}
