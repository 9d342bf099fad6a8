//! # chat-entities-syntax
//!
//! Lexer and parser for chat messages. Turns a message string into an owned
//! node tree of spans (code, spoiler, greentext) and leaves (emotes,
//! mentions, tags), each carrying byte offsets into the message.
//!
//! ## Architecture Overview
//!
//! ```text
//! Message Text → Lexer → Tokens → Parser → Span tree
//!                (Logos)          (Grammar + Vocabulary)
//! ```
//!
//! ### 1. Lexer ([`lexer`] module)
//!
//! [Logos] tokenizes the input losslessly: every byte lands in exactly one
//! token, so token offsets are message offsets.
//!
//! ### 2. Parser ([`parser`] module)
//!
//! A recursive-descent parser walks the tokens and classifies words against
//! the [`Vocabulary`]. Words are only emotes, mentions or tags if the
//! vocabulary says so; an unknown nick is plain text.
//!
//! ### 3. Tree ([`tree`] module)
//!
//! A closed [`Node`] enum over the five node kinds. Children are owned, in
//! ascending `start` order and never overlap. [`Link`] nodes are never
//! produced here; they are merged in later by the engine.
//!
//! [Logos]: https://docs.rs/logos
//!
//! ## Quick Start
//!
//! ```
//! use chat_entities_syntax::{Node, Vocabulary, VocabularyValues, parse_message};
//!
//! let vocab = Vocabulary::new(VocabularyValues {
//!     emotes: vec!["Kappa".into()],
//!     nicks: vec!["alice".into()],
//!     ..Default::default()
//! });
//!
//! let root = parse_message(&vocab, "||alice Kappa||");
//! assert_eq!(
//!     Node::from(root).to_string(),
//!     "Message@0..15\n  Spoiler@0..15\n    Mention@2..7 \"alice\"\n    Emote@8..13 \"Kappa\"\n"
//! );
//! ```

pub mod lexer;
pub mod parser;
pub mod tree;
pub mod vocabulary;

pub use parser::parse_message;
pub use tree::{Emote, Link, Mention, Node, Span, SpanKind, Tag};
pub use vocabulary::{Vocabulary, VocabularyValues};
