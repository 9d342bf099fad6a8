//! # chat-entities-engine
//!
//! Turns a parsed chat message into a flat, category-indexed set of entities
//! (links, emotes, mentions, tags, code, spoiler and greentext spans), each
//! with a byte-offset [`Bounds`] into the message.
//!
//! ## Pipeline
//!
//! ```text
//! message ─→ [parser] ───→ tree ──────┐
//!    │                                ├─→ [merge] → merged tree → [walk] → Entities
//!    └────→ [link detector] → links ──┘
//! ```
//!
//! - **`validate`**: checks the parser's tree before it is touched
//! - **`links`**: [`LinkDetector`] trait, interval validation, [`RelaxedUrlDetector`]
//! - **`merge`**: inserts link intervals as leaves at the right depth and position
//! - **`walk`**: pre-order classification into the [`Entities`] model
//! - **`model`**: the output structure and its serialized shape
//!
//! Everything here is pure and synchronous: no I/O, no logging, no shared
//! mutable state. Independent messages can be processed on any number of
//! threads against the same [`Vocabulary`].
//!
//! ## Example
//!
//! ```
//! use chat_entities_engine::{Extractor, RelaxedUrlDetector, Vocabulary, VocabularyValues};
//!
//! let vocab = Vocabulary::new(VocabularyValues {
//!     emotes: vec!["Kappa".into()],
//!     ..Default::default()
//! });
//! let extractor = Extractor::new(&vocab, RelaxedUrlDetector::new());
//!
//! let entities = extractor.extract("Kappa https://example.com").unwrap();
//! assert_eq!(entities.emotes[0].name, "Kappa");
//! assert_eq!(entities.links[0].url, "https://example.com");
//! ```

pub mod error;
pub mod links;
pub mod merge;
pub mod model;
pub mod validate;
pub mod walk;

pub use chat_entities_syntax::{
    Emote, Link, Mention, Node, Span, SpanKind, Tag, Vocabulary, VocabularyValues, parse_message,
};
pub use error::{BoundsDefect, EntityError, TreeDefect};
pub use links::{LinkDetector, NoLinks, RelaxedUrlDetector, validate_intervals};
pub use merge::merge_links;
pub use model::{
    Bounds, Category, EmoteEntity, Entities, LinkEntity, MentionEntity, SpanEntity, TagEntity,
};
pub use validate::validate_tree;
pub use walk::walk;

/// Span nesting allowed below the root before giving up.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Validate `tree`, merge `links` into it and walk the result.
///
/// This is the core of the engine for callers that bring their own parser
/// and link detector. Either a complete model is returned or an error; there
/// is no partial result.
pub fn extract_entities(
    message: &str,
    tree: Span,
    links: &[Bounds],
    max_depth: usize,
) -> Result<Entities, EntityError> {
    let merged = merge_tree(message, tree, links, max_depth)?;
    walk(&merged, message.len(), max_depth)
}

/// Validate `tree` and merge `links` into it.
pub fn merge_tree(
    message: &str,
    mut tree: Span,
    links: &[Bounds],
    max_depth: usize,
) -> Result<Span, EntityError> {
    validate_tree(&tree, message.len(), max_depth)?;
    merge_links(&mut tree, message, links, max_depth)?;
    Ok(tree)
}

/// Parser, link detector and entity walker wired together for one
/// vocabulary.
///
/// Holds no per-message state; share it freely across threads when the
/// detector allows.
#[derive(Debug, Clone)]
pub struct Extractor<'v, D> {
    vocabulary: &'v Vocabulary,
    detector: D,
    max_depth: usize,
}

impl<'v, D: LinkDetector> Extractor<'v, D> {
    pub fn new(vocabulary: &'v Vocabulary, detector: D) -> Self {
        Self {
            vocabulary,
            detector,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Parse `message`, merge its links and return the merged tree.
    pub fn merged_tree(&self, message: &str) -> Result<Span, EntityError> {
        let tree = parse_message(self.vocabulary, message);
        let links = self.detector.detect(message);
        merge_tree(message, tree, &links, self.max_depth)
    }

    /// Extract all entities from `message`.
    pub fn extract(&self, message: &str) -> Result<Entities, EntityError> {
        let merged = self.merged_tree(message)?;
        walk(&merged, message.len(), self.max_depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn vocab() -> Vocabulary {
        Vocabulary::new(VocabularyValues {
            emotes: vec!["Kappa".into()],
            nicks: vec!["alice".into()],
            tags: vec!["nsfw".into()],
            modifiers: vec!["spin".into()],
        })
    }

    #[test]
    fn extract_entities_rejects_malformed_parser_tree() {
        let tree = Span::message(5).with_nodes(vec![Span::new(SpanKind::Code, 3, 9).into()]);
        let result = extract_entities("a.com", tree, &[], DEFAULT_MAX_DEPTH);
        assert!(matches!(result, Err(EntityError::MalformedTree { .. })));
    }

    #[test]
    fn extract_entities_rejects_bad_links() {
        let result = extract_entities(
            "a.com",
            Span::message(5),
            &[Bounds::new(2, 8)],
            DEFAULT_MAX_DEPTH,
        );
        assert!(matches!(result, Err(EntityError::InvalidBounds { .. })));
    }

    #[test]
    fn extractor_runs_whole_pipeline() {
        let vocab = vocab();
        let extractor = Extractor::new(&vocab, RelaxedUrlDetector::new());
        let entities = extractor.extract("alice: ||Kappa:spin a.com|| nsfw").unwrap();

        let json = serde_json::to_string(&entities).unwrap();
        assert_eq!(
            json,
            r#"{"links":[{"bounds":[20,25],"url":"a.com"}],"emotes":[{"bounds":[9,19],"name":"Kappa","modifiers":["spin"]}],"mentions":[{"bounds":[0,5],"nick":"alice"}],"tags":[{"bounds":[28,32],"name":"nsfw"}],"spoiler":[{"bounds":[7,27]}]}"#
        );
    }

    #[test]
    fn disabled_detector_finds_no_links() {
        let vocab = vocab();
        let extractor = Extractor::new(&vocab, None::<RelaxedUrlDetector>);
        let entities = extractor.extract("https://example.com Kappa").unwrap();
        assert!(entities.links.is_empty());
        assert_eq!(entities.emotes.len(), 1);
    }

    #[test]
    fn max_depth_is_configurable() {
        let vocab = vocab();
        let extractor = Extractor::new(&vocab, NoLinks).with_max_depth(1);
        assert_eq!(extractor.max_depth(), 1);

        // Greentext holding a spoiler is two levels deep
        assert_eq!(
            extractor.extract(">||Kappa||"),
            Err(EntityError::RecursionLimitExceeded { limit: 1 })
        );
        assert!(extractor.extract("||Kappa||").is_ok());
    }
}
