//! # Vocabulary
//!
//! The read-only word lists the parser classifies against. Built once,
//! typically from an emote manifest and the roster of users present, then
//! shared by reference. Refreshing it means building a new one.

use std::collections::{HashMap, HashSet};

/// Raw word lists used to build a [`Vocabulary`].
#[derive(Debug, Clone, Default)]
pub struct VocabularyValues {
    pub emotes: Vec<String>,
    pub nicks: Vec<String>,
    pub tags: Vec<String>,
    pub modifiers: Vec<String>,
}

/// Recognized emotes, nicks, tags and emote modifiers.
///
/// Emotes and modifiers match exactly. Nicks and tags match ignoring ASCII
/// case and resolve to the spelling they were configured with.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    emotes: HashSet<String>,
    nicks: HashMap<String, String>,
    tags: HashMap<String, String>,
    modifiers: HashSet<String>,
}

impl Vocabulary {
    pub fn new(values: VocabularyValues) -> Self {
        let folded = |words: Vec<String>| {
            words
                .into_iter()
                .map(|w| (w.to_ascii_lowercase(), w))
                .collect::<HashMap<_, _>>()
        };

        Self {
            emotes: values.emotes.into_iter().collect(),
            nicks: folded(values.nicks),
            tags: folded(values.tags),
            modifiers: values.modifiers.into_iter().collect(),
        }
    }

    pub fn is_emote(&self, word: &str) -> bool {
        self.emotes.contains(word)
    }

    pub fn is_modifier(&self, word: &str) -> bool {
        self.modifiers.contains(word)
    }

    /// The configured spelling of `word` if it names a known user.
    pub fn nick(&self, word: &str) -> Option<&str> {
        self.nicks.get(&word.to_ascii_lowercase()).map(String::as_str)
    }

    /// The configured spelling of `word` if it is a known tag.
    pub fn tag(&self, word: &str) -> Option<&str> {
        self.tags.get(&word.to_ascii_lowercase()).map(String::as_str)
    }

    pub fn emote_count(&self) -> usize {
        self.emotes.len()
    }

    pub fn nick_count(&self) -> usize {
        self.nicks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab() -> Vocabulary {
        Vocabulary::new(VocabularyValues {
            emotes: vec!["Kappa".into(), "PEPE".into()],
            nicks: vec!["Alice".into()],
            tags: vec!["nsfw".into()],
            modifiers: vec!["spin".into()],
        })
    }

    #[test]
    fn emotes_are_case_sensitive() {
        let v = vocab();
        assert!(v.is_emote("Kappa"));
        assert!(!v.is_emote("kappa"));
    }

    #[test]
    fn nicks_fold_case_and_keep_configured_spelling() {
        let v = vocab();
        assert_eq!(v.nick("alice"), Some("Alice"));
        assert_eq!(v.nick("ALICE"), Some("Alice"));
        assert_eq!(v.nick("bob"), None);
    }

    #[test]
    fn tags_fold_case() {
        let v = vocab();
        assert_eq!(v.tag("NSFW"), Some("nsfw"));
        assert_eq!(v.tag("weeb"), None);
    }

    #[test]
    fn modifiers_match_exactly() {
        let v = vocab();
        assert!(v.is_modifier("spin"));
        assert!(!v.is_modifier("Spin"));
    }

    #[test]
    fn counts() {
        let v = vocab();
        assert_eq!(v.emote_count(), 2);
        assert_eq!(v.nick_count(), 1);
    }

    #[test]
    fn vocabulary_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Vocabulary>();
    }
}
