#![allow(dead_code)]

use chat_entities_engine::{Entities, Node, Span, Vocabulary, VocabularyValues};

pub fn vocabulary() -> Vocabulary {
    Vocabulary::new(VocabularyValues {
        emotes: vec!["Kappa".into(), "PEPE".into(), "LUL".into()],
        nicks: vec!["alice".into(), "bob".into()],
        tags: vec!["nsfw".into(), "weeb".into(), "nsfl".into(), "loud".into()],
        modifiers: vec!["mirror".into(), "spin".into(), "wide".into()],
    })
}

/// Messages exercising every construct, alone and combined.
pub const CORPUS: &[&str] = &[
    "",
    "hello world",
    "check out https://example.com now",
    "Kappa PEPE:spin:wide LUL:mirror",
    "alice bob carol",
    "nsfw https://example.com/Kappa loud",
    "`code with a.com inside` and b.com outside",
    "||spoiler with https://strims.gg/x and Kappa|| after.org",
    ">greentext ||with `nested code.io` alice|| weeb",
    "unclosed `code and || spoiler a.com",
    "héllo wörld Kappa ünïcode.com",
    "a.com`b` edge",
];

/// Every child lies within its parent and the message.
pub fn check_tree(message: &str, root: &Span) {
    assert_eq!((root.start, root.end), (0, message.len()));
    check_children(root);
}

fn check_children(parent: &Span) {
    for child in &parent.nodes {
        assert!(
            parent.start <= child.start() && child.end() <= parent.end,
            "child {:?} not contained in parent {}..{}",
            child.range(),
            parent.start,
            parent.end
        );
        if let Node::Span(span) = child {
            check_children(span);
        }
    }
}

/// Every record is a valid sub-range of the message.
pub fn check_entities(message: &str, entities: &Entities) {
    for (category, bounds) in entities.iter_bounds() {
        assert!(
            bounds.start <= bounds.end && bounds.end <= message.len(),
            "{} record {bounds:?} out of range for message of {} bytes",
            category.key(),
            message.len()
        );
        assert!(
            bounds.slice(message).is_some(),
            "{} record {bounds:?} splits a character",
            category.key()
        );
    }
}
