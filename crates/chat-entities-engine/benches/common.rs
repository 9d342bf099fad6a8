// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
use chat_entities_engine::{Span, SpanKind, Vocabulary, VocabularyValues};

#[allow(dead_code)]
pub fn vocabulary() -> Vocabulary {
    let emotes = (0..500).map(|i| format!("Emote{i}"));
    let nicks = (0..2000).map(|i| format!("user{i}"));
    Vocabulary::new(VocabularyValues {
        emotes: emotes.chain(["Kappa".to_string(), "PEPE".to_string()]).collect(),
        nicks: nicks.chain(["alice".to_string()]).collect(),
        tags: vec!["nsfw".into(), "nsfl".into(), "loud".into(), "weeb".into()],
        modifiers: vec!["mirror".into(), "spin".into(), "wide".into()],
    })
}

/// A typical busy-chat line, repeated `size` times.
#[allow(dead_code)]
pub fn generate_message(size: usize) -> String {
    let base = "alice PEPE:spin check ||Kappa https://strims.gg/x nsfw|| `code a.com` ";
    base.repeat(size)
}

/// Spoilers nested `depth` deep, each covering the whole message.
#[allow(dead_code)]
pub fn generate_nested_tree(message_len: usize, depth: usize) -> Span {
    let mut span = Span::new(SpanKind::Spoiler, 0, message_len);
    for _ in 1..depth {
        span = Span::new(SpanKind::Spoiler, 0, message_len).with_nodes(vec![span.into()]);
    }
    Span::message(message_len).with_nodes(vec![span.into()])
}
