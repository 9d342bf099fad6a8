//! # Node Tree
//!
//! The parser's output: a rooted tree of owned nodes. A parent exclusively
//! owns its children, so there are no back-references and the tree can be
//! rearranged by plain `Vec` insertion.
//!
//! Every node carries `start`/`end` byte offsets into the message it was
//! parsed from, with `end` exclusive.

use std::fmt;
use std::ops::Range;

/// The kind of a bracketed region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    /// The root span covering the whole message.
    Message,
    /// `` `...` ``
    Code,
    /// `||...||`
    Spoiler,
    /// A message starting with `>`.
    Greentext,
}

impl SpanKind {
    pub fn name(self) -> &'static str {
        match self {
            SpanKind::Message => "Message",
            SpanKind::Code => "Code",
            SpanKind::Spoiler => "Spoiler",
            SpanKind::Greentext => "Greentext",
        }
    }
}

/// A region of the message with ordered, non-overlapping children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub kind: SpanKind,
    pub start: usize,
    pub end: usize,
    pub nodes: Vec<Node>,
}

impl Span {
    pub fn new(kind: SpanKind, start: usize, end: usize) -> Self {
        Self {
            kind,
            start,
            end,
            nodes: Vec::new(),
        }
    }

    pub fn with_nodes(mut self, nodes: Vec<Node>) -> Self {
        self.nodes = nodes;
        self
    }

    /// The root span for a message of `len` bytes.
    pub fn message(len: usize) -> Self {
        Self::new(SpanKind::Message, 0, len)
    }

    /// Returns true if `[start, end)` lies within this span's bounds.
    pub fn contains(&self, start: usize, end: usize) -> bool {
        self.start <= start && end <= self.end
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emote {
    pub name: String,
    /// Modifier suffixes in source order, e.g. `["spin", "wide"]` for `PEPE:spin:wide`.
    pub modifiers: Vec<String>,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mention {
    pub nick: String,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub start: usize,
    pub end: usize,
}

/// A hyperlink. Never produced by the parser itself; links are merged in
/// from a separate detector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub url: String,
    pub start: usize,
    pub end: usize,
}

/// Any node in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Span(Span),
    Emote(Emote),
    Mention(Mention),
    Tag(Tag),
    Link(Link),
}

impl Node {
    pub fn start(&self) -> usize {
        match self {
            Node::Span(n) => n.start,
            Node::Emote(n) => n.start,
            Node::Mention(n) => n.start,
            Node::Tag(n) => n.start,
            Node::Link(n) => n.start,
        }
    }

    pub fn end(&self) -> usize {
        match self {
            Node::Span(n) => n.end,
            Node::Emote(n) => n.end,
            Node::Mention(n) => n.end,
            Node::Tag(n) => n.end,
            Node::Link(n) => n.end,
        }
    }

    pub fn range(&self) -> Range<usize> {
        self.start()..self.end()
    }

    pub fn as_span(&self) -> Option<&Span> {
        match self {
            Node::Span(span) => Some(span),
            _ => None,
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        match self {
            Node::Span(span) => 1 + span.nodes.iter().map(Node::subtree_len).sum::<usize>(),
            _ => 1,
        }
    }
}

impl From<Span> for Node {
    fn from(span: Span) -> Self {
        Node::Span(span)
    }
}

impl From<Emote> for Node {
    fn from(emote: Emote) -> Self {
        Node::Emote(emote)
    }
}

impl From<Mention> for Node {
    fn from(mention: Mention) -> Self {
        Node::Mention(mention)
    }
}

impl From<Tag> for Node {
    fn from(tag: Tag) -> Self {
        Node::Tag(tag)
    }
}

impl From<Link> for Node {
    fn from(link: Link) -> Self {
        Node::Link(link)
    }
}

/// Indented dump, one node per line: `Kind@start..end payload`.
///
/// ```
/// use chat_entities_syntax::{Node, Span, SpanKind, Tag};
///
/// let root = Span::message(9).with_nodes(vec![
///     Tag { name: "nsfw".into(), start: 5, end: 9 }.into(),
/// ]);
/// assert_eq!(Node::from(root).to_string(), "Message@0..9\n  Tag@5..9 \"nsfw\"\n");
/// ```
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self, 0)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_span(f, self, 0)
    }
}

fn write_span(f: &mut fmt::Formatter<'_>, span: &Span, indent: usize) -> fmt::Result {
    writeln!(
        f,
        "{}{}@{}..{}",
        "  ".repeat(indent),
        span.kind.name(),
        span.start,
        span.end
    )?;
    for child in &span.nodes {
        write_node(f, child, indent + 1)?;
    }
    Ok(())
}

fn write_node(f: &mut fmt::Formatter<'_>, node: &Node, indent: usize) -> fmt::Result {
    let prefix = "  ".repeat(indent);
    match node {
        Node::Span(span) => write_span(f, span, indent),
        Node::Emote(e) if e.modifiers.is_empty() => {
            writeln!(f, "{prefix}Emote@{}..{} {:?}", e.start, e.end, e.name)
        }
        Node::Emote(e) => writeln!(
            f,
            "{prefix}Emote@{}..{} {:?} {:?}",
            e.start, e.end, e.name, e.modifiers
        ),
        Node::Mention(m) => writeln!(f, "{prefix}Mention@{}..{} {:?}", m.start, m.end, m.nick),
        Node::Tag(t) => writeln!(f, "{prefix}Tag@{}..{} {:?}", t.start, t.end, t.name),
        Node::Link(l) => writeln!(f, "{prefix}Link@{}..{} {:?}", l.start, l.end, l.url),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn emote(name: &str, start: usize, end: usize) -> Node {
        Emote {
            name: name.into(),
            modifiers: vec![],
            start,
            end,
        }
        .into()
    }

    #[test]
    fn leaf_bounds() {
        let node = emote("Kappa", 3, 8);
        assert_eq!(node.start(), 3);
        assert_eq!(node.end(), 8);
        assert_eq!(node.range(), 3..8);
        assert!(node.as_span().is_none());
    }

    #[test]
    fn subtree_len_counts_every_node() {
        let root: Node = Span::message(30)
            .with_nodes(vec![
                emote("Kappa", 0, 5),
                Span::new(SpanKind::Spoiler, 6, 20)
                    .with_nodes(vec![
                        emote("PEPE", 8, 12),
                        Span::new(SpanKind::Code, 13, 18).into(),
                    ])
                    .into(),
            ])
            .into();
        assert_eq!(root.subtree_len(), 5);
    }

    #[test]
    fn span_contains_is_inclusive_of_edges() {
        let span = Span::new(SpanKind::Code, 4, 10);
        assert!(span.contains(4, 10));
        assert!(span.contains(5, 9));
        assert!(!span.contains(3, 9));
        assert!(!span.contains(5, 11));
    }

    #[test]
    fn display_nests_children() {
        let root: Node = Span::message(20)
            .with_nodes(vec![
                Span::new(SpanKind::Spoiler, 0, 14)
                    .with_nodes(vec![
                        Emote {
                            name: "PEPE".into(),
                            modifiers: vec!["spin".into()],
                            start: 2,
                            end: 11,
                        }
                        .into(),
                    ])
                    .into(),
                Mention {
                    nick: "alice".into(),
                    start: 15,
                    end: 20,
                }
                .into(),
            ])
            .into();

        assert_eq!(
            root.to_string(),
            "Message@0..20\n  Spoiler@0..14\n    Emote@2..11 \"PEPE\" [\"spin\"]\n  Mention@15..20 \"alice\"\n"
        );
    }
}
