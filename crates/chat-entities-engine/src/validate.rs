//! Structural checks on the parser's tree before links are merged into it.
//!
//! The parser contract: the root is a `Message` span over the whole message,
//! every child lies within its parent, and siblings are in ascending order
//! without overlapping. Span nesting is capped at `max_depth` levels below
//! the root.

use chat_entities_syntax::{Node, Span, SpanKind};

use crate::error::{EntityError, TreeDefect};

/// Name used for a node in error messages.
pub(crate) fn node_name(node: &Node) -> &'static str {
    match node {
        Node::Span(span) => span.kind.name(),
        Node::Emote(_) => "Emote",
        Node::Mention(_) => "Mention",
        Node::Tag(_) => "Tag",
        Node::Link(_) => "Link",
    }
}

pub(crate) fn malformed(
    node: &'static str,
    start: usize,
    end: usize,
    defect: TreeDefect,
) -> EntityError {
    EntityError::MalformedTree {
        node,
        start,
        end,
        defect,
    }
}

/// Check the root span covers exactly `0..message_len`.
pub(crate) fn check_root(root: &Span, message_len: usize) -> Result<(), EntityError> {
    if root.kind != SpanKind::Message || root.start != 0 || root.end != message_len {
        return Err(malformed(root.kind.name(), root.start, root.end, TreeDefect::BadRoot));
    }
    Ok(())
}

/// Validate a parser tree for a message of `message_len` bytes.
pub fn validate_tree(root: &Span, message_len: usize, max_depth: usize) -> Result<(), EntityError> {
    check_root(root, message_len)?;
    check_children(root, 0, max_depth)
}

fn check_children(parent: &Span, depth: usize, max_depth: usize) -> Result<(), EntityError> {
    let mut previous_start = parent.start;
    let mut previous_end = parent.start;

    for child in &parent.nodes {
        let (start, end) = (child.start(), child.end());
        let name = node_name(child);

        if start > end {
            return Err(malformed(name, start, end, TreeDefect::Inverted));
        }
        if !parent.contains(start, end) {
            return Err(malformed(name, start, end, TreeDefect::OutsideParent));
        }
        if start < previous_start {
            return Err(malformed(name, start, end, TreeDefect::Unordered));
        }
        if start < previous_end {
            return Err(malformed(name, start, end, TreeDefect::Overlapping));
        }
        previous_start = start;
        previous_end = end;

        if let Node::Span(span) = child {
            if span.kind == SpanKind::Message {
                return Err(malformed(name, start, end, TreeDefect::NestedMessage));
            }
            if depth + 1 > max_depth {
                return Err(EntityError::RecursionLimitExceeded { limit: max_depth });
            }
            check_children(span, depth + 1, max_depth)?;
        }
    }

    Ok(())
}
