//! # Span Merge
//!
//! Inserts detected link intervals into the parser's tree as [`Link`] leaves.
//!
//! Each link descends from the root into whichever child span contains it,
//! then lands among that span's children at the position that keeps them
//! ordered by `start`:
//!
//! ```text
//! "||see a.com||"          links: [6..11]
//!
//! Message@0..13            Message@0..13
//!   Spoiler@0..13    →       Spoiler@0..13
//!                              Link@6..11 "a.com"
//! ```
//!
//! ## Edge Cases
//!
//! - A link with exactly the bounds of an existing node is inserted
//!   immediately before that node, and is not nested inside it when the node
//!   is a span.
//! - A link partially overlapping a leaf (an emote name inside a URL) or a
//!   span boundary is not split. It becomes a sibling at the deepest level
//!   that fully contains it, overlapping its neighbour.

use chat_entities_syntax::{Link, Node, Span};

use crate::error::EntityError;
use crate::links::validate_intervals;
use crate::model::Bounds;

/// Merge `intervals` into `root` as link leaves.
///
/// Intervals must satisfy [`validate_intervals`]; nothing is inserted if any
/// of them is rejected. Descending deeper than `max_depth` spans fails with
/// [`EntityError::RecursionLimitExceeded`].
pub fn merge_links(
    root: &mut Span,
    message: &str,
    intervals: &[Bounds],
    max_depth: usize,
) -> Result<(), EntityError> {
    validate_intervals(message, intervals)?;

    for &bounds in intervals {
        let link = Link {
            url: message[bounds.start..bounds.end].to_string(),
            start: bounds.start,
            end: bounds.end,
        };
        insert_link(root, link, 0, max_depth)?;
    }

    Ok(())
}

fn insert_link(
    span: &mut Span,
    link: Link,
    depth: usize,
    max_depth: usize,
) -> Result<(), EntityError> {
    let enclosing = span.nodes.iter_mut().find_map(|node| match node {
        Node::Span(child)
            if child.contains(link.start, link.end)
                && (child.start, child.end) != (link.start, link.end) =>
        {
            Some(child)
        }
        _ => None,
    });

    if let Some(child) = enclosing {
        if depth + 1 > max_depth {
            return Err(EntityError::RecursionLimitExceeded { limit: max_depth });
        }
        return insert_link(child, link, depth + 1, max_depth);
    }

    let at = span.nodes.partition_point(|node| node.start() < link.start);
    span.nodes.insert(at, link.into());
    Ok(())
}
