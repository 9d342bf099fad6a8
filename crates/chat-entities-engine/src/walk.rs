//! # Tree Walker
//!
//! Visits every node of a merged tree once, pre-order and depth-first, and
//! appends one record per node to its [`Entities`] category. The root
//! `Message` span itself produces no record.
//!
//! | Node | Category |
//! |------|----------|
//! | Code / Spoiler / Greentext span | `code` / `spoiler` / `greentext`, then its children |
//! | Emote | `emotes` |
//! | Mention | `mentions` |
//! | Tag | `tags` |
//! | Link | `links` |
//!
//! The walker re-checks bounds as it goes: children must lie within their
//! parent and the message, and appear in ascending `start` order. Siblings
//! may overlap here, since merged links are allowed to overlap leaves.

use chat_entities_syntax::{Node, Span, SpanKind};

use crate::error::{EntityError, TreeDefect};
use crate::model::{Bounds, EmoteEntity, Entities, LinkEntity, MentionEntity, SpanEntity, TagEntity};
use crate::validate::{check_root, malformed, node_name};

/// Classify every node below `root` into an [`Entities`] model.
pub fn walk(root: &Span, message_len: usize, max_depth: usize) -> Result<Entities, EntityError> {
    check_root(root, message_len)?;

    let mut walker = Walker {
        entities: Entities::default(),
        max_depth,
    };
    walker.children(root, 0)?;
    Ok(walker.entities)
}

struct Walker {
    entities: Entities,
    max_depth: usize,
}

impl Walker {
    fn children(&mut self, parent: &Span, depth: usize) -> Result<(), EntityError> {
        let mut previous_start = parent.start;

        for child in &parent.nodes {
            let (start, end) = (child.start(), child.end());
            let name = node_name(child);

            if start > end {
                return Err(malformed(name, start, end, TreeDefect::Inverted));
            }
            // The root covers the whole message, so containment also bounds
            // every node by the message length.
            if !parent.contains(start, end) {
                return Err(malformed(name, start, end, TreeDefect::OutsideParent));
            }
            if start < previous_start {
                return Err(malformed(name, start, end, TreeDefect::Unordered));
            }
            previous_start = start;

            self.node(child, depth)?;
        }

        Ok(())
    }

    fn node(&mut self, node: &Node, depth: usize) -> Result<(), EntityError> {
        match node {
            Node::Span(span) => {
                let record = SpanEntity {
                    bounds: Bounds::new(span.start, span.end),
                };
                match span.kind {
                    SpanKind::Message => {
                        return Err(malformed(
                            "Message",
                            span.start,
                            span.end,
                            TreeDefect::NestedMessage,
                        ));
                    }
                    SpanKind::Code => self.entities.code.push(record),
                    SpanKind::Spoiler => self.entities.spoiler.push(record),
                    SpanKind::Greentext => self.entities.greentext.push(record),
                }

                if depth + 1 > self.max_depth {
                    return Err(EntityError::RecursionLimitExceeded {
                        limit: self.max_depth,
                    });
                }
                self.children(span, depth + 1)?;
            }
            Node::Emote(emote) => self.entities.emotes.push(EmoteEntity {
                bounds: Bounds::new(emote.start, emote.end),
                name: emote.name.clone(),
                modifiers: emote.modifiers.clone(),
            }),
            Node::Mention(mention) => self.entities.mentions.push(MentionEntity {
                bounds: Bounds::new(mention.start, mention.end),
                nick: mention.nick.clone(),
            }),
            Node::Tag(tag) => self.entities.tags.push(TagEntity {
                bounds: Bounds::new(tag.start, tag.end),
                name: tag.name.clone(),
            }),
            Node::Link(link) => self.entities.links.push(LinkEntity {
                bounds: Bounds::new(link.start, link.end),
                url: link.url.clone(),
            }),
        }

        Ok(())
    }
}
