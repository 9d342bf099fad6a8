//! # Entity Model
//!
//! The flat, category-indexed output of the walker. Each category holds its
//! records in the order the walker met the nodes (pre-order, depth-first).
//!
//! Serializes with `serde` using the fixed category keys; empty categories
//! are omitted and [`Bounds`] is written as a `[start, end]` pair:
//!
//! ```json
//! {"links":[{"bounds":[10,29],"url":"https://example.com"}]}
//! ```

use serde::{Deserialize, Serialize};

/// A byte range `[start, end)` into the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "[usize; 2]", into = "[usize; 2]")]
pub struct Bounds {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Bounds {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of bytes covered; an inverted range counts as zero.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// True when no bytes are covered.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Returns true if `other` lies within `self`, edges included.
    #[must_use]
    pub fn contains(self, other: Bounds) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// The covered text, or `None` if out of range or not on char boundaries.
    pub fn slice(self, message: &str) -> Option<&str> {
        message.get(self.start..self.end)
    }
}

impl From<[usize; 2]> for Bounds {
    fn from([start, end]: [usize; 2]) -> Self {
        Self { start, end }
    }
}

impl From<Bounds> for [usize; 2] {
    fn from(bounds: Bounds) -> Self {
        [bounds.start, bounds.end]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntity {
    pub bounds: Bounds,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmoteEntity {
    pub bounds: Bounds,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentionEntity {
    pub bounds: Bounds,
    pub nick: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagEntity {
    pub bounds: Bounds,
    pub name: String,
}

/// A code, spoiler or greentext region. The category carries the kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanEntity {
    pub bounds: Bounds,
}

/// The fixed entity categories, in serialization order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Links,
    Emotes,
    Mentions,
    Tags,
    Code,
    Spoiler,
    Greentext,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Links,
        Category::Emotes,
        Category::Mentions,
        Category::Tags,
        Category::Code,
        Category::Spoiler,
        Category::Greentext,
    ];

    /// The serialized key for this category.
    pub fn key(self) -> &'static str {
        match self {
            Category::Links => "links",
            Category::Emotes => "emotes",
            Category::Mentions => "mentions",
            Category::Tags => "tags",
            Category::Code => "code",
            Category::Spoiler => "spoiler",
            Category::Greentext => "greentext",
        }
    }
}

/// All entities found in one message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entities {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<LinkEntity>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub emotes: Vec<EmoteEntity>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mentions: Vec<MentionEntity>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<TagEntity>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub code: Vec<SpanEntity>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub spoiler: Vec<SpanEntity>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub greentext: Vec<SpanEntity>,
}

impl Entities {
    /// Number of records in one category.
    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Links => self.links.len(),
            Category::Emotes => self.emotes.len(),
            Category::Mentions => self.mentions.len(),
            Category::Tags => self.tags.len(),
            Category::Code => self.code.len(),
            Category::Spoiler => self.spoiler.len(),
            Category::Greentext => self.greentext.len(),
        }
    }

    /// Total number of records across all categories.
    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|&c| self.count(c)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bounds of every record in one category, in record order.
    pub fn bounds(&self, category: Category) -> Vec<Bounds> {
        fn collect<T>(records: &[T], bounds: impl Fn(&T) -> Bounds) -> Vec<Bounds> {
            records.iter().map(bounds).collect()
        }
        match category {
            Category::Links => collect(&self.links, |r| r.bounds),
            Category::Emotes => collect(&self.emotes, |r| r.bounds),
            Category::Mentions => collect(&self.mentions, |r| r.bounds),
            Category::Tags => collect(&self.tags, |r| r.bounds),
            Category::Code => collect(&self.code, |r| r.bounds),
            Category::Spoiler => collect(&self.spoiler, |r| r.bounds),
            Category::Greentext => collect(&self.greentext, |r| r.bounds),
        }
    }

    /// Every record's category and bounds, category by category.
    pub fn iter_bounds(&self) -> impl Iterator<Item = (Category, Bounds)> + '_ {
        Category::ALL
            .into_iter()
            .flat_map(move |c| self.bounds(c).into_iter().map(move |b| (c, b)))
    }
}
