use thiserror::Error;

/// Why a node was rejected by tree validation or the walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeDefect {
    #[error("end precedes start")]
    Inverted,
    #[error("extends past the end of the message")]
    OutsideMessage,
    #[error("is not contained in its parent span")]
    OutsideParent,
    #[error("starts before its preceding sibling")]
    Unordered,
    #[error("overlaps its preceding sibling")]
    Overlapping,
    #[error("root must be a Message span covering the whole message")]
    BadRoot,
    #[error("Message span below the root")]
    NestedMessage,
}

/// Why a link interval was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoundsDefect {
    #[error("interval is empty or inverted")]
    Empty,
    #[error("interval extends past the end of the message")]
    OutsideMessage,
    #[error("offset is not on a UTF-8 character boundary")]
    NotCharBoundary,
    #[error("interval starts before the previous one")]
    Unsorted,
    #[error("interval overlaps the previous one")]
    Overlapping,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntityError {
    #[error("Malformed tree: {node} at {start}..{end} {defect}")]
    MalformedTree {
        node: &'static str,
        start: usize,
        end: usize,
        defect: TreeDefect,
    },

    #[error("Invalid link bounds {start}..{end} in message of {len} bytes: {defect}")]
    InvalidBounds {
        start: usize,
        end: usize,
        len: usize,
        defect: BoundsDefect,
    },

    #[error("Tree nesting exceeds the limit of {limit}")]
    RecursionLimitExceeded { limit: usize },
}
