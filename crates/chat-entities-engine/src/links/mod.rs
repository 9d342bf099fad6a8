//! # Link Detection
//!
//! Links aren't part of the chat grammar. They are found by scanning the raw
//! message text separately and merged into the parsed tree afterwards.
//!
//! A [`LinkDetector`] returns intervals sorted by start and non-overlapping.
//! [`validate_intervals`] enforces that contract before anything is merged.
//!
//! ## Modules
//!
//! - **`relaxed`**: [`RelaxedUrlDetector`], a regex matcher for URLs with or
//!   without a scheme

pub mod relaxed;

pub use relaxed::RelaxedUrlDetector;

use crate::error::{BoundsDefect, EntityError};
use crate::model::Bounds;

/// Finds link intervals in a raw message.
pub trait LinkDetector {
    /// Byte intervals of every link in `message`, ascending and disjoint.
    fn detect(&self, message: &str) -> Vec<Bounds>;
}

/// A detector that never finds anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLinks;

impl LinkDetector for NoLinks {
    fn detect(&self, _message: &str) -> Vec<Bounds> {
        Vec::new()
    }
}

/// `None` disables detection.
impl<D: LinkDetector> LinkDetector for Option<D> {
    fn detect(&self, message: &str) -> Vec<Bounds> {
        match self {
            Some(detector) => detector.detect(message),
            None => Vec::new(),
        }
    }
}

impl<D: LinkDetector + ?Sized> LinkDetector for &D {
    fn detect(&self, message: &str) -> Vec<Bounds> {
        (**self).detect(message)
    }
}

/// Fixed intervals, mostly for tests and callers with their own matcher.
impl LinkDetector for Vec<Bounds> {
    fn detect(&self, _message: &str) -> Vec<Bounds> {
        self.clone()
    }
}

/// Check that `intervals` are valid links over `message`: non-empty, in
/// range, on char boundaries, sorted by start and mutually disjoint.
pub fn validate_intervals(message: &str, intervals: &[Bounds]) -> Result<(), EntityError> {
    let len = message.len();
    let mut previous: Option<Bounds> = None;

    for &bounds in intervals {
        let reject = |defect| EntityError::InvalidBounds {
            start: bounds.start,
            end: bounds.end,
            len,
            defect,
        };

        if bounds.start >= bounds.end {
            return Err(reject(BoundsDefect::Empty));
        }
        if bounds.end > len {
            return Err(reject(BoundsDefect::OutsideMessage));
        }
        if !message.is_char_boundary(bounds.start) || !message.is_char_boundary(bounds.end) {
            return Err(reject(BoundsDefect::NotCharBoundary));
        }
        if let Some(prev) = previous {
            if bounds.start < prev.start {
                return Err(reject(BoundsDefect::Unsorted));
            }
            if bounds.start < prev.end {
                return Err(reject(BoundsDefect::Overlapping));
            }
        }
        previous = Some(bounds);
    }

    Ok(())
}
