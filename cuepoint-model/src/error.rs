use std::fmt::{self, Display};

use crate::position::Millis;

/// Errors produced by model constructors and validation routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Segment end lies before its start.
    InvalidSegment { start: Millis, end: Millis },
    UnknownSegmentType(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidSegment { start, end } => {
                write!(f, "invalid segment: end {end} is before start {start}")
            }
            ModelError::UnknownSegmentType(raw) => {
                write!(f, "unknown segment type: {raw}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
