//! Core data model definitions shared across cuepoint crates.
#![allow(missing_docs)]

pub mod error;
pub mod position;
pub mod segment;
pub mod segment_defaults;

pub use error::{ModelError, Result as ModelResult};
pub use position::Millis;
pub use segment::{MediaSegment, MediaSegmentType};
pub use segment_defaults::{ASK_TO_SKIP_AUTO_HIDE_DURATION, SKIP_MIN_DURATION};
