//! Collaborators the overlay consumes but does not own.

pub mod segment_repository;

pub use segment_repository::{ConfiguredSegmentRepository, SegmentRepository};
