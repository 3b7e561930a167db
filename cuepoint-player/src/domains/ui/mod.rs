//! Shared UI building blocks used by the overlay views.

pub mod transitions;
