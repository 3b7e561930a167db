//! Cuepoint Player library
//!
//! The skip-segment prompt used by the player screen, plus the small demo
//! application in `src/main.rs` that exercises it.
//!
//! Notes
//! - Hosts embed [`domains::skip_overlay::SkipOverlay`], route its messages
//!   through `update`, batch its `subscription` and stack its `view` over the
//!   video surface.
//! - The library is exposed mainly to enable testing and reuse.

pub mod app;
pub mod domains;
pub mod infra;
