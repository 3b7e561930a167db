//! UI domains of the player.

pub mod skip_overlay;
pub mod ui;
