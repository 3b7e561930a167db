//! Configuration library for the cuepoint skip prompt.
//!
//! Centralizes defaults, file/env loading and validation for the overlay so
//! the player binary and its tests share one source of truth for timings,
//! colors and the localized label.

pub mod loader;
pub mod models;
pub mod util;

pub use loader::{ConfigLoad, ConfigLoader, error::ConfigLoadError};
pub use models::color::Rgb;
pub use models::{ConfigSource, SkipOverlayConfig};
