//! Overlay settings and where they were loaded from.

pub mod color;

use std::path::PathBuf;
use std::time::Duration;

use cuepoint_model::{ASK_TO_SKIP_AUTO_HIDE_DURATION, SKIP_MIN_DURATION};
use serde::{Deserialize, Serialize};

use crate::loader::error::ConfigLoadError;
use color::Rgb;

/// Source that produced the overlay configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    /// Nothing was found; built-in defaults apply.
    #[default]
    Default,
    /// File named by `$SKIP_OVERLAY_CONFIG_PATH`.
    EnvPath(PathBuf),
    /// JSON document in `$SKIP_OVERLAY_CONFIG_JSON`.
    EnvInline,
    /// Default file discovered under the search root.
    File(PathBuf),
}

/// Settings for the ask-to-skip prompt. Every field has a default so partial
/// TOML/JSON documents are accepted.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SkipOverlayConfig {
    /// Initial value of the skip UI gate. Hosts may still toggle it at runtime.
    pub enabled: bool,
    /// Minimum time (ms) that must remain before the segment ends for the
    /// prompt to show. Prompts for nearly finished segments are suppressed.
    pub min_remaining_ms: u64,
    /// How long (ms) the prompt stays up before it clears the offered segment.
    pub auto_hide_ms: u64,
    /// Fade in/out animation length (ms). Zero disables the animation.
    pub fade_ms: u64,
    /// Opacity applied to the badge background, `0.0..=1.0`.
    pub background_alpha: f32,
    /// Badge background as `#rrggbb`.
    pub background_color: String,
    /// Label and icon color as `#rrggbb`.
    pub text_color: String,
    /// BCP 47 style language tag used to pick the label, e.g. `de` or `pt-BR`.
    pub locale: String,
    /// Replaces the localized label entirely when set.
    pub label: Option<String>,
}

impl Default for SkipOverlayConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_remaining_ms: SKIP_MIN_DURATION.as_millis() as u64,
            auto_hide_ms: ASK_TO_SKIP_AUTO_HIDE_DURATION.as_millis() as u64,
            fade_ms: 250,
            background_alpha: 0.8,
            background_color: "#1f1f24".to_string(),
            text_color: "#e6e6e6".to_string(),
            locale: "en".to_string(),
            label: None,
        }
    }
}

impl SkipOverlayConfig {
    /// [`Self::min_remaining_ms`] as a `Duration`.
    pub fn min_remaining(&self) -> Duration {
        Duration::from_millis(self.min_remaining_ms)
    }

    /// [`Self::auto_hide_ms`] as a `Duration`.
    pub fn auto_hide(&self) -> Duration {
        Duration::from_millis(self.auto_hide_ms)
    }

    /// [`Self::fade_ms`] as a `Duration`.
    pub fn fade(&self) -> Duration {
        Duration::from_millis(self.fade_ms)
    }

    /// Parsed [`Self::background_color`].
    pub fn background_rgb(&self) -> Result<Rgb, ConfigLoadError> {
        self.background_color.parse()
    }

    /// Parsed [`Self::text_color`].
    pub fn text_rgb(&self) -> Result<Rgb, ConfigLoadError> {
        self.text_color.parse()
    }

    /// Reject values the overlay cannot render or time sensibly.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        if !(0.0..=1.0).contains(&self.background_alpha) {
            return Err(ConfigLoadError::InvalidValue {
                field: "background_alpha",
                reason: format!(
                    "{} is outside 0.0..=1.0",
                    self.background_alpha
                ),
            });
        }
        if self.auto_hide_ms == 0 {
            return Err(ConfigLoadError::InvalidValue {
                field: "auto_hide_ms",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.locale.trim().is_empty() {
            return Err(ConfigLoadError::InvalidValue {
                field: "locale",
                reason: "must not be empty".to_string(),
            });
        }
        self.background_rgb()?;
        self.text_rgb()?;
        Ok(())
    }
}
