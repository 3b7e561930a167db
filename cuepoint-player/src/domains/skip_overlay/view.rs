//! Skip prompt view
//!
//! Renders the ask-to-skip badge in the bottom-right corner of the player.

use cuepoint_config::{ConfigLoadError, SkipOverlayConfig};
use iced::widget::{Space, container, row, text};
use iced::{Alignment, Element, Length};

use super::labels::ask_to_skip_label;
use super::theme::{self, SkipOverlayTheme};

/// Select button glyph shown ahead of the label.
pub const SELECT_ICON: &str = "\u{25C9}";

const EDGE_PADDING: f32 = 48.0;
const BADGE_PADDING: f32 = 10.0;
const ICON_SIZE: f32 = 24.0;
const ICON_SPACING: f32 = 8.0;

/// Everything the badge needs from the hosting environment.
#[derive(Debug, Clone, PartialEq)]
pub struct SkipOverlayAppearance {
    pub theme: SkipOverlayTheme,
    pub label: String,
}

impl Default for SkipOverlayAppearance {
    fn default() -> Self {
        Self {
            theme: SkipOverlayTheme::default(),
            label: ask_to_skip_label("en").to_string(),
        }
    }
}

impl SkipOverlayAppearance {
    pub fn from_config(
        config: &SkipOverlayConfig,
    ) -> Result<Self, ConfigLoadError> {
        let label = match &config.label {
            Some(label) => label.clone(),
            None => ask_to_skip_label(&config.locale).to_string(),
        };
        Ok(Self {
            theme: SkipOverlayTheme::from_config(config)?,
            label,
        })
    }
}

/// Draw the badge. `opacity` is the fade progress; a hidden badge whose fade
/// has finished renders nothing.
pub fn skip_overlay_content<'a, Message: 'a>(
    visible: bool,
    opacity: f32,
    appearance: &'a SkipOverlayAppearance,
) -> Element<'a, Message> {
    if !visible && opacity <= 0.0 {
        return Space::new().width(0).height(0).into();
    }

    log::trace!(
        "skip overlay drawn (visible: {visible}, opacity: {opacity:.2})"
    );

    let text_color = appearance.theme.text_at(opacity);

    let content = row![
        text(SELECT_ICON).size(ICON_SIZE).color(text_color),
        Space::new().width(ICON_SPACING),
        text(appearance.label.as_str()).color(text_color),
    ]
    .align_y(Alignment::Center);

    let badge = container(content)
        .padding(BADGE_PADDING)
        .style(theme::container_skip_badge(appearance.theme, opacity));

    container(badge)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(EDGE_PADDING)
        .align_x(Alignment::End)
        .align_y(Alignment::End)
        .into()
}
