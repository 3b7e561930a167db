use cuepoint_config::{ConfigLoadError, Rgb, SkipOverlayConfig};
use iced::{Background, Border, Color, widget::container};

/// Colors resolved for the skip badge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkipOverlayTheme {
    pub background: Color,
    pub text: Color,
    /// Badge background opacity when fully shown.
    pub background_alpha: f32,
}

impl Default for SkipOverlayTheme {
    fn default() -> Self {
        Self {
            background: Color::from_rgb8(0x1f, 0x1f, 0x24),
            text: Color::from_rgb8(0xe6, 0xe6, 0xe6),
            background_alpha: 0.8,
        }
    }
}

impl SkipOverlayTheme {
    pub fn from_config(
        config: &SkipOverlayConfig,
    ) -> Result<Self, ConfigLoadError> {
        Ok(Self {
            background: to_color(config.background_rgb()?),
            text: to_color(config.text_rgb()?),
            background_alpha: config.background_alpha,
        })
    }

    /// Background scaled by the fade opacity.
    pub fn background_at(&self, opacity: f32) -> Color {
        Color {
            a: self.background_alpha.clamp(0.0, 1.0)
                * opacity.clamp(0.0, 1.0),
            ..self.background
        }
    }

    pub fn text_at(&self, opacity: f32) -> Color {
        Color {
            a: opacity.clamp(0.0, 1.0),
            ..self.text
        }
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::from_rgb8(rgb.r, rgb.g, rgb.b)
}

// Container styles
pub fn container_skip_badge(
    theme: SkipOverlayTheme,
    opacity: f32,
) -> impl Fn(&iced::Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(theme.background_at(opacity))),
        text_color: Some(theme.text_at(opacity)),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    }
}
