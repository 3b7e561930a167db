#[cfg(test)]
mod ui_widgets_tests {
    use std::time::Duration;

    use cuepoint_config::SkipOverlayConfig;
    use cuepoint_model::Millis;
    use cuepoint_player::app::{DemoConfig, DemoMessage, DemoPlayer, demo};
    use cuepoint_player::domains::skip_overlay::view::{
        SkipOverlayAppearance, skip_overlay_content,
    };
    use cuepoint_player::domains::skip_overlay::{
        SkipOverlay, SkipOverlayMessage,
    };
    use iced::Element;

    #[test]
    fn test_overlay_content_creates_element() {
        let appearance = SkipOverlayAppearance::default();
        let shown: Element<'_, SkipOverlayMessage> =
            skip_overlay_content(true, 1.0, &appearance);
        drop(shown);

        let fading: Element<'_, SkipOverlayMessage> =
            skip_overlay_content(false, 0.5, &appearance);
        drop(fading);
    }

    #[test]
    fn test_overlay_view_follows_state() {
        let config = SkipOverlayConfig {
            fade_ms: 0,
            ..Default::default()
        };
        let mut overlay = SkipOverlay::from_config(&config).unwrap();
        let _ = overlay
            .update(SkipOverlayMessage::SetTargetPosition(Millis(30_000)));
        assert_eq!(overlay.opacity(), 1.0);

        let element: Element<'_, SkipOverlayMessage> = overlay.view();
        drop(element);
    }

    #[test]
    fn test_fade_in_starts_transparent() {
        let config = SkipOverlayConfig {
            fade_ms: 500,
            ..Default::default()
        };
        let mut overlay = SkipOverlay::from_config(&config).unwrap();
        let _ = overlay
            .update(SkipOverlayMessage::SetTargetPosition(Millis(30_000)));

        assert!(overlay.is_visible());
        assert!(overlay.opacity() < 1.0);
        let _ = overlay.subscription();
    }

    #[test]
    fn test_demo_view_creates_element() {
        let config =
            DemoConfig::from_config(&SkipOverlayConfig::default()).unwrap();
        let mut player = DemoPlayer::new(&config);
        let _ = player.advance(Duration::from_secs(20));

        let element: Element<'_, DemoMessage> = demo::view(&player);
        drop(element);
        let _ = demo::subscription(&player);
    }
}
