use iced::Task;

use super::SkipOverlay;
use super::messages::SkipOverlayMessage;
use cuepoint_model::Millis;

pub fn update_skip_overlay(
    overlay: &mut SkipOverlay,
    message: SkipOverlayMessage,
) -> Task<SkipOverlayMessage> {
    match message {
        SkipOverlayMessage::SetVisible(visible) => {
            // Held only until the refresh below re-derives it
            overlay.state.set_visible(visible);
            overlay.refresh()
        }
        SkipOverlayMessage::SetCurrentPosition(position) => {
            overlay.state.set_current_position(position);
            overlay.refresh()
        }
        SkipOverlayMessage::SetTargetPosition(position) => {
            overlay.state.set_target_position(position);
            overlay.refresh()
        }
        SkipOverlayMessage::SetSkipUiEnabled(enabled) => {
            overlay.state.set_skip_ui_enabled(enabled);
            overlay.refresh()
        }
        SkipOverlayMessage::OfferSegment(segment) => {
            log::debug!(
                "offering {} segment ending at {}",
                segment.kind,
                segment.end
            );
            overlay.state.set_target_position(segment.end);
            overlay.refresh()
        }
        SkipOverlayMessage::AutoHideElapsed(generation) => {
            if !overlay.expire_auto_hide(generation) {
                return Task::none();
            }
            log::debug!("auto-hide #{generation} elapsed, clearing target");
            overlay.state.set_target_position(Millis::ZERO);
            overlay.refresh()
        }
        SkipOverlayMessage::AnimationTick => {
            overlay.tick_fade();
            Task::none()
        }
    }
}
