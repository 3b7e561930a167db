// Skip prompt flow tests
//
// Drives the overlay the way a player screen does: position ticks, segment
// offers, the skip UI gate, and auto-hide expiry.

use std::sync::Arc;
use std::time::Duration;

use cuepoint_model::Millis;
use cuepoint_player::domains::skip_overlay::auto_hide::AutoHidePhase;
use cuepoint_player::domains::skip_overlay::view::SkipOverlayAppearance;
use cuepoint_player::domains::skip_overlay::{SkipOverlay, SkipOverlayMessage};
use cuepoint_player::infra::ConfiguredSegmentRepository;

fn overlay_with_threshold(threshold_ms: u64) -> SkipOverlay {
    SkipOverlay::new(
        Arc::new(ConfiguredSegmentRepository::new(
            Duration::from_millis(threshold_ms),
            Duration::from_secs(8),
        )),
        SkipOverlayAppearance::default(),
        Duration::ZERO,
        false,
    )
}

fn drive(overlay: &mut SkipOverlay, messages: Vec<SkipOverlayMessage>) {
    for message in messages {
        let _ = overlay.update(message);
    }
}

fn armed_generation(overlay: &SkipOverlay) -> u64 {
    match overlay.auto_hide().phase() {
        AutoHidePhase::Armed { generation, .. } => generation,
        AutoHidePhase::Idle => panic!("auto-hide is not armed"),
    }
}

#[test]
fn test_visible_at_segment_start() {
    let mut overlay = overlay_with_threshold(3_000);
    drive(
        &mut overlay,
        vec![
            SkipOverlayMessage::SetSkipUiEnabled(true),
            SkipOverlayMessage::SetCurrentPosition(Millis(0)),
            SkipOverlayMessage::SetTargetPosition(Millis(10_000)),
        ],
    );
    assert!(overlay.is_visible());
}

#[test]
fn test_hidden_when_too_little_remains() {
    let mut overlay = overlay_with_threshold(3_000);
    drive(
        &mut overlay,
        vec![
            SkipOverlayMessage::SetSkipUiEnabled(true),
            SkipOverlayMessage::SetTargetPosition(Millis(10_000)),
            SkipOverlayMessage::SetCurrentPosition(Millis(8_000)),
        ],
    );
    assert!(!overlay.is_visible());
}

#[test]
fn test_auto_hide_clears_target() {
    let mut overlay = overlay_with_threshold(3_000);
    drive(
        &mut overlay,
        vec![
            SkipOverlayMessage::SetSkipUiEnabled(true),
            SkipOverlayMessage::SetTargetPosition(Millis(10_000)),
        ],
    );
    assert!(overlay.is_visible());

    let generation = armed_generation(&overlay);
    drive(
        &mut overlay,
        vec![SkipOverlayMessage::AutoHideElapsed(generation)],
    );

    assert_eq!(overlay.target_position(), Millis::ZERO);
    assert!(!overlay.is_visible());
    assert_eq!(overlay.auto_hide().phase(), AutoHidePhase::Idle);
}

#[test]
fn test_disabling_hides_immediately() {
    let mut overlay = overlay_with_threshold(3_000);
    drive(
        &mut overlay,
        vec![
            SkipOverlayMessage::SetSkipUiEnabled(true),
            SkipOverlayMessage::SetCurrentPosition(Millis(0)),
            SkipOverlayMessage::SetTargetPosition(Millis(10_000)),
        ],
    );
    assert!(overlay.is_visible());

    drive(&mut overlay, vec![SkipOverlayMessage::SetSkipUiEnabled(false)]);
    assert!(!overlay.is_visible());
    assert!(!overlay.has_pending_hide());
    assert_eq!(overlay.target_position(), Millis(10_000));
}

#[test]
fn test_reenabling_rearms_with_new_generation() {
    let mut overlay = overlay_with_threshold(3_000);
    drive(
        &mut overlay,
        vec![
            SkipOverlayMessage::SetSkipUiEnabled(true),
            SkipOverlayMessage::SetTargetPosition(Millis(10_000)),
        ],
    );
    let first = armed_generation(&overlay);

    drive(
        &mut overlay,
        vec![
            SkipOverlayMessage::SetSkipUiEnabled(false),
            SkipOverlayMessage::SetSkipUiEnabled(true),
        ],
    );
    let second = armed_generation(&overlay);
    assert_ne!(first, second);

    // The cancelled wait must not clear the target
    drive(&mut overlay, vec![SkipOverlayMessage::AutoHideElapsed(first)]);
    assert!(overlay.is_visible());
    assert_eq!(overlay.target_position(), Millis(10_000));
}

#[test]
fn test_repeated_setter_changes_nothing() {
    let mut overlay = overlay_with_threshold(3_000);
    drive(
        &mut overlay,
        vec![
            SkipOverlayMessage::SetSkipUiEnabled(true),
            SkipOverlayMessage::SetTargetPosition(Millis(10_000)),
        ],
    );
    let phase = overlay.auto_hide().phase();

    drive(
        &mut overlay,
        vec![
            SkipOverlayMessage::SetTargetPosition(Millis(10_000)),
            SkipOverlayMessage::SetSkipUiEnabled(true),
        ],
    );
    assert!(overlay.is_visible());
    assert_eq!(overlay.auto_hide().phase(), phase);
}

#[test]
fn test_zero_target_never_visible() {
    let mut overlay = overlay_with_threshold(0);
    for position in [-1_000, 0, 1_000] {
        drive(
            &mut overlay,
            vec![
                SkipOverlayMessage::SetSkipUiEnabled(true),
                SkipOverlayMessage::SetTargetPosition(Millis::ZERO),
                SkipOverlayMessage::SetCurrentPosition(Millis(position)),
            ],
        );
        assert!(!overlay.is_visible(), "position {position}");
    }
}

#[test]
fn test_forced_visible_is_overridden() {
    let mut overlay = overlay_with_threshold(3_000);
    drive(&mut overlay, vec![SkipOverlayMessage::SetVisible(true)]);
    assert!(!overlay.is_visible());

    drive(
        &mut overlay,
        vec![
            SkipOverlayMessage::SetSkipUiEnabled(true),
            SkipOverlayMessage::SetTargetPosition(Millis(10_000)),
            SkipOverlayMessage::SetVisible(false),
        ],
    );
    assert!(overlay.is_visible());
}
