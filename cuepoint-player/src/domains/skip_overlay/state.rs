use cuepoint_model::Millis;
use std::time::Duration;

/// Whether the ask-to-skip prompt should be on screen.
///
/// True only when the skip UI is enabled, a segment end is offered, and more
/// than `min_remaining` is left before that end.
pub fn should_display(
    skip_ui_enabled: bool,
    current_position: Millis,
    target_position: Millis,
    min_remaining: Duration,
) -> bool {
    skip_ui_enabled
        && target_position.is_set()
        && target_position.saturating_sub(current_position)
            > Millis::from_duration(min_remaining)
}

/// The four observable fields of the skip prompt.
///
/// Setters are plain assignments. `visible` is a derived value: it is
/// rewritten by [`SkipOverlayState::recompute`], so an explicit
/// [`SkipOverlayState::set_visible`] only holds until the next recompute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkipOverlayState {
    visible: bool,
    current_position: Millis,
    target_position: Millis,
    skip_ui_enabled: bool,
}

impl SkipOverlayState {
    pub fn new(skip_ui_enabled: bool) -> Self {
        Self {
            skip_ui_enabled,
            ..Default::default()
        }
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_current_position(&mut self, position: Millis) {
        self.current_position = position;
    }

    pub fn current_position(&self) -> Millis {
        self.current_position
    }

    pub fn set_target_position(&mut self, position: Millis) {
        self.target_position = position;
    }

    pub fn target_position(&self) -> Millis {
        self.target_position
    }

    pub fn set_skip_ui_enabled(&mut self, enabled: bool) {
        self.skip_ui_enabled = enabled;
    }

    pub fn is_skip_ui_enabled(&self) -> bool {
        self.skip_ui_enabled
    }

    /// Derived visibility for the current inputs, without storing it.
    pub fn derived_visible(&self, min_remaining: Duration) -> bool {
        should_display(
            self.skip_ui_enabled,
            self.current_position,
            self.target_position,
            min_remaining,
        )
    }

    /// Re-derive `visible` from the driving fields and store it.
    pub fn recompute(&mut self, min_remaining: Duration) -> bool {
        self.visible = self.derived_visible(min_remaining);
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: Duration = Duration::from_millis(3_000);

    fn state(enabled: bool, current: i64, target: i64) -> SkipOverlayState {
        let mut state = SkipOverlayState::new(enabled);
        state.set_current_position(Millis(current));
        state.set_target_position(Millis(target));
        state
    }

    #[test]
    fn visible_with_plenty_of_segment_left() {
        let mut state = state(true, 0, 10_000);
        assert!(state.recompute(THRESHOLD));
        assert!(state.is_visible());
    }

    #[test]
    fn hidden_near_segment_end() {
        let mut state = state(true, 8_000, 10_000);
        assert!(!state.recompute(THRESHOLD));
    }

    #[test]
    fn threshold_is_exclusive() {
        let mut state = state(true, 7_000, 10_000);
        assert!(!state.recompute(THRESHOLD));
        state.set_current_position(Millis(6_999));
        assert!(state.recompute(THRESHOLD));
    }

    #[test]
    fn disabled_is_never_visible() {
        for (current, target) in [(0, 10_000), (0, 0), (-5_000, 100_000)] {
            let mut state = state(false, current, target);
            assert!(!state.recompute(THRESHOLD), "{current} -> {target}");
        }
    }

    #[test]
    fn zero_target_is_never_visible() {
        for current in [-10_000, 0, 5_000] {
            let mut state = state(true, current, 0);
            assert!(!state.recompute(Duration::ZERO), "{current}");
        }
    }

    #[test]
    fn matches_remaining_time_rule() {
        for target in (1_000..=20_000).step_by(1_000) {
            for current in (0..target).step_by(500) {
                let mut state = state(true, current, target);
                let expected = (target - current) > 3_000;
                assert_eq!(
                    state.recompute(THRESHOLD),
                    expected,
                    "current={current} target={target}"
                );
            }
        }
    }

    #[test]
    fn explicit_visible_is_overwritten_by_recompute() {
        let mut state = state(true, 0, 0);
        state.set_visible(true);
        assert!(state.is_visible());
        state.recompute(THRESHOLD);
        assert!(!state.is_visible());
    }

    #[test]
    fn repeated_setters_are_idempotent() {
        let mut state = state(true, 0, 10_000);
        let first = state.recompute(THRESHOLD);
        state.set_target_position(Millis(10_000));
        state.set_target_position(Millis(10_000));
        assert_eq!(state.recompute(THRESHOLD), first);
    }

    #[test]
    fn negative_positions_flow_through() {
        let mut state = state(true, i64::MIN, 10_000);
        assert!(state.recompute(THRESHOLD));
    }
}
