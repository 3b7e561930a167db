//! Transition system for overlay animations
//!
//! Drives the fade in/out of transient overlays. Progress is advanced from the
//! host's animation tick; nothing here schedules work on its own.

use std::time::{Duration, Instant};

/// Default length of an overlay fade.
pub const FADE_DURATION: Duration = Duration::from_millis(250);

/// Easing function types for transitions
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EasingFunction {
    Linear,
    EaseOutCubic,
}

impl EasingFunction {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingFunction::Linear => t,
            EasingFunction::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// Animated `f32` moving from `from` to `to` over `duration`.
#[derive(Debug, Clone)]
pub struct Transition {
    pub from: f32,
    pub to: f32,
    pub start_time: Option<Instant>,
    pub duration: Duration,
    pub easing: EasingFunction,
    pub progress: f32,
}

impl Transition {
    /// Create a transition resting at `initial_value`
    pub fn new(
        initial_value: f32,
        duration: Duration,
        easing: EasingFunction,
    ) -> Self {
        Self {
            from: initial_value,
            to: initial_value,
            start_time: None,
            duration,
            easing,
            progress: 1.0, // Start fully transitioned
        }
    }

    /// Start a transition to a new value
    pub fn transition_to(&mut self, new_value: f32) {
        self.transition_to_at(new_value, Instant::now());
    }

    pub fn transition_to_at(&mut self, new_value: f32, now: Instant) {
        // Retargeting mid-flight continues from the value on screen
        self.from = self.current_value();
        self.to = new_value;

        if self.duration.is_zero() {
            self.start_time = None;
            self.progress = 1.0;
        } else {
            self.start_time = Some(now);
            self.progress = 0.0;
        }
    }

    /// Update the transition progress
    pub fn update(&mut self) {
        self.update_at(Instant::now());
    }

    pub fn update_at(&mut self, now: Instant) {
        if let Some(start) = self.start_time {
            let elapsed = now.saturating_duration_since(start);
            let raw_progress =
                elapsed.as_secs_f32() / self.duration.as_secs_f32();

            if raw_progress >= 1.0 {
                self.progress = 1.0;
                self.start_time = None; // Transition complete
            } else {
                self.progress = self.easing.apply(raw_progress);
            }
        }
    }

    /// Check if currently transitioning
    pub fn is_transitioning(&self) -> bool {
        self.start_time.is_some() && self.progress < 1.0
    }

    /// Get the current interpolated value
    pub fn current_value(&self) -> f32 {
        interpolate_f32(self.from, self.to, self.progress)
    }
}

/// Opacity animation for a show/hide overlay.
#[derive(Debug, Clone)]
pub struct FadeTransition {
    opacity: Transition,
}

impl Default for FadeTransition {
    fn default() -> Self {
        Self::new(FADE_DURATION)
    }
}

impl FadeTransition {
    /// Hidden fade of the given length.
    pub fn new(duration: Duration) -> Self {
        Self {
            opacity: Transition::new(
                0.0,
                duration,
                EasingFunction::EaseOutCubic,
            ),
        }
    }

    pub fn show(&mut self) {
        self.opacity.transition_to(1.0);
    }

    pub fn hide(&mut self) {
        self.opacity.transition_to(0.0);
    }

    pub fn set_shown(&mut self, shown: bool) {
        if shown {
            self.show();
        } else {
            self.hide();
        }
    }

    pub fn update(&mut self) {
        self.opacity.update();
    }

    pub fn is_transitioning(&self) -> bool {
        self.opacity.is_transitioning()
    }

    pub fn opacity(&self) -> f32 {
        self.opacity.current_value().clamp(0.0, 1.0)
    }
}

/// Interpolate between two f32 values
fn interpolate_f32(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
