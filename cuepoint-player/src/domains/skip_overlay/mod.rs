//! Skip prompt domain
//!
//! A transient "ask to skip" badge shown while the playhead sits inside a
//! skippable media segment. The hosting player screen feeds it the playhead
//! position, the end of the offered segment and the skip UI gate; the overlay
//! derives its own visibility and hides itself after a fixed delay.

pub mod auto_hide;
pub mod labels;
pub mod messages;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use cuepoint_config::{ConfigLoadError, SkipOverlayConfig};
use cuepoint_model::Millis;
use iced::task::Handle;
use iced::{Element, Subscription, Task};

use self::auto_hide::{AutoHideAction, AutoHideKey, AutoHideTimer};
use self::state::SkipOverlayState;
use self::view::SkipOverlayAppearance;
use crate::domains::ui::transitions::FadeTransition;
use crate::infra::{ConfiguredSegmentRepository, SegmentRepository};

pub use self::messages::SkipOverlayMessage;
pub use self::update::update_skip_overlay;

const ANIMATION_FRAME: Duration = Duration::from_millis(16);

/// Skip prompt wrapper - `state` holds the observable fields, the rest is the
/// machinery that keeps them consistent.
pub struct SkipOverlay {
    pub state: SkipOverlayState,
    auto_hide: AutoHideTimer,
    pending_hide: Option<Handle>,
    shown: bool,
    fade: FadeTransition,
    repository: Arc<dyn SegmentRepository>,
    appearance: SkipOverlayAppearance,
}

impl fmt::Debug for SkipOverlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkipOverlay")
            .field("state", &self.state)
            .field("auto_hide", &self.auto_hide)
            .field("pending_hide", &self.has_pending_hide())
            .field("fade", &self.fade)
            .field("repository", &self.repository)
            .finish_non_exhaustive()
    }
}

impl SkipOverlay {
    pub fn new(
        repository: Arc<dyn SegmentRepository>,
        appearance: SkipOverlayAppearance,
        fade: Duration,
        skip_ui_enabled: bool,
    ) -> Self {
        let auto_hide =
            AutoHideTimer::new(repository.ask_to_skip_auto_hide_duration());
        Self {
            state: SkipOverlayState::new(skip_ui_enabled),
            auto_hide,
            pending_hide: None,
            shown: false,
            fade: FadeTransition::new(fade),
            repository,
            appearance,
        }
    }

    pub fn from_config(
        config: &SkipOverlayConfig,
    ) -> Result<Self, ConfigLoadError> {
        config.validate()?;
        Ok(Self::new(
            Arc::new(ConfiguredSegmentRepository::from_config(config)),
            SkipOverlayAppearance::from_config(config)?,
            config.fade(),
            config.enabled,
        ))
    }

    pub fn update(
        &mut self,
        message: SkipOverlayMessage,
    ) -> Task<SkipOverlayMessage> {
        update_skip_overlay(self, message)
    }

    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }

    pub fn current_position(&self) -> Millis {
        self.state.current_position()
    }

    pub fn target_position(&self) -> Millis {
        self.state.target_position()
    }

    pub fn is_skip_ui_enabled(&self) -> bool {
        self.state.is_skip_ui_enabled()
    }

    pub fn auto_hide(&self) -> &AutoHideTimer {
        &self.auto_hide
    }

    pub fn has_pending_hide(&self) -> bool {
        self.pending_hide.is_some()
    }

    pub fn opacity(&self) -> f32 {
        self.fade.opacity()
    }

    /// Re-derive visibility and reconcile the auto-hide wait with it.
    ///
    /// Returns the wait task when a new one was armed; the host must run it
    /// for the prompt to hide itself.
    pub fn refresh(&mut self) -> Task<SkipOverlayMessage> {
        let visible =
            self.state.recompute(self.repository.skip_min_duration());

        if visible != self.shown {
            log::debug!(
                "skip prompt {} (position {}, target {})",
                if visible { "shown" } else { "hidden" },
                self.state.current_position(),
                self.state.target_position()
            );
            self.shown = visible;
            self.fade.set_shown(visible);
        }

        let key = AutoHideKey {
            skip_ui_enabled: self.state.is_skip_ui_enabled(),
            target_position: self.state.target_position(),
        };

        match self.auto_hide.reconcile(visible, key) {
            AutoHideAction::Arm { generation, after } => {
                self.abort_pending_hide();
                let (task, handle) = Task::perform(
                    auto_hide::wait(after, generation),
                    SkipOverlayMessage::AutoHideElapsed,
                )
                .abortable();
                self.pending_hide = Some(handle);
                task
            }
            AutoHideAction::Cancel => {
                self.abort_pending_hide();
                Task::none()
            }
            AutoHideAction::Keep => Task::none(),
        }
    }

    /// Animation frames while a fade is running.
    pub fn subscription(&self) -> Subscription<SkipOverlayMessage> {
        if self.fade.is_transitioning() {
            iced::time::every(ANIMATION_FRAME)
                .map(|_| SkipOverlayMessage::AnimationTick)
        } else {
            Subscription::none()
        }
    }

    pub fn view<'a, M: 'a>(&'a self) -> Element<'a, M> {
        view::skip_overlay_content(
            self.state.is_visible(),
            self.fade.opacity(),
            &self.appearance,
        )
    }

    fn expire_auto_hide(&mut self, generation: u64) -> bool {
        let current = self.auto_hide.expire(generation);
        if current {
            self.pending_hide = None;
        }
        current
    }

    fn tick_fade(&mut self) {
        self.fade.update();
    }

    fn abort_pending_hide(&mut self) {
        if let Some(handle) = self.pending_hide.take() {
            handle.abort();
        }
    }
}

impl Drop for SkipOverlay {
    fn drop(&mut self) {
        self.abort_pending_hide();
    }
}
