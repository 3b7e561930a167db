//! Auto-hide timer for the skip prompt.
//!
//! The timer is keyed by `(skip_ui_enabled, target_position)`. While the prompt
//! is visible, a change of key replaces the pending wait; a hidden prompt has
//! no pending wait. Every armed wait carries a generation so an expiry that
//! raced a re-arm is recognised as stale and dropped.

use std::future::Future;
use std::time::Duration;

use cuepoint_model::Millis;

/// Values whose change restarts the wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoHideKey {
    pub skip_ui_enabled: bool,
    pub target_position: Millis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoHidePhase {
    #[default]
    Idle,
    Armed { key: AutoHideKey, generation: u64 },
}

/// What the host must do with its pending wait after a reconcile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoHideAction {
    /// Drop any pending wait and start a new one.
    Arm { generation: u64, after: Duration },
    /// Drop any pending wait.
    Cancel,
    /// Leave things as they are.
    Keep,
}

#[derive(Debug, Clone)]
pub struct AutoHideTimer {
    phase: AutoHidePhase,
    next_generation: u64,
    duration: Duration,
}

impl AutoHideTimer {
    pub fn new(duration: Duration) -> Self {
        Self {
            phase: AutoHidePhase::Idle,
            next_generation: 0,
            duration,
        }
    }

    pub fn phase(&self) -> AutoHidePhase {
        self.phase
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.phase, AutoHidePhase::Armed { .. })
    }

    /// Bring the timer in line with the latest derived visibility.
    pub fn reconcile(
        &mut self,
        visible: bool,
        key: AutoHideKey,
    ) -> AutoHideAction {
        match (visible, self.phase) {
            (false, AutoHidePhase::Idle) => AutoHideAction::Keep,
            (false, AutoHidePhase::Armed { generation, .. }) => {
                log::debug!("auto-hide #{generation} cancelled, prompt hidden");
                self.phase = AutoHidePhase::Idle;
                AutoHideAction::Cancel
            }
            (true, AutoHidePhase::Armed { key: armed, .. }) if armed == key => {
                AutoHideAction::Keep
            }
            (true, _) => {
                let generation = self.next_generation;
                self.next_generation = self.next_generation.wrapping_add(1);
                self.phase = AutoHidePhase::Armed { key, generation };
                log::debug!(
                    "auto-hide #{generation} armed for {:?} (target {})",
                    self.duration,
                    key.target_position
                );
                AutoHideAction::Arm {
                    generation,
                    after: self.duration,
                }
            }
        }
    }

    /// Record that the wait for `generation` finished. Returns `false` for a
    /// wait that was superseded or cancelled.
    pub fn expire(&mut self, generation: u64) -> bool {
        match self.phase {
            AutoHidePhase::Armed {
                generation: armed, ..
            } if armed == generation => {
                self.phase = AutoHidePhase::Idle;
                true
            }
            _ => {
                log::trace!("ignoring stale auto-hide #{generation}");
                false
            }
        }
    }
}

/// The suspended wait itself; resolves to the generation it was armed with.
pub fn wait(duration: Duration, generation: u64) -> impl Future<Output = u64> {
    async move {
        tokio::time::sleep(duration).await;
        generation
    }
}
