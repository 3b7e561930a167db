use std::fmt;
use std::time::Duration;

use cuepoint_config::SkipOverlayConfig;

/// Timing policy supplied by the segment repository.
///
/// Which segments exist and what happens when one is skipped live elsewhere;
/// the overlay only needs these two durations.
pub trait SegmentRepository: fmt::Debug + Send + Sync {
    /// Minimum time left in a segment for a prompt to be offered.
    fn skip_min_duration(&self) -> Duration;

    /// How long the prompt lingers before hiding itself.
    fn ask_to_skip_auto_hide_duration(&self) -> Duration;
}

/// Timings taken from [`SkipOverlayConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfiguredSegmentRepository {
    skip_min_duration: Duration,
    auto_hide_duration: Duration,
}

impl ConfiguredSegmentRepository {
    pub fn new(
        skip_min_duration: Duration,
        auto_hide_duration: Duration,
    ) -> Self {
        Self {
            skip_min_duration,
            auto_hide_duration,
        }
    }

    pub fn from_config(config: &SkipOverlayConfig) -> Self {
        Self::new(config.min_remaining(), config.auto_hide())
    }
}

impl SegmentRepository for ConfiguredSegmentRepository {
    fn skip_min_duration(&self) -> Duration {
        self.skip_min_duration
    }

    fn ask_to_skip_auto_hide_duration(&self) -> Duration {
        self.auto_hide_duration
    }
}
