//! Timing constants owned by the segment repository.

use std::time::Duration;

/// Minimum time that must remain before a segment ends for a skip to be
/// worth offering.
pub const SKIP_MIN_DURATION: Duration = Duration::from_secs(1);

/// How long the ask-to-skip prompt stays up without further interaction.
pub const ASK_TO_SKIP_AUTO_HIDE_DURATION: Duration = Duration::from_secs(8);
