use std::fmt::{self, Display};
use std::time::Duration;

/// Playback offset in milliseconds.
///
/// Signed so the player's position arithmetic can pass through values it
/// produced without clamping; a negative offset is nonsensical but harmless.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Millis(pub i64);

impl Millis {
    pub const ZERO: Millis = Millis(0);

    pub const fn as_i64(self) -> i64 {
        self.0
    }

    /// Positive offsets mark a live value; zero is the "unset" sentinel.
    pub const fn is_set(self) -> bool {
        self.0 > 0
    }

    pub const fn saturating_sub(self, other: Millis) -> Millis {
        Millis(self.0.saturating_sub(other.0))
    }

    pub const fn saturating_add(self, other: Millis) -> Millis {
        Millis(self.0.saturating_add(other.0))
    }

    /// Lossy for durations beyond `i64::MAX` milliseconds, which saturate.
    pub fn from_duration(duration: Duration) -> Self {
        Millis(i64::try_from(duration.as_millis()).unwrap_or(i64::MAX))
    }
}

impl From<i64> for Millis {
    fn from(value: i64) -> Self {
        Millis(value)
    }
}

impl From<Millis> for i64 {
    fn from(value: Millis) -> Self {
        value.0
    }
}

impl From<Duration> for Millis {
    fn from(value: Duration) -> Self {
        Millis::from_duration(value)
    }
}

impl Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}
