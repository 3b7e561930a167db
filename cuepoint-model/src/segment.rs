use std::fmt::{self, Display};
use std::str::FromStr;

use crate::error::{ModelError, Result};
use crate::position::Millis;

/// Kind of skippable range within a media item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MediaSegmentType {
    #[default]
    Unknown,
    Commercial,
    Preview,
    Recap,
    /// End credits
    Outro,
    Intro,
}

impl MediaSegmentType {
    pub const ALL: [MediaSegmentType; 6] = [
        MediaSegmentType::Unknown,
        MediaSegmentType::Commercial,
        MediaSegmentType::Preview,
        MediaSegmentType::Recap,
        MediaSegmentType::Outro,
        MediaSegmentType::Intro,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaSegmentType::Unknown => "unknown",
            MediaSegmentType::Commercial => "commercial",
            MediaSegmentType::Preview => "preview",
            MediaSegmentType::Recap => "recap",
            MediaSegmentType::Outro => "outro",
            MediaSegmentType::Intro => "intro",
        }
    }
}

impl Display for MediaSegmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaSegmentType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase();
        MediaSegmentType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| ModelError::UnknownSegmentType(s.to_string()))
    }
}

/// A skippable time range, `[start, end)`, inside a media item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaSegment {
    pub kind: MediaSegmentType,
    pub start: Millis,
    pub end: Millis,
}

impl MediaSegment {
    pub fn new(
        kind: MediaSegmentType,
        start: impl Into<Millis>,
        end: impl Into<Millis>,
    ) -> Result<Self> {
        let (start, end) = (start.into(), end.into());
        if end < start {
            return Err(ModelError::InvalidSegment { start, end });
        }
        Ok(Self { kind, start, end })
    }

    pub fn contains(&self, position: Millis) -> bool {
        position >= self.start && position < self.end
    }

    /// Time left until the segment ends, measured from `position`.
    pub fn remaining_from(&self, position: Millis) -> Millis {
        self.end.saturating_sub(position)
    }
}
