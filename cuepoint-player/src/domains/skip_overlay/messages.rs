use cuepoint_model::{MediaSegment, Millis};

/// Inputs the hosting player screen sends to the skip prompt.
#[derive(Clone)]
pub enum SkipOverlayMessage {
    SetVisible(bool),
    SetCurrentPosition(Millis),
    SetTargetPosition(Millis),
    SetSkipUiEnabled(bool),
    /// Offer `segment.end` as the skip target.
    OfferSegment(MediaSegment),
    /// A pending auto-hide wait finished; carries its generation.
    AutoHideElapsed(u64),
    AnimationTick,
}

impl SkipOverlayMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetVisible(_) => "SkipOverlay::SetVisible",
            Self::SetCurrentPosition(_) => "SkipOverlay::SetCurrentPosition",
            Self::SetTargetPosition(_) => "SkipOverlay::SetTargetPosition",
            Self::SetSkipUiEnabled(_) => "SkipOverlay::SetSkipUiEnabled",
            Self::OfferSegment(_) => "SkipOverlay::OfferSegment",
            Self::AutoHideElapsed(_) => "SkipOverlay::AutoHideElapsed",
            Self::AnimationTick => "SkipOverlay::AnimationTick",
        }
    }
}

impl std::fmt::Debug for SkipOverlayMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SetVisible(visible) => {
                write!(f, "{}({visible})", self.name())
            }
            Self::SetCurrentPosition(position)
            | Self::SetTargetPosition(position) => {
                write!(f, "{}({position})", self.name())
            }
            Self::SetSkipUiEnabled(enabled) => {
                write!(f, "{}({enabled})", self.name())
            }
            Self::OfferSegment(segment) => write!(
                f,
                "{}({} {}..{})",
                self.name(),
                segment.kind,
                segment.start,
                segment.end
            ),
            Self::AutoHideElapsed(generation) => {
                write!(f, "{}(#{generation})", self.name())
            }
            Self::AnimationTick => write!(f, "{}", self.name()),
        }
    }
}
