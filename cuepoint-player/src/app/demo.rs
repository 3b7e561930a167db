//! Simulated player screen hosting the skip prompt.
//!
//! The playhead advances on a timer over a fixed-length item with an intro
//! and a credits segment. Entering a segment offers its end to the overlay;
//! pressing Skip seeks there.

use std::sync::Arc;
use std::time::Duration;

use cuepoint_config::{ConfigLoadError, SkipOverlayConfig};
use cuepoint_model::{MediaSegment, MediaSegmentType, Millis, ModelResult};
use iced::widget::{button, column, container, row, stack, text};
use iced::{Alignment, Background, Color, Element, Length, Subscription, Task};

use crate::domains::skip_overlay::view::SkipOverlayAppearance;
use crate::domains::skip_overlay::{SkipOverlay, SkipOverlayMessage};
use crate::infra::{ConfiguredSegmentRepository, SegmentRepository};

const TICK: Duration = Duration::from_millis(250);
const DEMO_LENGTH: Millis = Millis(300_000);

/// Overlay settings resolved once at startup so booting cannot fail.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub appearance: SkipOverlayAppearance,
    pub repository: Arc<ConfiguredSegmentRepository>,
    pub fade: Duration,
    pub skip_ui_enabled: bool,
}

impl DemoConfig {
    pub fn from_config(
        config: &SkipOverlayConfig,
    ) -> Result<Self, ConfigLoadError> {
        config.validate()?;
        Ok(Self {
            appearance: SkipOverlayAppearance::from_config(config)?,
            repository: Arc::new(ConfiguredSegmentRepository::from_config(
                config,
            )),
            fade: config.fade(),
            skip_ui_enabled: config.enabled,
        })
    }
}

#[derive(Debug, Clone)]
pub enum DemoMessage {
    Tick,
    TogglePlayback,
    ToggleSkipUi,
    SkipSegment,
    Restart,
    Overlay(SkipOverlayMessage),
}

#[derive(Debug)]
pub struct DemoPlayer {
    pub position: Millis,
    pub length: Millis,
    pub playing: bool,
    pub segments: Vec<MediaSegment>,
    pub overlay: SkipOverlay,
}

impl DemoPlayer {
    pub fn new(config: &DemoConfig) -> Self {
        let repository: Arc<dyn SegmentRepository> =
            config.repository.clone();
        let overlay = SkipOverlay::new(
            repository,
            config.appearance.clone(),
            config.fade,
            config.skip_ui_enabled,
        );

        let segments = demo_segments().unwrap_or_else(|err| {
            log::error!("demo segments rejected: {err}");
            Vec::new()
        });

        Self {
            position: Millis::ZERO,
            length: DEMO_LENGTH,
            playing: true,
            segments,
            overlay,
        }
    }

    /// Move the playhead by `step`, offering any segment it just entered.
    pub fn advance(&mut self, step: Duration) -> Task<DemoMessage> {
        let previous = self.position;
        self.position = self
            .position
            .saturating_add(Millis::from_duration(step))
            .min(self.length);

        if self.position >= self.length {
            log::info!("end of media reached");
            self.playing = false;
        }

        let mut tasks = vec![self.send(SkipOverlayMessage::SetCurrentPosition(
            self.position,
        ))];

        let entered = self
            .segments
            .iter()
            .copied()
            .find(|segment| {
                segment.contains(self.position) && !segment.contains(previous)
            });
        if let Some(segment) = entered {
            tasks.push(self.send(SkipOverlayMessage::OfferSegment(segment)));
        }

        Task::batch(tasks)
    }

    /// Jump past the offered segment. No-op while the prompt is hidden.
    pub fn skip(&mut self) -> Task<DemoMessage> {
        if !self.overlay.is_visible() {
            return Task::none();
        }

        let target = self.overlay.target_position();
        log::info!("skipping from {} to {}", self.position, target);
        self.position = target.min(self.length);

        Task::batch([
            self.send(SkipOverlayMessage::SetTargetPosition(Millis::ZERO)),
            self.send(SkipOverlayMessage::SetCurrentPosition(self.position)),
        ])
    }

    fn send(&mut self, message: SkipOverlayMessage) -> Task<DemoMessage> {
        self.overlay.update(message).map(DemoMessage::Overlay)
    }

    fn active_segment(&self) -> Option<&MediaSegment> {
        self.segments
            .iter()
            .find(|segment| segment.contains(self.position))
    }
}

fn demo_segments() -> ModelResult<Vec<MediaSegment>> {
    Ok(vec![
        MediaSegment::new(MediaSegmentType::Intro, 10_000, 55_000)?,
        MediaSegment::new(MediaSegmentType::Outro, 270_000, 300_000)?,
    ])
}

pub fn update(
    state: &mut DemoPlayer,
    message: DemoMessage,
) -> Task<DemoMessage> {
    match message {
        DemoMessage::Tick => {
            if state.playing {
                state.advance(TICK)
            } else {
                Task::none()
            }
        }
        DemoMessage::TogglePlayback => {
            state.playing = !state.playing && state.position < state.length;
            Task::none()
        }
        DemoMessage::ToggleSkipUi => {
            let enabled = !state.overlay.is_skip_ui_enabled();
            state.send(SkipOverlayMessage::SetSkipUiEnabled(enabled))
        }
        DemoMessage::SkipSegment => state.skip(),
        DemoMessage::Restart => {
            state.position = Millis::ZERO;
            state.playing = true;
            Task::batch([
                state.send(SkipOverlayMessage::SetTargetPosition(
                    Millis::ZERO,
                )),
                state.send(SkipOverlayMessage::SetCurrentPosition(
                    Millis::ZERO,
                )),
            ])
        }
        DemoMessage::Overlay(message) => {
            state.overlay.update(message).map(DemoMessage::Overlay)
        }
    }
}

pub fn view(state: &DemoPlayer) -> Element<'_, DemoMessage> {
    let segment_line = match state.active_segment() {
        Some(segment) => format!(
            "In {} segment, {} left",
            segment.kind,
            format_clock(segment.remaining_from(state.position))
        ),
        None => "No segment".to_string(),
    };

    let controls = row![
        button(text(if state.playing { "Pause" } else { "Play" }))
            .on_press(DemoMessage::TogglePlayback),
        button(text(if state.overlay.is_skip_ui_enabled() {
            "Skip UI: on"
        } else {
            "Skip UI: off"
        }))
        .on_press(DemoMessage::ToggleSkipUi),
        button(text("Skip")).on_press_maybe(
            state
                .overlay
                .is_visible()
                .then_some(DemoMessage::SkipSegment),
        ),
        button(text("Restart")).on_press(DemoMessage::Restart),
    ]
    .spacing(12);

    let screen = container(
        column![
            text(format!(
                "{} / {}",
                format_clock(state.position),
                format_clock(state.length)
            ))
            .size(28),
            text(segment_line).size(14),
            controls,
        ]
        .spacing(12)
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Alignment::Center)
    .align_y(Alignment::Center)
    .style(|_| container::Style {
        background: Some(Background::Color(Color::BLACK)),
        text_color: Some(Color::WHITE),
        ..Default::default()
    });

    stack![screen, state.overlay.view()].into()
}

pub fn subscription(state: &DemoPlayer) -> Subscription<DemoMessage> {
    let mut subscriptions =
        vec![state.overlay.subscription().map(DemoMessage::Overlay)];

    if state.playing {
        subscriptions
            .push(iced::time::every(TICK).map(|_| DemoMessage::Tick));
    }

    Subscription::batch(subscriptions)
}

/// `m:ss`, negative offsets clamp to zero.
pub fn format_clock(position: Millis) -> String {
    let total_secs = position.as_i64().max(0) / 1_000;
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}
