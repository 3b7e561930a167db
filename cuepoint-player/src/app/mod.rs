use std::sync::Arc;

use iced::{Application, Program as IcedProgram, Settings, Theme};

pub mod demo;

pub use demo::{DemoConfig, DemoMessage, DemoPlayer};

/// Build the demo player application around the resolved overlay settings.
pub fn application(
    config: DemoConfig,
) -> Application<
    impl IcedProgram<State = DemoPlayer, Message = DemoMessage, Theme = Theme>,
> {
    let config = Arc::new(config);

    let boot_config = Arc::clone(&config);
    iced::application(
        move || DemoPlayer::new(&boot_config),
        demo::update,
        demo::view,
    )
    .settings(default_settings())
    .title("Cuepoint Player")
    .subscription(demo::subscription)
    .theme(app_theme)
    .window(iced::window::Settings {
        size: iced::Size::new(1280.0, 720.0),
        resizable: true,
        decorations: true,
        ..Default::default()
    })
}

fn default_settings() -> Settings {
    let mut settings = Settings::default();
    settings.id = Some("cuepoint-player".to_string());
    settings.antialiasing = true;
    settings
}

fn app_theme(_: &DemoPlayer) -> Theme {
    Theme::Dark
}
