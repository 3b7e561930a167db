use anyhow::Context;
use cuepoint_config::ConfigLoader;
use cuepoint_player::app::{self, DemoConfig};

use env_logger::{Builder, Target};
use log::LevelFilter;

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("cuepoint_player", LevelFilter::Debug)
        .init();
}

fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let load = ConfigLoader::from_env()
        .load()
        .context("failed to load skip overlay config")?;
    log::info!("skip overlay config loaded from {:?}", load.source);

    let config = DemoConfig::from_config(&load.config)
        .context("failed to resolve skip overlay appearance")?;

    app::application(config)
        .run()
        .context("player exited with an error")
}
