use std::sync::OnceLock;

use anyhow::{anyhow, Context};
use clap::Parser;
use nannou::prelude::*;

mod chain;
mod config;
mod console;
mod input;
mod model;
mod ornament;
mod progress;
mod render;
mod scheduler;
mod sequencer;
mod surface;
#[cfg(test)]
mod testing;

use config::{Cli, Config};
use model::Model;

// nannou takes a plain `fn(&App) -> Model`, so the loaded configuration is
// handed over through a static.
static CONFIG: OnceLock<Config> = OnceLock::new();

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    console::init(&cli.log_level);

    let config = Config::load(&cli).context("failed to load configuration")?;
    log::info!(
        "{} ornaments, tick {}, {} ms between frames",
        config.nodes,
        config.tick,
        config.frame_delay_ms
    );
    CONFIG
        .set(config)
        .map_err(|_| anyhow!("configuration loaded twice"))?;

    nannou::app(model).run();
    Ok(())
}

fn model(app: &App) -> Model {
    let config = CONFIG.get_or_init(Config::default);
    app.set_loop_mode(LoopMode::Wait);

    let mut window = app
        .new_window()
        .size(config.window.width, config.window.height)
        .title(config.window.title.clone())
        .view(render::view)
        .event(input::event);
    if config.window.fullscreen {
        window = window.fullscreen();
    }
    if let Err(e) = window.build() {
        log::error!("failed to open window: {:?}", e);
        std::process::exit(1);
    }

    Model::new(config)
}
