//! # Mad Circle
//!
//! Tap (or click) anywhere in the view and the circle moves there, leaving an arrow behind.
//! Taps that arrive while the circle is still moving are queued up and visited in order.
//!
//! Everything interesting lives in the library (`Systems`); this binary only reports
//! touch/speed/clear events into it and draws whatever it reports back.
use clap::Parser;

use cli::Cli;
use env_logger::Env;
use log::{debug, error};
use mad_circle::app_config::load_config_from_file;
use model::Model;

mod cli;
mod model;
mod ui;

fn main() -> Result<(), eframe::Error> {
    let cli = Cli::parse();

    // Initialize the logger from the environment

    env_logger::Builder::from_env(Env::default().default_filter_or(&cli.log_level))
        .filter_module("winit", log::LevelFilter::Warn)
        .filter_module("eframe", log::LevelFilter::Warn)
        .init();

    debug!("Started; args: {:?}", cli);

    let config = match load_config_from_file(&cli.config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("{:#}", e);
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(
            config.view_width + ui::INFO_PANEL_WIDTH,
            config.view_height + ui::CONTROLS_HEIGHT,
        )),
        ..Default::default()
    };
    eframe::run_native(
        "Mad Circle",
        options,
        Box::new(move |_cc| Box::new(Model::new(config))),
    )
}
