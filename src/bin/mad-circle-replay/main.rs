//! Replays a timed touch script against the animation systems, without any window.
//!
//! Script events are delivered from their own thread while the main loop ticks the
//! animation, so both sides share the systems through a single lock. When the script
//! is exhausted and the marker has come to rest, the drawn arrows are printed as JSON.
use std::sync::Arc;
use std::thread;
use std::time::{Duration, SystemTime};

use anyhow::{Result, anyhow};
use clap::Parser;
use cli::Cli;
use env_logger::Env;
use log::{debug, error, info, trace};
use mad_circle::app_config::load_config_from_file;
use mad_circle::script::load_script_from_file;
use mad_circle::systems::{Effect, Systems};

mod cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize the logger from the environment

    env_logger::Builder::from_env(Env::default().default_filter_or(&cli.log_level)).init();

    debug!("Started; args: {:?}", cli);

    let config = load_config_from_file(&cli.config_path)?;
    let script = load_script_from_file(&cli.script_path)?;

    let systems = Systems::new(&config).into_shared();

    let feeder = {
        let systems = Arc::clone(&systems);
        thread::spawn(move || {
            let started = SystemTime::now();
            for event in script {
                let due = Duration::from_millis(event.at_ms());
                let elapsed = started.elapsed().unwrap_or_default();
                if due > elapsed {
                    thread::sleep(due - elapsed);
                }
                debug!("Dispatch {:?}", event);
                match systems.lock() {
                    Ok(mut s) => event.dispatch(&mut s),
                    Err(_) => {
                        error!("Systems lock poisoned; stop feeding script");
                        return;
                    }
                }
            }
        })
    };

    let tick_interval = Duration::from_millis(cli.tick_ms);
    let mut last_updated = SystemTime::now();

    loop {
        let mut work_done = false;

        let elapsed = last_updated.elapsed().unwrap_or_default();
        if elapsed >= tick_interval {
            work_done = true;
            last_updated = SystemTime::now();

            let mut s = systems
                .lock()
                .map_err(|_| anyhow!("systems lock poisoned"))?;
            s.update(elapsed);

            for effect in s.drain_effects() {
                match effect {
                    Effect::MarkerPositionChanged(p) => trace!("Marker at {:?}", p),
                    Effect::ArrowAdded(arrow) => {
                        info!("Arrow {:?} -> {:?}", arrow.start, arrow.end)
                    }
                    Effect::ArrowsCleared => info!("Arrows cleared"),
                }
            }

            if feeder.is_finished() && !s.is_animating() {
                break;
            }
        }

        if !work_done {
            thread::sleep(Duration::from_millis(1));
        }
    }

    feeder
        .join()
        .map_err(|_| anyhow!("script feeder thread panicked"))?;

    let s = systems
        .lock()
        .map_err(|_| anyhow!("systems lock poisoned"))?;
    info!(
        "Replay finished; marker at {:?}, {} arrows drawn",
        s.marker_position(),
        s.trajectory.len()
    );
    println!("{}", serde_json::to_string_pretty(s.trajectory.arrows())?);

    Ok(())
}
