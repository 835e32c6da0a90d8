use clap::{Parser, command};

// Some defaults; some of which can be overriden via CLI args
const CONFIG_FILE_PATH: &str = "./madCircle.json";
const SCRIPT_FILE_PATH: &str = "./touches.json";
const TICK_INTERVAL_MS: u64 = 16;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Where to load view, marker and arrow settings
    #[arg(long = "config", default_value_t=String::from(CONFIG_FILE_PATH))]
    pub config_path: String,

    /// Timed touch/speed/clear events to replay
    #[arg(long = "script", default_value_t=String::from(SCRIPT_FILE_PATH))]
    pub script_path: String,

    /// How often (ms) to advance the animation
    #[arg(long = "tickMs", default_value_t = TICK_INTERVAL_MS)]
    pub tick_ms: u64,

    #[arg(long = "loglevel",default_value_t=String::from("info"))]
    pub log_level: String,
}
