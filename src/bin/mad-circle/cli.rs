use clap::{Parser, command};

const CONFIG_FILE_PATH: &str = "./madCircle.json";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Where to load view, marker and arrow settings
    #[arg(long = "config", default_value_t=String::from(CONFIG_FILE_PATH))]
    pub config_path: String,

    #[arg(long = "loglevel",default_value_t=String::from("info"))]
    pub log_level: String,
}
