use anyhow::{Result, anyhow};
use colorsys::Rgb;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::Point2D;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    // -------- VIEW
    pub view_width: f32,
    pub view_height: f32,

    // -------- MARKER
    pub marker_diameter: f32,
    pub marker_opacity: f32,

    /// Hex colours; the marker (and the speed slider) get one of these each session
    pub palette: Vec<String>,

    // -------- TRAJECTORY ARROWS
    pub arrow_colour: String,
    pub arrow_opacity: f32,
    pub arrow_width: f32,

    /// Length of each of the two lines making up an arrowhead
    pub arrow_barb_length: f32,

    /// Angle (degrees) between each barb and the reversed shaft
    pub arrow_barb_angle: f32,

    // -------- ANIMATION
    /// Seconds per segment, in the range [0,1]; 1 is the slowest
    pub initial_speed: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            view_width: 390.,
            view_height: 844.,
            marker_diameter: 50.,
            marker_opacity: 0.5,
            palette: vec!["#ffcc00".into(), "#007aff".into(), "#34c759".into()],
            arrow_colour: "#007aff".into(),
            arrow_opacity: 0.3,
            arrow_width: 1.,
            arrow_barb_length: 10.,
            arrow_barb_angle: 45.,
            initial_speed: 1.,
        }
    }
}

impl AppConfig {
    pub fn view_centre(&self) -> Point2D {
        (self.view_width / 2., self.view_height / 2.)
    }

    pub fn pick_from_palette(&self, index: usize) -> Option<&str> {
        if self.palette.is_empty() {
            None
        } else {
            Some(&self.palette[index % self.palette.len()])
        }
    }
}

pub fn parse_hex_colour(hex: &str) -> Result<[u8; 3]> {
    match Rgb::from_hex_str(hex) {
        Ok(rgb) => Ok(rgb.into()),
        Err(e) => Err(anyhow!("Invalid hex colour \"{}\": {:?}", hex, e)),
    }
}

pub fn load_config_from_file(config_file_path: &str) -> Result<AppConfig> {
    match std::fs::read_to_string(config_file_path) {
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!(
                "Config file not found at {}; using defaults",
                &config_file_path
            );
            Ok(AppConfig::default())
        }
        Err(e) => Err(anyhow!(
            "Failed to load config from \"{}\": {}",
            config_file_path,
            e
        )),
        Ok(s) => {
            info!("Loaded config OK from \"{}\"", config_file_path);
            match serde_json::from_str::<AppConfig>(&s) {
                Ok(loaded_config) => {
                    debug!("Config parsed data from file: {:?}", &loaded_config);
                    Ok(loaded_config)
                }
                Err(e) => Err(anyhow!("Failed to parse config data: {}", e)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.view_centre(), (195., 422.));
        assert_eq!(config.initial_speed, 1.);
        assert_eq!(config.arrow_barb_angle, 45.);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "initialSpeed": 0.25, "arrowBarbLength": 12 }"#).unwrap();
        assert_eq!(config.initial_speed, 0.25);
        assert_eq!(config.arrow_barb_length, 12.);
        assert_eq!(config.marker_diameter, 50.);
    }

    #[test]
    fn test_palette_wraps() {
        let config = AppConfig::default();
        assert_eq!(config.pick_from_palette(0), Some("#ffcc00"));
        assert_eq!(config.pick_from_palette(4), Some("#007aff"));

        let empty = AppConfig {
            palette: Vec::new(),
            ..AppConfig::default()
        };
        assert_eq!(empty.pick_from_palette(1), None);
    }

    #[test]
    fn test_parse_hex_colour() {
        assert_eq!(parse_hex_colour("#ff8000").unwrap(), [255, 128, 0]);
        assert!(parse_hex_colour("not a colour").is_err());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = load_config_from_file("./definitely/not/here.json").unwrap();
        assert_eq!(config.marker_opacity, 0.5);
    }

    #[test]
    fn test_bad_file_is_an_error() {
        let path = std::env::temp_dir().join("mad-circle-bad-config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(load_config_from_file(path.to_str().unwrap()).is_err());
        std::fs::remove_file(path).ok();
    }
}
