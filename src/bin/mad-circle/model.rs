use std::time::{SystemTime, UNIX_EPOCH};

use egui::Color32;
use log::{info, warn};
use mad_circle::{
    Point2D,
    app_config::{AppConfig, parse_hex_colour},
    geometry_utils::ArrowShape,
    systems::{Effect, Systems},
};

use crate::ui::render_ui;

pub struct Model {
    pub config: AppConfig,
    pub systems: Systems,
    /// Position of the speed slider; further right is faster
    pub slider_value: f32,
    pub marker_colour: Color32,
    pub arrow_colour: Color32,
    /// What is currently drawn, as reported through `Effect`s
    pub marker_position: Point2D,
    pub arrows: Vec<ArrowShape>,
    last_updated: SystemTime,
}

impl Model {
    pub fn new(config: AppConfig) -> Self {
        let systems = Systems::new(&config);

        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .subsec_nanos() as usize;
        let marker_colour = colour_with_opacity(
            config.pick_from_palette(seed).unwrap_or("#ffcc00"),
            config.marker_opacity,
        );
        let arrow_colour = colour_with_opacity(&config.arrow_colour, config.arrow_opacity);

        info!("Mad Circle started OK");

        Model {
            slider_value: 1. - systems.touch_queue.speed().value(),
            marker_position: systems.marker_position(),
            arrows: Vec::new(),
            systems,
            config,
            marker_colour,
            arrow_colour,
            last_updated: SystemTime::now(),
        }
    }

    pub fn apply_effects(&mut self) {
        for effect in self.systems.drain_effects() {
            match effect {
                Effect::MarkerPositionChanged(p) => self.marker_position = p,
                Effect::ArrowAdded(arrow) => self.arrows.push(arrow),
                Effect::ArrowsCleared => self.arrows.clear(),
            }
        }
    }
}

fn colour_with_opacity(hex: &str, opacity: f32) -> Color32 {
    let [r, g, b] = parse_hex_colour(hex).unwrap_or_else(|e| {
        warn!("{}; falling back to grey", e);
        [128, 128, 128]
    });
    Color32::from_rgba_unmultiplied(r, g, b, (opacity.clamp(0., 1.) * 255.) as u8)
}

impl eframe::App for Model {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let elapsed = self.last_updated.elapsed().unwrap_or_default();
        self.last_updated = SystemTime::now();

        self.systems.update(elapsed);
        render_ui(ctx, self);
        self.apply_effects();

        if self.systems.is_animating() {
            ctx.request_repaint();
        }
    }
}
