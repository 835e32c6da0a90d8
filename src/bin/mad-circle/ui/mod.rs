mod canvas;
mod controls;
mod info;

use canvas::render_canvas;
use controls::render_controls;
use info::render_info;

use crate::model::Model;

pub const SPACING_AMOUNT: f32 = 16.0;
pub const INFO_PANEL_WIDTH: f32 = 220.0;
pub const CONTROLS_HEIGHT: f32 = 48.0;

pub fn render_ui(ctx: &egui::Context, model: &mut Model) {
    egui::TopBottomPanel::top("controls").show(ctx, |ui| {
        render_controls(model, ui);
    });

    egui::SidePanel::right("info")
        .default_width(INFO_PANEL_WIDTH)
        .show(ctx, |ui| {
            render_info(model, ui);
        });

    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(egui::Color32::WHITE))
        .show(ctx, |ui| {
            render_canvas(model, ui);
        });
}
