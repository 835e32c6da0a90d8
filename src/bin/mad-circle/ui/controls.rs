use egui::{Color32, RichText, Slider, Ui};

use crate::model::Model;

use super::SPACING_AMOUNT;

pub fn render_controls(model: &mut Model, ui: &mut Ui) {
    ui.horizontal(|ui| {
        if ui
            .button(RichText::new("Clear").color(Color32::GRAY))
            .clicked()
        {
            model.systems.handle_clear_requested();
        }

        ui.add_space(SPACING_AMOUNT);

        // The slider reads "faster to the right", whereas Speed is a duration
        if ui
            .add(Slider::new(&mut model.slider_value, 0.0..=1.0).text("Speed"))
            .changed()
        {
            model.systems.handle_speed_changed(1. - model.slider_value);
        }
    });
}
