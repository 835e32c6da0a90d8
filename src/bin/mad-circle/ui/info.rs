use egui::{Grid, Ui};
use mad_circle::systems::touch_queue::CoordinatorState;

use crate::model::Model;

pub fn render_info(model: &mut Model, ui: &mut Ui) {
    ui.heading("Marker");

    Grid::new("marker_grid").show(ui, |ui| {
        ui.label("State:");
        ui.label(match model.systems.state() {
            CoordinatorState::Idle => "idle",
            CoordinatorState::Animating => "animating",
        });
        ui.end_row();

        let (x, y) = model.marker_position;
        ui.label("Position:");
        ui.label(format!("{:.0}, {:.0}", x, y));
        ui.end_row();

        ui.label("Segment duration:");
        ui.label(format!("{:.2}s", model.systems.touch_queue.speed().value()));
        ui.end_row();

        ui.label("Queued targets:");
        ui.label(format!("{}", model.systems.touch_queue.pending_count()));
        ui.end_row();
    });

    ui.separator();
    ui.heading("Trajectory");

    let path_length: f32 = model.arrows.iter().map(|a| a.length()).sum();

    Grid::new("trajectory_grid").show(ui, |ui| {
        ui.label("Arrows:");
        ui.label(format!("{}", model.arrows.len()));
        ui.end_row();

        ui.label("Path length:");
        ui.label(format!("{:.0}", path_length));
        ui.end_row();
    });
}
