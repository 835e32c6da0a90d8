use egui::{Pos2, Rect, Sense, Stroke, Ui};
use log::debug;
use mad_circle::Point2D;

use crate::model::Model;

pub fn render_canvas(model: &mut Model, ui: &mut Ui) {
    let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
    let painter = ui.painter_at(rect);

    let stroke = Stroke::new(model.config.arrow_width, model.arrow_colour);
    for arrow in model.arrows.iter() {
        for (from, to) in arrow.lines() {
            painter.line_segment([to_screen(rect, from), to_screen(rect, to)], stroke);
        }
    }

    painter.circle_filled(
        to_screen(rect, model.marker_position),
        model.config.marker_diameter / 2.,
        model.marker_colour,
    );

    // A touch "ends" on release, whether or not it moved in between
    if response.clicked() || response.drag_released() {
        let released_at = response
            .interact_pointer_pos()
            .or_else(|| ui.input(|i| i.pointer.interact_pos()));
        if let Some(pos) = released_at.filter(|p| rect.contains(*p)) {
            let point = to_view(rect, pos);
            debug!("Touch ended at {:?}", point);
            model.systems.handle_touch_ended(point);
        }
    }
}

/// View coordinates have their origin at the top-left of the canvas, y down
fn to_screen(rect: Rect, (x, y): Point2D) -> Pos2 {
    rect.min + egui::vec2(x, y)
}

fn to_view(rect: Rect, pos: Pos2) -> Point2D {
    let v = pos - rect.min;
    (v.x, v.y)
}
