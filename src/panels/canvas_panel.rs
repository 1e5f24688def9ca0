use crate::app::RasterboardApp;
use crate::input::InputEvent;

pub fn canvas_panel(app: &mut RasterboardApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let available = ui.available_rect_before_wrap();
        let width = (available.width().floor() as usize).max(1);
        let height = (available.height().floor() as usize).max(1);

        // Follow the panel size 1:1. A real size change resets the canvas
        // and wipes undo history; same-size calls are no-ops.
        if width != app.session().buffer().width() || height != app.session().buffer().height() {
            app.session_mut().resize(width, height);
            app.mark_canvas_dirty();
        }

        let (response, painter) = ui.allocate_painter(
            egui::vec2(width as f32, height as f32),
            egui::Sense::drag(),
        );

        for event in pointer_events(&response) {
            app.session_mut().dispatch(event);
            app.mark_canvas_dirty();
        }

        let texture = app.canvas_texture(ctx);
        painter.image(
            texture.id(),
            response.rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );
    });
}

/// Translates this frame's drag state into buffer-local pointer events,
/// preserving arrival order.
fn pointer_events(response: &egui::Response) -> Vec<InputEvent> {
    let mut events = Vec::new();
    if let Some(pos) = response.interact_pointer_pos() {
        let local = pos - response.rect.min;
        let (x, y) = (local.x.floor() as i32, local.y.floor() as i32);
        if response.drag_started() {
            events.push(InputEvent::PointerDown { x, y });
        } else if response.dragged() {
            events.push(InputEvent::PointerMove { x, y });
        }
    }
    if response.drag_stopped() {
        events.push(InputEvent::PointerUp);
    }
    events
}
