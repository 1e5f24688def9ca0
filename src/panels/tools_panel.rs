use crate::app::RasterboardApp;
use crate::buffer::Color;
use crate::export;
use crate::palette::{MAX_BRUSH_SIZE, PRESET_COLORS};
use crate::session::Tool;

pub fn tools_panel(app: &mut RasterboardApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.heading("Tools");
            ui.separator();

            for tool in [Tool::Brush, Tool::Eraser, Tool::Bucket] {
                let selected = app.session().tool() == tool;
                if ui.selectable_label(selected, tool.name()).clicked() {
                    log::info!("tool selected from UI: {}", tool.name());
                    app.session_mut().set_tool(tool);
                }
            }

            ui.separator();
            ui.label("Color");
            color_swatches(app, ui);
            color_picker(app, ui);

            ui.separator();
            brush_size_slider(app, ui);

            ui.separator();
            ui.horizontal(|ui| {
                let can_undo = app.session().can_undo();
                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.session_mut().undo();
                    app.mark_canvas_dirty();
                }
                if ui.button("Clear").clicked() {
                    app.session_mut().clear_all();
                    app.mark_canvas_dirty();
                }
            });

            if ui.button("Save PNG").clicked() {
                let path = std::path::PathBuf::from(export::default_filename());
                match export::save_png(app.session().buffer(), &path) {
                    Ok(()) => app.set_status(format!("Saved {}", path.display())),
                    Err(err) => {
                        log::error!("export failed: {err}");
                        app.set_status(format!("Export failed: {err}"));
                    }
                }
            }

            if let Some(status) = app.status() {
                ui.separator();
                ui.label(status.to_owned());
            }
        });
}

fn color_swatches(app: &mut RasterboardApp, ui: &mut egui::Ui) {
    ui.horizontal_wrapped(|ui| {
        for hex in PRESET_COLORS {
            // Presets are compile-time constants; a bad one is a bug in
            // the palette table, so skip it rather than crash.
            let Ok(color) = Color::from_hex(hex) else {
                log::warn!("unparseable preset color {hex}");
                continue;
            };
            let size = egui::vec2(18.0, 18.0);
            let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
            let stroke = if app.session().color() == color {
                egui::Stroke::new(2.0, ui.visuals().strong_text_color())
            } else {
                egui::Stroke::new(1.0, ui.visuals().weak_text_color())
            };
            ui.painter().rect(
                rect,
                3.0,
                egui::Color32::from_rgb(color.r, color.g, color.b),
                stroke,
            );
            if response.clicked() {
                app.session_mut().set_color(color);
            }
        }
    });
}

fn color_picker(app: &mut RasterboardApp, ui: &mut egui::Ui) {
    let current = app.session().color();
    let mut picked = egui::Color32::from_rgb(current.r, current.g, current.b);
    if egui::color_picker::color_edit_button_srgba(
        ui,
        &mut picked,
        egui::color_picker::Alpha::Opaque,
    )
    .changed()
    {
        app.session_mut()
            .set_color(Color::opaque(picked.r(), picked.g(), picked.b()));
    }
}

fn brush_size_slider(app: &mut RasterboardApp, ui: &mut egui::Ui) {
    ui.label("Size");
    ui.add(egui::Slider::new(
        app.session_mut().brush_size_mut(),
        1..=MAX_BRUSH_SIZE,
    ));
}
