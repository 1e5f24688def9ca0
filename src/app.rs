use crate::buffer::Color;
use crate::palette::DEFAULT_BRUSH_SIZE;
use crate::panels;
use crate::session::{DrawingSession, Tool};

/// Session settings that survive restarts. The buffer and history are
/// deliberately transient; only the tool choices come back.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    pub tool: Tool,
    pub color: Color,
    pub brush_size: u32,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            tool: Tool::Brush,
            color: Color::BLACK,
            brush_size: DEFAULT_BRUSH_SIZE,
        }
    }
}

/// We derive Deserialize/Serialize so we can persist app state on shutdown.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct RasterboardApp {
    settings: SessionSettings,
    // The live canvas holds megabytes of pixels and snapshots; it starts
    // fresh every run.
    #[serde(skip)]
    session: DrawingSession,
    #[serde(skip)]
    texture: Option<egui::TextureHandle>,
    #[serde(skip)]
    canvas_dirty: bool,
    #[serde(skip)]
    status: Option<String>,
}

impl Default for RasterboardApp {
    fn default() -> Self {
        Self {
            settings: SessionSettings::default(),
            session: DrawingSession::new(800, 600),
            texture: None,
            canvas_dirty: true,
            status: None,
        }
    }
}

impl RasterboardApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app: Self = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        // Color first: set_color switches an active eraser back to brush.
        app.session.set_color(app.settings.color);
        app.session.set_tool(app.settings.tool);
        app.session.set_brush_size(app.settings.brush_size);
        app
    }

    pub fn session(&self) -> &DrawingSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut DrawingSession {
        &mut self.session
    }

    /// Flags the canvas texture for re-upload on the next frame.
    pub fn mark_canvas_dirty(&mut self) {
        self.canvas_dirty = true;
    }

    pub fn set_status(&mut self, message: String) {
        self.status = Some(message);
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Re-uploads the canvas texture if the buffer changed since the last
    /// frame, and returns a handle to draw with.
    pub fn canvas_texture(&mut self, ctx: &egui::Context) -> &egui::TextureHandle {
        if self.canvas_dirty || self.texture.is_none() {
            let buffer = self.session.buffer();
            let image = egui::ColorImage::from_rgba_unmultiplied(
                [buffer.width(), buffer.height()],
                buffer.data(),
            );
            match &mut self.texture {
                Some(handle) => handle.set(image, egui::TextureOptions::NEAREST),
                None => {
                    self.texture =
                        Some(ctx.load_texture("canvas", image, egui::TextureOptions::NEAREST));
                }
            }
            self.canvas_dirty = false;
        }
        self.texture.as_ref().expect("texture uploaded above")
    }
}

impl eframe::App for RasterboardApp {
    /// Called by the framework to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.settings = SessionSettings {
            tool: self.session.tool(),
            color: self.session.color(),
            brush_size: self.session.brush_size(),
        };
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::tools_panel(self, ctx);
        panels::canvas_panel(self, ctx);
    }
}
