use crate::buffer::{Color, PixelBuffer};
use crate::fill::FloodFillEngine;
use crate::history::HistoryStack;
use crate::input::InputEvent;
use crate::palette::{BACKGROUND, DEFAULT_BRUSH_SIZE};

/// The active drawing tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Tool {
    Brush,
    Eraser,
    Bucket,
}

impl Tool {
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Brush => "Brush",
            Tool::Eraser => "Eraser",
            Tool::Bucket => "Bucket",
        }
    }
}

/// Owns the pixel buffer, the undo history and the transient tool state,
/// and routes input events to strokes or fills.
///
/// Single-threaded by construction: each event is handled to completion
/// before the next one, so the buffer has one writer at a time without
/// any locking.
pub struct DrawingSession {
    buffer: PixelBuffer,
    history: HistoryStack,
    tool: Tool,
    color: Color,
    brush_size: u32,
    /// Last stroke point while the pointer is down, None otherwise.
    stroke_anchor: Option<(i32, i32)>,
}

impl Default for DrawingSession {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

impl DrawingSession {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            buffer: PixelBuffer::new(width, height, BACKGROUND),
            history: HistoryStack::default(),
            tool: Tool::Brush,
            color: Color::BLACK,
            brush_size: DEFAULT_BRUSH_SIZE,
            stroke_anchor: None,
        }
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn brush_size(&self) -> u32 {
        self.brush_size
    }

    pub fn brush_size_mut(&mut self) -> &mut u32 {
        &mut self.brush_size
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn is_stroking(&self) -> bool {
        self.stroke_anchor.is_some()
    }

    /// Handles one pointer event, run to completion.
    pub fn dispatch(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { x, y } => self.pointer_down(x, y),
            InputEvent::PointerMove { x, y } => self.pointer_move(x, y),
            InputEvent::PointerUp => self.pointer_up(),
        }
    }

    fn pointer_down(&mut self, x: i32, y: i32) {
        match self.tool {
            Tool::Bucket => {
                // One fill is one undo unit; no stroke state is entered.
                self.history.save(&self.buffer);
                FloodFillEngine::fill(&mut self.buffer, x, y, self.color);
            }
            Tool::Brush | Tool::Eraser => {
                self.history.save(&self.buffer);
                self.stroke_anchor = Some((x, y));
                // Stamp the initial point so a tap without movement still
                // leaves a mark.
                self.stamp(x, y);
            }
        }
    }

    fn pointer_move(&mut self, x: i32, y: i32) {
        let Some((last_x, last_y)) = self.stroke_anchor else {
            return;
        };
        // The whole stroke is covered by the snapshot taken on pointer
        // down; segments draw directly with no further history traffic.
        self.draw_segment(last_x, last_y, x, y);
        self.stroke_anchor = Some((x, y));
    }

    fn pointer_up(&mut self) {
        self.stroke_anchor = None;
    }

    fn stroke_color(&self) -> Color {
        match self.tool {
            Tool::Eraser => BACKGROUND,
            _ => self.color,
        }
    }

    /// Bresenham walk from (x0, y0) to (x1, y1), stamping the brush at
    /// every visited point.
    fn draw_segment(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);
        loop {
            self.stamp(x, y);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Stamps a filled disc of the brush diameter centered on (cx, cy).
    /// Pixels outside the buffer clip silently.
    fn stamp(&mut self, cx: i32, cy: i32) {
        let color = self.stroke_color();
        let radius = (self.brush_size as i32) / 2;
        if radius == 0 {
            self.buffer.set_pixel(cx, cy, color);
            return;
        }
        let r2 = radius * radius;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= r2 {
                    self.buffer.set_pixel(cx + dx, cy + dy, color);
                }
            }
        }
    }

    /// Restores the state before the last stroke, fill or clear. Empty
    /// history is a silent no-op.
    pub fn undo(&mut self) {
        if !self.history.undo(&mut self.buffer) {
            log::debug!("undo requested with empty history");
        }
    }

    /// Wipes the canvas to the background color as a single undoable
    /// action.
    pub fn clear_all(&mut self) {
        self.history.save(&self.buffer);
        self.buffer.fill_all(BACKGROUND);
    }

    /// Reallocates the canvas. All snapshots are invalidated: their
    /// geometry no longer matches the buffer.
    pub fn resize(&mut self, width: usize, height: usize) {
        if width == self.buffer.width() && height == self.buffer.height() {
            return;
        }
        log::info!("canvas resized to {width}x{height}, history cleared");
        self.buffer.resize(width, height, BACKGROUND);
        self.history.clear();
        self.stroke_anchor = None;
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        // Picking a color is an intent to paint with it.
        if self.tool == Tool::Eraser {
            self.tool = Tool::Brush;
        }
    }

    pub fn set_brush_size(&mut self, size: u32) {
        self.brush_size = size.max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with_size_one(width: usize, height: usize) -> DrawingSession {
        let mut session = DrawingSession::new(width, height);
        session.set_brush_size(1);
        session
    }

    #[test]
    fn tap_leaves_a_mark_and_is_one_undo_unit() {
        let mut session = session_with_size_one(8, 8);
        session.set_color(Color::BLACK);
        session.dispatch(InputEvent::PointerDown { x: 3, y: 3 });
        session.dispatch(InputEvent::PointerUp);
        assert_eq!(session.buffer().pixel(3, 3), Color::BLACK);

        session.undo();
        assert_eq!(session.buffer().pixel(3, 3), BACKGROUND);
    }

    #[test]
    fn a_stroke_is_one_undo_unit_regardless_of_length() {
        let mut session = session_with_size_one(8, 8);
        session.dispatch(InputEvent::PointerDown { x: 0, y: 0 });
        for x in 1..8 {
            session.dispatch(InputEvent::PointerMove { x, y: 0 });
        }
        session.dispatch(InputEvent::PointerUp);
        for x in 0..8 {
            assert_eq!(session.buffer().pixel(x, 0), Color::BLACK);
        }

        session.undo();
        for x in 0..8 {
            assert_eq!(session.buffer().pixel(x, 0), BACKGROUND);
        }
        // Nothing older to undo.
        assert!(!session.can_undo());
    }

    #[test]
    fn segments_connect_between_sparse_move_events() {
        let mut session = session_with_size_one(10, 10);
        session.dispatch(InputEvent::PointerDown { x: 0, y: 0 });
        // A jump of several pixels still produces a continuous line.
        session.dispatch(InputEvent::PointerMove { x: 9, y: 0 });
        session.dispatch(InputEvent::PointerUp);
        for x in 0..10 {
            assert_eq!(session.buffer().pixel(x, 0), Color::BLACK, "gap at x={x}");
        }
    }

    #[test]
    fn moves_without_a_pointer_down_are_ignored() {
        let mut session = session_with_size_one(4, 4);
        session.dispatch(InputEvent::PointerMove { x: 1, y: 1 });
        assert_eq!(session.buffer().pixel(1, 1), BACKGROUND);
        assert!(!session.can_undo());
    }

    #[test]
    fn eraser_paints_background_over_a_stroke() {
        let mut session = session_with_size_one(4, 4);
        session.dispatch(InputEvent::PointerDown { x: 1, y: 1 });
        session.dispatch(InputEvent::PointerUp);
        assert_eq!(session.buffer().pixel(1, 1), Color::BLACK);

        session.set_tool(Tool::Eraser);
        session.dispatch(InputEvent::PointerDown { x: 1, y: 1 });
        session.dispatch(InputEvent::PointerUp);
        assert_eq!(session.buffer().pixel(1, 1), BACKGROUND);
    }

    #[test]
    fn picking_a_color_switches_eraser_back_to_brush() {
        let mut session = DrawingSession::new(4, 4);
        session.set_tool(Tool::Eraser);
        session.set_color(Color::opaque(10, 20, 30));
        assert_eq!(session.tool(), Tool::Brush);
    }

    #[test]
    fn bucket_fills_and_undo_restores() {
        let mut session = DrawingSession::new(4, 4);
        session.set_tool(Tool::Bucket);
        session.set_color(Color::opaque(255, 0, 0));
        session.dispatch(InputEvent::PointerDown { x: 0, y: 0 });
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(session.buffer().pixel(x, y), Color::opaque(255, 0, 0));
            }
        }

        session.undo();
        assert_eq!(session.buffer().pixel(0, 0), BACKGROUND);
    }

    #[test]
    fn clear_all_is_undoable() {
        let mut session = session_with_size_one(4, 4);
        session.dispatch(InputEvent::PointerDown { x: 2, y: 2 });
        session.dispatch(InputEvent::PointerUp);
        session.clear_all();
        assert_eq!(session.buffer().pixel(2, 2), BACKGROUND);

        session.undo();
        assert_eq!(session.buffer().pixel(2, 2), Color::BLACK);
    }

    #[test]
    fn resize_clears_history_and_cancels_strokes() {
        let mut session = session_with_size_one(4, 4);
        session.dispatch(InputEvent::PointerDown { x: 0, y: 0 });
        assert!(session.is_stroking());
        session.resize(8, 6);
        assert!(!session.is_stroking());
        assert!(!session.can_undo());
        assert_eq!(session.buffer().width(), 8);
        assert_eq!(session.buffer().height(), 6);
    }

    #[test]
    fn resize_to_same_dimensions_keeps_history() {
        let mut session = session_with_size_one(4, 4);
        session.dispatch(InputEvent::PointerDown { x: 0, y: 0 });
        session.dispatch(InputEvent::PointerUp);
        assert!(session.can_undo());
        session.resize(4, 4);
        assert!(session.can_undo());
    }

    #[test]
    fn brush_size_has_a_floor_of_one() {
        let mut session = DrawingSession::new(4, 4);
        session.set_brush_size(0);
        assert_eq!(session.brush_size(), 1);
    }

    #[test]
    fn wide_brush_stamps_a_disc() {
        let mut session = DrawingSession::new(16, 16);
        session.set_brush_size(8); // radius 4
        session.dispatch(InputEvent::PointerDown { x: 8, y: 8 });
        session.dispatch(InputEvent::PointerUp);
        assert_eq!(session.buffer().pixel(8, 8), Color::BLACK);
        assert_eq!(session.buffer().pixel(12, 8), Color::BLACK);
        assert_eq!(session.buffer().pixel(8, 4), Color::BLACK);
        // Corner of the bounding square is outside the disc.
        assert_eq!(session.buffer().pixel(12, 12), BACKGROUND);
    }
}
