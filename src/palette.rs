use crate::buffer::Color;

/// Preset swatches shown in the tools panel.
pub const PRESET_COLORS: [&str; 10] = [
    "#11111b", "#f38ba8", "#fab387", "#f9e2af", "#a6e3a1", "#94e2d5", "#89b4fa",
    "#cba6f7", "#f5c2e7", "#f2cdcd",
];

/// Canvas background; also what the eraser paints with.
pub const BACKGROUND: Color = Color::WHITE;

pub const DEFAULT_BRUSH_SIZE: u32 = 5;
pub const MAX_BRUSH_SIZE: u32 = 64;
