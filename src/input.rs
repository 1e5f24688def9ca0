/// Pointer events consumed by the drawing session.
///
/// Coordinates are buffer-local pixels; the UI layer translates from
/// screen space before handing events over. Events are dispatched one at
/// a time, in arrival order, each running to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Pointer pressed inside the canvas.
    PointerDown { x: i32, y: i32 },
    /// Pointer moved while pressed.
    PointerMove { x: i32, y: i32 },
    /// Pointer released (or left the canvas mid-stroke).
    PointerUp,
}
