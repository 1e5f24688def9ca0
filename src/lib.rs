#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod buffer;
pub mod error;
pub mod export;
pub mod fill;
pub mod history;
pub mod input;
pub mod palette;
pub mod panels;
pub mod session;

pub use app::RasterboardApp;
pub use buffer::{Color, PixelBuffer};
pub use error::RasterboardError;
pub use fill::{FillOutcome, FloodFillEngine};
pub use history::HistoryStack;
pub use input::InputEvent;
pub use session::{DrawingSession, Tool};
