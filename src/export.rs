use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::buffer::PixelBuffer;
use crate::error::RasterboardError;

/// Encodes the buffer to a PNG file at `path`.
pub fn save_png(buffer: &PixelBuffer, path: &Path) -> Result<(), RasterboardError> {
    image::save_buffer(
        path,
        buffer.data(),
        buffer.width() as u32,
        buffer.height() as u32,
        image::ExtendedColorType::Rgba8,
    )?;
    log::info!("exported canvas to {}", path.display());
    Ok(())
}

/// Timestamped default export filename, e.g. `drawing-1693315200.png`.
pub fn default_filename() -> String {
    let seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("drawing-{seconds}.png")
}
