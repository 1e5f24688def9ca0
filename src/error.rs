use thiserror::Error;

/// Errors surfaced at the crate's fallible edges. The raster operations
/// themselves are total: out-of-range coordinates and empty-history undo
/// are silent no-ops, not errors.
#[derive(Error, Debug)]
pub enum RasterboardError {
    #[error("invalid color string: {0:?} (expected 6 hex digits)")]
    InvalidColor(String),
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
    #[error("failed to write image file: {0}")]
    Io(#[from] std::io::Error),
}
