/// An RGBA color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::opaque(255, 255, 255);
    pub const BLACK: Color = Color::opaque(0, 0, 0);

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parses a `#rrggbb` hex string (leading `#` optional). Alpha is
    /// implicitly 255, matching the palette inputs the UI produces.
    pub fn from_hex(hex: &str) -> Result<Self, crate::error::RasterboardError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(crate::error::RasterboardError::InvalidColor(hex.to_string()));
        }
        let channel = |range| u8::from_str_radix(&digits[range], 16).unwrap_or(0);
        Ok(Self::opaque(channel(0..2), channel(2..4), channel(4..6)))
    }

    /// Compares only the RGB channels, ignoring alpha.
    pub fn rgb_eq(&self, other: &Color) -> bool {
        self.r == other.r && self.g == other.g && self.b == other.b
    }
}

/// A width x height raster of RGBA pixels stored as a flat byte vector.
///
/// The buffer is the single shared mutable resource of a drawing session:
/// the fill engine and the history stack borrow it for the duration of a
/// call and never keep a reference past it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Creates a buffer of the given dimensions, uniformly filled with
    /// `background`. Dimensions must be positive.
    pub fn new(width: usize, height: usize, background: Color) -> Self {
        debug_assert!(width > 0 && height > 0);
        let mut buffer = Self {
            width,
            height,
            data: vec![0; width * height * 4],
        };
        buffer.fill_all(background);
        buffer
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw RGBA bytes, row-major. Length is always width * height * 4.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    fn index(&self, x: usize, y: usize) -> usize {
        (y * self.width + x) * 4
    }

    /// Reads the pixel at (x, y). Callers check bounds first.
    pub fn pixel(&self, x: usize, y: usize) -> Color {
        let i = self.index(x, y);
        Color {
            r: self.data[i],
            g: self.data[i + 1],
            b: self.data[i + 2],
            a: self.data[i + 3],
        }
    }

    /// Writes the pixel at (x, y). Out-of-bounds coordinates are ignored,
    /// since brush stamps routinely clip at the edges.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if !self.contains(x, y) {
            return;
        }
        let i = self.index(x as usize, y as usize);
        self.data[i] = color.r;
        self.data[i + 1] = color.g;
        self.data[i + 2] = color.b;
        self.data[i + 3] = color.a;
    }

    /// Sets every pixel to `color`.
    pub fn fill_all(&mut self, color: Color) {
        for chunk in self.data.chunks_exact_mut(4) {
            chunk.copy_from_slice(&[color.r, color.g, color.b, color.a]);
        }
    }

    /// Reallocates to the new dimensions and resets to a uniform
    /// background. Old contents are discarded.
    pub fn resize(&mut self, width: usize, height: usize, background: Color) {
        debug_assert!(width > 0 && height > 0);
        self.width = width;
        self.height = height;
        self.data = vec![0; width * height * 4];
        self.fill_all(background);
    }

    /// Replaces the pixel contents with `data`, which must have the same
    /// geometry as this buffer.
    pub(crate) fn restore_from(&mut self, data: &[u8]) {
        debug_assert_eq!(data.len(), self.data.len());
        self.data.copy_from_slice(data);
    }
}
