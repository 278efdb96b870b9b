use image::RgbImage;

/// An RGB color with components in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl ColorStop {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn channels(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
}

/// Pixels grouped by column: each run of `3 * height` bytes holds one x
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMajorGrid {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl ColumnMajorGrid {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; 3 * width as usize * height as usize],
        }
    }

    /// Length of one column in bytes
    pub fn column_len(&self) -> usize {
        3 * self.height as usize
    }

    pub fn column(&self, x: u32) -> &[u8] {
        let len = self.column_len();
        let start = x as usize * len;
        &self.data[start..start + len]
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let i = 3 * (x as usize * self.height as usize + y as usize);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Reshape into row-major order. Values are copied, never recomputed.
    pub fn transpose(&self) -> PixelGrid {
        let (w, h) = (self.width as usize, self.height as usize);
        let mut data = vec![0u8; self.data.len()];

        for x in 0..w {
            for y in 0..h {
                let src = 3 * (x * h + y);
                let dst = 3 * (y * w + x);
                data[dst..dst + 3].copy_from_slice(&self.data[src..src + 3]);
            }
        }

        PixelGrid {
            width: self.width,
            height: self.height,
            data,
        }
    }
}

/// Row-major interleaved RGB pixels, the layout image sinks consume
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl PixelGrid {
    pub fn row_len(&self) -> usize {
        3 * self.width as usize
    }

    /// Yields nothing for a zero-width grid
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(self.row_len().max(1))
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let i = 3 * (y as usize * self.width as usize + x as usize);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Copy into an `RgbImage`
    pub fn to_image(&self) -> Option<RgbImage> {
        RgbImage::from_raw(self.width, self.height, self.data.clone())
    }
}
