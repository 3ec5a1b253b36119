//! Owned 3-channel f32 image in row-major layout (stride == width).
//!
//! Holds filter responses at full precision: values may leave the original
//! [0, 255] range and are never clipped.
#[derive(Clone, Debug)]
pub struct ImageRgbF32 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Backing storage in row-major order, one `[f32; 3]` per pixel
    pub data: Vec<[f32; 3]>,
}

impl ImageRgbF32 {
    /// Construct a zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![[0.0; 3]; w * h],
        }
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    #[inline]
    /// Get the pixel value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> [f32; 3] {
        self.data[self.idx(x, y)]
    }

    #[inline]
    /// Set the pixel value at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: [f32; 3]) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    #[inline]
    pub fn row(&self, y: usize) -> &[[f32; 3]] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
}
