//! 8-bit RGB pixel buffers: a borrowed stride-aware view for processing and
//! an owned buffer for decoded files.
use super::Rgb;

/// Borrowed view over packed RGB pixels in row-major layout.
#[derive(Clone, Debug)]
pub struct RgbImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // pixels between rows
    pub data: &'a [Rgb],
}

impl<'a> RgbImageU8<'a> {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgb {
        self.data[y * self.stride + x]
    }

    #[inline]
    pub fn row(&self, y: usize) -> &[Rgb] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgb]> + '_ {
        (0..self.h).map(move |y| self.row(y))
    }
}

/// Owned RGB buffer with borrowed view conversion.
#[derive(Clone, Debug)]
pub struct RgbBufferU8 {
    width: usize,
    height: usize,
    data: Vec<Rgb>,
}

impl RgbBufferU8 {
    /// Construct an owned buffer given raw pixels in row-major order.
    pub fn new(width: usize, height: usize, data: Vec<Rgb>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a read-only `RgbImageU8` view
    pub fn as_view(&self) -> RgbImageU8<'_> {
        RgbImageU8 {
            w: self.width,
            h: self.height,
            stride: self.width,
            data: &self.data,
        }
    }
}
