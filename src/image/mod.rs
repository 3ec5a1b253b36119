pub mod f32;
pub mod io;
pub mod rgb;

pub use self::f32::ImageRgbF32;
pub use self::rgb::{RgbBufferU8, RgbImageU8};

/// One 8-bit RGB pixel.
pub type Rgb = [u8; 3];

/// An (x = column, y = row) coordinate in image space. Rows grow downward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelCoord {
    pub x: usize,
    pub y: usize,
}
