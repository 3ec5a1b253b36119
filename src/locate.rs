//! Exact-color pixel location with a legend-exclusion row floor.
//!
//! The dashboard renders a legend swatch in the trace color near the top of
//! the screenshot; everything above `row_floor` is discarded so only plot
//! pixels survive. Scan order is row-major (top-to-bottom, left-to-right),
//! which keeps the output deterministic.
use crate::image::{PixelCoord, Rgb, RgbImageU8};

/// Default row floor separating the legend area from the plot.
pub const DEFAULT_ROW_FLOOR: usize = 200;

/// Collect every pixel whose color equals `target` exactly, excluding rows
/// above `row_floor`. May be empty; the caller decides whether that is an
/// error.
pub fn locate(img: &RgbImageU8, target: Rgb, row_floor: usize) -> Vec<PixelCoord> {
    let mut coords = Vec::new();
    for y in row_floor.min(img.h)..img.h {
        for (x, &px) in img.row(y).iter().enumerate() {
            if px == target {
                coords.push(PixelCoord { x, y });
            }
        }
    }
    coords
}
