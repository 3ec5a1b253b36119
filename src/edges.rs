//! Horizontal-edge emphasis filter and per-row energy reduction.
//!
//! - Correlates a fixed 3×`width` kernel (rows −1, +2, −1) with each color
//!   channel; the wide rows make thin horizontal lines stand out while
//!   vertical structure cancels.
//! - Border handling is reflect-101 (mirror without repeating the edge
//!   pixel), matching standard 2-D correlation with automatic borders.
//! - The kernel is constant along x and symmetric along y, so correlation
//!   equals convolution and the filter separates into a horizontal box sum
//!   followed by a vertical [−1, 2, −1] pass.
//! - Output stays in f32 at full precision: responses leave [0, 255] and
//!   must not be clipped.
//!
//! Complexity: O(W·H) per channel with the separable form.
use crate::image::{ImageRgbF32, RgbImageU8};

/// Default kernel width in columns.
pub const DEFAULT_KERNEL_WIDTH: usize = 25;

/// Vertical kernel weights applied to the box-summed rows.
const ROW_WEIGHTS: [f32; 3] = [-1.0, 2.0, -1.0];

#[inline]
fn reflect101(i: isize, n: usize) -> usize {
    debug_assert!(n > 0);
    if n == 1 {
        return 0;
    }
    let period = 2 * (n as isize - 1);
    let mut j = i.rem_euclid(period);
    if j >= n as isize {
        j = period - j;
    }
    j as usize
}

/// Correlate the image with the 3×`width` horizontal-edge kernel.
///
/// Output has the same shape and channel count as the input, one f32 per
/// channel, unclipped.
pub fn horizontal_edge_response(img: &RgbImageU8, width: usize) -> ImageRgbF32 {
    let (w, h) = (img.w, img.h);
    let mut boxed = ImageRgbF32::new(w, h);
    let mut out = ImageRgbF32::new(w, h);
    if w == 0 || h == 0 {
        return out;
    }

    // Horizontal box sum of `width` neighbors, reflect-101 at the sides.
    // The window is anchored at width/2, so an even width takes one extra
    // sample to the right of the anchor.
    let half = (width / 2) as isize;
    let lo = -half;
    let hi = width as isize - 1 - half;
    for y in 0..h {
        let row = img.row(y);
        for x in 0..w {
            let mut acc = [0.0f32; 3];
            for dx in lo..=hi {
                let px = row[reflect101(x as isize + dx, w)];
                for c in 0..3 {
                    acc[c] += px[c] as f32;
                }
            }
            boxed.set(x, y, acc);
        }
    }

    // Vertical [-1, 2, -1] pass, reflect-101 at top and bottom.
    for y in 0..h {
        let y_idx = [
            reflect101(y as isize - 1, h),
            y,
            reflect101(y as isize + 1, h),
        ];
        for x in 0..w {
            let mut acc = [0.0f32; 3];
            for (k, &yy) in y_idx.iter().enumerate() {
                let px = boxed.get(x, yy);
                for c in 0..3 {
                    acc[c] += ROW_WEIGHTS[k] * px[c];
                }
            }
            out.set(x, y, acc);
        }
    }

    out
}

/// Sum the response over x for every pixel row, yielding one 3-channel
/// scalar per row, a proxy for the horizontal-line energy at that row.
pub fn row_energy(response: &ImageRgbF32) -> Vec<[f32; 3]> {
    let mut energy = vec![[0.0f32; 3]; response.h];
    for (y, slot) in energy.iter_mut().enumerate() {
        for px in response.row(y) {
            for c in 0..3 {
                slot[c] += px[c];
            }
        }
    }
    energy
}
