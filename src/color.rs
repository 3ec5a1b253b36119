//! Dominant trace-color classification.
//!
//! The chart background is pure white; every other pixel belongs to the
//! trace, the gridlines or the legend. The trace dominates by pixel count,
//! so the per-channel statistical mode over all non-background samples is
//! the trace color. The result is used downstream as an exact-match target.
use crate::error::CalibError;
use crate::image::{Rgb, RgbImageU8};

const BACKGROUND: Rgb = [255, 255, 255];

/// Collect the color of every pixel that differs from the white background
/// in at least one channel, in row-major scan order.
pub fn non_background_samples(img: &RgbImageU8) -> Vec<Rgb> {
    let mut samples = Vec::new();
    for row in img.rows() {
        for &px in row {
            if px != BACKGROUND {
                samples.push(px);
            }
        }
    }
    samples
}

/// Classify the dominant (modal) color of the non-background pixels.
///
/// Each channel is classified independently; the three modal intensities
/// together form the target color. Errors with [`CalibError::EmptyImage`]
/// on an all-white image.
pub fn classify(img: &RgbImageU8, context: &str) -> Result<Rgb, CalibError> {
    let samples = non_background_samples(img);
    if samples.is_empty() {
        return Err(CalibError::EmptyImage {
            context: context.to_string(),
        });
    }
    let mut target = [0u8; 3];
    for (ch, slot) in target.iter_mut().enumerate() {
        // mode_of never returns None here: samples is non-empty.
        *slot = mode_of(samples.iter().map(|px| px[ch])).unwrap_or(0);
    }
    Ok(target)
}

/// Most frequent value of an integer sequence.
///
/// Ties break toward the lowest value, matching sorted-mode semantics.
/// Returns `None` on an empty sequence.
pub fn mode_of(values: impl Iterator<Item = u8>) -> Option<u8> {
    let mut counts = [0usize; 256];
    let mut seen = false;
    for v in values {
        counts[v as usize] += 1;
        seen = true;
    }
    if !seen {
        return None;
    }
    let mut best = 0usize;
    for (v, &count) in counts.iter().enumerate() {
        if count > counts[best] {
            best = v;
        }
    }
    Some(best as u8)
}
