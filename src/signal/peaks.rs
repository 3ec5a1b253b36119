//! Gridline peak detection and double-peak deduplication.
//!
//! Candidates are strict local maxima of one channel whose amplitude
//! reaches a fraction of the channel maximum. The edge kernel answers each
//! gridline with a maximum on either side of the line, so every logical
//! gridline tends to appear twice a couple of pixels apart; deduplication
//! merges any run of candidates closer than a fraction of the span into
//! the single strongest one.
//!
//! Gridlines are assumed never closer than 5% of the span, so anything
//! inside that distance is a double detection of one line, not two lines.
use log::debug;

/// A surviving peak: pixel row and filtered signal amplitude.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Peak {
    pub row: usize,
    pub amplitude: f32,
}

/// Detect candidate peaks on a single channel.
///
/// A candidate is a strict local maximum (`x[i-1] < x[i] > x[i+1]`; the
/// filtered float response does not produce exact plateaus) with amplitude
/// ≥ `height_frac` × the channel maximum, at row ≥ `row_floor`. Candidates
/// come out in ascending row order.
pub fn detect_peaks(channel: &[f32], height_frac: f32, row_floor: usize) -> Vec<Peak> {
    if channel.len() < 3 {
        return Vec::new();
    }
    let max = channel.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    let threshold = height_frac * max;
    let mut peaks = Vec::new();
    for i in 1..channel.len() - 1 {
        if channel[i] > channel[i - 1]
            && channel[i] > channel[i + 1]
            && channel[i] >= threshold
            && i >= row_floor
        {
            peaks.push(Peak {
                row: i,
                amplitude: channel[i],
            });
        }
    }
    debug!(
        "detect_peaks: {} candidates above {threshold:.1} (floor row {row_floor})",
        peaks.len()
    );
    peaks
}

/// Merge double detections of the same gridline.
///
/// Single pass over the row-ordered candidates, carrying the last emitted
/// peak: a candidate within `span_frac` of the span (the last candidate's
/// row) of the last emitted peak replaces it when its amplitude is at
/// least as high (ties keep the later candidate), and is dropped
/// otherwise; anything farther away is emitted as a new peak. An isolated
/// terminal candidate is kept like any other.
pub fn dedup_peaks(candidates: &[Peak], span_frac: f32) -> Vec<Peak> {
    let Some(last) = candidates.last() else {
        return Vec::new();
    };
    let span = last.row as f32;
    let mut kept: Vec<Peak> = Vec::new();
    for &peak in candidates {
        match kept.last_mut() {
            Some(prev) if span > 0.0 && (peak.row - prev.row) as f32 / span < span_frac => {
                if peak.amplitude >= prev.amplitude {
                    *prev = peak;
                }
            }
            _ => kept.push(peak),
        }
    }
    debug!("dedup_peaks: {} -> {} peaks", candidates.len(), kept.len());
    kept
}
