//! Affine pixel-row ↔ kW calibration from detected gridline rows.
//!
//! The chart's horizontal gridlines carry known kW values; pairing the
//! detected peak rows with those values yields a signed scale (kW per
//! pixel, negative because rows grow downward while kW grows upward) and
//! a baseline row for 0 kW.
//!
//! The baseline is the midpoint of the extreme rows, which assumes the
//! known values are symmetric about zero. That holds for the dashboard's
//! {+4, +2, 0, -2, -4} gridlines but not for asymmetric sets.
use crate::error::CalibError;
use serde::Serialize;

/// Default gridline values on the dashboard's y axis, top to bottom.
pub const DEFAULT_KNOWN_KW: [f64; 5] = [4.0, 2.0, 0.0, -2.0, -4.0];

/// The calibration artifact: known kW values paired with pixel rows, plus
/// the affine parameters that generated the pairing.
#[derive(Clone, Debug, Serialize)]
pub struct Calibration {
    /// (kW value, pixel row), in the order the known values were given.
    pub map: Vec<(f64, i64)>,
    /// Pixel row interpreted as 0 kW.
    pub baseline_y: i64,
    /// Signed scale converting a downward pixel step to kW.
    pub kw_per_pixel: f64,
}

impl Calibration {
    /// Pixel row for an arbitrary kW value, truncating like the map entries.
    pub fn row_for(&self, kw: f64) -> i64 {
        (self.baseline_y as f64 + kw / self.kw_per_pixel) as i64
    }
}

/// Pair detected gridline rows with the known kW values.
///
/// `peak_rows` must be in ascending row order (top gridline first) and of
/// the same length as `known_kw`; a count mismatch is a caller contract
/// violation and errors instead of silently mis-pairing.
///
/// Map rows are computed from the affine parameters with a truncating
/// integer cast (toward zero), reproducing the reference pixel addressing
/// bit for bit.
pub fn calibrate(
    peak_rows: &[usize],
    known_kw: &[f64],
    context: &str,
) -> Result<Calibration, CalibError> {
    if peak_rows.len() != known_kw.len() || peak_rows.is_empty() {
        return Err(CalibError::CalibrationMismatch {
            expected: known_kw.len(),
            found: peak_rows.len(),
            context: context.to_string(),
        });
    }

    let row_min = *peak_rows.iter().min().unwrap() as f64;
    let row_max = *peak_rows.iter().max().unwrap() as f64;
    if row_max == row_min {
        return Err(CalibError::Series(format!(
            "degenerate gridline rows (all at {row_min}) for {context}"
        )));
    }
    let kw_min = known_kw.iter().cloned().fold(f64::INFINITY, f64::min);
    let kw_max = known_kw.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    let kw_per_pixel = -(kw_max - kw_min) / (row_max - row_min);
    let baseline_y = ((row_max + row_min) / 2.0).round() as i64;

    let calibration = Calibration {
        map: Vec::new(),
        baseline_y,
        kw_per_pixel,
    };
    let map = known_kw
        .iter()
        .map(|&kw| (kw, calibration.row_for(kw)))
        .collect();

    Ok(Calibration { map, ..calibration })
}
