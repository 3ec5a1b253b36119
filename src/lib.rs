#![doc = include_str!("../README.md")]

// Core pipeline (stable-ish surface)
pub mod calib;
pub mod calibrator;
pub mod color;
pub mod edges;
pub mod error;
pub mod image;
pub mod locate;
pub mod signal;

// Glue around the core: tabular data, alignment, carbon arithmetic,
// screenshot housekeeping.
pub mod align;
pub mod carbon;
pub mod rename;
pub mod table;

// --- High-level re-exports -------------------------------------------------

// Main entry point: calibrator + result types.
pub use crate::calib::Calibration;
pub use crate::calibrator::{AxisCalibrator, CalibratorParams};
pub use crate::error::CalibError;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use chart_calib::prelude::*;
///
/// # fn main() {
/// let (w, h) = (640usize, 480usize);
/// let rgb = vec![[255u8; 3]; w * h];
/// let img = RgbImageU8 { w, h, stride: w, data: &rgb };
///
/// let calibrator = AxisCalibrator::new(CalibratorParams::default());
/// match calibrator.compute_y_calibrations(&img) {
///     Ok(cal) => println!("baseline={} scale={:.4}", cal.baseline_y, cal.kw_per_pixel),
///     Err(e) => eprintln!("{e}"),
/// }
/// # }
/// ```
pub mod prelude {
    pub use crate::image::RgbImageU8;
    pub use crate::{AxisCalibrator, CalibError, Calibration, CalibratorParams};
}
