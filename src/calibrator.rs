//! Calibration pipeline driving axis calibration end-to-end.
//!
//! The [`AxisCalibrator`] exposes a simple API: feed an RGB screenshot and
//! get the pixel-row ↔ kW calibration. Internally it runs the horizontal
//! edge kernel, reduces the response to per-row energy, removes baseline
//! wander with a high-pass filter, detects and deduplicates the gridline
//! peaks, and pairs them with the known axis values.
//!
//! A second entry point, [`AxisCalibrator::find_data_pixels`], classifies
//! the dominant trace color and collects the trace's pixel coordinates.
//!
//! Typical usage:
//! ```no_run
//! use chart_calib::{AxisCalibrator, CalibratorParams};
//! use chart_calib::image::RgbImageU8;
//!
//! # fn example(img: RgbImageU8) {
//! let calibrator = AxisCalibrator::new(CalibratorParams::default());
//! match calibrator.compute_y_calibrations(&img) {
//!     Ok(cal) => println!("0 kW at row {}", cal.baseline_y),
//!     Err(e) => eprintln!("calibration failed at {}: {e}", e.stage()),
//! }
//! # }
//! ```
//!
//! Every stage is a pure function over in-memory buffers; calibration is
//! all-or-nothing per image.
use crate::calib::{self, Calibration, DEFAULT_KNOWN_KW};
use crate::color;
use crate::edges;
use crate::error::CalibError;
use crate::image::{PixelCoord, RgbImageU8};
use crate::locate;
use crate::signal::{dedup_peaks, detect_peaks, remove_baseline_wander};
use log::debug;
use serde::Deserialize;
use std::time::Instant;

/// Knobs for the calibration stages.
///
/// Defaults reproduce the reference dashboard analysis; for other chart
/// styles start with `row_floor` and `known_kw`.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CalibratorParams {
    /// Width in columns of the 3-row horizontal-edge kernel.
    pub kernel_width: usize,
    /// Rows above this index (legend area) are ignored everywhere.
    pub row_floor: usize,
    /// High-pass cutoff frequency in Hz.
    pub hpf_cutoff_hz: f64,
    /// Nominal sample rate the cutoff is relative to, in Hz.
    pub hpf_sample_rate_hz: f64,
    /// Candidate peaks must reach this fraction of the channel maximum.
    pub peak_height_frac: f32,
    /// Peaks closer than this fraction of the span are one gridline.
    pub dedup_span_frac: f32,
    /// kW values of the horizontal gridlines, top to bottom.
    pub known_kw: Vec<f64>,
}

impl Default for CalibratorParams {
    fn default() -> Self {
        Self {
            kernel_width: edges::DEFAULT_KERNEL_WIDTH,
            row_floor: locate::DEFAULT_ROW_FLOOR,
            hpf_cutoff_hz: 1.0,
            hpf_sample_rate_hz: 5.0,
            peak_height_frac: 0.7,
            dedup_span_frac: 0.05,
            known_kw: DEFAULT_KNOWN_KW.to_vec(),
        }
    }
}

/// Axis calibrator orchestrating edge response, row energy, baseline
/// removal, peak deduplication and the affine kW pairing.
pub struct AxisCalibrator {
    params: CalibratorParams,
}

impl AxisCalibrator {
    /// Create a calibrator with the supplied parameters.
    pub fn new(params: CalibratorParams) -> Self {
        Self { params }
    }

    /// Run the calibration pipeline on an image without a known identity.
    pub fn compute_y_calibrations(&self, img: &RgbImageU8) -> Result<Calibration, CalibError> {
        self.compute_y_calibrations_named(img, "unnamed image")
    }

    /// Run the calibration pipeline; `image_id` tags errors and logs.
    pub fn compute_y_calibrations_named(
        &self,
        img: &RgbImageU8,
        image_id: &str,
    ) -> Result<Calibration, CalibError> {
        let p = &self.params;
        debug!(
            "compute_y_calibrations start id={image_id} w={} h={} kernel_width={}",
            img.w, img.h, p.kernel_width
        );
        let total_start = Instant::now();

        let response = edges::horizontal_edge_response(img, p.kernel_width);
        let energy = edges::row_energy(&response);
        let filtered = remove_baseline_wander(&energy, p.hpf_cutoff_hz, p.hpf_sample_rate_hz);

        // peak detection runs on the first (red) channel only
        let red: Vec<f32> = filtered.iter().map(|v| v[0]).collect();
        let candidates = detect_peaks(&red, p.peak_height_frac, p.row_floor);
        let peaks = dedup_peaks(&candidates, p.dedup_span_frac);
        let rows: Vec<usize> = peaks.iter().map(|pk| pk.row).collect();
        debug!("gridline rows for {image_id}: {rows:?}");

        let calibration = calib::calibrate(&rows, &p.known_kw, image_id)?;
        debug!(
            "compute_y_calibrations done id={image_id} baseline={} kw_per_pixel={:.5} in {:.3} ms",
            calibration.baseline_y,
            calibration.kw_per_pixel,
            total_start.elapsed().as_secs_f64() * 1000.0
        );
        Ok(calibration)
    }

    /// Classify the trace color and collect its pixel coordinates.
    pub fn find_data_pixels(&self, img: &RgbImageU8) -> Result<Vec<PixelCoord>, CalibError> {
        self.find_data_pixels_named(img, "unnamed image")
    }

    /// Trace extraction with an image identity for errors and logs.
    pub fn find_data_pixels_named(
        &self,
        img: &RgbImageU8,
        image_id: &str,
    ) -> Result<Vec<PixelCoord>, CalibError> {
        let target = color::classify(img, image_id)?;
        debug!("trace color for {image_id}: {target:?}");
        let coords = locate::locate(img, target, self.params.row_floor);
        if coords.is_empty() {
            return Err(CalibError::NoDataPixels {
                color: target,
                context: image_id.to_string(),
            });
        }
        debug!("{} trace pixels for {image_id}", coords.len());
        Ok(coords)
    }

    /// Parameters the calibrator was built with.
    pub fn params(&self) -> &CalibratorParams {
        &self.params
    }
}
