//! Error taxonomy for the calibration pipeline and its glue.
//!
//! Every core error is terminal for the image (or day) being processed:
//! the calibrator surfaces it with enough context to diagnose; no retry,
//! no partial result.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalibError {
    /// Color classification found no pixel differing from the white
    /// background.
    #[error("no non-background pixels in image ({context})")]
    EmptyImage { context: String },

    /// Pixel location found zero matches for the classified trace color.
    #[error("no pixels match the trace color {color:?} ({context})")]
    NoDataPixels { color: [u8; 3], context: String },

    /// Detected gridline peak count does not match the known axis values.
    #[error("detected {found} gridline peaks, expected {expected} ({context})")]
    CalibrationMismatch {
        expected: usize,
        found: usize,
        context: String,
    },

    /// A tabular file could not be parsed in either supported format.
    #[error("cannot parse table {}: {reason}", path.display())]
    MalformedTable { path: PathBuf, reason: String },

    /// Series arithmetic over mismatched or empty inputs.
    #[error("series error: {0}")]
    Series(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CalibError {
    /// Name of the pipeline stage an error originated from, for logs.
    pub fn stage(&self) -> &'static str {
        match self {
            CalibError::EmptyImage { .. } => "color-classify",
            CalibError::NoDataPixels { .. } => "pixel-locate",
            CalibError::CalibrationMismatch { .. } => "calibrate",
            CalibError::MalformedTable { .. } => "table-load",
            CalibError::Series(_) => "series",
            CalibError::Io(_) => "io",
        }
    }
}
