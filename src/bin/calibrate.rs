use chart_calib::image::io::{load_rgb_image, write_json_file};
use chart_calib::{AxisCalibrator, CalibratorParams};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct CalibrateToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub params: CalibratorParams,
    pub output: CalibrateOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct CalibrateOutputConfig {
    #[serde(rename = "calibration_json")]
    pub calibration_json: PathBuf,
}

#[derive(Serialize)]
struct CalibrateArtifact {
    image: String,
    calibration: chart_calib::Calibration,
    trace_pixels: usize,
}

pub fn load_config(path: &Path) -> Result<CalibrateToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let image_id = config.input.display().to_string();
    let rgb = load_rgb_image(&config.input)?;
    let calibrator = AxisCalibrator::new(config.params);

    let calibration = calibrator
        .compute_y_calibrations_named(&rgb.as_view(), &image_id)
        .map_err(|e| format!("{} failed for {image_id}: {e}", e.stage()))?;
    let trace_pixels = calibrator
        .find_data_pixels_named(&rgb.as_view(), &image_id)
        .map_err(|e| format!("{} failed for {image_id}: {e}", e.stage()))?
        .len();

    let artifact = CalibrateArtifact {
        image: image_id,
        calibration,
        trace_pixels,
    };
    write_json_file(&config.output.calibration_json, &artifact)?;
    println!(
        "baseline_y={} kw_per_pixel={:.5} trace_pixels={}",
        artifact.calibration.baseline_y, artifact.calibration.kw_per_pixel, artifact.trace_pixels
    );
    Ok(())
}

fn usage() -> String {
    "Usage: calibrate <config.json>".to_string()
}
