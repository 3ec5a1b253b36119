use chart_calib::image::RgbImageU8;
use chart_calib::{AxisCalibrator, CalibratorParams};

fn main() {
    env_logger::init();

    // Demo stub: draws a synthetic dashboard chart and calibrates it
    let w = 640usize;
    let h = 600usize;
    let mut rgb = vec![[255u8; 3]; w * h];

    // five kW gridlines, 75 px apart
    for &row in &[250usize, 325, 400, 475, 550] {
        for x in 0..w {
            rgb[row * w + x] = [200, 200, 200];
        }
    }
    // a sawtooth battery trace between the +2 and 0 kW lines
    for x in 0..w {
        let offset = (x % 40) as isize - 20;
        let y = (360 + offset) as usize;
        for dy in 0..6 {
            rgb[(y + dy) * w + x] = [30, 144, 255];
        }
    }

    let img = RgbImageU8 {
        w,
        h,
        stride: w,
        data: &rgb,
    };
    let calibrator = AxisCalibrator::new(CalibratorParams::default());
    match calibrator.compute_y_calibrations_named(&img, "demo") {
        Ok(cal) => println!(
            "baseline_y={} kw_per_pixel={:.4} map={:?}",
            cal.baseline_y, cal.kw_per_pixel, cal.map
        ),
        Err(e) => eprintln!("calibration failed at {}: {e}", e.stage()),
    }
    match calibrator.find_data_pixels_named(&img, "demo") {
        Ok(coords) => println!("trace pixels: {}", coords.len()),
        Err(e) => eprintln!("trace extraction failed at {}: {e}", e.stage()),
    }
}
