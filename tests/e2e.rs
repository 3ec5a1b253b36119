mod common;

use chart_calib::image::RgbImageU8;
use chart_calib::{AxisCalibrator, CalibError, CalibratorParams};
use common::synthetic_chart::{
    full_chart, gridline_chart, CHART_H, CHART_W, GRIDLINE_ROWS, TRACE_COLOR,
};

fn view(data: &[[u8; 3]]) -> RgbImageU8<'_> {
    RgbImageU8 {
        w: CHART_W,
        h: CHART_H,
        stride: CHART_W,
        data,
    }
}

#[test]
fn synthetic_chart_calibrates_to_the_gridlines() {
    let rgb = gridline_chart(&GRIDLINE_ROWS);
    let calibrator = AxisCalibrator::new(CalibratorParams::default());
    let cal = calibrator
        .compute_y_calibrations_named(&view(&rgb), "synthetic")
        .expect("calibration should succeed on a clean gridline chart");

    // the edge kernel answers each line one row below it
    assert_eq!(
        cal.map,
        vec![
            (4.0, 251),
            (2.0, 326),
            (0.0, 401),
            (-2.0, 476),
            (-4.0, 551)
        ]
    );
    assert_eq!(cal.baseline_y, 401);
    assert!((cal.kw_per_pixel - (-8.0 / 300.0)).abs() < 1e-9);

    // affine invariant across every pair of map entries
    for &(kw1, p1) in &cal.map {
        for &(kw2, p2) in &cal.map {
            assert!(((kw1 - kw2) - cal.kw_per_pixel * (p1 - p2) as f64).abs() < 1e-9);
        }
    }
}

#[test]
fn calibration_survives_an_overlaid_trace() {
    let rgb = full_chart(&GRIDLINE_ROWS);
    let calibrator = AxisCalibrator::new(CalibratorParams::default());
    let cal = calibrator
        .compute_y_calibrations_named(&view(&rgb), "with-trace")
        .expect("trace energy stays below the peak threshold");
    assert_eq!(cal.baseline_y, 401);
    assert_eq!(cal.map.len(), 5);
}

#[test]
fn trace_extraction_finds_the_trace_and_skips_the_legend() {
    let rgb = full_chart(&GRIDLINE_ROWS);
    let calibrator = AxisCalibrator::new(CalibratorParams::default());
    let coords = calibrator
        .find_data_pixels_named(&view(&rgb), "with-trace")
        .expect("trace pixels dominate the non-white population");

    assert_eq!(coords.len(), CHART_W * 6, "6-px trace across every column");
    assert!(coords.iter().all(|c| c.y >= 200), "legend swatch excluded");
    let img = view(&rgb);
    assert!(coords.iter().all(|c| img.get(c.x, c.y) == TRACE_COLOR));
}

#[test]
fn missing_gridline_is_a_count_mismatch() {
    let rgb = gridline_chart(&GRIDLINE_ROWS[..4]);
    let calibrator = AxisCalibrator::new(CalibratorParams::default());
    match calibrator.compute_y_calibrations_named(&view(&rgb), "four-lines") {
        Err(CalibError::CalibrationMismatch {
            expected: 5,
            found: 4,
            ..
        }) => {}
        other => panic!("expected CalibrationMismatch, got {other:?}"),
    }
}

#[test]
fn all_white_image_reports_empty_image() {
    let rgb = vec![[255u8; 3]; 100];
    let img = RgbImageU8 {
        w: 10,
        h: 10,
        stride: 10,
        data: &rgb,
    };
    let calibrator = AxisCalibrator::new(CalibratorParams::default());
    match calibrator.find_data_pixels_named(&img, "blank") {
        Err(CalibError::EmptyImage { context }) => assert_eq!(context, "blank"),
        other => panic!("expected EmptyImage, got {other:?}"),
    }
}

#[test]
fn uniform_non_trace_image_reports_no_data_pixels() {
    // classification succeeds (one non-white color) but every matching
    // pixel sits above the row floor
    let mut rgb = vec![[255u8; 3]; CHART_W * CHART_H];
    for y in 40..60 {
        for x in 0..CHART_W {
            rgb[y * CHART_W + x] = TRACE_COLOR;
        }
    }
    let calibrator = AxisCalibrator::new(CalibratorParams::default());
    match calibrator.find_data_pixels_named(&view(&rgb), "legend-only") {
        Err(CalibError::NoDataPixels { color, .. }) => assert_eq!(color, TRACE_COLOR),
        other => panic!("expected NoDataPixels, got {other:?}"),
    }
}
