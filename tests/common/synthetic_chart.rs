//! Synthetic dashboard charts for end-to-end tests.

pub const CHART_W: usize = 640;
pub const CHART_H: usize = 600;

/// Gridline rows for the default {+4, +2, 0, -2, -4} kW axis.
pub const GRIDLINE_ROWS: [usize; 5] = [250, 325, 400, 475, 550];

/// Light gray, as the dashboard draws its gridlines.
pub const GRIDLINE_COLOR: [u8; 3] = [200, 200, 200];

/// The dashboard's trace blue.
pub const TRACE_COLOR: [u8; 3] = [30, 144, 255];

/// White chart with one-pixel horizontal gridlines at the given rows.
pub fn gridline_chart(rows: &[usize]) -> Vec<[u8; 3]> {
    let mut rgb = vec![[255u8; 3]; CHART_W * CHART_H];
    for &row in rows {
        for x in 0..CHART_W {
            rgb[row * CHART_W + x] = GRIDLINE_COLOR;
        }
    }
    rgb
}

/// Gridline chart plus a 6-px-thick sawtooth trace between the +2 and
/// 0 kW gridlines and a legend swatch in the trace color above the plot.
pub fn full_chart(rows: &[usize]) -> Vec<[u8; 3]> {
    let mut rgb = gridline_chart(rows);
    for x in 0..CHART_W {
        let offset = (x % 40) as isize - 20;
        let y = (360 + offset) as usize;
        for dy in 0..6 {
            rgb[(y + dy) * CHART_W + x] = TRACE_COLOR;
        }
    }
    // legend swatch: trace-colored pixels the row floor must exclude
    for y in 40..48 {
        for x in 20..28 {
            rgb[y * CHART_W + x] = TRACE_COLOR;
        }
    }
    rgb
}
