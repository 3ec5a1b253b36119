//! Datetime alignment: calendar-day filtering and linear interpolation of
//! a sparse series onto a denser series' sample instants.
use crate::error::CalibError;
use crate::table::Table;
use chrono::{NaiveDate, NaiveDateTime};
use log::debug;

/// Timestamp layouts accepted in grid-data exports.
const TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Parse one timestamp cell against the accepted layouts.
pub fn parse_timestamp(cell: &str) -> Result<NaiveDateTime, CalibError> {
    let cell = cell.trim();
    for fmt in TIME_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(cell, fmt) {
            return Ok(ts);
        }
    }
    Err(CalibError::Series(format!("unparseable timestamp {cell:?}")))
}

/// Parse an entire timestamp column.
pub fn parse_time_column(table: &Table, name: &str) -> Result<Vec<NaiveDateTime>, CalibError> {
    table.column(name)?.into_iter().map(parse_timestamp).collect()
}

/// Keep only the rows whose timestamp falls on `day`.
pub fn filter_day(table: &Table, time_col: &str, day: NaiveDate) -> Result<Table, CalibError> {
    let times = parse_time_column(table, time_col)?;
    let rows = table
        .rows
        .iter()
        .zip(&times)
        .filter(|(_, ts)| ts.date() == day)
        .map(|(row, _)| row.clone())
        .collect::<Vec<_>>();
    debug!("{} of {} rows fall on {day}", rows.len(), table.rows.len());
    Ok(Table {
        headers: table.headers.clone(),
        rows,
    })
}

/// Linearly interpolate `(sparse_times, sparse_values)` at `dense_times`.
///
/// `sparse_times` must be sorted ascending and match `sparse_values` in
/// length; instants outside the sparse range clamp to the endpoint values.
pub fn interp_onto(
    dense_times: &[NaiveDateTime],
    sparse_times: &[NaiveDateTime],
    sparse_values: &[f64],
) -> Result<Vec<f64>, CalibError> {
    if sparse_times.len() != sparse_values.len() {
        return Err(CalibError::Series(format!(
            "interpolation inputs differ in length: {} times vs {} values",
            sparse_times.len(),
            sparse_values.len()
        )));
    }
    if sparse_times.is_empty() {
        return Err(CalibError::Series(
            "cannot interpolate from an empty series".to_string(),
        ));
    }
    if sparse_times.windows(2).any(|w| w[0] > w[1]) {
        return Err(CalibError::Series(
            "sparse series timestamps are not sorted".to_string(),
        ));
    }

    let xs: Vec<f64> = sparse_times
        .iter()
        .map(|t| t.and_utc().timestamp() as f64)
        .collect();
    let out = dense_times
        .iter()
        .map(|t| {
            let x = t.and_utc().timestamp() as f64;
            interp_point(x, &xs, sparse_values)
        })
        .collect();
    Ok(out)
}

fn interp_point(x: f64, xs: &[f64], ys: &[f64]) -> f64 {
    if x <= xs[0] {
        return ys[0];
    }
    if x >= xs[xs.len() - 1] {
        return ys[ys.len() - 1];
    }
    let hi = xs.partition_point(|&v| v < x).max(1);
    let (x0, x1) = (xs[hi - 1], xs[hi]);
    let (y0, y1) = (ys[hi - 1], ys[hi]);
    if x1 == x0 {
        return y0;
    }
    y0 + (y1 - y0) * (x - x0) / (x1 - x0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(s: &str) -> NaiveDateTime {
        parse_timestamp(s).unwrap()
    }

    #[test]
    fn filter_day_keeps_only_matching_rows() {
        let table = Table {
            headers: vec!["t".into(), "ci".into()],
            rows: vec![
                vec!["2023-11-04 23:30:00".into(), "100".into()],
                vec!["2023-11-05 00:00:00".into(), "110".into()],
                vec!["2023-11-05 23:30:00".into(), "120".into()],
                vec!["2023-11-06 00:00:00".into(), "130".into()],
            ],
        };
        let day = NaiveDate::from_ymd_opt(2023, 11, 5).unwrap();
        let filtered = filter_day(&table, "t", day).unwrap();
        assert_eq!(filtered.rows.len(), 2);
        assert_eq!(filtered.rows[0][1], "110");
        assert_eq!(filtered.rows[1][1], "120");
    }

    #[test]
    fn interp_is_linear_between_knots_and_clamped_outside() {
        let sparse_t = vec![ts("2023-11-05 00:00"), ts("2023-11-05 01:00")];
        let sparse_v = vec![100.0, 200.0];
        let dense_t = vec![
            ts("2023-11-04 23:00"),
            ts("2023-11-05 00:00"),
            ts("2023-11-05 00:15"),
            ts("2023-11-05 00:30"),
            ts("2023-11-05 02:00"),
        ];
        let out = interp_onto(&dense_t, &sparse_t, &sparse_v).unwrap();
        assert_eq!(out, vec![100.0, 100.0, 125.0, 150.0, 200.0]);
    }

    #[test]
    fn interp_rejects_bad_inputs() {
        let t = vec![ts("2023-11-05 00:00")];
        assert!(interp_onto(&t, &t, &[]).is_err());
        assert!(interp_onto(&t, &[], &[]).is_err());
        let unsorted = vec![ts("2023-11-05 01:00"), ts("2023-11-05 00:00")];
        assert!(interp_onto(&t, &unsorted, &[1.0, 2.0]).is_err());
    }

    #[test]
    fn timestamps_parse_in_all_accepted_layouts() {
        for s in [
            "2023-11-05 13:30:00",
            "2023-11-05T13:30:00",
            "2023-11-05 13:30",
            "2023-11-05T13:30",
        ] {
            assert_eq!(ts(s).date(), NaiveDate::from_ymd_opt(2023, 11, 5).unwrap());
        }
        assert!(parse_timestamp("05/11/2023").is_err());
    }
}
