//! Tabular grid-data loading: every CSV/XLSX file in a directory,
//! concatenated into one deduplicated table of strings.
//!
//! A `.csv` file that fails CSV decoding is retried with the spreadsheet
//! reader before being reported as malformed; dashboard exports are
//! sometimes spreadsheets with a misleading extension.
use crate::error::CalibError;
use calamine::{open_workbook, Data, Reader, Xlsx, XlsxError};
use log::{debug, info};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// A plain table: header names plus rows of cell strings.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a header, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Borrow a column's cells by header name.
    pub fn column(&self, name: &str) -> Result<Vec<&str>, CalibError> {
        let idx = self
            .column_index(name)
            .ok_or_else(|| CalibError::Series(format!("no column named {name:?}")))?;
        Ok(self.rows.iter().map(|r| r[idx].as_str()).collect())
    }

    /// Parse a column as f64 values.
    pub fn column_f64(&self, name: &str) -> Result<Vec<f64>, CalibError> {
        self.column(name)?
            .into_iter()
            .map(|cell| {
                cell.trim()
                    .parse::<f64>()
                    .map_err(|e| CalibError::Series(format!("column {name:?}: {cell:?}: {e}")))
            })
            .collect()
    }

    /// Append another table's rows; headers must agree.
    fn extend(&mut self, other: Table, origin: &Path) -> Result<(), CalibError> {
        if self.headers.is_empty() {
            self.headers = other.headers;
        } else if self.headers != other.headers {
            return Err(CalibError::MalformedTable {
                path: origin.to_path_buf(),
                reason: format!(
                    "header mismatch: {:?} vs {:?}",
                    other.headers, self.headers
                ),
            });
        }
        self.rows.extend(other.rows);
        Ok(())
    }

    /// Drop duplicate rows, keeping first occurrences in order.
    fn dedup_rows(&mut self) {
        let mut seen: HashSet<Vec<String>> = HashSet::new();
        self.rows.retain(|row| seen.insert(row.clone()));
    }
}

fn read_csv(path: &Path) -> Result<Table, String> {
    let mut rdr = csv::Reader::from_path(path).map_err(|e| e.to_string())?;
    let headers = rdr
        .headers()
        .map_err(|e| e.to_string())?
        .iter()
        .map(str::to_string)
        .collect();
    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(|e| e.to_string())?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(Table { headers, rows })
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        // integral floats print like their CSV counterparts
        Data::Float(f) if *f == f.trunc() && f.abs() < 1e15 => (*f as i64).to_string(),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("{e:?}"),
    }
}

fn read_xlsx(path: &Path) -> Result<Table, String> {
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|e: XlsxError| e.to_string())?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| "workbook has no sheets".to_string())?
        .map_err(|e| e.to_string())?;
    let mut rows_iter = range.rows();
    let headers = rows_iter
        .next()
        .ok_or_else(|| "sheet has no header row".to_string())?
        .iter()
        .map(cell_to_string)
        .collect();
    let rows = rows_iter
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();
    Ok(Table { headers, rows })
}

/// Load one file, trying CSV first for `.csv` and falling back to the
/// spreadsheet reader when CSV decoding fails.
pub fn load_table(path: &Path) -> Result<Table, CalibError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    let result = match ext.as_str() {
        "csv" => read_csv(path).or_else(|csv_err| {
            debug!("CSV decode of {} failed ({csv_err}), trying XLSX", path.display());
            read_xlsx(path)
                .map_err(|xlsx_err| format!("as CSV: {csv_err}; as XLSX: {xlsx_err}"))
        }),
        "xlsx" => read_xlsx(path),
        other => Err(format!("unsupported extension {other:?}")),
    };
    result.map_err(|reason| CalibError::MalformedTable {
        path: path.to_path_buf(),
        reason,
    })
}

/// Concatenate every `.csv` and `.xlsx` file in `dir` into one table with
/// duplicate rows removed. Files load in name order so the result is
/// deterministic; all files must share one header schema.
pub fn load_tables(dir: &Path) -> Result<Table, CalibError> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| {
            matches!(
                p.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase).as_deref(),
                Some("csv") | Some("xlsx")
            )
        })
        .collect();
    paths.sort();

    let mut combined = Table::default();
    for path in &paths {
        let table = load_table(path)?;
        debug!("loaded {} rows from {}", table.rows.len(), path.display());
        combined.extend(table, path)?;
    }
    combined.dedup_rows();
    info!(
        "{} grid-data files -> {} unique rows",
        paths.len(),
        combined.rows.len()
    );
    Ok(combined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn concatenates_and_deduplicates_across_files() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a.csv", "t,ci\n00:00,120\n00:30,130\n");
        write(dir.path(), "b.csv", "t,ci\n00:30,130\n01:00,140\n");
        let table = load_tables(dir.path()).unwrap();
        assert_eq!(table.headers, vec!["t", "ci"]);
        assert_eq!(
            table.rows,
            vec![
                vec!["00:00".to_string(), "120".to_string()],
                vec!["00:30".to_string(), "130".to_string()],
                vec!["01:00".to_string(), "140".to_string()],
            ]
        );
    }

    #[test]
    fn csv_and_xlsx_combine_into_the_union_of_unique_rows() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a.csv", "t,ci\n00:00,120\n00:30,130\n");
        let fixture = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/grid_b.xlsx");
        fs::copy(&fixture, dir.path().join("b.xlsx")).unwrap();

        let table = load_tables(dir.path()).unwrap();
        assert_eq!(table.headers, vec!["t", "ci"]);
        // the 00:30 row appears in both files and survives exactly once;
        // the spreadsheet's numeric 130 prints like its CSV counterpart
        assert_eq!(
            table.rows,
            vec![
                vec!["00:00".to_string(), "120".to_string()],
                vec!["00:30".to_string(), "130".to_string()],
                vec!["01:30".to_string(), "150".to_string()],
            ]
        );
    }

    #[test]
    fn header_mismatch_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a.csv", "t,ci\n00:00,120\n");
        write(dir.path(), "b.csv", "time,carbon\n00:30,130\n");
        match load_tables(dir.path()) {
            Err(CalibError::MalformedTable { .. }) => {}
            other => panic!("expected MalformedTable, got {other:?}"),
        }
    }

    #[test]
    fn unparseable_file_reports_both_attempts() {
        let dir = tempfile::tempdir().unwrap();
        // raw non-UTF-8 bytes defeat CSV and are no ZIP either
        let path = dir.path().join("junk.csv");
        fs::write(&path, [0u8, 159, 146, 150]).unwrap();
        match load_table(&path) {
            Err(CalibError::MalformedTable { reason, .. }) => {
                assert!(reason.contains("as CSV"), "reason: {reason}");
                assert!(reason.contains("as XLSX"), "reason: {reason}");
            }
            other => panic!("expected MalformedTable, got {other:?}"),
        }
    }

    #[test]
    fn column_f64_parses_numeric_cells() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a.csv", "t,ci\n00:00,120.5\n00:30,130\n");
        let table = load_tables(dir.path()).unwrap();
        assert_eq!(table.column_f64("ci").unwrap(), vec![120.5, 130.0]);
        assert!(table.column_f64("t").is_err());
        assert!(table.column_f64("missing").is_err());
    }
}
