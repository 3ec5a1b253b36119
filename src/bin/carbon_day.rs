use chart_calib::{align, carbon, table};
use chrono::NaiveDate;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct CarbonToolConfig {
    /// Directory of grid carbon-intensity exports (.csv / .xlsx).
    pub grid_data_dir: PathBuf,
    /// Calendar day to integrate.
    pub day: NaiveDate,
    #[serde(default = "default_time_column")]
    pub time_column: String,
    #[serde(default = "default_intensity_column")]
    pub intensity_column: String,
    /// Battery power series aligned to the chart's time base, one file.
    pub battery_csv: PathBuf,
    #[serde(default = "default_power_column")]
    pub power_column: String,
}

fn default_time_column() -> String {
    "datetime".to_string()
}

fn default_intensity_column() -> String {
    "act_carbon_intensity/(gCO2/kWh)".to_string()
}

fn default_power_column() -> String {
    "battery_power_consumption/kW".to_string()
}

pub fn load_config(path: &Path) -> Result<CarbonToolConfig, String> {
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

    let grid = table::load_tables(&config.grid_data_dir).map_err(|e| e.to_string())?;
    let grid_day =
        align::filter_day(&grid, &config.time_column, config.day).map_err(|e| e.to_string())?;
    let grid_times =
        align::parse_time_column(&grid_day, &config.time_column).map_err(|e| e.to_string())?;
    let intensity = grid_day
        .column_f64(&config.intensity_column)
        .map_err(|e| e.to_string())?;

    let battery = table::load_table(&config.battery_csv).map_err(|e| e.to_string())?;
    let battery_day =
        align::filter_day(&battery, &config.time_column, config.day).map_err(|e| e.to_string())?;
    let battery_times =
        align::parse_time_column(&battery_day, &config.time_column).map_err(|e| e.to_string())?;
    let power = battery_day
        .column_f64(&config.power_column)
        .map_err(|e| e.to_string())?;

    // the battery series is the denser one; put intensity on its time base
    let aligned_intensity =
        align::interp_onto(&battery_times, &grid_times, &intensity).map_err(|e| e.to_string())?;
    let total = carbon::grams_co2_for_day(&aligned_intensity, &power).map_err(|e| e.to_string())?;

    println!("{}: {total:.1} gCO2", config.day);
    Ok(())
}

fn usage() -> String {
    "Usage: carbon_day <config.json>".to_string()
}
