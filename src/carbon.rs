//! Carbon-emissions integration over one day of aligned series.
use crate::error::CalibError;

/// Total grams of CO2 for one day.
///
/// `intensity` is the aligned carbon intensity in gCO2/kWh and `power`
/// the battery power draw in kW, both sampled uniformly across 24 hours.
/// Their elementwise product is a consumption rate in gCO2/h; the sum
/// times the uniform step length (24 / n hours) is the day total.
pub fn grams_co2_for_day(intensity: &[f64], power: &[f64]) -> Result<f64, CalibError> {
    if intensity.len() != power.len() {
        return Err(CalibError::Series(format!(
            "intensity and power differ in length: {} vs {}",
            intensity.len(),
            power.len()
        )));
    }
    if intensity.is_empty() {
        return Err(CalibError::Series(
            "cannot integrate an empty day".to_string(),
        ));
    }
    let rate_sum: f64 = intensity.iter().zip(power).map(|(ci, kw)| ci * kw).sum();
    let hours_per_sample = 24.0 / intensity.len() as f64;
    Ok(hours_per_sample * rate_sum)
}
