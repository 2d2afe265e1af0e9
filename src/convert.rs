//! Pure conversions between absolute temperature and percentage-of-maximum.
//!
//! Both directions need a present, non-zero maximum; anything else yields
//! an absent result rather than zero or a division error.

/// Expresses a temperature as a percentage of the maximal temperature.
pub fn to_percentage(temperature: Option<f64>, max_temperature: Option<f64>) -> Option<f64> {
    let temperature = temperature?;
    let max = max_temperature.filter(|max| *max != 0.0)?;
    Some(temperature / max * 100.0)
}

/// Expresses a percentage of the maximal temperature in degrees Celsius.
pub fn to_temperature(percentage: Option<f64>, max_temperature: Option<f64>) -> Option<f64> {
    let percentage = percentage?;
    let max = max_temperature.filter(|max| *max != 0.0)?;
    Some(percentage / 100.0 * max)
}
