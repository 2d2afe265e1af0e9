//! Cooling fan controller with hysteresis.
//!
//! The controller keeps two thresholds expressed as percentages of the
//! device's maximal temperature: the fan starts when the smoothed reading
//! rises to the ON threshold and stops only once it falls back to the OFF
//! threshold. Readings strictly inside the band hold the current status,
//! which is what keeps the actuator from chattering around a single
//! setpoint. An absent reading also holds the status; the controller never
//! guesses on a failed sensor.
//!
//! The controller is driven externally: the hosting application samples
//! the [`System`](crate::system::System) at its own cadence and then asks
//! the fan to evaluate.
//!
//! # Examples
//!
//! ```
//! use thermofan::prelude::*;
//!
//! let mut system = System::new(SimulatedSource::new(55.0, 75.0));
//! let mut fan = Fan::new();
//!
//! system.sample();
//! assert_eq!(fan.evaluate(&system), Status::Idle);
//! ```

/// Threshold defaults and accepted ranges
pub mod constants;

mod thresholds;
mod types;

pub use thresholds::Thresholds;
pub use types::{FanConfig, Status, ThresholdRange};

use std::fmt;

use crate::error::Result;
use crate::sensor::ThermalSource;
use crate::system::System;

/// One hysteresis step: the status a controller in `previous` moves to for
/// the given reading and thresholds.
///
/// `current`, `on` and `off` share one unit; the fan evaluates in
/// percentage space but the step itself does not care. An absent reading
/// returns `previous` unchanged.
pub fn next_status(current: Option<f64>, on: f64, off: f64, previous: Status) -> Status {
    match current {
        None => previous,
        Some(value) => match previous {
            Status::Idle if value >= on => Status::Active,
            Status::Active if value <= off => Status::Idle,
            _ => previous,
        },
    }
}

/// The cooling fan entity: thresholds, status, and the actuation pin id.
#[derive(Debug, Clone)]
pub struct Fan {
    pin: String,
    thresholds: Thresholds,
    status: Status,
}

impl Fan {
    /// Creates a fan with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fan from a validated configuration.
    pub fn with_config(config: FanConfig) -> Result<Self> {
        Ok(Self {
            pin: config.pin,
            thresholds: Thresholds::new(config.on, config.off)?,
            status: Status::Idle,
        })
    }

    /// Opaque identifier for the actuation layer.
    pub fn pin(&self) -> &str {
        &self.pin
    }

    /// Most recent actuation status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Records a status detected by the actuation layer.
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    /// Compares the system's smoothed percentage against the thresholds
    /// and updates the status accordingly.
    pub fn evaluate<S: ThermalSource>(&mut self, system: &System<S>) -> Status {
        let current = system.percentage();
        let next = next_status(
            current,
            self.thresholds.on_percentage(),
            self.thresholds.off_percentage(),
            self.status,
        );
        if next != self.status {
            if let Some(value) = current {
                log::debug!("fan {}: {} -> {} at {:.1}%", self.pin, self.status, next, value);
            }
            self.status = next;
        }
        self.status
    }

    pub fn set_on_percentage<S: ThermalSource>(
        &mut self,
        value: Option<f64>,
        system: &System<S>,
    ) -> Result<()> {
        self.thresholds.set_on(value, system)
    }

    pub fn set_off_percentage<S: ThermalSource>(
        &mut self,
        value: Option<f64>,
        system: &System<S>,
    ) -> Result<()> {
        self.thresholds.set_off(value, system)
    }

    pub fn set_on_temperature<S: ThermalSource>(
        &mut self,
        value: Option<f64>,
        system: &System<S>,
    ) -> Result<()> {
        self.thresholds.set_on_temperature(value, system)
    }

    pub fn set_off_temperature<S: ThermalSource>(
        &mut self,
        value: Option<f64>,
        system: &System<S>,
    ) -> Result<()> {
        self.thresholds.set_off_temperature(value, system)
    }

    pub fn on_percentage(&self) -> f64 {
        self.thresholds.on_percentage()
    }

    pub fn off_percentage(&self) -> f64 {
        self.thresholds.off_percentage()
    }

    pub fn on_temperature<S: ThermalSource>(&mut self, system: &System<S>) -> Option<f64> {
        self.thresholds.on_temperature(system)
    }

    pub fn off_temperature<S: ThermalSource>(&mut self, system: &System<S>) -> Option<f64> {
        self.thresholds.off_temperature(system)
    }

    /// Re-applies the configured threshold defaults.
    pub fn reset<S: ThermalSource>(&mut self, system: &System<S>) -> Result<()> {
        self.set_on_percentage(None, system)?;
        self.set_off_percentage(None, system)
    }
}

impl Default for Fan {
    fn default() -> Self {
        Self::with_config(FanConfig::default()).expect("default fan configuration is valid")
    }
}

impl fmt::Display for Fan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CoolingFan({})", self.pin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensor::SimulatedSource;
    use crate::system::SystemConfig;

    #[test]
    fn hysteresis_band_holds_between_thresholds() {
        assert_eq!(next_status(Some(70.0), 90.0, 60.0, Status::Idle), Status::Idle);
        assert_eq!(next_status(Some(95.0), 90.0, 60.0, Status::Idle), Status::Active);
        assert_eq!(next_status(Some(70.0), 90.0, 60.0, Status::Active), Status::Active);
        assert_eq!(next_status(Some(55.0), 90.0, 60.0, Status::Active), Status::Idle);
    }

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(next_status(Some(90.0), 90.0, 60.0, Status::Idle), Status::Active);
        assert_eq!(next_status(Some(60.0), 90.0, 60.0, Status::Active), Status::Idle);
    }

    #[test]
    fn absent_reading_holds_either_status() {
        assert_eq!(next_status(None, 90.0, 60.0, Status::Active), Status::Active);
        assert_eq!(next_status(None, 90.0, 60.0, Status::Idle), Status::Idle);
    }

    #[test]
    fn evaluate_walks_the_band_in_percentage_space() {
        // Pass-through factor so the smoothed value tracks the source.
        let mut system = System::with_config(
            SimulatedSource::new(56.0, 80.0),
            SystemConfig { smoothing_factor: 1.0 },
        );
        let mut fan = Fan::new();

        system.sample();
        assert_eq!(fan.evaluate(&system), Status::Idle); // 70%

        system.source_mut().set_temperature(Some(76.0));
        system.sample();
        assert_eq!(fan.evaluate(&system), Status::Active); // 95%

        system.source_mut().set_temperature(Some(56.0));
        system.sample();
        assert_eq!(fan.evaluate(&system), Status::Active); // 70%, held

        system.source_mut().set_temperature(Some(44.0));
        system.sample();
        assert_eq!(fan.evaluate(&system), Status::Idle); // 55%
    }

    #[test]
    fn evaluate_holds_before_the_first_sample() {
        let system = System::new(SimulatedSource::new(56.0, 80.0));
        let mut fan = Fan::new();
        assert_eq!(fan.evaluate(&system), Status::Idle);
    }

    #[test]
    fn externally_detected_status_is_recorded() {
        let mut fan = Fan::new();
        fan.set_status(Status::Active);
        assert!(fan.status().is_active());
    }

    #[test]
    fn reset_restores_configured_defaults() {
        let system = System::new(SimulatedSource::new(56.0, 80.0));
        let mut fan = Fan::new();
        fan.set_on_percentage(Some(95.0), &system).unwrap();
        fan.set_off_percentage(Some(50.0), &system).unwrap();

        fan.reset(&system).unwrap();
        assert_eq!(fan.on_percentage(), 90.0);
        assert_eq!(fan.off_percentage(), 60.0);
    }

    #[test]
    fn display_names_the_pin() {
        let fan = Fan::new();
        assert_eq!(fan.to_string(), "CoolingFan(fan0)");
    }
}
