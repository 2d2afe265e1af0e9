//! Host system entity: sampling, smoothing, and percentage conversions.
//!
//! A [`System`] owns one temperature source, one smoothing filter, and the
//! device's maximal rated temperature. The maximum is resolved at most
//! once per instance: construction attempts the read, a failed read is
//! retried on later access, and the first successful value is retained for
//! the lifetime of the instance. While it stays unresolved, every
//! percentage conversion degrades to an absent value.
//!
//! # Examples
//!
//! ```
//! use thermofan::sensor::SimulatedSource;
//! use thermofan::system::System;
//!
//! let mut system = System::new(SimulatedSource::new(55.0, 75.0));
//! assert_eq!(system.sample(), Some(55.0));
//! assert_eq!(system.max_temperature(), Some(75.0));
//! ```

use std::fmt;

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::convert;
use crate::filter::{ExponentialFilter, DEFAULT_SMOOTHING_FACTOR};
use crate::sensor::ThermalSource;

/// Configuration for the system entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Positive smoothing factor for exponential filtering; taken by
    /// magnitude and limited to `(0.0, 1.0]`.
    pub smoothing_factor: f64,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self { smoothing_factor: DEFAULT_SMOOTHING_FACTOR }
    }
}

/// The monitored host device.
pub struct System<S> {
    source: S,
    filter: ExponentialFilter,
    max_temperature: OnceCell<f64>,
}

impl<S: ThermalSource> System<S> {
    /// Creates a system over `source` with the default configuration.
    pub fn new(source: S) -> Self {
        Self::with_config(source, SystemConfig::default())
    }

    /// Creates a system over `source` with a custom configuration.
    pub fn with_config(source: S, config: SystemConfig) -> Self {
        let system = Self {
            source,
            filter: ExponentialFilter::new(config.smoothing_factor),
            max_temperature: OnceCell::new(),
        };
        let _ = system.max_temperature();
        system
    }

    /// Maximal rated temperature, resolved once and cached.
    pub fn max_temperature(&self) -> Option<f64> {
        self.max_temperature
            .get_or_try_init(|| self.source.read_max_temperature().ok_or(()))
            .ok()
            .copied()
    }

    /// Reads the source once and returns the updated smoothed temperature.
    ///
    /// A failed read leaves the smoothed value unchanged.
    pub fn sample(&mut self) -> Option<f64> {
        let raw = self.source.read_temperature();
        self.filter.update(raw)
    }

    /// Current smoothed temperature, absent until the first sample.
    pub fn temperature(&self) -> Option<f64> {
        self.filter.value()
    }

    /// Current smoothed temperature as a percentage of the maximum.
    pub fn percentage(&self) -> Option<f64> {
        self.to_percentage(self.temperature())
    }

    /// Converts a temperature to a percentage of this device's maximum.
    pub fn to_percentage(&self, temperature: Option<f64>) -> Option<f64> {
        convert::to_percentage(temperature, self.max_temperature())
    }

    /// Converts a percentage of this device's maximum to degrees Celsius.
    pub fn to_temperature(&self, percentage: Option<f64>) -> Option<f64> {
        convert::to_temperature(percentage, self.max_temperature())
    }

    /// The smoothing factor in effect.
    pub fn smoothing_factor(&self) -> f64 {
        self.filter.factor()
    }

    /// Clears the smoothed temperature back to uninitialized.
    pub fn reset(&mut self) {
        self.filter.reset();
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}

impl<S> fmt::Debug for System<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("System")
            .field("smoothing_factor", &self.filter.factor())
            .field("smoothed", &self.filter.value())
            .field("max_temperature", &self.max_temperature.get())
            .finish_non_exhaustive()
    }
}
