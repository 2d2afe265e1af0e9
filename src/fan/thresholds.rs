//! Threshold policy: clamped ON/OFF percentages with their temperature
//! equivalents kept in step.

use crate::error::{Error, Result};
use crate::fan::types::ThresholdRange;
use crate::sensor::ThermalSource;
use crate::system::System;

#[derive(Debug, Clone)]
struct Threshold {
    range: ThresholdRange,
    percentage: f64,
    temperature: Option<f64>,
}

impl Threshold {
    fn new(range: ThresholdRange) -> Result<Self> {
        range.validate()?;
        Ok(Self { range, percentage: range.default, temperature: None })
    }
}

/// The ON/OFF threshold pair of one fan.
///
/// Setters substitute the configured default for absent input, clamp into
/// the configured range, reject a band inversion, and eagerly recompute the
/// temperature equivalent so both views always agree. The temperature view
/// is recomputed on read only while it is still unresolved because the
/// maximal temperature was unknown at set time.
#[derive(Debug, Clone)]
pub struct Thresholds {
    on: Threshold,
    off: Threshold,
}

impl Thresholds {
    pub fn new(on: ThresholdRange, off: ThresholdRange) -> Result<Self> {
        let on = Threshold::new(on)?;
        let off = Threshold::new(off)?;
        if off.percentage >= on.percentage {
            return Err(Error::InvalidThresholdBand {
                on: on.percentage,
                off: off.percentage,
            });
        }
        Ok(Self { on, off })
    }

    /// Sets the start threshold from a percentage.
    pub fn set_on<S: ThermalSource>(
        &mut self,
        value: Option<f64>,
        system: &System<S>,
    ) -> Result<()> {
        let percentage = self.on.range.resolve(value);
        if percentage <= self.off.percentage {
            return Err(Error::InvalidThresholdBand {
                on: percentage,
                off: self.off.percentage,
            });
        }
        self.on.percentage = percentage;
        self.on.temperature = system.to_temperature(Some(percentage));
        Ok(())
    }

    /// Sets the stop threshold from a percentage.
    pub fn set_off<S: ThermalSource>(
        &mut self,
        value: Option<f64>,
        system: &System<S>,
    ) -> Result<()> {
        let percentage = self.off.range.resolve(value);
        if percentage >= self.on.percentage {
            return Err(Error::InvalidThresholdBand {
                on: self.on.percentage,
                off: percentage,
            });
        }
        self.off.percentage = percentage;
        self.off.temperature = system.to_temperature(Some(percentage));
        Ok(())
    }

    /// Sets the start threshold from degrees Celsius.
    ///
    /// The value is converted to a percentage first and then goes through
    /// [`set_on`](Self::set_on), so clamping happens in percentage space.
    /// When the maximal temperature is unresolved the conversion yields
    /// nothing and the configured default applies.
    pub fn set_on_temperature<S: ThermalSource>(
        &mut self,
        value: Option<f64>,
        system: &System<S>,
    ) -> Result<()> {
        self.set_on(system.to_percentage(value), system)
    }

    /// Sets the stop threshold from degrees Celsius.
    pub fn set_off_temperature<S: ThermalSource>(
        &mut self,
        value: Option<f64>,
        system: &System<S>,
    ) -> Result<()> {
        self.set_off(system.to_percentage(value), system)
    }

    pub fn on_percentage(&self) -> f64 {
        self.on.percentage
    }

    pub fn off_percentage(&self) -> f64 {
        self.off.percentage
    }

    /// Start threshold in degrees Celsius, if the maximum is known.
    pub fn on_temperature<S: ThermalSource>(&mut self, system: &System<S>) -> Option<f64> {
        if self.on.temperature.is_none() {
            self.on.temperature = system.to_temperature(Some(self.on.percentage));
        }
        self.on.temperature
    }

    /// Stop threshold in degrees Celsius, if the maximum is known.
    pub fn off_temperature<S: ThermalSource>(&mut self, system: &System<S>) -> Option<f64> {
        if self.off.temperature.is_none() {
            self.off.temperature = system.to_temperature(Some(self.off.percentage));
        }
        self.off.temperature
    }
}
