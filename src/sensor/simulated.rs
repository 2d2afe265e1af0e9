//! Simulated source for machines without an accessible thermal zone.

use super::ThermalSource;

/// Fixed readings standing in for real hardware.
///
/// Useful on development machines and in demos; scripted test doubles
/// usually mock [`ThermalSource`] directly instead.
#[derive(Debug, Clone)]
pub struct SimulatedSource {
    temperature: Option<f64>,
    max_temperature: Option<f64>,
}

impl SimulatedSource {
    pub fn new(temperature: f64, max_temperature: f64) -> Self {
        Self { temperature: Some(temperature), max_temperature: Some(max_temperature) }
    }

    /// A source whose every read fails, for exercising degraded paths.
    pub fn unreadable() -> Self {
        Self { temperature: None, max_temperature: None }
    }

    pub fn set_temperature(&mut self, temperature: Option<f64>) {
        self.temperature = temperature;
    }

    pub fn set_max_temperature(&mut self, max_temperature: Option<f64>) {
        self.max_temperature = max_temperature;
    }
}

impl Default for SimulatedSource {
    fn default() -> Self {
        Self::new(55.0, 75.0)
    }
}

impl ThermalSource for SimulatedSource {
    fn read_temperature(&self) -> Option<f64> {
        self.temperature
    }

    fn read_max_temperature(&self) -> Option<f64> {
        self.max_temperature
    }
}
