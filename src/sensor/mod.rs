//! Temperature sources feeding the control core.
//!
//! The core never touches hardware directly; it consumes a [`ThermalSource`]
//! and treats every failed read as an absent value. The shipped
//! implementations cover the Linux sysfs thermal zone and a simulated
//! source for machines without one; test code mocks the trait instead.

#[cfg(test)]
use mockall::automock;

mod simulated;
mod sysfs;

pub use simulated::SimulatedSource;
pub use sysfs::SysfsThermalZone;

/// Provider of raw temperature readings in degrees Celsius.
///
/// Implementations are responsible for unit correction (e.g. milli-degree
/// scaling) and report any read failure as `None`; the core propagates
/// absence instead of erroring.
#[cfg_attr(test, automock)]
pub trait ThermalSource {
    /// Current device temperature, `None` when the sensor cannot be read.
    fn read_temperature(&self) -> Option<f64>;

    /// Maximal rated device temperature, `None` when unavailable.
    fn read_max_temperature(&self) -> Option<f64>;
}
