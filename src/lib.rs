//! Thermofan - cooling fan control driven by host thermal sensors
//!
//! This crate decides when a binary cooling actuator (a fan) should run,
//! based on a device temperature sensor. Raw readings are smoothed with an
//! exponential filter, expressed as a percentage of the device's maximal
//! rated temperature, and compared against a hysteresis band with distinct
//! ON and OFF thresholds. Thresholds in percentage form stay portable
//! across hardware with different absolute temperature limits.
//!
//! # Features
//!
//! - **Exponential smoothing**: damps sensor noise before any decision
//! - **Hysteresis control**: separate start/stop thresholds, no chatter
//! - **Percentage-of-maximum thresholds**: portable across devices
//! - **Pluggable sources**: Linux sysfs thermal zones, simulated readings,
//!   or any [`sensor::ThermalSource`] implementation
//! - **Fail-safe absence handling**: a failed read is an absent value, the
//!   controller holds its last status and nothing panics
//!
//! # Examples
//!
//! ```
//! use thermofan::prelude::*;
//!
//! let mut system = System::new(SimulatedSource::default());
//! let mut fan = Fan::new();
//!
//! // The hosting application drives the cadence: sample, then evaluate.
//! let smoothed = system.sample();
//! assert!(smoothed.is_some());
//! assert_eq!(fan.evaluate(&system), Status::Idle);
//! ```
//!
//! On a real board, replace the source:
//!
//! ```no_run
//! use thermofan::prelude::*;
//!
//! let mut system = System::new(SysfsThermalZone::new());
//! let mut fan = Fan::new();
//!
//! system.sample();
//! if fan.evaluate(&system).is_active() {
//!     // hand fan.pin() to the actuation layer
//! }
//! ```
//!
//! # Error Handling
//!
//! A failed sensor read is not an error: it degrades to an absent value
//! and propagates as absence through every conversion. [`Error`] only
//! covers configuration-time invariant violations, such as an inverted
//! hysteresis band.

#![doc(html_root_url = "https://docs.rs/thermofan/0.1.2")]

pub mod convert;
pub mod error;
pub mod fan;
pub mod filter;
pub mod sensor;
pub mod system;

pub use error::{Error, Result};

/// Re-export of the commonly used types.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::fan::{Fan, FanConfig, Status, ThresholdRange};
    pub use crate::filter::ExponentialFilter;
    pub use crate::sensor::{SimulatedSource, SysfsThermalZone, ThermalSource};
    pub use crate::system::{System, SystemConfig};
}
