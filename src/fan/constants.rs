/// Default fan start threshold in percentage of the maximal temperature
pub const DEFAULT_ON_PERCENTAGE: f64 = 90.0;

/// Lowest accepted fan start threshold percentage
pub const ON_PERCENTAGE_MIN: f64 = 80.0;

/// Highest accepted fan start threshold percentage
pub const ON_PERCENTAGE_MAX: f64 = 95.0;

/// Default fan stop threshold in percentage of the maximal temperature
pub const DEFAULT_OFF_PERCENTAGE: f64 = 60.0;

/// Lowest accepted fan stop threshold percentage
pub const OFF_PERCENTAGE_MIN: f64 = 50.0;

/// Highest accepted fan stop threshold percentage
pub const OFF_PERCENTAGE_MAX: f64 = 75.0;

/// Default opaque identifier handed to the actuation layer
pub const DEFAULT_PIN: &str = "fan0";
