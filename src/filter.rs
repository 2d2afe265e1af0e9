//! Exponential smoothing of raw sensor readings.
//!
//! Temperature sensors on small boards are noisy enough to make a naive
//! threshold controller chatter. The filter here is a single-value
//! recursive low-pass: each output blends the newest reading with the
//! previous output, so short spikes are damped while sustained trends
//! still come through.

/// Default smoothing factor applied when a configuration does not name one.
pub const DEFAULT_SMOOTHING_FACTOR: f64 = 0.2;

/// Exponential smoothing filter over an intermittent reading stream.
///
/// The smoothing factor is fixed at construction. `1.0` disables smoothing
/// (the output tracks the raw input exactly), `0.5` behaves like a
/// distance-halving running average, and smaller values damp harder.
///
/// # Examples
///
/// ```
/// use thermofan::filter::ExponentialFilter;
///
/// let mut filter = ExponentialFilter::new(0.5);
/// assert_eq!(filter.update(Some(50.0)), Some(50.0));
/// assert_eq!(filter.update(Some(60.0)), Some(55.0));
/// assert_eq!(filter.update(None), Some(55.0));
/// ```
#[derive(Debug, Clone)]
pub struct ExponentialFilter {
    factor: f64,
    value: Option<f64>,
}

impl ExponentialFilter {
    /// Creates a filter with the given smoothing factor.
    ///
    /// The factor is taken by magnitude and clamped into
    /// `[f64::EPSILON, 1.0]`. A factor of exactly `0.0` would freeze the
    /// output forever, so it is coerced to the smallest positive value
    /// instead of being rejected; the result is effectively fully damped
    /// but stays numerically well-defined.
    pub fn new(factor: f64) -> Self {
        Self { factor: factor.abs().clamp(f64::EPSILON, 1.0), value: None }
    }

    /// Feeds one raw reading and returns the current smoothed value.
    ///
    /// The first present reading initializes the output to itself. An
    /// absent reading leaves the output unchanged, so a sensor glitch does
    /// not disturb the smoothed signal; before any reading has arrived the
    /// output is absent as well.
    pub fn update(&mut self, raw: Option<f64>) -> Option<f64> {
        if let Some(raw) = raw {
            self.value = Some(match self.value {
                Some(previous) => self.factor * raw + (1.0 - self.factor) * previous,
                None => raw,
            });
        }
        self.value
    }

    /// Current smoothed value without feeding a new reading.
    pub fn value(&self) -> Option<f64> {
        self.value
    }

    /// The smoothing factor in effect.
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Clears the output back to uninitialized.
    pub fn reset(&mut self) {
        self.value = None;
    }
}

impl Default for ExponentialFilter {
    fn default() -> Self {
        Self::new(DEFAULT_SMOOTHING_FACTOR)
    }
}
