#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("threshold range inverted: min {min}% above max {max}%")]
    InvalidThresholdRange { min: f64, max: f64 },

    #[error("threshold default {default}% outside {min}%..{max}%")]
    ThresholdDefaultOutOfRange { default: f64, min: f64, max: f64 },

    #[error("threshold band inverted: off {off}% must stay below on {on}%")]
    InvalidThresholdBand { on: f64, off: f64 },

    #[error("unknown status token: {0}")]
    UnknownStatus(String),
}

pub type Result<T> = std::result::Result<T, Error>;
