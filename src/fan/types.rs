use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::fan::constants::*;

/// Actuation status of the cooling fan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Cooling is not running.
    Idle,
    /// Cooling is running.
    Active,
}

impl Status {
    /// Token form used by reporting layers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Idle => "Idle",
            Status::Active => "Active",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Status::Active)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(token: &str) -> Result<Self> {
        match token {
            "Idle" => Ok(Status::Idle),
            "Active" => Ok(Status::Active),
            other => Err(Error::UnknownStatus(other.to_string())),
        }
    }
}

/// Accepted value range for one threshold, with the default substituted
/// when a caller supplies no value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ThresholdRange {
    pub default: f64,
    pub min: f64,
    pub max: f64,
}

impl ThresholdRange {
    /// Substitutes the default for an absent value and clamps into range.
    pub fn resolve(&self, value: Option<f64>) -> f64 {
        value.unwrap_or(self.default).max(self.min).min(self.max)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min > self.max {
            return Err(Error::InvalidThresholdRange { min: self.min, max: self.max });
        }
        if self.default < self.min || self.default > self.max {
            return Err(Error::ThresholdDefaultOutOfRange {
                default: self.default,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Configuration for the fan controller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FanConfig {
    /// Opaque identifier for the actuation layer; not interpreted here.
    pub pin: String,
    /// Start threshold range in percentage of the maximal temperature.
    pub on: ThresholdRange,
    /// Stop threshold range in percentage of the maximal temperature.
    pub off: ThresholdRange,
}

impl Default for FanConfig {
    fn default() -> Self {
        Self {
            pin: DEFAULT_PIN.to_string(),
            on: ThresholdRange {
                default: DEFAULT_ON_PERCENTAGE,
                min: ON_PERCENTAGE_MIN,
                max: ON_PERCENTAGE_MAX,
            },
            off: ThresholdRange {
                default: DEFAULT_OFF_PERCENTAGE,
                min: OFF_PERCENTAGE_MIN,
                max: OFF_PERCENTAGE_MAX,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_tokens_round_trip() {
        assert_eq!(Status::Active.to_string(), "Active");
        assert_eq!("Idle".parse::<Status>().unwrap(), Status::Idle);
        assert!("Online".parse::<Status>().is_err());
    }

    #[test]
    fn resolve_substitutes_default_and_clamps() {
        let range = ThresholdRange { default: 90.0, min: 80.0, max: 95.0 };
        assert_eq!(range.resolve(None), 90.0);
        assert_eq!(range.resolve(Some(150.0)), 95.0);
        assert_eq!(range.resolve(Some(10.0)), 80.0);
        assert_eq!(range.resolve(Some(85.0)), 85.0);
    }

    #[test]
    fn validate_rejects_malformed_ranges() {
        let inverted = ThresholdRange { default: 90.0, min: 95.0, max: 80.0 };
        assert!(matches!(inverted.validate(), Err(Error::InvalidThresholdRange { .. })));

        let stray_default = ThresholdRange { default: 40.0, min: 80.0, max: 95.0 };
        assert!(matches!(
            stray_default.validate(),
            Err(Error::ThresholdDefaultOutOfRange { .. })
        ));
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: FanConfig = serde_json::from_str(
            r#"{"pin": "gpio18", "on": {"default": 85.0, "min": 80.0, "max": 95.0}}"#,
        )
        .unwrap();
        assert_eq!(config.pin, "gpio18");
        assert_eq!(config.on.default, 85.0);
        assert_eq!(config.off.default, 60.0);
        assert_eq!(config.off.min, 50.0);
    }
}
