use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geo::DEFAULT_AVERAGE_SPEED_KMH;

/// Time charged for boarding or alighting at each station, in minutes.
pub const DEFAULT_DWELL_MINUTES: f64 = 1.0;

/// Tunables for time-bounded exploration.
///
/// Hop- and transfer-bounded searches ignore these values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReachConfig {
    /// Dwell charged at the source before departure and again at every stop reached.
    pub dwell_minutes: f64,
    /// Average speed used to turn great-circle distance into minutes.
    pub average_speed_kmh: f64,
}

impl Default for ReachConfig {
    fn default() -> Self {
        Self {
            dwell_minutes: DEFAULT_DWELL_MINUTES,
            average_speed_kmh: DEFAULT_AVERAGE_SPEED_KMH,
        }
    }
}

impl ReachConfig {
    pub fn with_dwell_minutes(mut self, dwell_minutes: f64) -> Self {
        self.dwell_minutes = dwell_minutes;
        self
    }

    pub fn with_average_speed_kmh(mut self, average_speed_kmh: f64) -> Self {
        self.average_speed_kmh = average_speed_kmh;
        self
    }

    /// Reject values that would make travel times negative, infinite or NaN.
    pub fn validate(&self) -> Result<()> {
        if !self.dwell_minutes.is_finite() || self.dwell_minutes < 0.0 {
            return Err(Error::InvalidConfig {
                message: format!(
                    "dwell_minutes must be a finite non-negative number, got {}",
                    self.dwell_minutes
                ),
            });
        }
        if !self.average_speed_kmh.is_finite() || self.average_speed_kmh <= 0.0 {
            return Err(Error::InvalidConfig {
                message: format!(
                    "average_speed_kmh must be a finite positive number, got {}",
                    self.average_speed_kmh
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_network_assumptions() {
        let config = ReachConfig::default();
        assert_eq!(config.dwell_minutes, 1.0);
        assert_eq!(config.average_speed_kmh, 40.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: ReachConfig =
            serde_json::from_str(r#"{"dwell_minutes": 0.5}"#).expect("valid json");
        assert_eq!(config.dwell_minutes, 0.5);
        assert_eq!(config.average_speed_kmh, DEFAULT_AVERAGE_SPEED_KMH);
    }

    #[test]
    fn rejects_non_positive_speed() {
        let err = ReachConfig::default()
            .with_average_speed_kmh(0.0)
            .validate()
            .expect_err("zero speed");
        assert!(err.to_string().contains("average_speed_kmh"));
    }

    #[test]
    fn rejects_negative_or_nan_dwell() {
        assert!(ReachConfig::default()
            .with_dwell_minutes(-1.0)
            .validate()
            .is_err());
        assert!(ReachConfig::default()
            .with_dwell_minutes(f64::NAN)
            .validate()
            .is_err());
        assert!(ReachConfig::default()
            .with_dwell_minutes(0.0)
            .validate()
            .is_ok());
    }
}
