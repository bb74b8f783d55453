use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{
    FULL_TURNS, INVALID_JITTER_ERROR, JITTER_DEGREES, RESPIN_DELAY_MS, SPIN_DURATION_MS,
    ZERO_DURATION_ERROR,
};

/// Tunables for one wheel. The presentation layer sizes its rotation
/// transition from `spin_duration_ms`, so the wheel and the reported result
/// always stop together.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WheelConfig {
    pub full_turns: u32,
    /// Total jitter spread in degrees, centred on the segment middle.
    /// Spreads wider than a segment arc are narrowed when planning a spin.
    pub jitter_degrees: f64,
    pub spin_duration_ms: u32,
    pub respin_delay_ms: u32,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            full_turns: FULL_TURNS,
            jitter_degrees: JITTER_DEGREES,
            spin_duration_ms: SPIN_DURATION_MS,
            respin_delay_ms: RESPIN_DELAY_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WheelConfigError {
    InvalidJitter(f64),
    ZeroDuration,
}

impl fmt::Display for WheelConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WheelConfigError::InvalidJitter(value) => write!(f, "{} (got {})", INVALID_JITTER_ERROR, value),
            WheelConfigError::ZeroDuration => write!(f, "{}", ZERO_DURATION_ERROR),
        }
    }
}

impl std::error::Error for WheelConfigError {}

impl WheelConfig {
    /// Rejects settings no wheel can run with. Call once at startup.
    pub fn validate(&self) -> Result<(), WheelConfigError> {
        if !self.jitter_degrees.is_finite() || self.jitter_degrees < 0.0 {
            return Err(WheelConfigError::InvalidJitter(self.jitter_degrees));
        }
        if self.spin_duration_ms == 0 {
            return Err(WheelConfigError::ZeroDuration);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WheelConfig::default();
        assert_eq!(config.full_turns, 5);
        assert_eq!(config.jitter_degrees, 40.0);
        assert_eq!(config.spin_duration_ms, 3000);
        assert_eq!(config.respin_delay_ms, 300);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: WheelConfig = serde_json::from_str(r#"{ "jitter_degrees": 10.0 }"#).unwrap();
        assert_eq!(config.jitter_degrees, 10.0);
        assert_eq!(config.spin_duration_ms, 3000);
    }

    #[test]
    fn test_validate_rejects_unusable_settings() {
        let zero_duration: WheelConfig = serde_json::from_str(r#"{ "spin_duration_ms": 0 }"#).unwrap();
        assert_eq!(zero_duration.validate(), Err(WheelConfigError::ZeroDuration));

        let negative: WheelConfig = serde_json::from_str(r#"{ "jitter_degrees": -5.0 }"#).unwrap();
        assert_eq!(negative.validate(), Err(WheelConfigError::InvalidJitter(-5.0)));

        let mut infinite = WheelConfig::default();
        infinite.jitter_degrees = f64::INFINITY;
        assert!(infinite.validate().is_err());
    }

    #[test]
    fn test_wide_jitter_is_accepted() {
        // Narrowed per table size at plan time
        let wide: WheelConfig = serde_json::from_str(r#"{ "jitter_degrees": 100.0 }"#).unwrap();
        assert!(wide.validate().is_ok());
    }
}
