use validator::ValidationError;

use crate::constants::{WEIGHT_SCALE, WEIGHT_TOLERANCE};

pub fn validate_reward_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("missing_reward_name"));
    }
    Ok(())
}

pub fn validate_weight(weight: f64) -> Result<(), ValidationError> {
    if !weight.is_finite() || weight <= 0.0 {
        return Err(ValidationError::new("invalid_reward_weight"));
    }
    Ok(())
}

/// True when the weights add up to a full 100 points.
pub fn is_complete_weight_total(total: f64) -> bool {
    (total - WEIGHT_SCALE).abs() <= WEIGHT_TOLERANCE
}
