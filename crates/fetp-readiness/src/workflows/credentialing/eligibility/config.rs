use serde::{Deserialize, Serialize};

/// Thresholds applied by the eligibility ladder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EligibilityThresholds {
    pub minimum_duration_months: f64,
    pub minimum_field_percent: f64,
    pub optimal_field_percent: f64,
}

impl Default for EligibilityThresholds {
    fn default() -> Self {
        Self {
            minimum_duration_months: 18.0,
            minimum_field_percent: 60.0,
            optimal_field_percent: 70.0,
        }
    }
}
