//! Strategy estimation result

use serde::{Deserialize, Serialize};

/// Aggregate race-time estimate produced by the strategy estimator.
///
/// Request-scoped: a pure function of the loaded session and the request
/// parameters, with no identity beyond the request that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyEstimate {
    /// Estimated total race time in minutes, rounded to 2 decimals
    pub total_time_min: f64,
    /// Fitted degradation rate in seconds per lap, rounded to 4 decimals
    pub degradation: f64,
    /// Human-readable pit plan: "No Stops", or "Lap 18, Lap 38"
    pub stop_recommendation: String,
}
