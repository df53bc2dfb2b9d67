//! Error types for strategy and telemetry analysis.
//!
//! Every recoverable data-shape problem inside the estimator or comparator is
//! converted to an [`AnalysisError`] at the point of use; nothing panics
//! across a component boundary. The `Display` rendering of each variant is
//! the short human-readable string the presentation layer shows in place of
//! results.

use thiserror::Error;

/// Result type alias for analysis operations.
pub type Result<T, E = AnalysisError> = std::result::Result<T, E>;

/// Main error type for strategy estimation and telemetry comparison.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum AnalysisError {
    /// The loader could not resolve a session for the given parameters.
    #[error("historical data unavailable for {circuit} ({season})")]
    DataUnavailable { season: u16, circuit: String },

    /// A named driver has no usable laps in an otherwise valid session.
    #[error("driver data unavailable for {driver}")]
    DriverDataUnavailable { driver: String },

    /// The filtered dataset is too small to fit a pace trend.
    #[error("not enough representative laps ({laps} usable, {min} required)")]
    InsufficientData { laps: usize, min: usize },

    /// The dataset was large enough but numerically unusable.
    #[error("pace computation failed: {details}")]
    ComputationFailed { details: String },
}

impl AnalysisError {
    /// Helper constructor for unresolvable sessions.
    pub fn data_unavailable(season: u16, circuit: impl Into<String>) -> Self {
        AnalysisError::DataUnavailable { season, circuit: circuit.into() }
    }

    /// Helper constructor for drivers without usable laps.
    pub fn driver_data_unavailable(driver: impl Into<String>) -> Self {
        AnalysisError::DriverDataUnavailable { driver: driver.into() }
    }

    /// Helper constructor for undersized datasets.
    pub fn insufficient_data(laps: usize, min: usize) -> Self {
        AnalysisError::InsufficientData { laps, min }
    }

    /// Helper constructor for numerical failures.
    pub fn computation_failed(details: impl Into<String>) -> Self {
        AnalysisError::ComputationFailed { details: details.into() }
    }

    /// Returns whether this error reflects missing upstream data rather than
    /// a fault in the computation itself. Data gaps typically clear up once
    /// the timing provider publishes the session.
    pub fn is_data_gap(&self) -> bool {
        match self {
            AnalysisError::DataUnavailable { .. } => true,
            AnalysisError::DriverDataUnavailable { .. } => true,
            AnalysisError::InsufficientData { .. } => true,
            AnalysisError::ComputationFailed { .. } => false,
        }
    }
}
