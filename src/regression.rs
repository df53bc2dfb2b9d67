//! Single-feature least-squares pace model

use linfa::prelude::*;
use linfa_linear::LinearRegression;
use ndarray::{Array1, Array2};
use tracing::debug;

use crate::{AnalysisError, Result};

/// Minimum number of laps required to fit a trend.
pub const MIN_FIT_LAPS: usize = 2;

/// Fitted linear pace trend: predicted lap time = intercept + slope * lap.
///
/// The slope is the degradation rate in seconds per lap. The fit is
/// deterministic: identical inputs always produce identical coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaceModel {
    /// Degradation rate, seconds per lap
    pub slope: f64,
    /// Pace at lap zero, seconds
    pub intercept: f64,
}

impl PaceModel {
    /// Predicted lap time in seconds for a lap number.
    pub fn predict(&self, lap_number: u32) -> f64 {
        self.intercept + self.slope * f64::from(lap_number)
    }
}

/// Fit lap time (seconds) against lap number by ordinary least squares.
///
/// Fails with [`AnalysisError::InsufficientData`] when fewer than
/// [`MIN_FIT_LAPS`] points are supplied, and with
/// [`AnalysisError::ComputationFailed`] when the points cannot support a
/// slope (all on one lap number) or the solver rejects the system.
pub fn fit_pace_model(lap_numbers: &[f64], lap_times: &[f64]) -> Result<PaceModel> {
    if lap_numbers.len() != lap_times.len() {
        return Err(AnalysisError::computation_failed(format!(
            "mismatched series lengths: {} lap numbers vs {} lap times",
            lap_numbers.len(),
            lap_times.len()
        )));
    }
    if lap_numbers.len() < MIN_FIT_LAPS {
        return Err(AnalysisError::insufficient_data(lap_numbers.len(), MIN_FIT_LAPS));
    }
    // A single distinct lap number leaves the slope unconstrained.
    let first = lap_numbers[0];
    if lap_numbers.iter().all(|&x| x == first) {
        return Err(AnalysisError::computation_failed(
            "all laps share one lap number; no trend to fit",
        ));
    }

    let records = Array2::from_shape_vec((lap_numbers.len(), 1), lap_numbers.to_vec())
        .map_err(|err| AnalysisError::computation_failed(err.to_string()))?;
    let targets = Array1::from_vec(lap_times.to_vec());
    let dataset = Dataset::new(records, targets);

    let fitted = LinearRegression::new()
        .fit(&dataset)
        .map_err(|err| AnalysisError::computation_failed(err.to_string()))?;

    let model = PaceModel { slope: fitted.params()[0], intercept: fitted.intercept() };
    debug!(
        slope = model.slope,
        intercept = model.intercept,
        laps = lap_numbers.len(),
        "fitted pace model"
    );
    Ok(model)
}
