//! Race strategy estimation from historical lap data

use tracing::{debug, info, warn};

use crate::laps;
use crate::loader::SessionLoader;
use crate::reference::{PIT_LOSS_SECONDS, RACE_DISTANCE_LAPS, REFERENCE_SEASON, pit_windows};
use crate::regression::fit_pace_model;
use crate::types::{Compound, Lap, SessionKind, StrategyEstimate};
use crate::{AnalysisError, Result};

/// Estimates total race time for a circuit, tyre compound, and pit plan.
///
/// The estimator fits a degradation trend to the reference season's race
/// laps at the circuit, extrapolates it across the standardised race
/// distance, and layers compound and pit-loss adjustments on top. It is a
/// pure function of the loaded session and the request parameters: repeated
/// calls with identical inputs over an unchanged session produce identical
/// estimates.
pub struct StrategyEstimator<L> {
    loader: L,
}

impl<L: SessionLoader> StrategyEstimator<L> {
    /// Create an estimator over a session data source.
    pub fn new(loader: L) -> Self {
        Self { loader }
    }

    /// Estimate the total race time for one strategy.
    ///
    /// `compound` is matched against the upstream names `SOFT`, `MEDIUM`,
    /// and `HARD`; anything else is silently neutral. `stops` selects a
    /// standardised pit window; counts without a published window get no
    /// pit penalty and a "No Stops" recommendation.
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::DataUnavailable`] when the reference race session
    ///   cannot be resolved for `circuit`
    /// - [`AnalysisError::InsufficientData`] when fewer than two
    ///   representative laps remain after filtering
    /// - [`AnalysisError::ComputationFailed`] when the trend fit is
    ///   numerically unusable
    pub async fn estimate(
        &self,
        circuit: &str,
        compound: &str,
        stops: u32,
    ) -> Result<StrategyEstimate> {
        let session = self
            .loader
            .load(REFERENCE_SEASON, circuit, SessionKind::Race)
            .await
            .ok_or_else(|| AnalysisError::data_unavailable(REFERENCE_SEASON, circuit))?;

        let usable: Vec<&Lap> = laps::representative(&session.laps).collect();
        debug!(
            circuit,
            total = session.laps.len(),
            usable = usable.len(),
            "filtered representative laps"
        );

        let lap_numbers: Vec<f64> = usable.iter().map(|lap| f64::from(lap.number)).collect();
        let lap_times: Vec<f64> = usable.iter().filter_map(|lap| lap.time_secs()).collect();
        let model = fit_pace_model(&lap_numbers, &lap_times)?;

        let delta = Compound::from_name(compound).map(Compound::delta_secs).unwrap_or(0.0);

        let stop_laps: &[u32] = match pit_windows(stops) {
            Some(stop_laps) => stop_laps,
            None => {
                warn!(stops, "no pit window table for stop count, applying no pit penalty");
                &[]
            }
        };

        let mut total_secs = 0.0;
        for lap_number in 1..=RACE_DISTANCE_LAPS {
            let mut adjusted = model.predict(lap_number) + delta;
            if stop_laps.contains(&lap_number) {
                adjusted += PIT_LOSS_SECONDS;
            }
            total_secs += adjusted;
        }

        let stop_recommendation = if stop_laps.is_empty() {
            "No Stops".to_string()
        } else {
            stop_laps
                .iter()
                .map(|lap_number| format!("Lap {lap_number}"))
                .collect::<Vec<_>>()
                .join(", ")
        };

        info!(circuit, compound, stops, total_secs, "estimated race strategy");

        Ok(StrategyEstimate {
            total_time_min: round_to(total_secs / 60.0, 2),
            degradation: round_to(model.slope, 4),
            stop_recommendation,
        })
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
