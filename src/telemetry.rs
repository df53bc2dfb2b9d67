//! Side-by-side driver telemetry comparison

use tracing::{debug, warn};

use crate::clock::{format_duration, format_lap_time};
use crate::laps;
use crate::loader::SessionLoader;
use crate::reference::REFERENCE_SEASON;
use crate::types::{
    CircuitLayout, ClassifiedRow, Lap, PaceSeries, SessionKind, SpeedTrace, TelemetryComparison,
    WinnerInfo,
};
use crate::{AnalysisError, Result};

/// Compares two drivers' race pace and fastest-lap speed traces.
///
/// Like the strategy estimator, the comparator is a pure function of the
/// loaded session and the request parameters.
pub struct TelemetryComparator<L> {
    loader: L,
}

impl<L: SessionLoader> TelemetryComparator<L> {
    /// Create a comparator over a session data source.
    pub fn new(loader: L) -> Self {
        Self { loader }
    }

    /// Build a side-by-side comparison of two drivers in one race.
    ///
    /// Pace data always covers both drivers. A driver whose fastest-lap
    /// telemetry cannot be extracted is omitted from the speed traces
    /// without failing the request, and a missing or malformed winner row
    /// degrades to "N/A" placeholders.
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::DataUnavailable`] when the race session cannot be
    ///   resolved
    /// - [`AnalysisError::DriverDataUnavailable`] when either driver has no
    ///   representative laps (no partial result is returned)
    pub async fn compare(
        &self,
        season: u16,
        circuit: &str,
        driver_a: &str,
        driver_b: &str,
    ) -> Result<TelemetryComparison> {
        let session = self
            .loader
            .load(season, circuit, SessionKind::Race)
            .await
            .ok_or_else(|| AnalysisError::data_unavailable(season, circuit))?;

        let laps_a: Vec<&Lap> = laps::representative_for_driver(&session.laps, driver_a).collect();
        let laps_b: Vec<&Lap> = laps::representative_for_driver(&session.laps, driver_b).collect();
        debug!(circuit, driver_a, driver_b, a = laps_a.len(), b = laps_b.len(), "driver laps");

        if laps_a.is_empty() {
            return Err(AnalysisError::driver_data_unavailable(driver_a));
        }
        if laps_b.is_empty() {
            return Err(AnalysisError::driver_data_unavailable(driver_b));
        }

        let pace = vec![pace_series(driver_a, &laps_a), pace_series(driver_b, &laps_b)];

        let mut speed_traces = Vec::with_capacity(2);
        for (driver, driver_laps) in [(driver_a, &laps_a), (driver_b, &laps_b)] {
            let trace =
                laps::fastest(driver_laps.iter().copied()).and_then(|lap| speed_trace(driver, lap));
            match trace {
                Some(trace) => speed_traces.push(trace),
                None => warn!(driver, "speed trace extraction failed, omitting driver"),
            }
        }

        let winner = session.winner().map(winner_info).unwrap_or_else(WinnerInfo::placeholder);

        Ok(TelemetryComparison {
            race_name: session.event_name.clone(),
            pace,
            speed_traces,
            winner,
        })
    }

    /// Extract the circuit layout from the reference season's fastest
    /// qualifying lap.
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::DataUnavailable`] when the qualifying session
    ///   cannot be resolved
    /// - [`AnalysisError::InsufficientData`] when no representative lap with
    ///   a time exists
    /// - [`AnalysisError::ComputationFailed`] when the fastest lap carries
    ///   no telemetry
    pub async fn circuit_layout(&self, circuit: &str) -> Result<CircuitLayout> {
        let session = self
            .loader
            .load(REFERENCE_SEASON, circuit, SessionKind::Qualifying)
            .await
            .ok_or_else(|| AnalysisError::data_unavailable(REFERENCE_SEASON, circuit))?;

        let lap = laps::fastest(laps::representative(&session.laps))
            .ok_or_else(|| AnalysisError::insufficient_data(0, 1))?;
        if lap.telemetry.is_empty() {
            return Err(AnalysisError::computation_failed(
                "no telemetry recorded for the fastest qualifying lap",
            ));
        }

        Ok(CircuitLayout {
            name: session.event_name.clone(),
            x: lap.telemetry.iter().map(|sample| sample.x).collect(),
            y: lap.telemetry.iter().map(|sample| sample.y).collect(),
        })
    }
}

fn pace_series(driver: &str, driver_laps: &[&Lap]) -> PaceSeries {
    let mut lap_numbers = Vec::with_capacity(driver_laps.len());
    let mut lap_times = Vec::with_capacity(driver_laps.len());
    for lap in driver_laps {
        if let Some(secs) = lap.time_secs() {
            lap_numbers.push(lap.number);
            lap_times.push(secs);
        }
    }
    PaceSeries { driver: driver.to_string(), lap_numbers, lap_times }
}

fn speed_trace(driver: &str, lap: &Lap) -> Option<SpeedTrace> {
    if lap.telemetry.is_empty() {
        return None;
    }
    let time = lap.time?;
    Some(SpeedTrace {
        driver: driver.to_string(),
        distance: lap.telemetry.iter().map(|sample| sample.distance).collect(),
        speed: lap.telemetry.iter().map(|sample| sample.speed).collect(),
        lap_time: format_lap_time(time),
    })
}

fn winner_info(row: &ClassifiedRow) -> WinnerInfo {
    WinnerInfo {
        name: row.driver.clone(),
        team: row.team.clone(),
        time: row.total_time.map(format_duration).unwrap_or_else(|| "N/A".to_string()),
    }
}
