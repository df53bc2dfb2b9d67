//! Telemetry comparison results

use serde::{Deserialize, Serialize};

/// One driver's lap-by-lap race pace.
///
/// Parallel vectors, ascending lap number as recorded; rows missing a lap
/// time are dropped before this is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaceSeries {
    /// Three-letter driver code
    pub driver: String,
    /// Lap numbers with a recorded time
    pub lap_numbers: Vec<u32>,
    /// Lap times in seconds, same order as `lap_numbers`
    pub lap_times: Vec<f64>,
}

/// Speed-versus-distance trace of one driver's fastest lap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedTrace {
    /// Three-letter driver code
    pub driver: String,
    /// Distance from the start line in metres, ascending
    pub distance: Vec<f64>,
    /// Speed in km/h, same order as `distance`
    pub speed: Vec<f64>,
    /// Display lap time, `HH:MM:SS.f` (see [`crate::format_lap_time`])
    pub lap_time: String,
}

/// Race-winner metadata resolved from the session classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WinnerInfo {
    /// Winning driver code, or "N/A"
    pub name: String,
    /// Winning team name, or "N/A"
    pub team: String,
    /// Winning total time as `HH:MM:SS.ffffff`, or "N/A"
    pub time: String,
}

impl WinnerInfo {
    /// Placeholder block shown when the classification is absent or
    /// malformed; the comparison as a whole still succeeds.
    pub fn placeholder() -> Self {
        WinnerInfo {
            name: "N/A".to_string(),
            team: "N/A".to_string(),
            time: "N/A".to_string(),
        }
    }
}

/// Side-by-side comparison of two drivers in one race.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryComparison {
    /// Official event name
    pub race_name: String,
    /// Race pace for both requested drivers, request order
    pub pace: Vec<PaceSeries>,
    /// Fastest-lap speed traces; a driver whose telemetry extraction failed
    /// is omitted here while still present in `pace`
    pub speed_traces: Vec<SpeedTrace>,
    /// Race-winner metadata
    pub winner: WinnerInfo,
}

/// Circuit layout extracted from the fastest qualifying lap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitLayout {
    /// Official event name
    pub name: String,
    /// Track path X coordinates in recorded order
    pub x: Vec<f64>,
    /// Track path Y coordinates, same order as `x`
    pub y: Vec<f64>,
}
