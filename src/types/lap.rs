//! Lap and telemetry sample types

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// One point along a lap's distance axis.
///
/// Samples are recorded as an ordered sequence per lap, ascending by
/// distance, and are immutable once loaded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySample {
    /// Distance from the start line in metres
    pub distance: f64,
    /// Instantaneous speed in km/h
    pub speed: f64,
    /// Track position X
    pub x: f64,
    /// Track position Y
    pub y: f64,
}

/// One driver's completed circuit traversal within a session.
///
/// Immutable once loaded. The anomaly flags record why a lap would be
/// excluded from pace analysis; see [`Lap::is_representative`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lap {
    /// Lap number within the session, starting at 1
    pub number: u32,
    /// Three-letter driver code (e.g. "VER")
    pub driver: String,
    /// Completed lap time, `None` when the lap was incomplete or invalidated
    pub time: Option<Duration>,
    /// Lap ends with a pit entry
    pub pit_in: bool,
    /// Lap starts from the pit lane
    pub pit_out: bool,
    /// Lap ran partly or fully under safety-car conditions
    pub under_safety_car: bool,
    /// Timing provider marked the lap as accurately recorded
    pub is_accurate: bool,
    /// Telemetry samples for this lap, ascending by distance
    pub telemetry: Vec<TelemetrySample>,
}

impl Lap {
    /// Whether this lap reflects genuine race pace.
    ///
    /// A representative lap is accurately recorded, free of pit-lane
    /// artifacts and safety-car interference, and has a completed lap time.
    pub fn is_representative(&self) -> bool {
        self.is_accurate
            && !self.pit_in
            && !self.pit_out
            && !self.under_safety_car
            && self.time.is_some()
    }

    /// Lap time in seconds, when recorded.
    pub fn time_secs(&self) -> Option<f64> {
        self.time.map(|t| t.as_secs_f64())
    }
}
