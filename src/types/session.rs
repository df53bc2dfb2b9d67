//! Session container and classification results

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::Lap;

/// Which session of a race weekend to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionKind {
    /// The grand prix itself
    Race,
    /// The qualifying session preceding it
    Qualifying,
}

/// One row of the session classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedRow {
    /// Finishing position, `None` for non-classified entries
    pub position: Option<u32>,
    /// Three-letter driver code
    pub driver: String,
    /// Entrant team name
    pub team: String,
    /// Total session time, `None` when not recorded (DNF, lapped runners)
    pub total_time: Option<Duration>,
}

/// All laps, telemetry, and results for one `(season, circuit, kind)` triple.
///
/// Created by a [`crate::SessionLoader`], read-only for the remainder of the
/// request, discarded after.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Official event name (e.g. "Monaco Grand Prix")
    pub event_name: String,
    /// Every lap recorded in the session, all drivers interleaved
    pub laps: Vec<Lap>,
    /// Final classification
    pub results: Vec<ClassifiedRow>,
}

impl Session {
    /// The classification row that won the session, if any.
    pub fn winner(&self) -> Option<&ClassifiedRow> {
        self.results.iter().find(|row| row.position == Some(1))
    }
}
