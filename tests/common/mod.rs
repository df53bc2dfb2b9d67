//! Shared fixture builders for integration tests

// Each test binary uses its own subset of these builders.
#![allow(dead_code)]

use std::collections::HashMap;
use std::time::Duration;

use gridpace::SessionLoader;
use gridpace::types::{ClassifiedRow, Lap, Session, SessionKind, TelemetrySample};

/// Route component logs through a test subscriber, once per test binary.
/// `RUST_LOG` controls what shows up in the captured output.
pub fn init_tracing() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// In-memory loader keyed by `(season, circuit, kind)`.
#[derive(Default)]
pub struct FixtureLoader {
    sessions: HashMap<(u16, String, SessionKind), Session>,
}

impl FixtureLoader {
    pub fn new() -> Self {
        init_tracing();
        Self::default()
    }

    pub fn with_session(
        mut self,
        season: u16,
        circuit: &str,
        kind: SessionKind,
        session: Session,
    ) -> Self {
        self.sessions.insert((season, circuit.to_string(), kind), session);
        self
    }
}

#[async_trait::async_trait]
impl SessionLoader for FixtureLoader {
    async fn load(&self, season: u16, circuit: &str, kind: SessionKind) -> Option<Session> {
        self.sessions.get(&(season, circuit.to_string(), kind)).cloned()
    }
}

/// A representative lap with the given time in seconds.
pub fn lap(number: u32, driver: &str, secs: f64) -> Lap {
    Lap {
        number,
        driver: driver.to_string(),
        time: Some(Duration::from_secs_f64(secs)),
        pit_in: false,
        pit_out: false,
        under_safety_car: false,
        is_accurate: true,
        telemetry: vec![],
    }
}

/// A representative lap carrying telemetry samples.
pub fn lap_with_telemetry(
    number: u32,
    driver: &str,
    secs: f64,
    telemetry: Vec<TelemetrySample>,
) -> Lap {
    let mut lap = lap(number, driver, secs);
    lap.telemetry = telemetry;
    lap
}

/// A telemetry sample with position coordinates derived from distance.
pub fn sample(distance: f64, speed: f64) -> TelemetrySample {
    TelemetrySample { distance, speed, x: distance, y: distance / 2.0 }
}

/// Representative laps whose times follow `intercept + slope * n` exactly.
pub fn linear_race_laps(driver: &str, count: u32, intercept: f64, slope: f64) -> Vec<Lap> {
    (1..=count)
        .map(|n| lap(n, driver, intercept + slope * f64::from(n)))
        .collect()
}

/// One classification row.
pub fn result_row(
    position: Option<u32>,
    driver: &str,
    team: &str,
    total_time: Option<Duration>,
) -> ClassifiedRow {
    ClassifiedRow {
        position,
        driver: driver.to_string(),
        team: team.to_string(),
        total_time,
    }
}

/// A session with the given laps and classification.
pub fn session(event_name: &str, laps: Vec<Lap>, results: Vec<ClassifiedRow>) -> Session {
    Session { event_name: event_name.to_string(), laps, results }
}
