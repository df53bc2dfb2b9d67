//! Race strategy estimation and driver telemetry comparison over Formula 1
//! timing data.
//!
//! Gridpace provides two pure computational components over an injected
//! session data source:
//!
//! - [`StrategyEstimator`]: fits a pace-degradation trend to historical race
//!   laps, extrapolates it across a standardised race distance, and layers
//!   tyre-compound and pit-loss adjustments on top.
//! - [`TelemetryComparator`]: extracts two drivers' race-pace series and
//!   fastest-lap speed traces, plus race-winner metadata and circuit layout.
//!
//! Both depend only on the [`SessionLoader`] trait; data acquisition,
//! caching, and rendering live outside this crate. Results are plain
//! serializable values, so any presentation layer can consume them.
//!
//! # Example
//!
//! ```rust,no_run
//! use gridpace::{SessionLoader, StrategyEstimator};
//! use gridpace::types::{Session, SessionKind};
//!
//! struct ArchiveLoader;
//!
//! #[async_trait::async_trait]
//! impl SessionLoader for ArchiveLoader {
//!     async fn load(&self, season: u16, circuit: &str, kind: SessionKind) -> Option<Session> {
//!         // Resolve from your timing archive here.
//!         None
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let estimator = StrategyEstimator::new(ArchiveLoader);
//!     match estimator.estimate("Monaco", "SOFT", 1).await {
//!         Ok(estimate) => println!("{} min, {}", estimate.total_time_min, estimate.stop_recommendation),
//!         Err(err) => eprintln!("{err}"),
//!     }
//! }
//! ```

// Core types and error handling
mod clock;
mod error;
pub mod laps;
pub mod reference;
pub mod regression;
#[cfg(test)]
mod test_utils;
pub mod types;

// Analysis components and their data-source seam
mod loader;
mod strategy;
mod telemetry;

// Core exports
pub use clock::{format_duration, format_lap_time};
pub use error::{AnalysisError, Result};
pub use types::*;

// Component exports
pub use loader::SessionLoader;
pub use regression::{MIN_FIT_LAPS, PaceModel, fit_pace_model};
pub use strategy::StrategyEstimator;
pub use telemetry::TelemetryComparator;
