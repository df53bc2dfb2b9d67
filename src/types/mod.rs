//! Core types for session data and analysis results.
//!
//! Session-side types ([`Session`], [`Lap`], [`TelemetrySample`],
//! [`ClassifiedRow`]) model what a [`crate::SessionLoader`] returns and are
//! read-only for the remainder of a request. Result-side types
//! ([`StrategyEstimate`], [`TelemetryComparison`], [`CircuitLayout`]) are
//! request-scoped values derived purely from a session and the request
//! parameters; they serialize to the plain structured data the presentation
//! layer renders.

mod comparison;
mod compound;
mod estimate;
mod lap;
mod session;

pub use comparison::{CircuitLayout, PaceSeries, SpeedTrace, TelemetryComparison, WinnerInfo};
pub use compound::Compound;
pub use estimate::StrategyEstimate;
pub use lap::{Lap, TelemetrySample};
pub use session::{ClassifiedRow, Session, SessionKind};
