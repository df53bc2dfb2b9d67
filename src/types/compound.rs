//! Tyre compound selection and pace deltas

use serde::{Deserialize, Serialize};

/// Dry tyre compound choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Compound {
    Soft,
    Medium,
    Hard,
}

impl Compound {
    /// All compounds, fastest first.
    pub const ALL: [Compound; 3] = [Compound::Soft, Compound::Medium, Compound::Hard];

    /// Parse the upstream compound name.
    ///
    /// Returns `None` for unrecognized names; callers treat an unknown
    /// compound as neutral (zero pace delta) rather than rejecting it.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "SOFT" => Some(Compound::Soft),
            "MEDIUM" => Some(Compound::Medium),
            "HARD" => Some(Compound::Hard),
            _ => None,
        }
    }

    /// Canonical upstream name.
    pub fn name(self) -> &'static str {
        match self {
            Compound::Soft => "SOFT",
            Compound::Medium => "MEDIUM",
            Compound::Hard => "HARD",
        }
    }

    /// Fixed per-lap pace adjustment in seconds relative to the medium.
    pub fn delta_secs(self) -> f64 {
        match self {
            Compound::Soft => -0.5,
            Compound::Medium => 0.0,
            Compound::Hard => 0.5,
        }
    }
}

impl std::fmt::Display for Compound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
