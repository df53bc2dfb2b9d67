//! Fixed reference data exposed for input validation and strategy maths

/// Circuits with historical timing coverage, in calendar order.
pub const CIRCUITS: [&str; 22] = [
    "Bahrain",
    "Saudi Arabia",
    "Australia",
    "Azerbaijan",
    "Miami",
    "Monaco",
    "Spain",
    "Canada",
    "Austria",
    "Great Britain",
    "Hungary",
    "Belgium",
    "Netherlands",
    "Italy",
    "Singapore",
    "Japan",
    "Qatar",
    "USA",
    "Mexico",
    "Brazil",
    "Las Vegas",
    "Abu Dhabi",
];

/// Three-letter driver codes available for comparison.
pub const DRIVER_CODES: [&str; 20] = [
    "VER", "PER", "HAM", "RUS", "LEC", "SAI", "NOR", "PIA", "ALO", "STR", "GAS", "OCO", "ALB",
    "SAR", "TSU", "RIC", "BOT", "ZHO", "HUL", "MAG",
];

/// Seasons with published timing data, most recent first.
pub const SEASONS: [u16; 4] = [2024, 2023, 2022, 2021];

/// Season whose race data trains the degradation model.
pub const REFERENCE_SEASON: u16 = 2023;

/// Standardised race distance used for pace extrapolation, in laps.
pub const RACE_DISTANCE_LAPS: u32 = 57;

/// Average time lost to a pit stop, in seconds.
pub const PIT_LOSS_SECONDS: f64 = 22.0;

static ONE_STOP_LAPS: [u32; 1] = [25];
static TWO_STOP_LAPS: [u32; 2] = [18, 38];

/// Standardised pit windows for a given stop count.
///
/// Returns `None` for stop counts without a published window (three or
/// more). That gap is deliberate: callers surface it rather than invent
/// windows, and no pit penalty applies to such plans.
pub fn pit_windows(stops: u32) -> Option<&'static [u32]> {
    match stops {
        0 => Some(&[]),
        1 => Some(&ONE_STOP_LAPS),
        2 => Some(&TWO_STOP_LAPS),
        _ => None,
    }
}
