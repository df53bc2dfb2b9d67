//! Shared lap filtering and selection helpers

use crate::types::Lap;

/// Laps that reflect genuine pace: accurately recorded, free of pit and
/// safety-car artifacts, with a completed lap time.
pub fn representative(laps: &[Lap]) -> impl Iterator<Item = &Lap> {
    laps.iter().filter(|lap| lap.is_representative())
}

/// One driver's representative laps, recorded order preserved.
pub fn representative_for_driver<'a>(
    laps: &'a [Lap],
    driver: &'a str,
) -> impl Iterator<Item = &'a Lap> {
    representative(laps).filter(move |lap| lap.driver == driver)
}

/// The lap with the lowest recorded time, first one on a tie.
pub fn fastest<'a>(laps: impl IntoIterator<Item = &'a Lap>) -> Option<&'a Lap> {
    laps.into_iter()
        .filter(|lap| lap.time.is_some())
        .min_by_key(|lap| lap.time)
}
