//! Address table rows.

use std::ops::Range;

use csv::StringRecord;

use placedic_model::{CandidateEntry, CombinationMode};
use placedic_normalization::clean_field;

/// Columns holding the prefecture, city and town readings.
const READING_COLUMNS: [usize; 3] = [3, 4, 5];

/// Columns holding the prefecture, city and town written forms.
const SURFACE_COLUMNS: [usize; 3] = [6, 7, 8];

const FULL_SPANS: &[Range<usize>] = &[0..3];

const CITY_TOWN_SPANS: &[Range<usize>] = &[0..3, 1..3];

/// Each level alone, the cumulative prefixes, and city + town.
const HIERARCHICAL_SPANS: &[Range<usize>] = &[0..1, 1..2, 2..3, 0..2, 0..3, 1..3];

fn spans(mode: CombinationMode) -> &'static [Range<usize>] {
    match mode {
        CombinationMode::Full => FULL_SPANS,
        CombinationMode::CityTown => CITY_TOWN_SPANS,
        CombinationMode::Hierarchical => HIERARCHICAL_SPANS,
    }
}

/// Candidates for one address row.
///
/// Each combination of consecutive levels selected by `mode` is emitted only
/// when every reading and written component in it is non-empty after
/// cleaning. Rows shorter than nine columns yield nothing.
pub fn address_candidates(record: &StringRecord, mode: CombinationMode) -> Vec<CandidateEntry> {
    let readings = READING_COLUMNS.map(|idx| clean_field(record.get(idx).unwrap_or_default()));
    let surfaces = SURFACE_COLUMNS.map(|idx| clean_field(record.get(idx).unwrap_or_default()));

    spans(mode)
        .iter()
        .filter_map(|span| combine(&readings[span.clone()], &surfaces[span.clone()]))
        .collect()
}

fn combine(readings: &[String], surfaces: &[String]) -> Option<CandidateEntry> {
    if readings.iter().chain(surfaces).any(String::is_empty) {
        return None;
    }
    Some(CandidateEntry::new(readings.concat(), surfaces.concat()))
}
