//! Business table rows.

use csv::StringRecord;

use placedic_model::CandidateEntry;
use placedic_normalization::clean_field;

const READING_COLUMN: usize = 1;
const SURFACE_COLUMN: usize = 2;

/// Candidate for one business row, if it qualifies.
///
/// Both fields must be non-empty after cleaning and the surface must have at
/// least `min_surface_chars` characters.
pub fn business_candidate(record: &StringRecord, min_surface_chars: usize) -> Option<CandidateEntry> {
    let reading = clean_field(record.get(READING_COLUMN)?);
    let surface = clean_field(record.get(SURFACE_COLUMN)?);
    if reading.is_empty() || surface.is_empty() {
        return None;
    }
    if surface.chars().count() < min_surface_chars {
        return None;
    }
    Some(CandidateEntry::new(reading, surface))
}
