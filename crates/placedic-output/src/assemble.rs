//! Turning the candidate set into sorted dictionary lines.

use std::collections::BTreeSet;

use tracing::{debug, info};

use placedic_model::{CandidateEntry, DictionaryLine, DictionaryParams, EntrySet};
use placedic_normalization::{fold_kana, is_valid_reading};

/// Counters for one assembly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssemblyStats {
    /// Distinct candidates handed to the assembler.
    pub candidates: usize,
    /// Candidates with an empty reading or surface after folding.
    pub empty: usize,
    /// Candidates whose folded reading is not pure hiragana.
    pub invalid_readings: usize,
    /// Candidates that collapsed onto another one after folding.
    pub merged: usize,
    /// Lines in the final dictionary.
    pub lines: usize,
}

/// Sorted dictionary lines ready to be written.
#[derive(Debug, Clone)]
pub struct Assembly {
    pub lines: Vec<DictionaryLine>,
    pub stats: AssemblyStats,
}

/// Fold, filter, deduplicate and sort the collected candidates.
///
/// Readings are folded to hiragana. Pairs with an empty side are skipped, and
/// when `validate_readings` is set, pairs whose reading still contains
/// anything other than hiragana and extension marks are dropped without error.
/// Lines are ordered by reading and then surface.
pub fn assemble(
    entries: &EntrySet,
    params: DictionaryParams,
    validate_readings: bool,
) -> Assembly {
    let mut stats = AssemblyStats {
        candidates: entries.len(),
        ..AssemblyStats::default()
    };
    let mut folded = BTreeSet::new();

    for entry in entries {
        let candidate = CandidateEntry::new(fold_kana(&entry.reading), entry.surface.clone());
        if candidate.is_blank() {
            stats.empty += 1;
            continue;
        }
        if validate_readings && !is_valid_reading(&candidate.reading) {
            debug!(
                reading = %candidate.reading,
                surface = %candidate.surface,
                "Dropping invalid reading"
            );
            stats.invalid_readings += 1;
            continue;
        }
        if !folded.insert(candidate) {
            stats.merged += 1;
        }
    }

    let lines: Vec<DictionaryLine> = folded
        .into_iter()
        .map(|entry| DictionaryLine::new(entry.reading, entry.surface, params))
        .collect();
    stats.lines = lines.len();

    info!(
        candidates = stats.candidates,
        invalid_readings = stats.invalid_readings,
        lines = stats.lines,
        "Assembly complete"
    );
    Assembly { lines, stats }
}
