//! Candidate extraction from decoded registry rows.

mod address;
mod business;

use std::path::Path;

use tracing::{debug, error, info, info_span, trace};

use placedic_model::{CandidateEntry, EntrySet, PipelineOptions};

use crate::error::{IngestError, Result};
use crate::source::{DecodedSource, SourceKind, read_source};

pub use address::address_candidates;
pub use business::business_candidate;

/// Counters for one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractStats {
    pub source: SourceKind,
    /// Rows read from the file.
    pub rows: usize,
    /// Rows with fewer columns than the source requires.
    pub short_rows: usize,
    /// Rows with enough columns that produced no candidate.
    pub filtered_rows: usize,
    /// Candidate pairs produced, duplicates included.
    pub candidates: usize,
    /// Candidate pairs not already present in the entry set.
    pub new_entries: usize,
    /// Undecodable byte sequences replaced with U+FFFD.
    pub replaced_chars: usize,
    /// False when the source failed and the failure was absorbed.
    pub completed: bool,
}

impl ExtractStats {
    pub fn new(source: SourceKind) -> Self {
        Self {
            source,
            rows: 0,
            short_rows: 0,
            filtered_rows: 0,
            candidates: 0,
            new_entries: 0,
            replaced_chars: 0,
            completed: false,
        }
    }

    fn record(&mut self, entries: &mut EntrySet, candidate: CandidateEntry) {
        trace!(reading = %candidate.reading, surface = %candidate.surface, "candidate");
        self.candidates += 1;
        if entries.insert(candidate) {
            self.new_entries += 1;
        }
    }
}

/// Extract candidates from the address table into `entries`.
///
/// # Errors
///
/// Under the strict input policy, returns an error when the file cannot be read
/// or a record cannot be parsed. Under the lenient policy such failures are
/// logged and the stats are returned with `completed == false`.
pub fn extract_addresses(
    path: &Path,
    options: &PipelineOptions,
    entries: &mut EntrySet,
) -> Result<ExtractStats> {
    extract_source(SourceKind::Address, path, options, entries)
}

/// Extract candidates from the business table into `entries`.
///
/// # Errors
///
/// See [`extract_addresses`].
pub fn extract_businesses(
    path: &Path,
    options: &PipelineOptions,
    entries: &mut EntrySet,
) -> Result<ExtractStats> {
    extract_source(SourceKind::Business, path, options, entries)
}

/// Read one source and add its candidates to `entries`, applying the
/// configured input failure policy.
///
/// Candidates collected before a failure stay in `entries`.
pub fn extract_source(
    kind: SourceKind,
    path: &Path,
    options: &PipelineOptions,
    entries: &mut EntrySet,
) -> Result<ExtractStats> {
    let span = info_span!("extract", source = %kind, path = %path.display());
    let _guard = span.enter();

    let mut stats = ExtractStats::new(kind);
    let outcome = read_source(path).and_then(|decoded| {
        stats.replaced_chars = decoded.replaced_chars;
        extract_records(&decoded, options, entries, &mut stats)
    });

    match outcome {
        Ok(()) => {
            stats.completed = true;
            info!(
                rows = stats.rows,
                short_rows = stats.short_rows,
                candidates = stats.candidates,
                new_entries = stats.new_entries,
                "Extraction complete"
            );
            Ok(stats)
        }
        Err(err) if !options.is_strict() => {
            error!(
                error = %err,
                candidates = stats.candidates,
                "Source failed; continuing with the candidates read so far"
            );
            Ok(stats)
        }
        Err(err) => Err(err),
    }
}

fn extract_records(
    decoded: &DecodedSource,
    options: &PipelineOptions,
    entries: &mut EntrySet,
    stats: &mut ExtractStats,
) -> Result<()> {
    let kind = stats.source;
    let mut reader = decoded.csv_reader();
    for result in reader.records() {
        let record = result.map_err(|e| IngestError::CsvRecord {
            path: decoded.path.clone(),
            line: e.position().map_or(0, csv::Position::line),
            source: e,
        })?;
        stats.rows += 1;

        if record.len() < kind.min_columns() {
            stats.short_rows += 1;
            continue;
        }

        let before = stats.candidates;
        match kind {
            SourceKind::Address => {
                for candidate in address_candidates(&record, options.combinations) {
                    stats.record(entries, candidate);
                }
            }
            SourceKind::Business => {
                if let Some(candidate) = business_candidate(&record, options.min_surface_chars) {
                    stats.record(entries, candidate);
                }
            }
        }
        if stats.candidates == before {
            stats.filtered_rows += 1;
            debug!(line = record.position().map(csv::Position::line), "Row produced no candidate");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::SHIFT_JIS;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_source(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&SHIFT_JIS.encode(content).0).unwrap();
        file
    }

    #[test]
    fn test_stats_count_short_and_filtered_rows() {
        let file = create_temp_source(
            "1,\"カブシキガイシャエービーシー\",\"株式会社ABC\"\n\
             a,b\n\
             2,\"エー\",\"A\"\n",
        );
        let mut entries = EntrySet::new();
        let stats = extract_businesses(file.path(), &PipelineOptions::default(), &mut entries)
            .unwrap();

        assert_eq!(stats.rows, 3);
        assert_eq!(stats.short_rows, 1);
        assert_eq!(stats.filtered_rows, 1);
        assert_eq!(stats.candidates, 1);
        assert!(stats.completed);
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_new_entries_counts_only_unique_pairs() {
        let file = create_temp_source(
            "1,\"チヨダ\",\"千代田\"\n\
             2,\"チヨダ\",\"千代田\"\n",
        );
        let mut entries = EntrySet::new();
        let stats = extract_businesses(file.path(), &PipelineOptions::default(), &mut entries)
            .unwrap();

        assert_eq!(stats.candidates, 2);
        assert_eq!(stats.new_entries, 1);
    }

    #[test]
    fn test_missing_source_strict_is_error() {
        let mut entries = EntrySet::new();
        let result = extract_addresses(
            Path::new("/nonexistent/KEN_ALL.CSV"),
            &PipelineOptions::default(),
            &mut entries,
        );
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_missing_source_lenient_is_absorbed() {
        let mut entries = EntrySet::new();
        let options = PipelineOptions::default()
            .with_input_failure(placedic_model::InputFailurePolicy::Lenient);
        let stats =
            extract_addresses(Path::new("/nonexistent/KEN_ALL.CSV"), &options, &mut entries)
                .unwrap();

        assert!(!stats.completed);
        assert_eq!(stats.rows, 0);
        assert!(entries.is_empty());
    }
}
