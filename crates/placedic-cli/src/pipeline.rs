//! End-to-end dictionary build: extract both sources, assemble, write.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use placedic_ingest::{ExtractStats, SourceKind, extract_source};
use placedic_model::{DictionaryParams, EntrySet, PipelineOptions};
use placedic_output::{AssemblyStats, assemble, write_dictionary};

/// Inputs of one dictionary build.
#[derive(Debug, Clone)]
pub struct BuildRequest {
    pub address_csv: PathBuf,
    pub business_csv: PathBuf,
    pub output: PathBuf,
    pub dictionary: DictionaryParams,
    pub options: PipelineOptions,
    /// Run extraction and assembly without writing the output file.
    pub dry_run: bool,
}

/// Outcome of one dictionary build.
#[derive(Debug, Clone)]
pub struct BuildResult {
    pub sources: Vec<ExtractStats>,
    pub assembly: AssemblyStats,
    /// Output path, or `None` for a dry run.
    pub output: Option<PathBuf>,
    pub elapsed: Duration,
}

impl BuildResult {
    /// True when any source failed and its failure was absorbed.
    pub fn has_incomplete_sources(&self) -> bool {
        self.sources.iter().any(|stats| !stats.completed)
    }
}

/// Run the full pipeline.
///
/// # Errors
///
/// Fails when a source cannot be read under the strict input policy, or when
/// the output file cannot be written.
pub fn run_build(request: &BuildRequest) -> Result<BuildResult> {
    let start = Instant::now();
    let mut entries = EntrySet::new();
    let mut sources = Vec::with_capacity(2);

    for (kind, path) in [
        (SourceKind::Address, &request.address_csv),
        (SourceKind::Business, &request.business_csv),
    ] {
        let stats = extract_source(kind, path, &request.options, &mut entries)
            .with_context(|| format!("extract {kind} source"))?;
        sources.push(stats);
    }
    info!(entries = entries.len(), "Collected candidate pairs");

    let assembly = info_span!("assemble").in_scope(|| {
        assemble(
            &entries,
            request.dictionary,
            request.options.validate_readings,
        )
    });

    let output = if request.dry_run {
        info!("Dry run; skipping output");
        None
    } else {
        write_dictionary(&request.output, &assembly).context("write dictionary")?;
        Some(request.output.clone())
    };

    Ok(BuildResult {
        sources,
        assembly: assembly.stats,
        output,
        elapsed: start.elapsed(),
    })
}
