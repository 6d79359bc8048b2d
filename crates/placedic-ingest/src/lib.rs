//! Japan Post registry ingestion.
//!
//! Reads the two registry CSV files (Shift_JIS / cp932, no header row) and turns
//! their rows into [`CandidateEntry`](placedic_model::CandidateEntry) pairs.
//!
//! # Sources
//!
//! - **Address table** (`KEN_ALL.CSV`): columns 3-5 hold the prefecture, city
//!   and town readings, columns 6-8 the written forms.
//! - **Business table** (`JIGYOSYO.CSV`): column 1 holds the reading, column 2
//!   the office name.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use placedic_ingest::{extract_addresses, extract_businesses};
//! use placedic_model::{EntrySet, PipelineOptions};
//!
//! let options = PipelineOptions::default();
//! let mut entries = EntrySet::new();
//! extract_addresses(Path::new("KEN_ALL.CSV"), &options, &mut entries)?;
//! extract_businesses(Path::new("JIGYOSYO.CSV"), &options, &mut entries)?;
//! ```

mod error;
mod extract;
mod source;

// === Error Types ===
pub use error::{IngestError, Result};

// === Source Decoding ===
pub use source::{DecodedSource, SourceKind, read_source};

// === Extraction ===
pub use extract::{
    ExtractStats, address_candidates, business_candidate, extract_addresses, extract_businesses,
    extract_source,
};
