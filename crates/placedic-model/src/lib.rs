//! Shared data model for the place-name dictionary pipeline.
//!
//! The pipeline turns registry rows into [`CandidateEntry`] pairs, collects
//! them into an [`EntrySet`], and finally renders [`DictionaryLine`]s using the
//! part-of-speech IDs and cost carried by [`DictionaryParams`].

pub mod config;
pub mod dictionary;
pub mod entry;
pub mod error;
pub mod options;

pub use config::{DEFAULT_OUTPUT_FILE, OutputSettings, PipelineConfig};
pub use dictionary::{DEFAULT_COST, DictionaryLine, DictionaryParams, POS_ID_PLACE_NAME};
pub use entry::{CandidateEntry, EntrySet};
pub use error::{ConfigError, Result};
pub use options::{CombinationMode, InputFailurePolicy, PipelineOptions};
