//! Dictionary assembly and output.
//!
//! [`assemble`] folds, validates, deduplicates and sorts the collected
//! candidates; [`write_dictionary`] writes the result as a Mozc dictionary
//! text file (`reading\tleft_id\tright_id\tcost\tsurface`, one per line).

mod assemble;
mod error;
mod writer;

pub use assemble::{Assembly, AssemblyStats, assemble};
pub use error::{OutputError, Result};
pub use writer::{render_dictionary, write_dictionary};
