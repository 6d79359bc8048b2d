//! Mozc dictionary file writer.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::{info, info_span};

use crate::assemble::Assembly;
use crate::error::{OutputError, Result};

/// Render every line of `assembly` to `writer`, each terminated by `\n`.
///
/// # Errors
///
/// Returns any I/O error reported by the writer.
pub fn render_dictionary<W: Write>(assembly: &Assembly, mut writer: W) -> io::Result<()> {
    for line in &assembly.lines {
        writeln!(writer, "{line}")?;
    }
    writer.flush()
}

/// Write the dictionary to `path`, replacing any existing file.
///
/// Returns the number of lines written. A failed write leaves whatever was
/// already written in place.
///
/// # Errors
///
/// Returns [`OutputError::Create`] if the file cannot be created and
/// [`OutputError::Write`] if writing or flushing fails.
pub fn write_dictionary(path: &Path, assembly: &Assembly) -> Result<usize> {
    let span = info_span!("write", path = %path.display());
    let _guard = span.enter();

    let file = File::create(path).map_err(|e| OutputError::Create {
        path: path.to_path_buf(),
        source: e,
    })?;
    render_dictionary(assembly, BufWriter::new(file)).map_err(|e| OutputError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;

    info!(lines = assembly.lines.len(), "Dictionary written");
    Ok(assembly.lines.len())
}
