//! Reading and decoding of registry files.

use std::fmt;
use std::path::{Path, PathBuf};

use encoding_rs::SHIFT_JIS;

use crate::error::{IngestError, Result};

/// The two registry tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Nationwide address table (`KEN_ALL.CSV`).
    Address,
    /// Business/office address table (`JIGYOSYO.CSV`).
    Business,
}

impl SourceKind {
    /// Minimum number of columns a row needs to be considered.
    #[must_use]
    pub const fn min_columns(&self) -> usize {
        match self {
            Self::Address => 9,
            Self::Business => 3,
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Address => "address",
            Self::Business => "business",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A registry file decoded to UTF-8.
#[derive(Debug, Clone)]
pub struct DecodedSource {
    pub path: PathBuf,
    pub text: String,
    /// Number of byte sequences that were not valid cp932 and became U+FFFD.
    pub replaced_chars: usize,
}

impl DecodedSource {
    /// Decode raw cp932 bytes, substituting U+FFFD for malformed sequences.
    pub fn decode(path: &Path, bytes: &[u8]) -> Self {
        let (text, had_errors) = SHIFT_JIS.decode_without_bom_handling(bytes);
        // cp932 cannot encode U+FFFD, so every occurrence is a substitution.
        let replaced_chars = if had_errors {
            text.matches(char::REPLACEMENT_CHARACTER).count()
        } else {
            0
        };
        Self {
            path: path.to_path_buf(),
            text: text.into_owned(),
            replaced_chars,
        }
    }

    /// Headerless CSV reader over the decoded text. Rows may differ in length.
    pub fn csv_reader(&self) -> csv::Reader<&[u8]> {
        csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(self.text.as_bytes())
    }
}

/// Read a whole registry file and decode it from cp932.
///
/// # Errors
///
/// Returns [`IngestError::FileNotFound`] or [`IngestError::FileRead`] when the
/// file cannot be read. Undecodable bytes never produce an error.
pub fn read_source(path: &Path) -> Result<DecodedSource> {
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let decoded = DecodedSource::decode(path, &bytes);
    if decoded.replaced_chars > 0 {
        tracing::warn!(
            path = %path.display(),
            replaced = decoded.replaced_chars,
            "Source contains bytes that are not valid cp932; substituted U+FFFD"
        );
    }
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_source(bytes: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file
    }

    #[test]
    fn test_decode_cp932() {
        let (bytes, _, _) = SHIFT_JIS.encode("東京都,トウキョウト\n");
        let decoded = DecodedSource::decode(Path::new("x.csv"), &bytes);

        assert_eq!(decoded.text, "東京都,トウキョウト\n");
        assert_eq!(decoded.replaced_chars, 0);
    }

    #[test]
    fn test_decode_half_width_katakana() {
        let (bytes, _, _) = SHIFT_JIS.encode("ﾄｳｷｮｳﾄ");
        assert_eq!(bytes.len(), 6);
        let decoded = DecodedSource::decode(Path::new("x.csv"), &bytes);
        assert_eq!(decoded.text, "ﾄｳｷｮｳﾄ");
    }

    #[test]
    fn test_decode_invalid_bytes_replaced() {
        let mut bytes = SHIFT_JIS.encode("千代田").0.into_owned();
        bytes.extend_from_slice(&[0x81, 0x20]);
        let decoded = DecodedSource::decode(Path::new("x.csv"), &bytes);

        assert!(decoded.text.starts_with("千代田"));
        assert!(decoded.text.contains(char::REPLACEMENT_CHARACTER));
        assert_eq!(decoded.replaced_chars, 1);
    }

    #[test]
    fn test_read_source_missing_file() {
        let result = read_source(Path::new("/nonexistent/KEN_ALL.CSV"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_csv_reader_headerless_and_flexible() {
        let (bytes, _, _) = SHIFT_JIS.encode("a,b,c\nd,e\n");
        let file = create_temp_source(&bytes);
        let decoded = read_source(file.path()).unwrap();

        let lengths: Vec<usize> = decoded
            .csv_reader()
            .records()
            .map(|r| r.unwrap().len())
            .collect();
        assert_eq!(lengths, vec![3, 2]);
    }

    #[test]
    fn test_min_columns() {
        assert_eq!(SourceKind::Address.min_columns(), 9);
        assert_eq!(SourceKind::Business.min_columns(), 3);
    }
}
