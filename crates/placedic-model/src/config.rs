//! TOML configuration file.
//!
//! Every table and field is optional; anything left out keeps its default.
//!
//! ```toml
//! [dictionary]
//! left_id = 1847
//! right_id = 1847
//! cost = 8000
//!
//! [pipeline]
//! combinations = "city-town"
//! validate_readings = true
//! input_failure = "lenient"
//! min_surface_chars = 2
//!
//! [output]
//! path = "mozcdic-ut-place-names.txt"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dictionary::DictionaryParams;
use crate::error::{ConfigError, Result};
use crate::options::PipelineOptions;

/// Output file name used when neither the config nor the command line names one.
pub const DEFAULT_OUTPUT_FILE: &str = "mozcdic-ut-place-names.txt";

/// Output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSettings {
    pub path: PathBuf,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

/// Complete configuration for one dictionary build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    pub dictionary: DictionaryParams,
    pub pipeline: PipelineOptions,
    pub output: OutputSettings,
}

impl PipelineConfig {
    /// Load a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable, or not valid TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ConfigError::FileRead {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;
        toml::from_str(&text).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{CombinationMode, InputFailurePolicy};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_load_partial_config_keeps_defaults() {
        let file = create_temp_config("[dictionary]\ncost = 6000\n");
        let config = PipelineConfig::load(file.path()).unwrap();

        assert_eq!(config.dictionary.cost, 6000);
        assert_eq!(config.dictionary.left_id, 1847);
        assert_eq!(config.pipeline, PipelineOptions::default());
        assert_eq!(config.output.path, PathBuf::from(DEFAULT_OUTPUT_FILE));
    }

    #[test]
    fn test_load_pipeline_section() {
        let file = create_temp_config(
            "[pipeline]\ncombinations = \"city-town\"\ninput_failure = \"lenient\"\nvalidate_readings = false\n",
        );
        let config = PipelineConfig::load(file.path()).unwrap();

        assert_eq!(config.pipeline.combinations, CombinationMode::CityTown);
        assert_eq!(config.pipeline.input_failure, InputFailurePolicy::Lenient);
        assert!(!config.pipeline.validate_readings);
        assert_eq!(config.pipeline.min_surface_chars, 2);
    }

    #[test]
    fn test_load_missing_file() {
        let result = PipelineConfig::load(Path::new("/nonexistent/placedic.toml"));
        assert!(matches!(result, Err(ConfigError::FileNotFound { .. })));
    }

    #[test]
    fn test_load_unknown_section_rejected() {
        let file = create_temp_config("[study]\nid = 1\n");
        let result = PipelineConfig::load(file.path());
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_misspelled_keys_rejected() {
        for content in [
            "[pipeline]\ninput_failures = \"lenient\"\n",
            "[pipeline]\nvalidate_reading = false\n",
            "[dictionary]\ncosts = 1\n",
            "[output]\npaths = \"out.txt\"\n",
        ] {
            let file = create_temp_config(content);
            let result = PipelineConfig::load(file.path());
            assert!(
                matches!(result, Err(ConfigError::Parse { .. })),
                "accepted: {content}"
            );
        }
    }
}
