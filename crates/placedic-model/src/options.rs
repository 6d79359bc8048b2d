//! Options selecting between the pipeline behaviors found in the registry converters.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which address combinations are emitted for each registry row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CombinationMode {
    /// Prefecture + city + town only.
    Full,
    /// The full combination plus city + town.
    CityTown,
    /// Every single level, every cumulative prefix, and city + town.
    #[default]
    Hierarchical,
}

impl CombinationMode {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::CityTown => "city-town",
            Self::Hierarchical => "hierarchical",
        }
    }
}

impl fmt::Display for CombinationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What happens when a source file cannot be opened or read to the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputFailurePolicy {
    /// Abort the run.
    #[default]
    Strict,
    /// Log the failure and keep whatever the source produced before it.
    Lenient,
}

/// Options controlling extraction and assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineOptions {
    /// Address combinations to emit.
    pub combinations: CombinationMode,

    /// Drop entries whose folded reading is not pure hiragana.
    pub validate_readings: bool,

    /// Severity of an unreadable source file.
    pub input_failure: InputFailurePolicy,

    /// Minimum character count of a business surface form (0 or 1 disables the guard).
    pub min_surface_chars: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            combinations: CombinationMode::Hierarchical,
            validate_readings: true,
            input_failure: InputFailurePolicy::Strict,
            min_surface_chars: 2,
        }
    }
}

impl PipelineOptions {
    /// Behavior of the simplest converter: full combinations only, no reading
    /// validation, unreadable inputs absorbed, no surface length guard.
    pub fn legacy_simple() -> Self {
        Self {
            combinations: CombinationMode::Full,
            validate_readings: false,
            input_failure: InputFailurePolicy::Lenient,
            min_surface_chars: 0,
        }
    }

    #[must_use]
    pub fn with_combinations(mut self, mode: CombinationMode) -> Self {
        self.combinations = mode;
        self
    }

    #[must_use]
    pub fn with_validation(mut self, enable: bool) -> Self {
        self.validate_readings = enable;
        self
    }

    #[must_use]
    pub fn with_input_failure(mut self, policy: InputFailurePolicy) -> Self {
        self.input_failure = policy;
        self
    }

    #[must_use]
    pub fn with_min_surface_chars(mut self, min: usize) -> Self {
        self.min_surface_chars = min;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.input_failure == InputFailurePolicy::Strict
    }
}
