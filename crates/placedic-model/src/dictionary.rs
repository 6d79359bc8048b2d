//! Mozc dictionary line format.

use std::fmt;

use serde::{Deserialize, Serialize};

/// IPADIC part-of-speech ID for 名詞,固有名詞,地域,一般 (proper noun, place name).
pub const POS_ID_PLACE_NAME: u16 = 1847;

/// Default word cost for generated entries.
pub const DEFAULT_COST: i32 = 8000;

/// Part-of-speech IDs and cost written on every line of a generated dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DictionaryParams {
    pub left_id: u16,
    pub right_id: u16,
    pub cost: i32,
}

impl Default for DictionaryParams {
    fn default() -> Self {
        Self {
            left_id: POS_ID_PLACE_NAME,
            right_id: POS_ID_PLACE_NAME,
            cost: DEFAULT_COST,
        }
    }
}

impl DictionaryParams {
    /// Use the same ID for both the left and right context.
    #[must_use]
    pub fn with_pos_id(mut self, pos_id: u16) -> Self {
        self.left_id = pos_id;
        self.right_id = pos_id;
        self
    }

    #[must_use]
    pub fn with_cost(mut self, cost: i32) -> Self {
        self.cost = cost;
        self
    }
}

/// One entry of the output file.
///
/// Displays as `reading\tleft_id\tright_id\tcost\tsurface` without a trailing
/// newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryLine {
    pub reading: String,
    pub left_id: u16,
    pub right_id: u16,
    pub cost: i32,
    pub surface: String,
}

impl DictionaryLine {
    pub fn new(reading: String, surface: String, params: DictionaryParams) -> Self {
        Self {
            reading,
            left_id: params.left_id,
            right_id: params.right_id,
            cost: params.cost,
            surface,
        }
    }
}

impl fmt::Display for DictionaryLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}",
            self.reading, self.left_id, self.right_id, self.cost, self.surface
        )
    }
}
