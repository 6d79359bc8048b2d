//! Text normalization for Japan Post registry fields.
//!
//! - [`fold_kana`]: NFKC followed by katakana → hiragana folding
//! - [`is_valid_reading`]: checks a folded reading is hiragana plus extension marks
//! - [`clean_field`]: strips annotations, placeholder rows, and whitespace
//!
//! All functions are pure and total.

mod clean;
mod kana;

pub use clean::{PLACEHOLDER_PHRASE, clean_field};
pub use kana::{READING_EXTENSION_MARKS, fold_kana, is_valid_reading};
