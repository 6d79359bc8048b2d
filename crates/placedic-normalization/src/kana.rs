//! Katakana → hiragana folding and reading validation.

use unicode_normalization::UnicodeNormalization;

/// Katakana that fold to hiragana by subtracting [`KANA_OFFSET`] (ァ..=ン).
const KATAKANA_FOLD_RANGE: std::ops::RangeInclusive<u32> = 0x30A1..=0x30F3;

/// Hiragana block accepted in readings (ぁ..=ゖ).
const HIRAGANA_RANGE: std::ops::RangeInclusive<u32> = 0x3041..=0x3096;

/// Distance between a katakana code point and its hiragana counterpart.
const KANA_OFFSET: u32 = 0x60;

/// Non-hiragana characters allowed in a reading: prolonged sound mark and the
/// hiragana iteration marks.
pub const READING_EXTENSION_MARKS: [char; 3] = ['ー', 'ゝ', 'ゞ'];

/// Fold katakana to hiragana.
///
/// The input is NFKC-normalized first, so half-width katakana (`ｶﾞ`) become
/// full-width (`ガ`) before folding. ヵ, ヶ and ヴ are mapped explicitly; every
/// other character passes through unchanged.
///
/// # Example
///
/// ```
/// use placedic_normalization::fold_kana;
///
/// assert_eq!(fold_kana("トウキョウト"), "とうきょうと");
/// assert_eq!(fold_kana("ｶﾌﾞｼｷｶﾞｲｼｬ"), "かぶしきがいしゃ");
/// ```
pub fn fold_kana(text: &str) -> String {
    text.nfkc().map(fold_char).collect()
}

fn fold_char(ch: char) -> char {
    match ch {
        'ヵ' => 'か',
        'ヶ' => 'け',
        'ヴ' => 'ゔ',
        _ => {
            let cp = ch as u32;
            if KATAKANA_FOLD_RANGE.contains(&cp) {
                char::from_u32(cp - KANA_OFFSET).unwrap_or(ch)
            } else {
                ch
            }
        }
    }
}

/// Returns true when `reading` is non-empty and consists only of hiragana and
/// [`READING_EXTENSION_MARKS`].
pub fn is_valid_reading(reading: &str) -> bool {
    !reading.is_empty()
        && reading
            .chars()
            .all(|ch| HIRAGANA_RANGE.contains(&(ch as u32)) || READING_EXTENSION_MARKS.contains(&ch))
}
