//! Cleaning of raw registry fields.

use std::sync::LazyLock;

use regex::Regex;

/// Town-name placeholder used by the registry for "anything not listed below".
pub const PLACEHOLDER_PHRASE: &str = "以下に掲載がない場合";

/// Parenthesized annotation in either width; the brackets need not match in width.
static PARENTHESIZED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[（(].*?[）)]").expect("Invalid parenthesized-note regex")
});

/// Clean one raw field.
///
/// Removes every parenthesized annotation, returns an empty string for the
/// placeholder row, and strips all whitespace (including U+3000) anywhere in
/// the field.
///
/// # Example
///
/// ```
/// use placedic_normalization::clean_field;
///
/// assert_eq!(clean_field("銀座（1丁目）"), "銀座");
/// assert_eq!(clean_field("以下に掲載がない場合"), "");
/// assert_eq!(clean_field(" 千代田　区 "), "千代田区");
/// ```
pub fn clean_field(raw: &str) -> String {
    let without_notes = PARENTHESIZED.replace_all(raw, "");
    if without_notes.contains(PLACEHOLDER_PHRASE) {
        return String::new();
    }
    without_notes
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_width_parentheses() {
        assert_eq!(clean_field("銀座（1丁目）"), "銀座");
        assert_eq!(clean_field("ギンザ（1チョウメ）"), "ギンザ");
    }

    #[test]
    fn test_half_width_parentheses() {
        assert_eq!(clean_field("大通西(1-19丁目)"), "大通西");
    }

    #[test]
    fn test_mixed_width_parentheses() {
        assert_eq!(clean_field("本町(番地）"), "本町");
        assert_eq!(clean_field("本町（番地)"), "本町");
    }

    #[test]
    fn test_multiple_groups_non_greedy() {
        assert_eq!(clean_field("上（A）中（B）下"), "上中下");
    }

    #[test]
    fn test_unclosed_parenthesis_kept() {
        assert_eq!(clean_field("藤野（400、400－2番地"), "藤野（400、400－2番地");
    }

    #[test]
    fn test_placeholder_phrase() {
        assert_eq!(clean_field("以下に掲載がない場合"), "");
        assert_eq!(clean_field("千代田区 以下に掲載がない場合"), "");
    }

    #[test]
    fn test_placeholder_inside_parentheses_is_removed_first() {
        assert_eq!(clean_field("本町（以下に掲載がない場合）"), "本町");
    }

    #[test]
    fn test_whitespace_everywhere() {
        assert_eq!(clean_field("　千代田 区\t"), "千代田区");
        assert_eq!(clean_field("   "), "");
    }

    #[test]
    fn test_empty() {
        assert_eq!(clean_field(""), "");
    }
}
