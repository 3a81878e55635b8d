//! Publication number normalization.

use std::borrow::Cow;

use regex::NoExpand;

use crate::rules::compiled_rules;

/// Normalizes a raw publication number.
///
/// Applies every rewrite rule in order, then removes spaces and hyphens.
/// Input that matches no rule passes through with only separators removed.
pub fn normalize_publication_number(raw: &str) -> String {
    strip_separators(&rewrite_prefix(raw))
}

/// Applies the prefix rewrite rules without touching separators.
///
/// Returns `Cow::Borrowed` when no rule matched.
pub fn rewrite_prefix(raw: &str) -> Cow<'_, str> {
    let mut text = Cow::Borrowed(raw);
    for (regex, replacement) in compiled_rules() {
        let rewritten = match regex.replace_all(&text, NoExpand(*replacement)) {
            Cow::Borrowed(_) => continue,
            Cow::Owned(rewritten) => rewritten,
        };
        text = Cow::Owned(rewritten);
    }
    text
}

/// Removes ASCII spaces and hyphens.
pub fn strip_separators(value: &str) -> String {
    value.chars().filter(|ch| !matches!(ch, ' ' | '-')).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heisei_before_ten_uses_jp() {
        assert_eq!(normalize_publication_number("特開平05-123456"), "JP5123456");
        assert_eq!(normalize_publication_number("実公平07-012345"), "JP7012345");
    }

    #[test]
    fn test_heisei_ten_and_later_uses_jp1() {
        assert_eq!(normalize_publication_number("特開平10-123456"), "JP10123456");
        assert_eq!(normalize_publication_number("特表平11-500001"), "JP11500001");
    }

    #[test]
    fn test_showa_uses_jp() {
        assert_eq!(normalize_publication_number("特公昭63-012345"), "JP63012345");
        assert_eq!(normalize_publication_number("実開昭60-1234"), "JP601234");
    }

    #[test]
    fn test_generic_tokens() {
        assert_eq!(normalize_publication_number("特開2009-009682"), "JP2009009682");
        assert_eq!(normalize_publication_number("特表2015-501234"), "JP2015501234");
        assert_eq!(normalize_publication_number("実登3201234"), "JP3201234");
        assert_eq!(normalize_publication_number("特許6543210"), "JP6543210");
    }

    #[test]
    fn test_era_rule_takes_priority_over_generic_rule() {
        // The generic rule alone would leave `JP平05`.
        assert_eq!(normalize_publication_number("特開平05-1"), "JP51");
    }

    #[test]
    fn test_later_rules_still_run_after_earlier_match() {
        assert_eq!(
            normalize_publication_number("特開昭60-1 特許2"),
            "JP601JP2"
        );
    }

    #[test]
    fn test_unmatched_text_only_loses_separators() {
        assert_eq!(normalize_publication_number("WO 2020-123456"), "WO2020123456");
        assert_eq!(normalize_publication_number(""), "");
    }

    #[test]
    fn test_full_width_separators_are_kept() {
        // Only ASCII space and hyphen are separators.
        assert_eq!(normalize_publication_number("特開２００９－１"), "JP２００９－１");
        assert_eq!(normalize_publication_number("US\u{3000}1"), "US\u{3000}1");
    }

    #[test]
    fn test_rewrite_prefix_borrows_when_unchanged() {
        assert!(matches!(rewrite_prefix("WO2020-1"), Cow::Borrowed("WO2020-1")));
        assert!(matches!(rewrite_prefix("特許1"), Cow::Owned(_)));
    }

    #[test]
    fn test_strip_separators() {
        assert_eq!(strip_separators(" JP 2009-0096-82 "), "JP2009009682");
    }
}
