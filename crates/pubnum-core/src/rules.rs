//! Ordered prefix rewrite rules.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// A single prefix rewrite: every match of `pattern` becomes `replacement`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RewriteRule {
    pub pattern: &'static str,
    pub replacement: &'static str,
}

/// Rewrite rules in evaluation order.
///
/// Every rule runs against the output of the previous one. Era-specific
/// tokens come before the generic `特許|特表|特開|実登` rule, otherwise
/// `特開平05` would be rewritten to `JP平05`.
pub const REWRITE_RULES: [RewriteRule; 3] = [
    // Heisei 01-09 and all Showa documents.
    RewriteRule {
        pattern: "特開平0|特表平0|特公平0|実開平0|実表平0|実公平0|特開昭|特公昭|特表昭|実開昭|実公昭|実表昭",
        replacement: "JP",
    },
    // Heisei 10 and later keep the leading 1.
    RewriteRule {
        pattern: "特開平1|特表平1|実開平1|実表平1|実公平1",
        replacement: "JP1",
    },
    RewriteRule {
        pattern: "特許|特表|特開|実登",
        replacement: "JP",
    },
];

static COMPILED_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    REWRITE_RULES
        .iter()
        .map(|rule| {
            let regex = Regex::new(rule.pattern).expect("Invalid rewrite rule regex");
            (regex, rule.replacement)
        })
        .collect()
});

pub(crate) fn compiled_rules() -> &'static [(Regex, &'static str)] {
    &COMPILED_RULES
}
