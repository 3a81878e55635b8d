//! Kind code suffix extraction.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Kind description used for PCT international publications.
///
/// Records of this kind never carry a suffix.
pub const PCT_INTERNATIONAL_APPLICATION: &str = "特許協力条約に基づいて公開された国際出願";

/// `(A)`, `(b2)` and similar, after NFKC folding of full-width forms.
static KIND_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([A-Za-z])([0-9]?)\)").expect("Invalid kind code regex"));

/// A kind code: one upper-case letter and an optional digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindSuffix {
    pub letter: char,
    pub digit: Option<char>,
}

impl fmt::Display for KindSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter)?;
        if let Some(digit) = self.digit {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

/// Extracts the kind code from a kind description.
///
/// Returns `None` for the PCT international publication kind and for text
/// without a parenthesized code. Only the first code is used.
pub fn parse_kind_code(raw_kind: &str) -> Option<KindSuffix> {
    let normalized: String = raw_kind.nfkc().collect();
    let normalized = normalized.trim();
    if normalized == PCT_INTERNATIONAL_APPLICATION {
        return None;
    }
    let captures = KIND_CODE_REGEX.captures(normalized)?;
    let letter = captures.get(1)?.as_str().chars().next()?;
    let digit = captures
        .get(2)
        .and_then(|digit| digit.as_str().chars().next());
    Some(KindSuffix {
        letter: letter.to_ascii_uppercase(),
        digit,
    })
}

/// Derives the identifier suffix from a kind description.
///
/// Yields an empty string when no kind code applies.
pub fn derive_kind_suffix(raw_kind: &str) -> String {
    parse_kind_code(raw_kind)
        .map(|suffix| suffix.to_string())
        .unwrap_or_default()
}
