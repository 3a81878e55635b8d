//! Publication number normalization.
//!
//! Converts a JP search-service publication number and its kind description
//! into a DI publication identifier:
//!
//! - **Prefix rewriting**: era/type tokens such as `特開平0` become `JP` or `JP1`
//! - **Separator stripping**: spaces and hyphens are removed
//! - **Kind suffix**: a parenthesized kind code such as `（Ｂ２）` becomes `B2`
//!
//! # Example
//!
//! ```
//! use pubnum_core::build_output_identifier;
//!
//! assert_eq!(
//!     build_output_identifier("特開平10-123456", "公開特許公報（Ａ）"),
//!     "JP10123456A"
//! );
//! ```

mod kind;
mod number;
mod rules;

pub use kind::{KindSuffix, PCT_INTERNATIONAL_APPLICATION, derive_kind_suffix, parse_kind_code};
pub use number::{normalize_publication_number, rewrite_prefix, strip_separators};
pub use rules::{REWRITE_RULES, RewriteRule};

/// Builds the output identifier for one record.
///
/// Each row is independent; this is safe to map over rows in any order.
pub fn build_output_identifier(raw_number: &str, raw_kind: &str) -> String {
    let mut identifier = normalize_publication_number(raw_number);
    identifier.push_str(&derive_kind_suffix(raw_kind));
    identifier
}

/// Coerces an optional cell value to text; a missing cell becomes empty.
pub fn coerce_field(value: Option<&str>) -> &str {
    value.unwrap_or_default()
}
