//! Derived identifier column.

use serde::Serialize;
use tracing::trace;

use pubnum_core::{build_output_identifier, coerce_field, parse_kind_code, rewrite_prefix};
use pubnum_ingest::{CsvTable, RequiredColumns, header_matches};

/// Table ready for writing: the derived column followed by the source columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub stats: DerivationStats,
}

/// Counts collected while deriving identifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DerivationStats {
    /// Rows converted.
    pub rows: usize,
    /// Rows whose number matched at least one rewrite rule.
    pub rewritten: usize,
    /// Rows that received a kind suffix.
    pub suffixed: usize,
    /// Whether the export already had a column named like the output column.
    pub replaced_existing_column: bool,
}

/// Builds the output table.
///
/// An existing column named `output_column` is dropped so that the derived
/// column appears exactly once, in front.
pub fn derive_output_table(
    table: &CsvTable,
    columns: RequiredColumns,
    output_column: &str,
) -> OutputTable {
    let existing = table.column_index(output_column);
    let kept: Vec<usize> = (0..table.column_count())
        .filter(|&idx| !header_matches(&table.headers[idx], output_column))
        .collect();

    let mut headers = Vec::with_capacity(kept.len() + 1);
    headers.push(output_column.to_string());
    headers.extend(kept.iter().map(|&idx| table.headers[idx].clone()));

    let mut stats = DerivationStats {
        replaced_existing_column: existing.is_some(),
        ..DerivationStats::default()
    };
    let mut rows = Vec::with_capacity(table.row_count());
    for (row_idx, source) in table.rows.iter().enumerate() {
        let number = coerce_field(table.cell(row_idx, columns.number));
        let kind = coerce_field(table.cell(row_idx, columns.kind));
        let identifier = build_output_identifier(number, kind);
        trace!(
            row = row_idx,
            identifier = %identifier,
            "derived identifier"
        );

        stats.rows += 1;
        if rewrite_prefix(number) != number {
            stats.rewritten += 1;
        }
        if parse_kind_code(kind).is_some() {
            stats.suffixed += 1;
        }

        let mut row = Vec::with_capacity(kept.len() + 1);
        row.push(identifier);
        row.extend(
            kept.iter()
                .map(|&idx| source.get(idx).cloned().unwrap_or_default()),
        );
        rows.push(row);
    }

    OutputTable {
        headers,
        rows,
        stats,
    }
}
