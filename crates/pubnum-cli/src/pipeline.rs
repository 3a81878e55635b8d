//! Conversion pipeline: ingest, derive, write.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use pubnum_ingest::{CsvTable, read_csv_table, read_csv_table_from_reader};
use pubnum_output::{OutputTable, derive_output_table, write_csv_file};

use crate::types::{ConversionOptions, ConversionSummary, DEFAULT_OUTPUT_FILE};

/// Where the export is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
}

impl InputSource {
    /// `-` selects stdin; anything else is a file path.
    pub fn from_arg(path: &Path) -> Self {
        if path == Path::new("-") {
            Self::Stdin
        } else {
            Self::File(path.to_path_buf())
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Stdin => "<stdin>".to_string(),
        }
    }
}

/// Converted table plus the run summary.
#[derive(Debug)]
pub struct ConversionResult {
    pub table: OutputTable,
    pub summary: ConversionSummary,
}

/// Default output path: `<stem>_di_numbers.csv` next to the input.
pub fn default_output_path(input: &InputSource) -> PathBuf {
    match input {
        InputSource::File(path) => {
            let stem = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "export".to_string());
            path.with_file_name(format!("{stem}_{DEFAULT_OUTPUT_FILE}"))
        }
        InputSource::Stdin => PathBuf::from(DEFAULT_OUTPUT_FILE),
    }
}

/// Loads the export table.
pub fn ingest(input: &InputSource) -> pubnum_ingest::Result<CsvTable> {
    match input {
        InputSource::File(path) => read_csv_table(path),
        InputSource::Stdin => read_csv_table_from_reader(io::stdin().lock(), Path::new("-")),
    }
}

/// Resolves the required columns and derives the output table.
pub fn convert_table(table: &CsvTable, options: &ConversionOptions) -> Result<OutputTable> {
    let columns = table.require_columns(&options.number_column, &options.kind_column)?;
    debug!(
        number_column = %options.number_column,
        number_index = columns.number,
        kind_column = %options.kind_column,
        kind_index = columns.kind,
        "required columns resolved"
    );
    Ok(derive_output_table(table, columns, &options.output_column))
}

/// Runs a full conversion for one input.
pub fn run_conversion(input: &InputSource, options: &ConversionOptions) -> Result<ConversionResult> {
    let input_name = input.display_name();
    let convert_span = info_span!("convert", input = %input_name);
    let _convert_guard = convert_span.enter();

    let ingest_start = Instant::now();
    let table = info_span!("ingest")
        .in_scope(|| ingest(input))
        .with_context(|| format!("read input: {input_name}"))?;
    info!(
        rows = table.row_count(),
        columns = table.column_count(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    let derive_start = Instant::now();
    let output = info_span!("derive").in_scope(|| convert_table(&table, options))?;
    info!(
        rows = output.stats.rows,
        rewritten = output.stats.rewritten,
        suffixed = output.stats.suffixed,
        duration_ms = derive_start.elapsed().as_millis(),
        "derive complete"
    );

    let output_path = if options.dry_run {
        info!("dry run, output not written");
        None
    } else {
        let path = options
            .output_path
            .clone()
            .unwrap_or_else(|| default_output_path(input));
        let write_start = Instant::now();
        info_span!("write", path = %path.display())
            .in_scope(|| write_csv_file(&output, &path))
            .with_context(|| format!("write output: {}", path.display()))?;
        info!(
            path = %path.display(),
            duration_ms = write_start.elapsed().as_millis(),
            "write complete"
        );
        Some(path)
    };

    let summary = ConversionSummary {
        input: input_name,
        output: output_path,
        columns: output.headers.len(),
        stats: output.stats,
    };
    Ok(ConversionResult {
        table: output,
        summary,
    })
}
