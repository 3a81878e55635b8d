//! BOM-prefixed CSV writing.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::{Terminator, WriterBuilder};
use tracing::debug;

use crate::derive::OutputTable;
use crate::error::{OutputError, Result};

/// UTF-8 byte order mark written at the start of every output file.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Writes the table as UTF-8 CSV, preceded by a BOM.
pub fn write_csv_with_bom<W: Write>(table: &OutputTable, mut writer: W) -> Result<()> {
    writer.write_all(UTF8_BOM).map_err(csv::Error::from)?;
    let mut csv_writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);
    csv_writer.write_record(&table.headers)?;
    for row in &table.rows {
        csv_writer.write_record(row)?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Writes the table to `path`, replacing any existing file.
pub fn write_csv_file(table: &OutputTable, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_csv_with_bom(table, BufWriter::new(file))?;
    debug!(
        path = %path.display(),
        rows = table.rows.len(),
        "output written"
    );
    Ok(())
}
