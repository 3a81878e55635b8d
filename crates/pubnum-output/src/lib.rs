//! Output table derivation and CSV writing.
//!
//! The derived identifier becomes the first column; the export's columns
//! follow in their original order. Files are written as UTF-8 with a BOM so
//! that spreadsheet tools detect the encoding.

mod derive;
mod error;
mod writer;

pub use derive::{DerivationStats, OutputTable, derive_output_table};
pub use error::{OutputError, Result};
pub use writer::{UTF8_BOM, write_csv_file, write_csv_with_bom};
