//! Publication export ingestion.
//!
//! Loads a search-service CSV export into an in-memory [`CsvTable`] and
//! resolves the columns the normalizer needs.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use pubnum_ingest::read_csv_table;
//!
//! let table = read_csv_table(Path::new("export.csv"))?;
//! let columns = table.require_columns("公報番号(抄録リンク)", "公報種別")?;
//! ```

mod error;
mod reader;
mod table;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use reader::{read_csv_table, read_csv_table_from_reader, validate_encoding};

// === Table ===
pub use table::{CsvTable, RequiredColumns, header_matches};
