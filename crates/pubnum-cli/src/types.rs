use std::path::PathBuf;

use serde::Serialize;

use pubnum_output::DerivationStats;

/// Column holding the publication number in search-service exports.
pub const DEFAULT_NUMBER_COLUMN: &str = "公報番号(抄録リンク)";
/// Column holding the publication kind description.
pub const DEFAULT_KIND_COLUMN: &str = "公報種別";
/// Name of the derived column inserted in front of the export's columns.
pub const DEFAULT_OUTPUT_COLUMN: &str = "DI公報番号";
/// Rows shown in the preview table.
pub const DEFAULT_PREVIEW_ROWS: usize = 50;
/// Output file name used when the export is read from stdin.
pub const DEFAULT_OUTPUT_FILE: &str = "di_numbers.csv";

/// Settings for a single conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOptions {
    pub number_column: String,
    pub kind_column: String,
    pub output_column: String,
    /// Explicit output path; derived from the input when `None`.
    pub output_path: Option<PathBuf>,
    /// Convert and report without writing a file.
    pub dry_run: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            number_column: DEFAULT_NUMBER_COLUMN.to_string(),
            kind_column: DEFAULT_KIND_COLUMN.to_string(),
            output_column: DEFAULT_OUTPUT_COLUMN.to_string(),
            output_path: None,
            dry_run: false,
        }
    }
}

impl ConversionOptions {
    #[must_use]
    pub fn with_number_column(mut self, name: impl Into<String>) -> Self {
        self.number_column = name.into();
        self
    }

    #[must_use]
    pub fn with_kind_column(mut self, name: impl Into<String>) -> Self {
        self.kind_column = name.into();
        self
    }

    #[must_use]
    pub fn with_output_column(mut self, name: impl Into<String>) -> Self {
        self.output_column = name.into();
        self
    }

    #[must_use]
    pub fn with_output_path(mut self, path: Option<PathBuf>) -> Self {
        self.output_path = path;
        self
    }

    #[must_use]
    pub fn with_dry_run(mut self, enable: bool) -> Self {
        self.dry_run = enable;
        self
    }
}

/// Outcome of a conversion run, printed as a table or JSON.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionSummary {
    pub input: String,
    /// `None` for dry runs.
    pub output: Option<PathBuf>,
    pub columns: usize,
    #[serde(flatten)]
    pub stats: DerivationStats,
}
