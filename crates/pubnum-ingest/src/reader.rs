//! CSV file reading.

use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, warn};

use crate::error::{IngestError, Result};
use crate::table::CsvTable;

const UTF8_BOM: char = '\u{feff}';

/// Rejects byte content that starts with a UTF-16 BOM.
///
/// A UTF-8 BOM is accepted; it is stripped while reading headers.
pub fn validate_encoding(bytes: &[u8], path: &Path) -> Result<()> {
    let encoding = match bytes {
        [0xFF, 0xFE, ..] => "UTF-16 LE",
        [0xFE, 0xFF, ..] => "UTF-16 BE",
        _ => return Ok(()),
    };
    Err(IngestError::UnsupportedEncoding {
        path: path.to_path_buf(),
        encoding,
    })
}

/// Reads a CSV export into a [`CsvTable`].
///
/// The first non-blank record is the header row.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let bytes = std::fs::read(path).map_err(|e| IngestError::read(path.to_path_buf(), e))?;
    parse_csv_bytes(&bytes, path)
}

/// Reads CSV content from any reader, e.g. stdin.
///
/// `source` is only used in error messages and logs.
pub fn read_csv_table_from_reader<R: Read>(mut reader: R, source: &Path) -> Result<CsvTable> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| IngestError::read(source.to_path_buf(), e))?;
    parse_csv_bytes(&bytes, source)
}

fn strip_bom(raw: &str) -> String {
    raw.trim_start_matches(UTF8_BOM).to_string()
}

/// A line holding nothing but whitespace; multi-field rows such as `,,` are kept.
fn is_blank_line(record: &csv::StringRecord) -> bool {
    record.len() == 1 && record[0].trim().is_empty()
}

fn parse_csv_bytes(bytes: &[u8], path: &Path) -> Result<CsvTable> {
    validate_encoding(bytes, path)?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();
    let mut padded = 0usize;
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        if is_blank_line(&record) {
            continue;
        }
        let Some(header) = headers.as_ref() else {
            headers = Some(record.iter().map(strip_bom).collect());
            continue;
        };
        if record.len() > header.len() {
            let line = record.position().map_or(0, csv::Position::line);
            return Err(IngestError::CsvParse {
                path: path.to_path_buf(),
                message: format!(
                    "line {line}: expected {} fields, saw {}",
                    header.len(),
                    record.len()
                ),
            });
        }
        if record.len() < header.len() {
            padded += 1;
        }
        let row: Vec<String> = (0..header.len())
            .map(|idx| record.get(idx).unwrap_or("").to_string())
            .collect();
        rows.push(row);
    }

    let Some(headers) = headers else {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    };
    if padded > 0 {
        warn!(
            path = %path.display(),
            padded_rows = padded,
            columns = headers.len(),
            "short rows were padded with empty cells"
        );
    }
    debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "csv loaded"
    );
    Ok(CsvTable::new(headers, rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<CsvTable> {
        parse_csv_bytes(content.as_bytes(), Path::new("test.csv"))
    }

    #[test]
    fn test_single_header() {
        let table = parse("A,B,C\n1,2,3\n4,5,6\n").unwrap();

        assert_eq!(table.headers, vec!["A", "B", "C"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[1], vec!["4", "5", "6"]);
    }

    #[test]
    fn test_utf8_bom_is_stripped_from_header() {
        let table = parse("\u{feff}A,B\n1,2\n").unwrap();

        assert_eq!(table.headers, vec!["A", "B"]);
    }

    #[test]
    fn test_utf16_is_rejected() {
        let result = validate_encoding(&[0xFF, 0xFE, 0x41, 0x00], Path::new("x.csv"));
        assert!(matches!(
            result,
            Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16 LE",
                ..
            })
        ));

        let result = validate_encoding(&[0xFE, 0xFF, 0x00, 0x41], Path::new("x.csv"));
        assert!(matches!(
            result,
            Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16 BE",
                ..
            })
        ));
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(parse(""), Err(IngestError::EmptyCsv { .. })));
        assert!(matches!(parse("\n  \n\n"), Err(IngestError::EmptyCsv { .. })));
    }

    #[test]
    fn test_short_rows_are_padded() {
        let table = parse("A,B,C\n1\n1,2\n").unwrap();

        assert_eq!(table.rows[0], vec!["1", "", ""]);
        assert_eq!(table.rows[1], vec!["1", "2", ""]);
    }

    #[test]
    fn test_long_row_is_a_parse_error() {
        let result = parse("A,B\n1,2\n3,4,EXTRA\n");

        match result {
            Err(IngestError::CsvParse { message, .. }) => {
                assert_eq!(message, "line 3: expected 2 fields, saw 3");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_only_whitespace_lines_are_skipped() {
        let table = parse("A,B\n\n   \n,\n , \n1,2\n").unwrap();

        assert_eq!(table.row_count(), 3);
        assert_eq!(table.rows[0], vec!["", ""]);
        assert_eq!(table.rows[1], vec![" ", " "]);
    }

    #[test]
    fn test_headers_are_kept_verbatim() {
        let table = parse("\u{feff} 公報番号 ,備考 \n1,2\n").unwrap();

        assert_eq!(table.headers, vec![" 公報番号 ", "備考 "]);
    }

    #[test]
    fn test_cells_are_kept_verbatim() {
        let table = parse("A,B\n\" 特開 2009-1 \",x\n").unwrap();

        assert_eq!(table.rows[0][0], " 特開 2009-1 ");
    }

    #[test]
    fn test_invalid_utf8_is_a_parse_error() {
        let result = parse_csv_bytes(b"A,B\n\xff\xfe\xfd,1\n", Path::new("bad.csv"));

        assert!(matches!(result, Err(IngestError::CsvParse { .. })));
    }
}
