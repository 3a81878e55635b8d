//! Integration tests for the conversion pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use pubnum_cli::pipeline::{InputSource, default_output_path, run_conversion};
use pubnum_cli::types::ConversionOptions;
use pubnum_ingest::IngestError;
use pubnum_output::UTF8_BOM;

const EXPORT: &str = "\u{feff}公報番号(抄録リンク),公報種別,発明の名称\n\
特開平10-123456,公開特許公報（Ａ）,撮像装置\n\
特許第1234567号,特許公報（B2）,\"制御方法, 及びプログラム\"\n\
WO2020-123456,特許協力条約に基づいて公開された国際出願,通信システム\n\
実登3201234,登録実用新案公報（Ｕ）,\n";

fn write_export(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write export");
    path
}

#[test]
fn converts_export_to_bom_prefixed_csv() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_export(dir.path(), "export.csv", EXPORT);
    let source = InputSource::from_arg(&input);

    let result = run_conversion(&source, &ConversionOptions::default()).expect("convert");

    let output = dir.path().join("export_di_numbers.csv");
    assert_eq!(result.summary.output.as_deref(), Some(output.as_path()));
    assert_eq!(result.summary.stats.rows, 4);
    assert_eq!(result.summary.stats.rewritten, 3);
    assert_eq!(result.summary.stats.suffixed, 3);
    assert!(!result.summary.stats.replaced_existing_column);

    let bytes = fs::read(&output).expect("read output");
    assert!(bytes.starts_with(UTF8_BOM));
    let text = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).expect("utf-8 output");
    insta::assert_snapshot!(text.trim_end(), @r#"
    DI公報番号,公報番号(抄録リンク),公報種別,発明の名称
    JP10123456A,特開平10-123456,公開特許公報（Ａ）,撮像装置
    JP第1234567号B2,特許第1234567号,特許公報（B2）,"制御方法, 及びプログラム"
    WO2020123456,WO2020-123456,特許協力条約に基づいて公開された国際出願,通信システム
    JP3201234U,実登3201234,登録実用新案公報（Ｕ）,
    "#);
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_export(dir.path(), "export.csv", EXPORT);
    let options = ConversionOptions::default().with_dry_run(true);

    let result = run_conversion(&InputSource::from_arg(&input), &options).expect("convert");

    assert!(result.summary.output.is_none());
    assert!(!default_output_path(&InputSource::from_arg(&input)).exists());
    assert_eq!(result.table.rows[0][0], "JP10123456A");
}

#[test]
fn explicit_output_path_and_custom_columns() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_export(
        dir.path(),
        "custom.csv",
        "number,kind,DI\n特開2009-009682,公開特許公報(A),old\n",
    );
    let output = dir.path().join("out.csv");
    let options = ConversionOptions::default()
        .with_number_column("number")
        .with_kind_column("kind")
        .with_output_column("DI")
        .with_output_path(Some(output.clone()));

    let result = run_conversion(&InputSource::from_arg(&input), &options).expect("convert");

    assert!(result.summary.stats.replaced_existing_column);
    assert_eq!(result.table.headers, vec!["DI", "number", "kind"]);
    let bytes = fs::read(&output).expect("read output");
    let text = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).expect("utf-8 output");
    assert_eq!(text, "DI,number,kind\nJP2009009682A,特開2009-009682,公開特許公報(A)\n");
}

#[test]
fn missing_columns_stop_the_conversion() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_export(dir.path(), "other.csv", "公報番号,種別\n1,2\n");

    let error = run_conversion(&InputSource::from_arg(&input), &ConversionOptions::default())
        .unwrap_err();

    let ingest_error = error.downcast_ref::<IngestError>().expect("ingest error");
    assert!(matches!(
        ingest_error,
        IngestError::MissingRequiredField { missing }
            if missing == &["公報番号(抄録リンク)", "公報種別"]
    ));
    assert!(!dir.path().join("other_di_numbers.csv").exists());
}

#[test]
fn unreadable_input_is_reported_with_context() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("absent.csv");

    let error = run_conversion(&InputSource::from_arg(&input), &ConversionOptions::default())
        .unwrap_err();

    assert!(format!("{error:#}").starts_with("read input: "));
    let ingest_error = error.downcast_ref::<IngestError>().expect("ingest error");
    assert!(ingest_error.is_unreadable_input());
}

#[test]
fn row_wider_than_header_writes_no_output() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_export(
        dir.path(),
        "wide.csv",
        "公報番号(抄録リンク),公報種別\n特許1,特許公報(B2),EXTRA-DATA\n,\n",
    );

    let error = run_conversion(&InputSource::from_arg(&input), &ConversionOptions::default())
        .unwrap_err();

    let ingest_error = error.downcast_ref::<IngestError>().expect("ingest error");
    assert!(matches!(ingest_error, IngestError::CsvParse { .. }));
    assert!(ingest_error.is_unreadable_input());
    assert!(!dir.path().join("wide_di_numbers.csv").exists());
}

#[test]
fn rows_of_empty_cells_are_kept() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_export(
        dir.path(),
        "sparse.csv",
        "公報番号(抄録リンク),公報種別\n特許1,特許公報(B2)\n,\n",
    );
    let options = ConversionOptions::default().with_dry_run(true);

    let result = run_conversion(&InputSource::from_arg(&input), &options).expect("convert");

    assert_eq!(result.summary.stats.rows, 2);
    assert_eq!(result.table.rows[1], vec!["", "", ""]);
}

#[test]
fn output_path_defaults() {
    assert_eq!(
        default_output_path(&InputSource::from_arg(Path::new("data/export.csv"))),
        PathBuf::from("data/export_di_numbers.csv")
    );
    assert_eq!(
        default_output_path(&InputSource::from_arg(Path::new("-"))),
        PathBuf::from("di_numbers.csv")
    );
}
