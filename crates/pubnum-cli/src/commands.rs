use anyhow::{Context, Result};
use comfy_table::Table;

use pubnum_cli::pipeline::{ConversionResult, InputSource, run_conversion};
use pubnum_cli::types::ConversionOptions;
use pubnum_core::{REWRITE_RULES, build_output_identifier};

use crate::cli::{ConvertArgs, NormalizeArgs, RulesArgs};
use crate::summary::{apply_table_style, print_preview, print_summary};

pub fn run_convert(args: &ConvertArgs) -> Result<ConversionResult> {
    let input = InputSource::from_arg(&args.input);
    let options = ConversionOptions::default()
        .with_number_column(&args.number_column)
        .with_kind_column(&args.kind_column)
        .with_output_column(&args.output_column)
        .with_output_path(args.output.clone())
        .with_dry_run(args.dry_run);
    let result = run_conversion(&input, &options)?;
    if args.json {
        let json = serde_json::to_string_pretty(&result.summary).context("serialize summary")?;
        println!("{json}");
    } else {
        if !args.no_preview {
            print_preview(&result.table, args.preview);
        }
        print_summary(&result.summary);
    }
    Ok(result)
}

pub fn run_normalize(args: &NormalizeArgs) {
    println!("{}", build_output_identifier(&args.number, &args.kind));
}

pub fn run_rules(args: &RulesArgs) -> Result<()> {
    if args.json {
        let json = serde_json::to_string_pretty(&REWRITE_RULES).context("serialize rules")?;
        println!("{json}");
        return Ok(());
    }
    let mut table = Table::new();
    table.set_header(vec!["Order", "Pattern", "Replacement"]);
    apply_table_style(&mut table);
    for (order, rule) in REWRITE_RULES.iter().enumerate() {
        table.add_row(vec![
            (order + 1).to_string(),
            rule.pattern.replace('|', " | "),
            rule.replacement.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}
