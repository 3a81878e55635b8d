use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use pubnum_cli::types::ConversionSummary;
use pubnum_output::OutputTable;

/// Prints the first `limit` converted rows.
pub fn print_preview(table: &OutputTable, limit: usize) {
    if limit == 0 || table.rows.is_empty() {
        return;
    }
    let mut preview = Table::new();
    preview.set_header(
        table
            .headers
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                if idx == 0 {
                    header_cell(header).fg(Color::Green)
                } else {
                    header_cell(header)
                }
            })
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut preview);
    for row in table.rows.iter().take(limit) {
        let mut cells = Vec::with_capacity(row.len());
        for (idx, value) in row.iter().enumerate() {
            if idx == 0 {
                cells.push(Cell::new(value).add_attribute(Attribute::Bold));
            } else if value.is_empty() {
                cells.push(dim_cell("-"));
            } else {
                cells.push(Cell::new(value));
            }
        }
        preview.add_row(cells);
    }
    println!("Preview (first {} of {} rows)", limit.min(table.rows.len()), table.rows.len());
    println!("{preview}");
}

pub fn print_summary(summary: &ConversionSummary) {
    println!("Input: {}", summary.input);
    match &summary.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, not written)"),
    }
    let stats = &summary.stats;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_summary_table_style(&mut table);
    table.add_row(vec![Cell::new("Rows"), count_cell(stats.rows)]);
    table.add_row(vec![Cell::new("Columns"), count_cell(summary.columns)]);
    table.add_row(vec![Cell::new("Prefix rewritten"), count_cell(stats.rewritten)]);
    table.add_row(vec![Cell::new("Kind suffix added"), count_cell(stats.suffixed)]);
    table.add_row(vec![
        Cell::new("Existing output column replaced"),
        if stats.replaced_existing_column {
            Cell::new("yes").fg(Color::Yellow)
        } else {
            dim_cell("no")
        },
    ]);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
