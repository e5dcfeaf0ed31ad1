use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use recast_cli::pipeline::FieldProfile;
use recast_core::Record;

pub fn print_profile(input: &str, fields: &[FieldProfile], first: Option<&Record>) {
    println!("Input: {input}");
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Records"),
        header_cell("Max values"),
    ]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    for index in 1..=2 {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    for field in fields {
        let max_values = if field.max_values > 1 {
            Cell::new(field.max_values).fg(Color::Yellow)
        } else {
            Cell::new(field.max_values)
        };
        table.add_row(vec![
            Cell::new(&field.name).fg(Color::Cyan),
            Cell::new(field.records),
            max_values,
        ]);
    }
    println!("{table}");
    match first {
        Some(record) => println!("First record: {record}"),
        None => println!("No records."),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}
