use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use placedic_cli::pipeline::BuildResult;
use placedic_ingest::ExtractStats;

pub fn print_summary(result: &BuildResult) {
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, nothing written)"),
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("Rows"),
        header_cell("Short"),
        header_cell("No entry"),
        header_cell("Candidates"),
        header_cell("New"),
        header_cell("Replaced"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    for index in 1..=6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for stats in &result.sources {
        table.add_row(source_row(stats));
    }
    println!("{table}");

    let assembly = &result.assembly;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Distinct pairs"),
        header_cell("Empty"),
        header_cell("Invalid reading"),
        header_cell("Merged"),
        header_cell("Lines"),
    ]);
    apply_table_style(&mut table);
    for index in 0..5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(assembly.candidates),
        count_cell(assembly.empty, Color::DarkGrey),
        count_cell(assembly.invalid_readings, Color::Yellow),
        count_cell(assembly.merged, Color::DarkGrey),
        Cell::new(assembly.lines).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    println!("Elapsed: {:.2?}", result.elapsed);
}

fn source_row(stats: &ExtractStats) -> Vec<Cell> {
    vec![
        Cell::new(stats.source.label())
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        Cell::new(stats.rows),
        count_cell(stats.short_rows, Color::DarkGrey),
        count_cell(stats.filtered_rows, Color::DarkGrey),
        Cell::new(stats.candidates),
        Cell::new(stats.new_entries),
        count_cell(stats.replaced_chars, Color::Yellow),
        status_cell(stats.completed),
    ]
}

fn status_cell(completed: bool) -> Cell {
    if completed {
        Cell::new("ok").fg(Color::Green)
    } else {
        Cell::new("FAILED")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count).fg(color)
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
