//! Terminal rendering of profiles with `comfy-table`.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tabscope_core::{NOT_APPLICABLE, NULL_SUM};
use tabscope_engine::DateFormat;
use tabscope_model::{Profile, ProfileResponse};

/// Prints a response: the profile tables on stdout, or the error on stderr.
pub fn print_response(response: &ProfileResponse) {
    match response {
        ProfileResponse::Profile(profile) => print_profile(profile),
        ProfileResponse::Error { error } => eprintln!("error: {error}"),
    }
}

pub fn print_profile(profile: &Profile) {
    println!("Columns: {}", profile.columns.len());
    println!("{}", schema_table(profile));
    println!("Summary statistics:");
    println!("{}", description_table(profile));
    println!("First {} rows:", profile.sample_len());
    println!("{}", sample_table(profile));
}

/// One row per column: type, null count, and sum.
pub fn schema_table(profile: &Profile) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Nulls"),
        header_cell("Sum"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for column in &profile.columns {
        let column_type = profile
            .column_types
            .get(column)
            .map(String::as_str)
            .unwrap_or(NOT_APPLICABLE);
        let nulls = profile.null_counts.get(column).copied().unwrap_or_default();
        let sum = match profile.sum.get(column) {
            Some(sum) => value_cell(sum),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            Cell::new(column)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(column_type),
            count_cell(nulls),
            sum,
        ]);
    }
    table
}

/// Statistics by column, one row per statistic.
pub fn description_table(profile: &Profile) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("Statistic")];
    header.extend(profile.columns.iter().map(|c| header_cell(c)));
    table.set_header(header);
    apply_table_style(&mut table);
    for index in 1..=profile.columns.len() {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for row in &profile.description {
        let mut cells = row.iter();
        let Some(label) = cells.next() else {
            continue;
        };
        let mut out = vec![Cell::new(label).add_attribute(Attribute::Bold)];
        out.extend(cells.map(|value| value_cell(value)));
        table.add_row(out);
    }
    table
}

/// The sampled rows, formatted as in the profile.
pub fn sample_table(profile: &Profile) -> Table {
    let mut table = Table::new();
    table.set_header(profile.columns.iter().map(|c| header_cell(c)).collect::<Vec<_>>());
    apply_table_style(&mut table);
    for row in &profile.top_20 {
        table.add_row(
            profile
                .columns
                .iter()
                .map(|column| match row.get(column) {
                    Some(value) => value_cell(value),
                    None => dim_cell(NOT_APPLICABLE),
                })
                .collect::<Vec<_>>(),
        );
    }
    table
}

/// Candidate date formats in detection order.
pub fn formats_table(formats: &[DateFormat]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Priority"),
        header_cell("Pattern"),
        header_cell("strptime"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, format) in formats.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(format.pattern()),
            dim_cell(format.strptime()),
        ]);
    }
    table
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
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
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

/// Placeholders are dimmed so real values stand out.
fn value_cell(value: &str) -> Cell {
    if value == NOT_APPLICABLE || value == NULL_SUM {
        dim_cell(value)
    } else {
        Cell::new(value)
    }
}

fn count_cell(count: usize) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count).fg(Color::Yellow)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
