use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use scoresheet_model::{LearningUnitBlock, ScoresResponsible};

use crate::types::BuildResult;

pub fn print_summary(result: &BuildResult) {
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: stdout"),
    }
    println!("Publication date: {}", result.sheet.publication_date);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Unit"),
        header_cell("Year"),
        header_cell("Programs"),
        header_cell("Enrollments"),
        header_cell("Responsible"),
        header_cell("Decimals"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Center);
    let mut total_enrollments = 0usize;
    for block in &result.sheet.learning_unit_years {
        let enrollments: usize = block
            .programs
            .iter()
            .map(|program| program.enrollments.len())
            .sum();
        total_enrollments += enrollments;
        table.add_row(vec![
            Cell::new(&block.acronym)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(block.academic_year),
            Cell::new(block.programs.len()),
            Cell::new(enrollments),
            Cell::new(responsible_label(block)),
            flag_cell(block.decimal_scores),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(total_enrollments).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn responsible_label(block: &LearningUnitBlock) -> String {
    match &block.scores_responsible {
        ScoresResponsible::Single {
            first_name,
            last_name,
            ..
        } => format!("{last_name} {first_name}"),
        ScoresResponsible::All { instructors } => format!("all ({})", instructors.len()),
    }
}

fn flag_cell(value: bool) -> Cell {
    if value {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
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
