//! Terminal tables for the `list` and `validate` subcommands.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use texttools_model::{ToolStatus, ToolValidationResult, ValidationReport};
use texttools_transform::Registry;

/// Build the catalogue table: key, label, category, in display order.
pub fn tool_table(registry: &Registry) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Key"),
        header_cell("Label"),
        header_cell("Category"),
        header_cell("Kind"),
    ]);
    apply_table_style(&mut table);
    for descriptor in registry.descriptors() {
        table.add_row(vec![
            Cell::new(descriptor.key).fg(Color::Blue),
            Cell::new(descriptor.label),
            Cell::new(descriptor.category.label()),
            match descriptor.kind {
                texttools_transform::TransformKind::Generator => dim_cell("generator"),
                texttools_transform::TransformKind::Derived => Cell::new("derived"),
            },
        ]);
    }
    table
}

/// Print the full validation report: totals, per-tool table, and failure
/// details.
pub fn print_summary(report: &ValidationReport) {
    println!(
        "Validated {} tools in {:.0}ms ({:.1}% success rate)",
        report.total_tools,
        report.execution_time_ms,
        report.success_rate * 100.0
    );
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Tool"),
        header_cell("Status"),
        header_cell("Cases"),
        header_cell("Failed"),
        header_cell("Warnings"),
        header_cell("Time (ms)"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    for result in report.tools.values() {
        table.add_row(vec![
            Cell::new(&result.tool).fg(Color::Blue),
            status_cell(result.status),
            Cell::new(result.cases.len()),
            count_cell(result.failed_case_count(), Color::Red),
            count_cell(result.warnings.len(), Color::Yellow),
            Cell::new(format!("{:.1}", result.execution_time_ms)),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!(
            "{} passed / {} failed / {} warnings",
            report.passed, report.failed, report.warnings
        )),
        dim_cell("-"),
        count_cell(report.failed, Color::Red).add_attribute(Attribute::Bold),
        count_cell(report.warnings, Color::Yellow).add_attribute(Attribute::Bold),
        Cell::new(format!("{:.0}", report.execution_time_ms)).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    for result in report.tools.values() {
        if result.status == ToolStatus::Failed {
            eprintln!("Failures in {}:", result.tool);
            for error in &result.errors {
                eprintln!("- {error}");
            }
        }
    }
}

/// Print one tool's case-by-case outcome.
pub fn print_tool_detail(result: &ToolValidationResult) {
    println!(
        "{}: {} ({:.1}ms)",
        result.tool,
        status_label(result.status),
        result.execution_time_ms
    );
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Input"),
        header_cell("Expected"),
        header_cell("Actual"),
        header_cell("Result"),
    ]);
    apply_detail_table_style(&mut table);
    for case in &result.cases {
        table.add_row(vec![
            Cell::new(preview(&case.input)),
            optional_cell(case.expected.as_deref()),
            optional_cell(case.actual.as_deref()),
            if case.passed {
                Cell::new("ok").fg(Color::Green)
            } else {
                Cell::new("FAIL")
                    .fg(Color::Red)
                    .add_attribute(Attribute::Bold)
            },
        ]);
    }
    println!("{table}");
    for warning in &result.warnings {
        println!("warning: {warning}");
    }
    for error in &result.errors {
        eprintln!("- {error}");
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_detail_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell(status: ToolStatus) -> Cell {
    match status {
        ToolStatus::Passed => Cell::new("PASS").fg(Color::Green),
        ToolStatus::Failed => Cell::new("FAIL")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        ToolStatus::Warning => Cell::new("WARN").fg(Color::Yellow),
    }
}

fn status_label(status: ToolStatus) -> &'static str {
    match status {
        ToolStatus::Passed => "passed",
        ToolStatus::Failed => "failed",
        ToolStatus::Warning => "passed with warnings",
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).add_attribute(Attribute::Dim)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(preview(value)),
        None => dim_cell("-"),
    }
}

/// Keep table cells short; full values live in the JSON output.
fn preview(value: &str) -> String {
    const MAX: usize = 40;
    let mut out: String = value.chars().take(MAX).collect();
    if value.chars().count() > MAX {
        out.push('…');
    }
    out.replace('\n', "\\n")
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
