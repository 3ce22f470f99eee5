use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use dmap_cli::replay::ReplayOutcome;

/// Print commit acknowledgments, then the visible reports as a table.
pub fn print_summary(outcome: &ReplayOutcome) {
    for category in &outcome.acknowledgments {
        println!("{category} reported. Thank you for helping keep everyone safe!");
    }
    if outcome.missed_commits > 0 {
        println!(
            "{} commit(s) ignored: no location fix or no open draft.",
            outcome.missed_commits
        );
    }

    let session = &outcome.session;
    let visible = session.visible_reports();
    let mut table = Table::new();
    table.set_header(vec![
        "Category",
        "Type",
        "Description",
        "Latitude",
        "Longitude",
        "Date",
        "Time",
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for report in &visible {
        let coordinate = report.coordinate();
        table.add_row(vec![
            Cell::new(report.category()),
            Cell::new(report.kind()),
            Cell::new(report.description()),
            Cell::new(format!("{:.5}", coordinate.latitude)),
            Cell::new(format!("{:.5}", coordinate.longitude)),
            Cell::new(report.date_string()),
            Cell::new(report.time_string()),
        ]);
    }
    println!("{table}");
    println!(
        "{} of {} report(s) visible ({})",
        visible.len(),
        session.store().len(),
        session.selector()
    );
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
