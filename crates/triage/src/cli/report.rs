use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use console::style;
use triage_lib::{Bucket, RunSummary, Termination};

pub fn print_summary(summary: &RunSummary) {
    if summary.relocated() == 0 && summary.skipped == 0 {
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        Cell::new("Bucket").fg(Color::Cyan),
        Cell::new("Files").fg(Color::Cyan),
    ]);

    for bucket in Bucket::ALL {
        let count = summary.relocations.get(&bucket).copied().unwrap_or(0);
        table.add_row(vec![Cell::new(bucket.as_str()), Cell::new(count)]);
    }
    table.add_row(vec![Cell::new("skipped"), Cell::new(summary.skipped)]);

    if summary.termination == Termination::Undone {
        table.add_row(vec![
            Cell::new("undone").fg(Color::Yellow),
            Cell::new(summary.undone).fg(Color::Yellow),
        ]);
    }

    println!();
    println!("{}", table);
    println!(
        "{} {} of {} files not yet offered",
        style("·").dim(),
        summary.remaining,
        summary.total
    );
}
